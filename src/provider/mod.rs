//! Market data providers.
//!
//! [`MarketDataProvider`] is the seam the chart fetches through. CoinGecko and
//! Binance implement it as borrowed sub-clients of
//! [`MarketClient`](crate::client::MarketClient); tests implement it with
//! canned series.
//!
//! Each provider keeps a static symbol table. Lookups come in two flavours:
//! `lookup(symbol)` returns `None` for an unmapped symbol, while
//! `resolve_provider_id` falls back to the provider's bitcoin identifier.

pub mod binance;
pub mod coingecko;

use crate::domain::series::{Bar, Point, Series};
use crate::error::ProviderError;
use crate::shared::{AssetSymbol, Period, ProviderId, SeriesKind};
use rust_decimal::Decimal;

/// A source of price history and spot prices.
#[allow(async_fn_in_trait)]
pub trait MarketDataProvider {
    /// Human-readable provider name, used in error text and logs.
    fn name(&self) -> &'static str;

    /// Maps an asset symbol label to a provider identifier.
    ///
    /// Never empty: unknown symbols resolve to the provider's default.
    fn resolve_provider_id(&self, symbol: &str) -> ProviderId;

    fn provider_id(&self, symbol: AssetSymbol) -> ProviderId {
        self.resolve_provider_id(symbol.as_str())
    }

    async fn fetch_scalar_series(
        &self,
        id: &ProviderId,
        period: Period,
    ) -> Result<Vec<Point>, ProviderError>;

    async fn fetch_bar_series(&self, id: &ProviderId, period: Period)
        -> Result<Vec<Bar>, ProviderError>;

    /// Latest spot price, `None` when the payload has no usable price.
    async fn latest_price(&self, id: &ProviderId) -> Result<Option<Decimal>, ProviderError>;

    /// Latest spot price with a missing value reported as zero.
    async fn fetch_latest_price(&self, id: &ProviderId) -> Result<Decimal, ProviderError> {
        Ok(self.latest_price(id).await?.unwrap_or(Decimal::ZERO))
    }

    /// Fetches the series matching `kind`.
    async fn fetch_series(
        &self,
        id: &ProviderId,
        kind: SeriesKind,
        period: Period,
    ) -> Result<Series, ProviderError> {
        match kind {
            SeriesKind::Candle => Ok(Series::Candle(self.fetch_bar_series(id, period).await?)),
            SeriesKind::Area => Ok(Series::Area(self.fetch_scalar_series(id, period).await?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::series::convert::{price_from_simple, price_from_ticker};
    use crate::domain::series::wire::{BinanceTickerPrice, CoinGeckoSimplePrice};

    /// Serves spot prices from fixed wire payloads through the real converters.
    enum Payload {
        Ticker(&'static str),
        Simple(&'static str),
    }

    impl MarketDataProvider for Payload {
        fn name(&self) -> &'static str {
            "Fixed"
        }

        fn resolve_provider_id(&self, symbol: &str) -> ProviderId {
            ProviderId::new(symbol)
        }

        async fn fetch_scalar_series(
            &self,
            _: &ProviderId,
            _: Period,
        ) -> Result<Vec<Point>, ProviderError> {
            Ok(Vec::new())
        }

        async fn fetch_bar_series(
            &self,
            _: &ProviderId,
            _: Period,
        ) -> Result<Vec<Bar>, ProviderError> {
            Ok(Vec::new())
        }

        async fn latest_price(&self, id: &ProviderId) -> Result<Option<Decimal>, ProviderError> {
            match self {
                Payload::Ticker(json) => {
                    let ticker: BinanceTickerPrice = serde_json::from_str(json).unwrap();
                    Ok(price_from_ticker(&ticker))
                }
                Payload::Simple(json) => {
                    let payload: CoinGeckoSimplePrice = serde_json::from_str(json).unwrap();
                    Ok(price_from_simple(&payload, id.as_str(), "usd"))
                }
            }
        }
    }

    #[tokio::test]
    async fn test_missing_ticker_price_reads_as_zero() {
        let provider = Payload::Ticker(r#"{"symbol": "BTCUSDT"}"#);
        let id = provider.resolve_provider_id("BTCUSDT");
        assert_eq!(provider.latest_price(&id).await.unwrap(), None);
        assert_eq!(provider.fetch_latest_price(&id).await.unwrap(), Decimal::ZERO);
    }

    #[tokio::test]
    async fn test_missing_currency_entry_reads_as_zero() {
        let provider = Payload::Simple(r#"{"bitcoin": {"eur": 61000.5}}"#);
        let id = provider.resolve_provider_id("bitcoin");
        assert_eq!(provider.fetch_latest_price(&id).await.unwrap(), Decimal::ZERO);

        let provider = Payload::Simple(r#"{}"#);
        assert_eq!(provider.fetch_latest_price(&id).await.unwrap(), Decimal::ZERO);
    }

    #[tokio::test]
    async fn test_present_price_passes_through() {
        let provider = Payload::Ticker(r#"{"symbol": "ETHUSDT", "price": "3120.45000000"}"#);
        let id = provider.resolve_provider_id("ETHUSDT");
        assert_eq!(
            provider.fetch_latest_price(&id).await.unwrap(),
            "3120.45".parse::<Decimal>().unwrap()
        );
    }
}
