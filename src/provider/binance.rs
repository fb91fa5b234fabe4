//! Binance provider: USDT-quoted spot symbols, klines and ticker price.

use crate::shared::{AssetSymbol, ProviderId};

/// Trading pair used when a symbol has no Binance mapping.
pub const DEFAULT_SYMBOL: &str = "BTCUSDT";

/// Binance trading pair for a symbol. Pairs are quoted in USDT; USDT itself
/// is quoted against USDC.
pub fn pair_symbol(symbol: AssetSymbol) -> Option<&'static str> {
    match symbol {
        AssetSymbol::Btc => Some("BTCUSDT"),
        AssetSymbol::Eth => Some("ETHUSDT"),
        AssetSymbol::Ltc => Some("LTCUSDT"),
        AssetSymbol::Xrp => Some("XRPUSDT"),
        AssetSymbol::Dash => Some("DASHUSDT"),
        AssetSymbol::Xmr => Some("XMRUSDT"),
        AssetSymbol::Ada => Some("ADAUSDT"),
        AssetSymbol::Miota => Some("IOTAUSDT"),
        AssetSymbol::Bch => Some("BCHUSDT"),
        AssetSymbol::Usdt => Some("USDCUSDT"),
        AssetSymbol::Usd => None,
    }
}

/// Checked lookup by label.
pub fn lookup(label: &str) -> Option<&'static str> {
    label.parse::<AssetSymbol>().ok().and_then(pair_symbol)
}

/// Lookup with the `BTCUSDT` fallback.
pub fn resolve_symbol(label: &str) -> ProviderId {
    match lookup(label) {
        Some(pair) => ProviderId::from(pair),
        None => {
            tracing::debug!(label, "No Binance pair, using {}", DEFAULT_SYMBOL);
            ProviderId::from(DEFAULT_SYMBOL)
        }
    }
}

#[cfg(feature = "http")]
pub use self::client::Binance;

#[cfg(feature = "http")]
mod client {
    use super::resolve_symbol;
    use crate::client::MarketClient;
    use crate::domain::period::kline_params;
    use crate::domain::series::convert;
    use crate::domain::series::{Bar, Point};
    use crate::error::ProviderError;
    use crate::http::client::BINANCE;
    use crate::provider::MarketDataProvider;
    use crate::shared::{Period, ProviderId};
    use rust_decimal::Decimal;

    /// Sub-client for the Binance spot REST API.
    #[derive(Clone, Copy)]
    pub struct Binance<'a> {
        pub(crate) client: &'a MarketClient,
    }

    impl<'a> MarketDataProvider for Binance<'a> {
        fn name(&self) -> &'static str {
            BINANCE
        }

        fn resolve_provider_id(&self, symbol: &str) -> ProviderId {
            resolve_symbol(symbol)
        }

        async fn fetch_scalar_series(
            &self,
            id: &ProviderId,
            period: Period,
        ) -> Result<Vec<Point>, ProviderError> {
            let klines = self
                .client
                .http
                .binance_klines(id.as_str(), kline_params(period))
                .await?;
            Ok(convert::points_from_klines(&klines)?)
        }

        async fn fetch_bar_series(
            &self,
            id: &ProviderId,
            period: Period,
        ) -> Result<Vec<Bar>, ProviderError> {
            let klines = self
                .client
                .http
                .binance_klines(id.as_str(), kline_params(period))
                .await?;
            Ok(convert::bars_from_klines(&klines)?)
        }

        async fn latest_price(&self, id: &ProviderId) -> Result<Option<Decimal>, ProviderError> {
            let ticker = self.client.http.binance_ticker_price(id.as_str()).await?;
            Ok(convert::price_from_ticker(&ticker))
        }
    }
}
