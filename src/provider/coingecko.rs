//! CoinGecko provider: coin ids, market chart, OHLC and simple price.

use crate::shared::{AssetSymbol, ProviderId};

/// Coin id used when a symbol has no CoinGecko mapping.
pub const DEFAULT_COIN_ID: &str = "bitcoin";

/// CoinGecko coin id for a symbol. `USD` has none.
pub fn coin_id(symbol: AssetSymbol) -> Option<&'static str> {
    match symbol {
        AssetSymbol::Btc => Some("bitcoin"),
        AssetSymbol::Eth => Some("ethereum"),
        AssetSymbol::Ltc => Some("litecoin"),
        AssetSymbol::Xrp => Some("ripple"),
        AssetSymbol::Dash => Some("dash"),
        AssetSymbol::Xmr => Some("monero"),
        AssetSymbol::Ada => Some("cardano"),
        AssetSymbol::Miota => Some("iota"),
        AssetSymbol::Bch => Some("bitcoin-cash"),
        AssetSymbol::Usdt => Some("tether"),
        AssetSymbol::Usd => None,
    }
}

/// Checked lookup by label (`"BTC"`, `"eth"`).
pub fn lookup(label: &str) -> Option<&'static str> {
    label.parse::<AssetSymbol>().ok().and_then(coin_id)
}

/// Lookup with the bitcoin fallback.
pub fn resolve_coin_id(label: &str) -> ProviderId {
    match lookup(label) {
        Some(id) => ProviderId::from(id),
        None => {
            tracing::debug!(label, "No CoinGecko id, using {}", DEFAULT_COIN_ID);
            ProviderId::from(DEFAULT_COIN_ID)
        }
    }
}

#[cfg(feature = "http")]
pub use self::client::CoinGecko;

#[cfg(feature = "http")]
mod client {
    use super::resolve_coin_id;
    use crate::client::MarketClient;
    use crate::domain::period::{day_range, needs_synthesized_bars};
    use crate::domain::series::convert;
    use crate::domain::series::{Bar, Point};
    use crate::error::ProviderError;
    use crate::http::client::COINGECKO;
    use crate::provider::MarketDataProvider;
    use crate::shared::{Period, ProviderId};
    use rust_decimal::Decimal;

    /// Sub-client for the CoinGecko REST API.
    #[derive(Clone, Copy)]
    pub struct CoinGecko<'a> {
        pub(crate) client: &'a MarketClient,
    }

    impl<'a> MarketDataProvider for CoinGecko<'a> {
        fn name(&self) -> &'static str {
            COINGECKO
        }

        fn resolve_provider_id(&self, symbol: &str) -> ProviderId {
            resolve_coin_id(symbol)
        }

        async fn fetch_scalar_series(
            &self,
            id: &ProviderId,
            period: Period,
        ) -> Result<Vec<Point>, ProviderError> {
            let chart = self
                .client
                .http
                .coingecko_market_chart(id.as_str(), day_range(period))
                .await?;
            Ok(convert::points_from_market_chart(&chart)?)
        }

        async fn fetch_bar_series(
            &self,
            id: &ProviderId,
            period: Period,
        ) -> Result<Vec<Bar>, ProviderError> {
            let days = day_range(period);
            if needs_synthesized_bars(period) {
                let chart = self
                    .client
                    .http
                    .coingecko_market_chart(id.as_str(), days)
                    .await?;
                return Ok(convert::flat_bars_from_market_chart(&chart)?);
            }
            let rows = self.client.http.coingecko_ohlc(id.as_str(), days).await?;
            Ok(convert::bars_from_ohlc(&rows)?)
        }

        async fn latest_price(&self, id: &ProviderId) -> Result<Option<Decimal>, ProviderError> {
            let payload = self.client.http.coingecko_simple_price(id.as_str()).await?;
            Ok(convert::price_from_simple(
                &payload,
                id.as_str(),
                self.client.http.vs_currency(),
            ))
        }
    }
}
