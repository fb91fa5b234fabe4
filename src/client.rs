//! High-level client: `MarketClient` with provider sub-client accessors.
//!
//! Each provider has its own sub-client in `provider/<name>.rs`.
//! This module keeps the builder and accessor methods.

use crate::error::KitError;
use crate::http::MarketHttp;
use crate::provider::binance::Binance;
use crate::provider::coingecko::CoinGecko;

use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::provider::binance::Binance as BinanceClient;
pub use crate::provider::coingecko::CoinGecko as CoinGeckoClient;

/// The primary entry point for market data.
///
/// `client.coingecko()` and `client.binance()` borrow the client and
/// implement [`MarketDataProvider`](crate::provider::MarketDataProvider).
#[derive(Clone)]
pub struct MarketClient {
    pub(crate) http: MarketHttp,
}

impl MarketClient {
    pub fn builder() -> MarketClientBuilder {
        MarketClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn coingecko(&self) -> CoinGecko<'_> {
        CoinGecko { client: self }
    }

    pub fn binance(&self) -> Binance<'_> {
        Binance { client: self }
    }

    pub fn http(&self) -> &MarketHttp {
        &self.http
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct MarketClientBuilder {
    coingecko_url: String,
    binance_url: String,
    vs_currency: String,
    timeout: Duration,
}

impl Default for MarketClientBuilder {
    fn default() -> Self {
        Self {
            coingecko_url: crate::network::DEFAULT_COINGECKO_URL.to_string(),
            binance_url: crate::network::DEFAULT_BINANCE_URL.to_string(),
            vs_currency: crate::network::DEFAULT_VS_CURRENCY.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl MarketClientBuilder {
    pub fn coingecko_url(mut self, url: &str) -> Self {
        self.coingecko_url = url.to_string();
        self
    }

    pub fn binance_url(mut self, url: &str) -> Self {
        self.binance_url = url.to_string();
        self
    }

    /// Quote currency for CoinGecko queries (`usd`, `eur`, ...).
    pub fn vs_currency(mut self, currency: &str) -> Self {
        self.vs_currency = currency.to_lowercase();
        self
    }

    /// Request timeout. Ignored on WASM, where the browser owns timeouts.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<MarketClient, KitError> {
        if self.vs_currency.trim().is_empty() {
            return Err(KitError::Validation("vs_currency must not be empty".into()));
        }
        for url in [&self.coingecko_url, &self.binance_url] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(KitError::Validation(format!("Invalid base URL: {url}")));
            }
        }
        Ok(MarketClient {
            http: MarketHttp::with_timeout(
                &self.coingecko_url,
                &self.binance_url,
                &self.vs_currency,
                self.timeout,
            ),
        })
    }
}
