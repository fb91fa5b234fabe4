//! Low-level HTTP client: `MarketHttp`.
//!
//! One method per provider endpoint. Returns wire types (conversion to domain
//! types happens in the provider sub-clients). GET only, no retries: every
//! call either returns a parsed body or fails once.

use crate::domain::period::{DayRange, KlineParams};
use crate::domain::series::wire::{
    BinanceKline, BinanceTickerPrice, CoinGeckoCandle, CoinGeckoMarketChart, CoinGeckoSimplePrice,
};
use crate::error::ProviderError;

use reqwest::header::ACCEPT;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

pub(crate) const COINGECKO: &str = "CoinGecko";
pub(crate) const BINANCE: &str = "Binance";

/// Low-level HTTP client for the public market-data REST APIs.
#[derive(Clone)]
pub struct MarketHttp {
    coingecko_url: String,
    binance_url: String,
    vs_currency: String,
    client: Client,
}

impl MarketHttp {
    pub fn new(coingecko_url: &str, binance_url: &str, vs_currency: &str) -> Self {
        Self::with_timeout(coingecko_url, binance_url, vs_currency, Duration::from_secs(30))
    }

    pub fn with_timeout(
        coingecko_url: &str,
        binance_url: &str,
        vs_currency: &str,
        timeout: Duration,
    ) -> Self {
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder.timeout(timeout).pool_max_idle_per_host(4);
        }
        #[cfg(target_arch = "wasm32")]
        let _ = timeout;

        Self {
            coingecko_url: coingecko_url.trim_end_matches('/').to_string(),
            binance_url: binance_url.trim_end_matches('/').to_string(),
            vs_currency: vs_currency.to_string(),
            client: builder.build().expect("Failed to build HTTP client"),
        }
    }

    pub fn vs_currency(&self) -> &str {
        &self.vs_currency
    }

    // ── CoinGecko ────────────────────────────────────────────────────────

    pub async fn coingecko_market_chart(
        &self,
        coin_id: &str,
        days: DayRange,
    ) -> Result<CoinGeckoMarketChart, ProviderError> {
        let url = format!(
            "{}/coins/{}/market_chart?vs_currency={}&days={}",
            self.coingecko_url,
            urlencoding::encode(coin_id),
            urlencoding::encode(&self.vs_currency),
            days.as_query_value()
        );
        let chart: CoinGeckoMarketChart = self.get(COINGECKO, &url).await?;
        tracing::debug!(points = chart.prices.len(), "Market chart received");
        Ok(chart)
    }

    pub async fn coingecko_ohlc(
        &self,
        coin_id: &str,
        days: DayRange,
    ) -> Result<Vec<CoinGeckoCandle>, ProviderError> {
        let url = format!(
            "{}/coins/{}/ohlc?vs_currency={}&days={}",
            self.coingecko_url,
            urlencoding::encode(coin_id),
            urlencoding::encode(&self.vs_currency),
            days.as_query_value()
        );
        let rows: Option<Vec<CoinGeckoCandle>> = self.get(COINGECKO, &url).await?;
        let rows = rows.unwrap_or_default();
        tracing::debug!(candles = rows.len(), "OHLC received");
        Ok(rows)
    }

    pub async fn coingecko_simple_price(
        &self,
        coin_id: &str,
    ) -> Result<CoinGeckoSimplePrice, ProviderError> {
        let url = format!(
            "{}/simple/price?ids={}&vs_currencies={}",
            self.coingecko_url,
            urlencoding::encode(coin_id),
            urlencoding::encode(&self.vs_currency)
        );
        self.get(COINGECKO, &url).await
    }

    // ── Binance ──────────────────────────────────────────────────────────

    pub async fn binance_klines(
        &self,
        symbol: &str,
        params: KlineParams,
    ) -> Result<Vec<BinanceKline>, ProviderError> {
        let url = format!(
            "{}/klines?symbol={}&interval={}&limit={}",
            self.binance_url,
            urlencoding::encode(symbol),
            params.interval,
            params.limit
        );
        let klines: Option<Vec<BinanceKline>> = self.get(BINANCE, &url).await?;
        let klines = klines.unwrap_or_default();
        tracing::debug!(candles = klines.len(), "Klines received");
        Ok(klines)
    }

    pub async fn binance_ticker_price(
        &self,
        symbol: &str,
    ) -> Result<BinanceTickerPrice, ProviderError> {
        let url = format!(
            "{}/ticker/price?symbol={}",
            self.binance_url,
            urlencoding::encode(symbol)
        );
        self.get(BINANCE, &url).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(
        &self,
        provider: &'static str,
        url: &str,
    ) -> Result<T, ProviderError> {
        tracing::debug!(provider, "GET {}", url);

        let resp = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;
        let status = resp.status();

        if status.is_success() {
            let bytes = resp.bytes().await?;
            return serde_json::from_slice(&bytes)
                .map_err(|e| ProviderError::Decode(format!("{provider}: {e}")));
        }

        let body = resp.text().await.unwrap_or_default();
        tracing::error!(provider, status = status.as_u16(), "API error: {}", body);

        Err(status_error(provider, status.as_u16(), status.canonical_reason(), body))
    }
}

/// Maps a non-2xx status to a provider error.
pub(crate) fn status_error(
    provider: &'static str,
    status: u16,
    reason: Option<&str>,
    body: String,
) -> ProviderError {
    match status {
        429 => ProviderError::RateLimited { provider },
        _ => ProviderError::Status {
            provider,
            status,
            status_text: reason.unwrap_or_default().to_string(),
            body,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_maps_429_to_rate_limit() {
        let err = status_error(COINGECKO, 429, Some("Too Many Requests"), String::new());
        assert!(err.is_rate_limit());
        assert_eq!(err.to_string(), "CoinGecko API error: Too Many Requests");
    }

    #[test]
    fn test_status_error_keeps_status_text() {
        let err = status_error(BINANCE, 400, Some("Bad Request"), r#"{"code":-1121}"#.into());
        match err {
            ProviderError::Status {
                provider,
                status,
                status_text,
                body,
            } => {
                assert_eq!(provider, "Binance");
                assert_eq!(status, 400);
                assert_eq!(status_text, "Bad Request");
                assert!(body.contains("-1121"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let http = MarketHttp::new("http://localhost:1/", "http://localhost:2//", "usd");
        assert_eq!(http.coingecko_url, "http://localhost:1");
        assert_eq!(http.binance_url, "http://localhost:2");
        assert_eq!(http.vs_currency(), "usd");
    }
}
