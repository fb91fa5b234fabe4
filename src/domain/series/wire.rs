//! Wire types for provider price-history responses (REST).

use crate::shared::serde_util::LenientDecimal;
use serde::Deserialize;
use std::collections::HashMap;

// ─── Binance ─────────────────────────────────────────────────────────────────

/// One Binance kline, sent as a 12-element JSON array.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BinanceKline(
    /// Open time (ms).
    pub i64,
    /// Open.
    pub String,
    /// High.
    pub String,
    /// Low.
    pub String,
    /// Close.
    pub String,
    /// Volume.
    pub String,
    /// Close time (ms).
    pub i64,
    /// Quote asset volume.
    pub String,
    /// Number of trades.
    pub u64,
    /// Taker buy base asset volume.
    pub String,
    /// Taker buy quote asset volume.
    pub String,
    /// Unused.
    pub String,
);

impl BinanceKline {
    pub fn open_time_ms(&self) -> i64 {
        self.0
    }
}

/// `GET /ticker/price` response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BinanceTickerPrice {
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub price: Option<LenientDecimal>,
}

// ─── CoinGecko ───────────────────────────────────────────────────────────────

/// `GET /coins/{id}/market_chart` response. Only `prices` is used.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CoinGeckoMarketChart {
    #[serde(default)]
    pub prices: Vec<(i64, LenientDecimal)>,
}

/// One `GET /coins/{id}/ohlc` row: `[ms, open, high, low, close]`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CoinGeckoCandle(
    pub i64,
    pub LenientDecimal,
    pub LenientDecimal,
    pub LenientDecimal,
    pub LenientDecimal,
);

/// `GET /simple/price` response: coin id → currency → price.
pub type CoinGeckoSimplePrice = HashMap<String, HashMap<String, Option<LenientDecimal>>>;
