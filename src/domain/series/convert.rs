//! Conversion: provider wire rows → `Bar` / `Point`.
//!
//! Timestamps are provider milliseconds floor-divided to whole seconds.
//! Every mapper normalizes its output so times are strictly increasing.

use super::wire::{
    BinanceKline, BinanceTickerPrice, CoinGeckoCandle, CoinGeckoMarketChart, CoinGeckoSimplePrice,
};
use super::{normalize_bars, normalize_points, Bar, Point};
use crate::error::ProviderError;
use crate::shared::serde_util::{ms_to_secs, LenientDecimal};
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError {
    InvalidDecimal { field: &'static str, reason: String },
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::InvalidDecimal { field, reason } => {
                write!(f, "Invalid {field}: {reason}")
            }
        }
    }
}

impl std::error::Error for ConvertError {}

impl From<ConvertError> for ProviderError {
    fn from(e: ConvertError) -> Self {
        ProviderError::Decode(e.to_string())
    }
}

fn parse_str(field: &'static str, s: &str) -> Result<Decimal, ConvertError> {
    Decimal::from_str(s.trim()).map_err(|e| ConvertError::InvalidDecimal {
        field,
        reason: format!("{s:?}: {e}"),
    })
}

fn parse_lenient(field: &'static str, v: &LenientDecimal) -> Result<Decimal, ConvertError> {
    v.to_decimal()
        .map_err(|reason| ConvertError::InvalidDecimal { field, reason })
}

// ─── Binance ─────────────────────────────────────────────────────────────────

impl TryFrom<&BinanceKline> for Bar {
    type Error = ConvertError;

    fn try_from(k: &BinanceKline) -> Result<Self, Self::Error> {
        Ok(Bar {
            time: ms_to_secs(k.open_time_ms()),
            open: parse_str("open", &k.1)?,
            high: parse_str("high", &k.2)?,
            low: parse_str("low", &k.3)?,
            close: parse_str("close", &k.4)?,
        })
    }
}

/// Klines → candlestick bars.
pub fn bars_from_klines(klines: &[BinanceKline]) -> Result<Vec<Bar>, ConvertError> {
    let bars = klines
        .iter()
        .map(Bar::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(normalize_bars(bars))
}

/// Klines → close-price trend line.
pub fn points_from_klines(klines: &[BinanceKline]) -> Result<Vec<Point>, ConvertError> {
    let points = klines
        .iter()
        .map(|k| {
            Ok(Point {
                time: ms_to_secs(k.open_time_ms()),
                value: parse_str("close", &k.4)?,
            })
        })
        .collect::<Result<Vec<_>, ConvertError>>()?;
    Ok(normalize_points(points))
}

/// Latest price from a ticker. A missing or unparseable price is `None`.
pub fn price_from_ticker(ticker: &BinanceTickerPrice) -> Option<Decimal> {
    let raw = ticker.price.as_ref()?;
    match raw.to_decimal() {
        Ok(price) => Some(price),
        Err(reason) => {
            tracing::warn!(symbol = ?ticker.symbol, "Ignoring ticker price: {}", reason);
            None
        }
    }
}

// ─── CoinGecko ───────────────────────────────────────────────────────────────

/// Market chart prices → trend line.
pub fn points_from_market_chart(chart: &CoinGeckoMarketChart) -> Result<Vec<Point>, ConvertError> {
    let points = chart
        .prices
        .iter()
        .map(|(ms, price)| {
            Ok(Point {
                time: ms_to_secs(*ms),
                value: parse_lenient("price", price)?,
            })
        })
        .collect::<Result<Vec<_>, ConvertError>>()?;
    Ok(normalize_points(points))
}

/// Market chart prices → degenerate bars (open = high = low = close).
///
/// Used for periods the OHLC endpoint cannot serve at a useful granularity.
pub fn flat_bars_from_market_chart(chart: &CoinGeckoMarketChart) -> Result<Vec<Bar>, ConvertError> {
    Ok(points_from_market_chart(chart)?
        .into_iter()
        .map(|p| Bar::flat(p.time, p.value))
        .collect())
}

impl TryFrom<&CoinGeckoCandle> for Bar {
    type Error = ConvertError;

    fn try_from(c: &CoinGeckoCandle) -> Result<Self, Self::Error> {
        Ok(Bar {
            time: ms_to_secs(c.0),
            open: parse_lenient("open", &c.1)?,
            high: parse_lenient("high", &c.2)?,
            low: parse_lenient("low", &c.3)?,
            close: parse_lenient("close", &c.4)?,
        })
    }
}

/// OHLC rows → candlestick bars.
pub fn bars_from_ohlc(rows: &[CoinGeckoCandle]) -> Result<Vec<Bar>, ConvertError> {
    let bars = rows
        .iter()
        .map(Bar::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(normalize_bars(bars))
}

/// Latest price for `coin_id` in `vs_currency`. Missing entries are `None`.
pub fn price_from_simple(
    payload: &CoinGeckoSimplePrice,
    coin_id: &str,
    vs_currency: &str,
) -> Option<Decimal> {
    let raw = payload.get(coin_id)?.get(vs_currency)?.as_ref()?;
    match raw.to_decimal() {
        Ok(price) => Some(price),
        Err(reason) => {
            tracing::warn!(coin_id, "Ignoring simple price: {}", reason);
            None
        }
    }
}
