//! Period configuration tables.
//!
//! Each provider understands a different query shape: Binance takes a kline
//! interval plus a point count, CoinGecko takes a day range. Both tables are
//! exhaustive matches over [`Period`], so adding a period is a compile error
//! until every table covers it.

use crate::shared::Period;
use serde::{Deserialize, Serialize};

/// Kline interval and number of candles to request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KlineParams {
    pub interval: &'static str,
    pub limit: u32,
}

/// Day span for range-based price history queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayRange {
    Days(u32),
    Max,
}

impl DayRange {
    /// Value for the `days=` query parameter.
    pub fn as_query_value(&self) -> String {
        match self {
            DayRange::Days(d) => d.to_string(),
            DayRange::Max => "max".to_string(),
        }
    }
}

impl std::fmt::Display for DayRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_query_value())
    }
}

/// Query parameters for one period on one provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PeriodQuery {
    Klines(KlineParams),
    Days(DayRange),
}

impl PeriodQuery {
    /// True when the parameters would ask the provider for nothing.
    pub fn is_empty(&self) -> bool {
        match self {
            PeriodQuery::Klines(k) => k.interval.is_empty() || k.limit == 0,
            PeriodQuery::Days(DayRange::Days(d)) => *d == 0,
            PeriodQuery::Days(DayRange::Max) => false,
        }
    }
}

/// Binance kline interval and limit for a period.
pub fn kline_params(period: Period) -> KlineParams {
    let (interval, limit) = match period {
        Period::Hour1 => ("1m", 60),
        Period::Day1 => ("5m", 288),
        Period::Week1 => ("1h", 168),
        Period::Month1 => ("4h", 180),
        Period::Year1 => ("1d", 365),
        Period::All => ("1w", 1000),
    };
    KlineParams { interval, limit }
}

/// CoinGecko day range for a period.
pub fn day_range(period: Period) -> DayRange {
    match period {
        Period::Hour1 | Period::Day1 => DayRange::Days(1),
        Period::Week1 => DayRange::Days(7),
        Period::Month1 => DayRange::Days(30),
        Period::Year1 => DayRange::Days(365),
        Period::All => DayRange::Max,
    }
}

/// CoinGecko has no OHLC data at sub-day granularity for these periods, so
/// bars are synthesized from the scalar price history instead.
pub fn needs_synthesized_bars(period: Period) -> bool {
    matches!(period, Period::Hour1 | Period::Day1)
}
