//! Series domain: candlestick bars and scalar points plotted on the chart.

pub mod convert;
pub mod wire;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ─── Bar ─────────────────────────────────────────────────────────────────────

/// One candle. `time` is whole seconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bar {
    pub time: i64,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
}

impl Bar {
    /// A degenerate bar with open = high = low = close.
    pub fn flat(time: i64, price: Decimal) -> Self {
        Self {
            time,
            open: price,
            high: price,
            low: price,
            close: price,
        }
    }

    /// `low <= {open, close} <= high`.
    pub fn is_consistent(&self) -> bool {
        self.low <= self.open
            && self.low <= self.close
            && self.open <= self.high
            && self.close <= self.high
    }

    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp(self.time, 0)
    }
}

// ─── Point ───────────────────────────────────────────────────────────────────

/// One sample of a trend line. `time` is whole seconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub time: i64,
    pub value: Decimal,
}

impl Point {
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp(self.time, 0)
    }
}

impl From<Bar> for Point {
    fn from(bar: Bar) -> Self {
        Self {
            time: bar.time,
            value: bar.close,
        }
    }
}

// ─── Series ──────────────────────────────────────────────────────────────────

/// A fetched series, one variant per `SeriesKind`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "lowercase")]
pub enum Series {
    Candle(Vec<Bar>),
    Area(Vec<Point>),
}

impl Series {
    pub fn kind(&self) -> crate::shared::SeriesKind {
        match self {
            Series::Candle(_) => crate::shared::SeriesKind::Candle,
            Series::Area(_) => crate::shared::SeriesKind::Area,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Series::Candle(bars) => bars.len(),
            Series::Area(points) => points.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// First and last timestamps, if any.
    pub fn time_range(&self) -> Option<(i64, i64)> {
        let times: Vec<i64> = match self {
            Series::Candle(bars) => bars.iter().map(|b| b.time).collect(),
            Series::Area(points) => points.iter().map(|p| p.time).collect(),
        };
        Some((*times.first()?, *times.last()?))
    }
}

// ─── Ordering ────────────────────────────────────────────────────────────────

/// Sorts by time and keeps the last sample for each timestamp.
///
/// Millisecond timestamps that collapse onto the same second would otherwise
/// break the strictly-increasing time invariant the drawing surface needs.
fn dedupe_by_time<T: Copy>(mut items: Vec<T>, time: impl Fn(&T) -> i64) -> Vec<T> {
    items.sort_by_key(|item| time(item));
    let mut out: Vec<T> = Vec::with_capacity(items.len());
    for item in items {
        match out.last_mut() {
            Some(last) if time(last) == time(&item) => *last = item,
            _ => out.push(item),
        }
    }
    out
}

pub fn normalize_bars(bars: Vec<Bar>) -> Vec<Bar> {
    dedupe_by_time(bars, |b| b.time)
}

pub fn normalize_points(points: Vec<Point>) -> Vec<Point> {
    dedupe_by_time(points, |p| p.time)
}

/// True when every timestamp is strictly greater than the previous one.
pub fn is_strictly_increasing(times: impl IntoIterator<Item = i64>) -> bool {
    let mut prev: Option<i64> = None;
    for t in times {
        if let Some(p) = prev {
            if t <= p {
                return false;
            }
        }
        prev = Some(t);
    }
    true
}
