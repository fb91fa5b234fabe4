//! Pixel projection of series data.
//!
//! Pure geometry shared by drawing surfaces: fit a [`Viewport`] to the
//! plotted data, then map bars and points into canvas coordinates.

use crate::domain::series::{Bar, Point, Series};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Fraction of the value range added above and below the data.
pub const VALUE_PADDING: f64 = 0.1;

/// Candle body width as a fraction of the slot each bar occupies.
const BODY_RATIO: f64 = 0.7;

/// Time and value ranges mapped onto a `width` × `height` pixel area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub time_start: i64,
    pub time_end: i64,
    pub value_min: f64,
    pub value_max: f64,
    /// Horizontal spacing between consecutive samples.
    pub slot: f64,
}

/// One candle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotCandle {
    pub x: f64,
    pub half_width: f64,
    pub y_open: f64,
    pub y_close: f64,
    pub y_high: f64,
    pub y_low: f64,
    /// Close at or above open.
    pub up: bool,
}

fn to_f64(d: Decimal) -> f64 {
    d.to_f64().unwrap_or(0.0)
}

impl Viewport {
    /// Fits every series in `series`. `None` when there is nothing to plot.
    pub fn fit<'a>(
        series: impl IntoIterator<Item = &'a Series>,
        width: f64,
        height: f64,
    ) -> Option<Viewport> {
        let mut times: Option<(i64, i64)> = None;
        let mut values: Option<(f64, f64)> = None;
        let mut samples = 0usize;

        let mut widen = |time: i64, low: f64, high: f64| {
            times = Some(match times {
                Some((s, e)) => (s.min(time), e.max(time)),
                None => (time, time),
            });
            values = Some(match values {
                Some((lo, hi)) => (lo.min(low), hi.max(high)),
                None => (low, high),
            });
        };

        for s in series {
            match s {
                Series::Candle(bars) => {
                    samples = samples.max(bars.len());
                    for b in bars {
                        widen(b.time, to_f64(b.low), to_f64(b.high));
                    }
                }
                Series::Area(points) => {
                    samples = samples.max(points.len());
                    for p in points {
                        let v = to_f64(p.value);
                        widen(p.time, v, v);
                    }
                }
            }
        }

        let (time_start, time_end) = times?;
        let (lo, hi) = values?;
        let pad = if hi > lo {
            (hi - lo) * VALUE_PADDING
        } else {
            // Flat data: open a band around the single value.
            lo.abs().max(1.0) * VALUE_PADDING
        };

        Some(Viewport {
            width,
            height,
            time_start,
            time_end,
            value_min: lo - pad,
            value_max: hi + pad,
            slot: width / samples.max(1) as f64,
        })
    }

    /// Same ranges on a resized area.
    pub fn resized(&self, width: f64, height: f64) -> Viewport {
        let samples = if self.slot > 0.0 {
            (self.width / self.slot).round().max(1.0)
        } else {
            1.0
        };
        Viewport {
            width,
            height,
            slot: width / samples,
            ..*self
        }
    }

    /// Samples are centred in their slot so the first and last candles are
    /// not clipped.
    pub fn time_to_x(&self, time: i64) -> f64 {
        let inner = (self.width - self.slot).max(0.0);
        let span = (self.time_end - self.time_start) as f64;
        let ratio = if span > 0.0 {
            (time - self.time_start) as f64 / span
        } else {
            0.5
        };
        self.slot / 2.0 + ratio * inner
    }

    pub fn value_to_y(&self, value: f64) -> f64 {
        let range = (self.value_max - self.value_min).max(1e-9);
        let norm = (value - self.value_min) / range;
        self.height - norm * self.height
    }

    pub fn candles(&self, bars: &[Bar]) -> Vec<PlotCandle> {
        let half_width = (self.slot * BODY_RATIO / 2.0).max(0.5);
        bars.iter()
            .map(|b| PlotCandle {
                x: self.time_to_x(b.time),
                half_width,
                y_open: self.value_to_y(to_f64(b.open)),
                y_close: self.value_to_y(to_f64(b.close)),
                y_high: self.value_to_y(to_f64(b.high)),
                y_low: self.value_to_y(to_f64(b.low)),
                up: b.close >= b.open,
            })
            .collect()
    }

    pub fn line(&self, points: &[Point]) -> Vec<(f64, f64)> {
        points
            .iter()
            .map(|p| (self.time_to_x(p.time), self.value_to_y(to_f64(p.value))))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(time: i64, open: i64, high: i64, low: i64, close: i64) -> Bar {
        Bar {
            time,
            open: Decimal::from(open),
            high: Decimal::from(high),
            low: Decimal::from(low),
            close: Decimal::from(close),
        }
    }

    #[test]
    fn test_fit_pads_value_range() {
        let series = Series::Candle(vec![bar(0, 100, 120, 90, 110), bar(60, 110, 140, 100, 105)]);
        let vp = Viewport::fit([&series], 200.0, 100.0).unwrap();
        assert_eq!((vp.time_start, vp.time_end), (0, 60));
        assert!((vp.value_min - 85.0).abs() < 1e-9);
        assert!((vp.value_max - 145.0).abs() < 1e-9);
        assert_eq!(vp.slot, 100.0);
    }

    #[test]
    fn test_fit_empty_is_none() {
        let empty = Series::Area(Vec::new());
        assert_eq!(Viewport::fit([&empty], 200.0, 100.0), None);
        assert_eq!(Viewport::fit(std::iter::empty::<&Series>(), 200.0, 100.0), None);
    }

    #[test]
    fn test_flat_series_still_has_height() {
        let series = Series::Area(vec![Point {
            time: 10,
            value: Decimal::from(50),
        }]);
        let vp = Viewport::fit([&series], 100.0, 100.0).unwrap();
        assert!(vp.value_max > vp.value_min);
        assert_eq!(vp.time_to_x(10), 50.0);
        assert_eq!(vp.value_to_y(50.0), 50.0);
    }

    #[test]
    fn test_candles_stay_inside_area() {
        let bars = vec![bar(0, 100, 120, 90, 110), bar(60, 110, 140, 100, 105)];
        let series = Series::Candle(bars.clone());
        let vp = Viewport::fit([&series], 200.0, 100.0).unwrap();
        let candles = vp.candles(&bars);

        assert_eq!(candles[0].x, 50.0);
        assert_eq!(candles[1].x, 150.0);
        assert!((candles[0].half_width - 35.0).abs() < 1e-9);
        assert!(candles[0].up);
        assert!(!candles[1].up);
        for c in &candles {
            assert!(c.y_high < c.y_low);
            assert!(c.y_high >= 0.0 && c.y_low <= 100.0);
        }
    }

    #[test]
    fn test_line_is_left_to_right() {
        let points: Vec<Point> = (0..5)
            .map(|i| Point {
                time: i * 10,
                value: Decimal::from(i),
            })
            .collect();
        let series = Series::Area(points.clone());
        let vp = Viewport::fit([&series], 500.0, 100.0).unwrap();
        let line = vp.line(&points);
        assert!(line.windows(2).all(|w| w[0].0 < w[1].0 && w[0].1 > w[1].1));
    }

    #[test]
    fn test_resized_keeps_ranges() {
        let series = Series::Candle(vec![bar(0, 1, 2, 0, 1), bar(60, 1, 2, 0, 1)]);
        let vp = Viewport::fit([&series], 200.0, 100.0).unwrap();
        let wide = vp.resized(400.0, 100.0);
        assert_eq!(wide.slot, 200.0);
        assert_eq!(wide.value_min, vp.value_min);
        assert_eq!(wide.time_to_x(60), 300.0);
    }
}
