//! Chart and series styling.

use crate::shared::SeriesKind;
use crate::tokens::{hex_to_rgba, DARK};

pub const DEFAULT_CHART_HEIGHT: u32 = 240;

/// Options the drawing surface is created with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartOptions {
    /// Container width in px; `0` until the host measures it.
    pub width: u32,
    pub height: u32,
    pub background: &'static str,
    pub text_color: &'static str,
    pub grid_color: &'static str,
    pub border_color: &'static str,
    pub time_visible: bool,
    pub seconds_visible: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self::with_height(DEFAULT_CHART_HEIGHT)
    }
}

impl ChartOptions {
    pub fn with_height(height: u32) -> Self {
        Self {
            width: 0,
            height,
            background: DARK.background.background_01,
            text_color: DARK.text.secondary,
            grid_color: DARK.dividers.border_03,
            border_color: DARK.dividers.border_03,
            time_visible: true,
            seconds_visible: false,
        }
    }
}

/// Candles coloured with the buy/sell highlights.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandleStyle {
    pub up_color: &'static str,
    pub down_color: &'static str,
    pub border_up_color: &'static str,
    pub border_down_color: &'static str,
    pub wick_up_color: &'static str,
    pub wick_down_color: &'static str,
}

impl Default for CandleStyle {
    fn default() -> Self {
        let up = DARK.highlights.buy;
        let down = DARK.highlights.sell;
        Self {
            up_color: up,
            down_color: down,
            border_up_color: up,
            border_down_color: down,
            wick_up_color: up,
            wick_down_color: down,
        }
    }
}

/// Brand-coloured line over a fading fill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaStyle {
    pub top_color: String,
    pub bottom_color: String,
    pub line_color: &'static str,
    pub line_width: u32,
}

impl Default for AreaStyle {
    fn default() -> Self {
        let brand = DARK.highlights.brand_solid;
        Self {
            top_color: hex_to_rgba(brand, 0.56).unwrap_or_default(),
            bottom_color: hex_to_rgba(brand, 0.04).unwrap_or_default(),
            line_color: brand,
            line_width: 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeriesStyle {
    Candle(CandleStyle),
    Area(AreaStyle),
}

impl SeriesStyle {
    pub fn for_kind(kind: SeriesKind) -> Self {
        match kind {
            SeriesKind::Candle => SeriesStyle::Candle(CandleStyle::default()),
            SeriesKind::Area => SeriesStyle::Area(AreaStyle::default()),
        }
    }

    pub fn kind(&self) -> SeriesKind {
        match self {
            SeriesStyle::Candle(_) => SeriesKind::Candle,
            SeriesStyle::Area(_) => SeriesKind::Area,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = ChartOptions::default();
        assert_eq!(opts.height, 240);
        assert_eq!(opts.background, "#313848");
        assert_eq!(opts.text_color, "#9BAACE");
        assert_eq!(opts.grid_color, "#283043");
        assert!(!opts.seconds_visible);
    }

    #[test]
    fn test_candle_colours() {
        let style = CandleStyle::default();
        assert_eq!(style.up_color, "#00C938");
        assert_eq!(style.wick_down_color, "#F62967");
    }

    #[test]
    fn test_area_gradient() {
        let style = AreaStyle::default();
        assert_eq!(style.top_color, "rgba(41, 127, 255, 0.56)");
        assert_eq!(style.bottom_color, "rgba(41, 127, 255, 0.04)");
        assert_eq!(style.line_color, "#297FFF");
        assert_eq!(style.line_width, 2);
    }

    #[test]
    fn test_style_for_kind() {
        assert_eq!(SeriesStyle::for_kind(SeriesKind::Area).kind(), SeriesKind::Area);
        assert_eq!(SeriesStyle::for_kind(SeriesKind::Candle).kind(), SeriesKind::Candle);
    }
}
