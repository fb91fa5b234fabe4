//! Design tokens: colour palettes, spacing scale and type ramp.
//!
//! Two palettes exist, [`DARK`] (the default) and [`LIGHT`]. Chart styling
//! derives its colours from the dark palette.

use crate::theme::Theme;

// ─── Colours ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlights {
    pub brand_solid: &'static str,
    pub brand_background: &'static str,
    pub brand_disabled: &'static str,
    pub bitcoin: &'static str,
    pub buy: &'static str,
    pub buy_disabled: &'static str,
    pub sell: &'static str,
    pub sell_disabled: &'static str,
    pub error: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextColors {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub disabled: &'static str,
    pub inverse: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormColors {
    pub border: &'static str,
    pub background: &'static str,
    pub on_dark: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonColors {
    pub secondary_background: &'static str,
    pub secondary_border: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackgroundColors {
    pub background_01: &'static str,
    pub background_02: &'static str,
    pub toolbar_blur: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DividerColors {
    pub border_01: &'static str,
    pub border_02: &'static str,
    pub border_03: &'static str,
    pub border_04_transparent: &'static str,
}

/// A complete colour palette for one theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub highlights: Highlights,
    pub text: TextColors,
    pub forms: FormColors,
    pub buttons: ButtonColors,
    pub background: BackgroundColors,
    pub dividers: DividerColors,
    /// Opacity of the toolbar blur layer.
    pub toolbar_blur_alpha: f64,
}

pub const DARK: Palette = Palette {
    highlights: Highlights {
        brand_solid: "#297FFF",
        brand_background: "#1C4C94",
        brand_disabled: "#5576FA",
        bitcoin: "#FC9416",
        buy: "#00C938",
        buy_disabled: "#04C654",
        sell: "#F62967",
        sell_disabled: "#DA1651",
        error: "#ED3737",
    },
    text: TextColors {
        primary: "#FFFFFF",
        secondary: "#9BAACE",
        disabled: "#C2CADB",
        inverse: "#FFFFFF",
    },
    forms: FormColors {
        border: "#151A27",
        background: "#262D3E",
        on_dark: "#000000",
    },
    buttons: ButtonColors {
        secondary_background: "#2A303C",
        secondary_border: "#171A20",
    },
    background: BackgroundColors {
        background_01: "#313848",
        background_02: "#373E4D",
        toolbar_blur: "#313848",
    },
    dividers: DividerColors {
        border_01: "#0A0C12",
        border_02: "#182034",
        border_03: "#283043",
        border_04_transparent: "#CED6E5",
    },
    toolbar_blur_alpha: 0.31,
};

pub const LIGHT: Palette = Palette {
    highlights: Highlights {
        brand_solid: "#3D63FF",
        brand_background: "#2D4DCE",
        brand_disabled: "#5576FA",
        bitcoin: "#FC9416",
        buy: "#00C938",
        buy_disabled: "#04C654",
        sell: "#E81F5B",
        sell_disabled: "#DA1651",
        error: "#DA1616",
    },
    text: TextColors {
        primary: "#393F62",
        secondary: "#8393B7",
        disabled: "#C2CADB",
        inverse: "#FFFFFF",
    },
    forms: FormColors {
        border: "#D5DBE6",
        background: "#F6F7F9",
        on_dark: "#000000",
    },
    buttons: ButtonColors {
        secondary_background: "#E6E9EF",
        secondary_border: "#D3D9E3",
    },
    background: BackgroundColors {
        background_01: "#FAFAFA",
        background_02: "#FFFFFF",
        toolbar_blur: "#FAFAFA",
    },
    dividers: DividerColors {
        border_01: "#8998B9",
        border_02: "#C2CADB",
        border_03: "#E6EAF2",
        border_04_transparent: "#CED6E5",
    },
    toolbar_blur_alpha: 0.6,
};

pub fn palette(theme: Theme) -> &'static Palette {
    match theme {
        Theme::Dark => &DARK,
        Theme::Light => &LIGHT,
    }
}

/// `#RRGGBB` → `rgba(r, g, b, alpha)`. `None` if `hex` is not six hex digits.
pub fn hex_to_rgba(hex: &str, alpha: f64) -> Option<String> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some(format!(
        "rgba({}, {}, {}, {})",
        channel(0)?,
        channel(2)?,
        channel(4)?,
        alpha
    ))
}

/// Translucent variants used for disabled and overlay states.
#[derive(Debug, Clone, PartialEq)]
pub struct OpacityVariants {
    pub brand_disabled: String,
    pub buy_disabled: String,
    pub sell_disabled: String,
    pub on_dark: String,
    pub toolbar_blur: String,
    pub border_04: String,
}

impl Palette {
    pub fn opacity_variants(&self) -> OpacityVariants {
        let rgba = |hex: &str, alpha: f64| hex_to_rgba(hex, alpha).unwrap_or_default();
        OpacityVariants {
            brand_disabled: rgba(self.highlights.brand_solid, 0.4),
            buy_disabled: rgba(self.highlights.buy, 0.3),
            sell_disabled: rgba(self.highlights.sell, 0.3),
            on_dark: rgba(self.forms.on_dark, 0.1),
            toolbar_blur: rgba(self.background.background_01, self.toolbar_blur_alpha),
            border_04: rgba(self.dividers.border_04_transparent, 0.4),
        }
    }
}

// ─── Spacing ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Spacing {
    Xxs,
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    Xl2,
    Xl3,
    Xl4,
    Xl5,
    Xl6,
    Xl7,
    Xl8,
}

impl Spacing {
    pub fn px(&self) -> u32 {
        match self {
            Self::Xxs => 2,
            Self::Xs => 4,
            Self::Sm => 8,
            Self::Md => 12,
            Self::Lg => 16,
            Self::Xl => 20,
            Self::Xl2 => 24,
            Self::Xl3 => 32,
            Self::Xl4 => 40,
            Self::Xl5 => 48,
            Self::Xl6 => 64,
            Self::Xl7 => 80,
            Self::Xl8 => 96,
        }
    }

    pub fn css(&self) -> String {
        format!("{}px", self.px())
    }
}

// ─── Typography ──────────────────────────────────────────────────────────────

pub const FONT_FAMILY: &str =
    "-apple-system, BlinkMacSystemFont, 'Segoe UI', 'Roboto', sans-serif";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextVariant {
    Headline,
    SubHeadline,
    Text,
    Body,
    Caption,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontWeight {
    Regular,
    Bold,
}

impl FontWeight {
    pub fn value(&self) -> u16 {
        match self {
            Self::Regular => 400,
            Self::Bold => 700,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    pub font_size_px: u32,
    /// `None` means `auto`.
    pub line_height_px: Option<u32>,
    pub weight: FontWeight,
}

impl TextVariant {
    pub fn style(&self, weight: FontWeight) -> TextStyle {
        let (font_size_px, line_height_px) = match self {
            Self::Headline => (28, None),
            Self::SubHeadline => (20, Some(22)),
            Self::Text => (16, None),
            Self::Body => (14, None),
            Self::Caption => (12, None),
        };
        TextStyle {
            font_size_px,
            line_height_px,
            weight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_rgba() {
        assert_eq!(
            hex_to_rgba("#297FFF", 0.56).as_deref(),
            Some("rgba(41, 127, 255, 0.56)")
        );
        assert_eq!(hex_to_rgba("#000000", 1.0).as_deref(), Some("rgba(0, 0, 0, 1)"));
        assert_eq!(hex_to_rgba("297FFF", 0.5), None);
        assert_eq!(hex_to_rgba("#29", 0.5), None);
        assert_eq!(hex_to_rgba("#GG0000", 0.5), None);
    }

    #[test]
    fn test_palette_by_theme() {
        assert_eq!(palette(Theme::Dark).highlights.brand_solid, "#297FFF");
        assert_eq!(palette(Theme::Light).highlights.brand_solid, "#3D63FF");
        assert_eq!(palette(Theme::Dark), &DARK);
        assert_ne!(DARK, LIGHT);
        assert_eq!(DARK.toolbar_blur_alpha, 0.31);
    }

    #[test]
    fn test_opacity_variants() {
        let dark = DARK.opacity_variants();
        assert_eq!(dark.buy_disabled, "rgba(0, 201, 56, 0.3)");
        assert_eq!(dark.toolbar_blur, "rgba(49, 56, 72, 0.31)");
        let light = LIGHT.opacity_variants();
        assert_eq!(light.toolbar_blur, "rgba(250, 250, 250, 0.6)");
    }

    #[test]
    fn test_spacing_and_type() {
        assert_eq!(Spacing::Lg.css(), "16px");
        assert_eq!(Spacing::Xl8.px(), 96);
        let s = TextVariant::SubHeadline.style(FontWeight::Bold);
        assert_eq!(s.font_size_px, 20);
        assert_eq!(s.line_height_px, Some(22));
        assert_eq!(s.weight.value(), 700);
    }
}
