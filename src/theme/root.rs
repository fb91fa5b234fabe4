//! Theme sinks and the environment colour-scheme signal.

use super::Theme;

/// Attribute name written on the document root.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Receives the active theme (e.g. the document root's `data-theme`).
pub trait ThemeRoot {
    fn apply(&mut self, theme: Theme);
}

/// Discards updates. For hosts without a document.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRoot;

impl ThemeRoot for NoopRoot {
    fn apply(&mut self, _theme: Theme) {}
}

/// Remembers the last applied theme.
#[derive(Debug, Clone, Default)]
pub struct MemoryRoot {
    current: Option<Theme>,
    applied: usize,
}

impl MemoryRoot {
    pub fn new() -> Self {
        Self::default()
    }

    /// The value a `data-theme` attribute would hold.
    pub fn attribute(&self) -> Option<&'static str> {
        self.current.map(|t| t.as_str())
    }

    pub fn current(&self) -> Option<Theme> {
        self.current
    }

    pub fn applied_count(&self) -> usize {
        self.applied
    }
}

impl ThemeRoot for MemoryRoot {
    fn apply(&mut self, theme: Theme) {
        self.current = Some(theme);
        self.applied += 1;
    }
}

/// The environment's colour-scheme preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SystemPreference {
    Light,
    Dark,
    #[default]
    Unknown,
}

impl SystemPreference {
    /// Theme used when nothing is stored. Only an explicit light signal
    /// selects light.
    pub fn fallback_theme(&self) -> Theme {
        match self {
            SystemPreference::Light => Theme::Light,
            SystemPreference::Dark | SystemPreference::Unknown => Theme::Dark,
        }
    }
}

#[cfg(feature = "web")]
pub use self::web::{system_preference, DocumentRoot};

#[cfg(feature = "web")]
mod web {
    use super::{SystemPreference, Theme, ThemeRoot, THEME_ATTRIBUTE};

    /// `document.documentElement`.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct DocumentRoot;

    impl ThemeRoot for DocumentRoot {
        fn apply(&mut self, theme: Theme) {
            let root = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element());
            match root {
                Some(el) => {
                    if let Err(e) = el.set_attribute(THEME_ATTRIBUTE, theme.as_str()) {
                        tracing::warn!("Failed to set {}: {:?}", THEME_ATTRIBUTE, e);
                    }
                }
                None => tracing::warn!("No document root to apply theme to"),
            }
        }
    }

    /// Reads `prefers-color-scheme` from the browser.
    pub fn system_preference() -> SystemPreference {
        let Some(window) = web_sys::window() else {
            return SystemPreference::Unknown;
        };
        let matches = |query: &str| {
            window
                .match_media(query)
                .ok()
                .flatten()
                .map(|mql| mql.matches())
                .unwrap_or(false)
        };
        if matches("(prefers-color-scheme: light)") {
            SystemPreference::Light
        } else if matches("(prefers-color-scheme: dark)") {
            SystemPreference::Dark
        } else {
            SystemPreference::Unknown
        }
    }
}
