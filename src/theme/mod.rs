//! Light/dark theme preference.
//!
//! [`ThemeService`] is constructed once per process and handed to whatever
//! owns UI state. It reads and writes a single `"theme"` key through a
//! [`PreferenceStore`] and mirrors the active theme onto a [`ThemeRoot`].
//!
//! Resolution order for the active theme: the stored value, then the
//! environment's colour-scheme signal, then dark.

pub mod root;
pub mod store;

pub use root::{MemoryRoot, NoopRoot, SystemPreference, ThemeRoot, THEME_ATTRIBUTE};
pub use store::{MemoryStore, PreferenceStore};

#[cfg(not(target_arch = "wasm32"))]
pub use store::FileStore;
#[cfg(feature = "web")]
pub use root::{system_preference, DocumentRoot};
#[cfg(feature = "web")]
pub use store::LocalStorage;

use crate::error::StorageError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Storage key holding the preference.
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn opposite(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("Unknown theme: {other}")),
        }
    }
}

// ─── ThemeService ────────────────────────────────────────────────────────────

pub struct ThemeService<S: PreferenceStore, R: ThemeRoot> {
    store: S,
    root: R,
    system: SystemPreference,
}

impl<S: PreferenceStore, R: ThemeRoot> ThemeService<S, R> {
    pub fn new(store: S, root: R, system: SystemPreference) -> Self {
        Self {
            store,
            root,
            system,
        }
    }

    /// The persisted preference. Unreadable or unrecognised values read as
    /// absent.
    pub fn stored(&self) -> Option<Theme> {
        let raw = match self.store.get(THEME_KEY) {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::warn!("Failed to read theme preference: {}", e);
                return None;
            }
        };
        match raw.parse() {
            Ok(theme) => Some(theme),
            Err(e) => {
                tracing::warn!("Ignoring stored theme: {}", e);
                None
            }
        }
    }

    /// The active theme.
    pub fn get(&self) -> Theme {
        self.stored()
            .unwrap_or_else(|| self.system.fallback_theme())
    }

    pub fn is_dark(&self) -> bool {
        self.get() == Theme::Dark
    }

    /// Applies and persists `theme`.
    pub fn set(&mut self, theme: Theme) -> Result<(), StorageError> {
        self.root.apply(theme);
        self.store.set(THEME_KEY, theme.as_str())?;
        tracing::debug!(theme = theme.as_str(), "Theme set");
        Ok(())
    }

    /// Flips the active theme, persists it and returns it.
    ///
    /// With nothing persisted the active theme comes from the environment
    /// signal, so a light environment toggles to dark.
    pub fn toggle(&mut self) -> Result<Theme, StorageError> {
        let next = self.get().opposite();
        self.set(next)?;
        Ok(next)
    }

    /// Applies the active theme to the root without persisting it.
    pub fn initialize(&mut self) -> Theme {
        let theme = self.get();
        self.root.apply(theme);
        theme
    }

    pub fn system(&self) -> SystemPreference {
        self.system
    }

    /// Updates the environment signal, e.g. after a `prefers-color-scheme`
    /// change event.
    pub fn set_system(&mut self, system: SystemPreference) {
        self.system = system;
    }

    pub fn root(&self) -> &R {
        &self.root
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(feature = "web")]
impl ThemeService<LocalStorage, DocumentRoot> {
    /// `localStorage` + `document.documentElement` + `prefers-color-scheme`.
    pub fn browser() -> Self {
        Self::new(LocalStorage, DocumentRoot, system_preference())
    }
}
