//! Light/dark toggle button.

use super::markup::Element;
use super::Component;
use crate::error::StorageError;
use crate::theme::{PreferenceStore, Theme, ThemeRoot, ThemeService};

/// Renders from the current theme; a click toggles the service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThemeSwitcher {
    pub theme: Theme,
}

impl ThemeSwitcher {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn from_service<S: PreferenceStore, R: ThemeRoot>(service: &ThemeService<S, R>) -> Self {
        Self::new(service.get())
    }

    pub fn aria_label(&self) -> String {
        format!("Switch to {} theme", self.theme.opposite())
    }

    pub fn label(&self) -> &'static str {
        match self.theme {
            Theme::Dark => "☀️ Light Mode",
            Theme::Light => "🌙 Dark Mode",
        }
    }

    /// Toggles the active theme and follows the result.
    pub fn click<S: PreferenceStore, R: ThemeRoot>(
        &mut self,
        service: &mut ThemeService<S, R>,
    ) -> Result<Theme, StorageError> {
        self.theme = service.toggle()?;
        Ok(self.theme)
    }
}

impl Component for ThemeSwitcher {
    fn render(&self) -> Element {
        Element::new("button")
            .class("theme-switcher")
            .attr("type", "button")
            .attr("aria-label", self.aria_label())
            .text(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{MemoryRoot, MemoryStore, SystemPreference, THEME_KEY};

    #[test]
    fn test_dark_labels() {
        let el = ThemeSwitcher::new(Theme::Dark).render();
        assert_eq!(el.attr_value("aria-label"), Some("Switch to light theme"));
        assert_eq!(el.text_content(), "☀️ Light Mode");
    }

    #[test]
    fn test_light_labels() {
        let el = ThemeSwitcher::new(Theme::Light).render();
        assert_eq!(el.attr_value("aria-label"), Some("Switch to dark theme"));
        assert_eq!(el.text_content(), "🌙 Dark Mode");
    }

    #[test]
    fn test_click_toggles_service() {
        let mut service = ThemeService::new(
            MemoryStore::with(THEME_KEY, "dark"),
            MemoryRoot::new(),
            SystemPreference::Unknown,
        );
        let mut switcher = ThemeSwitcher::from_service(&service);
        assert_eq!(switcher.theme, Theme::Dark);
        assert_eq!(switcher.click(&mut service).unwrap(), Theme::Light);
        assert_eq!(service.root().current(), Some(Theme::Light));
        assert_eq!(switcher.render().text_content(), "🌙 Dark Mode");
    }

    #[test]
    fn test_click_in_light_environment_switches_to_dark() {
        let mut service = ThemeService::new(
            MemoryStore::new(),
            MemoryRoot::new(),
            SystemPreference::Light,
        );
        let mut switcher = ThemeSwitcher::from_service(&service);
        assert_eq!(switcher.aria_label(), "Switch to dark theme");

        assert_eq!(switcher.click(&mut service).unwrap(), Theme::Dark);
        assert_eq!(service.get(), Theme::Dark);
        assert_eq!(service.root().attribute(), Some("dark"));
        assert_eq!(switcher.aria_label(), "Switch to light theme");
    }
}
