//! Integration tests for the theme service: persisted preference, root
//! attribute and the environment fallback.

use apex_kit::theme::{
    FileStore, MemoryRoot, MemoryStore, PreferenceStore, SystemPreference, Theme, ThemeService,
    THEME_KEY,
};
use apex_kit::ui::theme_switcher::ThemeSwitcher;
use apex_kit::ui::Component;

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir()
        .join(format!("apex-kit-theme-{}-{}", std::process::id(), name))
        .join("prefs.json")
}

#[test]
fn test_first_toggle_in_light_environment_switches_to_dark() {
    let mut service =
        ThemeService::new(MemoryStore::new(), MemoryRoot::new(), SystemPreference::Light);
    assert_eq!(service.get(), Theme::Light);

    let next = service.toggle().unwrap();

    assert_eq!(next, Theme::Dark);
    assert_eq!(service.store().get(THEME_KEY).unwrap().as_deref(), Some("dark"));
    assert_eq!(service.root().attribute(), Some("dark"));
}

#[test]
fn test_switcher_click_always_changes_theme() {
    for system in [SystemPreference::Light, SystemPreference::Dark, SystemPreference::Unknown] {
        let mut service = ThemeService::new(MemoryStore::new(), MemoryRoot::new(), system);
        let mut switcher = ThemeSwitcher::from_service(&service);
        let before = service.get();

        let after = switcher.click(&mut service).unwrap();

        assert_ne!(after, before);
        assert_eq!(service.get(), after);
        assert_eq!(switcher.theme, after);
    }
}

#[test]
fn test_toggle_alternates_once_stored() {
    let mut service = ThemeService::new(MemoryStore::new(), MemoryRoot::new(), SystemPreference::Unknown);
    assert_eq!(service.toggle().unwrap(), Theme::Light);
    assert_eq!(service.toggle().unwrap(), Theme::Dark);
    assert_eq!(service.toggle().unwrap(), Theme::Light);
    assert_eq!(service.root().applied_count(), 3);
}

#[test]
fn test_file_store_survives_restart() {
    let path = temp_path("restart");
    let _ = std::fs::remove_file(&path);

    {
        let mut service = ThemeService::new(FileStore::new(&path), MemoryRoot::new(), SystemPreference::Dark);
        assert_eq!(service.initialize(), Theme::Dark);
        service.set(Theme::Light).unwrap();
    }

    let mut reopened = ThemeService::new(FileStore::new(&path), MemoryRoot::new(), SystemPreference::Dark);
    assert_eq!(reopened.initialize(), Theme::Light);
    assert_eq!(reopened.root().attribute(), Some("light"));

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_garbage_file_value_falls_back_to_environment() {
    let path = temp_path("garbage");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, r#"{"theme":"sepia"}"#).unwrap();

    let service = ThemeService::new(FileStore::new(&path), MemoryRoot::new(), SystemPreference::Light);
    assert_eq!(service.stored(), None);
    assert_eq!(service.get(), Theme::Light);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_switcher_follows_service() {
    let mut service = ThemeService::new(MemoryStore::new(), MemoryRoot::new(), SystemPreference::Unknown);
    let mut switcher = ThemeSwitcher::from_service(&service);
    assert_eq!(
        switcher.render().attr_value("aria-label"),
        Some("Switch to light theme")
    );

    switcher.click(&mut service).unwrap();

    let el = switcher.render();
    assert_eq!(el.attr_value("aria-label"), Some("Switch to dark theme"));
    assert_eq!(el.text_content(), "🌙 Dark Mode");
    assert_eq!(service.root().current(), Some(Theme::Light));
}
