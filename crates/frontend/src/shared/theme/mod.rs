//! Темы оформления.
//!
//! Светлая/темная тема плюс сезонное оформление «Тет», которое
//! накладывается поверх любой из них. Выбор хранится в localStorage
//! и применяется к `<body>`: атрибут `data-theme` и класс `theme-tet`.

pub mod theme_select;

use crate::shared::config::config;
use crate::shared::storage;
use leptos::prelude::*;

pub use theme_select::{TetToggle, ThemeToggle};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Значение `data-theme` и localStorage
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn all() -> [Theme; 2] {
        [Theme::Light, Theme::Dark]
    }
}

const THEME_STORAGE_KEY: &str = "theme";
const TET_STORAGE_KEY: &str = "tetTheme";
pub const TET_CLASS: &str = "theme-tet";

/// Классы `<body>` для выбранного оформления
pub fn body_classes(theme: Theme, tet: bool) -> String {
    let mut classes = format!("theme-{}", theme.as_str());
    if tet {
        classes.push(' ');
        classes.push_str(TET_CLASS);
    }
    classes
}

fn parse_flag(raw: Option<String>, default: bool) -> bool {
    match raw.as_deref() {
        Some("true") | Some("1") => true,
        Some("false") | Some("0") => false,
        _ => default,
    }
}

fn load_theme() -> Theme {
    storage::get_item(THEME_STORAGE_KEY)
        .map(|s| Theme::parse(&s))
        .unwrap_or_default()
}

fn load_tet() -> bool {
    parse_flag(storage::get_item(TET_STORAGE_KEY), config().theme.tet_default)
}

fn apply_to_body(theme: Theme, tet: bool) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    let _ = body.set_attribute("data-theme", theme.as_str());
    let _ = body.set_attribute("class", &body_classes(theme, tet));
}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: RwSignal<Theme>,
    pub tet: RwSignal<bool>,
}

impl ThemeContext {
    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        storage::set_item(THEME_STORAGE_KEY, theme.as_str());
    }

    pub fn toggle_theme(&self) {
        self.set_theme(self.theme.get_untracked().toggled());
    }

    pub fn set_tet(&self, enabled: bool) {
        self.tet.set(enabled);
        storage::set_item(TET_STORAGE_KEY, if enabled { "true" } else { "false" });
    }

    pub fn is_dark(&self) -> bool {
        self.theme.get() == Theme::Dark
    }
}

#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let theme = RwSignal::new(load_theme());
    let tet = RwSignal::new(load_tet());

    Effect::new(move |_| apply_to_body(theme.get(), tet.get()));

    provide_context(ThemeContext { theme, tet });

    children()
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_classes() {
        assert_eq!(body_classes(Theme::Light, false), "theme-light");
        assert_eq!(body_classes(Theme::Dark, true), "theme-dark theme-tet");
    }

    #[test]
    fn test_parse_and_flags() {
        assert_eq!(Theme::parse("dark"), Theme::Dark);
        assert_eq!(Theme::parse("forest"), Theme::Light);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert!(parse_flag(Some("true".into()), false));
        assert!(!parse_flag(Some("0".into()), true));
        assert!(parse_flag(None, true));
        assert!(!parse_flag(Some("garbage".into()), false));
    }
}
