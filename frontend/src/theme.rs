use log::info;
use serde::{Deserialize, Serialize};
use yew::prelude::*;
use yew_hooks::prelude::*;

pub const THEME_STORAGE_KEY: &str = "salmoon-theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Class put on the page root; every section styles itself off it.
    pub fn class(self) -> &'static str {
        match self {
            Theme::Light => "theme-light",
            Theme::Dark => "theme-dark",
        }
    }

    /// Glyph for the toggle button: offers the theme you would switch to.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Light => "☾",
            Theme::Dark => "☀",
        }
    }

    pub fn from_system() -> Self {
        let prefers_dark = web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map(|query| query.matches())
            .unwrap_or(false);
        if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

/// Current theme plus a callback flipping it. The choice is remembered in
/// local storage; first visits follow the browser preference.
#[hook]
pub fn use_theme() -> (Theme, Callback<MouseEvent>) {
    let stored = use_local_storage::<Theme>(THEME_STORAGE_KEY.to_string());
    let theme = (*stored).unwrap_or_else(Theme::from_system);

    let toggle = {
        let stored = stored.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let next = theme.toggle();
            info!("Switching to {:?} theme", next);
            stored.set(next);
        })
    };

    (theme, toggle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_and_flips_back() {
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(theme.toggle().toggle(), theme);
        }
    }

    #[test]
    fn classes_and_icons() {
        assert_eq!(Theme::Light.class(), "theme-light");
        assert_eq!(Theme::Dark.class(), "theme-dark");
        assert!(Theme::Dark.is_dark());
        assert!(!Theme::default().is_dark());
        assert_eq!(Theme::Light.toggle_icon(), "☾");
        assert_eq!(Theme::Dark.toggle_icon(), "☀");
    }

    #[test]
    fn stored_value_format() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), r#""dark""#);
        assert_eq!(serde_json::from_str::<Theme>(r#""light""#).unwrap(), Theme::Light);
    }
}
