//! Light/dark theme tables.
//!
//! A theme only decides which design token each component alias points at.
//! The tokens themselves (`--color-*`) come from `assets/main.css`.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    Light,
    #[default]
    Dark,
}

/// One `alias: token` binding inside the `:root` block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeVariable {
    pub name: &'static str,
    pub value: &'static str,
}

const fn var(name: &'static str, value: &'static str) -> ThemeVariable {
    ThemeVariable { name, value }
}

const LIGHT_VARIABLES: &[ThemeVariable] = &[
    var("--bg-sidebar", "var(--color-sidebar-background-light-default)"),
    var("--bg-hover", "var(--color-sidebar-background-light-hover)"),
    var("--bg-active", "var(--color-sidebar-background-light-active)"),
    var("--text-default", "var(--color-text-light-default)"),
    var("--text-hover", "var(--color-text-light-hover)"),
    var("--text-active", "var(--color-text-light-active)"),
    var("--logo-color", "var(--color-text-logo-light-default)"),
    var("--btn-bg", "var(--color-button-background-light-default)"),
    var("--btn-bg-active", "var(--color-button-background-light-active)"),
    var("--bg-page", "var(--color-background-light)"),
    var("--text-page", "var(--color-text-light)"),
];

const DARK_VARIABLES: &[ThemeVariable] = &[
    var("--bg-sidebar", "var(--color-sidebar-background-dark-default)"),
    var("--bg-hover", "var(--color-sidebar-background-dark-hover)"),
    var("--bg-active", "var(--color-sidebar-background-dark-active)"),
    var("--text-default", "var(--color-text-dark-default)"),
    var("--text-hover", "var(--color-text-dark-hover)"),
    var("--text-active", "var(--color-text-dark-active)"),
    var("--logo-color", "var(--color-text-logo-dark-default)"),
    var("--btn-bg", "var(--color-button-background-dark-default)"),
    var("--btn-bg-active", "var(--color-button-background-dark-active)"),
    var("--bg-page", "var(--color-background-dark)"),
    var("--text-page", "var(--color-text-dark)"),
];

impl ThemeName {
    pub fn toggled(self) -> Self {
        match self {
            ThemeName::Light => ThemeName::Dark,
            ThemeName::Dark => ThemeName::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeName::Light => "light",
            ThemeName::Dark => "dark",
        }
    }

    pub fn variables(&self) -> &'static [ThemeVariable] {
        match self {
            ThemeName::Light => LIGHT_VARIABLES,
            ThemeName::Dark => DARK_VARIABLES,
        }
    }
}

/// Render the `:root` block for a theme.
pub fn root_css(theme: ThemeName) -> String {
    let mut css = String::from(":root {\n");
    for variable in theme.variables() {
        css.push_str("  ");
        css.push_str(variable.name);
        css.push_str(": ");
        css.push_str(variable.value);
        css.push_str(";\n");
    }
    css.push('}');
    css
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dark() {
        assert_eq!(ThemeName::default(), ThemeName::Dark);
    }

    #[test]
    fn test_toggle_parity() {
        let mut theme = ThemeName::default();
        for count in 1..=10 {
            theme = theme.toggled();
            let expected = if count % 2 == 1 { ThemeName::Light } else { ThemeName::Dark };
            assert_eq!(theme, expected);
        }
    }

    #[test]
    fn test_both_themes_bind_the_same_aliases() {
        let light: Vec<&str> = ThemeName::Light.variables().iter().map(|v| v.name).collect();
        let dark: Vec<&str> = ThemeName::Dark.variables().iter().map(|v| v.name).collect();
        assert_eq!(light, dark);
    }

    #[test]
    fn test_tokens_match_theme() {
        for v in ThemeName::Light.variables() {
            assert!(v.value.contains("light"), "{} -> {}", v.name, v.value);
        }
        for v in ThemeName::Dark.variables() {
            assert!(v.value.contains("dark"), "{} -> {}", v.name, v.value);
        }
    }

    #[test]
    fn test_root_css() {
        let css = root_css(ThemeName::Dark);
        assert!(css.starts_with(":root {"));
        assert!(css.contains("--bg-sidebar: var(--color-sidebar-background-dark-default);"));
        assert!(css.ends_with('}'));
        assert!(!css.contains("light"));
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&ThemeName::Light).unwrap(), "\"light\"");
        let parsed: ThemeName = serde_json::from_str("\"dark\"").unwrap();
        assert_eq!(parsed, ThemeName::Dark);
    }
}
