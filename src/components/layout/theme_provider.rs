use dioxus::prelude::*;

use crate::hooks::use_theme_provider;
use crate::theme::{root_css, ThemeName};

/// Owns the theme for everything below it and writes the matching `:root` variables.
#[component]
pub fn ThemeProvider(#[props(default)] initial: ThemeName, children: Element) -> Element {
    let theme = use_theme_provider(initial);
    let current = theme.current();
    let variables = root_css(current);

    rsx! {
        style { {variables} }
        div {
            class: "theme-root",
            "data-theme": current.as_str(),
            {children}
        }
    }
}
