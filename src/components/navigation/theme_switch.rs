use dioxus::prelude::*;

use crate::hooks::use_theme;

#[component]
pub fn ThemeSwitch() -> Element {
    let mut theme = use_theme();

    rsx! {
        button {
            class: "theme-switch",
            r#type: "button",
            onclick: move |_| theme.toggle(),
            "Toggle Theme"
        }
    }
}
