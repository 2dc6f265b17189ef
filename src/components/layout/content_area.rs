use dioxus::prelude::*;

use crate::hooks::use_theme;

#[component]
pub fn ContentArea() -> Element {
    let theme = use_theme();
    let theme_name = theme.current().as_str();

    rsx! {
        main { class: "content-area",
            header { class: "content-header",
                h2 { "Dashboard" }
                span { class: "content-theme-badge", "{theme_name}" }
            }
            div { class: "content-body" }
        }
    }
}
