use dioxus::prelude::*;

use crate::components::navigation::{NavItem, ThemeSwitch};
use crate::hooks::{use_dashboard_config, use_sidebar_state};
use crate::style::{sidebar_style, toggle_button_style};
use crate::types::{BOTTOM_ROUTES, PRIMARY_ROUTES};

const LOGO: Asset = asset!("/assets/logo.svg");

#[component]
pub fn Sidebar() -> Element {
    let config = use_dashboard_config();
    let mut state = use_sidebar_state(&config);

    let opened = state.read().opened;
    let container = sidebar_style(opened, &config);
    let toggle = toggle_button_style(opened, &config);
    let toggle_icon_class = format!("nav-icon {}", toggle.icon.symbol());
    let toggle_glyph = toggle.icon.glyph();
    let brand = config.brand.clone();
    let logo_alt = config.logo_alt.clone();

    rsx! {
        aside {
            class: container.class,
            style: "{container.style}",
            "aria-expanded": "{container.aria_expanded}",

            div { class: "sidebar-header",
                div { class: "sidebar-brand",
                    img { src: LOGO, alt: "{logo_alt}" }
                    if opened {
                        span { "{brand}" }
                    }
                }
                button {
                    class: "btn-collapse",
                    style: "{toggle.style}",
                    "aria-label": toggle.aria_label,
                    onclick: move |_| state.write().toggle_opened(),
                    span { class: "{toggle_icon_class}", "aria-hidden": "true", "{toggle_glyph}" }
                }
            }

            nav { class: "sidebar-nav",
                for entry in PRIMARY_ROUTES.iter().copied() {
                    NavItem {
                        key: "{entry.path}",
                        entry,
                        opened,
                        active: state.read().is_active(&entry),
                        on_select: move |path: &'static str| state.write().select_entry(path),
                    }
                }
            }

            div { class: "sidebar-bottom",
                for entry in BOTTOM_ROUTES.iter().copied() {
                    NavItem {
                        key: "{entry.path}",
                        entry,
                        opened,
                        active: state.read().is_active(&entry),
                        on_select: move |path: &'static str| state.write().select_entry(path),
                    }
                }
                ThemeSwitch {}
            }
        }
    }
}
