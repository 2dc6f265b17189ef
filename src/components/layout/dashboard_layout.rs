use dioxus::prelude::*;

use crate::components::layout::{ContentArea, ThemeProvider};
use crate::components::navigation::Sidebar;
use crate::config::DashboardConfig;

#[component]
pub fn DashboardLayout(config: DashboardConfig) -> Element {
    let initial_theme = config.default_theme;
    use_context_provider(|| config.clone());

    rsx! {
        ThemeProvider {
            initial: initial_theme,
            div {
                class: "dashboard-container",
                Sidebar {}
                ContentArea {}
            }
        }
    }
}
