use dioxus::prelude::*;

use crate::components::layout::DashboardLayout;
use crate::config::DashboardConfig;

#[component]
pub fn Dashboard() -> Element {
    let config = use_hook(DashboardConfig::load_embedded);

    rsx! {
        DashboardLayout { config }
    }
}
