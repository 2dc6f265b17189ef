use dioxus::prelude::*;

use crate::config::DashboardConfig;

/// Config provided by `DashboardLayout`, or the defaults when rendered on its own.
pub fn use_dashboard_config() -> DashboardConfig {
    try_use_context::<DashboardConfig>().unwrap_or_default()
}
