use dioxus::prelude::*;

use crate::config::DashboardConfig;
use crate::navigation::request_navigation;
use crate::types::{all_routes, NavigationEntry};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarState {
    pub opened: bool,
    pub active_path: String,
}

impl Default for SidebarState {
    fn default() -> Self {
        Self {
            opened: true,
            active_path: "/".to_string(),
        }
    }
}

impl SidebarState {
    pub fn from_config(config: &DashboardConfig) -> Self {
        Self {
            opened: config.initially_opened,
            active_path: config.initial_path.clone(),
        }
    }

    pub fn toggle_opened(&mut self) {
        self.opened = !self.opened;
        tracing::debug!(opened = self.opened, "sidebar toggled");
    }

    /// Mark `path` as active and pass it on to the navigation boundary.
    pub fn select_entry(&mut self, path: &str) {
        self.active_path = path.to_string();
        request_navigation(path);
    }

    pub fn is_active(&self, entry: &NavigationEntry) -> bool {
        self.active_path == entry.path
    }

    pub fn active_entry(&self) -> Option<NavigationEntry> {
        all_routes().find(|entry| self.is_active(entry)).copied()
    }
}

pub fn use_sidebar_state(config: &DashboardConfig) -> Signal<SidebarState> {
    let initial = SidebarState::from_config(config);
    use_signal(move || initial)
}
