//! Dashboard shell: a collapsible navigation sidebar and a light/dark theme provider.

pub mod components;
pub mod config;
pub mod error;
pub mod hooks;
pub mod navigation;
pub mod pages;
pub mod style;
pub mod theme;
pub mod types;

pub mod prelude {
    pub use crate::components::layout::{DashboardLayout, ThemeProvider};
    pub use crate::components::navigation::Sidebar;
    pub use crate::config::DashboardConfig;
    pub use crate::error::{ConfigError, ThemeError};
    pub use crate::hooks::{try_use_theme, use_theme, SidebarState, ThemeContext};
    pub use crate::theme::{root_css, ThemeName};
    pub use crate::types::{all_routes, find_route, NavIcon, NavigationEntry, BOTTOM_ROUTES, PRIMARY_ROUTES};
}
