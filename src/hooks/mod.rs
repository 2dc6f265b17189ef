pub mod use_dashboard_config;
pub mod use_sidebar_state;
pub mod use_theme;

pub use use_dashboard_config::use_dashboard_config;
pub use use_sidebar_state::{use_sidebar_state, SidebarState};
pub use use_theme::{try_use_theme, use_theme, use_theme_provider, ThemeContext};
