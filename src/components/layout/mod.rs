pub mod content_area;
pub mod dashboard_layout;
pub mod theme_provider;

pub use content_area::ContentArea;
pub use dashboard_layout::DashboardLayout;
pub use theme_provider::ThemeProvider;
