pub mod nav_item;
pub mod sidebar;
pub mod theme_switch;

pub use nav_item::NavItem;
pub use sidebar::Sidebar;
pub use theme_switch::ThemeSwitch;
