//! Inline style descriptors for the sidebar.
//!
//! Colors are never chosen here: everything refers to the theme aliases
//! (`--bg-sidebar`, `--bg-page`, ...) so the same descriptor works for both
//! themes.

use crate::config::DashboardConfig;
use crate::types::NavIcon;

pub fn transition_for(opened: bool, config: &DashboardConfig) -> &str {
    if opened {
        &config.opening_transition
    } else {
        &config.closing_transition
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SidebarStyle {
    pub class: &'static str,
    pub style: String,
    pub aria_expanded: bool,
}

pub fn sidebar_style(opened: bool, config: &DashboardConfig) -> SidebarStyle {
    let width = if opened {
        config.expanded_width_px
    } else {
        config.collapsed_width_px
    };
    SidebarStyle {
        class: if opened { "sidebar" } else { "sidebar sidebar-collapsed" },
        style: format!("width: {}px; transition: width {};", width, transition_for(opened, config)),
        aria_expanded: opened,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToggleButtonStyle {
    pub style: String,
    pub aria_label: &'static str,
    pub icon: NavIcon,
}

pub fn toggle_button_style(opened: bool, config: &DashboardConfig) -> ToggleButtonStyle {
    let (right, background) = if opened {
        ("-0.5rem", "var(--bg-page)")
    } else {
        ("-2rem", "var(--bg-sidebar)")
    };
    ToggleButtonStyle {
        style: format!(
            "right: {}; background: {}; transition: background 0.3s ease, right {};",
            right,
            background,
            transition_for(opened, config)
        ),
        aria_label: if opened { "Collapse sidebar" } else { "Expand sidebar" },
        icon: if opened { NavIcon::AngleLeft } else { NavIcon::AngleRight },
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavItemStyle {
    pub class: &'static str,
    pub label_style: String,
    pub label_visible: bool,
    pub show_tooltip: bool,
}

pub fn nav_item_style(opened: bool, active: bool, config: &DashboardConfig) -> NavItemStyle {
    let transition = transition_for(opened, config);
    let (margin, max_width, opacity) = if opened {
        ("12px", "200px", 1)
    } else {
        ("0", "0", 0)
    };
    NavItemStyle {
        class: if active { "nav-item active" } else { "nav-item" },
        label_style: format!(
            "margin-left: {margin}; max-width: {max_width}; opacity: {opacity}; \
             transition: max-width {transition}, opacity {transition}, margin-left {transition};"
        ),
        label_visible: opened,
        show_tooltip: !opened,
    }
}
