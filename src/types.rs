use serde::Serialize;

/// Symbolic icon identifier, resolved to a glyph by the external icon set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NavIcon {
    House,
    ChartLine,
    ChartColumn,
    Wallet,
    ChartPie,
    Envelope,
    Sliders,
    PhoneVolume,
    AngleLeft,
    AngleRight,
}

impl NavIcon {
    /// Class name understood by the icon font stylesheet.
    pub fn symbol(&self) -> &'static str {
        match self {
            NavIcon::House => "fa-house",
            NavIcon::ChartLine => "fa-chart-line",
            NavIcon::ChartColumn => "fa-chart-column",
            NavIcon::Wallet => "fa-wallet",
            NavIcon::ChartPie => "fa-chart-pie",
            NavIcon::Envelope => "fa-envelope",
            NavIcon::Sliders => "fa-sliders",
            NavIcon::PhoneVolume => "fa-phone-volume",
            NavIcon::AngleLeft => "fa-angle-left",
            NavIcon::AngleRight => "fa-angle-right",
        }
    }

    /// Plain text fallback shown when the icon font is not loaded.
    pub fn glyph(&self) -> &'static str {
        match self {
            NavIcon::House => "⌂",
            NavIcon::ChartLine => "📈",
            NavIcon::ChartColumn => "📊",
            NavIcon::Wallet => "👛",
            NavIcon::ChartPie => "◔",
            NavIcon::Envelope => "✉",
            NavIcon::Sliders => "⚙",
            NavIcon::PhoneVolume => "☎",
            NavIcon::AngleLeft => "‹",
            NavIcon::AngleRight => "›",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NavigationEntry {
    pub title: &'static str,
    pub icon: NavIcon,
    pub path: &'static str,
}

impl NavigationEntry {
    pub const fn new(title: &'static str, icon: NavIcon, path: &'static str) -> Self {
        Self { title, icon, path }
    }
}

// Main navigation list
pub const PRIMARY_ROUTES: &[NavigationEntry] = &[
    NavigationEntry::new("Home", NavIcon::House, "/"),
    NavigationEntry::new("Sales", NavIcon::ChartLine, "/sales"),
    NavigationEntry::new("Costs", NavIcon::ChartColumn, "/costs"),
    NavigationEntry::new("Payments", NavIcon::Wallet, "/payments"),
    NavigationEntry::new("Finances", NavIcon::ChartPie, "/finances"),
    NavigationEntry::new("Messages", NavIcon::Envelope, "/messages"),
];

// Pinned to the bottom block, above the theme switch
pub const BOTTOM_ROUTES: &[NavigationEntry] = &[
    NavigationEntry::new("Settings", NavIcon::Sliders, "/settings"),
    NavigationEntry::new("Support", NavIcon::PhoneVolume, "/support"),
];

/// Primary entries followed by bottom entries.
pub fn all_routes() -> impl Iterator<Item = &'static NavigationEntry> {
    PRIMARY_ROUTES.iter().chain(BOTTOM_ROUTES.iter())
}

pub fn find_route(path: &str) -> Option<NavigationEntry> {
    all_routes().find(|entry| entry.path == path).copied()
}
