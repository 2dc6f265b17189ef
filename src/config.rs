//! Dashboard configuration

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::theme::ThemeName;
use crate::types::find_route;

static EMBEDDED_CONFIG: &str = include_str!("../assets/dashboard.json");

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub brand: String,
    pub logo_alt: String,
    pub expanded_width_px: u32,
    pub collapsed_width_px: u32,
    pub opening_transition: String,
    pub closing_transition: String,
    pub initially_opened: bool,
    pub initial_path: String,
    pub default_theme: ThemeName,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            brand: "TensorFlow".to_string(),
            logo_alt: "TensorFlow logo".to_string(),
            expanded_width_px: 240,
            collapsed_width_px: 72,
            // Opening is slower than closing
            opening_transition: "0.25s ease-out".to_string(),
            closing_transition: "0.150s ease-in-out".to_string(),
            initially_opened: true,
            initial_path: "/".to_string(),
            default_theme: ThemeName::Dark,
        }
    }
}

impl DashboardConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: DashboardConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.collapsed_width_px == 0 || self.collapsed_width_px >= self.expanded_width_px {
            return Err(ConfigError::InvalidWidths {
                expanded: self.expanded_width_px,
                collapsed: self.collapsed_width_px,
            });
        }
        if find_route(&self.initial_path).is_none() {
            return Err(ConfigError::UnknownPath(self.initial_path.clone()));
        }
        Ok(())
    }

    /// Load the config compiled in from `assets/dashboard.json`, falling back to defaults.
    pub fn load_embedded() -> Self {
        match Self::from_json(EMBEDDED_CONFIG) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("{}", e);
                tracing::warn!("Using default dashboard config");
                Self::default()
            }
        }
    }
}
