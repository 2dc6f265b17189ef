//! Error types for the dashboard shell

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    #[error("use_theme must be used within a ThemeProvider")]
    MissingProvider,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse dashboard config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid sidebar widths: collapsed {collapsed}px must be non-zero and narrower than expanded {expanded}px")]
    InvalidWidths { expanded: u32, collapsed: u32 },

    #[error("Initial path '{0}' does not match any navigation entry")]
    UnknownPath(String),
}
