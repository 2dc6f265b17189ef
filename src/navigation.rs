//! Hand-off point toward a router.
//!
//! The dashboard only records which entry is active; no route change happens.

use dioxus::prelude::Key;

pub fn request_navigation(path: &str) {
    tracing::info!("going to {}", path);
}

/// Keys that activate a focused navigation entry.
pub fn is_activation_key(key: &Key) -> bool {
    *key == Key::Enter
}
