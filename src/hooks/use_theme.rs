use dioxus::prelude::*;

use crate::error::ThemeError;
use crate::theme::{ThemeName, ThemeVariable};

/// Handle on the theme owned by the nearest `ThemeProvider`.
#[derive(Clone, Copy, PartialEq)]
pub struct ThemeContext {
    theme: Signal<ThemeName>,
}

impl ThemeContext {
    pub fn current(&self) -> ThemeName {
        *self.theme.read()
    }

    pub fn toggle(&mut self) {
        let previous = *self.theme.peek();
        let next = previous.toggled();
        self.theme.set(next);
        tracing::debug!("theme {} -> {}", previous.as_str(), next.as_str());
    }

    pub fn variables(&self) -> &'static [ThemeVariable] {
        self.current().variables()
    }
}

/// Create the theme context for this subtree. Only the provider calls this.
pub fn use_theme_provider(initial: ThemeName) -> ThemeContext {
    use_context_provider(|| ThemeContext {
        theme: Signal::new(initial),
    })
}

pub fn try_use_theme() -> Result<ThemeContext, ThemeError> {
    try_use_context::<ThemeContext>().ok_or(ThemeError::MissingProvider)
}

/// Like `try_use_theme`, but panics when there is no enclosing provider.
pub fn use_theme() -> ThemeContext {
    match try_use_theme() {
        Ok(theme) => theme,
        Err(e) => panic!("{}", e),
    }
}
