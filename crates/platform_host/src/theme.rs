//! Document theme attribute sink.

use std::{cell::RefCell, rc::Rc};

/// Name of the root-element attribute carrying the active theme (`data-theme`).
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Side-effecting sink that applies the active theme token to the document.
pub trait ThemeSink {
    /// Applies `theme` (for example `"light"` or `"dark"`).
    fn apply_theme(&self, theme: &str);
}

#[derive(Debug, Clone, Copy, Default)]
/// Theme sink for hosts without a document.
pub struct NoopThemeSink;

impl ThemeSink for NoopThemeSink {
    fn apply_theme(&self, _theme: &str) {}
}

#[derive(Debug, Clone, Default)]
/// Theme sink recording every applied token, in order.
pub struct RecordingThemeSink {
    applied: Rc<RefCell<Vec<String>>>,
}

impl RecordingThemeSink {
    /// Returns every token applied so far.
    pub fn applied(&self) -> Vec<String> {
        self.applied.borrow().clone()
    }
}

impl ThemeSink for RecordingThemeSink {
    fn apply_theme(&self, theme: &str) {
        self.applied.borrow_mut().push(theme.to_string());
    }
}
