//! Theme sink writing the `data-theme` attribute on `<html>`.

use platform_host::{ThemeSink, THEME_ATTRIBUTE};

#[derive(Debug, Clone, Copy, Default)]
/// Applies the theme token to `document.documentElement`.
pub struct DocumentThemeSink;

impl ThemeSink for DocumentThemeSink {
    fn apply_theme(&self, theme: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(root) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
            else {
                return;
            };
            let _ = root.set_attribute(THEME_ATTRIBUTE, theme);
        }

        #[cfg(not(target_arch = "wasm32"))]
        let _ = (THEME_ATTRIBUTE, theme);
    }
}
