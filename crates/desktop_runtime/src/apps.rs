//! App presentation lookups: icons, placeholder glyphs, window titles, content routing.

use crate::{
    i18n::translate,
    model::{DesktopState, TRASH_APP_ID},
};

/// App id of the built-in settings window.
pub const SETTINGS_APP_ID: &str = "settings";

const ICON_ASSETS: [(&str, &str); 4] = [
    ("settings", "/icons/apps/settings.svg"),
    (TRASH_APP_ID, "/icons/apps/trash.svg"),
    ("github", "/icons/apps/github.svg"),
    ("linkedin", "/icons/apps/linkedin.svg"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Body rendered inside a window.
pub enum WindowContent {
    Settings,
    Trash,
    Placeholder,
}

pub fn window_content(app_id: &str) -> WindowContent {
    match app_id {
        SETTINGS_APP_ID => WindowContent::Settings,
        TRASH_APP_ID => WindowContent::Trash,
        _ => WindowContent::Placeholder,
    }
}

/// Bundled icon for `app_id`, if one ships with the site.
pub fn icon_asset(app_id: &str) -> Option<&'static str> {
    ICON_ASSETS
        .iter()
        .find(|(id, _)| *id == app_id)
        .map(|(_, path)| *path)
}

/// Uppercased first letter of `name`, shown when no icon exists.
pub fn placeholder_glyph(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "?".to_string())
}

/// Header title for the window of `app_id`.
pub fn window_title(state: &DesktopState, app_id: &str) -> String {
    match window_content(app_id) {
        WindowContent::Trash => translate(state.locale, "trash.title"),
        WindowContent::Settings => translate(state.locale, "settings.title"),
        WindowContent::Placeholder => state
            .app_name(app_id)
            .map(str::to_string)
            .unwrap_or_else(|| app_id.to_string()),
    }
}
