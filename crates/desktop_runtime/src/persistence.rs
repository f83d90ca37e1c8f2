//! Persistence glue between reducer effects and the injected host services.
//!
//! Locale is the only preference stored through [`platform_host::PrefsStore`]; the background
//! image lives in the [`platform_host::BackgroundImageStore`]. Theme and dock layout are
//! session-only.

use platform_host::{load_pref_with, save_pref_with, BackgroundImageBlob};

use crate::{host::DesktopHostContext, model::Locale};

/// Preference key for the UI locale.
pub const LOCALE_PREF_KEY: &str = "desktop.locale.v1";

/// Loads the persisted locale, logging and ignoring malformed or unreadable values.
pub async fn load_locale(host: &DesktopHostContext) -> Option<Locale> {
    match load_pref_with::<_, Locale>(host.prefs_store().as_ref(), LOCALE_PREF_KEY).await {
        Ok(locale) => locale,
        Err(err) => {
            leptos::logging::warn!("locale load failed: {err}");
            None
        }
    }
}

/// Persists the locale preference.
///
/// # Errors
///
/// Returns an error when the prefs store write fails.
pub async fn persist_locale(host: &DesktopHostContext, locale: Locale) -> Result<(), String> {
    save_pref_with(host.prefs_store().as_ref(), LOCALE_PREF_KEY, &locale).await
}

/// Loads the display URL of the stored background image.
///
/// # Errors
///
/// Returns an error when the image store read fails.
pub async fn load_background_image(host: &DesktopHostContext) -> Result<Option<String>, String> {
    Ok(host
        .background_image_store()
        .load_image()
        .await?
        .map(|image| image.url))
}

/// Stores a validated background image and returns its display URL.
///
/// # Errors
///
/// Returns an error when the image store write fails.
pub async fn save_background_image(
    host: &DesktopHostContext,
    bytes: Vec<u8>,
    mime_type: String,
) -> Result<String, String> {
    let blob = BackgroundImageBlob { bytes, mime_type };
    Ok(host
        .background_image_store()
        .save_image(&blob)
        .await?
        .url)
}

/// Deletes the stored background image.
///
/// # Errors
///
/// Returns an error when the image store delete fails.
pub async fn delete_background_image(host: &DesktopHostContext) -> Result<(), String> {
    host.background_image_store().delete_image().await
}
