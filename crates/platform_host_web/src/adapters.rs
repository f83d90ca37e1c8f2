//! Compile-time host strategy selection and adapter composition.

use std::rc::Rc;

use platform_host::{
    BackgroundImageBlob, BackgroundImageFuture, BackgroundImageStore, HostServices, HostStrategy,
    MemoryBackgroundImageStore, MemoryPrefsStore, NoopSoundSink, NoopThemeSink, PrefsStore,
    PrefsStoreFuture, SoundSink, StoredBackgroundImage, ThemeSink,
};

use crate::{DocumentThemeSink, WebBackgroundImageStore, WebPrefsStore, WebSoundSink};

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "headless-host")]
    {
        HostStrategy::Headless
    }

    #[cfg(not(feature = "headless-host"))]
    {
        HostStrategy::Browser
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    selected_host_strategy().as_str()
}

/// Adapter enum that erases the concrete preference backend behind [`PrefsStore`].
#[derive(Debug, Clone)]
pub enum PrefsStoreAdapter {
    /// `localStorage`-backed preferences.
    Browser(WebPrefsStore),
    /// In-memory preferences for headless builds.
    Headless(MemoryPrefsStore),
}

impl PrefsStore for PrefsStoreAdapter {
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        match self {
            Self::Browser(store) => store.load_pref(key),
            Self::Headless(store) => store.load_pref(key),
        }
    }

    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>> {
        match self {
            Self::Browser(store) => store.save_pref(key, raw_json),
            Self::Headless(store) => store.save_pref(key, raw_json),
        }
    }

    fn delete_pref<'a>(&'a self, key: &'a str) -> PrefsStoreFuture<'a, Result<(), String>> {
        match self {
            Self::Browser(store) => store.delete_pref(key),
            Self::Headless(store) => store.delete_pref(key),
        }
    }
}

/// Adapter enum that erases the concrete image backend behind [`BackgroundImageStore`].
#[derive(Debug, Clone)]
pub enum BackgroundImageStoreAdapter {
    /// IndexedDB-backed image storage.
    Browser(WebBackgroundImageStore),
    /// In-memory image storage for headless builds.
    Headless(MemoryBackgroundImageStore),
}

impl BackgroundImageStore for BackgroundImageStoreAdapter {
    fn load_image<'a>(
        &'a self,
    ) -> BackgroundImageFuture<'a, Result<Option<StoredBackgroundImage>, String>> {
        match self {
            Self::Browser(store) => store.load_image(),
            Self::Headless(store) => store.load_image(),
        }
    }

    fn save_image<'a>(
        &'a self,
        blob: &'a BackgroundImageBlob,
    ) -> BackgroundImageFuture<'a, Result<StoredBackgroundImage, String>> {
        match self {
            Self::Browser(store) => store.save_image(blob),
            Self::Headless(store) => store.save_image(blob),
        }
    }

    fn delete_image<'a>(&'a self) -> BackgroundImageFuture<'a, Result<(), String>> {
        match self {
            Self::Browser(store) => store.delete_image(),
            Self::Headless(store) => store.delete_image(),
        }
    }

    fn release_url(&self, url: &str) {
        match self {
            Self::Browser(store) => store.release_url(url),
            Self::Headless(store) => store.release_url(url),
        }
    }
}

/// Builds the preference adapter for the selected host strategy.
pub fn prefs_store() -> PrefsStoreAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => PrefsStoreAdapter::Browser(WebPrefsStore),
        HostStrategy::Headless => PrefsStoreAdapter::Headless(MemoryPrefsStore::default()),
    }
}

/// Builds the background-image adapter for the selected host strategy.
pub fn background_image_store() -> BackgroundImageStoreAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => BackgroundImageStoreAdapter::Browser(WebBackgroundImageStore),
        HostStrategy::Headless => {
            BackgroundImageStoreAdapter::Headless(MemoryBackgroundImageStore::default())
        }
    }
}

/// Composes the full [`HostServices`] bundle for the selected host strategy.
pub fn build_host_services() -> HostServices {
    let strategy = selected_host_strategy();
    let (theme, sound): (Rc<dyn ThemeSink>, Rc<dyn SoundSink>) = match strategy {
        HostStrategy::Browser => (Rc::new(DocumentThemeSink), Rc::new(WebSoundSink)),
        HostStrategy::Headless => (Rc::new(NoopThemeSink), Rc::new(NoopSoundSink)),
    };
    HostServices {
        prefs: Rc::new(prefs_store()),
        background_image: Rc::new(background_image_store()),
        theme,
        sound,
        host_strategy: strategy,
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::{BackgroundImageBlob, MemoryBackgroundImageStore, MemoryPrefsStore};

    use super::*;

    #[test]
    fn strategy_name_matches_selected_strategy() {
        assert_eq!(host_strategy_name(), selected_host_strategy().as_str());
    }

    #[test]
    fn built_services_report_selected_strategy() {
        assert_eq!(build_host_services().host_strategy, selected_host_strategy());
    }

    #[test]
    fn headless_adapters_delegate_to_memory_stores() {
        let prefs = PrefsStoreAdapter::Headless(MemoryPrefsStore::default());
        block_on(prefs.save_pref("desktop.locale.v1", "\"pt\"")).expect("save");
        assert_eq!(
            block_on(prefs.load_pref("desktop.locale.v1")).expect("load"),
            Some("\"pt\"".to_string())
        );

        let images = BackgroundImageStoreAdapter::Headless(MemoryBackgroundImageStore::default());
        let blob = BackgroundImageBlob {
            bytes: vec![1, 2, 3],
            mime_type: "image/png".to_string(),
        };
        let saved = block_on(images.save_image(&blob)).expect("save image");
        assert_eq!(saved.mime_type, "image/png");
        block_on(images.delete_image()).expect("delete image");
        assert_eq!(block_on(images.load_image()).expect("load image"), None);
    }
}
