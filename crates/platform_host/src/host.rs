//! Host service bundle injected into the desktop runtime.

use std::rc::Rc;

use crate::{
    BackgroundImageStore, MemoryBackgroundImageStore, MemoryPrefsStore, NoopSoundSink,
    NoopThemeSink, PrefsStore, SoundSink, ThemeSink,
};

/// Stable host strategy selected for the current build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed composition (`localStorage`, IndexedDB, DOM).
    Browser,
    /// In-memory composition for tests and non-browser targets.
    Headless,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Headless => "headless",
        }
    }
}

/// Runtime-selected host services.
///
/// Environment-specific adapter selection happens before this bundle reaches
/// `desktop_runtime`, which keeps the runtime free of browser API details.
#[derive(Clone)]
pub struct HostServices {
    /// Key/value preference store (locale).
    pub prefs: Rc<dyn PrefsStore>,
    /// Background-image blob store.
    pub background_image: Rc<dyn BackgroundImageStore>,
    /// Document theme attribute sink.
    pub theme: Rc<dyn ThemeSink>,
    /// UI sound-cue sink.
    pub sound: Rc<dyn SoundSink>,
    /// Strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// Builds an in-memory bundle with silent sinks.
    pub fn headless() -> Self {
        Self {
            prefs: Rc::new(MemoryPrefsStore::default()),
            background_image: Rc::new(MemoryBackgroundImageStore::default()),
            theme: Rc::new(NoopThemeSink),
            sound: Rc::new(NoopSoundSink),
            host_strategy: HostStrategy::Headless,
        }
    }
}
