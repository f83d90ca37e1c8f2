//! Typed host-service contracts shared by the desktop runtime and its browser adapters.
//!
//! The desktop runtime never talks to browser APIs directly. Everything it needs from the
//! environment (preference storage, background-image blob storage, the document theme attribute,
//! and UI sound cues) is expressed here as a small trait with in-memory and no-op adapters, while
//! concrete browser implementations live in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod background_image;
pub mod host;
pub mod prefs;
pub mod sound;
pub mod theme;
pub mod time;

pub use background_image::{
    BackgroundImageBlob, BackgroundImageFuture, BackgroundImageStore, MemoryBackgroundImageStore,
    NoopBackgroundImageStore, StoredBackgroundImage,
};
pub use host::{HostServices, HostStrategy};
pub use prefs::{
    load_pref_with, save_pref_with, MemoryPrefsStore, NoopPrefsStore, PrefsStore,
    PrefsStoreFuture,
};
pub use sound::{NoopSoundSink, RecordingSoundSink, SoundSink};
pub use theme::{NoopThemeSink, RecordingThemeSink, ThemeSink, THEME_ATTRIBUTE};
pub use time::unix_time_ms_now;
