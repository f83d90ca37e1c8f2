//! Browser (`wasm32`) implementations of the [`platform_host`] service contracts.
//!
//! - `storage::local_prefs`: `localStorage` preference store
//! - `storage::background_image`: IndexedDB background-image store (JS bridge in `bridge`)
//! - `theme`: `data-theme` attribute on the document element
//! - `sound`: short UI cues through `HtmlAudioElement`
//! - `file_input`: reading user-selected files into memory
//!
//! Every adapter compiles on non-wasm targets and degrades to a no-op there.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and the host bundle factory.
pub mod adapters;
mod bridge;
pub mod file_input;
pub mod sound;
pub mod storage;
pub mod theme;

pub use adapters::{
    background_image_store, build_host_services, host_strategy_name, prefs_store,
    selected_host_strategy, BackgroundImageStoreAdapter, PrefsStoreAdapter,
};
pub use file_input::{first_selected_file, read_file_bytes, SelectedFile};
pub use sound::WebSoundSink;
pub use storage::background_image::WebBackgroundImageStore;
pub use storage::local_prefs::WebPrefsStore;
pub use theme::DocumentThemeSink;
