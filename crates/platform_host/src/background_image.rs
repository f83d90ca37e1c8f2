//! Background-image blob storage contract.
//!
//! The store keeps a single "current" image. Callers only ever see the display URL of the stored
//! image; how the URL is produced (object URL, data URL, synthetic id) is an adapter detail.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

use serde::{Deserialize, Serialize};

use crate::time::unix_time_ms_now;

/// Object-safe boxed future used by [`BackgroundImageStore`] async methods.
pub type BackgroundImageFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Raw image payload selected by the user.
pub struct BackgroundImageBlob {
    /// Encoded image bytes, stored as-is.
    pub bytes: Vec<u8>,
    /// MIME type reported by the file picker.
    pub mime_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Display handle for the stored background image.
pub struct StoredBackgroundImage {
    /// URL usable as a CSS `background-image` / `<img src>`.
    pub url: String,
    /// MIME type of the stored payload.
    pub mime_type: String,
    /// Unix milliseconds when the payload was written.
    #[serde(default)]
    pub saved_at_unix_ms: u64,
}

/// Host service persisting the current desktop background image.
pub trait BackgroundImageStore {
    /// Loads the current image, if one was saved.
    fn load_image<'a>(
        &'a self,
    ) -> BackgroundImageFuture<'a, Result<Option<StoredBackgroundImage>, String>>;

    /// Replaces the current image and returns its display handle.
    fn save_image<'a>(
        &'a self,
        blob: &'a BackgroundImageBlob,
    ) -> BackgroundImageFuture<'a, Result<StoredBackgroundImage, String>>;

    /// Deletes the current image. Deleting when nothing is stored succeeds.
    fn delete_image<'a>(&'a self) -> BackgroundImageFuture<'a, Result<(), String>>;

    /// Releases a display URL previously handed out by this store.
    fn release_url(&self, _url: &str) {}
}

#[derive(Debug, Clone, Copy, Default)]
/// Store for hosts without blob storage: loads find nothing and saves fail.
pub struct NoopBackgroundImageStore;

impl BackgroundImageStore for NoopBackgroundImageStore {
    fn load_image<'a>(
        &'a self,
    ) -> BackgroundImageFuture<'a, Result<Option<StoredBackgroundImage>, String>> {
        Box::pin(async { Ok(None) })
    }

    fn save_image<'a>(
        &'a self,
        blob: &'a BackgroundImageBlob,
    ) -> BackgroundImageFuture<'a, Result<StoredBackgroundImage, String>> {
        Box::pin(async move {
            Err(format!(
                "background image storage unavailable ({} bytes of {})",
                blob.bytes.len(),
                blob.mime_type
            ))
        })
    }

    fn delete_image<'a>(&'a self) -> BackgroundImageFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Default)]
struct MemoryImageSlot {
    current: Option<(BackgroundImageBlob, StoredBackgroundImage)>,
    revision: u64,
}

#[derive(Debug, Clone, Default)]
/// In-memory store handing out `memory://background-image/<revision>` URLs.
pub struct MemoryBackgroundImageStore {
    slot: Rc<RefCell<MemoryImageSlot>>,
}

impl MemoryBackgroundImageStore {
    /// Returns the bytes of the stored payload.
    pub fn stored_bytes(&self) -> Option<Vec<u8>> {
        self.slot
            .borrow()
            .current
            .as_ref()
            .map(|(blob, _)| blob.bytes.clone())
    }
}

impl BackgroundImageStore for MemoryBackgroundImageStore {
    fn load_image<'a>(
        &'a self,
    ) -> BackgroundImageFuture<'a, Result<Option<StoredBackgroundImage>, String>> {
        Box::pin(async move {
            Ok(self
                .slot
                .borrow()
                .current
                .as_ref()
                .map(|(_, stored)| stored.clone()))
        })
    }

    fn save_image<'a>(
        &'a self,
        blob: &'a BackgroundImageBlob,
    ) -> BackgroundImageFuture<'a, Result<StoredBackgroundImage, String>> {
        Box::pin(async move {
            let mut slot = self.slot.borrow_mut();
            slot.revision = slot.revision.saturating_add(1);
            let stored = StoredBackgroundImage {
                url: format!("memory://background-image/{}", slot.revision),
                mime_type: blob.mime_type.clone(),
                saved_at_unix_ms: unix_time_ms_now(),
            };
            slot.current = Some((blob.clone(), stored.clone()));
            Ok(stored)
        })
    }

    fn delete_image<'a>(&'a self) -> BackgroundImageFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.slot.borrow_mut().current = None;
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    fn png(bytes: &[u8]) -> BackgroundImageBlob {
        BackgroundImageBlob {
            bytes: bytes.to_vec(),
            mime_type: "image/png".to_string(),
        }
    }

    #[test]
    fn memory_store_replaces_current_image_with_fresh_url() {
        let store = MemoryBackgroundImageStore::default();
        let first = block_on(store.save_image(&png(&[1, 2]))).expect("save first");
        let second = block_on(store.save_image(&png(&[3]))).expect("save second");

        assert_ne!(first.url, second.url);
        assert_eq!(store.stored_bytes(), Some(vec![3]));
        let loaded = block_on(store.load_image()).expect("load");
        assert_eq!(loaded.map(|image| image.url), Some(second.url));
    }

    #[test]
    fn memory_store_delete_clears_image() {
        let store = MemoryBackgroundImageStore::default();
        block_on(store.save_image(&png(&[9]))).expect("save");
        block_on(store.delete_image()).expect("delete");
        block_on(store.delete_image()).expect("delete again");

        assert_eq!(block_on(store.load_image()).expect("load"), None);
        assert_eq!(store.stored_bytes(), None);
    }

    #[test]
    fn noop_store_rejects_saves() {
        let store: &dyn BackgroundImageStore = &NoopBackgroundImageStore;
        assert!(block_on(store.save_image(&png(&[0]))).is_err());
        assert_eq!(block_on(store.load_image()).expect("load"), None);
    }
}
