//! IndexedDB-backed background-image store.

use platform_host::{
    BackgroundImageBlob, BackgroundImageFuture, BackgroundImageStore, StoredBackgroundImage,
};

#[derive(Debug, Clone, Copy, Default)]
/// Browser background-image store; URLs are `blob:` object URLs.
pub struct WebBackgroundImageStore;

impl BackgroundImageStore for WebBackgroundImageStore {
    fn load_image<'a>(
        &'a self,
    ) -> BackgroundImageFuture<'a, Result<Option<StoredBackgroundImage>, String>> {
        Box::pin(async move { crate::bridge::load_background_image().await })
    }

    fn save_image<'a>(
        &'a self,
        blob: &'a BackgroundImageBlob,
    ) -> BackgroundImageFuture<'a, Result<StoredBackgroundImage, String>> {
        Box::pin(async move {
            crate::bridge::save_background_image(&blob.bytes, &blob.mime_type).await
        })
    }

    fn delete_image<'a>(&'a self) -> BackgroundImageFuture<'a, Result<(), String>> {
        Box::pin(async move { crate::bridge::delete_background_image().await })
    }

    fn release_url(&self, url: &str) {
        crate::bridge::revoke_object_url(url);
    }
}
