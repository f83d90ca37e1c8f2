//! IndexedDB bridge for background-image persistence.
//!
//! The WASM side embeds a small JS module that owns the `desktopPreferences` database; images
//! are stored as `Blob`s under a single `current` key and handed back as object URLs. Non-wasm
//! targets get an inert shim.

use platform_host::StoredBackgroundImage;

#[cfg(target_arch = "wasm32")]
mod imp {
    use super::*;
    use js_sys::Promise;
    use serde_wasm_bindgen::from_value;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::JsFuture;

    #[wasm_bindgen(inline_js = r#"
const DB_NAME = 'desktopPreferences';
const DB_VERSION = 1;
const STORE_NAME = 'backgroundImages';
const IMAGE_KEY = 'current';

function requestToPromise(req) {
  return new Promise((resolve, reject) => {
    req.onsuccess = () => resolve(req.result);
    req.onerror = () => reject(req.error || new Error('IndexedDB request failed'));
  });
}

async function openDb() {
  if (typeof indexedDB === 'undefined') {
    throw new Error('IndexedDB is unavailable in this browser context');
  }
  return await new Promise((resolve, reject) => {
    const req = indexedDB.open(DB_NAME, DB_VERSION);
    req.onupgradeneeded = () => {
      const db = req.result;
      if (!db.objectStoreNames.contains(STORE_NAME)) {
        db.createObjectStore(STORE_NAME);
      }
    };
    req.onsuccess = () => resolve(req.result);
    req.onerror = () => reject(req.error || new Error('Failed to open IndexedDB'));
  });
}

async function withStore(mode, fn) {
  const db = await openDb();
  const tx = db.transaction(STORE_NAME, mode);
  return await fn(tx.objectStore(STORE_NAME));
}

function toHandle(record) {
  return {
    url: URL.createObjectURL(record.blob),
    mimeType: record.mimeType,
    savedAtUnixMs: record.timestamp,
  };
}

export async function jsBackgroundImageLoad() {
  const record = await withStore('readonly', (store) => requestToPromise(store.get(IMAGE_KEY)));
  return record ? toHandle(record) : null;
}

export async function jsBackgroundImageSave(bytes, mimeType) {
  const record = {
    id: IMAGE_KEY,
    blob: new Blob([bytes], { type: mimeType }),
    timestamp: Date.now(),
    mimeType,
  };
  await withStore('readwrite', (store) => requestToPromise(store.put(record, IMAGE_KEY)));
  return toHandle(record);
}

export async function jsBackgroundImageDelete() {
  await withStore('readwrite', (store) => requestToPromise(store.delete(IMAGE_KEY)));
  return null;
}
"#)]
    extern "C" {
        #[wasm_bindgen(js_name = jsBackgroundImageLoad)]
        fn js_background_image_load() -> Promise;
        #[wasm_bindgen(js_name = jsBackgroundImageSave)]
        fn js_background_image_save(bytes: &[u8], mime_type: &str) -> Promise;
        #[wasm_bindgen(js_name = jsBackgroundImageDelete)]
        fn js_background_image_delete() -> Promise;
    }

    async fn await_promise(promise: Promise) -> Result<JsValue, String> {
        JsFuture::from(promise).await.map_err(js_error_to_string)
    }

    fn js_error_to_string(err: JsValue) -> String {
        if let Some(text) = err.as_string() {
            return text;
        }
        if let Ok(message) = js_sys::Reflect::get(&err, &JsValue::from_str("message")) {
            if let Some(text) = message.as_string() {
                return text;
            }
        }
        format!("{err:?}")
    }

    pub async fn load_background_image() -> Result<Option<StoredBackgroundImage>, String> {
        let value = await_promise(js_background_image_load()).await?;
        if value.is_null() || value.is_undefined() {
            return Ok(None);
        }
        from_value(value).map(Some).map_err(|e| e.to_string())
    }

    pub async fn save_background_image(
        bytes: &[u8],
        mime_type: &str,
    ) -> Result<StoredBackgroundImage, String> {
        let value = await_promise(js_background_image_save(bytes, mime_type)).await?;
        from_value(value).map_err(|e| e.to_string())
    }

    pub async fn delete_background_image() -> Result<(), String> {
        let _ = await_promise(js_background_image_delete()).await?;
        Ok(())
    }

    pub fn revoke_object_url(url: &str) {
        if url.starts_with("blob:") {
            let _ = web_sys::Url::revoke_object_url(url);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod imp {
    use super::*;

    pub async fn load_background_image() -> Result<Option<StoredBackgroundImage>, String> {
        Ok(None)
    }

    pub async fn save_background_image(
        bytes: &[u8],
        mime_type: &str,
    ) -> Result<StoredBackgroundImage, String> {
        Err(format!(
            "IndexedDB unavailable on this target ({} bytes of {mime_type})",
            bytes.len()
        ))
    }

    pub async fn delete_background_image() -> Result<(), String> {
        Ok(())
    }

    pub fn revoke_object_url(_url: &str) {}
}

pub(crate) use imp::{
    delete_background_image, load_background_image, revoke_object_url, save_background_image,
};
