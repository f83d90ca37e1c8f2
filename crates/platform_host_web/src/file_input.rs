//! Reading user-selected files from `<input type="file">` elements.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[derive(Debug, Clone, PartialEq)]
/// Metadata of a picked file, available before its bytes are read.
pub struct SelectedFile {
    /// File name as reported by the browser.
    pub name: String,
    /// MIME type as reported by the browser (may be empty).
    pub mime_type: String,
    /// Size in bytes.
    pub size: u64,
}

/// Returns the first file selected in the input targeted by `ev`, with its metadata.
pub fn first_selected_file(ev: &web_sys::Event) -> Option<(web_sys::File, SelectedFile)> {
    #[cfg(target_arch = "wasm32")]
    {
        let input = ev
            .target()?
            .dyn_into::<web_sys::HtmlInputElement>()
            .ok()?;
        let file = input.files()?.get(0)?;
        // Allow re-selecting the same file later.
        input.set_value("");
        let meta = SelectedFile {
            name: file.name(),
            mime_type: file.type_(),
            size: file.size().max(0.0) as u64,
        };
        Some((file, meta))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = ev;
        None
    }
}

/// Reads the full contents of `file`.
///
/// # Errors
///
/// Returns an error when the browser fails to read the file.
pub async fn read_file_bytes(file: &web_sys::File) -> Result<Vec<u8>, String> {
    #[cfg(target_arch = "wasm32")]
    {
        let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
            .await
            .map_err(|e| format!("file read failed: {e:?}"))?;
        Ok(js_sys::Uint8Array::new(&buffer).to_vec())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = file;
        Err("file reading requires a browser".to_string())
    }
}
