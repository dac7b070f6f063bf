//! File download and the confirmation prompt.

use js_sys::Array;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use scribe_core::{Confirm, FileSaver, PlatformError};

use crate::dom::{document, js_error, window};

/// Saves files through a temporary object URL and a clicked `<a download>`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserDownload;

impl FileSaver for BrowserDownload {
    fn save_file(&self, filename: &str, mime: &str, contents: &str) -> Result<(), PlatformError> {
        let parts = Array::new();
        parts.push(&JsValue::from_str(contents));
        let opts = BlobPropertyBag::new();
        opts.set_type(mime);
        let blob = Blob::new_with_str_sequence_and_options(&parts, &opts).map_err(js_error)?;

        let url = Url::create_object_url_with_blob(&blob).map_err(js_error)?;
        let anchor = document()?
            .create_element("a")
            .map_err(js_error)?
            .dyn_into::<HtmlAnchorElement>()
            .map_err(|_| PlatformError::from("anchor cast failed"))?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.click();

        if let Err(e) = Url::revoke_object_url(&url) {
            tracing::debug!("revoking object URL failed: {:?}", e);
        }
        tracing::debug!(filename, bytes = contents.len(), "download started");
        Ok(())
    }
}

/// `window.confirm()`; a missing window or a thrown error counts as "no".
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserConfirm;

impl Confirm for BrowserConfirm {
    fn confirm(&self, message: &str) -> bool {
        window()
            .ok()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}
