//! Browser clipboard implementation.
//!
//! Implements `ClipboardWriter` with the async Clipboard API when the page
//! has it (secure contexts), and falls back to selecting a textarea and
//! running `execCommand("copy")` when it does not. The legacy copy finishes
//! synchronously; the async write reports back through `on_settled`.

use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlDocument, HtmlTextAreaElement};

use scribe_core::{ClipboardWrite, ClipboardWriter, PlatformError};

use crate::dom::{document, js_error, window};

type SettledCallback = Rc<dyn Fn(Result<(), PlatformError>)>;

/// Clipboard writer for the export modal.
///
/// `source` is the textarea already showing the text; the legacy path
/// selects it instead of creating a temporary one.
#[derive(Default)]
pub struct BrowserClipboard {
    source: Option<HtmlTextAreaElement>,
    on_settled: Option<SettledCallback>,
}

impl BrowserClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source(source: HtmlTextAreaElement) -> Self {
        Self {
            source: Some(source),
            on_settled: None,
        }
    }

    /// Called with the outcome once an async write settles.
    pub fn on_settled(mut self, callback: impl Fn(Result<(), PlatformError>) + 'static) -> Self {
        self.on_settled = Some(Rc::new(callback));
        self
    }

    fn legacy_copy(&self, text: &str) -> Result<(), PlatformError> {
        let document = document()?;
        let html_document = document
            .clone()
            .dyn_into::<HtmlDocument>()
            .map_err(|_| PlatformError::from("not an HTML document"))?;

        if let Some(source) = self.source.as_ref().filter(|s| s.value() == text) {
            source.select();
            return exec_copy(&html_document);
        }

        // Off-screen scratch textarea.
        let scratch = document
            .create_element("textarea")
            .map_err(js_error)?
            .dyn_into::<HtmlTextAreaElement>()
            .map_err(|_| PlatformError::from("textarea cast failed"))?;
        scratch.set_value(text);
        scratch
            .set_attribute("style", "position:fixed;top:-1000px;opacity:0")
            .map_err(js_error)?;
        let body = document
            .body()
            .ok_or_else(|| PlatformError::from("no body"))?;
        body.append_child(&scratch).map_err(js_error)?;
        scratch.select();
        let result = exec_copy(&html_document);
        scratch.remove();
        result
    }
}

fn exec_copy(document: &HtmlDocument) -> Result<(), PlatformError> {
    match document.exec_command("copy").map_err(js_error)? {
        true => Ok(()),
        false => Err(PlatformError::from("copy command was rejected")),
    }
}

/// Whether `navigator.clipboard.writeText` exists on this page.
fn has_async_clipboard(navigator: &web_sys::Navigator) -> bool {
    js_sys::Reflect::get(navigator, &JsValue::from_str("clipboard"))
        .map(|c| !c.is_undefined() && !c.is_null())
        .unwrap_or(false)
}

impl ClipboardWriter for BrowserClipboard {
    fn write_text(&self, text: &str) -> Result<ClipboardWrite, PlatformError> {
        let navigator = window()?.navigator();
        if !has_async_clipboard(&navigator) {
            tracing::debug!("async clipboard unavailable, using legacy copy");
            return self.legacy_copy(text).map(|()| ClipboardWrite::Done);
        }

        let promise = navigator.clipboard().write_text(text);
        let len = text.len();
        let on_settled = self.on_settled.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let result = match wasm_bindgen_futures::JsFuture::from(promise).await {
                Ok(_) => {
                    tracing::debug!("wrote {} bytes to clipboard", len);
                    Ok(())
                }
                Err(e) => Err(js_error(e)),
            };
            if let Some(callback) = on_settled {
                callback(result);
            }
        });
        Ok(ClipboardWrite::Pending)
    }
}
