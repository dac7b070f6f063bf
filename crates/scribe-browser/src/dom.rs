//! Small DOM helpers shared by the capability implementations.

use wasm_bindgen::{JsCast, JsValue};
use scribe_core::PlatformError;

/// Convert a thrown JS value into a `PlatformError`.
pub fn js_error(value: JsValue) -> PlatformError {
    match value.as_string() {
        Some(s) => PlatformError(s),
        None => PlatformError(format!("{:?}", value)),
    }
}

pub fn window() -> Result<web_sys::Window, PlatformError> {
    web_sys::window().ok_or_else(|| PlatformError::from("no window"))
}

pub fn document() -> Result<web_sys::Document, PlatformError> {
    window()?
        .document()
        .ok_or_else(|| PlatformError::from("no document"))
}

/// Look up an element by id and cast it to the expected type.
pub fn element_by_id<T: JsCast>(id: &str) -> Result<T, PlatformError> {
    let element = document()?
        .get_element_by_id(id)
        .ok_or_else(|| PlatformError(format!("no element with id '{}'", id)))?;
    element
        .dyn_into::<T>()
        .map_err(|_| PlatformError(format!("element '{}' has an unexpected type", id)))
}

/// Whether the event was aimed at `backdrop` itself rather than bubbling up
/// from one of its descendants.
pub fn targets_self(event: &web_sys::Event, backdrop: &web_sys::Node) -> bool {
    let target = event
        .target()
        .and_then(|t| t.dyn_into::<web_sys::Node>().ok());
    backdrop.is_same_node(target.as_ref())
}

/// Read the chosen option and put the selector back on its empty entry.
///
/// Returns `None` when the empty entry was the one chosen.
pub fn take_select_value(select: &web_sys::HtmlSelectElement) -> Option<String> {
    let value = select.value();
    select.set_value("");
    (!value.is_empty()).then_some(value)
}
