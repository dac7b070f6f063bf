//! Browser DOM layer for the scribe writer.
//!
//! This crate implements the `scribe-core` capability traits on top of
//! web-sys. It assumes a `wasm32-unknown-unknown` target environment.
//!
//! # Architecture
//!
//! - `dom`: element lookup, `JsValue` error conversion, small event helpers
//! - `region`: contentEditable region, title input, Selection/Range insertion
//! - `storage`: localStorage draft slot
//! - `clipboard`: async Clipboard API with legacy `execCommand("copy")` fallback
//! - `download`: Blob + object URL file save, and the confirm prompt
//!
//! # Re-exports
//!
//! This crate re-exports `scribe-core` for convenience, so consumers only
//! need to depend on `scribe-browser`.

// Re-export core crate
pub use scribe_core;
pub use scribe_core::*;

pub mod clipboard;
pub mod dom;
pub mod download;
pub mod region;
pub mod storage;

pub use clipboard::BrowserClipboard;
pub use dom::{element_by_id, js_error, take_select_value, targets_self};
pub use download::{BrowserConfirm, BrowserDownload};
pub use region::BrowserEditor;
pub use storage::LocalDraftStore;
