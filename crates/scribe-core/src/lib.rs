//! scribe-core: Pure Rust document logic without browser dependencies.
//!
//! This crate provides:
//! - Capability traits (`EditableRegion`, `SelectionEditor`, `DraftStore`,
//!   `ClipboardWriter`, ...) that the browser layer implements
//! - `DocumentController` - orchestrates user actions over those capabilities
//! - Formatting dispatch, divider insertion, status counting, HTML export,
//!   draft persistence and autosave scheduling - all testable on native

pub mod clock;
pub mod config;
pub mod controller;
pub mod debounce;
pub mod document;
pub mod draft;
pub mod error;
pub mod export;
pub mod format;
pub mod platform;
pub mod selection;
pub mod shortcuts;
pub mod status;

#[cfg(test)]
mod fakes;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{ElementIds, ScribeConfig};
pub use controller::DocumentController;
pub use debounce::{Debouncer, TransientLabel};
pub use document::Document;
pub use draft::{DraftRecord, DraftStore, MemoryDraftStore};
pub use error::{PlatformError, StorageError};
pub use export::{
    EXPORT_MIME, ExportArtifact, build_document, escape_html, export_filename, resolve_title,
};
pub use format::{FormatCommand, HeadingLevel, NativeCommand, dispatch};
pub use platform::{ClipboardWrite, ClipboardWriter, Confirm, EditableRegion, FileSaver, TitleField};
pub use selection::{Block, BlockInsertion, DIVIDER, SelectionEditor, insert_divider};
pub use shortcuts::{KeyChord, KeyScope, Shortcut};
pub use smol_str::SmolStr;
pub use status::{DocumentStatus, count_chars, count_words, is_space, trim_space};
