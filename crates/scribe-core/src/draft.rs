//! Single-slot draft persistence.
//!
//! ## Storage format
//!
//! One key holds one JSON object:
//!
//! ```json
//! {"title": "...", "content": "<p>...</p>", "saved": "2024-05-01T12:00:00Z"}
//! ```
//!
//! Every save overwrites the slot wholesale (last-write-wins). There is no
//! merging and no version history.

use std::cell::{Cell, RefCell};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::error::StorageError;

/// Persisted snapshot of the document.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DraftRecord {
    #[serde(default)]
    pub title: String,

    /// Formatted markup, stored as-is.
    #[serde(default)]
    pub content: String,

    /// When the snapshot was taken (ISO-8601, UTC).
    #[serde(default)]
    pub saved: Option<DateTime<Utc>>,
}

impl DraftRecord {
    pub fn new(title: impl Into<String>, content: impl Into<String>, saved: DateTime<Utc>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            saved: Some(saved),
        }
    }

    pub fn from_document(doc: &Document, saved: DateTime<Utc>) -> Self {
        Self::new(doc.title.clone(), doc.content.clone(), saved)
    }

    pub fn to_json(&self) -> Result<String, StorageError> {
        serde_json::to_string(self).map_err(|e| StorageError::Serialize(e.to_string()))
    }

    pub fn from_json(raw: &str) -> Result<Self, StorageError> {
        serde_json::from_str(raw).map_err(|e| StorageError::Malformed(e.to_string()))
    }
}

/// Persistent single-slot store for the draft.
///
/// `load` returns `Ok(None)` when no draft exists and an error when the
/// stored value is unreadable; the controller treats both as "no draft".
pub trait DraftStore {
    fn save(&self, record: &DraftRecord) -> Result<(), StorageError>;
    fn load(&self) -> Result<Option<DraftRecord>, StorageError>;
    fn clear(&self) -> Result<(), StorageError>;
}

impl<S: DraftStore + ?Sized> DraftStore for &S {
    fn save(&self, record: &DraftRecord) -> Result<(), StorageError> {
        (**self).save(record)
    }

    fn load(&self) -> Result<Option<DraftRecord>, StorageError> {
        (**self).load()
    }

    fn clear(&self) -> Result<(), StorageError> {
        (**self).clear()
    }
}

/// In-memory store holding the serialized JSON, like the browser slot does.
#[derive(Debug, Default)]
pub struct MemoryDraftStore {
    slot: RefCell<Option<String>>,
    unavailable: Cell<bool>,
}

impl MemoryDraftStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate the slot with a raw value, valid or not.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        let store = Self::default();
        *store.slot.borrow_mut() = Some(raw.into());
        store
    }

    /// Simulate a disabled or full backend: every operation fails.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.set(unavailable);
    }

    pub fn raw(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    fn check(&self) -> Result<(), StorageError> {
        if self.unavailable.get() {
            Err(StorageError::Unavailable)
        } else {
            Ok(())
        }
    }
}

impl DraftStore for MemoryDraftStore {
    fn save(&self, record: &DraftRecord) -> Result<(), StorageError> {
        self.check()?;
        let json = record.to_json()?;
        *self.slot.borrow_mut() = Some(json);
        Ok(())
    }

    fn load(&self) -> Result<Option<DraftRecord>, StorageError> {
        self.check()?;
        match self.slot.borrow().as_deref() {
            None | Some("") => Ok(None),
            Some(raw) => DraftRecord::from_json(raw).map(Some),
        }
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.check()?;
        *self.slot.borrow_mut() = None;
        Ok(())
    }
}
