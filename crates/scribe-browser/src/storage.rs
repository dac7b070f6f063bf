//! LocalStorage persistence for the draft.
//!
//! One key, one JSON value (see `scribe_core::draft`). gloo-storage handles
//! the serde round trip; availability is checked up front because
//! `LocalStorage::raw()` throws when storage is disabled.

use gloo_storage::{LocalStorage, Storage};
use scribe_core::{DraftRecord, DraftStore, StorageError};

use crate::dom::js_error;

/// The single draft slot in `window.localStorage`.
#[derive(Debug, Clone)]
pub struct LocalDraftStore {
    key: String,
}

impl LocalDraftStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

/// `window.localStorage`, if the browser lets us have it.
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

impl DraftStore for LocalDraftStore {
    fn save(&self, record: &DraftRecord) -> Result<(), StorageError> {
        local_storage()?;
        LocalStorage::set(&self.key, record).map_err(|e| match e {
            gloo_storage::errors::StorageError::SerdeError(e) => {
                StorageError::Serialize(e.to_string())
            }
            other => StorageError::Write(other.to_string()),
        })
    }

    fn load(&self) -> Result<Option<DraftRecord>, StorageError> {
        local_storage()?;
        match LocalStorage::get::<DraftRecord>(&self.key) {
            Ok(record) => Ok(Some(record)),
            Err(gloo_storage::errors::StorageError::KeyNotFound(_)) => Ok(None),
            Err(gloo_storage::errors::StorageError::SerdeError(e)) => {
                Err(StorageError::Malformed(e.to_string()))
            }
            Err(other) => Err(StorageError::Read(other.to_string())),
        }
    }

    fn clear(&self) -> Result<(), StorageError> {
        local_storage()?
            .remove_item(&self.key)
            .map_err(|e| StorageError::Delete(js_error(e).to_string()))
    }
}
