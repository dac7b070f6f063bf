//! Error types for host and storage operations.
//!
//! None of these are fatal to the editor. Callers in the controller log and
//! swallow them; they exist so the capability implementations can say *why*
//! something did not happen.

use thiserror::Error;

/// Error type for host (DOM, clipboard, download) operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformError(pub String);

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for PlatformError {}

impl From<&str> for PlatformError {
    fn from(s: &str) -> Self {
        PlatformError(s.to_string())
    }
}

impl From<String> for PlatformError {
    fn from(s: String) -> Self {
        PlatformError(s)
    }
}

/// Errors that can occur while persisting or restoring a draft.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum StorageError {
    /// The storage backend is disabled or missing.
    #[error("storage unavailable")]
    Unavailable,

    /// The backend failed while reading the slot.
    #[error("storage read failed: {0}")]
    Read(String),

    /// The backend refused the write (quota exceeded, private mode, ...).
    #[error("storage write failed: {0}")]
    Write(String),

    /// The backend refused to remove the record.
    #[error("storage delete failed: {0}")]
    Delete(String),

    /// The draft could not be encoded.
    #[error("failed to serialize draft: {0}")]
    Serialize(String),

    /// The stored value is not a valid draft record.
    #[error("malformed draft record: {0}")]
    Malformed(String),
}
