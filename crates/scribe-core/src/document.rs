//! In-memory view of the document being edited.

use chrono::{DateTime, Utc};

/// Title, formatted content and the time of the last successful save.
///
/// Content is opaque markup produced by the host formatting engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub title: String,
    pub content: String,
    pub last_saved: Option<DateTime<Utc>>,
}

impl Document {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            last_saved: None,
        }
    }
}
