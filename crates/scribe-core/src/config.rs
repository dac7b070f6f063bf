//! Editor configuration.
//!
//! Every field has a default, so hosts only pass what they want to change.
//! In the browser this arrives as a plain JS object.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use web_time::Duration;

use crate::export::{DEFAULT_FILENAME, DEFAULT_TITLE};

/// Default localStorage key for the draft slot.
pub const DEFAULT_STORAGE_KEY: &str = "scribe_draft";

/// DOM element ids of the host page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ElementIds {
    pub editor: SmolStr,
    pub title: SmolStr,
    pub status: SmolStr,
    pub heading_select: SmolStr,
    pub modal_overlay: SmolStr,
    pub export_output: SmolStr,
    pub bold: SmolStr,
    pub italic: SmolStr,
    pub underline: SmolStr,
    pub strikethrough: SmolStr,
    pub unordered_list: SmolStr,
    pub ordered_list: SmolStr,
    pub blockquote: SmolStr,
    pub divider: SmolStr,
    pub export: SmolStr,
    pub new_document: SmolStr,
    pub copy_html: SmolStr,
    pub download_html: SmolStr,
    pub close_modal: SmolStr,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            editor: "editor".into(),
            title: "doc-title".into(),
            status: "status".into(),
            heading_select: "sel-heading".into(),
            modal_overlay: "modal-overlay".into(),
            export_output: "html-output".into(),
            bold: "btn-bold".into(),
            italic: "btn-italic".into(),
            underline: "btn-underline".into(),
            strikethrough: "btn-strike".into(),
            unordered_list: "btn-ul".into(),
            ordered_list: "btn-ol".into(),
            blockquote: "btn-quote".into(),
            divider: "btn-hr".into(),
            export: "btn-export".into(),
            new_document: "btn-new".into(),
            copy_html: "btn-copy-html".into(),
            download_html: "btn-download-html".into(),
            close_modal: "btn-close-modal".into(),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScribeConfig {
    /// Key of the single draft slot.
    pub storage_key: SmolStr,
    /// Quiet period after the last edit before the draft is saved.
    pub autosave_delay_ms: u32,
    /// How long the copy button shows its confirmation.
    pub copy_feedback_ms: u32,
    /// Export title used when the title field is blank.
    pub default_title: SmolStr,
    /// Download filename stem used when the title sanitizes to nothing.
    pub default_filename: SmolStr,
    pub confirm_message: SmolStr,
    pub copy_label: SmolStr,
    pub copied_label: SmolStr,
    pub elements: ElementIds,
}

impl Default for ScribeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.into(),
            autosave_delay_ms: 800,
            copy_feedback_ms: 1800,
            default_title: DEFAULT_TITLE.into(),
            default_filename: DEFAULT_FILENAME.into(),
            confirm_message: "Start a new document? Unsaved changes will be lost.".into(),
            copy_label: "Copy HTML".into(),
            copied_label: "Copied!".into(),
            elements: ElementIds::default(),
        }
    }
}

impl ScribeConfig {
    pub fn autosave_delay(&self) -> Duration {
        Duration::from_millis(self.autosave_delay_ms.into())
    }

    pub fn copy_feedback(&self) -> Duration {
        Duration::from_millis(self.copy_feedback_ms.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ScribeConfig::default();
        assert_eq!(config.autosave_delay(), Duration::from_millis(800));
        assert_eq!(config.copy_feedback(), Duration::from_millis(1800));
        assert_eq!(config.storage_key, "scribe_draft");
        assert_eq!(config.elements.editor, "editor");
    }

    #[test]
    fn test_partial_override() {
        let config: ScribeConfig = serde_json::from_str(
            r#"{"autosaveDelayMs": 250, "elements": {"editor": "body-area"}}"#,
        )
        .unwrap();

        assert_eq!(config.autosave_delay_ms, 250);
        assert_eq!(config.elements.editor, "body-area");
        // Untouched fields keep their defaults.
        assert_eq!(config.elements.title, "doc-title");
        assert_eq!(config.default_filename, "document");
    }
}
