//! DocumentController - orchestrates user actions over the host capabilities.
//!
//! The controller owns no DOM state of its own: title and content live in
//! the host (`TitleField`, `EditableRegion`) and are read on demand. What it
//! does own is derived or transient state: the status counts, the pending
//! autosave deadline, the open export, and the copy button label.

use chrono::{DateTime, Utc};
use web_time::Instant;

use crate::clock::Clock;
use crate::config::ScribeConfig;
use crate::debounce::{Debouncer, TransientLabel};
use crate::document::Document;
use crate::draft::{DraftRecord, DraftStore};
use crate::export::{EXPORT_MIME, ExportArtifact};
use crate::format::{self, FormatCommand};
use crate::error::PlatformError;
use crate::platform::{
    ClipboardWrite, ClipboardWriter, Confirm, EditableRegion, FileSaver, TitleField,
};
use crate::selection::{self, SelectionEditor};
use crate::shortcuts::{KeyChord, KeyScope, Shortcut};
use crate::status::{DocumentStatus, trim_space};

/// Orchestrates the editor.
///
/// - `E`: the editing surface (region, title field and selection)
/// - `S`: the draft store
/// - `C`: the clock driving autosave and timestamps
pub struct DocumentController<E, S, C> {
    editor: E,
    store: S,
    clock: C,
    config: ScribeConfig,
    status: DocumentStatus,
    autosave: Debouncer,
    export: Option<ExportArtifact>,
    copy_label: TransientLabel,
    copy_pending: bool,
    last_saved: Option<DateTime<Utc>>,
}

impl<E, S, C> DocumentController<E, S, C>
where
    E: EditableRegion + TitleField + SelectionEditor,
    S: DraftStore,
    C: Clock,
{
    pub fn new(editor: E, store: S, clock: C, config: ScribeConfig) -> Self {
        let autosave = Debouncer::new(config.autosave_delay());
        let copy_label = TransientLabel::new(
            config.copy_label.clone(),
            config.copied_label.clone(),
            config.copy_feedback(),
        );
        Self {
            editor,
            store,
            clock,
            config,
            status: DocumentStatus::default(),
            autosave,
            export: None,
            copy_label,
            copy_pending: false,
            last_saved: None,
        }
    }

    /// Startup: restore any draft, count, and put the caret in the editor.
    pub fn start(&mut self) {
        self.load_draft();
        self.recompute_status();
        self.editor.focus();
    }

    // === Accessors ===

    pub fn editor(&self) -> &E {
        &self.editor
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn config(&self) -> &ScribeConfig {
        &self.config
    }

    pub fn status(&self) -> DocumentStatus {
        self.status
    }

    pub fn last_saved(&self) -> Option<DateTime<Utc>> {
        self.last_saved
    }

    /// Snapshot of the document as the host currently shows it.
    pub fn document(&self) -> Document {
        Document {
            title: self.editor.title(),
            content: self.editor.html(),
            last_saved: self.last_saved,
        }
    }

    pub fn autosave_deadline(&self) -> Option<Instant> {
        self.autosave.deadline()
    }

    /// Recount words and characters from the region's plain text.
    pub fn recompute_status(&mut self) -> DocumentStatus {
        self.status = DocumentStatus::from_text(&self.editor.plain_text());
        self.status
    }

    // === Formatting ===

    pub fn format(&mut self, command: FormatCommand) -> bool {
        let applied = format::dispatch(&self.editor, command);
        self.recompute_status();
        applied
    }

    /// Handle a heading-selector change. An empty value is ignored.
    ///
    /// Returns whether a command was dispatched; the host resets the
    /// selector either way.
    pub fn apply_block_choice(&mut self, value: &str) -> bool {
        match FormatCommand::from_block_tag(value) {
            Some(command) => {
                self.format(command);
                true
            }
            None => false,
        }
    }

    pub fn insert_divider(&mut self) -> bool {
        let inserted = selection::insert_divider(&self.editor);
        self.recompute_status();
        inserted
    }

    // === Input & autosave ===

    /// The editable region's content changed.
    pub fn on_content_input(&mut self) -> Instant {
        self.recompute_status();
        self.autosave.schedule(self.clock.now())
    }

    /// The title field changed.
    pub fn on_title_input(&mut self) -> Instant {
        self.autosave.schedule(self.clock.now())
    }

    /// Run the autosave if its deadline has passed.
    ///
    /// Returns `true` if a save was attempted.
    pub fn tick(&mut self) -> bool {
        if self.autosave.take_due(self.clock.now()) {
            self.save_draft();
            true
        } else {
            false
        }
    }

    /// Time left before the pending autosave is due.
    pub fn autosave_remaining(&self) -> Option<web_time::Duration> {
        self.autosave.remaining(self.clock.now())
    }

    /// Save the draft now, replacing any pending autosave.
    ///
    /// Storage failures are swallowed; the in-memory document is unaffected.
    pub fn save_draft(&mut self) -> bool {
        self.autosave.cancel();
        let saved = self.clock.now_utc();
        let record = DraftRecord::new(self.editor.title(), self.editor.html(), saved);
        match self.store.save(&record) {
            Ok(()) => {
                self.last_saved = Some(saved);
                tracing::debug!(
                    title_len = record.title.len(),
                    content_len = record.content.len(),
                    "draft saved"
                );
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "draft save failed");
                false
            }
        }
    }

    /// Restore the persisted draft into the host, if there is one.
    ///
    /// Missing and malformed records both count as "no draft". Empty
    /// fields in the record leave the host's current values alone.
    pub fn load_draft(&mut self) -> bool {
        let record = match self.store.load() {
            Ok(Some(record)) => record,
            Ok(None) => return false,
            Err(e) => {
                tracing::debug!(error = %e, "ignoring unreadable draft");
                return false;
            }
        };

        if !record.title.is_empty() {
            self.editor.set_title(&record.title);
        }
        if !record.content.is_empty() {
            self.editor.set_html(&record.content);
        }
        self.last_saved = record.saved;
        self.recompute_status();
        tracing::debug!(saved = ?record.saved, "draft restored");
        true
    }

    // === Document lifecycle ===

    /// Start over with an empty document.
    ///
    /// Asks for confirmation only when the region holds non-whitespace
    /// text. Returns `false` if the user declined.
    pub fn new_document(&mut self, confirm: &impl Confirm) -> bool {
        let has_text = !trim_space(&self.editor.plain_text()).is_empty();
        if has_text && !confirm.confirm(&self.config.confirm_message) {
            return false;
        }

        self.editor.set_title("");
        self.editor.set_html("");
        self.autosave.cancel();
        if let Err(e) = self.store.clear() {
            tracing::warn!(error = %e, "failed to clear draft");
        }
        self.last_saved = None;
        self.recompute_status();
        self.editor.focus_title();
        true
    }

    // === Export ===

    /// Build an export from the current title and content.
    pub fn build_export(&self) -> ExportArtifact {
        ExportArtifact::new(
            &self.editor.title(),
            &self.editor.html(),
            &self.config.default_title,
            &self.config.default_filename,
        )
    }

    /// Generate the export and open the modal.
    pub fn open_export(&mut self) -> &ExportArtifact {
        self.copy_label.reset();
        self.export.insert(self.build_export())
    }

    pub fn close_export(&mut self) {
        self.export = None;
    }

    pub fn is_export_open(&self) -> bool {
        self.export.is_some()
    }

    pub fn export(&self) -> Option<&ExportArtifact> {
        self.export.as_ref()
    }

    /// Copy the export to the clipboard.
    ///
    /// Returns whether the write was issued. The confirmation label only
    /// shows once the write has landed: immediately for a synchronous
    /// write, or when the host calls `copy_finished` for a pending one.
    pub fn copy_export(&mut self, clipboard: &impl ClipboardWriter) -> bool {
        let html = match &self.export {
            Some(artifact) => artifact.html.clone(),
            None => self.build_export().html,
        };
        match clipboard.write_text(&html) {
            Ok(ClipboardWrite::Done) => {
                self.copy_pending = false;
                self.copy_label.trigger(self.clock.now());
                true
            }
            Ok(ClipboardWrite::Pending) => {
                self.copy_pending = true;
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "copy to clipboard failed");
                false
            }
        }
    }

    /// A pending clipboard write settled.
    ///
    /// Returns `true` if the confirmation label was started. Results with
    /// no write outstanding are ignored.
    pub fn copy_finished(&mut self, result: Result<(), PlatformError>) -> bool {
        if !std::mem::take(&mut self.copy_pending) {
            return false;
        }
        match result {
            Ok(()) => {
                self.copy_label.trigger(self.clock.now());
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "copy to clipboard failed");
                false
            }
        }
    }

    /// Current text for the copy button.
    pub fn copy_label(&self) -> &str {
        self.copy_label.text(self.clock.now())
    }

    /// Time left before the copy button reverts.
    pub fn copy_label_remaining(&self) -> Option<web_time::Duration> {
        self.copy_label.remaining(self.clock.now())
    }

    /// Save the export as an HTML file named after the title.
    pub fn download_export(&mut self, saver: &impl FileSaver) -> bool {
        let artifact = match &self.export {
            Some(artifact) => artifact.clone(),
            None => self.build_export(),
        };
        match saver.save_file(&artifact.filename, EXPORT_MIME, &artifact.html) {
            Ok(()) => {
                tracing::debug!(filename = %artifact.filename, "export downloaded");
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "export download failed");
                false
            }
        }
    }

    // === Keyboard ===

    /// Resolve and run a keyboard shortcut.
    ///
    /// Returns the shortcut that ran so the host can suppress default
    /// handling when `Shortcut::prevents_default` says so.
    pub fn handle_key(&mut self, chord: &KeyChord, scope: KeyScope) -> Option<Shortcut> {
        let shortcut = chord.resolve(scope)?;
        match shortcut {
            Shortcut::Format(command) => {
                self.format(command);
            }
            Shortcut::SaveDraft => {
                self.save_draft();
            }
            Shortcut::CloseExport => self.close_export(),
        }
        Some(shortcut)
    }
}
