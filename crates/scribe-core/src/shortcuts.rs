//! Keyboard shortcut resolution.
//!
//! Ctrl (or Cmd on macOS) with B/I/U formats, with S saves the draft.
//! Escape closes the export modal from anywhere on the page.

use crate::format::FormatCommand;

/// Where the key event was observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyScope {
    /// Inside the editable region.
    Editor,
    /// Anywhere on the page.
    Global,
}

/// A pressed key and the modifiers held with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyChord {
    /// `KeyboardEvent.key` value, e.g. `"b"`, `"B"`, `"Escape"`.
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
}

impl KeyChord {
    pub fn new(key: impl Into<String>, ctrl: bool, meta: bool) -> Self {
        Self {
            key: key.into(),
            ctrl,
            meta,
        }
    }

    pub fn plain(key: impl Into<String>) -> Self {
        Self::new(key, false, false)
    }

    pub fn ctrl(key: impl Into<String>) -> Self {
        Self::new(key, true, false)
    }

    pub fn has_modifier(&self) -> bool {
        self.ctrl || self.meta
    }

    /// Resolve the chord to an action for the given scope.
    pub fn resolve(&self, scope: KeyScope) -> Option<Shortcut> {
        match scope {
            KeyScope::Editor => self.editor_shortcut(),
            KeyScope::Global => self.global_shortcut(),
        }
    }

    fn editor_shortcut(&self) -> Option<Shortcut> {
        if !self.has_modifier() {
            return None;
        }
        match self.key.to_lowercase().as_str() {
            "b" => Some(Shortcut::Format(FormatCommand::Bold)),
            "i" => Some(Shortcut::Format(FormatCommand::Italic)),
            "u" => Some(Shortcut::Format(FormatCommand::Underline)),
            "s" => Some(Shortcut::SaveDraft),
            _ => None,
        }
    }

    fn global_shortcut(&self) -> Option<Shortcut> {
        (self.key == "Escape").then_some(Shortcut::CloseExport)
    }
}

/// An action bound to a key chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    Format(FormatCommand),
    SaveDraft,
    CloseExport,
}

impl Shortcut {
    /// Whether the host's default handling must be suppressed.
    pub fn prevents_default(&self) -> bool {
        match self {
            Shortcut::Format(_) | Shortcut::SaveDraft => true,
            Shortcut::CloseExport => false,
        }
    }
}
