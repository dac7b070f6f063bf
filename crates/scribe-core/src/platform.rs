//! Platform abstraction traits for editor operations.
//!
//! These traits define the interface between the document logic and the
//! host environment (browser DOM, test fakes). The controller only ever
//! talks to the host through them.

use crate::error::PlatformError;

/// The editable region where the user composes formatted text.
///
/// Content is opaque markup owned by the host's formatting engine. The
/// browser implementation wraps a `contenteditable` element.
pub trait EditableRegion {
    /// Current formatted markup.
    fn html(&self) -> String;

    /// Replace the formatted markup.
    fn set_html(&self, html: &str);

    /// Current rendered plain text, used for counting.
    fn plain_text(&self) -> String;

    /// Move keyboard focus into the region.
    fn focus(&self);

    /// Run a native rich-text command on the current selection.
    ///
    /// Returns whatever the host primitive reports; unsupported commands
    /// simply return `false`.
    fn exec_command(&self, command: &str, value: Option<&str>) -> bool;
}

/// The single-line document title input.
pub trait TitleField {
    fn title(&self) -> String;
    fn set_title(&self, title: &str);
    fn focus_title(&self);
}

/// How far a clipboard write got by the time `write_text` returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardWrite {
    /// The text is on the clipboard.
    Done,
    /// The write settles later. The host reports the outcome through
    /// `DocumentController::copy_finished`.
    Pending,
}

/// Plain-text clipboard access.
pub trait ClipboardWriter {
    fn write_text(&self, text: &str) -> Result<ClipboardWrite, PlatformError>;
}

/// Saves a generated file on the user's machine.
pub trait FileSaver {
    fn save_file(&self, filename: &str, mime: &str, contents: &str) -> Result<(), PlatformError>;
}

/// Interactive yes/no prompt shown before destructive actions.
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}
