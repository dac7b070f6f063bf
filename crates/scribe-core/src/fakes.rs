//! In-memory stand-ins for the host capabilities, used by unit tests.

use std::cell::{Cell, RefCell};

use crate::error::PlatformError;
use crate::platform::{ClipboardWrite, ClipboardWriter, EditableRegion, FileSaver, TitleField};
use crate::selection::{Block, BlockInsertion, SelectionEditor};

/// Editing surface backed by strings.
///
/// The caret is a byte offset into the markup, which is enough to check
/// where blocks land without a DOM.
#[derive(Debug)]
pub struct FakeEditor {
    title: RefCell<String>,
    html: RefCell<String>,
    /// (anchor, head) byte offsets into `html`.
    selection: Cell<Option<(usize, usize)>>,
    commands: RefCell<Vec<(String, Option<String>)>>,
    commands_supported: Cell<bool>,
    region_focus: Cell<u32>,
    title_focus: Cell<u32>,
}

impl FakeEditor {
    pub fn new(title: &str, html: &str) -> Self {
        Self {
            title: RefCell::new(title.to_string()),
            html: RefCell::new(html.to_string()),
            selection: Cell::new(Some((html.len(), html.len()))),
            commands: RefCell::new(Vec::new()),
            commands_supported: Cell::new(true),
            region_focus: Cell::new(0),
            title_focus: Cell::new(0),
        }
    }

    /// Simulate the user typing: replace the markup, caret at the end.
    pub fn type_html(&self, html: &str) {
        self.set_html(html);
    }

    pub fn set_caret(&self, offset: Option<usize>) {
        self.selection.set(offset.map(|o| (o, o)));
    }

    pub fn set_selection(&self, anchor: usize, head: usize) {
        self.selection.set(Some((anchor, head)));
    }

    /// Caret offset when the selection is collapsed.
    pub fn caret(&self) -> Option<usize> {
        match self.selection.get() {
            Some((a, h)) if a == h => Some(a),
            _ => None,
        }
    }

    pub fn set_commands_supported(&self, supported: bool) {
        self.commands_supported.set(supported);
    }

    pub fn commands(&self) -> Vec<(String, Option<String>)> {
        self.commands.borrow().clone()
    }

    pub fn region_focus_count(&self) -> u32 {
        self.region_focus.get()
    }

    pub fn title_focus_count(&self) -> u32 {
        self.title_focus.get()
    }
}

fn block_markup(block: &Block) -> String {
    match block.inner_html() {
        Some(inner) => format!("<{tag}>{inner}</{tag}>", tag = block.tag()),
        None => format!("<{}>", block.tag()),
    }
}

const BLOCK_TAGS: &[&str] = &[
    "p", "div", "h1", "h2", "h3", "h4", "h5", "h6", "li", "ul", "ol", "blockquote", "hr", "br",
];

/// Rough `innerText`: block tags become newlines, inline tags vanish.
fn markup_to_text(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;
    while let Some(open) = rest.find('<') {
        out.push_str(&rest[..open]);
        let Some(close) = rest[open..].find('>') else {
            rest = &rest[open..];
            break;
        };
        let tag = rest[open + 1..open + close]
            .trim_start_matches('/')
            .split_whitespace()
            .next()
            .unwrap_or("")
            .to_ascii_lowercase();
        if BLOCK_TAGS.contains(&tag.as_str()) {
            out.push('\n');
        }
        rest = &rest[open + close + 1..];
    }
    out.push_str(rest);
    out.replace("&nbsp;", "\u{a0}")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&amp;", "&")
}

impl EditableRegion for FakeEditor {
    fn html(&self) -> String {
        self.html.borrow().clone()
    }

    fn set_html(&self, html: &str) {
        *self.html.borrow_mut() = html.to_string();
        self.selection.set(Some((html.len(), html.len())));
    }

    fn plain_text(&self) -> String {
        markup_to_text(&self.html.borrow())
    }

    fn focus(&self) {
        self.region_focus.set(self.region_focus.get() + 1);
    }

    fn exec_command(&self, command: &str, value: Option<&str>) -> bool {
        self.commands
            .borrow_mut()
            .push((command.to_string(), value.map(str::to_string)));
        self.commands_supported.get()
    }
}

impl TitleField for FakeEditor {
    fn title(&self) -> String {
        self.title.borrow().clone()
    }

    fn set_title(&self, title: &str) {
        *self.title.borrow_mut() = title.to_string();
    }

    fn focus_title(&self) {
        self.title_focus.set(self.title_focus.get() + 1);
    }
}

impl SelectionEditor for FakeEditor {
    fn insert_at_caret(&self, insertion: &BlockInsertion) -> Result<bool, PlatformError> {
        let Some((anchor, head)) = self.selection.get() else {
            return Ok(false);
        };
        let at = anchor.max(head);
        let mut html = self.html.borrow_mut();
        if at > html.len() {
            return Err(PlatformError::from("caret outside content"));
        }

        let mut inserted = String::new();
        let mut caret = at;
        for (i, block) in insertion.blocks.iter().enumerate() {
            if i == insertion.caret_block {
                caret = at + inserted.len() + block.tag().len() + 2;
            }
            inserted.push_str(&block_markup(block));
        }
        html.insert_str(at, &inserted);
        self.selection.set(Some((caret, caret)));
        Ok(true)
    }
}

/// Clipboard that records writes.
#[derive(Debug, Default)]
pub struct FakeClipboard {
    written: RefCell<Vec<String>>,
    fail: bool,
    /// Writes stay unsettled, like a promise that has not resolved yet.
    deferred: bool,
}

impl FakeClipboard {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn deferred() -> Self {
        Self {
            deferred: true,
            ..Self::default()
        }
    }

    pub fn written(&self) -> Vec<String> {
        self.written.borrow().clone()
    }
}

impl ClipboardWriter for FakeClipboard {
    fn write_text(&self, text: &str) -> Result<ClipboardWrite, PlatformError> {
        if self.fail {
            return Err(PlatformError::from("clipboard unavailable"));
        }
        self.written.borrow_mut().push(text.to_string());
        if self.deferred {
            Ok(ClipboardWrite::Pending)
        } else {
            Ok(ClipboardWrite::Done)
        }
    }
}

/// File saver that records (filename, mime, contents).
#[derive(Debug, Default)]
pub struct FakeSaver {
    saved: RefCell<Vec<(String, String, String)>>,
}

impl FakeSaver {
    pub fn saved(&self) -> Vec<(String, String, String)> {
        self.saved.borrow().clone()
    }
}

impl FileSaver for FakeSaver {
    fn save_file(&self, filename: &str, mime: &str, contents: &str) -> Result<(), PlatformError> {
        self.saved.borrow_mut().push((
            filename.to_string(),
            mime.to_string(),
            contents.to_string(),
        ));
        Ok(())
    }
}
