//! Selection-aware block insertion.
//!
//! Inserting a divider places an `<hr>` at the caret followed by an empty
//! paragraph, and leaves the caret inside that paragraph so typing
//! continues below the rule.

use crate::error::PlatformError;
use crate::platform::EditableRegion;

/// A structural element that can be inserted at the caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    /// Horizontal rule.
    Divider,
    /// Empty paragraph holding a line break so it keeps its height.
    EmptyParagraph,
}

impl Block {
    pub fn tag(&self) -> &'static str {
        match self {
            Block::Divider => "hr",
            Block::EmptyParagraph => "p",
        }
    }

    /// Inner markup for the created element.
    pub fn inner_html(&self) -> Option<&'static str> {
        match self {
            Block::Divider => None,
            Block::EmptyParagraph => Some("<br>"),
        }
    }
}

/// A sequence of blocks to insert, and which of them receives the caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockInsertion {
    pub blocks: &'static [Block],
    /// Index into `blocks`; the caret is collapsed at the start of that block.
    pub caret_block: usize,
}

/// Divider followed by an empty paragraph, caret in the paragraph.
pub const DIVIDER: BlockInsertion = BlockInsertion {
    blocks: &[Block::Divider, Block::EmptyParagraph],
    caret_block: 1,
};

/// Host text-selection capability.
pub trait SelectionEditor {
    /// Insert blocks at the current caret.
    ///
    /// Any selection is collapsed to its end first. Blocks land in order,
    /// and the caret is moved into `insertion.caret_block`. Returns
    /// `Ok(false)` when there is no caret inside the editable region.
    fn insert_at_caret(&self, insertion: &BlockInsertion) -> Result<bool, PlatformError>;
}

impl<S: SelectionEditor + ?Sized> SelectionEditor for &S {
    fn insert_at_caret(&self, insertion: &BlockInsertion) -> Result<bool, PlatformError> {
        (**self).insert_at_caret(insertion)
    }
}

/// Insert a divider at the caret.
///
/// Without a caret this is a silent no-op and returns `false`. Host
/// failures are logged and also reported as `false`.
pub fn insert_divider<E>(editor: &E) -> bool
where
    E: EditableRegion + SelectionEditor + ?Sized,
{
    editor.focus();
    match editor.insert_at_caret(&DIVIDER) {
        Ok(true) => true,
        Ok(false) => {
            tracing::trace!("no caret, skipping divider insertion");
            false
        }
        Err(e) => {
            tracing::warn!(error = %e, "divider insertion failed");
            false
        }
    }
}
