//! Browser implementation of the editing surface.
//!
//! Wraps the `contenteditable` element and the title `<input>`. Formatting
//! goes through `document.execCommand`, block insertion through the DOM
//! Selection and Range APIs.

use wasm_bindgen::JsCast;
use web_sys::{HtmlDocument, HtmlElement, HtmlInputElement};

use scribe_core::{
    BlockInsertion, EditableRegion, PlatformError, SelectionEditor, TitleField,
};

use crate::dom::{element_by_id, js_error, window};

/// The editable region plus the title field of the host page.
pub struct BrowserEditor {
    region: HtmlElement,
    title: HtmlInputElement,
    document: HtmlDocument,
}

impl BrowserEditor {
    pub fn new(region: HtmlElement, title: HtmlInputElement) -> Result<Self, PlatformError> {
        let document = region
            .owner_document()
            .ok_or_else(|| PlatformError::from("editor element is detached"))?
            .dyn_into::<HtmlDocument>()
            .map_err(|_| PlatformError::from("owner document is not an HTML document"))?;
        Ok(Self {
            region,
            title,
            document,
        })
    }

    /// Look up both elements by id.
    pub fn from_ids(editor_id: &str, title_id: &str) -> Result<Self, PlatformError> {
        Self::new(element_by_id(editor_id)?, element_by_id(title_id)?)
    }

    pub fn region(&self) -> &HtmlElement {
        &self.region
    }

    pub fn title_input(&self) -> &HtmlInputElement {
        &self.title
    }

    fn insert_blocks(&self, insertion: &BlockInsertion) -> Result<bool, PlatformError> {
        let selection = match window()?.get_selection().map_err(js_error)? {
            Some(selection) if selection.range_count() > 0 => selection,
            _ => return Ok(false),
        };
        let range = selection.get_range_at(0).map_err(js_error)?;

        // Only insert when the caret is inside our region.
        let container = range.common_ancestor_container().map_err(js_error)?;
        if !self.region.contains(Some(&container)) {
            return Ok(false);
        }

        range.collapse_with_to_start(false);

        let mut nodes = Vec::with_capacity(insertion.blocks.len());
        for block in insertion.blocks {
            let element = self
                .document
                .create_element(block.tag())
                .map_err(js_error)?;
            if let Some(inner) = block.inner_html() {
                element.set_inner_html(inner);
            }
            nodes.push(element);
        }

        // insertNode puts each node at the range start, so go back to front.
        for node in nodes.iter().rev() {
            range.insert_node(node).map_err(js_error)?;
        }

        if let Some(target) = nodes.get(insertion.caret_block) {
            let caret = self.document.create_range().map_err(js_error)?;
            caret.set_start(target, 0).map_err(js_error)?;
            caret.collapse_with_to_start(true);
            selection.remove_all_ranges().map_err(js_error)?;
            selection.add_range(&caret).map_err(js_error)?;
        }

        Ok(true)
    }
}

impl EditableRegion for BrowserEditor {
    fn html(&self) -> String {
        self.region.inner_html()
    }

    fn set_html(&self, html: &str) {
        self.region.set_inner_html(html);
    }

    fn plain_text(&self) -> String {
        self.region.inner_text()
    }

    fn focus(&self) {
        if let Err(e) = self.region.focus() {
            tracing::debug!("editor focus failed: {:?}", e);
        }
    }

    fn exec_command(&self, command: &str, value: Option<&str>) -> bool {
        let result = match value {
            Some(value) => self
                .document
                .exec_command_with_show_ui_and_value(command, false, value),
            None => self.document.exec_command(command),
        };
        result.unwrap_or_else(|e| {
            tracing::debug!(command, "execCommand threw: {:?}", e);
            false
        })
    }
}

impl TitleField for BrowserEditor {
    fn title(&self) -> String {
        self.title.value()
    }

    fn set_title(&self, title: &str) {
        self.title.set_value(title);
    }

    fn focus_title(&self) {
        if let Err(e) = self.title.focus() {
            tracing::debug!("title focus failed: {:?}", e);
        }
    }
}

impl SelectionEditor for BrowserEditor {
    fn insert_at_caret(&self, insertion: &BlockInsertion) -> Result<bool, PlatformError> {
        self.insert_blocks(insertion)
    }
}
