//! WASM browser tests for scribe-browser.
//!
//! Run with: `wasm-pack test --headless --firefox` or `--chrome`

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

use std::cell::Cell;
use std::rc::Rc;

use gloo_events::EventListener;
use scribe_browser::{
    BrowserEditor, DIVIDER, DraftRecord, DraftStore, EditableRegion, LocalDraftStore,
    SelectionEditor, TitleField, take_select_value, targets_self,
};
use web_sys::{Event, EventInit, HtmlElement, HtmlInputElement, HtmlSelectElement};

fn make_editor(html: &str) -> BrowserEditor {
    let document = web_sys::window().unwrap().document().unwrap();
    let body = document.body().unwrap();

    let region: HtmlElement = document.create_element("div").unwrap().unchecked_into();
    region.set_attribute("contenteditable", "true").unwrap();
    region.set_inner_html(html);
    body.append_child(&region).unwrap();

    let title: HtmlInputElement = document.create_element("input").unwrap().unchecked_into();
    body.append_child(&title).unwrap();

    BrowserEditor::new(region, title).unwrap()
}

/// Put a collapsed caret at `offset` inside the region's child `index`.
fn place_caret(editor: &BrowserEditor, index: u32, offset: u32) {
    let window = web_sys::window().unwrap();
    let document = window.document().unwrap();
    let node = editor.region().child_nodes().item(index).unwrap();

    let range = document.create_range().unwrap();
    range.set_start(&node, offset).unwrap();
    range.collapse_with_to_start(true);
    let selection = window.get_selection().unwrap().unwrap();
    selection.remove_all_ranges().unwrap();
    selection.add_range(&range).unwrap();
}

fn clear_selection() {
    let selection = web_sys::window().unwrap().get_selection().unwrap().unwrap();
    selection.remove_all_ranges().unwrap();
}

// === Region tests ===

#[wasm_bindgen_test]
fn test_region_html_and_text() {
    let editor = make_editor("<p>hello <b>brave</b> world</p>");
    assert_eq!(editor.html(), "<p>hello <b>brave</b> world</p>");
    assert_eq!(editor.plain_text().trim(), "hello brave world");

    editor.set_html("");
    assert_eq!(editor.html(), "");
}

#[wasm_bindgen_test]
fn test_title_field() {
    let editor = make_editor("");
    editor.set_title("My Draft");
    assert_eq!(editor.title(), "My Draft");
}

// === Divider insertion ===

#[wasm_bindgen_test]
fn test_insert_divider_after_paragraph() {
    let editor = make_editor("<p>one</p>");
    // Caret after the first paragraph, at the region level.
    let region_node: &web_sys::Node = editor.region();
    let range = web_sys::window()
        .unwrap()
        .document()
        .unwrap()
        .create_range()
        .unwrap();
    range.set_start(region_node, 1).unwrap();
    range.collapse_with_to_start(true);
    let selection = web_sys::window().unwrap().get_selection().unwrap().unwrap();
    selection.remove_all_ranges().unwrap();
    selection.add_range(&range).unwrap();

    assert!(editor.insert_at_caret(&DIVIDER).unwrap());
    assert_eq!(editor.html(), "<p>one</p><hr><p><br></p>");

    // Caret now sits inside the new paragraph.
    let selection = web_sys::window().unwrap().get_selection().unwrap().unwrap();
    let anchor = selection.anchor_node().unwrap();
    assert_eq!(anchor.node_name(), "P");
    assert_eq!(anchor.previous_sibling().unwrap().node_name(), "HR");
}

#[wasm_bindgen_test]
fn test_insert_divider_without_selection_is_noop() {
    let editor = make_editor("<p>one</p>");
    clear_selection();

    assert!(!editor.insert_at_caret(&DIVIDER).unwrap());
    assert_eq!(editor.html(), "<p>one</p>");
}

#[wasm_bindgen_test]
fn test_insert_divider_ignores_caret_outside_region() {
    let editor = make_editor("<p>inside</p>");
    let outside = make_editor("<p>outside</p>");
    place_caret(&outside, 0, 0);

    assert!(!editor.insert_at_caret(&DIVIDER).unwrap());
    assert_eq!(editor.html(), "<p>inside</p>");
    assert_eq!(outside.html(), "<p>outside</p>");
}

// === LocalStorage draft slot ===

#[wasm_bindgen_test]
fn test_local_store_round_trip() {
    let store = LocalDraftStore::new("scribe_test_round_trip");
    store.clear().unwrap();
    assert_eq!(store.load().unwrap(), None);

    let record = DraftRecord::new("T", "<p>x</p>", chrono::Utc::now());
    store.save(&record).unwrap();
    let loaded = store.load().unwrap().unwrap();
    assert_eq!(loaded.title, "T");
    assert_eq!(loaded.content, "<p>x</p>");

    store.clear().unwrap();
    assert_eq!(store.load().unwrap(), None);
}

#[wasm_bindgen_test]
fn test_local_store_malformed_value() {
    let key = "scribe_test_malformed";
    let storage = web_sys::window().unwrap().local_storage().unwrap().unwrap();
    storage.set_item(key, "{definitely not json").unwrap();

    let store = LocalDraftStore::new(key);
    assert!(store.load().is_err());
    store.clear().unwrap();
}

// === Event helpers ===

/// Dispatch a bubbling click on `target` and report what `overlay` saw.
fn overlay_click_hits_self(overlay: &HtmlElement, target: &HtmlElement) -> bool {
    let hit = Rc::new(Cell::new(None));
    let seen = hit.clone();
    let backdrop = overlay.clone();
    let _listener = EventListener::new(overlay, "click", move |event| {
        seen.set(Some(targets_self(event, &backdrop)));
    });

    let init = EventInit::new();
    init.set_bubbles(true);
    let event = Event::new_with_event_init_dict("click", &init).unwrap();
    target.dispatch_event(&event).unwrap();
    hit.get().expect("overlay listener did not run")
}

#[wasm_bindgen_test]
fn test_backdrop_click_targets_overlay_only() {
    let document = web_sys::window().unwrap().document().unwrap();
    let overlay: HtmlElement = document.create_element("div").unwrap().unchecked_into();
    overlay.set_inner_html("<div class=\"modal\"><textarea></textarea></div>");
    document.body().unwrap().append_child(&overlay).unwrap();

    let modal: HtmlElement = overlay.first_element_child().unwrap().unchecked_into();
    let output: HtmlElement = modal.first_element_child().unwrap().unchecked_into();

    assert!(overlay_click_hits_self(&overlay, &overlay));
    assert!(!overlay_click_hits_self(&overlay, &modal));
    assert!(!overlay_click_hits_self(&overlay, &output));
}

#[wasm_bindgen_test]
fn test_heading_select_resets_after_choice() {
    let document = web_sys::window().unwrap().document().unwrap();
    let select: HtmlSelectElement = document.create_element("select").unwrap().unchecked_into();
    select.set_inner_html(
        "<option value=\"\">Style</option><option value=\"h2\">Heading 2</option><option value=\"p\">Paragraph</option>",
    );
    document.body().unwrap().append_child(&select).unwrap();

    select.set_value("h2");
    assert_eq!(take_select_value(&select).as_deref(), Some("h2"));
    assert_eq!(select.value(), "");

    select.set_value("p");
    assert_eq!(take_select_value(&select).as_deref(), Some("p"));
    assert_eq!(select.value(), "");

    // The empty entry is not a choice.
    assert_eq!(take_select_value(&select), None);
    assert_eq!(select.value(), "");
}
