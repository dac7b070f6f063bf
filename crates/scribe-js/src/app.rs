//! ScribeApp - the mounted editor exposed to JavaScript.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use gloo_events::EventListener;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, HtmlSelectElement, HtmlTextAreaElement};

use scribe_browser::{
    BrowserClipboard, BrowserConfirm, BrowserDownload, BrowserEditor, DocumentController,
    FormatCommand, KeyChord, KeyScope, LocalDraftStore, PlatformError, ScribeConfig, Shortcut,
    SystemClock, element_by_id,
};

pub(crate) type Controller = DocumentController<BrowserEditor, LocalDraftStore, SystemClock>;

fn to_js_error(e: PlatformError) -> JsError {
    JsError::new(&e.to_string())
}

fn millis(d: std::time::Duration) -> u32 {
    u32::try_from(d.as_millis()).unwrap_or(u32::MAX)
}

/// Elements the app renders into.
pub(crate) struct Ui {
    pub(crate) status: HtmlElement,
    pub(crate) overlay: HtmlElement,
    pub(crate) output: HtmlTextAreaElement,
    pub(crate) heading_select: Option<HtmlSelectElement>,
    pub(crate) copy_button: Option<HtmlElement>,
}

pub(crate) struct AppInner {
    pub(crate) controller: RefCell<Controller>,
    pub(crate) ui: Ui,
    pub(crate) listeners: RefCell<Vec<EventListener>>,
    /// Content input that arrived while the controller was busy, e.g. the
    /// `input` event `execCommand` fires synchronously.
    deferred_input: Cell<bool>,
    autosave_generation: Cell<u64>,
    copy_generation: Cell<u64>,
}

impl AppInner {
    fn new(config: ScribeConfig) -> Result<Rc<Self>, PlatformError> {
        let ids = config.elements.clone();
        let editor = BrowserEditor::from_ids(&ids.editor, &ids.title)?;
        let store = LocalDraftStore::new(config.storage_key.as_str());

        let ui = Ui {
            status: element_by_id(&ids.status)?,
            overlay: element_by_id(&ids.modal_overlay)?,
            output: element_by_id(&ids.export_output)?,
            heading_select: element_by_id(&ids.heading_select).ok(),
            copy_button: element_by_id(&ids.copy_html).ok(),
        };

        Ok(Rc::new(Self {
            controller: RefCell::new(DocumentController::new(
                editor,
                store,
                SystemClock,
                config,
            )),
            ui,
            listeners: RefCell::new(Vec::new()),
            deferred_input: Cell::new(false),
            autosave_generation: Cell::new(0),
            copy_generation: Cell::new(0),
        }))
    }

    /// Run an action against the controller, then catch up on any input
    /// the action itself triggered.
    pub(crate) fn act<R>(self: &Rc<Self>, f: impl FnOnce(&mut Controller) -> R) -> R {
        let result = f(&mut self.controller.borrow_mut());
        if self.deferred_input.replace(false) {
            self.content_input();
        }
        result
    }

    // === Input ===

    pub(crate) fn content_input(self: &Rc<Self>) {
        match self.controller.try_borrow_mut() {
            Ok(mut ctl) => {
                ctl.on_content_input();
            }
            Err(_) => {
                self.deferred_input.set(true);
                return;
            }
        }
        self.render_status();
        self.arm_autosave();
    }

    pub(crate) fn title_input(self: &Rc<Self>) {
        self.act(|ctl| ctl.on_title_input());
        self.arm_autosave();
    }

    // === Actions ===

    pub(crate) fn format(self: &Rc<Self>, command: FormatCommand) -> bool {
        let applied = self.act(|ctl| ctl.format(command));
        self.render_status();
        applied
    }

    pub(crate) fn block_choice(self: &Rc<Self>, value: &str) {
        self.act(|ctl| ctl.apply_block_choice(value));
        self.render_status();
    }

    pub(crate) fn insert_divider(self: &Rc<Self>) -> bool {
        let inserted = self.act(|ctl| ctl.insert_divider());
        self.render_status();
        inserted
    }

    pub(crate) fn new_document(self: &Rc<Self>) -> bool {
        let cleared = self.act(|ctl| ctl.new_document(&BrowserConfirm));
        if cleared {
            // Invalidate any sleeping autosave.
            self.autosave_generation
                .set(self.autosave_generation.get() + 1);
        }
        self.render_status();
        cleared
    }

    pub(crate) fn save_draft(self: &Rc<Self>) -> bool {
        self.act(|ctl| ctl.save_draft())
    }

    pub(crate) fn open_export(self: &Rc<Self>) -> String {
        let html = self.act(|ctl| ctl.open_export().html.clone());
        self.render_modal();
        self.render_copy_label();
        html
    }

    pub(crate) fn close_export(self: &Rc<Self>) {
        self.act(|ctl| ctl.close_export());
        self.render_modal();
    }

    /// Returns whether the write was issued; the label follows completion.
    pub(crate) fn copy_export(self: &Rc<Self>) -> bool {
        let weak = Rc::downgrade(self);
        let clipboard =
            BrowserClipboard::with_source(self.ui.output.clone()).on_settled(move |result| {
                if let Some(app) = weak.upgrade() {
                    app.copy_settled(result);
                }
            });
        let issued = self.act(|ctl| ctl.copy_export(&clipboard));
        self.render_copy_label();
        self.arm_copy_feedback();
        issued
    }

    fn copy_settled(self: &Rc<Self>, result: Result<(), PlatformError>) {
        if self.act(|ctl| ctl.copy_finished(result)) {
            self.render_copy_label();
            self.arm_copy_feedback();
        }
    }

    pub(crate) fn download_export(self: &Rc<Self>) -> bool {
        self.act(|ctl| ctl.download_export(&BrowserDownload))
    }

    /// Returns whether the host's default handling should be suppressed.
    pub(crate) fn key(self: &Rc<Self>, chord: &KeyChord, scope: KeyScope) -> bool {
        let Some(shortcut) = self.act(|ctl| ctl.handle_key(chord, scope)) else {
            return false;
        };
        match shortcut {
            Shortcut::Format(_) => self.render_status(),
            Shortcut::CloseExport => self.render_modal(),
            Shortcut::SaveDraft => {}
        }
        shortcut.prevents_default()
    }

    // === Timers ===

    /// Wait out the pending autosave and run it.
    ///
    /// Each call bumps a generation counter; a sleeper that wakes up to a
    /// newer generation exits, so only the latest edit's timer saves.
    pub(crate) fn arm_autosave(self: &Rc<Self>) {
        let Some(remaining) = self.controller.borrow().autosave_remaining() else {
            return;
        };
        let generation = self.autosave_generation.get() + 1;
        self.autosave_generation.set(generation);

        let weak = Rc::downgrade(self);
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(millis(remaining)).await;
            let Some(app) = weak.upgrade() else {
                return;
            };
            if app.autosave_generation.get() != generation {
                return;
            }
            // Timers may wake a hair early; re-arm for the remainder.
            if !app.act(|ctl| ctl.tick()) {
                app.arm_autosave();
            }
        });
    }

    fn arm_copy_feedback(self: &Rc<Self>) {
        let Some(remaining) = self.controller.borrow().copy_label_remaining() else {
            return;
        };
        let generation = self.copy_generation.get() + 1;
        self.copy_generation.set(generation);

        let weak: Weak<Self> = Rc::downgrade(self);
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(millis(remaining)).await;
            let Some(app) = weak.upgrade() else {
                return;
            };
            if app.copy_generation.get() != generation {
                return;
            }
            app.render_copy_label();
            app.arm_copy_feedback();
        });
    }

    // === Rendering ===

    pub(crate) fn render(&self) {
        self.render_status();
        self.render_modal();
        self.render_copy_label();
    }

    pub(crate) fn render_status(&self) {
        let text = self.controller.borrow().status().to_string();
        self.ui.status.set_text_content(Some(&text));
    }

    pub(crate) fn render_modal(&self) {
        let ctl = self.controller.borrow();
        let classes = self.ui.overlay.class_list();
        let result = match ctl.export() {
            Some(artifact) => {
                self.ui.output.set_value(&artifact.html);
                classes.add_1("open")
            }
            None => classes.remove_1("open"),
        };
        if let Err(e) = result {
            tracing::debug!("modal class update failed: {:?}", e);
        }
    }

    pub(crate) fn render_copy_label(&self) {
        if let Some(button) = &self.ui.copy_button {
            let label = self.controller.borrow().copy_label().to_string();
            button.set_text_content(Some(&label));
        }
    }
}

/// The main editor instance exposed to JavaScript.
#[wasm_bindgen]
pub struct ScribeApp {
    inner: Rc<AppInner>,
}

#[wasm_bindgen]
impl ScribeApp {
    /// Bind to the page. `config` is an optional partial `ScribeConfig`.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<ScribeApp, JsError> {
        let config: ScribeConfig = if config.is_undefined() || config.is_null() {
            ScribeConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| JsError::new(&format!("Invalid config: {}", e)))?
        };
        let inner = AppInner::new(config).map_err(to_js_error)?;
        Ok(Self { inner })
    }

    /// Wire event listeners, restore the draft and focus the editor.
    pub fn mount(&self) -> Result<(), JsError> {
        self.unmount();
        let listeners = crate::events::wire(&self.inner).map_err(to_js_error)?;
        *self.inner.listeners.borrow_mut() = listeners;

        self.inner.act(|ctl| ctl.start());
        self.inner.render();
        tracing::debug!("scribe mounted");
        Ok(())
    }

    /// Remove all event listeners. Pending timers become no-ops.
    pub fn unmount(&self) {
        self.inner.listeners.borrow_mut().clear();
        self.inner
            .autosave_generation
            .set(self.inner.autosave_generation.get() + 1);
    }

    /// Apply a toolbar action (`"bold"`, `"ul"`, `"quote"`, `"h2"`, ...).
    ///
    /// Returns whatever the browser's command reported; unknown actions
    /// return `false`.
    pub fn format(&self, action: &str) -> bool {
        match FormatCommand::from_action(action) {
            Some(command) => self.inner.format(command),
            None => false,
        }
    }

    #[wasm_bindgen(js_name = insertDivider)]
    pub fn insert_divider(&self) -> bool {
        self.inner.insert_divider()
    }

    #[wasm_bindgen(js_name = newDocument)]
    pub fn new_document(&self) -> bool {
        self.inner.new_document()
    }

    #[wasm_bindgen(js_name = saveDraft)]
    pub fn save_draft(&self) -> bool {
        self.inner.save_draft()
    }

    /// Open the export modal and return the generated document.
    #[wasm_bindgen(js_name = openExport)]
    pub fn open_export(&self) -> String {
        self.inner.open_export()
    }

    #[wasm_bindgen(js_name = closeExport)]
    pub fn close_export(&self) {
        self.inner.close_export()
    }

    /// Copy the export. Returns whether the write was issued; the button
    /// label switches once the clipboard confirms it.
    #[wasm_bindgen(js_name = copyExport)]
    pub fn copy_export(&self) -> bool {
        self.inner.copy_export()
    }

    #[wasm_bindgen(js_name = downloadExport)]
    pub fn download_export(&self) -> bool {
        self.inner.download_export()
    }

    /// The export document for the current state, without opening the modal.
    #[wasm_bindgen(js_name = exportHtml)]
    pub fn export_html(&self) -> String {
        self.inner.controller.borrow().build_export().html
    }

    #[wasm_bindgen(js_name = wordCount)]
    pub fn word_count(&self) -> usize {
        self.inner.controller.borrow().status().words
    }

    #[wasm_bindgen(js_name = charCount)]
    pub fn char_count(&self) -> usize {
        self.inner.controller.borrow().status().chars
    }

    #[wasm_bindgen(js_name = statusText)]
    pub fn status_text(&self) -> String {
        self.inner.controller.borrow().status().to_string()
    }

    /// ISO-8601 time of the last successful save, if any.
    #[wasm_bindgen(js_name = lastSaved)]
    pub fn last_saved(&self) -> Option<String> {
        self.inner
            .controller
            .borrow()
            .last_saved()
            .map(|t| t.to_rfc3339())
    }
}
