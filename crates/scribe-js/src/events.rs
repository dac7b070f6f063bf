//! DOM event wiring.
//!
//! Every listener holds a `Weak` handle to the app so dropping the
//! `ScribeApp` tears the page bindings down with it.

use std::rc::{Rc, Weak};

use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, KeyboardEvent};

use scribe_browser::{FormatCommand, KeyChord, KeyScope, PlatformError, dom};

use crate::app::AppInner;

/// Listener on an optional element. Missing toolbar buttons are skipped.
fn on_click(
    listeners: &mut Vec<EventListener>,
    app: &Rc<AppInner>,
    id: &str,
    action: impl Fn(&Rc<AppInner>) + 'static,
) {
    let Ok(button) = dom::element_by_id::<HtmlElement>(id) else {
        tracing::debug!(id, "toolbar element missing, not wired");
        return;
    };
    let weak = Rc::downgrade(app);
    listeners.push(EventListener::new(&button, "click", move |_| {
        if let Some(app) = weak.upgrade() {
            action(&app);
        }
    }));
}

fn chord(event: &KeyboardEvent) -> KeyChord {
    KeyChord::new(event.key(), event.ctrl_key(), event.meta_key())
}

fn with_app(weak: &Weak<AppInner>, f: impl FnOnce(&Rc<AppInner>)) {
    if let Some(app) = weak.upgrade() {
        f(&app);
    }
}

pub(crate) fn wire(app: &Rc<AppInner>) -> Result<Vec<EventListener>, PlatformError> {
    let ids = app.controller.borrow().config().elements.clone();
    let mut listeners = Vec::new();

    // Toolbar
    let formats = [
        (&ids.bold, FormatCommand::Bold),
        (&ids.italic, FormatCommand::Italic),
        (&ids.underline, FormatCommand::Underline),
        (&ids.strikethrough, FormatCommand::Strikethrough),
        (&ids.unordered_list, FormatCommand::UnorderedList),
        (&ids.ordered_list, FormatCommand::OrderedList),
        (&ids.blockquote, FormatCommand::Blockquote),
    ];
    for (id, command) in formats {
        on_click(&mut listeners, app, id, move |app| {
            app.format(command);
        });
    }
    on_click(&mut listeners, app, &ids.divider, |app| {
        app.insert_divider();
    });
    on_click(&mut listeners, app, &ids.export, |app| {
        app.open_export();
    });
    on_click(&mut listeners, app, &ids.new_document, |app| {
        app.new_document();
    });

    // Export modal
    on_click(&mut listeners, app, &ids.copy_html, |app| {
        app.copy_export();
    });
    on_click(&mut listeners, app, &ids.download_html, |app| {
        app.download_export();
    });
    on_click(&mut listeners, app, &ids.close_modal, |app| {
        app.close_export();
    });

    let weak = Rc::downgrade(app);
    listeners.push(EventListener::new(
        &app.ui.overlay,
        "click",
        move |event: &Event| {
            with_app(&weak, |app| {
                if dom::targets_self(event, &app.ui.overlay) {
                    app.close_export();
                }
            });
        },
    ));

    // Heading select
    if let Some(select) = &app.ui.heading_select {
        let weak = Rc::downgrade(app);
        let source = select.clone();
        listeners.push(EventListener::new(select, "change", move |_| {
            with_app(&weak, |app| {
                if let Some(value) = dom::take_select_value(&source) {
                    app.block_choice(&value);
                }
            });
        }));
    }

    // Editing
    let (region, title) = {
        let ctl = app.controller.borrow();
        (
            ctl.editor().region().clone(),
            ctl.editor().title_input().clone(),
        )
    };

    let weak = Rc::downgrade(app);
    listeners.push(EventListener::new(&region, "input", move |_| {
        with_app(&weak, |app| app.content_input());
    }));

    let weak = Rc::downgrade(app);
    listeners.push(EventListener::new(&title, "input", move |_| {
        with_app(&weak, |app| app.title_input());
    }));

    // Keyboard. Listeners are passive by default; these may cancel.
    let weak = Rc::downgrade(app);
    listeners.push(EventListener::new_with_options(
        &region,
        "keydown",
        EventListenerOptions::enable_prevent_default(),
        move |event: &Event| {
            let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            with_app(&weak, |app| {
                if app.key(&chord(key_event), KeyScope::Editor) {
                    event.prevent_default();
                }
            });
        },
    ));

    let weak = Rc::downgrade(app);
    let document = dom::document()?;
    listeners.push(EventListener::new_with_options(
        &document,
        "keydown",
        EventListenerOptions::enable_prevent_default(),
        move |event: &Event| {
            let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            with_app(&weak, |app| {
                if app.key(&chord(key_event), KeyScope::Global) {
                    event.prevent_default();
                }
            });
        },
    ));

    tracing::debug!(count = listeners.len(), "event listeners wired");
    Ok(listeners)
}
