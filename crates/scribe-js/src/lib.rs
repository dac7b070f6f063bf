//! WASM bindings for the scribe writer.
//!
//! Mounts the editor onto an existing page: binds the DOM elements named in
//! `ScribeConfig.elements`, wires toolbar, input and keyboard events, and
//! runs the autosave and copy-feedback timers.
//!
//! ```js
//! import init, { ScribeApp } from "scribe-js";
//! await init();
//! const app = new ScribeApp({ autosaveDelayMs: 800 });
//! app.mount();
//! ```

mod app;
mod events;

pub use app::*;

use wasm_bindgen::prelude::*;

use scribe_browser::{escape_html, export_filename};

/// Initialize panic hook and console logging.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    use tracing::Level;
    use tracing::subscriber::set_global_default;
    use tracing_subscriber::Registry;
    use tracing_subscriber::layer::SubscriberExt;

    let console_level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let wasm_layer = tracing_wasm::WASMLayer::new(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(console_level)
            .build(),
    );

    let reg = Registry::default().with(wasm_layer);

    let _ = set_global_default(reg);
}

/// Escape `& < > "` for HTML.
#[wasm_bindgen(js_name = escapeHtml)]
pub fn escape_html_js(s: &str) -> String {
    escape_html(s)
}

/// Derive the export filename for a title.
#[wasm_bindgen(js_name = exportFilename)]
pub fn export_filename_js(title: &str) -> String {
    export_filename(title, scribe_browser::export::DEFAULT_FILENAME)
}
