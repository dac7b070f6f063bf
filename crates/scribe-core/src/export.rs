//! Standalone HTML export.
//!
//! The exported document is a complete HTML5 page: escaped title, a fixed
//! embedded stylesheet, and the editor content copied in verbatim. Content
//! is trusted markup produced by the formatting dispatcher and is never
//! escaped.

use std::fmt::Write as _;

use crate::status::{is_space, trim_space};

/// MIME type of the downloaded export.
pub const EXPORT_MIME: &str = "text/html";

/// Title used when the title field is blank.
pub const DEFAULT_TITLE: &str = "Untitled";

/// Filename stem used when the title sanitizes to nothing.
pub const DEFAULT_FILENAME: &str = "document";

const EXPORT_STYLESHEET: &str = r#"    body { max-width: 740px; margin: 40px auto; padding: 0 20px;
           font-family: Georgia, "Times New Roman", serif;
           font-size: 1.05rem; line-height: 1.8; color: #111; }
    h1 { font-size: 1.9rem; } h2 { font-size: 1.5rem; } h3 { font-size: 1.2rem; }
    blockquote { border-left: 4px solid #2563eb; padding: .6em 1.2em;
                 color: #6b7280; font-style: italic; background: #f0f4ff; }
    hr { border: none; border-top: 2px solid #d1d5db; margin: 2em 0; }
"#;

/// Escape `&`, `<`, `>` and `"` for use in HTML text and attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    out
}

/// Trim the raw title, falling back when nothing is left.
pub fn resolve_title<'a>(raw: &'a str, fallback: &'a str) -> &'a str {
    match trim_space(raw) {
        "" => fallback,
        trimmed => trimmed,
    }
}

/// Build the complete export document.
///
/// `title` is used as given (callers resolve blank titles first) and is
/// escaped; `content` is inserted verbatim.
pub fn build_document(title: &str, content: &str) -> String {
    let title = escape_html(title);
    let mut out = String::with_capacity(content.len() + EXPORT_STYLESHEET.len() + 512);

    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("  <meta charset=\"UTF-8\">\n");
    out.push_str(
        "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    // Writing to a String cannot fail.
    let _ = writeln!(out, "  <title>{}</title>", title);
    out.push_str("  <style>\n");
    out.push_str(EXPORT_STYLESHEET);
    out.push_str("  </style>\n</head>\n<body>\n");
    let _ = writeln!(out, "  <h1>{}</h1>", title);
    let _ = writeln!(out, "  {}", content);
    out.push_str("</body>\n</html>");
    out
}

/// Derive the download filename from the document title.
///
/// Lowercases, collapses whitespace runs to `-`, then strips everything
/// outside `[a-z0-9-]`. An empty result uses `fallback` as the stem.
pub fn export_filename(title: &str, fallback: &str) -> String {
    let lowered = trim_space(title).to_lowercase();

    let mut hyphenated = String::with_capacity(lowered.len());
    let mut in_space = false;
    for c in lowered.chars() {
        if is_space(c) {
            if !in_space {
                hyphenated.push('-');
            }
            in_space = true;
        } else {
            hyphenated.push(c);
            in_space = false;
        }
    }

    let stem: String = hyphenated
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect();

    if stem.is_empty() {
        format!("{}.html", fallback)
    } else {
        format!("{}.html", stem)
    }
}

/// A generated export, ready for the modal, the clipboard, or a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub html: String,
    pub filename: String,
}

impl ExportArtifact {
    pub fn new(title: &str, content: &str, default_title: &str, default_filename: &str) -> Self {
        Self {
            html: build_document(resolve_title(title, default_title), content),
            filename: export_filename(title, default_filename),
        }
    }
}
