//! Word and character counts for the status readout.

use std::fmt;

/// The whitespace class of web text: ECMAScript `WhiteSpace` plus
/// `LineTerminator`, as matched by `\s` and stripped by `trim()`.
///
/// Differs from `char::is_whitespace`: U+FEFF counts, U+0085 and the
/// other Unicode `White_Space`-only controls do not.
pub fn is_space(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'..='\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// `str::trim` over [`is_space`].
pub fn trim_space(text: &str) -> &str {
    text.trim_matches(is_space)
}

/// Count whitespace-separated words in plain text.
///
/// Empty or whitespace-only text has zero words.
pub fn count_words(text: &str) -> usize {
    text.split(is_space).filter(|w| !w.is_empty()).count()
}

/// Count characters in plain text, ignoring all whitespace.
pub fn count_chars(text: &str) -> usize {
    text.chars().filter(|c| !is_space(*c)).count()
}

/// Live counts derived from the editable region's plain text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DocumentStatus {
    pub words: usize,
    pub chars: usize,
}

impl DocumentStatus {
    pub fn from_text(text: &str) -> Self {
        Self {
            words: count_words(text),
            chars: count_chars(text),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.chars == 0
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} word{} · {} char{}",
            self.words,
            plural(self.words),
            self.chars,
            plural(self.chars)
        )
    }
}
