//! Formatting commands and their dispatch to the host's native rich-text engine.
//!
//! The dispatcher adds no validation, retry or fallback: whatever the host
//! primitive reports is passed straight back.

use crate::platform::EditableRegion;

/// A toolbar formatting command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatCommand {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    UnorderedList,
    OrderedList,
    Blockquote,
    Heading(HeadingLevel),
    /// Turn the current block back into a plain paragraph.
    Paragraph,
}

/// A native command name plus its optional value, as the host expects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NativeCommand {
    pub name: &'static str,
    pub value: Option<&'static str>,
}

impl NativeCommand {
    const fn inline(name: &'static str) -> Self {
        Self { name, value: None }
    }

    const fn block(tag: &'static str) -> Self {
        Self {
            name: "formatBlock",
            value: Some(tag),
        }
    }
}

const HEADING_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

/// A heading level, always within 1..=6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    pub fn new(level: u8) -> Option<Self> {
        (1..=6).contains(&level).then_some(Self(level))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// The block tag, `h1`..`h6`.
    pub fn tag(self) -> &'static str {
        HEADING_TAGS[usize::from(self.0) - 1]
    }
}

impl FormatCommand {
    /// Build a heading command, rejecting levels outside 1..=6.
    pub fn heading(level: u8) -> Option<Self> {
        HeadingLevel::new(level).map(Self::Heading)
    }

    /// The native command this maps to.
    pub fn native(&self) -> NativeCommand {
        match self {
            Self::Bold => NativeCommand::inline("bold"),
            Self::Italic => NativeCommand::inline("italic"),
            Self::Underline => NativeCommand::inline("underline"),
            Self::Strikethrough => NativeCommand::inline("strikeThrough"),
            Self::UnorderedList => NativeCommand::inline("insertUnorderedList"),
            Self::OrderedList => NativeCommand::inline("insertOrderedList"),
            Self::Blockquote => NativeCommand::block("blockquote"),
            Self::Heading(level) => NativeCommand::block(level.tag()),
            Self::Paragraph => NativeCommand::block("p"),
        }
    }

    /// Whether this changes block structure rather than inline style.
    pub fn is_block(&self) -> bool {
        self.native().name == "formatBlock"
    }

    /// Parse a toolbar action identifier.
    pub fn from_action(id: &str) -> Option<Self> {
        let cmd = match id {
            "bold" => Self::Bold,
            "italic" => Self::Italic,
            "underline" => Self::Underline,
            "strike" | "strikethrough" | "strikeThrough" => Self::Strikethrough,
            "ul" | "unordered-list" | "insertUnorderedList" => Self::UnorderedList,
            "ol" | "ordered-list" | "insertOrderedList" => Self::OrderedList,
            "quote" | "blockquote" => Self::Blockquote,
            "p" | "paragraph" => Self::Paragraph,
            other => return Self::from_block_tag(other),
        };
        Some(cmd)
    }

    /// Parse a heading-selector value (`h1`..`h6`, `p`). Empty means no choice.
    pub fn from_block_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim().to_ascii_lowercase();
        match tag.as_str() {
            "p" => Some(Self::Paragraph),
            "blockquote" => Some(Self::Blockquote),
            _ => {
                let level = tag.strip_prefix('h')?.parse::<u8>().ok()?;
                Self::heading(level)
            }
        }
    }
}

/// Apply a formatting command to the current selection.
///
/// Runs the native command, then returns focus to the region. Block
/// commands focus first as well so the host applies them to the caret's
/// block. Status recomputation is the caller's job.
pub fn dispatch<E: EditableRegion + ?Sized>(editor: &E, command: FormatCommand) -> bool {
    let native = command.native();
    if command.is_block() {
        editor.focus();
    }
    let applied = editor.exec_command(native.name, native.value);
    editor.focus();

    tracing::debug!(
        command = native.name,
        value = ?native.value,
        applied,
        "dispatched formatting command"
    );
    applied
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fakes::FakeEditor;

    fn h(level: u8) -> FormatCommand {
        FormatCommand::heading(level).unwrap()
    }

    #[test]
    fn test_native_mapping() {
        assert_eq!(FormatCommand::Bold.native(), NativeCommand::inline("bold"));
        assert_eq!(
            FormatCommand::Strikethrough.native().name,
            "strikeThrough"
        );
        assert_eq!(
            FormatCommand::UnorderedList.native().name,
            "insertUnorderedList"
        );
        assert_eq!(
            FormatCommand::Blockquote.native(),
            NativeCommand::block("blockquote")
        );
        assert_eq!(
            h(3).native(),
            NativeCommand::block("h3")
        );
        assert!(h(2).is_block());
        assert!(!FormatCommand::Italic.is_block());
    }

    #[test]
    fn test_heading_levels() {
        assert_eq!(FormatCommand::heading(0), None);
        assert_eq!(FormatCommand::heading(7), None);
        assert_eq!(HeadingLevel::new(u8::MAX), None);

        for level in 1..=6 {
            let command = h(level);
            assert_eq!(command, FormatCommand::Heading(HeadingLevel::new(level).unwrap()));
            assert_eq!(command.native().value, Some(HEADING_TAGS[usize::from(level) - 1]));
        }
        assert_eq!(HeadingLevel::new(4).unwrap().get(), 4);
    }

    #[test]
    fn test_parse_actions_and_tags() {
        assert_eq!(FormatCommand::from_action("bold"), Some(FormatCommand::Bold));
        assert_eq!(
            FormatCommand::from_action("strike"),
            Some(FormatCommand::Strikethrough)
        );
        assert_eq!(
            FormatCommand::from_action("quote"),
            Some(FormatCommand::Blockquote)
        );
        assert_eq!(
            FormatCommand::from_action("h2"),
            Some(h(2))
        );
        assert_eq!(FormatCommand::from_action("hr"), None);

        assert_eq!(
            FormatCommand::from_block_tag("H1"),
            Some(h(1))
        );
        assert_eq!(
            FormatCommand::from_block_tag("p"),
            Some(FormatCommand::Paragraph)
        );
        assert_eq!(FormatCommand::from_block_tag(""), None);
        assert_eq!(FormatCommand::from_block_tag("h7"), None);
        assert_eq!(FormatCommand::from_block_tag("hx"), None);
    }

    #[test]
    fn test_dispatch_runs_native_and_refocuses() {
        let editor = FakeEditor::new("", "<p>hi</p>");
        assert!(dispatch(&editor, FormatCommand::Bold));

        assert_eq!(editor.commands(), vec![("bold".to_string(), None)]);
        assert_eq!(editor.region_focus_count(), 1);
    }

    #[test]
    fn test_dispatch_block_command() {
        let editor = FakeEditor::new("", "<p>hi</p>");
        assert!(dispatch(&editor, h(2)));

        assert_eq!(
            editor.commands(),
            vec![("formatBlock".to_string(), Some("h2".to_string()))]
        );
        assert_eq!(editor.region_focus_count(), 2);
    }

    #[test]
    fn test_dispatch_passes_host_result_through() {
        let editor = FakeEditor::new("", "");
        editor.set_commands_supported(false);
        assert!(!dispatch(&editor, FormatCommand::Underline));
        // Still attempted exactly once, no retry.
        assert_eq!(editor.commands().len(), 1);
    }
}
