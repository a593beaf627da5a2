//! Color tags for syntax highlighting
//!
//! The engine only emits symbolic tags; turning a tag into an actual
//! color is left to the host (see [`super::Theme`]).

use super::style::{Color, Style};

/// Symbolic color identifiers emitted by the highlighting rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorTag {
    /// JSON string literals
    String,
    /// JSON object keys
    Key,
    /// JSON numbers
    Number,
    /// JSON `true`, `false` and `null`
    Boolean,
    /// XML comments
    Comment,
    /// XML tag names
    Tag,
    /// XML attribute names
    AttrName,
    /// XML attribute values
    AttrValue,
}

impl ColorTag {
    /// Every tag the built-in rules can emit
    pub const ALL: [ColorTag; 8] = [
        ColorTag::String,
        ColorTag::Key,
        ColorTag::Number,
        ColorTag::Boolean,
        ColorTag::Comment,
        ColorTag::Tag,
        ColorTag::AttrName,
        ColorTag::AttrValue,
    ];

    /// Get the default style for this tag
    pub fn default_style(&self) -> Style {
        match self {
            ColorTag::String => Style::fg(Color::Green),
            ColorTag::Key => Style::fg(Color::Blue).with_bold(),
            ColorTag::Number => Style::fg(Color::Cyan),
            ColorTag::Boolean => Style::fg(Color::BrightRed),
            ColorTag::Comment => Style::fg(Color::BrightBlack).with_italic(),
            ColorTag::Tag => Style::fg(Color::Magenta),
            ColorTag::AttrName => Style::fg(Color::Yellow),
            ColorTag::AttrValue => Style::fg(Color::Green),
        }
    }

    /// Symbolic name of this tag
    pub fn name(&self) -> &'static str {
        match self {
            ColorTag::String => "string",
            ColorTag::Key => "key",
            ColorTag::Number => "number",
            ColorTag::Boolean => "boolean",
            ColorTag::Comment => "comment",
            ColorTag::Tag => "tag",
            ColorTag::AttrName => "attr-name",
            ColorTag::AttrValue => "attr-value",
        }
    }

    /// Parse a tag from its symbolic name (for config loading)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tag| tag.name() == name)
    }
}
