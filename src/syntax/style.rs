//! Style types for text rendering
//!
//! This module provides the styled-text representation produced by the
//! highlighter and the terminal styles a host paints it with.

use std::collections::HashMap;

use serde::Deserialize;

use super::tokens::ColorTag;

/// Terminal colors (ANSI 16-color palette for compatibility)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Color {
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

/// Text style attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground color
    pub fg: Color,
    /// Bold text
    pub bold: bool,
    /// Italic text
    pub italic: bool,
    /// Underlined text
    pub underline: bool,
}

impl Style {
    /// Create a style with just foreground color
    pub fn fg(color: Color) -> Self {
        Self {
            fg: color,
            ..Default::default()
        }
    }

    /// Builder: set foreground color
    pub fn with_fg(mut self, color: Color) -> Self {
        self.fg = color;
        self
    }

    /// Builder: set bold
    pub fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Builder: set italic
    pub fn with_italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Check if this is the default (no styling)
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// A colored half-open byte range of the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyledRange {
    /// Byte offset where this range starts (inclusive)
    pub start: usize,
    /// Byte offset where this range ends (exclusive)
    pub end: usize,
    /// Color applied to the range
    pub tag: ColorTag,
}

impl StyledRange {
    /// Create a new range
    pub fn new(start: usize, end: usize, tag: ColorTag) -> Self {
        Self { start, end, tag }
    }

    /// Check if this range contains a byte position
    pub fn contains(&self, pos: usize) -> bool {
        pos >= self.start && pos < self.end
    }

    /// Get the length of this range in bytes
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if range is empty
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// A maximal run of text carrying one effective color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub start: usize,
    pub end: usize,
    /// `None` for uncolored text
    pub tag: Option<ColorTag>,
}

/// Source text plus the colored ranges applied to it, in application order
///
/// Ranges may overlap. A later range wins over an earlier one on the
/// overlapping part.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyledText {
    text: String,
    ranges: Vec<StyledRange>,
}

impl StyledText {
    /// Uncolored text
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ranges: Vec::new(),
        }
    }

    /// Apply a color over a range. Out-of-bounds or empty ranges are ignored.
    pub fn apply(&mut self, range: StyledRange) {
        if range.is_empty() || range.end > self.text.len() {
            return;
        }
        self.ranges.push(range);
    }

    /// The underlying text, without any coloring
    pub fn plain_text(&self) -> &str {
        &self.text
    }

    /// Colored ranges in application order
    pub fn ranges(&self) -> &[StyledRange] {
        &self.ranges
    }

    /// Length of the text in bytes
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the text is empty
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Split into owned text and ranges
    pub fn into_parts(self) -> (String, Vec<StyledRange>) {
        (self.text, self.ranges)
    }

    /// Visible color at a byte position (last applied range wins)
    pub fn tag_at(&self, pos: usize) -> Option<ColorTag> {
        self.ranges.iter().rev().find(|r| r.contains(pos)).map(|r| r.tag)
    }

    /// Resolve overlaps into disjoint segments covering the whole text
    pub fn segments(&self) -> Vec<Segment> {
        let mut painted: Vec<Option<ColorTag>> = vec![None; self.text.len()];
        for range in &self.ranges {
            for slot in &mut painted[range.start..range.end] {
                *slot = Some(range.tag);
            }
        }

        let mut segments: Vec<Segment> = Vec::new();
        for (pos, tag) in painted.into_iter().enumerate() {
            match segments.last_mut() {
                Some(last) if last.tag == tag => last.end = pos + 1,
                _ => segments.push(Segment {
                    start: pos,
                    end: pos + 1,
                    tag,
                }),
            }
        }
        segments
    }
}

/// Mapping from color tags to terminal styles
#[derive(Debug, Clone, Default)]
pub struct Theme {
    overrides: HashMap<ColorTag, Style>,
}

impl Theme {
    /// Override the style used for a tag
    pub fn set(&mut self, tag: ColorTag, style: Style) {
        self.overrides.insert(tag, style);
    }

    /// Style for a tag, falling back to its default style
    pub fn style_for(&self, tag: ColorTag) -> Style {
        self.overrides
            .get(&tag)
            .copied()
            .unwrap_or_else(|| tag.default_style())
    }
}
