//! In-memory text buffer - the live editing surface of a session

use crate::session::{EditSurface, SurfaceEvent};
use crate::syntax::{StyledRange, StyledText};

/// Selected byte range; `start == end` is a plain cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    /// Create a selection
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Collapsed selection at a position
    pub fn caret(pos: usize) -> Self {
        Self::new(pos, pos)
    }

    /// Clamp both endpoints, independently, into `[0, len]`
    pub fn clamped(&self, len: usize) -> Self {
        Self::new(self.start.min(len), self.end.min(len))
    }
}

/// A text buffer with the colored ranges last painted onto it
#[derive(Debug, Default)]
pub struct TextBuffer {
    /// Raw text
    text: String,
    /// Colored ranges, in paint order
    ranges: Vec<StyledRange>,
    /// Current selection
    selection: Selection,
    /// Whether buffer has unsaved changes
    modified: bool,
}

impl TextBuffer {
    /// Create a new empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer holding `text`, cursor at the start
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Colored ranges currently painted on the buffer
    pub fn ranges(&self) -> &[StyledRange] {
        &self.ranges
    }

    /// Text and colors as one styled value
    pub fn styled(&self) -> StyledText {
        let mut styled = StyledText::plain(self.text.as_str());
        for range in &self.ranges {
            styled.apply(*range);
        }
        styled
    }

    /// Length of the text in bytes
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check if buffer is modified
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Insert text at a byte position (clamped to a char boundary)
    pub fn insert(&mut self, pos: usize, s: &str) -> SurfaceEvent {
        let pos = self.floor_boundary(pos);
        self.text.insert_str(pos, s);
        self.selection = Selection::caret(pos + s.len());
        self.text_mutated()
    }

    /// Delete a byte range (clamped to char boundaries)
    pub fn delete(&mut self, start: usize, end: usize) -> SurfaceEvent {
        let start = self.floor_boundary(start);
        let end = self.floor_boundary(end).max(start);
        self.text.replace_range(start..end, "");
        self.selection = Selection::caret(start);
        self.text_mutated()
    }

    /// Replace the typed text wholesale, cursor at the end
    pub fn set_text(&mut self, text: &str) -> SurfaceEvent {
        self.text = text.to_string();
        self.selection = Selection::caret(self.text.len());
        self.text_mutated()
    }

    fn text_mutated(&mut self) -> SurfaceEvent {
        // Stale until the next paint
        self.ranges.clear();
        self.modified = true;
        SurfaceEvent::TextChanged
    }

    /// Largest char boundary not after `pos`
    fn floor_boundary(&self, pos: usize) -> usize {
        let mut pos = pos.min(self.text.len());
        while !self.text.is_char_boundary(pos) {
            pos -= 1;
        }
        pos
    }
}

impl EditSurface for TextBuffer {
    fn text(&self) -> &str {
        &self.text
    }

    fn selection(&self) -> Selection {
        self.selection
    }

    fn set_selection(&mut self, selection: Selection) {
        let selection = selection.clamped(self.text.len());
        self.selection = Selection::new(
            self.floor_boundary(selection.start),
            self.floor_boundary(selection.end),
        );
    }

    fn replace_contents(&mut self, styled: StyledText) -> Vec<SurfaceEvent> {
        let (text, ranges) = styled.into_parts();
        let changed = text != self.text;
        self.text = text;
        self.ranges = ranges;
        self.selection = self.selection.clamped(self.text.len());
        if changed {
            self.modified = true;
        }
        // Replacing contents is itself an edit as far as listeners can tell
        vec![SurfaceEvent::TextChanged]
    }
}
