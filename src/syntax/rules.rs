//! Pattern rules for syntax highlighting
//!
//! A rule is a regex, the capture group that gets colored, and the color
//! tag to apply. Rules for a format run one after another over the whole
//! text, so a later rule can recolor what an earlier one matched.

use regex::Regex;

use super::style::StyledRange;
use super::tokens::ColorTag;
use crate::error::{EditorError, Result};

/// A single tokenization rule
#[derive(Debug, Clone)]
pub struct Rule {
    /// Name for debugging
    pub name: String,
    /// Compiled regex pattern
    pub pattern: Regex,
    /// Capture group to color (0 = whole match)
    pub group: usize,
    /// Color tag to assign to matches
    pub tag: ColorTag,
    /// Pattern text after `group` only constrains the match and is not
    /// consumed: scanning resumes at the end of `group`.
    pub trailing_context: bool,
}

impl Rule {
    /// Create a rule coloring the whole match
    pub fn new(name: &str, pattern: &str, tag: ColorTag) -> Result<Self> {
        Self::with_group(name, pattern, 0, tag)
    }

    /// Create a rule coloring one capture group of each match
    pub fn with_group(name: &str, pattern: &str, group: usize, tag: ColorTag) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|source| EditorError::InvalidPattern {
            rule: name.to_string(),
            source,
        })?;
        if group >= regex.captures_len() {
            return Err(EditorError::Message(format!(
                "rule '{}' colors group {} but the pattern has {} groups",
                name,
                group,
                regex.captures_len() - 1
            )));
        }
        Ok(Self {
            name: name.to_string(),
            pattern: regex,
            group,
            tag,
            trailing_context: false,
        })
    }

    /// Builder: treat the pattern text after the colored group as lookahead
    pub fn with_trailing_context(mut self) -> Self {
        self.trailing_context = true;
        self
    }

    /// Colored ranges for every match of this rule in `text`, in order
    pub fn ranges(&self, text: &str) -> Vec<StyledRange> {
        let mut ranges = Vec::new();
        let mut pos = 0;

        while pos <= text.len() {
            let Some(caps) = self.pattern.captures_at(text, pos) else {
                break;
            };
            // Group 0 always participates
            let whole = caps.get(0).map_or((pos, pos), |m| (m.start(), m.end()));
            let colored = caps.get(self.group);

            if let Some(m) = colored {
                if m.start() < m.end() {
                    ranges.push(StyledRange::new(m.start(), m.end(), self.tag));
                }
            }

            let mut next = match (self.trailing_context, colored) {
                (true, Some(m)) => m.end(),
                _ => whole.1,
            };
            if next <= pos || next <= whole.0 {
                // Empty match or empty colored group: step over one char
                next = next_char_boundary(text, whole.0.max(pos));
            }
            pos = next;
        }

        ranges
    }
}

/// Byte offset of the char boundary after `pos` (or one past the end)
fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .chars()
        .next()
        .map_or(text.len() + 1, |c| pos + c.len_utf8())
}
