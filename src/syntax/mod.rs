//! Syntax highlighting module
//!
//! This module provides the highlighting engine:
//! - Formats and their rule sets
//! - Regex tokenization rules
//! - Styled text with overlapping, last-applied-wins ranges

mod builtin;
mod format;
mod highlighter;
mod registry;
mod rules;
mod style;
mod tokens;

pub use format::Format;
pub use highlighter::Highlighter;
pub use registry::RuleRegistry;
pub use rules::Rule;
pub use style::{Color, Segment, Style, StyledRange, StyledText, Theme};
pub use tokens::ColorTag;
