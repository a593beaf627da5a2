//! Built-in rule sets
//!
//! This module provides the ordered tokenization rules for each
//! format. Order matters: later rules recolor what earlier ones matched.

mod json;
mod xml;

use super::format::Format;
use super::rules::Rule;
use crate::error::Result;

/// Get the built-in rules for a format, in application order
pub fn rules_for(format: Format) -> Result<Vec<Rule>> {
    match format {
        Format::Plain => Ok(Vec::new()),
        Format::Json => json::json_rules(),
        Format::Xml => xml::xml_rules(),
    }
}
