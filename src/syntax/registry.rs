//! Rule set registry
//!
//! Maps each format to its ordered rule list and maps file extensions to
//! formats for guessing the format of a loaded document.

use std::collections::HashMap;

use super::builtin;
use super::format::{extension_of, Format};
use super::rules::Rule;
use crate::error::Result;

/// Format-to-rules lookup table
pub struct RuleRegistry {
    /// Ordered rules per format
    rule_sets: HashMap<Format, Vec<Rule>>,
    /// Extension to format mapping
    extension_map: HashMap<String, Format>,
}

impl RuleRegistry {
    /// Create a registry with the built-in rule sets and extensions
    pub fn new() -> Result<Self> {
        let mut registry = Self {
            rule_sets: HashMap::new(),
            extension_map: HashMap::new(),
        };

        for format in Format::ALL {
            registry.rule_sets.insert(format, builtin::rules_for(format)?);
            for ext in format.builtin_extensions() {
                registry.add_extension(ext, format);
            }
        }

        Ok(registry)
    }

    /// Ordered rules for a format (empty for plain text)
    pub fn rules_for(&self, format: Format) -> &[Rule] {
        self.rule_sets.get(&format).map_or(&[], Vec::as_slice)
    }

    /// Map an extra file extension to a format
    pub fn add_extension(&mut self, ext: &str, format: Format) {
        let ext = ext.trim_start_matches('.').to_lowercase();
        self.extension_map.insert(ext, format);
    }

    /// Guess a format from a display name by its extension
    pub fn detect_format(&self, display_name: &str) -> Format {
        extension_of(display_name)
            .and_then(|ext| self.extension_map.get(&ext).copied())
            .unwrap_or(Format::Plain)
    }
}
