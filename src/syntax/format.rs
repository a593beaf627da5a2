//! Document formats
//!
//! The format enumeration is closed: it selects which rule list the
//! highlighter applies, and doubles as the entry list of the format picker.

use serde::Deserialize;

use crate::error::{EditorError, Result};

/// Highlighting format of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum Format {
    /// Plain text, no coloring
    #[default]
    Plain,
    /// JSON documents
    Json,
    /// XML documents (and XML dialects such as XSD)
    Xml,
}

impl Format {
    /// All formats, in picker order
    pub const ALL: [Format; 3] = [Format::Plain, Format::Json, Format::Xml];

    /// Picker label for this format
    pub fn label(&self) -> &'static str {
        match self {
            Format::Plain => "TXT",
            Format::Json => "JSON",
            Format::Xml => "XML",
        }
    }

    /// Position of this format in the picker
    pub fn index(&self) -> usize {
        match self {
            Format::Plain => 0,
            Format::Json => 1,
            Format::Xml => 2,
        }
    }

    /// Format at a picker position
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parse a format name as used in configuration ("plain", "json", "xml")
    ///
    /// Case-insensitive; "txt" and "text" are accepted for plain text.
    pub fn from_name(name: &str) -> Result<Self> {
        match name.trim().to_lowercase().as_str() {
            "plain" | "txt" | "text" => Ok(Format::Plain),
            "json" => Ok(Format::Json),
            "xml" => Ok(Format::Xml),
            _ => Err(EditorError::UnknownFormat(name.to_string())),
        }
    }

    /// File extensions recognized for this format out of the box
    pub fn builtin_extensions(&self) -> &'static [&'static str] {
        match self {
            Format::Plain => &[],
            Format::Json => &["json"],
            Format::Xml => &["xml", "xsd", "xsl", "xslt", "svg"],
        }
    }

    /// File name suggested when saving a document that has no handle yet
    pub fn default_file_name(&self) -> &'static str {
        match self {
            Format::Plain => "document.txt",
            Format::Json => "document.json",
            Format::Xml => "document.xml",
        }
    }
}

impl TryFrom<String> for Format {
    type Error = EditorError;

    fn try_from(name: String) -> Result<Self> {
        Self::from_name(&name)
    }
}

/// Lower-cased extension of a display name, if it has one
pub fn extension_of(display_name: &str) -> Option<String> {
    let (stem, ext) = display_name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_lowercase())
}
