//! Configuration file support
//!
//! Loads settings from ~/.tinted.toml (or %USERPROFILE%\.tinted.toml on Windows)
//!
//! Example:
//! ```toml
//! # tinted configuration
//! highlighting = true
//! default-format = "json"
//!
//! [extensions]
//! jsonc = "json"
//! plist = "xml"
//!
//! [colors]
//! key = "bright-blue"
//! comment = "bright-black"
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{EditorError, Result};
use crate::syntax::{Color, ColorTag, Format, Highlighter, Theme};

/// Configuration settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Whether syntax highlighting is enabled
    pub highlighting: bool,
    /// Format of a fresh, unnamed document
    pub default_format: Format,
    /// Extra file extensions and the format they map to
    pub extensions: HashMap<String, Format>,
    /// Foreground color overrides, keyed by color tag name
    pub colors: HashMap<String, Color>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            highlighting: true,
            default_format: Format::Plain,
            extensions: HashMap::new(),
            colors: HashMap::new(),
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".tinted.toml"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".tinted.toml"))
        }
    }

    /// Load configuration from the default path, falling back to defaults
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }

        Self::load_from(&path).unwrap_or_else(|err| {
            tracing::warn!(path = %path.display(), %err, "ignoring invalid config");
            Self::default()
        })
    }

    /// Load configuration from a file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::parse(&contents)
    }

    /// Parse config file contents
    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Theme with the configured color overrides
    pub fn theme(&self) -> Result<Theme> {
        let mut theme = Theme::default();
        for (name, color) in &self.colors {
            let tag = ColorTag::from_name(name)
                .ok_or_else(|| EditorError::UnknownColorTag(name.clone()))?;
            theme.set(tag, tag.default_style().with_fg(*color));
        }
        Ok(theme)
    }

    /// Highlighter with the configured extensions and enablement
    pub fn highlighter(&self) -> Result<Highlighter> {
        let mut highlighter = Highlighter::new()?;
        for (ext, format) in &self.extensions {
            highlighter.registry_mut().add_extension(ext, *format);
        }
        highlighter.set_enabled(self.highlighting);
        Ok(highlighter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let contents = r#"
# Comment
highlighting = false
default-format = "xml"

[extensions]
jsonc = "json"

[colors]
key = "bright-blue"
attr-value = "red"
        "#;

        let config = Config::parse(contents).unwrap();
        assert!(!config.highlighting);
        assert_eq!(config.default_format, Format::Xml);
        assert_eq!(config.extensions.get("jsonc"), Some(&Format::Json));
        assert_eq!(config.colors.get("key"), Some(&Color::BrightBlue));
        assert_eq!(config.colors.get("attr-value"), Some(&Color::Red));
    }

    #[test]
    fn test_format_aliases() {
        let config = Config::parse("default-format = \"txt\"\n[extensions]\nplist = \"XML\"").unwrap();
        assert_eq!(config.default_format, Format::Plain);
        assert_eq!(config.extensions.get("plist"), Some(&Format::Xml));
    }

    #[test]
    fn test_empty_config_is_default() {
        let config = Config::parse("").unwrap();
        assert!(config.highlighting);
        assert_eq!(config.default_format, Format::Plain);
        assert!(config.extensions.is_empty());
    }

    #[test]
    fn test_invalid_values_are_errors() {
        assert!(matches!(
            Config::parse("default-format = \"yaml\""),
            Err(EditorError::Config(_))
        ));
        assert!(Config::parse("[colors]\nkey = \"chartreuse\"").is_err());
    }

    #[test]
    fn test_theme_overrides() {
        let config = Config::parse("[colors]\ncomment = \"white\"").unwrap();
        let theme = config.theme().unwrap();
        let style = theme.style_for(ColorTag::Comment);
        assert_eq!(style.fg, Color::White);
        assert!(style.italic);
        assert_eq!(theme.style_for(ColorTag::Key), ColorTag::Key.default_style());
    }

    #[test]
    fn test_theme_unknown_tag() {
        let config = Config::parse("[colors]\nkeyword = \"red\"").unwrap();
        assert!(matches!(config.theme(), Err(EditorError::UnknownColorTag(_))));
    }

    #[test]
    fn test_highlighter_from_config() {
        let config = Config::parse("highlighting = false\n[extensions]\nplist = \"xml\"").unwrap();
        let highlighter = config.highlighter().unwrap();
        assert!(!highlighter.is_enabled());
        assert_eq!(highlighter.registry().detect_format("Info.plist"), Format::Xml);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tinted.toml");
        fs::write(&path, "default-format = \"json\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.default_format, Format::Json);
        assert!(Config::load_from(dir.path().join("missing.toml")).is_err());
    }
}
