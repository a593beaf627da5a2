//! Error types for tinted

use thiserror::Error;

/// Result type alias for tinted operations
pub type Result<T> = std::result::Result<T, EditorError>;

/// Editor error types
#[derive(Error, Debug)]
pub enum EditorError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid pattern for rule '{rule}': {source}")]
    InvalidPattern {
        rule: String,
        #[source]
        source: regex::Error,
    },

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Unknown color tag: {0}")]
    UnknownColorTag(String),

    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    #[error("{0}")]
    Message(String),
}
