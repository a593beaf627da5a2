//! tinted - editing core for a minimal plain-text editor
//!
//! Colors plain text, JSON and XML with ordered regex rules and keeps the
//! coloring live while the text is edited.

pub mod buffer;
pub mod config;
pub mod error;
pub mod render;
pub mod session;
pub mod storage;
pub mod syntax;

pub use buffer::{Selection, TextBuffer};
pub use config::Config;
pub use error::{EditorError, Result};
pub use session::{
    Document, EditSession, EditSurface, HighlightStatus, Notice, NoticeLevel, SaveOutcome,
    SurfaceEvent,
};
pub use storage::{FileStorage, Storage};
pub use syntax::{ColorTag, Format, Highlighter, StyledRange, StyledText};
