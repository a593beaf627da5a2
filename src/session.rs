//! Edit session controller
//!
//! Owns the live document and editing surface, re-highlights after every
//! edit or format switch, and guards against the surface reporting the
//! controller's own repaint back as a fresh edit.

use std::path::PathBuf;

use crate::buffer::Selection;
use crate::config::Config;
use crate::error::Result;
use crate::storage::Storage;
use crate::syntax::{Format, Highlighter, StyledText};

/// Events an editing surface reports to its controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceEvent {
    /// The text was mutated
    TextChanged,
    /// The user picked another format
    FormatChanged(Format),
}

/// The editing widget a session drives
pub trait EditSurface {
    /// Current raw text
    fn text(&self) -> &str;

    /// Current selection
    fn selection(&self) -> Selection;

    /// Move the selection
    fn set_selection(&mut self, selection: Selection);

    /// Replace the whole contents with styled text, returning the events
    /// the replacement raised on the surface
    fn replace_contents(&mut self, styled: StyledText) -> Vec<SurfaceEvent>;
}

/// Whether a highlight pass is in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HighlightStatus {
    #[default]
    Idle,
    Highlighting,
}

/// Per-session document state; the text itself lives on the surface
#[derive(Debug, Clone)]
pub struct Document<H> {
    /// Active highlighting format
    pub format: Format,
    /// Storage handle, owned by the storage collaborator
    pub handle: Option<H>,
}

impl<H> Default for Document<H> {
    fn default() -> Self {
        Self {
            format: Format::default(),
            handle: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// Transient message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

/// Result of a save request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Text was written
    Saved,
    /// Write failed; nothing in the session changed
    Failed,
    /// No handle yet; the host should ask for one (save as)
    NeedsHandle { suggested_name: &'static str },
    /// The picker returned no selection
    Cancelled,
}

/// Controller for one editing session
pub struct EditSession<S, H = PathBuf> {
    surface: S,
    document: Document<H>,
    highlighter: Highlighter,
    status: HighlightStatus,
    notices: Vec<Notice>,
}

impl<S: EditSurface, H: Clone> EditSession<S, H> {
    /// Create a session over a surface
    pub fn new(surface: S, highlighter: Highlighter) -> Self {
        Self {
            surface,
            document: Document::default(),
            highlighter,
            status: HighlightStatus::Idle,
            notices: Vec::new(),
        }
    }

    /// Create a session using config settings
    pub fn with_config(surface: S, config: &Config) -> Result<Self> {
        let mut session = Self::new(surface, config.highlighter()?);
        session.document.format = config.default_format;
        Ok(session)
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the surface. Mutations made through this do not
    /// re-highlight; use [`Self::edit`] or report them via
    /// [`Self::handle_event`].
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn document(&self) -> &Document<H> {
        &self.document
    }

    /// Active format
    pub fn format(&self) -> Format {
        self.document.format
    }

    pub fn status(&self) -> HighlightStatus {
        self.status
    }

    pub fn highlighter(&self) -> &Highlighter {
        &self.highlighter
    }

    /// Apply a mutation to the surface and deliver the event it reports
    pub fn edit(&mut self, f: impl FnOnce(&mut S) -> SurfaceEvent) {
        let event = f(&mut self.surface);
        self.handle_event(event);
    }

    /// Dispatch a surface event
    pub fn handle_event(&mut self, event: SurfaceEvent) {
        match event {
            SurfaceEvent::TextChanged => self.on_text_changed(),
            SurfaceEvent::FormatChanged(format) => self.on_format_changed(format),
        }
    }

    /// React to an edit of the surface text
    pub fn on_text_changed(&mut self) {
        if self.status == HighlightStatus::Highlighting {
            tracing::debug!("dropping re-entrant text change");
            return;
        }
        self.apply_highlighting();
    }

    /// Switch format and recolor the current text
    ///
    /// Called while a pass is painting (a surface echoing a format switch
    /// from its own repaint), the format is recorded but the recolor is
    /// dropped; the old colors stay until the next edit or format change.
    pub fn on_format_changed(&mut self, format: Format) {
        tracing::debug!(format = format.label(), "format changed");
        self.document.format = format;
        self.apply_highlighting();
    }

    /// Drain pending user notices
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Load the document behind a picked handle; `None` means the picker
    /// was dismissed. Returns whether a document was loaded.
    pub fn load<St>(&mut self, storage: &St, picked: Option<H>) -> bool
    where
        St: Storage<Handle = H>,
    {
        let Some(handle) = picked else {
            return false;
        };

        let text = match storage.read(&handle) {
            Ok(text) => text.unwrap_or_default(),
            Err(err) => {
                tracing::warn!(%err, "failed to read document");
                self.notify(NoticeLevel::Error, format!("Could not open file: {}", err));
                return false;
            }
        };

        let format = storage
            .display_name(&handle)
            .map_or(Format::Plain, |name| {
                self.highlighter.registry().detect_format(&name)
            });
        tracing::debug!(?format, len = text.len(), "document loaded");

        self.document.handle = Some(handle);
        self.document.format = format;
        self.replace_guarded(StyledText::plain(text));
        self.surface.set_selection(Selection::caret(0));
        self.apply_highlighting();
        self.notify(NoticeLevel::Info, "File loaded");
        true
    }

    /// Save to the current handle, if there is one
    pub fn save<St>(&mut self, storage: &mut St) -> SaveOutcome
    where
        St: Storage<Handle = H>,
    {
        match self.document.handle.clone() {
            Some(handle) => self.write_to(storage, handle),
            None => SaveOutcome::NeedsHandle {
                suggested_name: self.document.format.default_file_name(),
            },
        }
    }

    /// Save to a newly picked handle, adopting it on success
    pub fn save_as<St>(&mut self, storage: &mut St, picked: Option<H>) -> SaveOutcome
    where
        St: Storage<Handle = H>,
    {
        match picked {
            Some(handle) => self.write_to(storage, handle),
            None => SaveOutcome::Cancelled,
        }
    }

    fn write_to<St>(&mut self, storage: &mut St, handle: H) -> SaveOutcome
    where
        St: Storage<Handle = H>,
    {
        match storage.write(&handle, self.surface.text()) {
            Ok(()) => {
                tracing::debug!("document saved");
                self.document.handle = Some(handle);
                self.notify(NoticeLevel::Info, "Saved");
                SaveOutcome::Saved
            }
            Err(err) => {
                tracing::warn!(%err, "failed to save document");
                self.notify(NoticeLevel::Error, format!("Save failed: {}", err));
                SaveOutcome::Failed
            }
        }
    }

    /// Recolor the surface text and restore the selection
    fn apply_highlighting(&mut self) {
        if self.status == HighlightStatus::Highlighting {
            return;
        }
        if self.surface.text().is_empty() {
            return;
        }

        let selection = self.surface.selection();
        let styled = self.highlighter.highlight(self.surface.text(), self.document.format);
        self.replace_guarded(styled);

        let len = self.surface.text().len();
        self.surface.set_selection(selection.clamped(len));
    }

    /// Replace the surface contents with the guard raised
    fn replace_guarded(&mut self, styled: StyledText) {
        self.status = HighlightStatus::Highlighting;
        let events = self.surface.replace_contents(styled);
        for event in events {
            self.handle_event(event);
        }
        self.status = HighlightStatus::Idle;
    }

    fn notify(&mut self, level: NoticeLevel, message: impl Into<String>) {
        self.notices.push(Notice {
            level,
            message: message.into(),
        });
    }
}
