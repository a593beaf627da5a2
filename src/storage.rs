//! Storage collaborator
//!
//! The session never touches files directly; it goes through a
//! [`Storage`] that owns the handles and their persistence.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::error::Result;

/// Reads and writes raw document text behind opaque handles
pub trait Storage {
    type Handle;

    /// Read the text behind a handle. `Ok(None)` means there is no
    /// content yet and the document starts empty.
    fn read(&self, handle: &Self::Handle) -> Result<Option<String>>;

    /// Write text to a handle, replacing what was there
    fn write(&mut self, handle: &Self::Handle, text: &str) -> Result<()>;

    /// User-facing name of a handle, used to guess its format
    fn display_name(&self, handle: &Self::Handle) -> Option<String>;
}

/// Storage over filesystem paths
#[derive(Debug, Default, Clone, Copy)]
pub struct FileStorage;

impl FileStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for FileStorage {
    type Handle = PathBuf;

    fn read(&self, path: &PathBuf) -> Result<Option<String>> {
        match fs::read_to_string(path) {
            Ok(text) => Ok(Some(text)),
            // A path that doesn't exist yet is a new, empty document
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&mut self, path: &PathBuf, text: &str) -> Result<()> {
        fs::write(path, text)?;
        Ok(())
    }

    fn display_name(&self, path: &PathBuf) -> Option<String> {
        path.file_name().map(|s| s.to_string_lossy().into_owned())
    }
}
