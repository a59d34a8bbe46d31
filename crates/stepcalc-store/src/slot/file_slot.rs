//! Single-file slot with promotion recovery

use crate::errors::{io_error, Result};
use crate::slot::atomic::{atomic_replace, promote, temp_path_for};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use stepcalc_core::Slot;

/// Slot stored at one path, replaced atomically on every write
#[derive(Debug, Clone)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    /// Slot at `path`; nothing touches the filesystem until the first call
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Slot for FileSlot {
    /// Canonical content if present; otherwise finish an interrupted
    /// promotion of the staged file; otherwise empty.
    fn read(&self) -> Result<Vec<u8>> {
        match fs::read(&self.path) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                let staged = temp_path_for(&self.path)
                    .try_exists()
                    .map_err(|e| io_error("read_slot_temp", e))?;
                if !staged {
                    return Ok(Vec::new());
                }
                tracing::debug!(
                    path = %self.path.display(),
                    "completing interrupted slot promotion"
                );
                promote(&self.path)?;
                fs::read(&self.path).map_err(|e| io_error("read_slot", e))
            }
            Err(e) => Err(io_error("read_slot", e)),
        }
    }

    fn write(&mut self, content: &[u8]) -> Result<()> {
        atomic_replace(&self.path, content)?;
        tracing::debug!(
            path = %self.path.display(),
            bytes = content.len(),
            "slot committed"
        );
        Ok(())
    }
}
