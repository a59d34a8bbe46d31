//! Durable slot contract
//!
//! A slot holds exactly one blob: the checkpoint of the in-flight command,
//! or nothing. `write` must leave either the old or the new blob behind no
//! matter where the process dies; the empty blob means "no session in
//! progress".

use crate::errors::Result;

/// Single-blob store with atomic replacement
pub trait Slot {
    /// Read the committed blob, or an empty vector if none was committed
    ///
    /// # Errors
    ///
    /// `ERR_IO` when the medium cannot be read.
    fn read(&self) -> Result<Vec<u8>>;

    /// Replace the committed blob wholesale
    ///
    /// # Errors
    ///
    /// `ERR_IO` when the medium cannot be written.
    fn write(&mut self, content: &[u8]) -> Result<()>;

    /// Mark the session boundary by committing the empty blob
    ///
    /// # Errors
    ///
    /// Same as [`Slot::write`].
    fn clear(&mut self) -> Result<()> {
        self.write(&[])
    }
}

/// Slot kept in memory, with every committed blob retained in order
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    history: Vec<Vec<u8>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an already committed blob
    pub fn with_content(content: impl Into<Vec<u8>>) -> Self {
        Self {
            history: vec![content.into()],
        }
    }

    /// Every blob committed so far, oldest first
    pub fn history(&self) -> &[Vec<u8>] {
        &self.history
    }
}

impl Slot for MemorySlot {
    fn read(&self) -> Result<Vec<u8>> {
        Ok(self.history.last().cloned().unwrap_or_default())
    }

    fn write(&mut self, content: &[u8]) -> Result<()> {
        self.history.push(content.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_slot_reads_empty() {
        let slot = MemorySlot::new();
        assert!(slot.read().unwrap().is_empty());
    }

    #[test]
    fn test_write_replaces_content() {
        let mut slot = MemorySlot::new();
        slot.write(b"first").unwrap();
        slot.write(b"second").unwrap();

        assert_eq!(slot.read().unwrap(), b"second");
        assert_eq!(slot.history().len(), 2);
    }

    #[test]
    fn test_clear_commits_empty_blob() {
        let mut slot = MemorySlot::with_content(b"payload".to_vec());
        slot.clear().unwrap();

        assert!(slot.read().unwrap().is_empty());
    }
}
