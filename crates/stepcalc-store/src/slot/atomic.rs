//! Atomic replace primitives
//!
//! A write goes through three phases:
//!
//! 1. stage the payload in `<name>.tmp` and flush it to disk
//! 2. unlink `<name>`
//! 3. rename `<name>.tmp` to `<name>`
//!
//! A crash during phase 1 leaves `<name>` untouched. A crash between 2 and 3
//! leaves only a complete `<name>.tmp`, which the reader promotes.

use crate::errors::{io_error, Result};
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Staging path for `target`: the same file name with `.tmp` appended
pub fn temp_path_for(target: &Path) -> PathBuf {
    let mut name = target
        .file_name()
        .map(OsString::from)
        .unwrap_or_default();
    name.push(".tmp");
    target.with_file_name(name)
}

/// Phase 1: write and flush the payload to the staging path
///
/// # Errors
///
/// `ERR_IO` if the directory or staging file cannot be created, written or
/// synced.
pub fn stage(target: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| io_error("create_slot_dir", e))?;
    }

    let temp_path = temp_path_for(target);
    let mut file = File::create(&temp_path).map_err(|e| io_error("create_slot_temp", e))?;
    file.write_all(content)
        .map_err(|e| io_error("write_slot_temp", e))?;
    file.sync_all().map_err(|e| io_error("sync_slot_temp", e))?;
    Ok(())
}

/// Phase 2: unlink the canonical file; a missing file is fine
///
/// # Errors
///
/// `ERR_IO` for any removal failure other than not-found.
pub fn unlink(target: &Path) -> Result<()> {
    match fs::remove_file(target) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(io_error("remove_slot", e)),
    }
}

/// Phase 3: promote the staged payload to canonical
///
/// # Errors
///
/// `ERR_IO` if the rename fails, including when nothing is staged.
pub fn promote(target: &Path) -> Result<()> {
    fs::rename(temp_path_for(target), target).map_err(|e| io_error("rename_slot_temp", e))
}

/// Run all three phases
///
/// # Errors
///
/// The first phase that fails.
pub fn atomic_replace(target: &Path, content: &[u8]) -> Result<()> {
    stage(target, content)?;
    unlink(target)?;
    promote(target)
}
