//! Slot byte encoding for command checkpoints
//!
//! JSON via serde. The empty payload is reserved for "no session in
//! progress" and never produced by `encode`.

use crate::command::Command;
use crate::errors::Result;
use crate::snapshot::model::{restore, CommandSnapshot};

/// Encode the full resumable state of `command`
///
/// # Errors
///
/// `ERR_SERIALIZATION` if JSON encoding fails.
pub fn encode(command: &Command) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(&CommandSnapshot::from(command))?)
}

/// Decode a slot payload; `None` for the empty payload
///
/// # Errors
///
/// `ERR_SERIALIZATION` for bytes that are not a snapshot,
/// `ERR_INVALID_SNAPSHOT` for a snapshot that breaks an invariant.
pub fn decode(payload: &[u8]) -> Result<Option<Command>> {
    if payload.is_empty() {
        return Ok(None);
    }
    let snapshot: CommandSnapshot = serde_json::from_slice(payload)?;
    restore(snapshot).map(Some)
}
