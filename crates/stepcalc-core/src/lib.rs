//! stepcalc core: the checkpointing command engine
//!
//! This crate provides:
//! - Step-scheduled command state machines (add, median, rand, help)
//! - Snapshot model and codec for checkpoints
//! - The `Console` and `Slot` collaborator contracts, with in-memory versions
//! - Structured error and logging facilities

pub mod command;
pub mod console;
pub mod errors;
pub mod logging_facility;
pub mod slot;
pub mod snapshot;

#[doc(hidden)]
pub use stepcalc_core_types;

// Re-export commonly used types
pub use command::{Command, CommandKind, KindTag, Step};
pub use console::{Console, ScriptedConsole};
pub use errors::{CalcError, ExError, ExErrorKind, Result};
pub use slot::{MemorySlot, Slot};

/// Session accumulator for a session with no history
pub const INITIAL_ACCUMULATOR: i64 = 420;
