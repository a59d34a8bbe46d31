//! stepcalc store - durable checkpoint slot on the filesystem
//!
//! Provides:
//! - `FileSlot`, a single-file implementation of the core `Slot` contract
//! - Three-phase atomic replacement (stage, unlink, promote) with recovery
//!   of an interrupted promotion on read

pub mod errors;
pub mod slot;

// Re-export key types
pub use errors::Result;
pub use slot::FileSlot;
