//! Filesystem slot
//!
//! - `atomic`: the stage → unlink → promote primitives
//! - `file_slot`: `FileSlot`, which reads with promotion recovery

pub mod atomic;
mod file_slot;

pub use file_slot::FileSlot;
