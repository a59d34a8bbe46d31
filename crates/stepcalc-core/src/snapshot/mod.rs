//! Checkpoint payloads
//!
//! - `model`: plain-data snapshot types, one variant per command kind
//! - `codec`: pure encode/decode between [`Command`](crate::command::Command)
//!   and slot bytes

pub mod codec;
pub mod model;

pub use codec::{decode, encode};
pub use model::{restore, CommandSnapshot, KindSnapshot};
