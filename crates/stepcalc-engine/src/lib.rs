//! stepcalc engine - session orchestration
//!
//! Drives commands against a console and a durable slot: resumes whatever
//! command the slot holds, then runs the command loop.

pub mod session;

pub use session::dispatcher::{Dispatcher, SessionOutcome};
pub use session::vocabulary::Directive;
