//! Session orchestration.
//!
//! - `vocabulary`: maps an input line to what the session should do
//! - `dispatcher`: resume-on-startup plus the steady-state command loop

pub mod dispatcher;
pub mod vocabulary;
