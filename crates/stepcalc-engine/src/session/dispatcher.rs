//! Session dispatcher with boundary logging.
//!
//! ## Logging Ownership
//!
//! The engine layer owns lifecycle logging for command runs:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! Lower layers (store, core) use only `tracing::debug!()` for internal details.

use crate::session::vocabulary::Directive;
use std::time::Instant;
use stepcalc_core::errors::{ExErrorKind, Result};
use stepcalc_core::snapshot;
use stepcalc_core::{log_op_end, log_op_error, log_op_start};
use stepcalc_core::{Command, Console, KindTag, Slot, INITIAL_ACCUMULATOR};
use stepcalc_core_types::SessionId;

/// How a session loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// `exit` was entered and the slot cleared
    Exited,
    /// The console closed at the prompt; the slot is left for the next run
    InputClosed,
}

/// Owns the session accumulator and drives one command at a time
pub struct Dispatcher<C, S> {
    console: C,
    slot: S,
    accumulator: i64,
    session_id: SessionId,
}

impl<C: Console, S: Slot> Dispatcher<C, S> {
    pub fn new(console: C, slot: S) -> Self {
        Self {
            console,
            slot,
            accumulator: INITIAL_ACCUMULATOR,
            session_id: SessionId::new(),
        }
    }

    pub fn accumulator(&self) -> i64 {
        self.accumulator
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    pub fn into_parts(self) -> (C, S) {
        (self.console, self.slot)
    }

    /// Resume, then serve commands until `exit` or end of input
    ///
    /// # Errors
    ///
    /// Any fatal console, parse, codec or slot error. The slot keeps the
    /// last checkpoint, so the next run picks up from there.
    pub fn run(&mut self) -> Result<SessionOutcome> {
        let span = tracing::info_span!("session", session_id = %self.session_id);
        let _guard = span.enter();

        self.resume()?;

        loop {
            let line = match self.console.read_line() {
                Ok(line) => line,
                Err(e) if e.kind() == ExErrorKind::InputClosed => {
                    tracing::debug!("console closed at prompt");
                    return Ok(SessionOutcome::InputClosed);
                }
                Err(e) => return Err(e),
            };

            match Directive::parse(&line) {
                Directive::Exit => {
                    self.slot.clear()?;
                    tracing::debug!("session exited, slot cleared");
                    return Ok(SessionOutcome::Exited);
                }
                Directive::Run(tag) => self.execute(tag)?,
            }
        }
    }

    /// Finish the command left in the slot, if any, and adopt its
    /// accumulator. Returns the kind that was resumed.
    ///
    /// # Errors
    ///
    /// Slot, codec and step failures.
    pub fn resume(&mut self) -> Result<Option<KindTag>> {
        let payload = self.slot.read()?;
        let Some(mut command) = snapshot::decode(&payload)? else {
            return Ok(None);
        };

        let tag = command.tag();
        log_op_start!(
            "session_resume",
            kind = tag.as_str(),
            cursor = command.cursor(),
            schedule_len = command.schedule().len()
        );
        let start = Instant::now();

        command
            .run(&mut self.console, &mut self.slot)
            .map_err(|e| {
                log_op_error!(
                    "session_resume",
                    e.clone(),
                    duration_ms = start.elapsed().as_millis() as u64,
                    kind = tag.as_str()
                );
                e
            })?;
        self.accumulator = command.accumulator();

        log_op_end!(
            "session_resume",
            duration_ms = start.elapsed().as_millis() as u64,
            kind = tag.as_str(),
            accumulator = self.accumulator
        );
        Ok(Some(tag))
    }

    /// Run a fresh command seeded with the session accumulator
    ///
    /// The fresh command is checkpointed before its first step, so the
    /// command word just read is never lost. Only `rand` feeds its final
    /// accumulator back into the session.
    ///
    /// # Errors
    ///
    /// Slot, codec and step failures.
    pub fn execute(&mut self, tag: KindTag) -> Result<()> {
        log_op_start!("command_run", kind = tag.as_str());
        let start = Instant::now();

        let mut command = Command::new(tag, self.accumulator);
        command
            .checkpoint(&mut self.slot)
            .and_then(|()| command.run(&mut self.console, &mut self.slot))
            .map_err(|e| {
                log_op_error!(
                    "command_run",
                    e.clone(),
                    duration_ms = start.elapsed().as_millis() as u64,
                    kind = tag.as_str()
                );
                e
            })?;

        if tag == KindTag::Rand {
            self.accumulator = command.accumulator();
        }

        log_op_end!(
            "command_run",
            duration_ms = start.elapsed().as_millis() as u64,
            kind = tag.as_str(),
            accumulator = self.accumulator
        );
        Ok(())
    }
}
