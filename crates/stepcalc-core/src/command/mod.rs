//! Step-scheduled command state machines
//!
//! A [`Command`] is a plain value: an accumulator, a schedule of console
//! steps, a cursor into that schedule and the state of its kind. Running it
//! performs the steps from the cursor onward, checkpointing the whole value
//! into a [`Slot`] after each one, so a command restored from its latest
//! checkpoint continues as if the process had never stopped.
//!
//! The console and slot are arguments to [`Command::run`]; a command never
//! holds on to either.

pub mod add;
pub mod help;
pub mod median;
pub mod not_found;
pub mod rand;

use crate::console::Console;
use crate::errors::{CalcError, Result};
use crate::slot::Slot;
use crate::snapshot;
use serde::{Deserialize, Serialize};

pub use add::AddState;
pub use help::{HelpLine, HelpState};
pub use median::MedianState;
pub use not_found::NOT_FOUND_MESSAGE;
pub use rand::RandState;

/// One console interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Read,
    Write,
}

/// Discriminant of [`CommandKind`], used for construction and logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindTag {
    Add,
    Median,
    Rand,
    Help,
    NotFound,
}

impl KindTag {
    pub fn as_str(self) -> &'static str {
        match self {
            KindTag::Add => "add",
            KindTag::Median => "median",
            KindTag::Rand => "rand",
            KindTag::Help => "help",
            KindTag::NotFound => "not_found",
        }
    }
}

/// Kind-specific state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandKind {
    Add(AddState),
    Median(MedianState),
    Rand(RandState),
    Help(HelpState),
    NotFound,
}

impl CommandKind {
    pub fn tag(&self) -> KindTag {
        match self {
            CommandKind::Add(_) => KindTag::Add,
            CommandKind::Median(_) => KindTag::Median,
            CommandKind::Rand(_) => KindTag::Rand,
            CommandKind::Help(_) => KindTag::Help,
            CommandKind::NotFound => KindTag::NotFound,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub(crate) accumulator: i64,
    pub(crate) schedule: Vec<Step>,
    pub(crate) cursor: usize,
    pub(crate) kind: CommandKind,
}

impl Command {
    /// Fresh command of the given kind seeded with the session accumulator
    pub fn new(tag: KindTag, accumulator: i64) -> Self {
        let (schedule, kind) = match tag {
            KindTag::Add => (AddState::plan(), CommandKind::Add(AddState::default())),
            KindTag::Median => (
                MedianState::plan(),
                CommandKind::Median(MedianState::default()),
            ),
            KindTag::Rand => (RandState::plan(), CommandKind::Rand(RandState::default())),
            KindTag::Help => (HelpState::plan(), CommandKind::Help(HelpState::default())),
            KindTag::NotFound => (not_found::plan(), CommandKind::NotFound),
        };
        Self {
            accumulator,
            schedule,
            cursor: 0,
            kind,
        }
    }

    pub fn accumulator(&self) -> i64 {
        self.accumulator
    }

    pub fn schedule(&self) -> &[Step] {
        &self.schedule
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn kind(&self) -> &CommandKind {
        &self.kind
    }

    pub fn tag(&self) -> KindTag {
        self.kind.tag()
    }

    pub fn is_done(&self) -> bool {
        self.cursor == self.schedule.len()
    }

    /// Perform the step under the cursor and advance past it
    ///
    /// Does nothing once the command is done.
    ///
    /// # Errors
    ///
    /// Console failures, and `ERR_INVALID_NUMBER` when a read expects an
    /// integer and gets something else.
    pub fn step(&mut self, console: &mut dyn Console) -> Result<()> {
        let Some(&step) = self.schedule.get(self.cursor) else {
            return Ok(());
        };

        match step {
            Step::Read => {
                let line = console.read_line()?;
                match &mut self.kind {
                    CommandKind::Add(state) => state.read(&line)?,
                    CommandKind::Median(state) => state.read(&line, &mut self.schedule)?,
                    CommandKind::Rand(state) => state.read(&line, &mut self.schedule)?,
                    CommandKind::Help(state) => state.read(&line, &mut self.schedule),
                    CommandKind::NotFound => {}
                }
            }
            Step::Write => {
                let line = match &mut self.kind {
                    CommandKind::Add(state) => state.write(),
                    CommandKind::Median(state) => state.write(),
                    CommandKind::Rand(state) => state.write(&mut self.accumulator),
                    CommandKind::Help(state) => state.write(&mut self.schedule)?,
                    CommandKind::NotFound => not_found::write(),
                };
                console.write_line(&line)?;
            }
        }

        self.cursor += 1;
        tracing::debug!(
            kind = self.tag().as_str(),
            cursor = self.cursor,
            schedule_len = self.schedule.len(),
            step = ?step,
            "step performed"
        );
        Ok(())
    }

    /// Commit the full state of this command to `slot`
    ///
    /// # Errors
    ///
    /// Encoding or slot failures.
    pub fn checkpoint(&self, slot: &mut dyn Slot) -> Result<()> {
        let payload = snapshot::encode(self)?;
        slot.write(&payload)
    }

    /// Drive the remaining steps, checkpointing after each one
    ///
    /// # Errors
    ///
    /// The first step or checkpoint failure; the slot then still holds the
    /// checkpoint of the last completed step.
    pub fn run(&mut self, console: &mut dyn Console, slot: &mut dyn Slot) -> Result<()> {
        while !self.is_done() {
            self.step(console)?;
            self.checkpoint(slot)?;
        }
        Ok(())
    }
}

/// Parse one console line as a 32-bit integer, surrounding whitespace allowed
pub(crate) fn parse_integer(line: &str) -> Result<i32> {
    line.trim().parse::<i32>().map_err(|_| {
        CalcError::InvalidNumber {
            input: line.to_string(),
        }
        .into()
    })
}
