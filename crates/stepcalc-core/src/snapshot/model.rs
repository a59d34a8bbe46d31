//! Plain-data checkpoint model
//!
//! Mirrors everything a command needs to resume and nothing else. The
//! console and slot are absent by construction.

use crate::command::{
    AddState, Command, CommandKind, HelpLine, HelpState, MedianState, RandState, Step,
};
use crate::errors::{CalcError, Result};
use serde::{Deserialize, Serialize};

/// Persisted form of a command
///
/// Serialized flat: `{"accumulator":..,"cursor":..,"schedule":[..],"kind":"..",..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSnapshot {
    pub accumulator: i64,
    pub cursor: usize,
    pub schedule: Vec<Step>,
    #[serde(flatten)]
    pub state: KindSnapshot,
}

/// Kind tag plus kind-specific fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum KindSnapshot {
    Add { inputs: Vec<i32> },
    Median { count: Option<i32>, inputs: Vec<i32> },
    Rand { requested: Option<i32> },
    Help { pending: Vec<HelpLine> },
    NotFound,
}

impl From<&Command> for CommandSnapshot {
    fn from(command: &Command) -> Self {
        let state = match &command.kind {
            CommandKind::Add(s) => KindSnapshot::Add {
                inputs: s.inputs.clone(),
            },
            CommandKind::Median(s) => KindSnapshot::Median {
                count: s.count,
                inputs: s.inputs.clone(),
            },
            CommandKind::Rand(s) => KindSnapshot::Rand {
                requested: s.requested,
            },
            CommandKind::Help(s) => KindSnapshot::Help {
                pending: s.pending.iter().copied().collect(),
            },
            CommandKind::NotFound => KindSnapshot::NotFound,
        };
        Self {
            accumulator: command.accumulator,
            cursor: command.cursor,
            schedule: command.schedule.clone(),
            state,
        }
    }
}

impl TryFrom<CommandSnapshot> for Command {
    type Error = CalcError;

    fn try_from(snapshot: CommandSnapshot) -> std::result::Result<Self, Self::Error> {
        validate(&snapshot)?;

        let kind = match snapshot.state {
            KindSnapshot::Add { inputs } => CommandKind::Add(AddState { inputs }),
            KindSnapshot::Median { count, inputs } => {
                CommandKind::Median(MedianState { count, inputs })
            }
            KindSnapshot::Rand { requested } => CommandKind::Rand(RandState { requested }),
            KindSnapshot::Help { pending } => CommandKind::Help(HelpState {
                pending: pending.into(),
            }),
            KindSnapshot::NotFound => CommandKind::NotFound,
        };
        Ok(Command {
            accumulator: snapshot.accumulator,
            schedule: snapshot.schedule,
            cursor: snapshot.cursor,
            kind,
        })
    }
}

fn validate(snapshot: &CommandSnapshot) -> std::result::Result<(), CalcError> {
    let invalid = |reason: String| Err(CalcError::InvalidSnapshot { reason });

    if snapshot.cursor > snapshot.schedule.len() {
        return invalid(format!(
            "cursor {} beyond schedule of {} steps",
            snapshot.cursor,
            snapshot.schedule.len()
        ));
    }

    match &snapshot.state {
        KindSnapshot::Add { inputs } if inputs.len() > 2 => {
            invalid(format!("add holds {} inputs", inputs.len()))
        }
        KindSnapshot::Median {
            count: None,
            inputs,
        } if !inputs.is_empty() => invalid("median collected inputs before its count".to_string()),
        KindSnapshot::Help { pending } => {
            let writes_left = snapshot.schedule[snapshot.cursor..]
                .iter()
                .filter(|s| **s == Step::Write)
                .count();
            if writes_left == pending.len() {
                Ok(())
            } else {
                invalid(format!(
                    "help has {} pending lines for {} remaining writes",
                    pending.len(),
                    writes_left
                ))
            }
        }
        _ => Ok(()),
    }
}

/// Restore a command from its snapshot
///
/// # Errors
///
/// `ERR_INVALID_SNAPSHOT` when the snapshot breaks a structural invariant.
pub fn restore(snapshot: CommandSnapshot) -> Result<Command> {
    Ok(Command::try_from(snapshot)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::KindTag;

    #[test]
    fn test_snapshot_of_fresh_help_lists_initial_lines() {
        let command = Command::new(KindTag::Help, 420);
        let snapshot = CommandSnapshot::from(&command);

        assert_eq!(snapshot.cursor, 0);
        assert_eq!(
            snapshot.state,
            KindSnapshot::Help {
                pending: vec![HelpLine::Prompt, HelpLine::CommandList, HelpLine::ExitHint]
            }
        );
    }

    #[test]
    fn test_cursor_past_schedule_is_rejected() {
        let snapshot = CommandSnapshot {
            accumulator: 420,
            cursor: 2,
            schedule: vec![Step::Write],
            state: KindSnapshot::NotFound,
        };

        let err = restore(snapshot).unwrap_err();
        assert_eq!(err.code(), "ERR_INVALID_SNAPSHOT");
    }

    #[test]
    fn test_help_pending_mismatch_is_rejected() {
        let snapshot = CommandSnapshot {
            accumulator: 420,
            cursor: 0,
            schedule: vec![Step::Write, Step::Write],
            state: KindSnapshot::Help {
                pending: vec![HelpLine::Prompt],
            },
        };

        assert!(restore(snapshot).is_err());
    }

    #[test]
    fn test_median_inputs_without_count_is_rejected() {
        let snapshot = CommandSnapshot {
            accumulator: 420,
            cursor: 1,
            schedule: vec![Step::Read],
            state: KindSnapshot::Median {
                count: None,
                inputs: vec![3],
            },
        };

        assert!(restore(snapshot).is_err());
    }
}
