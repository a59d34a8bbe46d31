#![allow(clippy::unwrap_used, clippy::expect_used)]

use stepcalc_core::command::{Command, KindTag};
use stepcalc_core::errors::{CalcError, ExError, ExErrorKind};
use stepcalc_core::{MemorySlot, ScriptedConsole};

#[test]
fn test_invalid_number_carries_input() {
    let err: ExError = CalcError::InvalidNumber {
        input: "twelve".to_string(),
    }
    .into();

    assert_eq!(err.kind(), ExErrorKind::InvalidNumber);
    assert_eq!(err.code(), "ERR_INVALID_NUMBER");
    assert_eq!(err.input(), Some("twelve"));
    assert_eq!(err.op(), Some("parse_integer"));
}

#[test]
fn test_input_closed_distinct_from_invalid_number() {
    let err: ExError = CalcError::InputClosed.into();

    assert_eq!(err.kind(), ExErrorKind::InputClosed);
    assert_ne!(err.kind(), ExErrorKind::InvalidNumber);
    assert!(err.input().is_none());
}

#[test]
fn test_invalid_snapshot_message_preserved() {
    let err: ExError = CalcError::InvalidSnapshot {
        reason: "cursor 9 beyond schedule of 1 steps".to_string(),
    }
    .into();

    assert_eq!(err.code(), "ERR_INVALID_SNAPSHOT");
    assert!(err.message().contains("cursor 9"));
}

#[test]
fn test_malformed_rand_count_is_fatal() {
    let mut command = Command::new(KindTag::Rand, 420);
    let mut console = ScriptedConsole::new(["many"]);
    let mut slot = MemorySlot::new();

    let err = command.run(&mut console, &mut slot).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::InvalidNumber);
    assert!(slot.history().is_empty());
    assert_eq!(command.accumulator(), 420);
}

#[test]
fn test_exhausted_console_surfaces_input_closed() {
    let mut command = Command::new(KindTag::Median, 420);
    let mut console = ScriptedConsole::new(["2", "5"]);
    let mut slot = MemorySlot::new();

    let err = command.run(&mut console, &mut slot).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::InputClosed);
    assert_eq!(command.cursor(), 2);
    assert_eq!(slot.history().len(), 2);
}
