#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Sessions killed at arbitrary checkpoints and restarted against the same
//! file slot behave as if they had never stopped.

use std::path::Path;
use stepcalc_core::command::{rand, KindTag};
use stepcalc_core::errors::{ExError, ExErrorKind, Result};
use stepcalc_core::snapshot::decode;
use stepcalc_core::{ScriptedConsole, Slot};
use stepcalc_engine::{Dispatcher, SessionOutcome};
use stepcalc_store::FileSlot;
use tempfile::TempDir;

/// Commits `survive` writes, then commits one more and dies right after it
struct CrashingSlot {
    inner: FileSlot,
    survive: usize,
}

impl Slot for CrashingSlot {
    fn read(&self) -> Result<Vec<u8>> {
        self.inner.read()
    }

    fn write(&mut self, content: &[u8]) -> Result<()> {
        self.inner.write(content)?;
        if self.survive == 0 {
            return Err(ExError::new(ExErrorKind::Io)
                .with_op("simulated_crash")
                .with_message("process killed after commit"));
        }
        self.survive -= 1;
        Ok(())
    }
}

fn session<T: AsRef<str>>(path: &Path, inputs: &[T]) -> Dispatcher<ScriptedConsole, FileSlot> {
    Dispatcher::new(
        ScriptedConsole::new(inputs.iter().map(|s| s.as_ref().to_string())),
        FileSlot::new(path),
    )
}

fn uninterrupted_outputs(inputs: &[&str]) -> Vec<String> {
    let temp_dir = TempDir::new().unwrap();
    let mut d = session(&temp_dir.path().join("slot"), inputs);
    d.run().unwrap();
    d.console().outputs().to_vec()
}

#[test]
fn test_add_resumes_after_input_closed_mid_command() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("session.json");

    let mut first = session(&path, &["add", "2"]);
    let err = first.run().unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::InputClosed);
    assert!(first.console().outputs().is_empty());

    let mut second = session(&path, &["3", "exit"]);
    assert_eq!(second.run().unwrap(), SessionOutcome::Exited);
    assert_eq!(second.console().outputs(), ["5"]);
}

#[test]
fn test_help_resumes_inside_topic_loop() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("session.json");

    let mut first = session(&path, &["help", "median"]);
    first.run().unwrap_err();
    let printed = first.console().outputs().to_vec();
    assert_eq!(printed.len(), 5, "prompt, list, hint, topic, hint");

    let mut second = session(&path, &["nonsense", "end", "exit"]);
    second.run().unwrap();

    let mut combined = printed;
    combined.extend(second.console().outputs().iter().cloned());
    assert_eq!(
        combined,
        uninterrupted_outputs(&["help", "median", "nonsense", "end", "exit"])
    );
}

#[test]
fn test_rand_killed_after_every_checkpoint_resumes_exactly() {
    let inputs = ["rand", "4", "exit"];
    let expected = uninterrupted_outputs(&inputs);
    // initial checkpoint + read + four writes
    let checkpoints = 6;

    for survive in 0..checkpoints {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("session.json");

        let mut first = Dispatcher::new(
            ScriptedConsole::new(inputs),
            CrashingSlot {
                inner: FileSlot::new(&path),
                survive,
            },
        );
        let err = first.run().unwrap_err();
        assert_eq!(err.op(), Some("simulated_crash"));
        let (console, _) = first.into_parts();

        let mut second = session(&path, &console.remaining());
        assert_eq!(second.run().unwrap(), SessionOutcome::Exited);

        let mut combined = console.outputs().to_vec();
        combined.extend(second.console().outputs().iter().cloned());
        assert_eq!(combined, expected, "crash after checkpoint {}", survive);
    }
}

#[test]
fn test_completed_rand_in_slot_seeds_next_session() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("session.json");

    let mut first = session(&path, &["rand", "1"]);
    assert_eq!(first.run().unwrap(), SessionOutcome::InputClosed);
    assert_eq!(first.console().outputs(), ["420"]);

    let mut second = session(&path, &["rand", "1", "exit"]);
    second.run().unwrap();

    assert_eq!(second.console().outputs(), [rand::next(420).to_string()]);
    assert_eq!(second.accumulator(), rand::next(rand::next(420)));
}

#[test]
fn test_completed_command_is_not_replayed() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("session.json");

    let mut first = session(&path, &["add", "4", "5"]);
    first.run().unwrap();
    assert_eq!(first.console().outputs(), ["9"]);

    let pending = decode(&FileSlot::new(&path).read().unwrap()).unwrap().unwrap();
    assert_eq!(pending.tag(), KindTag::Add);
    assert!(pending.is_done());

    let mut second = session(&path, &["exit"]);
    second.run().unwrap();
    assert!(second.console().outputs().is_empty());
}

#[test]
fn test_exit_clears_slot() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("session.json");

    let mut d = session(&path, &["rand", "2", "exit"]);
    d.run().unwrap();

    assert!(FileSlot::new(&path).read().unwrap().is_empty());

    let mut fresh = session(&path, &["rand", "1", "exit"]);
    fresh.run().unwrap();
    assert_eq!(fresh.console().outputs(), ["420"]);
}

#[test]
fn test_malformed_number_is_fatal_and_resumable() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("session.json");

    let mut first = session(&path, &["median", "2", "seven"]);
    let err = first.run().unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::InvalidNumber);

    let mut second = session(&path, &["7", "8", "exit"]);
    second.run().unwrap();
    assert_eq!(second.console().outputs(), ["7.5"]);
}
