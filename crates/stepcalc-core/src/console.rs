//! Line-oriented console collaborator
//!
//! Commands never touch stdin/stdout directly; they talk to a `Console`
//! handed to them when they run. The console is never part of a checkpoint.

use crate::errors::{CalcError, Result};
use std::collections::VecDeque;

/// Blocking, line-at-a-time console
pub trait Console {
    /// Read the next line without its terminator
    ///
    /// # Errors
    ///
    /// `ERR_INPUT_CLOSED` once no further input can arrive, or `ERR_IO` when
    /// the underlying transport fails.
    fn read_line(&mut self) -> Result<String>;

    /// Write one line of output
    ///
    /// # Errors
    ///
    /// `ERR_IO` when the underlying transport fails.
    fn write_line(&mut self, line: &str) -> Result<()>;
}

/// In-memory console fed from a fixed script of input lines
///
/// Running out of script reports `ERR_INPUT_CLOSED`, which makes it a
/// convenient stand-in for a process killed while waiting on input.
#[derive(Debug, Clone, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    outputs: Vec<String>,
    consumed: usize,
}

impl ScriptedConsole {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            outputs: Vec::new(),
            consumed: 0,
        }
    }

    /// Lines written so far
    pub fn outputs(&self) -> &[String] {
        &self.outputs
    }

    /// Number of input lines handed out so far
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Input lines not yet read
    pub fn remaining(&self) -> Vec<String> {
        self.inputs.iter().cloned().collect()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self) -> Result<String> {
        let line = self.inputs.pop_front().ok_or(CalcError::InputClosed)?;
        self.consumed += 1;
        Ok(line)
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        self.outputs.push(line.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ExErrorKind;

    #[test]
    fn test_reads_in_order_then_closes() {
        let mut console = ScriptedConsole::new(["a", "b"]);

        assert_eq!(console.read_line().unwrap(), "a");
        assert_eq!(console.read_line().unwrap(), "b");
        let err = console.read_line().unwrap_err();

        assert_eq!(err.kind(), ExErrorKind::InputClosed);
        assert_eq!(console.consumed(), 2);
    }

    #[test]
    fn test_records_outputs() {
        let mut console = ScriptedConsole::new(Vec::<String>::new());
        console.write_line("5").unwrap();
        console.write_line("6").unwrap();

        assert_eq!(console.outputs(), ["5", "6"]);
    }
}
