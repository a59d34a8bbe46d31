//! Console over any line reader and writer (stdin/stdout in the binary)

use std::io::{BufRead, Write};
use stepcalc_core::errors::{CalcError, ExError, ExErrorKind, Result};
use stepcalc_core::Console;

pub struct LineConsole<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

fn io_error(op: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(op)
        .with_message(err.to_string())
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .map_err(|e| io_error("console_read", e))?;
        if read == 0 {
            return Err(CalcError::InputClosed.into());
        }
        let trimmed_len = line.trim_end_matches(&['\n', '\r'][..]).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{}", line).map_err(|e| io_error("console_write", e))?;
        self.writer
            .flush()
            .map_err(|e| io_error("console_flush", e))
    }
}
