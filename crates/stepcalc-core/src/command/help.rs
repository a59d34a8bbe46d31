//! `help`: an interactive topic loop that ends on `end`

use super::Step;
use crate::errors::{CalcError, Result};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// A line the help loop has scheduled but not yet printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HelpLine {
    Prompt,
    CommandList,
    ExitHint,
    AddTopic,
    MedianTopic,
    RandTopic,
    UnknownTopic,
}

impl HelpLine {
    pub fn text(self) -> &'static str {
        match self {
            HelpLine::Prompt => "Enter the command you want help with",
            HelpLine::CommandList => "Available commands: add, median, rand",
            HelpLine::ExitHint => "Type end to leave help",
            HelpLine::AddTopic => "Computes the sum of two numbers",
            HelpLine::MedianTopic => "Computes the median of a list of numbers",
            HelpLine::RandTopic => "Generates a list of random numbers",
            HelpLine::UnknownTopic => "No such command",
        }
    }
}

/// Pending lines, one per scheduled write not yet performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpState {
    pub(crate) pending: VecDeque<HelpLine>,
}

impl Default for HelpState {
    fn default() -> Self {
        Self {
            pending: VecDeque::from([HelpLine::Prompt, HelpLine::CommandList, HelpLine::ExitHint]),
        }
    }
}

impl HelpState {
    pub(super) fn plan() -> Vec<Step> {
        vec![Step::Write, Step::Write, Step::Write]
    }

    pub(super) fn read(&mut self, line: &str, schedule: &mut Vec<Step>) {
        let lines: &[HelpLine] = match line.trim() {
            "end" => &[],
            "add" => &[HelpLine::AddTopic, HelpLine::ExitHint],
            "median" => &[HelpLine::MedianTopic, HelpLine::ExitHint],
            "rand" => &[HelpLine::RandTopic, HelpLine::ExitHint],
            _ => &[
                HelpLine::UnknownTopic,
                HelpLine::CommandList,
                HelpLine::ExitHint,
            ],
        };
        for &help_line in lines {
            self.enqueue(help_line, schedule);
        }
    }

    /// Prints the next pending line; the exit hint hands control back to
    /// the user with another read.
    ///
    /// Every scheduled write has a pending line, so an empty queue means the
    /// state was corrupted.
    pub(super) fn write(&mut self, schedule: &mut Vec<Step>) -> Result<String> {
        let line = self.pending.pop_front().ok_or_else(|| CalcError::Inconsistent {
            reason: "help write scheduled with no pending line".to_string(),
        })?;
        if line == HelpLine::ExitHint {
            schedule.push(Step::Read);
        }
        Ok(line.text().to_string())
    }

    fn enqueue(&mut self, line: HelpLine, schedule: &mut Vec<Step>) {
        self.pending.push_back(line);
        schedule.push(Step::Write);
    }

    pub fn pending(&self) -> impl Iterator<Item = HelpLine> + '_ {
        self.pending.iter().copied()
    }
}
