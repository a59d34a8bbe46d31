//! `median`: read a count, then that many integers, print their median

use super::{parse_integer, Step};
use crate::errors::Result;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MedianState {
    pub(crate) count: Option<i32>,
    pub(crate) inputs: Vec<i32>,
}

impl MedianState {
    pub(super) fn plan() -> Vec<Step> {
        vec![Step::Read]
    }

    /// The first read fixes the count and grows the schedule; the rest
    /// collect values.
    pub(super) fn read(&mut self, line: &str, schedule: &mut Vec<Step>) -> Result<()> {
        let value = parse_integer(line)?;
        match self.count {
            None => {
                self.count = Some(value);
                let n = usize::try_from(value).unwrap_or(0);
                schedule.extend(std::iter::repeat(Step::Read).take(n));
                schedule.push(Step::Write);
            }
            Some(_) => self.inputs.push(value),
        }
        Ok(())
    }

    pub(super) fn write(&self) -> String {
        median(&self.inputs)
    }

    pub fn count(&self) -> Option<i32> {
        self.count
    }

    pub fn inputs(&self) -> &[i32] {
        &self.inputs
    }
}

/// Median rendered without locale: the middle value for an odd count, the
/// mean of the two middle values for an even count, `0` when empty.
pub fn median(values: &[i32]) -> String {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();

    let len = sorted.len();
    if len == 0 {
        return "0".to_string();
    }
    if len % 2 == 1 {
        return sorted[len / 2].to_string();
    }

    let sum = i64::from(sorted[len / 2 - 1]) + i64::from(sorted[len / 2]);
    (sum as f64 / 2.0).to_string()
}
