//! `add`: read two integers, print their sum

use super::{parse_integer, Step};
use crate::errors::Result;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddState {
    pub(crate) inputs: Vec<i32>,
}

impl AddState {
    pub(super) fn plan() -> Vec<Step> {
        vec![Step::Read, Step::Read, Step::Write]
    }

    pub(super) fn read(&mut self, line: &str) -> Result<()> {
        self.inputs.push(parse_integer(line)?);
        Ok(())
    }

    pub(super) fn write(&self) -> String {
        self.inputs
            .iter()
            .map(|&n| i64::from(n))
            .sum::<i64>()
            .to_string()
    }

    pub fn inputs(&self) -> &[i32] {
        &self.inputs
    }
}
