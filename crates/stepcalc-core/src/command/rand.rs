//! `rand`: read a count, print that many Park–Miller values

use super::{parse_integer, Step};
use crate::errors::Result;

/// Park–Miller multiplier
pub const MULTIPLIER: i64 = 16807;
/// Park–Miller modulus, 2^31 - 1
pub const MODULUS: i64 = 2_147_483_647;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RandState {
    pub(crate) requested: Option<i32>,
}

impl RandState {
    pub(super) fn plan() -> Vec<Step> {
        vec![Step::Read]
    }

    /// Appends exactly one write per requested value.
    pub(super) fn read(&mut self, line: &str, schedule: &mut Vec<Step>) -> Result<()> {
        let requested = parse_integer(line)?;
        self.requested = Some(requested);
        let n = usize::try_from(requested).unwrap_or(0);
        schedule.extend(std::iter::repeat(Step::Write).take(n));
        Ok(())
    }

    /// Emits the current value and advances the generator.
    pub(super) fn write(&self, accumulator: &mut i64) -> String {
        let line = accumulator.to_string();
        *accumulator = next(*accumulator);
        line
    }

    pub fn requested(&self) -> Option<i32> {
        self.requested
    }
}

/// One Park–Miller step: `(16807 * x) mod (2^31 - 1)`
pub fn next(x: i64) -> i64 {
    let product = i128::from(MULTIPLIER) * i128::from(x);
    product.rem_euclid(i128::from(MODULUS)) as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_from_seed() {
        assert_eq!(next(420), 16807 * 420 % MODULUS);
    }

    #[test]
    fn test_next_stays_below_modulus_for_large_state() {
        let x = next(i64::MAX);
        assert!((0..MODULUS).contains(&x));
    }

    #[test]
    fn test_read_appends_exactly_requested_writes() {
        let mut state = RandState::default();
        let mut schedule = RandState::plan();

        state.read("4", &mut schedule).unwrap();

        assert_eq!(schedule.len(), 5);
        assert!(schedule[1..].iter().all(|s| *s == Step::Write));
    }

    #[test]
    fn test_write_emits_then_advances() {
        let state = RandState::default();
        let mut x = 420;

        assert_eq!(state.write(&mut x), "420");
        assert_eq!(x, next(420));
    }
}
