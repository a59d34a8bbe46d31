//! Fallback for input outside the vocabulary

use super::Step;

pub const NOT_FOUND_MESSAGE: &str = "No such command, use help to list commands";

pub(super) fn plan() -> Vec<Step> {
    vec![Step::Write]
}

pub(super) fn write() -> String {
    NOT_FOUND_MESSAGE.to_string()
}
