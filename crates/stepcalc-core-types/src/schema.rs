//! Canonical event names for structured logging
//!
//! The `log_op_*` macros emit `component`, `op`, `event` and `duration_ms`
//! on every boundary event, plus `err_kind` and `err_code` on failures. The
//! `event` field takes one of the values below.

pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names_are_distinct() {
        assert_ne!(EVENT_START, EVENT_END);
        assert_ne!(EVENT_START, EVENT_END_ERROR);
        assert_ne!(EVENT_END, EVENT_END_ERROR);
    }
}
