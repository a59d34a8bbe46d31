use thiserror::Error;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling and testing. Every kind is fatal to the running process;
/// recovery happens on the next start through the checkpoint protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Console input
    InvalidNumber,
    InputClosed,

    // Checkpoint payloads
    InvalidSnapshot,
    Serialization,

    // Durable slot
    Io,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidNumber => "ERR_INVALID_NUMBER",
            ExErrorKind::InputClosed => "ERR_INPUT_CLOSED",
            ExErrorKind::InvalidSnapshot => "ERR_INVALID_SNAPSHOT",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Classification fields for programmatic handling plus context for the
/// single line printed before the process exits.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    input: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            input: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the offending console input
    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = Some(input.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the offending input, if any
    pub fn input(&self) -> Option<&str> {
        self.input.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(input) = &self.input {
            write!(f, " (input: {:?})", input)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain failures raised while executing commands or decoding checkpoints
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    /// A line that must hold an integer did not parse as one
    #[error("Not an integer: {input:?}")]
    InvalidNumber { input: String },

    /// The console has no more lines to give
    #[error("Console input closed")]
    InputClosed,

    /// A decoded checkpoint breaks a structural invariant
    #[error("Invalid snapshot: {reason}")]
    InvalidSnapshot { reason: String },

    /// JSON encoding or decoding failed
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// A command reached a state its own schedule cannot produce
    #[error("Inconsistent command state: {reason}")]
    Inconsistent { reason: String },
}

impl From<CalcError> for ExError {
    fn from(err: CalcError) -> Self {
        match err {
            CalcError::InvalidNumber { input } => ExError::new(ExErrorKind::InvalidNumber)
                .with_op("parse_integer")
                .with_input(input)
                .with_message("Expected an integer"),

            CalcError::InputClosed => ExError::new(ExErrorKind::InputClosed)
                .with_op("read_line")
                .with_message("Console input closed"),

            CalcError::InvalidSnapshot { reason } => ExError::new(ExErrorKind::InvalidSnapshot)
                .with_op("snapshot_decode")
                .with_message(reason),

            CalcError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }

            CalcError::Inconsistent { reason } => ExError::new(ExErrorKind::Internal)
                .with_op("command_step")
                .with_message(reason),
        }
    }
}

/// Conversion from serde_json::Error to CalcError
impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ExError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::from(err).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes() {
        let cases = [
            (ExErrorKind::InvalidNumber, "ERR_INVALID_NUMBER"),
            (ExErrorKind::InputClosed, "ERR_INPUT_CLOSED"),
            (ExErrorKind::InvalidSnapshot, "ERR_INVALID_SNAPSHOT"),
            (ExErrorKind::Serialization, "ERR_SERIALIZATION"),
            (ExErrorKind::Io, "ERR_IO"),
            (ExErrorKind::Internal, "ERR_INTERNAL"),
        ];
        for (kind, expected_code) in cases {
            assert_eq!(kind.code(), expected_code, "Wrong code for {:?}", kind);
        }
    }

    #[test]
    fn test_display_includes_code_op_and_input() {
        let err: ExError = CalcError::InvalidNumber {
            input: "abc".to_string(),
        }
        .into();

        let rendered = err.to_string();
        assert!(rendered.starts_with("[ERR_INVALID_NUMBER]"));
        assert!(rendered.contains("parse_integer"));
        assert!(rendered.contains("\"abc\""));
    }

    #[test]
    fn test_serde_error_maps_to_serialization_kind() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: ExError = json_err.into();
        assert_eq!(err.kind(), ExErrorKind::Serialization);
    }
}
