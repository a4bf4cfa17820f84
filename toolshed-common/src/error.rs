//! Error types for Toolshed Common

use thiserror::Error as ThisError;

/// Result type alias for duration parsing
pub type Result<T> = std::result::Result<T, DurationError>;

/// Errors produced while parsing a duration string
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum DurationError {
    /// The input does not have the `<number><unit>...` shape
    #[error("invalid duration: {0:?}")]
    Invalid(String),

    /// A number was followed by a unit we do not know
    #[error("invalid unit {unit:?} in duration {input:?}")]
    UnknownUnit {
        /// The unrecognized unit
        unit: String,
        /// The full input
        input: String,
    },

    /// A number part could not be parsed
    #[error("invalid number {number:?} in duration {input:?}")]
    InvalidNumber {
        /// The number as written
        number: String,
        /// The full input
        input: String,
    },

    /// The duration does not fit the supported range
    #[error("duration {0:?} is out of range")]
    OutOfRange(String),
}

/// Errors produced while installing the global tracing subscriber
#[derive(Debug, ThisError)]
pub enum LoggingError {
    /// The filter directive could not be parsed
    #[error("invalid log filter {filter:?}: {source}")]
    InvalidFilter {
        /// The rejected directive
        filter: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    /// A global subscriber was already installed
    #[error("logging already initialized: {0}")]
    AlreadyInitialized(#[source] tracing_subscriber::util::TryInitError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_duration_error_display() {
        let err = DurationError::Invalid("soon".to_string());
        assert_eq!(err.to_string(), "invalid duration: \"soon\"");

        let err = DurationError::UnknownUnit {
            unit: "fortnight".to_string(),
            input: "2fortnight".to_string(),
        };
        assert!(err.to_string().contains("invalid unit \"fortnight\""));
    }

    #[test]
    fn test_duration_error_has_no_source() {
        let err = DurationError::OutOfRange("9999999y".to_string());
        assert!(err.source().is_none());
        assert!(err.to_string().contains("out of range"));
    }
}
