//! Error type spanning all Toolshed crates.

use thiserror::Error as ThisError;
use toolshed_common::{DurationError, LoggingError};
use toolshed_fs::FileError;

/// Result type alias for code mixing several Toolshed crates
pub type Result<T> = std::result::Result<T, ToolshedError>;

/// Any error produced by a Toolshed crate
///
/// Each variant wraps the originating crate's error unchanged, so callers can
/// match on the specific cause after propagating with `?`.
#[derive(Debug, ThisError)]
#[non_exhaustive]
pub enum ToolshedError {
    /// Saving, loading or resolving files failed
    #[error(transparent)]
    File(#[from] FileError),

    /// A duration string could not be parsed
    #[error(transparent)]
    Duration(#[from] DurationError),

    /// The tracing subscriber could not be installed
    #[error(transparent)]
    Logging(#[from] LoggingError),
}
