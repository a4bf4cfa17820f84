//! # Toolshed Common
//!
//! Small helpers with no filesystem or collection concerns of their own.
//!
//! ## Modules
//!
//! - [`state`] - Interpret loose on/off values such as `"yes"`, `"0"` or `"disabled"`
//! - [`duration`] - Parse and format human durations like `1d2h30m`
//! - [`shutdown`] - An owned sequence of callbacks run before the process exits
//! - [`logging`] - Tracing subscriber setup driven by [`LogConfig`]
//! - [`error`] - Error types for the fallible operations above

pub mod duration;
pub mod error;
pub mod logging;
pub mod shutdown;
pub mod state;

pub use duration::{format_duration, parse_duration, parse_duration_with_default_unit};
pub use error::{DurationError, LoggingError, Result};
pub use logging::{init_logging, LogConfig, LOG_ENV_VAR};
pub use shutdown::{ShutdownHook, ShutdownSequence};
pub use state::{is_off, is_on};
