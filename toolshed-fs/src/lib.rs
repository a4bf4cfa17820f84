//! Atomic file persistence and path resolution.
//!
//! Files are never written in place. Content goes to a hidden temporary file
//! in the destination directory which is then renamed over the destination,
//! so a reader sees either the previous file or the complete new one.
//!
//! # Overview
//!
//! - [`save_file_with`] - Atomically write whatever a closure produces
//! - [`save_file`] / [`save_json`] - Byte and JSON conveniences on top of it
//! - [`load_json`] - Decode a JSON file into any `DeserializeOwned` type
//! - [`resolve_path`] / [`resolve_files`] - Expand glob patterns to existing paths
//!
//! # Example
//!
//! ```no_run
//! use serde::{Deserialize, Serialize};
//! use toolshed_fs::{load_json, save_json};
//!
//! #[derive(Serialize, Deserialize)]
//! struct State {
//!     cursor: u64,
//! }
//!
//! // Creates `cache/` if it is the only missing level
//! save_json("cache/state.json", &State { cursor: 7 }, true, 0o644)?;
//! let state: State = load_json("cache/state.json")?;
//! assert_eq!(state.cursor, 7);
//! # Ok::<(), toolshed_fs::FileError>(())
//! ```
//!
//! Concurrent saves to the same destination are not coordinated: each one
//! installs a complete file and the last rename wins.

mod atomic;
mod error;
mod json;
mod resolve;

pub use atomic::{directory_mode, save_file, save_file_with};
pub use error::{FileError, Result, WriteSource};
pub use json::{load_json, save_json};
pub use resolve::{clean_path, resolve_files, resolve_path};
