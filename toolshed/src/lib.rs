//! # Toolshed
//!
//! Small, independent helpers that keep turning up in command line tools and
//! services.
//!
//! ## Features
//!
//! - **Atomic Files**: Write-then-rename persistence for bytes and JSON ([`fs`])
//! - **Natural Sorting**: Version aware ordering, `v1.5` before `v1.10` ([`slice`])
//! - **Set Operations**: First-seen `unique`, `merge` and `minus` over slices ([`slice`])
//! - **Durations**: Parse and format `1d2h30m` style strings ([`common`])
//! - **Shutdown Hooks**: An owned, ordered list of exit callbacks ([`common`])
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use toolshed::prelude::*;
//!
//! # fn main() -> toolshed::Result<()> {
//! init_logging(&LogConfig::from_env())?;
//!
//! let releases = sort_natural(&["v1.10.3", "v1.5.1", "v1.10.1"], false);
//! save_json("releases.json", &releases, true, 0o644)?;
//!
//! let retention = parse_duration("2w")?;
//! println!("keeping {} for {}", releases.len(), format_duration(retention));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

/// Unified error type across the helper crates
pub mod error;

/// State coercion, durations, shutdown sequencing and logging
pub use toolshed_common as common;

/// Atomic file persistence and path resolution
pub use toolshed_fs as fs;

/// Ordering and set-like helpers over slices
pub use toolshed_slice as slice;

pub use error::{Result, ToolshedError};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{Result, ToolshedError};

    pub use toolshed_common::{
        format_duration, init_logging, is_off, is_on, parse_duration,
        parse_duration_with_default_unit, LogConfig, ShutdownHook, ShutdownSequence,
    };

    pub use toolshed_fs::{
        load_json, resolve_files, resolve_path, save_file, save_file_with, save_json, FileError,
    };

    pub use toolshed_slice::{
        first_non_empty, includes, map, merge, minus, natural_cmp, select, sort, sort_natural,
        tokens, unique, unique_opt, IsDefault,
    };
}
