//! Error types for file persistence and path resolution.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using FileError.
pub type Result<T> = std::result::Result<T, FileError>;

/// Error returned by a caller supplied writer function.
pub type WriteSource = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur while saving, loading or resolving files.
#[derive(Error, Debug)]
pub enum FileError {
    /// Path is empty or has no file name.
    #[error("invalid file path '{path}'")]
    InvalidPath { path: PathBuf },

    /// Failed to create the missing parent directory.
    #[error("failed to create directory '{path}': {source}")]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to create the temporary file next to the destination.
    #[error("failed to create temporary file for '{path}': {source}")]
    TempFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The writer function failed.
    #[error("failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: WriteSource,
    },

    /// Flushing or syncing the temporary file failed.
    #[error("failed to close temporary file for '{path}': {source}")]
    Close {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Moving the temporary file over the destination failed.
    #[error("failed to rename temporary file to '{path}': {source}")]
    Rename {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to open a file for reading.
    #[error("failed to open '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File contents are not valid JSON for the requested type.
    #[error("failed to decode JSON from '{path}': {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Path does not exist and is not a glob pattern.
    #[error("'{path}' does not exist")]
    NotFound { path: PathBuf },

    /// Glob pattern could not be parsed.
    #[error("invalid pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}

impl FileError {
    /// Create an InvalidPath error.
    pub fn invalid_path(path: impl Into<PathBuf>) -> Self {
        Self::InvalidPath { path: path.into() }
    }

    /// Create a DirectoryCreation error.
    pub fn directory_creation(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::DirectoryCreation {
            path: path.into(),
            source,
        }
    }

    /// Create a TempFile error.
    pub fn temp_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::TempFile {
            path: path.into(),
            source,
        }
    }

    /// Create a Write error from any writer failure.
    pub fn write(path: impl Into<PathBuf>, source: impl Into<WriteSource>) -> Self {
        Self::Write {
            path: path.into(),
            source: source.into(),
        }
    }

    /// Create a Close error.
    pub fn close(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Close {
            path: path.into(),
            source,
        }
    }

    /// Create a Rename error.
    pub fn rename(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Rename {
            path: path.into(),
            source,
        }
    }

    /// Create an Open error.
    pub fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }

    /// Create a Json error.
    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }

    /// Create a NotFound error.
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Returns true if the error means the file or a parent directory is missing.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound { .. } => true,
            Self::DirectoryCreation { source, .. }
            | Self::TempFile { source, .. }
            | Self::Open { source, .. } => source.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }
}
