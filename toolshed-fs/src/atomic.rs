//! Atomic file replacement.
//!
//! Content is written to a hidden temporary file in the destination's
//! directory and renamed over the destination once it is complete, so readers
//! only ever see the old file or the new one.

use crate::error::{FileError, Result, WriteSource};
use std::ffi::OsStr;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Mode for directories created on behalf of a file with mode `mode`.
///
/// Every class that may read the file may also traverse the directory.
pub fn directory_mode(mode: u32) -> u32 {
    mode | ((mode & 0o444) >> 2)
}

fn create_temp(dir: &Path, prefix: &OsStr, mode: u32) -> io::Result<NamedTempFile> {
    let mut builder = tempfile::Builder::new();
    builder.prefix(prefix);
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(mode));
    }
    #[cfg(not(unix))]
    let _ = mode;
    builder.tempfile_in(dir)
}

fn create_dir(dir: &Path, mode: u32) -> io::Result<()> {
    let mut builder = std::fs::DirBuilder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = mode;
    builder.create(dir)
}

/// Remove a temporary file after an earlier step already failed.
///
/// The removal is best effort: if it fails the hidden temporary file is left
/// behind and only a warning is logged, since the caller is already getting
/// the original error.
fn discard(tmp: NamedTempFile) {
    let path = tmp.path().to_path_buf();
    if let Err(e) = tmp.close() {
        tracing::warn!(path = %path.display(), error = %e, "failed to remove temporary file");
    }
}

/// Atomically replace `path` with whatever `write` produces.
///
/// `write` receives a buffered sink over a temporary file created next to
/// `path`. When it returns `Ok`, the data is flushed, synced and renamed over
/// `path`. On any failure the temporary file is removed and `path` is left
/// untouched.
///
/// If the parent directory of `path` does not exist it is created (one level
/// only) with [`directory_mode`]`(mode)`. On Unix the file is created with
/// `mode`, subject to the process umask.
///
/// ```no_run
/// use std::io::Write;
/// use toolshed_fs::save_file_with;
///
/// save_file_with("state/counter.txt", |w| writeln!(w, "{}", 42), 0o644)?;
/// # Ok::<(), toolshed_fs::FileError>(())
/// ```
pub fn save_file_with<P, F, E>(path: P, write: F, mode: u32) -> Result<()>
where
    P: AsRef<Path>,
    F: FnOnce(&mut dyn Write) -> std::result::Result<(), E>,
    E: Into<WriteSource>,
{
    let path = path.as_ref();
    let file_name = path
        .file_name()
        .ok_or_else(|| FileError::invalid_path(path))?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut prefix = OsStr::new(".").to_os_string();
    prefix.push(file_name);

    let mut tmp = match create_temp(dir, &prefix, mode) {
        Ok(tmp) => tmp,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            match create_dir(dir, directory_mode(mode)) {
                Ok(()) => {
                    tracing::debug!(dir = %dir.display(), "created missing directory");
                }
                // Someone else created it between our two attempts.
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {}
                Err(e) => return Err(FileError::directory_creation(dir, e)),
            }
            create_temp(dir, &prefix, mode).map_err(|e| FileError::temp_file(path, e))?
        }
        Err(e) => return Err(FileError::temp_file(path, e)),
    };

    let mut sink = BufWriter::new(tmp.as_file_mut());
    let written = match write(&mut sink as &mut dyn Write) {
        Ok(()) => sink.flush().map_err(|e| FileError::close(path, e)),
        Err(e) => Err(FileError::write(path, e)),
    };
    drop(sink);
    let finished = written.and_then(|()| {
        tmp.as_file()
            .sync_all()
            .map_err(|e| FileError::close(path, e))
    });
    if let Err(e) = finished {
        discard(tmp);
        return Err(e);
    }

    match tmp.persist(path) {
        Ok(_) => {
            tracing::debug!(path = %path.display(), "saved file");
            Ok(())
        }
        Err(tempfile::PersistError { error, file }) => {
            discard(file);
            Err(FileError::rename(path, error))
        }
    }
}

/// Atomically replace `path` with `data`.
pub fn save_file(path: impl AsRef<Path>, data: &[u8], mode: u32) -> Result<()> {
    save_file_with(path, |w| w.write_all(data), mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_directory_mode_adds_traverse_bits() {
        assert_eq!(directory_mode(0o644), 0o755);
        assert_eq!(directory_mode(0o600), 0o700);
        assert_eq!(directory_mode(0o640), 0o750);
        assert_eq!(directory_mode(0o200), 0o200);
    }

    #[test]
    fn test_save_file_writes_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("data.bin");
        save_file(&path, b"hello", 0o644).unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"hello");
        assert_eq!(entries(temp.path()), vec!["data.bin"]);
    }

    #[test]
    fn test_save_file_replaces_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("data.txt");
        fs::write(&path, "old content that is longer").unwrap();
        save_file(&path, b"new", 0o644).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_empty_path_is_invalid() {
        let err = save_file("", b"x", 0o644).unwrap_err();
        assert!(matches!(err, FileError::InvalidPath { .. }));
    }

    #[test]
    fn test_failing_writer_leaves_no_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.txt");
        let err = save_file_with(
            &path,
            |w| {
                w.write_all(b"partial")?;
                Err(io::Error::other("boom"))
            },
            0o644,
        )
        .unwrap_err();
        assert!(matches!(err, FileError::Write { .. }));
        assert!(!path.exists());
        assert!(entries(temp.path()).is_empty());
    }

    #[test]
    fn test_rename_failure_cleans_up() {
        let temp = TempDir::new().unwrap();
        // A non-empty directory cannot be replaced by a file.
        let path = temp.path().join("occupied");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), "x").unwrap();

        let err = save_file(&path, b"data", 0o644).unwrap_err();
        assert!(matches!(err, FileError::Rename { .. }));
        assert_eq!(entries(temp.path()), vec!["occupied"]);
        assert!(path.join("keep").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_mode_is_applied() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let path = temp.path().join("secret");
        save_file(&path, b"x", 0o600).unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
