//! Resolving user supplied paths that may contain glob patterns.

use crate::error::{FileError, Result};
use std::fs;
use std::path::{Component, Path, PathBuf};

const GLOB_META: &[char] = &['*', '?', '['];

/// Lexically normalize `path`: drop `.` components and fold `dir/..` pairs.
///
/// The filesystem is not consulted, so symlinks are not resolved. An empty
/// result becomes `.`.
pub fn clean_path(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                // `/..` is `/`
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            _ => parts.push(component),
        }
    }
    if parts.is_empty() {
        PathBuf::from(".")
    } else {
        parts.iter().collect()
    }
}

fn starts_with_dot(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| name.to_string_lossy().starts_with('.'))
}

/// Resolve `path` to the existing paths it names.
///
/// An existing path resolves to itself. A missing path without glob
/// characters (`*`, `?`, `[`) is [`FileError::NotFound`]. Otherwise the
/// pattern is expanded; matches whose name starts with a dot are skipped
/// unless the pattern's own last component starts with a dot.
pub fn resolve_path(path: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let path = clean_path(path.as_ref());
    if fs::metadata(&path).is_ok() {
        return Ok(vec![path]);
    }

    let pattern = path.to_string_lossy();
    if !pattern.contains(GLOB_META) {
        return Err(FileError::not_found(path));
    }

    let matches = glob::glob(&pattern).map_err(|source| FileError::Pattern {
        pattern: pattern.to_string(),
        source,
    })?;
    let skip_hidden = !starts_with_dot(&path);

    let mut resolved = Vec::new();
    for entry in matches {
        let candidate = match entry {
            Ok(candidate) => candidate,
            Err(e) => {
                tracing::trace!(error = %e, "skipping unreadable glob entry");
                continue;
            }
        };
        if skip_hidden && starts_with_dot(&candidate) {
            continue;
        }
        if fs::metadata(&candidate).is_ok() {
            resolved.push(candidate);
        }
    }
    tracing::trace!(%pattern, count = resolved.len(), "resolved glob pattern");
    Ok(resolved)
}

/// Like [`resolve_path`], keeping only regular files.
pub fn resolve_files(path: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let files = resolve_path(path)?
        .into_iter()
        .filter(|p| fs::metadata(p).is_ok_and(|m| m.is_file()))
        .collect();
    Ok(files)
}
