//! Integration tests for atomic saves.
//!
//! These exercise the writer through the public API only: directory creation,
//! failure cleanup and what concurrent readers and writers can observe.

use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use serial_test::serial;
use tempfile::TempDir;
use toolshed_fs::{load_json, save_file, save_file_with, save_json, FileError};

fn hidden_leftovers(dir: &Path) -> Vec<String> {
    fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| name.starts_with('.'))
        .collect()
}

#[test_log::test]
fn test_creates_single_missing_parent() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config").join("settings.json");

    save_json(&path, &vec!["a", "b"], true, 0o644).unwrap();

    assert!(temp.path().join("config").is_dir());
    let loaded: Vec<String> = load_json(&path).unwrap();
    assert_eq!(loaded, vec!["a", "b"]);
}

#[cfg(unix)]
#[test]
fn test_created_parent_is_traversable_by_readers() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("shared");
    save_file(dir.join("notes.txt"), b"x", 0o644).unwrap();

    let mode = fs::metadata(&dir).unwrap().permissions().mode() & 0o777;
    // umask may remove bits but never adds any
    assert_eq!(mode & !0o755, 0);
    assert_eq!(mode & 0o700, 0o700);
}

#[test]
fn test_two_missing_levels_fail() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("a").join("b").join("file.txt");

    let err = save_file(&path, b"data", 0o644).unwrap_err();

    assert!(matches!(err, FileError::DirectoryCreation { .. }));
    assert!(err.is_not_found());
    assert!(!temp.path().join("a").exists());
}

#[test_log::test]
fn test_failing_writer_keeps_previous_content() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("ledger.txt");
    fs::write(&path, "balance=10\n").unwrap();

    let result = save_file_with(
        &path,
        |w| {
            w.write_all(b"balance=")?;
            Err(io::Error::new(io::ErrorKind::Interrupted, "writer gave up"))
        },
        0o644,
    );

    match result {
        Err(FileError::Write { source, .. }) => {
            assert_eq!(source.to_string(), "writer gave up");
        }
        other => panic!("expected write error, got {:?}", other),
    }
    assert_eq!(fs::read_to_string(&path).unwrap(), "balance=10\n");
    assert!(hidden_leftovers(temp.path()).is_empty());
}

#[test]
#[serial]
fn test_relative_path_without_parent() {
    let temp = TempDir::new().unwrap();
    let previous = std::env::current_dir().unwrap();
    std::env::set_current_dir(temp.path()).unwrap();
    let result = save_file("plain.txt", b"here", 0o644);
    std::env::set_current_dir(previous).unwrap();

    result.unwrap();
    assert_eq!(fs::read(temp.path().join("plain.txt")).unwrap(), b"here");
}

#[test]
fn test_readers_never_see_partial_content() {
    const SIZE: usize = 64 * 1024;

    let temp = TempDir::new().unwrap();
    let path = temp.path().join("blob");
    save_file(&path, &vec![b'a'; SIZE], 0o644).unwrap();

    let done = Arc::new(AtomicBool::new(false));
    let reader = {
        let path = path.clone();
        let done = Arc::clone(&done);
        thread::spawn(move || {
            let mut reads = 0;
            loop {
                let finished = done.load(Ordering::SeqCst);
                let content = fs::read(&path).unwrap();
                assert_eq!(content.len(), SIZE);
                assert!(content.iter().all(|b| *b == content[0]));
                reads += 1;
                if finished {
                    return reads;
                }
            }
        })
    };

    for i in 0..50 {
        let fill = if i % 2 == 0 { b'b' } else { b'a' };
        save_file(&path, &vec![fill; SIZE], 0o644).unwrap();
    }
    done.store(true, Ordering::SeqCst);

    assert!(reader.join().unwrap() > 0);
    assert!(hidden_leftovers(temp.path()).is_empty());
}

#[test]
fn test_concurrent_writers_last_rename_wins() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("winner.txt");

    let writers: Vec<_> = (0..8)
        .map(|n| {
            let path = path.clone();
            thread::spawn(move || {
                let body = format!("writer-{n}");
                for _ in 0..20 {
                    save_file(&path, body.as_bytes(), 0o644).unwrap();
                }
            })
        })
        .collect();
    for writer in writers {
        writer.join().unwrap();
    }

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("writer-"));
    assert!(hidden_leftovers(temp.path()).is_empty());
}
