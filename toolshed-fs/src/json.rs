//! JSON persistence on top of the atomic writer.

use crate::atomic::save_file_with;
use crate::error::{FileError, Result, WriteSource};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

/// Atomically replace `path` with the JSON encoding of `value`.
///
/// The encoding is streamed into the temporary file and terminated with a
/// newline. `pretty` indents nested values by two spaces.
///
/// ```no_run
/// use std::collections::BTreeMap;
/// use toolshed_fs::{load_json, save_json};
///
/// let mut versions = BTreeMap::new();
/// versions.insert("api", "v1.10.3");
/// save_json("versions.json", &versions, true, 0o644)?;
///
/// let loaded: BTreeMap<String, String> = load_json("versions.json")?;
/// assert_eq!(loaded["api"], "v1.10.3");
/// # Ok::<(), toolshed_fs::FileError>(())
/// ```
pub fn save_json<T>(path: impl AsRef<Path>, value: &T, pretty: bool, mode: u32) -> Result<()>
where
    T: Serialize + ?Sized,
{
    save_file_with(
        path,
        |w| -> std::result::Result<(), WriteSource> {
            if pretty {
                serde_json::to_writer_pretty(&mut *w, value)?;
            } else {
                serde_json::to_writer(&mut *w, value)?;
            }
            w.write_all(b"\n")?;
            Ok(())
        },
        mode,
    )
}

/// Decode the JSON document stored at `path`.
pub fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| FileError::open(path, e))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| FileError::json(path, e))
}
