//! Whole-file text reads and in-place overwrites.
//!
//! Files are read completely before any mutation and, when rewritten, are
//! truncated and written at their original path. There is no temp-file
//! rename: the file keeps its inode, permissions, and ownership, at the cost
//! of losing content if the process dies between truncate and write.
//!
//! Every `File` handle is owned by the function that opens it and is closed
//! on drop, including on the error paths.

use crate::error::{KeepOursError, Result};
use std::fs::{File, OpenOptions};
use std::io::{Read, Write};
use std::path::Path;

/// Read a file fully and decode it as UTF-8.
///
/// # Returns
///
/// * `Ok(String)` - The decoded file content
/// * `Err(KeepOursError::FileAccess)` - The file could not be opened or read
/// * `Err(KeepOursError::Decode)` - The bytes are not valid UTF-8
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();

    let mut file = File::open(path).map_err(|e| file_access(path, e))?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .map_err(|e| file_access(path, e))?;

    String::from_utf8(bytes).map_err(|e| KeepOursError::Decode {
        path: path.to_path_buf(),
        source: e.utf8_error(),
    })
}

/// Overwrite an existing file with `content`, in place.
///
/// The file must already exist; this never creates files. Content is synced
/// to disk before returning.
pub fn overwrite<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();

    let mut file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(|e| file_access(path, e))?;

    file.write_all(content.as_bytes())
        .map_err(|e| file_access(path, e))?;

    file.sync_all().map_err(|e| file_access(path, e))?;

    Ok(())
}

fn file_access(path: &Path, source: std::io::Error) -> KeepOursError {
    KeepOursError::FileAccess {
        path: path.to_path_buf(),
        source,
    }
}
