//! Filesystem utilities.

use std::fs;
use std::io;
use std::path::Path;

/// Create a directory and its parents.
///
/// Returns `Ok(true)` if this call created the directory and `Ok(false)` if
/// it was already there. The leaf is created with a single `mkdir`, so of
/// several concurrent callers exactly one sees `true`. A non-directory in
/// the way is an error.
pub fn create_dir_all_new(path: &Path) -> io::Result<bool> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    match fs::create_dir(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists && path.is_dir() => Ok(false),
        Err(e) => Err(e),
    }
}

/// Remove a directory and all its contents, if it exists.
pub fn remove_dir_all_if_exists(path: &Path) -> io::Result<()> {
    match fs::remove_dir_all(path) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        other => other,
    }
}
