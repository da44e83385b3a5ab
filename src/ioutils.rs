use std::path::Path;

use crate::error::{Error, Result};

/// Creates `dest_path` and any missing parents. Succeeds if it already exists.
pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    std::fs::create_dir_all(dest_path)
        .map_err(|source| Error::CreateDirectory { path: dest_path.to_path_buf(), source })
}

/// Returns true when `path` exists and is a directory.
pub fn directory_exists<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().is_dir()
}

/// Returns true when the directory at `path` has no entries.
pub fn is_dir_empty<P: AsRef<Path>>(path: P) -> Result<bool> {
    let mut entries = std::fs::read_dir(path.as_ref())?;
    Ok(entries.next().is_none())
}

pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
    std::fs::read_to_string(path.as_ref()).map_err(Error::IoError)
}
