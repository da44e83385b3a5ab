use crate::{
    constants::project_name,
    error::{Error, Result},
    ioutils::directory_exists,
};
use regex::Regex;
use std::path::Path;

/// Checks a project name against the allowed pattern and length.
///
/// Names must start with a letter, contain only letters, digits, `-` and
/// `_`, and be at most 50 characters long.
pub fn validate_project_name(name: &str) -> Result<()> {
    let invalid = |reason: &str| Error::InvalidProjectName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    if name.is_empty() {
        return Err(invalid("Project name must be at least 1 character long"));
    }
    if name.chars().count() > project_name::MAX_LEN {
        return Err(invalid("Project name must be no more than 50 characters long"));
    }
    if !Regex::new(project_name::PATTERN)?.is_match(name) {
        return Err(invalid(project_name::PATTERN_MESSAGE));
    }
    Ok(())
}

/// The output path must already exist as a directory.
pub fn validate_target_directory(path: &Path) -> Result<()> {
    if directory_exists(path) {
        Ok(())
    } else {
        Err(Error::InvalidTargetDirectory { path: path.to_path_buf() })
    }
}

/// Checks one relative directory entry of a catalog structure.
pub fn validate_catalog_directory(directory: &str) -> Result<(), String> {
    if directory.is_empty() {
        return Err("directory entries must not be empty".into());
    }
    if directory.starts_with('/') || directory.ends_with('/') {
        return Err(format!("'{directory}' must not start or end with '/'"));
    }
    if directory.contains('\\') {
        return Err(format!("'{directory}' must use '/' as separator"));
    }
    if directory.split('/').any(|seg| seg.is_empty() || seg == "." || seg == "..") {
        return Err(format!("'{directory}' contains an empty, '.' or '..' segment"));
    }
    Ok(())
}
