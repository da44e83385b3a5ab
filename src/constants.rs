//! Constants used throughout skaflo

/// Catalog file names looked up inside a `--catalog` directory, in order of preference
pub const CATALOG_FILENAMES: &[&str] = &["skaflo.json", "skaflo.yaml", "skaflo.yml"];

/// Project name used on the command line to scaffold into the output directory itself
pub const CURRENT_DIRECTORY_ARG: &str = ".";

/// Project name rules
pub mod project_name {
    pub const PATTERN: &str = r"^[a-zA-Z][a-zA-Z0-9_-]*$";
    pub const MAX_LEN: usize = 50;
    pub const PATTERN_MESSAGE: &str = "Project name must start with a letter and contain only letters, numbers, hyphens, and underscores";
}

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
