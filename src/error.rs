use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse JSON catalog. Original error: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("Failed to parse YAML catalog. Original error: {0}")]
    YamlParseError(#[from] serde_yaml::Error),

    #[error("Prompt failed. Original error: {0}")]
    PromptError(#[from] dialoguer::Error),

    #[error("Invalid pattern. Original error: {0}")]
    RegexError(#[from] regex::Error),

    /// The project name failed the allowed-characters/length rules.
    #[error("Invalid project name: {name}. {reason}")]
    InvalidProjectName { name: String, reason: String },

    /// The output directory is missing or is not a directory.
    #[error("Invalid target directory: {}", .path.display())]
    InvalidTargetDirectory { path: PathBuf },

    #[error("Structure not found for framework: {framework}, structure: {structure}")]
    StructureNotFound { framework: String, structure: String },

    #[error("Directory {} already exists and is not empty", .path.display())]
    DirectoryNotEmpty { path: PathBuf },

    /// A single directory could not be created; generation stops here.
    #[error("Failed to create directory {}: {source}", .path.display())]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Wraps whatever stopped the engine part-way through.
    #[error("Generation failed: {0}")]
    GenerationFailed(Box<Error>),

    #[error("No catalog file found in '{dir}'. Tried: {catalog_files}.")]
    CatalogNotFound { dir: String, catalog_files: String },

    #[error("Unsupported catalog file '{path}'. Expected a .json, .yaml or .yml file.")]
    UnsupportedCatalogFormat { path: String },

    #[error("Catalog validation error: {0}.")]
    CatalogValidation(String),

    #[error("Missing required value: {0}. Pass it on the command line or drop --non-interactive.")]
    MissingArgument(&'static str),
}

/// Convenience type alias for Results with skaflo's Error as the error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
