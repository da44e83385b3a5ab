use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A named folder layout for one framework.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderStructure {
    /// Unique key, `<framework>-<structure>` by convention.
    pub id: String,
    pub name: String,
    pub description: String,
    pub framework: String,
    pub structure: String,
    /// Relative, `/`-separated directory paths in display order.
    pub directories: Vec<String>,
}

impl FolderStructure {
    /// Builds a structure with the conventional `<framework>-<structure>` id.
    pub fn new(
        framework: &str,
        structure: &str,
        name: &str,
        description: &str,
        directories: &[&str],
    ) -> Self {
        Self {
            id: format!("{framework}-{structure}"),
            name: name.to_string(),
            description: description.to_string(),
            framework: framework.to_string(),
            structure: structure.to_string(),
            directories: directories.iter().map(|d| d.to_string()).collect(),
        }
    }

    /// Overrides the id for entries that break the naming convention.
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }
}

/// Where the scaffold lands relative to the output path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectTarget {
    /// Create `<output>/<name>` and scaffold inside it.
    NewProject(String),
    /// Scaffold directly into the output path.
    CurrentDirectory,
}

impl ProjectTarget {
    /// Maps the command-line project name to a target, `.` meaning the output directory.
    pub fn from_arg(name: &str) -> Self {
        if name == crate::constants::CURRENT_DIRECTORY_ARG {
            ProjectTarget::CurrentDirectory
        } else {
            ProjectTarget::NewProject(name.to_string())
        }
    }

    pub fn is_current_directory(&self) -> bool {
        matches!(self, ProjectTarget::CurrentDirectory)
    }

    /// Computes the project root under `output_path`.
    pub fn project_path(&self, output_path: &Path) -> PathBuf {
        match self {
            ProjectTarget::NewProject(name) => output_path.join(name),
            ProjectTarget::CurrentDirectory => output_path.to_path_buf(),
        }
    }
}

impl std::fmt::Display for ProjectTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectTarget::NewProject(name) => write!(f, "{name}"),
            ProjectTarget::CurrentDirectory => write!(f, "(current directory)"),
        }
    }
}

/// Per-invocation inputs for a generation run.
#[derive(Debug, Clone)]
pub struct GenerationOptions {
    pub target: ProjectTarget,
    pub framework: String,
    pub structure: String,
    pub output_path: PathBuf,
}

impl GenerationOptions {
    pub fn project_path(&self) -> PathBuf {
        self.target.project_path(&self.output_path)
    }
}
