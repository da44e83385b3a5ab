//! Validation and lookup around the folder engine.
//!
//! [`ProjectGenerator::generate`] never returns an error: every failure is
//! folded into a [`GenerationReport`] so the caller decides how to present
//! it and which exit code to use.
//!
//! Checks run in this order, and the first failure wins:
//! 1. project name (skipped when scaffolding into the output directory)
//! 2. output directory exists
//! 3. structure lookup
//! 4. project directory is absent or empty
//! 5. directory creation

use crate::{
    engine::FolderEngine,
    error::{Error, Result},
    ioutils::{directory_exists, is_dir_empty},
    registry::StructureRegistry,
    structure::{FolderStructure, GenerationOptions, ProjectTarget},
    validation::{validate_project_name, validate_target_directory},
};
use std::path::PathBuf;

/// Outcome of a generation run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub success: bool,
    pub directories_created: Vec<PathBuf>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl GenerationReport {
    fn failed(mut self, err: Error) -> Self {
        log::warn!("{err}");
        self.success = false;
        self.errors.push(err.to_string());
        self
    }
}

pub struct ProjectGenerator<'a> {
    registry: &'a StructureRegistry,
    engine: FolderEngine,
}

impl<'a> ProjectGenerator<'a> {
    pub fn new(registry: &'a StructureRegistry) -> Self {
        Self { registry, engine: FolderEngine::new() }
    }

    /// Validates `options`, looks up the structure and creates its folders.
    pub fn generate(&self, options: &GenerationOptions) -> GenerationReport {
        let mut report = GenerationReport::default();

        let structure = match self.preflight(options, &mut report.warnings) {
            Ok(structure) => structure,
            Err(err) => return report.failed(err),
        };

        match self.engine.generate_folders(structure, options) {
            Ok(created) => {
                report.success = true;
                report.directories_created = created;
                report
            }
            Err(err) => report.failed(Error::GenerationFailed(Box::new(err))),
        }
    }

    /// Runs every check that must pass before the filesystem is touched.
    fn preflight(
        &self,
        options: &GenerationOptions,
        warnings: &mut Vec<String>,
    ) -> Result<&'a FolderStructure> {
        if let ProjectTarget::NewProject(name) = &options.target {
            log::debug!("Validating project name '{name}'");
            validate_project_name(name)?;
        }

        log::debug!("Validating output directory '{}'", options.output_path.display());
        validate_target_directory(&options.output_path)?;

        let structure = self
            .registry
            .get_by_framework_and_structure(&options.framework, &options.structure)
            .ok_or_else(|| Error::StructureNotFound {
                framework: options.framework.clone(),
                structure: options.structure.clone(),
            })?;
        log::debug!("Using structure '{}'", structure.id);

        let project_path = options.project_path();
        if directory_exists(&project_path) {
            let empty = is_dir_empty(&project_path)?;
            if options.target.is_current_directory() {
                if !empty {
                    warnings.push(format!(
                        "Directory {} is not empty; existing entries are kept",
                        project_path.display()
                    ));
                }
            } else if !empty {
                return Err(Error::DirectoryNotEmpty { path: project_path });
            } else {
                warnings.push(format!(
                    "Directory {} already exists and will be reused",
                    project_path.display()
                ));
            }
        }

        Ok(structure)
    }
}
