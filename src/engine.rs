use crate::{
    error::Result,
    ioutils::create_dir_all,
    structure::{FolderStructure, GenerationOptions},
};
use std::path::PathBuf;

/// Creates the directories of a [`FolderStructure`] on disk.
pub struct FolderEngine;

impl FolderEngine {
    pub fn new() -> Self {
        Self
    }

    /// Creates the project root (unless scaffolding into the output directory)
    /// followed by every catalog directory, in order.
    ///
    /// # Returns
    /// * `Vec<PathBuf>` - Every path that was created, project root first
    ///
    /// # Errors
    /// Stops at the first directory that cannot be created. Directories
    /// created before the failure are left in place.
    pub fn generate_folders(
        &self,
        structure: &FolderStructure,
        options: &GenerationOptions,
    ) -> Result<Vec<PathBuf>> {
        let project_path = options.project_path();
        let mut created = Vec::with_capacity(structure.directories.len() + 1);

        if !options.target.is_current_directory() {
            log::info!("Creating directory '{}'", project_path.display());
            create_dir_all(&project_path)?;
            created.push(project_path.clone());
        }

        for directory in &structure.directories {
            let full_path = project_path.join(directory);
            log::debug!("Creating directory '{}'", full_path.display());
            create_dir_all(&full_path)?;
            created.push(full_path);
        }

        log::info!(
            "Created {} directories for '{}' in '{}'",
            created.len(),
            structure.id,
            project_path.display()
        );
        Ok(created)
    }
}

impl Default for FolderEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::structure::ProjectTarget;
    use std::path::Path;

    fn structure(directories: &[&str]) -> FolderStructure {
        FolderStructure::new("react", "feature-based", "Test", "Test folder structure", directories)
            .with_id("test-structure")
    }

    fn options(target: ProjectTarget, output: &Path) -> GenerationOptions {
        GenerationOptions {
            target,
            framework: "react".into(),
            structure: "feature-based".into(),
            output_path: output.to_path_buf(),
        }
    }

    #[test]
    fn creates_root_then_directories_in_order() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("x");
        std::fs::create_dir(&out).unwrap();

        let created = FolderEngine::new()
            .generate_folders(
                &structure(&["src", "src/components"]),
                &options(ProjectTarget::NewProject("demo".into()), &out),
            )
            .unwrap();

        assert_eq!(
            created,
            vec![out.join("demo"), out.join("demo/src"), out.join("demo/src/components")]
        );
        assert!(created.iter().all(|p| p.is_dir()));
    }

    #[test]
    fn empty_structure_creates_only_the_root() {
        let tmp = tempfile::tempdir().unwrap();
        let created = FolderEngine::new()
            .generate_folders(
                &structure(&[]),
                &options(ProjectTarget::NewProject("demo".into()), tmp.path()),
            )
            .unwrap();
        assert_eq!(created, vec![tmp.path().join("demo")]);
    }

    #[test]
    fn current_directory_mode_skips_the_root() {
        let tmp = tempfile::tempdir().unwrap();
        let created = FolderEngine::new()
            .generate_folders(
                &structure(&["src", "tests"]),
                &options(ProjectTarget::CurrentDirectory, tmp.path()),
            )
            .unwrap();
        assert_eq!(created, vec![tmp.path().join("src"), tmp.path().join("tests")]);
    }

    #[test]
    fn creates_unlisted_intermediate_segments() {
        let tmp = tempfile::tempdir().unwrap();
        FolderEngine::new()
            .generate_folders(
                &structure(&["src/features/auth/models"]),
                &options(ProjectTarget::NewProject("demo".into()), tmp.path()),
            )
            .unwrap();
        assert!(tmp.path().join("demo/src/features/auth").is_dir());
        assert!(tmp.path().join("demo/src/features/auth/models").is_dir());
    }

    #[test]
    fn second_run_over_existing_tree_succeeds() {
        let tmp = tempfile::tempdir().unwrap();
        let engine = FolderEngine::new();
        let s = structure(&["src", "src/components"]);
        let o = options(ProjectTarget::NewProject("demo".into()), tmp.path());

        let first = engine.generate_folders(&s, &o).unwrap();
        let second = engine.generate_folders(&s, &o).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn aborts_on_first_failure() {
        let tmp = tempfile::tempdir().unwrap();
        let project = tmp.path().join("demo");
        std::fs::create_dir(&project).unwrap();
        std::fs::write(project.join("blocker"), "file in the way").unwrap();

        let err = FolderEngine::new()
            .generate_folders(
                &structure(&["src", "blocker/inner", "tests"]),
                &options(ProjectTarget::NewProject("demo".into()), tmp.path()),
            )
            .unwrap_err();

        assert!(matches!(err, Error::CreateDirectory { ref path, .. } if path == &project.join("blocker/inner")));
        assert!(project.join("src").is_dir());
        assert!(!project.join("tests").exists());
    }
}
