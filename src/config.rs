//! User catalog files that extend the built-in structures.

use crate::{
    constants::CATALOG_FILENAMES,
    error::{Error, Result},
    ioutils::read_to_string,
    registry::StructureRegistry,
    structure::FolderStructure,
    validation::validate_catalog_directory,
};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// One structure as written in a catalog file.
#[derive(Debug, Deserialize)]
pub struct CatalogEntry {
    /// Defaults to `<framework>-<structure>`.
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub framework: String,
    pub structure: String,
    #[serde(default)]
    pub directories: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct CatalogV1 {
    #[serde(default)]
    pub structures: Vec<CatalogEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "schemaVersion")]
pub enum CatalogFile {
    #[serde(rename = "v1")]
    V1(CatalogV1),
}

enum Format {
    Json,
    Yaml,
}

impl CatalogFile {
    /// Loads a catalog from a file, or from the first known catalog file
    /// inside a directory.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let (file, format) = if path.is_dir() { Self::find_in(path)? } else { Self::detect(path)? };

        log::debug!("Loading catalog from '{}'", file.display());
        let content = read_to_string(&file)?;
        let catalog = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Yaml => serde_yaml::from_str(&content)?,
        };
        Ok(catalog)
    }

    fn find_in(dir: &Path) -> Result<(PathBuf, Format)> {
        for file_name in CATALOG_FILENAMES {
            let candidate = dir.join(file_name);
            if candidate.is_file() {
                return Self::detect(&candidate);
            }
        }
        Err(Error::CatalogNotFound {
            dir: dir.display().to_string(),
            catalog_files: CATALOG_FILENAMES.join(", "),
        })
    }

    fn detect(file: &Path) -> Result<(PathBuf, Format)> {
        let format = match file.extension().and_then(|e| e.to_str()) {
            Some("json") => Format::Json,
            Some("yaml") | Some("yml") => Format::Yaml,
            _ => {
                return Err(Error::UnsupportedCatalogFormat { path: file.display().to_string() })
            }
        };
        Ok((file.to_path_buf(), format))
    }

    /// Validates every entry and converts them into registry structures.
    pub fn into_structures(self) -> Result<Vec<FolderStructure>> {
        let CatalogFile::V1(catalog) = self;
        catalog.structures.into_iter().map(CatalogEntry::into_structure).collect()
    }
}

impl CatalogEntry {
    fn into_structure(self) -> Result<FolderStructure> {
        for (field, value) in [
            ("name", &self.name),
            ("framework", &self.framework),
            ("structure", &self.structure),
        ] {
            if value.trim().is_empty() {
                return Err(Error::CatalogValidation(format!("{field} must not be empty")));
            }
        }

        let id = self.id.unwrap_or_else(|| format!("{}-{}", self.framework, self.structure));
        for directory in &self.directories {
            validate_catalog_directory(directory)
                .map_err(|e| Error::CatalogValidation(format!("structure '{id}': {e}")))?;
        }

        Ok(FolderStructure {
            id,
            name: self.name,
            description: self.description,
            framework: self.framework,
            structure: self.structure,
            directories: self.directories,
        })
    }
}

/// Builds the registry used by the CLI: the built-in catalog, then the
/// entries of `catalog` if given.
pub fn load_registry(catalog: Option<&Path>) -> Result<StructureRegistry> {
    let mut registry = StructureRegistry::with_builtin_catalog();
    if let Some(path) = catalog {
        let structures = CatalogFile::load(path)?.into_structures()?;
        log::info!("Registering {} structures from '{}'", structures.len(), path.display());
        for structure in structures {
            ensure_pair_is_free(&registry, &structure)?;
            registry.register(structure);
        }
    }
    Ok(registry)
}

/// A catalog entry may replace a structure by id, but not claim another
/// entry's framework/structure pair under a new id.
fn ensure_pair_is_free(registry: &StructureRegistry, structure: &FolderStructure) -> Result<()> {
    match registry.get_by_framework_and_structure(&structure.framework, &structure.structure) {
        Some(existing) if existing.id != structure.id => Err(Error::CatalogValidation(format!(
            "structure '{}': pair {}/{} is already registered as '{}'",
            structure.id, structure.framework, structure.structure, existing.id
        ))),
        _ => Ok(()),
    }
}
