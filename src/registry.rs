//! In-memory table of folder structures.
//!
//! Entries are keyed by id and kept in registration order. Two derived
//! indexes, by framework and by `(framework, structure)`, are rebuilt on
//! every write; writes only happen at startup, so lookups stay cheap.

use crate::{catalog, structure::FolderStructure};
use indexmap::IndexMap;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct StructureRegistry {
    structures: IndexMap<String, FolderStructure>,
    by_framework: IndexMap<String, Vec<String>>,
    by_pair: HashMap<(String, String), String>,
}

impl StructureRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the built-in catalog.
    pub fn with_builtin_catalog() -> Self {
        let mut registry = Self::new();
        for structure in catalog::builtin() {
            registry.register(structure);
        }
        registry
    }

    /// Inserts `structure`, replacing any entry with the same id.
    pub fn register(&mut self, structure: FolderStructure) {
        if self.structures.contains_key(&structure.id) {
            log::debug!("Overwriting structure '{}'", structure.id);
        }
        self.structures.insert(structure.id.clone(), structure);
        self.rebuild_indexes();
    }

    pub fn get_by_id(&self, id: &str) -> Option<&FolderStructure> {
        self.structures.get(id)
    }

    /// Returns the first registered entry with this exact pair.
    pub fn get_by_framework_and_structure(
        &self,
        framework: &str,
        structure: &str,
    ) -> Option<&FolderStructure> {
        self.by_pair
            .get(&(framework.to_string(), structure.to_string()))
            .and_then(|id| self.structures.get(id))
    }

    /// All entries for `framework`, in registration order.
    pub fn get_all_for_framework(&self, framework: &str) -> Vec<&FolderStructure> {
        self.by_framework
            .get(framework)
            .map(|ids| ids.iter().filter_map(|id| self.structures.get(id)).collect())
            .unwrap_or_default()
    }

    /// Distinct framework names, in order of first registration.
    pub fn list_frameworks(&self) -> Vec<&str> {
        self.by_framework.keys().map(String::as_str).collect()
    }

    /// Distinct structure names available for `framework`.
    pub fn list_structure_names(&self, framework: &str) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for s in self.get_all_for_framework(framework) {
            if !names.contains(&s.structure.as_str()) {
                names.push(s.structure.as_str());
            }
        }
        names
    }

    pub fn get_all(&self) -> Vec<&FolderStructure> {
        self.structures.values().collect()
    }

    pub fn len(&self) -> usize {
        self.structures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.structures.is_empty()
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.structures.clear();
        self.rebuild_indexes();
    }

    fn rebuild_indexes(&mut self) {
        self.by_framework.clear();
        self.by_pair.clear();
        for (id, s) in &self.structures {
            self.by_framework.entry(s.framework.clone()).or_default().push(id.clone());
            self.by_pair
                .entry((s.framework.clone(), s.structure.clone()))
                .or_insert_with(|| id.clone());
        }
    }
}
