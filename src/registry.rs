//! Registry of named directories.
//!
//! The registry is an ordinary owned value: whoever runs the program creates
//! one (empty) and passes it to the code that needs it.

use crate::directory::Directory;
use crate::error::{RegistryError, RegistryResult};
use std::collections::BTreeMap;

/// Mapping from directory name to [`Directory`].
///
/// Names are compared exactly (case-sensitive).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryRegistry {
    directories: BTreeMap<String, Directory>,
}

impl DirectoryRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty directory under `name`.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::AlreadyExists` if the name is taken; the
    /// existing directory is left as it was.
    pub fn create(&mut self, name: &str) -> RegistryResult<&mut Directory> {
        if self.directories.contains_key(name) {
            tracing::warn!("Directory '{}' already exists", name);
            return Err(RegistryError::AlreadyExists(name.to_string()));
        }

        tracing::info!("Created directory '{}'", name);
        Ok(self
            .directories
            .entry(name.to_string())
            .or_insert_with(|| Directory::new(name)))
    }

    pub fn get(&self, name: &str) -> Option<&Directory> {
        self.directories.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Directory> {
        self.directories.get_mut(name)
    }

    /// Drop a directory and return it.
    pub fn remove(&mut self, name: &str) -> RegistryResult<Directory> {
        match self.directories.remove(name) {
            Some(directory) => {
                tracing::info!("Removed directory '{}'", name);
                Ok(directory)
            }
            None => Err(RegistryError::NotFound(name.to_string())),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.directories.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        self.directories.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.directories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directories.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Directory> {
        self.directories.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_starts_empty() {
        let registry = DirectoryRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.get("Personal").is_none());
    }

    #[test]
    fn test_create_and_get() {
        let mut registry = DirectoryRegistry::new();
        let directory = registry.create("Personal").unwrap();
        assert_eq!(directory.name(), "Personal");
        assert!(directory.is_empty());

        assert!(registry.contains("Personal"));
        assert_eq!(registry.get("Personal").unwrap().name(), "Personal");
    }

    #[test]
    fn test_create_existing_is_reported_noop() {
        let mut registry = DirectoryRegistry::new();
        registry.create("Personal").unwrap();

        let err = registry.create("Personal").unwrap_err();
        assert_eq!(err, RegistryError::AlreadyExists("Personal".to_string()));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let mut registry = DirectoryRegistry::new();
        registry.create("Work").unwrap();
        registry.create("work").unwrap();

        assert_eq!(registry.names(), vec!["Work", "work"]);
        assert!(registry.get("WORK").is_none());
    }

    #[test]
    fn test_remove() {
        let mut registry = DirectoryRegistry::new();
        registry.create("Personal").unwrap();

        let removed = registry.remove("Personal").unwrap();
        assert_eq!(removed.name(), "Personal");
        assert!(registry.is_empty());
        assert_eq!(
            registry.remove("Personal").unwrap_err(),
            RegistryError::NotFound("Personal".to_string())
        );
    }
}
