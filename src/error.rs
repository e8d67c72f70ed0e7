//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field-level validation failures live in [`crate::domain::errors`].

use crate::domain::ValidationErrors;
use thiserror::Error;

/// Errors reported by operations on a single directory.
///
/// None of these are fatal; the directory is left unchanged when one is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// A contact with the same first and last name (ignoring case) is already stored
    #[error("Contact {first_name} {last_name} already exists in '{directory}'")]
    DuplicateContact {
        directory: String,
        first_name: String,
        last_name: String,
    },

    /// No contact matched the lookup key
    #[error("Contact '{name}' not found in '{directory}'")]
    NotFound { directory: String, name: String },

    /// A record failed validation while being loaded into the directory
    #[error("Invalid contact: {0}")]
    Invalid(#[from] ValidationErrors),
}

/// Errors reported by the directory registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A directory with this name is already registered
    #[error("Directory '{0}' already exists")]
    AlreadyExists(String),

    /// No directory is registered under this name
    #[error("Directory '{0}' not found")]
    NotFound(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with DirectoryError
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Convenience type alias for Results with RegistryError
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
