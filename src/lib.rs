//! Address Book - an in-memory, multi-book contact directory.
//!
//! Contacts are validated field by field on the way in and kept in named
//! directories that support duplicate detection, sorting, lookups and
//! per-city/per-state aggregation.
//!
//! # Architecture
//!
//! - **domain**: Field identifiers, pure field validators and validation errors
//! - **models**: The validated `Contact` record and its input/update types
//! - **matching**: Case policies for exact matching and the sort collation
//! - **directory**: A single named address book and its queries
//! - **registry**: Mapping from directory name to directory
//! - **error**: Error types for directory, registry and configuration failures
//! - **config**: Configuration management from environment variables

pub mod config;
pub mod directory;
pub mod domain;
pub mod error;
pub mod matching;
pub mod models;
pub mod registry;

// Re-export commonly used types
pub use config::Config;
pub use directory::{AggregateCounts, Directory};
pub use domain::{ContactField, ValidationError, ValidationErrors};
pub use error::{ConfigError, DirectoryError, RegistryError};
pub use matching::MatchPolicy;
pub use models::{Contact, ContactUpdate, NewContact, UpdateReport};
pub use registry::DirectoryRegistry;
