//! Domain field rules.
//!
//! This module contains the contact field identifiers, the pure validators
//! that decide whether a raw value is acceptable for a field, and the errors
//! they report. Nothing here depends on the rest of the crate.

pub mod errors;
pub mod field;
pub mod validators;

pub use errors::{ValidationError, ValidationErrors};
pub use field::ContactField;
pub use validators::{
    validate_email, validate_free_text, validate_person_name, validate_phone, validate_postal_code,
};
