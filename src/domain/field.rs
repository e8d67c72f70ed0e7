//! Contact field identifiers.

use super::errors::ValidationError;
use super::validators;
use std::fmt;
use std::str::FromStr;

/// One of the eight validated attributes of a contact.
///
/// Each variant maps to exactly one validator through [`ContactField::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContactField {
    FirstName,
    LastName,
    Address,
    City,
    State,
    Zip,
    Phone,
    Email,
}

impl ContactField {
    /// All fields in record order.
    pub const ALL: [ContactField; 8] = [
        ContactField::FirstName,
        ContactField::LastName,
        ContactField::Address,
        ContactField::City,
        ContactField::State,
        ContactField::Zip,
        ContactField::Phone,
        ContactField::Email,
    ];

    /// Label used in validation errors and serialized records.
    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Address => "address",
            Self::City => "city",
            Self::State => "state",
            Self::Zip => "zip",
            Self::Phone => "phone",
            Self::Email => "email",
        }
    }

    /// Run this field's validator over `value`.
    pub fn validate(self, value: &str) -> Result<String, ValidationError> {
        match self {
            Self::FirstName | Self::LastName => validators::validate_person_name(value, self.label()),
            Self::Address | Self::City | Self::State => {
                validators::validate_free_text(value, self.label())
            }
            Self::Zip => validators::validate_postal_code(value),
            Self::Phone => validators::validate_phone(value),
            Self::Email => validators::validate_email(value),
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ContactField {
    type Err = ValidationError;

    /// Accepts snake_case labels as well as the camelCase names used by
    /// front-ends (`firstName`, `phoneNumber`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first_name" | "firstName" => Ok(Self::FirstName),
            "last_name" | "lastName" => Ok(Self::LastName),
            "address" => Ok(Self::Address),
            "city" => Ok(Self::City),
            "state" => Ok(Self::State),
            "zip" => Ok(Self::Zip),
            "phone" | "phone_number" | "phoneNumber" => Ok(Self::Phone),
            "email" => Ok(Self::Email),
            other => Err(ValidationError::new(other, "unknown contact field")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field_names() {
        assert_eq!("firstName".parse::<ContactField>().unwrap(), ContactField::FirstName);
        assert_eq!("last_name".parse::<ContactField>().unwrap(), ContactField::LastName);
        assert_eq!("phoneNumber".parse::<ContactField>().unwrap(), ContactField::Phone);
        assert_eq!("zip".parse::<ContactField>().unwrap(), ContactField::Zip);
    }

    #[test]
    fn test_parse_unknown_field() {
        let err = "nickname".parse::<ContactField>().unwrap_err();
        assert_eq!(err.field, "nickname");
        assert_eq!(err.reason, "unknown contact field");
    }

    #[test]
    fn test_labels_round_trip_through_from_str() {
        for field in ContactField::ALL {
            assert_eq!(field.label().parse::<ContactField>().unwrap(), field);
        }
    }

    #[test]
    fn test_dispatch_uses_field_rule() {
        assert!(ContactField::City.validate("Pune").is_ok());
        assert!(ContactField::FirstName.validate("Pune").is_ok());
        assert!(ContactField::Zip.validate("Pune").is_err());

        let err = ContactField::LastName.validate("x").unwrap_err();
        assert_eq!(err.field, "last_name");
        let err = ContactField::State.validate("MP").unwrap_err();
        assert_eq!(err.field, "state");
    }
}
