//! Contact model representing a person in an address book.

use crate::domain::{ContactField, ValidationError, ValidationErrors};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw, unvalidated input for a new contact.
///
/// This is what front-ends and persistence layers hand to [`Contact::new`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewContact {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    #[serde(alias = "phone")]
    pub phone_number: String,
    pub email: String,
}

impl NewContact {
    fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::FirstName => &self.first_name,
            ContactField::LastName => &self.last_name,
            ContactField::Address => &self.address,
            ContactField::City => &self.city,
            ContactField::State => &self.state,
            ContactField::Zip => &self.zip,
            ContactField::Phone => &self.phone_number,
            ContactField::Email => &self.email,
        }
    }
}

/// A validated contact.
///
/// Fields are private: the only ways in are [`Contact::new`] and the update
/// methods, all of which run the field's validator before writing, so a
/// `Contact` is never in an invalid state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "NewContact")]
pub struct Contact {
    first_name: String,
    last_name: String,
    address: String,
    city: String,
    state: String,
    zip: String,
    phone_number: String,
    email: String,
}

impl Contact {
    /// Validate every field and build a contact.
    ///
    /// # Errors
    ///
    /// Returns every field failure found, not only the first one.
    pub fn new(fields: NewContact) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        for field in ContactField::ALL {
            if let Err(e) = field.validate(fields.value(field)) {
                errors.push(e);
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Self {
            first_name: fields.first_name,
            last_name: fields.last_name,
            address: fields.address,
            city: fields.city,
            state: fields.state,
            zip: fields.zip,
            phone_number: fields.phone_number,
            email: fields.email,
        })
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn zip(&self) -> &str {
        &self.zip
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Get a field's current value by identifier.
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::FirstName => &self.first_name,
            ContactField::LastName => &self.last_name,
            ContactField::Address => &self.address,
            ContactField::City => &self.city,
            ContactField::State => &self.state,
            ContactField::Zip => &self.zip,
            ContactField::Phone => &self.phone_number,
            ContactField::Email => &self.email,
        }
    }

    /// "First Last".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Replace one field after validating the new value.
    ///
    /// On failure the stored value is left untouched.
    pub fn update_field(&mut self, field: ContactField, value: &str) -> Result<(), ValidationError> {
        let accepted = field.validate(value)?;
        *self.slot(field) = accepted;
        Ok(())
    }

    /// Apply a batch of field changes.
    ///
    /// Each change is validated on its own: a rejected field never blocks the
    /// others in the same batch.
    pub fn apply_update(&mut self, update: &ContactUpdate) -> UpdateReport {
        let mut report = UpdateReport::default();
        for entry in &update.entries {
            let outcome = match entry {
                Ok((field, value)) => self.update_field(*field, value).map(|()| *field),
                Err(unknown) => Err(unknown.clone()),
            };
            match outcome {
                Ok(field) => report.applied.push(field),
                Err(e) => report.rejected.push(e),
            }
        }
        report
    }

    /// One-line summary for presentation layers.
    pub fn display_line(&self) -> String {
        format!(
            "{} {} | {}, {}, {} {} | {} | {}",
            self.first_name,
            self.last_name,
            self.address,
            self.city,
            self.state,
            self.zip,
            self.phone_number,
            self.email
        )
    }

    fn slot(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::FirstName => &mut self.first_name,
            ContactField::LastName => &mut self.last_name,
            ContactField::Address => &mut self.address,
            ContactField::City => &mut self.city,
            ContactField::State => &mut self.state,
            ContactField::Zip => &mut self.zip,
            ContactField::Phone => &mut self.phone_number,
            ContactField::Email => &mut self.email,
        }
    }
}

impl TryFrom<NewContact> for Contact {
    type Error = ValidationErrors;

    fn try_from(fields: NewContact) -> Result<Self, Self::Error> {
        Contact::new(fields)
    }
}

impl From<Contact> for NewContact {
    fn from(contact: Contact) -> Self {
        Self {
            first_name: contact.first_name,
            last_name: contact.last_name,
            address: contact.address,
            city: contact.city,
            state: contact.state,
            zip: contact.zip,
            phone_number: contact.phone_number,
            email: contact.email,
        }
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_line())
    }
}

/// A batch of field changes to apply to one contact.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactUpdate {
    // unknown field names stay in place so rejections keep request order
    entries: Vec<Result<(ContactField, String), ValidationError>>,
}

impl ContactUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a change for `field`.
    pub fn set(mut self, field: ContactField, value: impl Into<String>) -> Self {
        self.entries.push(Ok((field, value.into())));
        self
    }

    /// Queue a change by field name.
    ///
    /// Unrecognised names are kept and reported as rejected when the update
    /// is applied, alongside any validation failures.
    pub fn parse(mut self, name: &str, value: impl Into<String>) -> Self {
        let entry = name
            .parse::<ContactField>()
            .map(|field| (field, value.into()));
        self.entries.push(entry);
        self
    }

    /// Recognised changes in request order.
    pub fn changes(&self) -> impl Iterator<Item = (ContactField, &str)> {
        self.entries
            .iter()
            .filter_map(|entry| entry.as_ref().ok())
            .map(|(field, value)| (*field, value.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Outcome of [`Contact::apply_update`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateReport {
    /// Fields that were written, in request order.
    pub applied: Vec<ContactField>,

    /// Changes that were skipped, with the reason, in request order.
    pub rejected: Vec<ValidationError>,
}

impl UpdateReport {
    /// True when every requested change was applied.
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }

    /// Failure reported for `field`, if that change was rejected.
    pub fn rejection_for(&self, field: &str) -> Option<&ValidationError> {
        self.rejected.iter().find(|e| e.field == field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mokshini() -> NewContact {
        NewContact {
            first_name: "Mokshini".to_string(),
            last_name: "Baglekar".to_string(),
            address: "12 Arera Colony".to_string(),
            city: "Bhopal".to_string(),
            state: "Madhya Pradesh".to_string(),
            zip: "400001".to_string(),
            phone_number: "9301000083".to_string(),
            email: "mokshini.baglekar@gmail.com".to_string(),
        }
    }

    #[test]
    fn test_new_contact_keeps_input() {
        let contact = Contact::new(mokshini()).unwrap();
        assert_eq!(contact.first_name(), "Mokshini");
        assert_eq!(contact.last_name(), "Baglekar");
        assert_eq!(contact.address(), "12 Arera Colony");
        assert_eq!(contact.city(), "Bhopal");
        assert_eq!(contact.state(), "Madhya Pradesh");
        assert_eq!(contact.zip(), "400001");
        assert_eq!(contact.phone_number(), "9301000083");
        assert_eq!(contact.email(), "mokshini.baglekar@gmail.com");
        assert_eq!(NewContact::from(contact), mokshini());
    }

    #[test]
    fn test_new_contact_reports_every_failure() {
        let fields = NewContact {
            first_name: "mokshini".to_string(),
            zip: "012345".to_string(),
            email: "bad-email".to_string(),
            ..mokshini()
        };

        let errors = Contact::new(fields).unwrap_err();
        let labels: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(labels, vec!["first_name", "zip", "email"]);
    }

    #[test]
    fn test_empty_input_fails_every_field() {
        let errors = Contact::new(NewContact::default()).unwrap_err();
        assert_eq!(errors.len(), ContactField::ALL.len());
    }

    #[test]
    fn test_update_field_rejects_and_keeps_value() {
        let mut contact = Contact::new(mokshini()).unwrap();

        let err = contact.update_field(ContactField::Phone, "12345").unwrap_err();
        assert_eq!(err.field, "phone");
        assert_eq!(contact.phone_number(), "9301000083");

        contact.update_field(ContactField::Phone, "7000000001").unwrap();
        assert_eq!(contact.phone_number(), "7000000001");
    }

    #[test]
    fn test_apply_update_isolates_failures() {
        let mut contact = Contact::new(mokshini()).unwrap();
        let update = ContactUpdate::new()
            .set(ContactField::City, "Mumbai")
            .set(ContactField::Email, "bad-email");

        let report = contact.apply_update(&update);

        assert_eq!(report.applied, vec![ContactField::City]);
        assert!(!report.is_clean());
        assert!(report.rejection_for("email").is_some());
        assert_eq!(contact.city(), "Mumbai");
        assert_eq!(contact.email(), "mokshini.baglekar@gmail.com");
    }

    #[test]
    fn test_apply_update_reports_unknown_field_names() {
        let mut contact = Contact::new(mokshini()).unwrap();
        let update = ContactUpdate::new()
            .parse("nickname", "Moksh")
            .parse("state", "Maharashtra");

        let report = contact.apply_update(&update);

        assert_eq!(report.applied, vec![ContactField::State]);
        assert_eq!(report.rejected.len(), 1);
        assert_eq!(report.rejected[0].field, "nickname");
        assert_eq!(contact.state(), "Maharashtra");
    }

    #[test]
    fn test_apply_update_rejections_keep_request_order() {
        let mut contact = Contact::new(mokshini()).unwrap();
        let update = ContactUpdate::new()
            .parse("zip", "012345")
            .parse("nickname", "Moksh")
            .parse("city", "Mumbai")
            .parse("email", "bad-email");

        let changes: Vec<ContactField> = update.changes().map(|(field, _)| field).collect();
        assert_eq!(
            changes,
            vec![ContactField::Zip, ContactField::City, ContactField::Email]
        );

        let report = contact.apply_update(&update);
        let rejected: Vec<&str> = report.rejected.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(rejected, vec!["zip", "nickname", "email"]);
        assert_eq!(report.applied, vec![ContactField::City]);
    }

    #[test]
    fn test_display_line() {
        let contact = Contact::new(mokshini()).unwrap();
        assert_eq!(
            contact.display_line(),
            "Mokshini Baglekar | 12 Arera Colony, Bhopal, Madhya Pradesh 400001 | 9301000083 | mokshini.baglekar@gmail.com"
        );
        assert_eq!(contact.to_string(), contact.display_line());
        assert_eq!(contact.full_name(), "Mokshini Baglekar");
    }

    #[test]
    fn test_contact_serialization() {
        let contact = Contact::new(mokshini()).unwrap();
        let json = serde_json::to_value(&contact).unwrap();
        assert_eq!(json["first_name"], "Mokshini");
        assert_eq!(json["phone_number"], "9301000083");

        let back: Contact = serde_json::from_value(json).unwrap();
        assert_eq!(back, contact);
    }

    #[test]
    fn test_contact_deserialization_validates() {
        let json = r#"{"first_name":"Mokshini","last_name":"Baglekar","address":"12 Arera Colony",
            "city":"Bhopal","state":"Madhya Pradesh","zip":"400001","phone":"9301000083",
            "email":"nope"}"#;
        let result: Result<Contact, _> = serde_json::from_str(json);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Invalid email"));
    }
}
