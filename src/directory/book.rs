//! A single named address book.

use super::aggregate::AggregateCounts;
use crate::domain::ContactField;
use crate::error::{DirectoryError, DirectoryResult};
use crate::matching::{collate, MatchPolicy};
use crate::models::{Contact, ContactUpdate, NewContact, UpdateReport};
use serde::{Deserialize, Serialize};

/// An ordered collection of contacts under one name.
///
/// Contacts keep insertion order until one of the sort methods is called.
/// No two stored contacts share a first/last name pair (ignoring case); this
/// is checked by [`Directory::add`] only, not after updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DirectorySnapshot")]
pub struct Directory {
    name: String,
    contacts: Vec<Contact>,
}

/// Serialized form of a directory.
///
/// Records are read as raw input and loaded back through [`Contact::new`]
/// and [`Directory::add`].
#[derive(Debug, Deserialize)]
struct DirectorySnapshot {
    name: String,
    #[serde(default)]
    contacts: Vec<NewContact>,
}

impl TryFrom<DirectorySnapshot> for Directory {
    type Error = DirectoryError;

    fn try_from(snapshot: DirectorySnapshot) -> Result<Self, Self::Error> {
        let mut directory = Directory::new(snapshot.name);
        for fields in snapshot.contacts {
            directory.add(Contact::new(fields)?)?;
        }
        Ok(directory)
    }
}

impl Directory {
    /// Create an empty directory.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contacts: Vec::new(),
        }
    }

    /// Build a directory by adding each contact in order.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::DuplicateContact` on the first repeated name pair.
    pub fn from_contacts(
        name: impl Into<String>,
        contacts: impl IntoIterator<Item = Contact>,
    ) -> DirectoryResult<Self> {
        let mut directory = Self::new(name);
        for contact in contacts {
            directory.add(contact)?;
        }
        Ok(directory)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Stored contacts in their current order.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Contact> {
        self.contacts.iter()
    }

    /// Append a contact unless its first/last name pair is already present.
    pub fn add(&mut self, contact: Contact) -> DirectoryResult<()> {
        if self
            .find_by_name(contact.first_name(), contact.last_name())
            .is_some()
        {
            tracing::warn!(
                "Duplicate contact {} rejected in directory '{}'",
                contact.full_name(),
                self.name
            );
            return Err(DirectoryError::DuplicateContact {
                directory: self.name.clone(),
                first_name: contact.first_name().to_string(),
                last_name: contact.last_name().to_string(),
            });
        }

        tracing::info!("Added contact {} to directory '{}'", contact.full_name(), self.name);
        self.contacts.push(contact);
        Ok(())
    }

    /// First contact whose first name equals `first_name`, ignoring case.
    pub fn find_by_first_name(&self, first_name: &str) -> Option<&Contact> {
        self.position_by_first_name(first_name)
            .map(|index| &self.contacts[index])
    }

    /// Contact stored under the duplicate-detection key (first and last name,
    /// ignoring case).
    pub fn find_by_name(&self, first_name: &str, last_name: &str) -> Option<&Contact> {
        self.contacts.iter().find(|c| {
            MatchPolicy::IgnoreCase.matches(c.first_name(), first_name)
                && MatchPolicy::IgnoreCase.matches(c.last_name(), last_name)
        })
    }

    /// Apply `update` to the first contact whose first name matches.
    ///
    /// Field failures are returned inside the report; they do not make the
    /// call fail.
    pub fn update(&mut self, first_name: &str, update: &ContactUpdate) -> DirectoryResult<UpdateReport> {
        let index = self
            .position_by_first_name(first_name)
            .ok_or_else(|| self.not_found(first_name))?;

        let contact = &mut self.contacts[index];
        let report = contact.apply_update(update);

        for rejected in &report.rejected {
            tracing::warn!(
                "Skipped update of {} for {}: {}",
                rejected.field,
                contact.full_name(),
                rejected.reason
            );
        }
        tracing::info!(
            "Updated contact {} in directory '{}' ({} applied, {} rejected)",
            contact.full_name(),
            self.name,
            report.applied.len(),
            report.rejected.len()
        );

        Ok(report)
    }

    /// Remove and return the first contact whose first name matches.
    pub fn remove(&mut self, first_name: &str) -> DirectoryResult<Contact> {
        let index = self
            .position_by_first_name(first_name)
            .ok_or_else(|| self.not_found(first_name))?;

        let removed = self.contacts.remove(index);
        tracing::info!("Removed contact {} from directory '{}'", removed.full_name(), self.name);
        Ok(removed)
    }

    /// Stable sort by first name.
    pub fn sort_by_first_name(&mut self) {
        self.sort_by(ContactField::FirstName);
    }

    /// Stable sort by any field using dictionary-style collation.
    pub fn sort_by(&mut self, field: ContactField) {
        tracing::debug!("Sorting directory '{}' by {}", self.name, field);
        self.contacts
            .sort_by(|a, b| collate(a.get(field), b.get(field)));
    }

    pub fn search_by_city(&self, city: &str) -> Vec<&Contact> {
        self.filter(ContactField::City, city, MatchPolicy::IgnoreCase)
    }

    pub fn search_by_state(&self, state: &str) -> Vec<&Contact> {
        self.filter(ContactField::State, state, MatchPolicy::IgnoreCase)
    }

    pub fn count_by_city(&self, city: &str) -> usize {
        self.count(ContactField::City, city, MatchPolicy::IgnoreCase)
    }

    pub fn count_by_state(&self, state: &str) -> usize {
        self.count(ContactField::State, state, MatchPolicy::IgnoreCase)
    }

    /// Full names of contacts whose city or state equals the given value,
    /// compared case-sensitively.
    pub fn view_by_city_or_state(&self, city: &str, state: &str) -> Vec<String> {
        self.contacts
            .iter()
            .filter(|c| {
                MatchPolicy::CaseSensitive.matches(c.city(), city)
                    || MatchPolicy::CaseSensitive.matches(c.state(), state)
            })
            .map(Contact::full_name)
            .collect()
    }

    /// Counts per distinct stored city and state value.
    pub fn aggregate_counts(&self) -> AggregateCounts {
        AggregateCounts::from_contacts(&self.contacts)
    }

    fn filter(&self, field: ContactField, value: &str, policy: MatchPolicy) -> Vec<&Contact> {
        let matches: Vec<&Contact> = self
            .contacts
            .iter()
            .filter(|c| policy.matches(c.get(field), value))
            .collect();
        tracing::debug!(
            "Search {}={:?} in directory '{}' matched {} contact(s)",
            field,
            value,
            self.name,
            matches.len()
        );
        matches
    }

    fn count(&self, field: ContactField, value: &str, policy: MatchPolicy) -> usize {
        self.contacts
            .iter()
            .filter(|c| policy.matches(c.get(field), value))
            .count()
    }

    fn position_by_first_name(&self, first_name: &str) -> Option<usize> {
        self.contacts
            .iter()
            .position(|c| MatchPolicy::IgnoreCase.matches(c.first_name(), first_name))
    }

    fn not_found(&self, name: &str) -> DirectoryError {
        tracing::warn!("Contact '{}' not found in directory '{}'", name, self.name);
        DirectoryError::NotFound {
            directory: self.name.clone(),
            name: name.to_string(),
        }
    }
}

impl<'a> IntoIterator for &'a Directory {
    type Item = &'a Contact;
    type IntoIter = std::slice::Iter<'a, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.contacts.iter()
    }
}
