//! Per-city and per-state contact counts.

use crate::models::Contact;
use serde::Serialize;
use std::collections::BTreeMap;

/// Contact counts grouped by the literal stored city and state values.
///
/// Keys are not case-folded: "Bhopal" and "bhopal" are counted separately.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AggregateCounts {
    pub by_city: BTreeMap<String, usize>,
    pub by_state: BTreeMap<String, usize>,
}

impl AggregateCounts {
    /// Tally the given contacts.
    pub fn from_contacts<'a>(contacts: impl IntoIterator<Item = &'a Contact>) -> Self {
        let mut counts = Self::default();
        for contact in contacts {
            *counts.by_city.entry(contact.city().to_string()).or_insert(0) += 1;
            *counts.by_state.entry(contact.state().to_string()).or_insert(0) += 1;
        }
        counts
    }

    /// Count for an exact city key.
    pub fn city(&self, city: &str) -> usize {
        self.by_city.get(city).copied().unwrap_or(0)
    }

    /// Count for an exact state key.
    pub fn state(&self, state: &str) -> usize {
        self.by_state.get(state).copied().unwrap_or(0)
    }
}
