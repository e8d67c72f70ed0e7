//! Test fixtures and sample data for integration tests.
//!
//! This module provides reusable contact inputs and pre-filled directories.

use address_book::{Contact, Directory, NewContact};

/// The first reference contact (Bhopal, Madhya Pradesh).
pub fn mokshini_fields() -> NewContact {
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

/// The second reference contact (Indore, Madhya Pradesh).
pub fn bhavesh_fields() -> NewContact {
    NewContact {
        first_name: "Bhavesh".to_string(),
        last_name: "Malviya".to_string(),
        address: "45 Vijay Nagar".to_string(),
        city: "Indore".to_string(),
        state: "Madhya Pradesh".to_string(),
        zip: "110001".to_string(),
        phone_number: "7690000686".to_string(),
        email: "bhavesh.malviya@gmail.com".to_string(),
    }
}

/// A valid contact with the given name and location.
#[allow(dead_code)]
pub fn sample_contact(first_name: &str, last_name: &str, city: &str, state: &str) -> Contact {
    Contact::new(NewContact {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        email: format!("{}.{}@example.com", first_name, last_name).to_lowercase(),
        ..mokshini_fields()
    })
    .expect("fixture contact should be valid")
}

/// Directory "Personal" holding the two reference contacts.
#[allow(dead_code)]
pub fn personal_directory() -> Directory {
    let mut directory = Directory::new("Personal");
    directory
        .add(Contact::new(mokshini_fields()).expect("valid fixture"))
        .expect("no duplicate");
    directory
        .add(Contact::new(bhavesh_fields()).expect("valid fixture"))
        .expect("no duplicate");
    directory
}
