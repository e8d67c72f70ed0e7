//! Data models for address book entities.
//!
//! This module contains the validated contact record together with the raw
//! input and update types used to create and change it.

pub mod contact;

pub use contact::{Contact, ContactUpdate, NewContact, UpdateReport};
