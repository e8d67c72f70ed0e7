//! Text matching and ordering rules for directory queries.
//!
//! Queries over the same field do not all compare the same way, so the
//! policy is chosen explicitly per operation.

pub mod text_match;

pub use text_match::{collate, MatchPolicy};
