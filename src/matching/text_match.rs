//! Exact-match policies and the collation used for sorting.

use std::cmp::Ordering;

/// How a stored field value is compared against a query value.
///
/// Both policies are whole-value comparisons; neither does substring or
/// fuzzy matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPolicy {
    /// Byte-for-byte equality.
    CaseSensitive,

    /// Equality after Unicode lowercasing of both sides.
    IgnoreCase,
}

impl MatchPolicy {
    /// Check whether `stored` matches `query` under this policy.
    pub fn matches(self, stored: &str, query: &str) -> bool {
        match self {
            Self::CaseSensitive => stored == query,
            Self::IgnoreCase => stored.to_lowercase() == query.to_lowercase(),
        }
    }
}

/// Dictionary-style ordering for display names.
///
/// Values compare case-insensitively first; values that differ only in case
/// put the lowercase form first. Anything still tied falls back to code
/// point order, so only identical strings compare `Equal` and the result is
/// a total order.
pub fn collate(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| a.chars().map(case_rank).cmp(b.chars().map(case_rank)))
        .then_with(|| a.cmp(b))
}

fn case_rank(c: char) -> u8 {
    if c.is_uppercase() {
        1
    } else {
        0
    }
}
