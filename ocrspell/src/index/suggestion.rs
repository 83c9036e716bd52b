//! Suggestion for a spelling correction.
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::cmp::Ordering;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// A dictionary word near a queried token
pub struct Suggestion {
    /// the dictionary word-form
    pub term: SmolStr,
    /// edit distance between the query and `term`
    pub distance: usize,
    /// frequency weight of `term`; higher is more common
    pub weight: u32,
    /// position of `term` in its dictionary list
    pub rank: usize,
}

impl Suggestion {
    /// Creates a suggestion.
    pub fn new(term: SmolStr, distance: usize, weight: u32, rank: usize) -> Suggestion {
        Suggestion {
            term,
            distance,
            weight,
            rank,
        }
    }

    /// gets the suggested word-form
    pub fn term(&self) -> &str {
        &self.term
    }
}

impl PartialOrd for Suggestion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Closer first, then more common, then earlier in the list.
impl Ord for Suggestion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| other.weight.cmp(&self.weight))
            .then_with(|| self.rank.cmp(&other.rank))
            .then_with(|| self.term.cmp(&other.term))
    }
}
