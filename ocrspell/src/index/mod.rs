//! Approximate dictionary lookup.
//!
//! [`FuzzyIndex`] is the only contract the corrector relies on; the
//! deletion-based [`SymSpellIndex`] is the implementation the
//! [`IndexCache`] builds.
use crate::language::Language;

mod cache;
mod suggestion;
mod symspell;

pub use self::cache::IndexCache;
pub use self::suggestion::Suggestion;
pub use self::symspell::SymSpellIndex;

/// Finds dictionary words within a bounded edit distance of a query.
pub trait FuzzyIndex: Send + Sync {
    /// Language of the indexed dictionary.
    fn language(&self) -> Language;

    /// Number of dictionary words indexed.
    fn len(&self) -> usize;

    /// True if no words are indexed.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Ranked suggestions for an already normalised, lower case query.
    ///
    /// Sorted by ascending distance then descending weight and truncated to
    /// the configured number of results. Words beyond the maximum edit
    /// distance are never returned.
    fn query(&self, word: &str) -> Vec<Suggestion>;
}

/// Turns a frequency rank into a weight.
///
/// `max(1, (max(floor, len) - rank) / 2)`: the first word of a list gets the
/// largest weight and every word gets at least 1.
pub fn rank_weight(rank: usize, len: usize, floor: usize) -> u32 {
    let span = floor.max(len);
    let weight = (span.saturating_sub(rank) / 2).max(1);
    u32::try_from(weight).unwrap_or(u32::MAX)
}
