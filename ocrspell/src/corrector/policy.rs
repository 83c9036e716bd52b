use crate::config::CorrectorConfig;
use crate::index::Suggestion;

/// Decides whether the best suggestion for a token is trustworthy enough to
/// replace it.
///
/// Close suggestions are always taken. Further ones are taken only when the
/// suggested word is common, so rare but correct words (names, codes) are
/// not overwritten by a superficially similar common word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorrectionPolicy {
    /// Suggestions this close are always accepted
    pub max_trusted_distance: usize,
    /// Weight a further suggestion must exceed
    pub min_confident_weight: u32,
}

impl CorrectionPolicy {
    /// Thresholds taken from `config`.
    pub fn new(config: &CorrectorConfig) -> CorrectionPolicy {
        CorrectionPolicy {
            max_trusted_distance: config.max_trusted_distance,
            min_confident_weight: config.min_confident_weight,
        }
    }

    /// `distance <= max_trusted_distance || weight > min_confident_weight`
    pub fn accepts(&self, suggestion: &Suggestion) -> bool {
        suggestion.distance <= self.max_trusted_distance
            || suggestion.weight > self.min_confident_weight
    }

    /// The top suggestion, if it passes. Only the first suggestion is ever
    /// considered.
    pub fn decide<'a>(&self, suggestions: &'a [Suggestion]) -> Option<&'a Suggestion> {
        suggestions.first().filter(|best| self.accepts(best))
    }
}

impl Default for CorrectionPolicy {
    fn default() -> Self {
        CorrectionPolicy::new(&CorrectorConfig::default())
    }
}
