//! Corrector configuration.
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Tuning for index construction and the replacement policy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorrectorConfig {
    /// Largest edit distance a suggestion may have
    pub max_edit_distance: usize,
    /// Number of suggestions kept per query
    pub n_best: usize,
    /// Suggestions at or below this distance are always trusted
    pub max_trusted_distance: usize,
    /// Suggestions further away are trusted only above this weight
    pub min_confident_weight: u32,
    /// Lower bound on the list length used when turning ranks into weights
    pub weight_floor: usize,
    /// Word tokens shorter than this (in characters) are never touched
    pub min_token_chars: usize,
}

impl CorrectorConfig {
    /// The stock thresholds.
    pub const fn default() -> CorrectorConfig {
        CorrectorConfig {
            max_edit_distance: 2,
            n_best: 5,
            max_trusted_distance: 1,
            min_confident_weight: 5,
            weight_floor: 200,
            min_token_chars: 2,
        }
    }

    /// Reads a configuration from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<CorrectorConfig> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for CorrectorConfig {
    fn default() -> Self {
        CorrectorConfig::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CorrectionError;

    #[test]
    fn partial_json() {
        let config = CorrectorConfig::from_json(r#"{ "min_confident_weight": 10, "n_best": 1 }"#).unwrap();
        assert_eq!(config.min_confident_weight, 10);
        assert_eq!(config.n_best, 1);
        assert_eq!(config.max_edit_distance, 2);
        assert_eq!(config.weight_floor, 200);
    }

    #[test]
    fn round_trip() {
        let config = CorrectorConfig {
            max_edit_distance: 1,
            ..CorrectorConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(CorrectorConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn bad_json() {
        assert!(matches!(
            CorrectorConfig::from_json(r#"{ "n_best": "lots" }"#),
            Err(CorrectionError::Config(_))
        ));
    }
}
