//! Error types for dictionary loading and correction.
use crate::language::Language;

/// Errors that can occur while loading dictionaries or correcting text.
///
/// Low-confidence or ambiguous tokens are never errors: they resolve to the
/// original token. Only structural problems reach the caller.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CorrectionError {
    /// No dictionary resource backs the requested language
    #[error("No dictionary available for language '{0}'")]
    UnknownLanguage(Language),

    /// The fuzzy index for a language could not be reached
    #[error("Fuzzy index for language '{0}' is unavailable")]
    LookupFailure(Language),

    /// I/O error while reading a dictionary file
    #[error("I/O error reading '{0}'")]
    Io(String, #[source] std::io::Error),

    /// Malformed corrector configuration
    #[error("Invalid corrector configuration")]
    Config(#[from] serde_json::Error),
}

/// Result alias used throughout the crate.
pub type Result<T, E = CorrectionError> = std::result::Result<T, E>;
