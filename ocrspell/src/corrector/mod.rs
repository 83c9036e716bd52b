//! Token-by-token correction of OCR text.
use std::borrow::Cow;
use std::sync::Arc;

use crate::config::CorrectorConfig;
use crate::dictionary::DictionaryStore;
use crate::error::Result;
use crate::index::{FuzzyIndex, IndexCache};
use crate::language::{classify, Language};
use crate::tokenizer::case_handling::{
    is_nfkc_stable, lookup_len, lower_case, normalize_for_lookup, preserve_casing,
};
use crate::tokenizer::{Token, Tokenize};

mod context;
mod policy;

pub use self::context::CorrectionContext;
pub use self::policy::CorrectionPolicy;

/// Multi-language spelling corrector.
///
/// Owns an [`IndexCache`]; create one at startup and share it (it is `Sync`).
/// Every token is corrected independently of its neighbours.
#[derive(Debug)]
pub struct Corrector {
    cache: IndexCache,
    policy: CorrectionPolicy,
}

impl Corrector {
    /// A corrector with the default configuration.
    pub fn new(store: DictionaryStore) -> Corrector {
        Corrector::with_config(store, CorrectorConfig::default())
    }

    /// A corrector with custom thresholds.
    pub fn with_config(store: DictionaryStore, config: CorrectorConfig) -> Corrector {
        Corrector {
            policy: CorrectionPolicy::new(&config),
            cache: IndexCache::new(store, config),
        }
    }

    /// A corrector over the bundled word lists.
    pub fn bundled() -> Corrector {
        Corrector::new(DictionaryStore::bundled())
    }

    /// The per-language index cache.
    pub fn cache(&self) -> &IndexCache {
        &self.cache
    }

    /// Thresholds in use.
    pub fn config(&self) -> &CorrectorConfig {
        self.cache.config()
    }

    /// Accept/reject rule applied to the best suggestion.
    pub fn policy(&self) -> &CorrectionPolicy {
        &self.policy
    }

    /// Builds the index for a language ahead of the first correction that
    /// needs it.
    pub fn prepare(&self, lang: Language) -> Result<()> {
        self.cache.get(lang).map(|_| ())
    }

    /// Corrects `text` using language hints in caller preference order.
    pub fn correct<S: AsRef<str>>(&self, text: &str, hints: &[S]) -> Result<String> {
        self.correct_with_context(text, &CorrectionContext::new(hints))
    }

    /// Corrects every word of `text`. Separators, digits and short words are
    /// copied through unchanged.
    ///
    /// Fails only if a token falls back to English and no English dictionary
    /// is available.
    pub fn correct_with_context(&self, text: &str, ctx: &CorrectionContext) -> Result<String> {
        let mut out = String::with_capacity(text.len());

        for token in text.tokens() {
            out.push_str(&self.correct_token(&token, ctx)?);
        }

        Ok(out)
    }

    /// Corrects a single token.
    ///
    /// Words shorter than `min_token_chars` after NFKC composition are
    /// returned as they are.
    pub fn correct_token<'t>(
        &self,
        token: &Token<'t>,
        ctx: &CorrectionContext,
    ) -> Result<Cow<'t, str>> {
        if !token.is_word() || lookup_len(token.text) < self.config().min_token_chars {
            return Ok(Cow::Borrowed(token.text));
        }

        let (lang, index) = self.index_for(token.text, ctx)?;
        let query = lower_case(&normalize_for_lookup(token.text, lang));
        let suggestions = index.query(&query);

        let best = match self.policy.decide(&suggestions) {
            Some(v) => v,
            None => {
                log::trace!("{}: keeping '{}' ({} suggestions)", lang, token.text, suggestions.len());
                return Ok(Cow::Borrowed(token.text));
            }
        };

        // Already a dictionary word up to case and `ё`; keep the original.
        if best.distance == 0 && is_nfkc_stable(token.text) {
            return Ok(Cow::Borrowed(token.text));
        }

        let replacement = preserve_casing(token.text, best.term());
        log::trace!(
            "{}: '{}' -> '{}' (distance {}, weight {})",
            lang,
            token.text,
            replacement,
            best.distance,
            best.weight
        );
        Ok(Cow::Owned(replacement.to_string()))
    }

    /// Corrects OCR output given the engine's language string
    /// (e.g. `eng+fra`).
    ///
    /// Correction is best effort: if none of the languages is supported, or
    /// anything goes wrong, the text comes back unmodified.
    pub fn correct_ocr_text(&self, text: &str, ocr_languages: &str) -> String {
        let ctx = CorrectionContext::from_ocr_languages(ocr_languages);
        if ctx.is_empty() {
            log::debug!("No supported language in '{}', skipping correction", ocr_languages);
            return text.to_string();
        }

        match self.correct_with_context(text, &ctx) {
            Ok(v) => v,
            Err(e) => {
                log::warn!("Spell correction failed, returning OCR text as is: {}", e);
                text.to_string()
            }
        }
    }

    fn index_for(&self, token: &str, ctx: &CorrectionContext) -> Result<(Language, Arc<dyn FuzzyIndex>)> {
        let lang = classify(token, ctx.hints());

        let lang = if self.cache.store().contains(lang) {
            lang
        } else {
            log::debug!("No dictionary for '{}', falling back to '{}'", lang, Language::En);
            Language::En
        };

        Ok((lang, self.cache.get(lang)?))
    }
}
