//! Build-once, per-language index cache.
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};

use hashbrown::HashMap;
use parking_lot::Mutex;

use super::{FuzzyIndex, SymSpellIndex};
use crate::config::CorrectorConfig;
use crate::dictionary::DictionaryStore;
use crate::error::{CorrectionError, Result};
use crate::language::Language;

#[derive(Default)]
struct Slot {
    index: OnceLock<Arc<dyn FuzzyIndex>>,
    build_lock: Mutex<()>,
    builds: AtomicUsize,
}

/// Owns the dictionaries and lazily builds one [`FuzzyIndex`] per language.
///
/// An index is built on first request and then shared read-only for the
/// lifetime of the cache. Concurrent first requests for the same language
/// block on a per-language lock so that exactly one build runs; requests for
/// other languages are not held up.
pub struct IndexCache {
    store: DictionaryStore,
    config: CorrectorConfig,
    slots: HashMap<Language, Slot>,
}

impl IndexCache {
    /// A cache over `store` with nothing built yet.
    pub fn new(store: DictionaryStore, config: CorrectorConfig) -> IndexCache {
        let slots = Language::ALL
            .iter()
            .map(|lang| (*lang, Slot::default()))
            .collect();

        IndexCache {
            store,
            config,
            slots,
        }
    }

    /// The dictionaries indexes are built from.
    pub fn store(&self) -> &DictionaryStore {
        &self.store
    }

    /// Settings every index is built with.
    pub fn config(&self) -> &CorrectorConfig {
        &self.config
    }

    /// The index for a language, building it if this is the first request.
    ///
    /// Fails with `UnknownLanguage` if the store has no words for it; a
    /// failed build leaves nothing behind and may be retried.
    pub fn get(&self, lang: Language) -> Result<Arc<dyn FuzzyIndex>> {
        let slot = self.slot(lang)?;

        if let Some(index) = slot.index.get() {
            return Ok(Arc::clone(index));
        }

        let _guard = slot.build_lock.lock();

        // Another caller may have finished the build while we waited.
        if let Some(index) = slot.index.get() {
            return Ok(Arc::clone(index));
        }

        let entries = self.store.entries(lang)?;
        let index: Arc<dyn FuzzyIndex> =
            Arc::new(SymSpellIndex::build(lang, &entries, &self.config));
        slot.builds.fetch_add(1, Ordering::SeqCst);

        if slot.index.set(Arc::clone(&index)).is_err() {
            return Err(CorrectionError::LookupFailure(lang));
        }

        Ok(index)
    }

    /// Whether the index for a language exists yet.
    pub fn is_built(&self, lang: Language) -> bool {
        self.slots
            .get(&lang)
            .map(|slot| slot.index.get().is_some())
            .unwrap_or(false)
    }

    /// How many times an index has been built for a language. Never more
    /// than one.
    pub fn build_count(&self, lang: Language) -> usize {
        self.slots
            .get(&lang)
            .map(|slot| slot.builds.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    fn slot(&self, lang: Language) -> Result<&Slot> {
        self.slots
            .get(&lang)
            .ok_or(CorrectionError::LookupFailure(lang))
    }
}

impl std::fmt::Debug for IndexCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let built = Language::ALL
            .iter()
            .filter(|lang| self.is_built(**lang))
            .collect::<Vec<_>>();

        f.debug_struct("IndexCache")
            .field("languages", &self.store.languages().collect::<Vec<_>>())
            .field("built", &built)
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cache() -> IndexCache {
        let store = DictionaryStore::new()
            .with_words(Language::En, ["the", "quick", "fox"])
            .with_words(Language::Ru, ["ёлка", "елка", "дом"]);
        IndexCache::new(store, CorrectorConfig::default())
    }

    #[test]
    fn builds_lazily_once() {
        let cache = cache();
        assert!(!cache.is_built(Language::En));
        assert_eq!(cache.build_count(Language::En), 0);

        let first = cache.get(Language::En).unwrap();
        let second = cache.get(Language::En).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.build_count(Language::En), 1);
        assert!(!cache.is_built(Language::Ru));
    }

    #[test]
    fn unknown_language_is_not_cached() {
        let cache = cache();
        assert!(matches!(
            cache.get(Language::Ko),
            Err(CorrectionError::UnknownLanguage(Language::Ko))
        ));
        assert!(!cache.is_built(Language::Ko));
        assert_eq!(cache.build_count(Language::Ko), 0);
    }

    #[test]
    fn russian_entries_are_folded() {
        let cache = cache();
        let index = cache.get(Language::Ru).unwrap();
        assert_eq!(index.len(), 2);
        let results = index.query("елка");
        assert_eq!(results[0].term(), "ёлка");
        assert_eq!(results[0].distance, 0);
        assert_eq!(results[0].rank, 0);
    }
}
