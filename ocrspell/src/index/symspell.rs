use hashbrown::{HashMap, HashSet};
use smol_str::SmolStr;

use super::{rank_weight, FuzzyIndex, Suggestion};
use crate::config::CorrectorConfig;
use crate::dictionary::DictionaryEntry;
use crate::language::Language;
use crate::tokenizer::case_handling::{lower_case, normalize_for_lookup};

type EntryId = u32;

#[derive(Debug, Clone)]
struct IndexEntry {
    /// Lookup form the distance is measured against
    key: SmolStr,
    /// Dictionary spelling handed back in suggestions
    term: SmolStr,
    chars: usize,
    weight: u32,
    rank: usize,
}

/// Symmetric delete index.
///
/// Every dictionary word is stored under each string reachable from it by
/// deleting up to `max_edit_distance` characters. A query generates its own
/// deletes and looks them up; any word within the distance bound shares at
/// least one delete with the query, so only those few candidates need a real
/// distance check. Lookup cost depends on the query length, not on the size
/// of the dictionary.
#[derive(Debug)]
pub struct SymSpellIndex {
    language: Language,
    max_edit_distance: usize,
    n_best: usize,
    max_word_chars: usize,
    entries: Vec<IndexEntry>,
    deletes: HashMap<SmolStr, Vec<EntryId>>,
}

impl SymSpellIndex {
    /// Builds the index from a ranked dictionary list.
    ///
    /// Words are indexed under their lookup form (NFKC, lower case, `ё`
    /// folded for Russian) and suggested in their dictionary spelling. A
    /// word whose lookup form collides with an earlier one is skipped. Weights
    /// are computed against the length of the whole list.
    pub fn build(
        language: Language,
        dictionary: &[DictionaryEntry],
        config: &CorrectorConfig,
    ) -> SymSpellIndex {
        let max_edit_distance = config.max_edit_distance;
        let mut entries = Vec::with_capacity(dictionary.len());
        let mut deletes: HashMap<SmolStr, Vec<EntryId>> = HashMap::new();
        let mut keys = HashSet::new();
        let mut max_word_chars = 0;

        for entry in dictionary {
            let key = lower_case(&normalize_for_lookup(&entry.word, language));
            if !keys.insert(key.clone()) {
                log::trace!("{}: '{}' folds onto an earlier word", language, entry.word);
                continue;
            }

            let id = entries.len() as EntryId;
            let chars = key.chars().collect::<Vec<_>>();

            for variant in delete_variants(&chars, max_edit_distance) {
                deletes.entry(variant).or_default().push(id);
            }

            max_word_chars = max_word_chars.max(chars.len());
            entries.push(IndexEntry {
                key,
                term: entry.word.clone(),
                chars: chars.len(),
                weight: rank_weight(entry.rank, dictionary.len(), config.weight_floor),
                rank: entry.rank,
            });
        }

        log::debug!(
            "Built {} index: {} words, {} delete keys",
            language,
            entries.len(),
            deletes.len()
        );

        SymSpellIndex {
            language,
            max_edit_distance,
            n_best: config.n_best,
            max_word_chars,
            entries,
            deletes,
        }
    }

    /// Largest distance a suggestion can have.
    pub fn max_edit_distance(&self) -> usize {
        self.max_edit_distance
    }
}

impl FuzzyIndex for SymSpellIndex {
    fn language(&self) -> Language {
        self.language
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn query(&self, word: &str) -> Vec<Suggestion> {
        let chars = word.chars().collect::<Vec<_>>();
        // Too long to be within reach of any word.
        if chars.is_empty() || chars.len() > self.max_word_chars + self.max_edit_distance {
            return vec![];
        }

        let mut seen = HashSet::new();
        let mut out = vec![];

        for variant in delete_variants(&chars, self.max_edit_distance) {
            let ids = match self.deletes.get(variant.as_str()) {
                Some(v) => v,
                None => continue,
            };

            for &id in ids {
                if !seen.insert(id) {
                    continue;
                }

                let entry = &self.entries[id as usize];
                if entry.chars.abs_diff(chars.len()) > self.max_edit_distance {
                    continue;
                }

                let distance = strsim::damerau_levenshtein(word, &entry.key);
                if distance <= self.max_edit_distance {
                    out.push(Suggestion::new(
                        entry.term.clone(),
                        distance,
                        entry.weight,
                        entry.rank,
                    ));
                }
            }
        }

        out.sort();
        out.truncate(self.n_best);
        out
    }
}

/// The word itself plus every string obtained by deleting up to
/// `max_distance` characters from it.
fn delete_variants(word: &[char], max_distance: usize) -> HashSet<SmolStr> {
    let mut variants = HashSet::new();
    variants.insert(word.iter().copied().collect::<SmolStr>());

    let mut frontier = vec![word.to_vec()];
    for _ in 0..max_distance {
        let mut next = vec![];
        for current in frontier.iter() {
            for i in 0..current.len() {
                let variant = current[..i]
                    .iter()
                    .chain(current[i + 1..].iter())
                    .copied()
                    .collect::<Vec<_>>();
                if variants.insert(variant.iter().copied().collect::<SmolStr>()) {
                    next.push(variant);
                }
            }
        }
        frontier = next;
    }

    variants
}
