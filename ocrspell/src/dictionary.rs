//! Per-language frequency-ordered word lists.
//!
//! A word's rank is its 0-based position in the list: earlier words are more
//! common. Lists are read-only once loaded.
use std::fs;
use std::path::Path;
use std::sync::Arc;

use hashbrown::{HashMap, HashSet};
use smol_str::SmolStr;

use crate::error::{CorrectionError, Result};
use crate::language::Language;
use crate::tokenizer::case_handling::lower_case;

static BUNDLED: &[(Language, &str)] = &[
    (Language::En, include_str!("../data/en.txt")),
    (Language::Ru, include_str!("../data/ru.txt")),
    (Language::Ko, include_str!("../data/ko.txt")),
    (Language::Fr, include_str!("../data/fr.txt")),
    (Language::De, include_str!("../data/de.txt")),
    (Language::Es, include_str!("../data/es.txt")),
    (Language::It, include_str!("../data/it.txt")),
    (Language::Nl, include_str!("../data/nl.txt")),
];

/// A dictionary word and its frequency rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryEntry {
    /// Lower case word as listed
    pub word: SmolStr,
    /// 0-based position in the list
    pub rank: usize,
}

/// Word lists keyed by language.
#[derive(Debug, Clone, Default)]
pub struct DictionaryStore {
    lists: HashMap<Language, Arc<[SmolStr]>>,
}

impl DictionaryStore {
    /// An empty store. Every lookup fails with `UnknownLanguage` until words
    /// are added.
    pub fn new() -> DictionaryStore {
        DictionaryStore::default()
    }

    /// The word lists compiled into the crate, one per supported language.
    pub fn bundled() -> DictionaryStore {
        let mut store = DictionaryStore::new();
        for (lang, text) in BUNDLED {
            store.insert(*lang, word_lines(text));
        }
        store
    }

    /// Loads `<code>.txt` files from a directory, one word per line in
    /// frequency order. Files may be named by two-letter or OCR code
    /// (`en.txt`, `eng.txt`); other files are skipped.
    pub fn load_dir(dir: &Path) -> Result<DictionaryStore> {
        let io_err =
            |path: &Path, e: std::io::Error| CorrectionError::Io(path.display().to_string(), e);

        let mut store = DictionaryStore::new();
        let mut paths = fs::read_dir(dir)
            .map_err(|e| io_err(dir, e))?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<std::io::Result<Vec<_>>>()
            .map_err(|e| io_err(dir, e))?;
        paths.sort();

        for path in paths {
            if path.extension().and_then(|x| x.to_str()) != Some("txt") {
                continue;
            }

            let lang = match path
                .file_stem()
                .and_then(|x| x.to_str())
                .and_then(Language::from_hint)
            {
                Some(v) => v,
                None => {
                    log::warn!("Skipping dictionary file with unknown language: {}", path.display());
                    continue;
                }
            };

            let text = fs::read_to_string(&path).map_err(|e| io_err(&path, e))?;
            if store.contains(lang) {
                log::warn!("Replacing dictionary for '{}' with {}", lang, path.display());
            }
            store.insert(lang, word_lines(&text));
        }

        Ok(store)
    }

    /// Builder form of [`DictionaryStore::insert`].
    pub fn with_words<I, S>(mut self, lang: Language, words: I) -> DictionaryStore
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.insert(lang, words);
        self
    }

    /// Sets the word list for a language, replacing any previous one.
    ///
    /// Words are lowercased; empty words are dropped and duplicates keep the
    /// rank of their first occurrence.
    pub fn insert<I, S>(&mut self, lang: Language, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut list = vec![];

        for word in words {
            let word = lower_case(word.as_ref().trim());
            if word.is_empty() {
                continue;
            }
            if seen.insert(word.clone()) {
                list.push(word);
            } else {
                log::warn!("Duplicate dictionary word '{}' for '{}'", word, lang);
            }
        }

        self.lists.insert(lang, list.into());
    }

    /// Whether the store has a list for `lang`.
    pub fn contains(&self, lang: Language) -> bool {
        self.lists.contains_key(&lang)
    }

    /// Languages with a word list, in no particular order.
    pub fn languages(&self) -> impl Iterator<Item = Language> + '_ {
        self.lists.keys().copied()
    }

    /// The ordered word list for a language.
    pub fn words(&self, lang: Language) -> Result<Arc<[SmolStr]>> {
        self.lists
            .get(&lang)
            .cloned()
            .ok_or(CorrectionError::UnknownLanguage(lang))
    }

    /// The word list for a language with ranks attached.
    pub fn entries(&self, lang: Language) -> Result<Vec<DictionaryEntry>> {
        let words = self.words(lang)?;
        Ok(words
            .iter()
            .enumerate()
            .map(|(rank, word)| DictionaryEntry {
                word: word.clone(),
                rank,
            })
            .collect())
    }
}

fn word_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
}
