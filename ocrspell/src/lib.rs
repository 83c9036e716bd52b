/*! Multi-language fuzzy spelling correction for OCR output.

Text is split losslessly into letter runs, digit runs and separators. Each
word is assigned a language (by script for Cyrillic and Hangul, by the
caller's hints otherwise), looked up in that language's fuzzy index, and
replaced only when the best dictionary match is close or common enough. The
replacement takes on the casing of the original word.

# Usage examples

```
use ocrspell::{Corrector, DictionaryStore, Language};

let store = DictionaryStore::new().with_words(Language::En, ["the", "quick", "fox"]);
let corrector = Corrector::new(store);

assert_eq!(corrector.correct("Teh quikc fox!", &["eng"]).unwrap(), "The quick fox!");
```

For OCR output, [`Corrector::correct_ocr_text`] takes the engine's language
string (`"eng+fra"`) and never fails: on any error the text is returned as
it came in.
*/

#![warn(missing_docs)]

pub mod config;
pub mod corrector;
pub mod dictionary;
pub mod error;
pub mod index;
pub mod language;
pub mod tokenizer;

pub use crate::config::CorrectorConfig;
pub use crate::corrector::{CorrectionContext, CorrectionPolicy, Corrector};
pub use crate::dictionary::{DictionaryEntry, DictionaryStore};
pub use crate::error::{CorrectionError, Result};
pub use crate::index::{FuzzyIndex, IndexCache, Suggestion};
pub use crate::language::{classify, Language};

/// Installs `env_logger` as the `log` backend, configured from `RUST_LOG`.
#[cfg(feature = "logging")]
pub fn init_logging() {
    let _ = env_logger::try_init();
}
