use itertools::Itertools;

use crate::language::Language;

/// Per-call language hints, most preferred first.
///
/// Hints only choose between Latin-script languages; they never override
/// script detection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorrectionContext {
    hints: Vec<Language>,
}

impl CorrectionContext {
    /// Parses caller-supplied codes (`eng`, `fr`, `de-AT`, ...). Codes the
    /// engine does not know are ignored.
    pub fn new<S: AsRef<str>>(hints: &[S]) -> CorrectionContext {
        let hints = hints
            .iter()
            .filter_map(|hint| {
                let hint = hint.as_ref();
                let lang = Language::from_hint(hint);
                if lang.is_none() {
                    log::warn!("Ignoring unsupported language hint '{}'", hint);
                }
                lang
            })
            .unique()
            .collect();

        CorrectionContext { hints }
    }

    /// Parses an OCR language string such as `eng+fra`.
    pub fn from_ocr_languages(languages: &str) -> CorrectionContext {
        let codes = languages
            .split('+')
            .map(str::trim)
            .filter(|code| !code.is_empty())
            .collect::<Vec<_>>();
        CorrectionContext::new(&codes)
    }

    /// A context from already parsed languages.
    pub fn from_languages(hints: Vec<Language>) -> CorrectionContext {
        CorrectionContext { hints }
    }

    /// Hints in preference order.
    pub fn hints(&self) -> &[Language] {
        &self.hints
    }

    /// True if no usable hint was given.
    pub fn is_empty(&self) -> bool {
        self.hints.is_empty()
    }
}
