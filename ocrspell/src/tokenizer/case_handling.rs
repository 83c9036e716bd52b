//! Case detection, case restoration and lookup normalisation.
use smol_str::SmolStr;
use unicode_normalization::UnicodeNormalization;

use crate::language::Language;

/// Per-character lower case mapping.
#[inline(always)]
pub fn lower_case(s: &str) -> SmolStr {
    s.chars()
        .map(|c| c.to_lowercase().collect::<String>())
        .collect::<SmolStr>()
}

/// Per-character upper case mapping.
#[inline(always)]
pub fn upper_case(s: &str) -> SmolStr {
    s.chars()
        .map(|c| c.to_uppercase().collect::<String>())
        .collect::<SmolStr>()
}

/// Upper cases the first character only.
#[inline(always)]
pub fn upper_first(s: &str) -> SmolStr {
    let mut c = s.chars();
    match c.next() {
        None => SmolStr::new(""),
        Some(f) => SmolStr::from(f.to_uppercase().collect::<String>() + c.as_str()),
    }
}

/// Every cased letter is upper case, and there is at least one.
pub fn is_all_caps(word: &str) -> bool {
    word.chars().any(char::is_uppercase) && upper_case(word) == word
}

/// Upper case first letter followed only by lower case or uncased letters.
pub fn is_first_caps(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) if first.is_uppercase() => {
            let rest = chars.as_str();
            lower_case(rest) == rest
        }
        _ => false,
    }
}

/// Casing pattern carried over from a token to its replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseMutation {
    /// `Word`
    FirstCaps,
    /// `WORD`
    AllCaps,
    /// Anything else; the replacement keeps its own casing
    None,
}

impl CaseMutation {
    /// The casing pattern of a word's surface form.
    pub fn of(word: &str) -> CaseMutation {
        if is_all_caps(word) {
            CaseMutation::AllCaps
        } else if is_first_caps(word) {
            CaseMutation::FirstCaps
        } else {
            CaseMutation::None
        }
    }

    /// Reshapes `word` to this pattern.
    pub fn apply(self, word: &str) -> SmolStr {
        match self {
            CaseMutation::AllCaps => upper_case(word),
            CaseMutation::FirstCaps => upper_first(word),
            CaseMutation::None => SmolStr::new(word),
        }
    }
}

/// Reshapes a dictionary replacement to the casing of the original token.
///
/// Only the original's surface form is inspected. Mixed or lower case
/// originals get the replacement as stored.
pub fn preserve_casing(original: &str, replacement: &str) -> SmolStr {
    CaseMutation::of(original).apply(replacement)
}

/// Canonicalises a token before dictionary lookup.
///
/// Applies NFKC, and for Russian folds `ё` to `е` so both spellings match the
/// same entry. Casing is left alone.
pub fn normalize_for_lookup(token: &str, lang: Language) -> SmolStr {
    let nfkc = token.nfkc();

    match lang {
        Language::Ru => nfkc
            .map(|ch| match ch {
                'ё' => 'е',
                'Ё' => 'Е',
                other => other,
            })
            .collect(),
        _ => nfkc.collect(),
    }
}

/// Length in characters once composed under NFKC. A letter followed by a
/// combining accent counts once.
pub fn lookup_len(token: &str) -> usize {
    token.nfkc().count()
}

/// Whether NFKC leaves the token as it is.
pub fn is_nfkc_stable(token: &str) -> bool {
    token.nfkc().eq(token.chars())
}
