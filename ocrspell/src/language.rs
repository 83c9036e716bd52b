//! Supported languages, OCR language code mapping and per-token script
//! classification.
use std::fmt;

use language_tags::LanguageTag;
use serde::{Deserialize, Serialize};

/// A language the corrector can hold a dictionary for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English
    En,
    /// Russian
    Ru,
    /// Korean
    Ko,
    /// French
    Fr,
    /// German
    De,
    /// Spanish
    Es,
    /// Italian
    It,
    /// Dutch
    Nl,
}

impl Language {
    /// Every supported language, in declaration order.
    pub const ALL: [Language; 8] = [
        Language::En,
        Language::Ru,
        Language::Ko,
        Language::Fr,
        Language::De,
        Language::Es,
        Language::It,
        Language::Nl,
    ];

    /// Two-letter ISO 639-1 code.
    pub const fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ru => "ru",
            Language::Ko => "ko",
            Language::Fr => "fr",
            Language::De => "de",
            Language::Es => "es",
            Language::It => "it",
            Language::Nl => "nl",
        }
    }

    /// Three-letter code as emitted by the OCR engine.
    pub const fn ocr_code(self) -> &'static str {
        match self {
            Language::En => "eng",
            Language::Ru => "rus",
            Language::Ko => "kor",
            Language::Fr => "fra",
            Language::De => "deu",
            Language::Es => "spa",
            Language::It => "ita",
            Language::Nl => "nld",
        }
    }

    /// Whether the language is written in Latin script, where the script
    /// alone cannot tell languages apart.
    pub const fn is_latin(self) -> bool {
        matches!(
            self,
            Language::En | Language::Fr | Language::De | Language::Es | Language::It | Language::Nl
        )
    }

    /// Looks up a two-letter code (`en`).
    pub fn from_code(code: &str) -> Option<Language> {
        Language::ALL.iter().copied().find(|l| l.code() == code)
    }

    /// Looks up an OCR engine code (`eng`).
    pub fn from_ocr_code(code: &str) -> Option<Language> {
        Language::ALL.iter().copied().find(|l| l.ocr_code() == code)
    }

    /// Interprets a caller-supplied language hint.
    ///
    /// Accepts OCR codes (`eng`, `fra`), two-letter codes (`en`) and BCP 47
    /// tags whose primary subtag is one of those (`fr-CA`). Anything else is
    /// not a hint this engine understands.
    pub fn from_hint(hint: &str) -> Option<Language> {
        let hint = hint.trim();
        if hint.is_empty() {
            return None;
        }

        let lower = hint.to_lowercase();
        if let Some(lang) = Language::from_ocr_code(&lower).or_else(|| Language::from_code(&lower)) {
            return Some(lang);
        }

        let tag = LanguageTag::parse(hint).ok()?;
        let primary = tag.primary_language().to_lowercase();
        Language::from_code(&primary).or_else(|| Language::from_ocr_code(&primary))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[inline(always)]
fn is_cyrillic(ch: char) -> bool {
    ('\u{0400}'..='\u{04FF}').contains(&ch)
}

#[inline(always)]
fn is_hangul_syllable(ch: char) -> bool {
    ('\u{AC00}'..='\u{D7AF}').contains(&ch)
}

/// Picks the language a token should be looked up in.
///
/// Script wins over hints: any Cyrillic code point means Russian, any Hangul
/// syllable means Korean. Otherwise the first Latin-script hint is used,
/// falling back to English.
pub fn classify(token: &str, hints: &[Language]) -> Language {
    if token.chars().any(is_cyrillic) {
        return Language::Ru;
    }

    if token.chars().any(is_hangul_syllable) {
        return Language::Ko;
    }

    hints
        .iter()
        .copied()
        .find(|lang| lang.is_latin())
        .unwrap_or(Language::En)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hints() {
        assert_eq!(Language::from_hint("eng"), Some(Language::En));
        assert_eq!(Language::from_hint("NLD"), Some(Language::Nl));
        assert_eq!(Language::from_hint(" de "), Some(Language::De));
        assert_eq!(Language::from_hint("fr-CA"), Some(Language::Fr));
        assert_eq!(Language::from_hint("rus"), Some(Language::Ru));
        assert_eq!(Language::from_hint("jpn"), None);
        assert_eq!(Language::from_hint("chi_sim"), None);
        assert_eq!(Language::from_hint(""), None);
    }

    #[test]
    fn script_overrides_hints() {
        assert_eq!(classify("привет", &[Language::En]), Language::Ru);
        assert_eq!(classify("ёлка", &[Language::Fr]), Language::Ru);
        assert_eq!(classify("안녕하세요", &[Language::De]), Language::Ko);
        // Mixed-script tokens: Cyrillic is checked first.
        assert_eq!(classify("abcд", &[Language::En]), Language::Ru);
    }

    #[test]
    fn latin_hints() {
        assert_eq!(classify("bonjour", &[Language::Fr, Language::En]), Language::Fr);
        assert_eq!(classify("hallo", &[Language::Ru, Language::Ko, Language::Nl]), Language::Nl);
        assert_eq!(classify("hello", &[Language::Ru]), Language::En);
        assert_eq!(classify("hello", &[]), Language::En);
    }

    #[test]
    fn codes() {
        for lang in Language::ALL.iter().copied() {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
            assert_eq!(Language::from_ocr_code(lang.ocr_code()), Some(lang));
        }
        assert_eq!(Language::Ko.to_string(), "ko");
    }
}
