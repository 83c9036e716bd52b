//! Lossless splitting of text into letter runs, digit runs and everything
//! else.
use unic_ucd_category::GeneralCategory;

pub mod case_handling;

/// Character class of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Letters, with any combining marks that follow them
    Letters,
    /// Numeric characters
    Digits,
    /// Whitespace, punctuation, symbols and anything else
    Other,
}

impl TokenKind {
    #[inline(always)]
    fn of(ch: char) -> TokenKind {
        let category = GeneralCategory::of(ch);
        if category.is_letter() {
            TokenKind::Letters
        } else if category.is_number() {
            TokenKind::Digits
        } else {
            TokenKind::Other
        }
    }

    #[inline(always)]
    fn continues(self, ch: char) -> bool {
        let next = TokenKind::of(ch);
        next == self || (self == TokenKind::Letters && GeneralCategory::of(ch).is_mark())
    }
}

/// A span of the input. `offset` is the byte offset of `text` in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// What the run is made of
    pub kind: TokenKind,
    /// Byte offset into the input
    pub offset: usize,
    /// The run itself
    pub text: &'a str,
}

impl<'a> Token<'a> {
    /// Letter runs are the only tokens ever corrected.
    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Letters
    }
}

/// Iterator over the maximal runs of a string. Concatenating every token's
/// text reproduces the input exactly.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    text: &'a str,
    offset: usize,
}

impl<'a> Tokens<'a> {
    /// Tokens of `text`, from the start.
    pub fn new(text: &'a str) -> Tokens<'a> {
        Tokens { text, offset: 0 }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let rest = &self.text[self.offset..];
        let mut chars = rest.char_indices();
        let (_, first) = chars.next()?;
        let kind = TokenKind::of(first);

        let end = chars
            .find(|&(_, ch)| !kind.continues(ch))
            .map(|(i, _)| i)
            .unwrap_or(rest.len());

        let token = Token {
            kind,
            offset: self.offset,
            text: &rest[..end],
        };
        self.offset += end;
        Some(token)
    }
}

/// Splits a string into [`Tokens`].
pub trait Tokenize {
    /// Iterator over the runs of `self`.
    fn tokens(&self) -> Tokens<'_>;
}

impl Tokenize for str {
    fn tokens(&self) -> Tokens<'_> {
        Tokens::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(text: &str) -> Vec<(usize, &str, TokenKind)> {
        text.tokens().map(|t| (t.offset, t.text, t.kind)).collect()
    }

    #[test]
    fn basic() {
        use TokenKind::*;

        assert_eq!(
            spans("a 2023 test!"),
            vec![
                (0, "a", Letters),
                (1, " ", Other),
                (2, "2023", Digits),
                (6, " ", Other),
                (7, "test", Letters),
                (11, "!", Other),
            ]
        );
        assert!(spans("").is_empty());
        assert_eq!(
            spans("abc123def"),
            vec![(0, "abc", Letters), (3, "123", Digits), (6, "def", Letters)]
        );
    }

    #[test]
    fn unicode() {
        use TokenKind::*;

        assert_eq!(
            spans("Привет, 세계 — ½x"),
            vec![
                (0, "Привет", Letters),
                (12, ", ", Other),
                (14, "세계", Letters),
                (20, " — ", Other),
                (25, "½", Digits),
                (27, "x", Letters),
            ]
        );
        // Combining marks stay with the letters they follow.
        assert_eq!(spans("cafe\u{301}!"), vec![(0, "cafe\u{301}", Letters), (6, "!", Other)]);
        // A mark with nothing to attach to is not a letter.
        assert_eq!(spans("\u{301}a"), vec![(0, "\u{301}", Other), (2, "a", Letters)]);
    }

    #[test]
    fn lossless() {
        let samples = [
            "this is an ordinary sentence! \"This was quoted,\", an emoji: (😄), and\t a tab was there and a new line.\n",
            "Some extreme unicode; bismala: (﷽), in long form: بِسْمِ اللهِ الرَّحْمٰنِ الرَّحِيْمِ.",
            "  ÉCOLE\r\n\r\n2023-01-01 ёлка ﬁne \u{200b}x",
            "",
        ];

        for sample in samples.iter() {
            let joined = sample.tokens().map(|t| t.text).collect::<String>();
            assert_eq!(joined, *sample);

            let mut expected_offset = 0;
            for token in sample.tokens() {
                assert!(!token.text.is_empty());
                assert_eq!(token.offset, expected_offset);
                expected_offset += token.text.len();
            }
        }
    }
}
