use crate::alphabet::{normalize, AlphabetSpec};
use std::fmt;

/// Fallback substitute when the letter before the separator is unusable
pub const FALLBACK_SUBSTITUTE: char = 'V';

/// An ordered pair of characters, the unit of substitution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Digraph(pub char, pub char);

impl fmt::Display for Digraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0, self.1)
    }
}

/// Turns free text into digraphs ready for substitution
#[derive(Debug, Clone, Copy)]
pub struct TextPreprocessor<'a> {
    alphabet: &'a AlphabetSpec,
}

impl<'a> TextPreprocessor<'a> {
    pub fn new(alphabet: &'a AlphabetSpec) -> Self {
        Self { alphabet }
    }

    /// Letter written in place of a separator that occurs in the plaintext.
    ///
    /// Takes the letter listed just before the separator in the alphabet
    /// (`Е` for `Ё`, `J` for `K` in Romanian). When the alphabet was given
    /// without the separator, takes the character just before it in code
    /// point order if that is an alphabet letter (`I` for `J` in English).
    /// Otherwise [`FALLBACK_SUBSTITUTE`] when the alphabet has it, otherwise
    /// the first alphabet letter. Never returns the separator itself.
    pub fn substitute(&self) -> char {
        let separator = self.alphabet.separator();
        let code_point_before = || {
            (separator as u32)
                .checked_sub(1)
                .and_then(char::from_u32)
                .filter(|&c| self.alphabet.contains(c))
        };

        self.alphabet
            .letter_before_separator()
            .or_else(code_point_before)
            .or_else(|| Some(FALLBACK_SUBSTITUTE).filter(|&c| self.alphabet.contains(c)))
            .or_else(|| self.alphabet.letters().first().copied())
            .unwrap_or(FALLBACK_SUBSTITUTE)
    }

    /// Split `text` into digraphs.
    ///
    /// Whitespace is dropped and letters uppercased. Two equal letters are
    /// kept apart by pairing the first one with the separator, and a lone
    /// trailing letter is padded with the separator.
    pub fn prepare(&self, text: &str) -> Vec<Digraph> {
        let separator = self.alphabet.separator();
        let mut clean = normalize(text);
        if clean.contains(&separator) {
            let substitute = self.substitute();
            for c in clean.iter_mut().filter(|c| **c == separator) {
                *c = substitute;
            }
        }

        let mut pairs = Vec::with_capacity(clean.len() / 2 + 1);
        let mut i = 0;
        while i < clean.len() {
            match clean.get(i + 1) {
                Some(&next) if next != clean[i] => {
                    pairs.push(Digraph(clean[i], next));
                    i += 2;
                }
                _ => {
                    pairs.push(Digraph(clean[i], separator));
                    i += 1;
                }
            }
        }
        pairs
    }
}

/// Join digraphs into a flat string
pub fn join_pairs(pairs: &[Digraph]) -> String {
    pairs.iter().map(|p| p.to_string()).collect()
}
