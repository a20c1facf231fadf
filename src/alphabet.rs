use crate::cipher::{dimensions, MatrixDimensions};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An alphabet together with the letter reserved as separator.
///
/// The separator never appears in `letters`; it is used as filler between
/// doubled letters and to pad odd-length text, and never gets a matrix cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlphabetSpec {
    name: String,
    letters: Vec<char>,
    separator: char,
    before_separator: Option<char>,
}

impl AlphabetSpec {
    /// Build a spec from raw input. Letters and separator are uppercased
    /// one character at a time, the same way keys and texts are, the
    /// separator is removed from the letters and duplicate letters are
    /// collapsed to their first occurrence.
    ///
    /// When `letters` lists the separator in its alphabetical place, the
    /// letter right before it is remembered for separator substitution.
    pub fn new(letters: &str, separator: char, name: &str) -> Self {
        let separator = to_upper(separator);
        let mut unique: Vec<char> = Vec::new();
        let mut before_separator = None;
        for c in normalize(letters) {
            if c == separator {
                if before_separator.is_none() {
                    before_separator = unique.last().copied();
                }
                continue;
            }
            if !unique.contains(&c) {
                unique.push(c);
            }
        }

        Self {
            name: name.to_string(),
            letters: unique,
            separator,
            before_separator,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Matrix letters in canonical order
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    /// Letter listed just before the separator in the raw alphabet, if any
    pub fn letter_before_separator(&self) -> Option<char> {
        self.before_separator
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.letters.contains(&c)
    }

    /// True for matrix letters and for the separator
    pub fn accepts(&self, c: char) -> bool {
        c == self.separator || self.contains(c)
    }

    pub fn dimensions(&self) -> MatrixDimensions {
        dimensions(self.len())
    }

    pub fn letters_string(&self) -> String {
        self.letters.iter().collect()
    }

    /// Summary used by `info` displays
    pub fn describe(&self) -> AlphabetInfo {
        AlphabetInfo {
            name: self.name.clone(),
            letters: self.letters_string(),
            separator: self.separator,
            letter_count: self.len(),
            dimensions: self.dimensions(),
        }
    }
}

/// Descriptive view of an [`AlphabetSpec`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlphabetInfo {
    pub name: String,
    pub letters: String,
    pub separator: char,
    pub letter_count: usize,
    pub dimensions: MatrixDimensions,
}

impl fmt::Display for AlphabetInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Alphabet: {}", self.name)?;
        writeln!(f, "  Letters: {}", self.letters)?;
        writeln!(f, "  Letter count: {}", self.letter_count)?;
        writeln!(f, "  Separator: {}", self.separator)?;
        writeln!(f, "  Matrix dimensions: {}", self.dimensions)
    }
}

/// Uppercase a single character, keeping it as-is when the uppercase
/// form is more than one character (e.g. `ß`).
pub(crate) fn to_upper(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Uppercase and drop all whitespace
pub(crate) fn normalize(text: &str) -> Vec<char> {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .map(to_upper)
        .collect()
}
