use crate::alphabet::{normalize, AlphabetSpec};
use crate::error::{PlayfairError, Result};

/// Minimum number of non-whitespace characters in a key
pub const MIN_KEY_LEN: usize = 7;

/// Gatekeeper for keys and texts before any matrix or substitution work
#[derive(Debug, Clone, Copy)]
pub struct Validator<'a> {
    alphabet: &'a AlphabetSpec,
}

impl<'a> Validator<'a> {
    pub fn new(alphabet: &'a AlphabetSpec) -> Self {
        Self { alphabet }
    }

    pub fn validate_key(&self, key: &str) -> Result<()> {
        let chars = normalize(key);
        if chars.len() < MIN_KEY_LEN {
            return Err(PlayfairError::InvalidKey(format!(
                "must have at least {} characters, got {}",
                MIN_KEY_LEN,
                chars.len()
            )));
        }
        if let Some(c) = self.first_foreign(&chars) {
            return Err(PlayfairError::InvalidKey(format!(
                "character '{}' is not in the {} alphabet",
                c,
                self.alphabet.name()
            )));
        }
        Ok(())
    }

    pub fn validate_text(&self, text: &str) -> Result<()> {
        if let Some(c) = self.first_foreign(&normalize(text)) {
            return Err(PlayfairError::InvalidText(format!(
                "character '{}' is not in the {} alphabet",
                c,
                self.alphabet.name()
            )));
        }
        Ok(())
    }

    fn first_foreign(&self, chars: &[char]) -> Option<char> {
        chars.iter().copied().find(|&c| !self.alphabet.accepts(c))
    }
}
