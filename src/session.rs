use crate::alphabet::{normalize, AlphabetInfo, AlphabetSpec};
use crate::cipher::{
    join_pairs, Cryptographer, Digraph, Direction, Matrix, TextPreprocessor, Validator,
};
use crate::error::{PlayfairError, Result};
use log::debug;

/// Build an alphabet spec from raw letters, separator and name
pub fn configure(letters: &str, separator: char, name: &str) -> AlphabetSpec {
    AlphabetSpec::new(letters, separator, name)
}

/// A cipher session over one alphabet.
///
/// Holds the most recently built matrix. Every key change builds a fresh
/// matrix and swaps it in whole; a rejected key or text leaves the previous
/// matrix untouched.
#[derive(Debug, Clone)]
pub struct Playfair {
    alphabet: AlphabetSpec,
    matrix: Option<Matrix>,
}

impl Playfair {
    pub fn new(alphabet: AlphabetSpec) -> Result<Self> {
        if alphabet.len() < 2 {
            return Err(PlayfairError::InvalidAlphabet(format!(
                "{} needs at least 2 letters besides the separator, got {}",
                alphabet.name(),
                alphabet.len()
            )));
        }
        Ok(Self {
            alphabet,
            matrix: None,
        })
    }

    pub fn alphabet(&self) -> &AlphabetSpec {
        &self.alphabet
    }

    /// Matrix built by the last successful key operation
    pub fn matrix(&self) -> Option<&Matrix> {
        self.matrix.as_ref()
    }

    pub fn validator(&self) -> Validator<'_> {
        Validator::new(&self.alphabet)
    }

    pub fn describe(&self) -> AlphabetInfo {
        self.alphabet.describe()
    }

    /// Validate `key` and replace the current matrix with one built from it
    pub fn build_matrix(&mut self, key: &str) -> Result<&Matrix> {
        self.validator().validate_key(key)?;
        let matrix = Matrix::create_from_key(&self.alphabet, key);
        Ok(self.matrix.insert(matrix))
    }

    pub fn prepare_text(&self, text: &str) -> Vec<Digraph> {
        TextPreprocessor::new(&self.alphabet).prepare(text)
    }

    pub fn encrypt(&mut self, key: &str, plaintext: &str) -> Result<String> {
        self.validator().validate_text(plaintext)?;
        let pairs = self.prepare_text(plaintext);
        debug!("encrypting {} digraphs", pairs.len());

        let crypto = self.cryptographer(key)?;
        let out: Vec<Digraph> = pairs
            .into_iter()
            .map(|pair| crypto.substitute(pair, Direction::Encrypt))
            .collect();
        Ok(join_pairs(&out))
    }

    /// Decrypt `ciphertext` taken two characters at a time.
    ///
    /// Ciphertext is expected to be well-formed pairs: no doubled-letter
    /// repair happens here, and a trailing odd character is returned as-is.
    pub fn decrypt(&mut self, key: &str, ciphertext: &str) -> Result<String> {
        self.validator().validate_text(ciphertext)?;
        let chars = normalize(ciphertext);
        debug!("decrypting {} characters", chars.len());

        let crypto = self.cryptographer(key)?;
        let mut out = String::with_capacity(chars.len());
        for chunk in chars.chunks(2) {
            match chunk {
                &[a, b] => {
                    let Digraph(x, y) = crypto.substitute(Digraph(a, b), Direction::Decrypt);
                    out.push(x);
                    out.push(y);
                }
                &[lone] => out.push(lone),
                _ => {}
            }
        }
        Ok(out)
    }

    fn cryptographer(&mut self, key: &str) -> Result<Cryptographer<'_>> {
        let separator = self.alphabet.separator();
        let matrix = self.build_matrix(key)?;
        Ok(Cryptographer::new(matrix, separator))
    }
}
