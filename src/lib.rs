//! Playfair - digraph substitution cipher over configurable alphabets
//!
//! A key is folded into a rectangular matrix holding every letter of the
//! alphabet once. Text is split into letter pairs (digraphs) and each pair
//! is replaced according to where its two letters sit in the matrix.
//!
//! ## Substitution Rules
//!
//! ```text
//! same row     → each letter moves one cell right (left to decrypt)
//! same column  → each letter moves one cell down (up to decrypt)
//! rectangle    → each letter takes the column of the other one
//! ```
//!
//! One letter of the alphabet is reserved as the separator. It never gets
//! a cell; it splits doubled letters and pads odd-length text. Matrix size
//! follows the alphabet size (5×5 for English, 5×6 for Romanian, 6×6 for
//! Russian), and cells past the end of the alphabet stay empty.
//!
//! ## Example
//!
//! ```
//! use playfair::presets::Preset;
//! use playfair::Playfair;
//!
//! let mut cipher = Playfair::new(Preset::English.spec()).unwrap();
//! let ciphertext = cipher.encrypt("PLAYFAIR", "hide the gold").unwrap();
//! assert_eq!(ciphertext, "EBIMQMGHVRDJ");
//!
//! let plaintext = cipher.decrypt("PLAYFAIR", &ciphertext).unwrap();
//! assert_eq!(plaintext, "HIDETHEGOLDJ");
//! ```

pub mod alphabet;
pub mod cipher;
pub mod cli;
pub mod error;
pub mod presets;
pub mod session;

pub use alphabet::{AlphabetInfo, AlphabetSpec};
pub use cipher::{Digraph, Matrix, MatrixDimensions};
pub use error::{PlayfairError, Result};
pub use session::{configure, Playfair};
