use playfair::cipher::{dimensions, Cryptographer, Digraph, Matrix};
use playfair::presets::Preset;
use playfair::{AlphabetSpec, Playfair};
use proptest::prelude::*;

/// 58 distinct uppercase letters, Latin then Cyrillic
const POOL: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZАБВГДЕЖЗИЙКЛМНОПРСТУФХЦЧШЩЪЫЬЭЮЯ";

fn alphabet_of(size: usize) -> AlphabetSpec {
    let letters: String = POOL.chars().take(size).collect();
    AlphabetSpec::new(&letters, '*', "Pool")
}

fn key_from(alphabet: &AlphabetSpec, indices: &[usize]) -> String {
    indices
        .iter()
        .map(|i| alphabet.letters()[i % alphabet.len()])
        .collect()
}

proptest! {
    #[test]
    fn dimensions_hold_every_letter(n in 1usize..10_000) {
        let dims = dimensions(n);
        prop_assert!(dims.rows >= 1 && dims.cols >= 1);
        prop_assert!(dims.rows * dims.cols >= n);
    }

    #[test]
    fn matrix_cells_are_unique_and_inverted(
        size in 2usize..=58,
        key in prop::collection::vec(0usize..58, 0..40),
    ) {
        let alphabet = alphabet_of(size);
        let matrix = Matrix::create_from_key(&alphabet, &key_from(&alphabet, &key));

        let mut seen = Vec::new();
        for r in 0..matrix.rows() {
            for c in 0..matrix.cols() {
                if let Some(ch) = matrix.char_at(r, c) {
                    prop_assert!(alphabet.contains(ch));
                    prop_assert!(!seen.contains(&ch));
                    prop_assert_eq!(matrix.position_of(ch), Some((r, c)));
                    seen.push(ch);
                }
            }
        }
        prop_assert_eq!(seen.len(), alphabet.len());
        prop_assert_eq!(matrix.filled(), alphabet.len());
    }

    #[test]
    fn pair_roundtrip_on_any_grid(
        size in 2usize..=58,
        key in prop::collection::vec(0usize..58, 7..20),
        a in 0usize..58,
        b in 0usize..58,
    ) {
        let alphabet = alphabet_of(size);
        let matrix = Matrix::create_from_key(&alphabet, &key_from(&alphabet, &key));
        let crypto = Cryptographer::new(&matrix, alphabet.separator());

        let pair = Digraph(alphabet.letters()[a % size], alphabet.letters()[b % size]);
        let sealed = crypto.encrypt_pair(pair);
        prop_assert_eq!(crypto.decrypt_pair(sealed), pair);
    }

    #[test]
    fn message_roundtrip_english(
        letters in prop::collection::vec(0usize..25, 0..60),
    ) {
        let spec = Preset::English.spec();
        let mut text: Vec<char> = letters.iter().map(|&i| spec.letters()[i]).collect();
        text.dedup();
        if text.len() % 2 == 1 {
            text.pop();
        }
        let plaintext: String = text.into_iter().collect();

        let mut cipher = Playfair::new(spec).unwrap();
        let ciphertext = cipher.encrypt("PLAYFAIR", &plaintext).unwrap();
        prop_assert_eq!(ciphertext.chars().count(), plaintext.chars().count());
        prop_assert_eq!(cipher.decrypt("PLAYFAIR", &ciphertext).unwrap(), plaintext);
    }

    #[test]
    fn alphabet_construction_is_idempotent(letters in "[a-zA-Z]{1,40}", sep in "[A-Z]") {
        let sep = sep.chars().next().unwrap();
        let first = AlphabetSpec::new(&letters, sep, "Custom");
        let second = AlphabetSpec::new(&letters, sep, "Custom");
        prop_assert!(!first.contains(first.separator()));
        prop_assert_eq!(first, second);
    }
}
