use crate::alphabet::{to_upper, AlphabetSpec};
use crate::cipher::MatrixDimensions;
use log::debug;
use std::collections::HashMap;
use std::fmt;

/// Key-derived grid of unique alphabet letters.
///
/// Cells past the end of the alphabet stay empty. The position map is
/// always the exact inverse of the filled cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    dims: MatrixDimensions,
    cells: Vec<Option<char>>,
    positions: HashMap<char, (usize, usize)>,
    keyword: String,
}

impl Matrix {
    /// Build a matrix for `alphabet` from `key`.
    ///
    /// Key characters are uppercased and kept in first-seen order when they
    /// belong to the alphabet; anything else (the separator included) is
    /// dropped. The remaining alphabet letters follow in canonical order.
    pub fn create_from_key(alphabet: &AlphabetSpec, key: &str) -> Self {
        let dims = alphabet.dimensions();

        let mut sequence: Vec<char> = Vec::with_capacity(alphabet.len());
        for c in key.chars().map(to_upper) {
            if alphabet.contains(c) && !sequence.contains(&c) {
                sequence.push(c);
            }
        }
        let keyword: String = sequence.iter().collect();

        for &c in alphabet.letters() {
            if !sequence.contains(&c) {
                sequence.push(c);
            }
        }

        let mut cells = vec![None; dims.cells()];
        let mut positions = HashMap::with_capacity(sequence.len());
        for (index, c) in sequence.into_iter().take(dims.cells()).enumerate() {
            cells[index] = Some(c);
            positions.insert(c, (index / dims.cols, index % dims.cols));
        }

        debug!(
            "built {} matrix for '{}' with keyword {}",
            dims,
            alphabet.name(),
            keyword
        );

        Self {
            dims,
            cells,
            positions,
            keyword,
        }
    }

    pub fn dimensions(&self) -> MatrixDimensions {
        self.dims
    }

    pub fn rows(&self) -> usize {
        self.dims.rows
    }

    pub fn cols(&self) -> usize {
        self.dims.cols
    }

    /// Deduplicated key letters that lead the matrix
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn position_of(&self, c: char) -> Option<(usize, usize)> {
        self.positions.get(&c).copied()
    }

    pub fn char_at(&self, row: usize, col: usize) -> Option<char> {
        if row >= self.dims.rows || col >= self.dims.cols {
            return None;
        }
        self.cells[row * self.dims.cols + col]
    }

    /// Number of filled cells
    pub fn filled(&self) -> usize {
        self.positions.len()
    }

    /// Iterate over the grid one row at a time
    pub fn rows_iter(&self) -> impl Iterator<Item = &[Option<char>]> {
        self.cells.chunks(self.dims.cols)
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows_iter().enumerate() {
            let cells: Vec<String> = row
                .iter()
                .map(|cell| cell.map(String::from).unwrap_or_else(|| " ".to_string()))
                .collect();
            writeln!(f, "Row {}: {}", i + 1, cells.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn english() -> AlphabetSpec {
        AlphabetSpec::new("ABCDEFGHIKLMNOPQRSTUVWXYZ", 'J', "English")
    }

    fn row(matrix: &Matrix, r: usize) -> String {
        (0..matrix.cols())
            .map(|c| matrix.char_at(r, c).unwrap_or(' '))
            .collect()
    }

    #[test]
    fn test_playfair_key_layout() {
        let matrix = Matrix::create_from_key(&english(), "PLAYFAIR");
        assert_eq!(matrix.keyword(), "PLAYFIR");
        assert_eq!(row(&matrix, 0), "PLAYF");
        assert_eq!(row(&matrix, 1), "IRBCD");
        assert_eq!(row(&matrix, 2), "EGHKM");
        assert_eq!(row(&matrix, 4), "UVWXZ");
    }

    #[test]
    fn test_key_is_case_insensitive_and_drops_foreign_chars() {
        let a = Matrix::create_from_key(&english(), "playfair");
        let b = Matrix::create_from_key(&english(), "P-L AYJF4AIR");
        assert_eq!(a, b);
        assert_eq!(a.position_of('J'), None);
    }

    #[test]
    fn test_positions_invert_cells() {
        let matrix = Matrix::create_from_key(&english(), "MONARCHY");
        assert_eq!(matrix.filled(), 25);
        for r in 0..matrix.rows() {
            for c in 0..matrix.cols() {
                let ch = matrix.char_at(r, c).unwrap();
                assert_eq!(matrix.position_of(ch), Some((r, c)));
            }
        }
    }

    #[test]
    fn test_partial_grid_leaves_empty_cells() {
        let romanian = AlphabetSpec::new("AĂÂBCDEFGHIÎJKLMNOPQRSȘTȚUVWXYZ", 'K', "Romanian");
        let matrix = Matrix::create_from_key(&romanian, "CRIPTARE");
        assert_eq!(matrix.rows(), 5);
        assert_eq!(matrix.cols(), 6);
        assert_eq!(matrix.filled(), 30);

        let alphabet = AlphabetSpec::new("ABCDEFGHIJKLMNOPQRSTUVWXYZ", '*', "Latin26");
        let matrix = Matrix::create_from_key(&alphabet, "KEYWORD");
        assert_eq!(matrix.filled(), 26);
        assert!(matrix.char_at(4, 1).is_some());
        assert_eq!(matrix.char_at(4, 2), None);
        assert_eq!(matrix.char_at(4, 5), None);
    }

    #[test]
    fn test_char_at_out_of_bounds() {
        let matrix = Matrix::create_from_key(&english(), "PLAYFAIR");
        assert_eq!(matrix.char_at(5, 0), None);
        assert_eq!(matrix.char_at(0, 5), None);
    }

    #[test]
    fn test_display() {
        let matrix = Matrix::create_from_key(&english(), "PLAYFAIR");
        let text = matrix.to_string();
        assert!(text.starts_with("Row 1: P L A Y F\n"));
        assert!(text.contains("Row 2: I R B C D\n"));
    }
}
