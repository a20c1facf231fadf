use serde::{Deserialize, Serialize};
use std::fmt;

/// Grid layout of a Playfair matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixDimensions {
    pub rows: usize,
    pub cols: usize,
}

impl MatrixDimensions {
    /// Total number of cells, filled or not
    pub fn cells(&self) -> usize {
        self.rows * self.cols
    }
}

impl fmt::Display for MatrixDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}×{}", self.rows, self.cols)
    }
}

/// Pick the matrix layout for an alphabet of `letters` characters.
///
/// The three fixed breakpoints cover the usual national alphabets
/// (25 for English, up to 30 for Romanian, up to 36 for Russian).
/// Larger alphabets get `floor(sqrt(n))` rows and as many columns as
/// needed to hold every letter. Always satisfies `rows * cols >= letters`.
pub fn dimensions(letters: usize) -> MatrixDimensions {
    let (rows, cols) = match letters {
        0..=25 => (5, 5),
        26..=30 => (5, 6),
        31..=36 => (6, 6),
        n => {
            let rows = integer_sqrt(n);
            (rows, n.div_ceil(rows))
        }
    };
    MatrixDimensions { rows, cols }
}

/// Largest `r` with `r * r <= n`
fn integer_sqrt(n: usize) -> usize {
    let mut r = (n as f64).sqrt() as usize;
    while r * r > n {
        r -= 1;
    }
    while (r + 1) * (r + 1) <= n {
        r += 1;
    }
    r
}
