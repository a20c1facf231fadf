use crate::cipher::{Digraph, Matrix};
use log::trace;

/// Substitution direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

impl Direction {
    fn step(self) -> isize {
        match self {
            Self::Encrypt => 1,
            Self::Decrypt => -1,
        }
    }
}

/// Applies the Playfair row, column and rectangle rules against a matrix
#[derive(Debug, Clone, Copy)]
pub struct Cryptographer<'a> {
    matrix: &'a Matrix,
    separator: char,
}

impl<'a> Cryptographer<'a> {
    pub fn new(matrix: &'a Matrix, separator: char) -> Self {
        Self { matrix, separator }
    }

    pub fn encrypt_pair(&self, pair: Digraph) -> Digraph {
        self.substitute(pair, Direction::Encrypt)
    }

    pub fn decrypt_pair(&self, pair: Digraph) -> Digraph {
        self.substitute(pair, Direction::Decrypt)
    }

    /// Substitute one digraph.
    ///
    /// Pairs containing the separator or a letter without a matrix cell are
    /// returned unchanged. Row and column shifts skip empty cells, so they
    /// stay invertible on partially filled grids. A rectangle whose opposite
    /// corners include an empty cell is returned unchanged.
    pub fn substitute(&self, pair: Digraph, direction: Direction) -> Digraph {
        let Digraph(a, b) = pair;
        if a == self.separator || b == self.separator {
            trace!("{} passes through: separator", pair);
            return pair;
        }

        let (Some((r1, c1)), Some((r2, c2))) =
            (self.matrix.position_of(a), self.matrix.position_of(b))
        else {
            trace!("{} passes through: not in matrix", pair);
            return pair;
        };

        let out = if r1 == r2 {
            Digraph(
                self.shift_along_row(r1, c1, direction),
                self.shift_along_row(r2, c2, direction),
            )
        } else if c1 == c2 {
            Digraph(
                self.shift_along_col(r1, c1, direction),
                self.shift_along_col(r2, c2, direction),
            )
        } else {
            match (self.matrix.char_at(r1, c2), self.matrix.char_at(r2, c1)) {
                (Some(x), Some(y)) => Digraph(x, y),
                _ => {
                    trace!("{} passes through: empty rectangle corner", pair);
                    pair
                }
            }
        };

        trace!("{:?} {} -> {}", direction, pair, out);
        out
    }

    /// Next filled cell along `row`, wrapping around the columns
    fn shift_along_row(&self, row: usize, col: usize, direction: Direction) -> char {
        let cols = self.matrix.cols();
        let mut c = col;
        loop {
            c = wrap(c, direction.step(), cols);
            if let Some(ch) = self.matrix.char_at(row, c) {
                return ch;
            }
        }
    }

    /// Next filled cell along `col`, wrapping around the rows
    fn shift_along_col(&self, row: usize, col: usize, direction: Direction) -> char {
        let rows = self.matrix.rows();
        let mut r = row;
        loop {
            r = wrap(r, direction.step(), rows);
            if let Some(ch) = self.matrix.char_at(r, col) {
                return ch;
            }
        }
    }
}

fn wrap(index: usize, step: isize, len: usize) -> usize {
    (index as isize + step).rem_euclid(len as isize) as usize
}
