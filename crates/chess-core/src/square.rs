//! Board square representation.

use std::fmt;

/// A square on the chess board, addressed by row and column.
///
/// The grid is oriented the way a board is printed: row 0 is black's back
/// rank, row 7 is white's back rank, and columns 0-7 map to files a-h.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Creates a square from row and column indices.
    ///
    /// Both indices must be in 0-7; out-of-range values are caught by a
    /// debug assertion.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < 8 && col < 8);
        Square { row, col }
    }

    /// Returns the square offset by the given row/column deltas, or `None`
    /// if the result would leave the board.
    #[inline]
    pub const fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if row >= 0 && row < 8 && col >= 0 && col < 8 {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Parses a square from algebraic notation (e.g., "e4").
    pub const fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let col = bytes[0].wrapping_sub(b'a');
        let rank = bytes[1].wrapping_sub(b'1');
        if col < 8 && rank < 8 {
            Some(Square { row: 7 - rank, col })
        } else {
            None
        }
    }

    /// Returns the row index (0-7, top of the printed board to bottom).
    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column index (0-7, files a-h).
    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the file character ('a'-'h').
    #[inline]
    pub const fn file_char(self) -> char {
        (b'a' + self.col) as char
    }

    /// Returns the rank character ('1'-'8').
    #[inline]
    pub const fn rank_char(self) -> char {
        (b'1' + (7 - self.row)) as char
    }

    /// Returns the algebraic notation for this square.
    pub fn to_algebraic(self) -> String {
        format!("{}{}", self.file_char(), self.rank_char())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.to_algebraic())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn square_new() {
        let e4 = Square::new(4, 4);
        assert_eq!(e4.row(), 4);
        assert_eq!(e4.col(), 4);
        assert_eq!(e4.to_algebraic(), "e4");
    }

    #[test]
    fn square_from_algebraic() {
        assert_eq!(Square::from_algebraic("a1"), Some(Square::new(7, 0)));
        assert_eq!(Square::from_algebraic("h8"), Some(Square::new(0, 7)));
        assert_eq!(Square::from_algebraic("e4"), Some(Square::new(4, 4)));
        assert_eq!(Square::from_algebraic("i1"), None);
        assert_eq!(Square::from_algebraic("a9"), None);
        assert_eq!(Square::from_algebraic(""), None);
    }

    #[test]
    fn square_offset() {
        let e4 = Square::from_algebraic("e4").unwrap();
        assert_eq!(e4.offset(-1, 0), Square::from_algebraic("e5"));
        assert_eq!(e4.offset(1, 1), Square::from_algebraic("f3"));
        assert_eq!(e4.offset(-2, -1), Square::from_algebraic("d6"));

        let a1 = Square::from_algebraic("a1").unwrap();
        assert_eq!(a1.offset(1, 0), None);
        assert_eq!(a1.offset(0, -1), None);
        let h8 = Square::from_algebraic("h8").unwrap();
        assert_eq!(h8.offset(-1, 0), None);
        assert_eq!(h8.offset(0, 1), None);
    }

    #[test]
    fn square_display() {
        let g6 = Square::new(2, 6);
        assert_eq!(format!("{}", g6), "g6");
        assert_eq!(format!("{:?}", g6), "Square(g6)");
    }

    proptest! {
        #[test]
        fn algebraic_roundtrip(row in 0u8..8, col in 0u8..8) {
            let sq = Square::new(row, col);
            prop_assert_eq!(Square::from_algebraic(&sq.to_algebraic()), Some(sq));
        }
    }
}
