//! The 8x8 board grid.

use chess_core::{Color, Piece, PieceKind, Square};
use std::fmt;

/// The board grid: 8x8 cells indexed `[row][col]`, row 0 at the top of
/// the printed board (black's back rank), columns running from file a to
/// file h.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// Creates a board with the standard starting setup.
    pub fn new() -> Self {
        use PieceKind::*;
        let back = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];
        let mut board = Board::empty();
        for (col, &kind) in back.iter().enumerate() {
            board.grid[0][col] = Some(Piece::new(Color::Black, kind));
            board.grid[7][col] = Some(Piece::new(Color::White, kind));
        }
        for col in 0..8 {
            board.grid[1][col] = Some(Piece::new(Color::Black, Pawn));
            board.grid[6][col] = Some(Piece::new(Color::White, Pawn));
        }
        board
    }

    /// Creates an empty board.
    pub const fn empty() -> Self {
        Board {
            grid: [[None; 8]; 8],
        }
    }

    /// Returns the cell at the given square.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.grid[sq.row() as usize][sq.col() as usize]
    }

    /// Sets the cell at the given square.
    #[inline]
    pub fn set(&mut self, sq: Square, cell: Option<Piece>) {
        self.grid[sq.row() as usize][sq.col() as usize] = cell;
    }

    /// Iterates over every square in row-major order.
    pub fn squares() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square::new(row, col)))
    }

    /// Returns the square of the first piece of the given color and kind,
    /// scanning in row-major order.
    pub fn find(&self, color: Color, kind: PieceKind) -> Option<Square> {
        Self::squares().find(|&sq| self.piece_at(sq) == Some(Piece::new(color, kind)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    /// Renders an ASCII diagram, one row per line, `.` for empty cells.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.grid {
            for (col, cell) in row.iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                match cell {
                    Some(piece) => write!(f, "{}", piece.to_char())?,
                    None => f.write_str(".")?,
                }
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn standard_setup() {
        let board = Board::new();
        assert_eq!(
            board.piece_at(sq("e1")),
            Some(Piece::new(Color::White, PieceKind::King))
        );
        assert_eq!(
            board.piece_at(sq("d8")),
            Some(Piece::new(Color::Black, PieceKind::Queen))
        );
        assert_eq!(
            board.piece_at(sq("a2")),
            Some(Piece::new(Color::White, PieceKind::Pawn))
        );
        assert_eq!(board.piece_at(sq("e4")), None);
    }

    #[test]
    fn set_and_get() {
        let mut board = Board::empty();
        let rook = Piece::new(Color::Black, PieceKind::Rook);
        board.set(sq("c3"), Some(rook));
        assert_eq!(board.piece_at(sq("c3")), Some(rook));
        board.set(sq("c3"), None);
        assert_eq!(board.piece_at(sq("c3")), None);
    }

    #[test]
    fn find_piece() {
        let board = Board::new();
        assert_eq!(board.find(Color::White, PieceKind::King), Some(sq("e1")));
        assert_eq!(board.find(Color::Black, PieceKind::King), Some(sq("e8")));
        assert_eq!(Board::empty().find(Color::White, PieceKind::King), None);
    }

    #[test]
    fn squares_covers_board() {
        assert_eq!(Board::squares().count(), 64);
    }

    #[test]
    fn display_startpos() {
        let rendered = Board::new().to_string();
        let expected = "\
r n b q k b n r
p p p p p p p p
. . . . . . . .
. . . . . . . .
. . . . . . . .
. . . . . . . .
P P P P P P P P
R N B Q K B N R
";
        assert_eq!(rendered, expected);
    }
}
