//! Chess piece representation.

use crate::Color;

/// The six kinds of chess pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceKind {
    /// All piece kinds in order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Returns the notation letter for this piece kind.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        };
        write!(f, "{}", name)
    }
}

/// A colored piece as it sits on the board.
///
/// A board cell is `Option<Piece>`, so together with the empty cell there
/// are thirteen possible cell states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    /// Creates a piece of the given color and kind.
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Piece { color, kind }
    }

    /// Returns the single-character code for this piece: uppercase for
    /// White, lowercase for Black.
    #[inline]
    pub const fn to_char(self) -> char {
        match self.color {
            Color::White => self.kind.letter(),
            Color::Black => self.kind.letter().to_ascii_lowercase(),
        }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters() {
        assert_eq!(PieceKind::Pawn.letter(), 'P');
        assert_eq!(PieceKind::Knight.letter(), 'N');
        assert_eq!(PieceKind::King.letter(), 'K');
    }

    #[test]
    fn piece_to_char() {
        assert_eq!(Piece::new(Color::White, PieceKind::Queen).to_char(), 'Q');
        assert_eq!(Piece::new(Color::Black, PieceKind::Queen).to_char(), 'q');
        assert_eq!(Piece::new(Color::White, PieceKind::Pawn).to_char(), 'P');
        assert_eq!(Piece::new(Color::Black, PieceKind::Knight).to_char(), 'n');
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", PieceKind::Knight), "Knight");
        assert_eq!(format!("{}", Piece::new(Color::Black, PieceKind::Rook)), "r");
    }
}
