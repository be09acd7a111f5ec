//! Move representation.

use crate::{Piece, PieceKind, Square};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A single chess move, recorded with enough context to undo it.
///
/// Two moves compare equal when their endpoints match; the remaining
/// fields are metadata derived from the position the move was generated
/// in. Endpoint equality is what lets a bare square pair coming from a
/// UI click be matched against the generated legal-move list.
#[derive(Debug, Clone, Copy, Eq)]
pub struct Move {
    /// The square the piece moves from.
    pub from: Square,
    /// The square the piece moves to.
    pub to: Square,
    /// The piece being moved.
    pub piece_moved: Piece,
    /// The piece removed from the board, if any. For an en passant
    /// capture this is the pawn beside the destination square, which is
    /// itself empty.
    pub piece_captured: Option<Piece>,
    /// True if a pawn reaches its promotion row with this move.
    pub is_promotion: bool,
    /// True if this is an en passant capture.
    pub is_en_passant: bool,
    /// True if this is a castling move (king two columns sideways).
    pub is_castle: bool,
}

impl Move {
    /// Creates an ordinary move, including ordinary captures.
    ///
    /// Promotion is inferred, not requested: a pawn arriving on its
    /// promotion row promotes (always to a queen when applied).
    pub fn new(from: Square, to: Square, piece_moved: Piece, piece_captured: Option<Piece>) -> Self {
        let is_promotion =
            piece_moved.kind == PieceKind::Pawn && to.row() == piece_moved.color.promotion_row();
        Move {
            from,
            to,
            piece_moved,
            piece_captured,
            is_promotion,
            is_en_passant: false,
            is_castle: false,
        }
    }

    /// Creates an en passant capture.
    ///
    /// The captured pawn is recorded explicitly because it does not stand
    /// on the destination square.
    pub fn en_passant(from: Square, to: Square, piece_moved: Piece) -> Self {
        let captured = Piece::new(piece_moved.color.opposite(), PieceKind::Pawn);
        Move {
            from,
            to,
            piece_moved,
            piece_captured: Some(captured),
            is_promotion: false,
            is_en_passant: true,
            is_castle: false,
        }
    }

    /// Creates a castling move. The rook relocation is implied by the
    /// king's destination column.
    pub fn castle(from: Square, to: Square, piece_moved: Piece) -> Self {
        Move {
            from,
            to,
            piece_moved,
            piece_captured: None,
            is_promotion: false,
            is_en_passant: false,
            is_castle: true,
        }
    }

    /// Returns true if this move removes an enemy piece.
    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.piece_captured.is_some()
    }
}

impl PartialEq for Move {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to
    }
}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from.hash(state);
        self.to.hash(state);
    }
}

impl fmt::Display for Move {
    /// Renders the short notation: `0-0`/`0-0-0` for castles, destination
    /// square (or `<file>x<dest>`) for pawn moves, `<letter>[x]<dest>`
    /// otherwise. No disambiguation and no check/mate suffixes.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_castle {
            return f.write_str(if self.to.col() == 6 { "0-0" } else { "0-0-0" });
        }
        let dest = self.to.to_algebraic();
        if self.piece_moved.kind == PieceKind::Pawn {
            if self.is_capture() {
                write!(f, "{}x{}", self.from.file_char(), dest)
            } else {
                f.write_str(&dest)
            }
        } else if self.is_capture() {
            write!(f, "{}x{}", self.piece_moved.kind.letter(), dest)
        } else {
            write!(f, "{}{}", self.piece_moved.kind.letter(), dest)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    fn piece(color: Color, kind: PieceKind) -> Piece {
        Piece::new(color, kind)
    }

    #[test]
    fn equality_ignores_metadata() {
        let quiet = Move::new(
            sq("e2"),
            sq("e4"),
            piece(Color::White, PieceKind::Pawn),
            None,
        );
        let loaded = Move::new(
            sq("e2"),
            sq("e4"),
            piece(Color::White, PieceKind::Queen),
            Some(piece(Color::Black, PieceKind::Rook)),
        );
        assert_eq!(quiet, loaded);

        let other = Move::new(
            sq("e2"),
            sq("e3"),
            piece(Color::White, PieceKind::Pawn),
            None,
        );
        assert_ne!(quiet, other);
    }

    #[test]
    fn promotion_is_inferred() {
        let white = piece(Color::White, PieceKind::Pawn);
        assert!(Move::new(sq("e7"), sq("e8"), white, None).is_promotion);
        assert!(!Move::new(sq("e6"), sq("e7"), white, None).is_promotion);

        let black = piece(Color::Black, PieceKind::Pawn);
        assert!(Move::new(sq("d2"), sq("d1"), black, None).is_promotion);

        // Only pawns promote.
        let rook = piece(Color::White, PieceKind::Rook);
        assert!(!Move::new(sq("e7"), sq("e8"), rook, None).is_promotion);
    }

    #[test]
    fn en_passant_records_removed_pawn() {
        let m = Move::en_passant(sq("e5"), sq("d6"), piece(Color::White, PieceKind::Pawn));
        assert!(m.is_en_passant);
        assert_eq!(m.piece_captured, Some(piece(Color::Black, PieceKind::Pawn)));
        assert!(m.is_capture());
    }

    #[test]
    fn notation_castles() {
        let king = piece(Color::White, PieceKind::King);
        assert_eq!(Move::castle(sq("e1"), sq("g1"), king).to_string(), "0-0");
        assert_eq!(Move::castle(sq("e1"), sq("c1"), king).to_string(), "0-0-0");
    }

    #[test]
    fn notation_pawn_moves() {
        let pawn = piece(Color::White, PieceKind::Pawn);
        assert_eq!(Move::new(sq("e2"), sq("e4"), pawn, None).to_string(), "e4");
        let capture = Move::new(
            sq("e4"),
            sq("d5"),
            pawn,
            Some(piece(Color::Black, PieceKind::Pawn)),
        );
        assert_eq!(capture.to_string(), "exd5");
        let ep = Move::en_passant(sq("e5"), sq("d6"), pawn);
        assert_eq!(ep.to_string(), "exd6");
    }

    #[test]
    fn notation_piece_moves() {
        let knight = piece(Color::White, PieceKind::Knight);
        assert_eq!(Move::new(sq("g1"), sq("f3"), knight, None).to_string(), "Nf3");
        let capture = Move::new(
            sq("f3"),
            sq("e5"),
            knight,
            Some(piece(Color::Black, PieceKind::Pawn)),
        );
        assert_eq!(capture.to_string(), "Nxe5");
    }
}
