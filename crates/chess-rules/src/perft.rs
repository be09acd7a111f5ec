//! Perft: exhaustive legal-move-path counting.
//!
//! Counting the leaf nodes of the legal game tree to a fixed depth and
//! comparing against published figures exercises every generator and
//! the apply/undo machinery at once, which makes perft the regression
//! oracle of choice for rule changes.

use crate::movegen;
use crate::Position;
use chess_core::Move;

/// Counts the leaf nodes of the legal move tree at the given depth.
///
/// The position is mutated during the walk but restored before
/// returning.
pub fn perft(pos: &mut Position, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = movegen::legal_moves(pos);
    if depth == 1 {
        return moves.len() as u64;
    }
    let mut nodes = 0;
    for &m in &moves {
        pos.apply_move(m);
        nodes += perft(pos, depth - 1);
        pos.undo_move();
    }
    nodes
}

/// Perft split per root move, for pinpointing which move's subtree
/// diverges from a reference count.
pub fn perft_divide(pos: &mut Position, depth: u32) -> Vec<(Move, u64)> {
    let moves = movegen::legal_moves(pos);
    let mut counts = Vec::with_capacity(moves.len());
    for &m in &moves {
        pos.apply_move(m);
        counts.push((m, perft(pos, depth.saturating_sub(1))));
        pos.undo_move();
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Board;
    use chess_core::{Color, Piece, PieceKind, Square};

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn startpos_shallow() {
        let mut pos = Position::new();
        assert_eq!(perft(&mut pos, 1), 20);
        assert_eq!(perft(&mut pos, 2), 400);
        assert_eq!(perft(&mut pos, 3), 8902);
    }

    #[test]
    fn startpos_depth_four() {
        let mut pos = Position::new();
        assert_eq!(perft(&mut pos, 4), 197_281);
    }

    /// A sparse rook endgame with pins, a discovered check, and en
    /// passant in its tree.
    fn rook_endgame() -> Position {
        let mut board = Board::empty();
        let w = |kind| Some(Piece::new(Color::White, kind));
        let b = |kind| Some(Piece::new(Color::Black, kind));
        board.set(sq("c7"), b(PieceKind::Pawn));
        board.set(sq("d6"), b(PieceKind::Pawn));
        board.set(sq("a5"), w(PieceKind::King));
        board.set(sq("b5"), w(PieceKind::Pawn));
        board.set(sq("h5"), b(PieceKind::Rook));
        board.set(sq("b4"), w(PieceKind::Rook));
        board.set(sq("f4"), b(PieceKind::Pawn));
        board.set(sq("h4"), b(PieceKind::King));
        board.set(sq("e2"), w(PieceKind::Pawn));
        board.set(sq("g2"), w(PieceKind::Pawn));
        Position::from_setup(board, Color::White).unwrap()
    }

    #[test]
    fn rook_endgame_counts() {
        let mut pos = rook_endgame();
        assert_eq!(perft(&mut pos, 1), 14);
        assert_eq!(perft(&mut pos, 2), 191);
        assert_eq!(perft(&mut pos, 3), 2812);
    }

    #[test]
    fn walk_restores_the_position() {
        let mut pos = Position::new();
        perft(&mut pos, 3);
        assert_eq!(pos.board(), &Board::new());
        assert_eq!(pos.side_to_move(), Color::White);
        assert_eq!(pos.ply_count(), 0);
    }

    #[test]
    fn divide_sums_to_perft() {
        let mut pos = Position::new();
        let total: u64 = perft_divide(&mut pos, 3).iter().map(|(_, n)| n).sum();
        assert_eq!(total, perft(&mut pos, 3));
    }
}
