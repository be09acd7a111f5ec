//! Pseudo-legal move generation, attack queries, and the legality filter.
//!
//! Generators take the moving color as an explicit parameter, so a
//! position can be examined from either side's perspective without
//! touching the side-to-move flag. Only [`legal_moves`] mutates the
//! position, and it leaves no trace of its simulations.

use crate::{Board, Position};
use chess_core::{Color, Move, Piece, PieceKind, Square};

/// A list of candidate or legal moves.
#[derive(Clone, Default)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    /// Creates an empty move list.
    pub fn new() -> Self {
        MoveList { moves: Vec::new() }
    }

    /// Adds a move to the list.
    #[inline]
    pub fn push(&mut self, m: Move) {
        self.moves.push(m);
    }

    /// Returns the number of moves.
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Returns true if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Returns a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    /// Returns true if the list holds a move with the same endpoints.
    pub fn contains(&self, m: &Move) -> bool {
        self.moves.contains(m)
    }

    /// Finds the generated move with the given endpoints, with its full
    /// metadata. This is how a bare square pair from a UI becomes a
    /// trusted move.
    pub fn find(&self, from: Square, to: Square) -> Option<Move> {
        self.moves
            .iter()
            .copied()
            .find(|m| m.from == from && m.to == to)
    }

    /// Retains only moves for which the predicate returns true.
    pub fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&Move) -> bool,
    {
        self.moves.retain(f);
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.moves[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

const ROOK_DIRS: [(i8, i8); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];
const BISHOP_DIRS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];
const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Generates every pseudo-legal move for `us`: moves that obey piece
/// movement and occupancy rules but may leave the mover's own king
/// attacked. Castling is synthesized separately by [`castle_moves`].
pub fn pseudo_legal_moves(pos: &Position, us: Color) -> MoveList {
    let mut moves = MoveList::new();
    for sq in Board::squares() {
        let Some(piece) = pos.board.piece_at(sq) else {
            continue;
        };
        if piece.color != us {
            continue;
        }
        match piece.kind {
            PieceKind::Pawn => pawn_moves(pos, sq, piece, &mut moves),
            PieceKind::Rook => slider_moves(pos, sq, piece, &ROOK_DIRS, &mut moves),
            PieceKind::Bishop => slider_moves(pos, sq, piece, &BISHOP_DIRS, &mut moves),
            PieceKind::Queen => {
                slider_moves(pos, sq, piece, &ROOK_DIRS, &mut moves);
                slider_moves(pos, sq, piece, &BISHOP_DIRS, &mut moves);
            }
            PieceKind::Knight => step_moves(pos, sq, piece, &KNIGHT_OFFSETS, &mut moves),
            PieceKind::King => step_moves(pos, sq, piece, &KING_OFFSETS, &mut moves),
        }
    }
    moves
}

fn pawn_moves(pos: &Position, from: Square, pawn: Piece, moves: &mut MoveList) {
    let dir = pawn.color.row_direction();

    if let Some(fwd) = from.offset(dir, 0) {
        if pos.board.piece_at(fwd).is_none() {
            moves.push(Move::new(from, fwd, pawn, None));
            // Double advance only from the start row, through an empty
            // intermediate square.
            if from.row() == pawn.color.pawn_start_row() {
                if let Some(fwd2) = from.offset(2 * dir, 0) {
                    if pos.board.piece_at(fwd2).is_none() {
                        moves.push(Move::new(from, fwd2, pawn, None));
                    }
                }
            }
        }
    }

    for dc in [-1, 1] {
        let Some(to) = from.offset(dir, dc) else {
            continue;
        };
        match pos.board.piece_at(to) {
            Some(target) if target.color != pawn.color => {
                moves.push(Move::new(from, to, pawn, Some(target)));
            }
            None if pos.en_passant == Some(to) => {
                moves.push(Move::en_passant(from, to, pawn));
            }
            _ => {}
        }
    }
}

fn slider_moves(
    pos: &Position,
    from: Square,
    piece: Piece,
    dirs: &[(i8, i8)],
    moves: &mut MoveList,
) {
    for &(dr, dc) in dirs {
        let mut step = 1i8;
        while let Some(to) = from.offset(dr * step, dc * step) {
            match pos.board.piece_at(to) {
                None => moves.push(Move::new(from, to, piece, None)),
                Some(target) if target.color != piece.color => {
                    moves.push(Move::new(from, to, piece, Some(target)));
                    break;
                }
                Some(_) => break,
            }
            step += 1;
        }
    }
}

fn step_moves(
    pos: &Position,
    from: Square,
    piece: Piece,
    offsets: &[(i8, i8)],
    moves: &mut MoveList,
) {
    for &(dr, dc) in offsets {
        let Some(to) = from.offset(dr, dc) else {
            continue;
        };
        match pos.board.piece_at(to) {
            None => moves.push(Move::new(from, to, piece, None)),
            Some(target) if target.color != piece.color => {
                moves.push(Move::new(from, to, piece, Some(target)));
            }
            Some(_) => {}
        }
    }
}

/// Appends the castle moves available to `us`.
///
/// Castling needs the backing right, an empty corridor between king and
/// rook, and a safe path: the king's square and both squares it crosses
/// must be unattacked. Queenside additionally needs the b-file square
/// empty, though that square may be attacked.
pub fn castle_moves(pos: &Position, us: Color, moves: &mut MoveList) {
    let king_sq = pos.king_square(us);
    let them = us.opposite();
    if is_square_attacked(pos, king_sq, them) {
        return;
    }
    let king = Piece::new(us, PieceKind::King);

    if pos.castling.kingside(us) {
        if let (Some(f), Some(g)) = (king_sq.offset(0, 1), king_sq.offset(0, 2)) {
            if pos.board.piece_at(f).is_none()
                && pos.board.piece_at(g).is_none()
                && !is_square_attacked(pos, f, them)
                && !is_square_attacked(pos, g, them)
            {
                moves.push(Move::castle(king_sq, g, king));
            }
        }
    }

    if pos.castling.queenside(us) {
        if let (Some(d), Some(c), Some(b)) = (
            king_sq.offset(0, -1),
            king_sq.offset(0, -2),
            king_sq.offset(0, -3),
        ) {
            if pos.board.piece_at(d).is_none()
                && pos.board.piece_at(c).is_none()
                && pos.board.piece_at(b).is_none()
                && !is_square_attacked(pos, d, them)
                && !is_square_attacked(pos, c, them)
            {
                moves.push(Move::castle(king_sq, c, king));
            }
        }
    }
}

/// Returns true if `sq` is the destination of any of `by`'s pseudo-legal
/// moves.
///
/// Castling is not considered: a castle can never be the move that
/// delivers the attack under test, and excluding it keeps this query
/// non-recursive.
pub fn is_square_attacked(pos: &Position, sq: Square, by: Color) -> bool {
    pseudo_legal_moves(pos, by).as_slice().iter().any(|m| m.to == sq)
}

/// Returns true if the given color's king is attacked.
pub fn is_king_attacked(pos: &Position, color: Color) -> bool {
    is_square_attacked(pos, pos.king_square(color), color.opposite())
}

/// Generates all fully legal moves for the side to move and classifies
/// checkmate/stalemate.
///
/// Candidates are vetted by simulation: apply the move, ask whether the
/// mover's own king is attacked, undo. The en passant target and the
/// castling rights held at entry are restored before returning, so the
/// simulation is invisible to callers.
pub fn legal_moves(pos: &mut Position) -> MoveList {
    let entry_en_passant = pos.en_passant;
    let entry_castling = pos.castling;
    let us = pos.side_to_move;

    let mut moves = pseudo_legal_moves(pos, us);
    castle_moves(pos, us, &mut moves);

    moves.retain(|m| {
        pos.apply_move(*m);
        let safe = !is_king_attacked(pos, us);
        pos.undo_move();
        safe
    });

    if moves.is_empty() {
        let checked = is_king_attacked(pos, us);
        pos.in_checkmate = checked;
        pos.in_stalemate = !checked;
    } else {
        pos.in_checkmate = false;
        pos.in_stalemate = false;
    }

    pos.en_passant = entry_en_passant;
    pos.castling = entry_castling;
    moves
}
