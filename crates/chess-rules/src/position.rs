//! Position state and reversible move application.

use crate::Board;
use chess_core::{Color, Move, Piece, PieceKind, Square};
use thiserror::Error;

/// Per-side, per-wing castling eligibility.
///
/// Rights only ever go from held to revoked during forward play; the
/// only way a right comes back is [`Position::undo_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingRights {
    pub white_kingside: bool,
    pub white_queenside: bool,
    pub black_kingside: bool,
    pub black_queenside: bool,
}

impl CastlingRights {
    /// All four rights held.
    pub const ALL: CastlingRights = CastlingRights {
        white_kingside: true,
        white_queenside: true,
        black_kingside: true,
        black_queenside: true,
    };

    /// No rights held.
    pub const NONE: CastlingRights = CastlingRights {
        white_kingside: false,
        white_queenside: false,
        black_kingside: false,
        black_queenside: false,
    };

    /// Returns true if the given side may still castle kingside.
    #[inline]
    pub const fn kingside(self, color: Color) -> bool {
        match color {
            Color::White => self.white_kingside,
            Color::Black => self.black_kingside,
        }
    }

    /// Returns true if the given side may still castle queenside.
    #[inline]
    pub const fn queenside(self, color: Color) -> bool {
        match color {
            Color::White => self.white_queenside,
            Color::Black => self.black_queenside,
        }
    }

    /// Revokes the kingside right for a color.
    pub fn revoke_kingside(&mut self, color: Color) {
        match color {
            Color::White => self.white_kingside = false,
            Color::Black => self.black_kingside = false,
        }
    }

    /// Revokes the queenside right for a color.
    pub fn revoke_queenside(&mut self, color: Color) {
        match color {
            Color::White => self.white_queenside = false,
            Color::Black => self.black_queenside = false,
        }
    }

    /// Revokes both rights for a color.
    pub fn revoke_both(&mut self, color: Color) {
        self.revoke_kingside(color);
        self.revoke_queenside(color);
    }
}

/// Errors constructing a position from a custom board.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SetupError {
    #[error("no {0} king on the board")]
    MissingKing(Color),
}

/// A complete game position: the board grid plus every time-varying rule
/// fact, with enough history to undo any applied move exactly.
///
/// The king squares are cached and maintained incrementally on every
/// apply/undo rather than rescanned; debug builds verify the cache
/// against the grid after each mutation.
#[derive(Debug, Clone)]
pub struct Position {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) white_king: Square,
    pub(crate) black_king: Square,
    pub(crate) en_passant: Option<Square>,
    pub(crate) castling: CastlingRights,
    pub(crate) in_checkmate: bool,
    pub(crate) in_stalemate: bool,
    pub(crate) move_log: Vec<Move>,
    // Snapshots taken after each applied move, seeded with the initial
    // values, so undo restores the state preceding the popped move.
    pub(crate) en_passant_log: Vec<Option<Square>>,
    pub(crate) castling_log: Vec<CastlingRights>,
}

impl Position {
    /// Creates the standard starting position.
    pub fn new() -> Self {
        Position {
            board: Board::new(),
            side_to_move: Color::White,
            white_king: Square::new(7, 4),
            black_king: Square::new(0, 4),
            en_passant: None,
            castling: CastlingRights::ALL,
            in_checkmate: false,
            in_stalemate: false,
            move_log: Vec::new(),
            en_passant_log: vec![None],
            castling_log: vec![CastlingRights::ALL],
        }
    }

    /// Creates a position from a custom board.
    ///
    /// Castling rights are granted only where the king and the matching
    /// rook still stand on their home squares; there is no en passant
    /// target. Fails if either king is missing.
    pub fn from_setup(board: Board, side_to_move: Color) -> Result<Self, SetupError> {
        let white_king = board
            .find(Color::White, PieceKind::King)
            .ok_or(SetupError::MissingKing(Color::White))?;
        let black_king = board
            .find(Color::Black, PieceKind::King)
            .ok_or(SetupError::MissingKing(Color::Black))?;

        let castling = CastlingRights {
            white_kingside: Self::home_castle_pair(&board, Color::White, 7),
            white_queenside: Self::home_castle_pair(&board, Color::White, 0),
            black_kingside: Self::home_castle_pair(&board, Color::Black, 7),
            black_queenside: Self::home_castle_pair(&board, Color::Black, 0),
        };

        Ok(Position {
            board,
            side_to_move,
            white_king,
            black_king,
            en_passant: None,
            castling,
            in_checkmate: false,
            in_stalemate: false,
            move_log: Vec::new(),
            en_passant_log: vec![None],
            castling_log: vec![castling],
        })
    }

    fn home_castle_pair(board: &Board, color: Color, rook_col: u8) -> bool {
        let back = color.back_row();
        board.piece_at(Square::new(back, 4)) == Some(Piece::new(color, PieceKind::King))
            && board.piece_at(Square::new(back, rook_col))
                == Some(Piece::new(color, PieceKind::Rook))
    }

    /// Returns the board grid.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move.
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Returns the cached square of the given color's king.
    pub fn king_square(&self, color: Color) -> Square {
        match color {
            Color::White => self.white_king,
            Color::Black => self.black_king,
        }
    }

    /// Returns the en passant target square, if a two-square pawn advance
    /// just opened one.
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant
    }

    /// Returns the current castling rights.
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    /// Returns the moves applied so far, oldest first.
    pub fn move_log(&self) -> &[Move] {
        &self.move_log
    }

    /// Returns the number of plies played.
    pub fn ply_count(&self) -> usize {
        self.move_log.len()
    }

    /// Returns true if the last legality-filter run found the side to
    /// move checkmated.
    pub fn in_checkmate(&self) -> bool {
        self.in_checkmate
    }

    /// Returns true if the last legality-filter run found the side to
    /// move stalemated.
    pub fn in_stalemate(&self) -> bool {
        self.in_stalemate
    }

    /// Applies a move to the position.
    ///
    /// No legality check is performed; the caller must pass a move drawn
    /// from the legal-move list (or be the legality filter itself). The
    /// move and post-move rule snapshots are pushed onto the history, and
    /// the side to move flips.
    pub fn apply_move(&mut self, m: Move) {
        self.board.set(m.from, None);
        let placed = if m.is_promotion {
            // Auto-queen; there is no underpromotion choice.
            Piece::new(m.piece_moved.color, PieceKind::Queen)
        } else {
            m.piece_moved
        };
        self.board.set(m.to, Some(placed));

        if m.piece_moved.kind == PieceKind::King {
            match m.piece_moved.color {
                Color::White => self.white_king = m.to,
                Color::Black => self.black_king = m.to,
            }
        }

        if m.is_en_passant {
            // The captured pawn sits beside the destination: start row,
            // destination column.
            self.board.set(Square::new(m.from.row(), m.to.col()), None);
        }

        if m.is_castle {
            let row = m.to.row();
            if m.to.col() > m.from.col() {
                // Kingside: h-file rook jumps to the f-file.
                let rook = self.board.piece_at(Square::new(row, 7));
                self.board.set(Square::new(row, 5), rook);
                self.board.set(Square::new(row, 7), None);
            } else {
                // Queenside: a-file rook jumps to the d-file.
                let rook = self.board.piece_at(Square::new(row, 0));
                self.board.set(Square::new(row, 3), rook);
                self.board.set(Square::new(row, 0), None);
            }
        }

        // A two-square pawn advance opens a one-reply en passant window
        // on the square it passed through; any other move closes it.
        self.en_passant = if m.piece_moved.kind == PieceKind::Pawn
            && m.from.row().abs_diff(m.to.row()) == 2
        {
            Some(Square::new((m.from.row() + m.to.row()) / 2, m.from.col()))
        } else {
            None
        };

        self.update_castling_rights(&m);

        self.move_log.push(m);
        self.en_passant_log.push(self.en_passant);
        self.castling_log.push(self.castling);
        self.side_to_move = self.side_to_move.opposite();

        self.debug_check_invariants();
    }

    /// Undoes the last applied move. With no moves played this does
    /// nothing, so callers may invoke it speculatively.
    pub fn undo_move(&mut self) {
        let Some(m) = self.move_log.pop() else {
            return;
        };

        self.board.set(m.from, Some(m.piece_moved));
        if m.is_en_passant {
            // The destination square was empty; the pawn comes back
            // beside it.
            self.board.set(m.to, None);
            self.board
                .set(Square::new(m.from.row(), m.to.col()), m.piece_captured);
        } else {
            self.board.set(m.to, m.piece_captured);
        }

        if m.piece_moved.kind == PieceKind::King {
            match m.piece_moved.color {
                Color::White => self.white_king = m.from,
                Color::Black => self.black_king = m.from,
            }
        }

        if m.is_castle {
            let row = m.to.row();
            if m.to.col() > m.from.col() {
                let rook = self.board.piece_at(Square::new(row, 5));
                self.board.set(Square::new(row, 7), rook);
                self.board.set(Square::new(row, 5), None);
            } else {
                let rook = self.board.piece_at(Square::new(row, 3));
                self.board.set(Square::new(row, 0), rook);
                self.board.set(Square::new(row, 3), None);
            }
        }

        self.en_passant_log.pop();
        self.en_passant = *self.en_passant_log.last().expect("history logs out of sync");
        self.castling_log.pop();
        self.castling = *self.castling_log.last().expect("history logs out of sync");

        // The position can no longer be assumed terminal.
        self.in_checkmate = false;
        self.in_stalemate = false;
        self.side_to_move = self.side_to_move.opposite();

        self.debug_check_invariants();
    }

    /// Moving a king, moving a rook off its home square, or losing a rook
    /// on its home square permanently revokes the backing right.
    fn update_castling_rights(&mut self, m: &Move) {
        let color = m.piece_moved.color;
        match m.piece_moved.kind {
            PieceKind::King => self.castling.revoke_both(color),
            PieceKind::Rook if m.from.row() == color.back_row() => {
                if m.from.col() == 0 {
                    self.castling.revoke_queenside(color);
                } else if m.from.col() == 7 {
                    self.castling.revoke_kingside(color);
                }
            }
            _ => {}
        }

        if let Some(captured) = m.piece_captured {
            if captured.kind == PieceKind::Rook && m.to.row() == captured.color.back_row() {
                if m.to.col() == 0 {
                    self.castling.revoke_queenside(captured.color);
                } else if m.to.col() == 7 {
                    self.castling.revoke_kingside(captured.color);
                }
            }
        }
    }

    fn debug_check_invariants(&self) {
        debug_assert_eq!(
            self.board.piece_at(self.white_king),
            Some(Piece::new(Color::White, PieceKind::King)),
            "white king cache diverged from the grid"
        );
        debug_assert_eq!(
            self.board.piece_at(self.black_king),
            Some(Piece::new(Color::Black, PieceKind::King)),
            "black king cache diverged from the grid"
        );
        debug_assert_eq!(self.move_log.len() + 1, self.en_passant_log.len());
        debug_assert_eq!(self.move_log.len() + 1, self.castling_log.len());
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}
