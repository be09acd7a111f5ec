//! The validated game session surface.

use crate::movegen::{self, MoveList};
use crate::Position;
use chess_core::{Color, Move, Square};
use thiserror::Error;

/// Errors from game commands.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// The requested move is not in the current legal-move list.
    #[error("illegal move from {from} to {to}")]
    IllegalMove { from: Square, to: Square },
    /// The game has already ended in checkmate or stalemate.
    #[error("the game is already over")]
    GameAlreadyOver,
}

/// A chess game: a [`Position`] plus the legal-move list cached for it.
///
/// This is the surface a UI or search driver talks to. Every command
/// either applies a move drawn from the cached legal list or is
/// rejected whole, so the position can never hold an illegal move in
/// its history. The cache is recomputed after each command.
#[derive(Debug, Clone)]
pub struct Game {
    position: Position,
    legal: MoveList,
}

impl Game {
    /// Starts a game from the standard starting position.
    pub fn new() -> Self {
        Self::from_position(Position::new())
    }

    /// Starts a game from an arbitrary position.
    pub fn from_position(mut position: Position) -> Self {
        let legal = movegen::legal_moves(&mut position);
        Game { position, legal }
    }

    /// Returns the underlying position.
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Returns the board grid.
    pub fn board(&self) -> &crate::Board {
        self.position.board()
    }

    /// Returns the side to move.
    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move()
    }

    /// Returns the legal moves for the side to move.
    pub fn legal_moves(&self) -> &MoveList {
        &self.legal
    }

    /// Returns true if the side to move is in check.
    pub fn is_check(&self) -> bool {
        movegen::is_king_attacked(&self.position, self.position.side_to_move())
    }

    /// Returns true if the side to move is checkmated.
    pub fn in_checkmate(&self) -> bool {
        self.position.in_checkmate()
    }

    /// Returns true if the side to move is stalemated.
    pub fn in_stalemate(&self) -> bool {
        self.position.in_stalemate()
    }

    /// Returns true if the game has ended.
    pub fn is_game_over(&self) -> bool {
        self.position.in_checkmate() || self.position.in_stalemate()
    }

    /// Returns the moves played so far, oldest first.
    pub fn move_log(&self) -> &[Move] {
        self.position.move_log()
    }

    /// Returns the rendered notation of every move played, oldest first.
    pub fn notation_log(&self) -> Vec<String> {
        self.position.move_log().iter().map(Move::to_string).collect()
    }

    /// Plays a move. The move only has to name the right endpoints; the
    /// matching engine move, with its full capture/promotion/castle
    /// metadata, is the one applied and returned.
    pub fn make_move(&mut self, m: Move) -> Result<Move, GameError> {
        self.make_move_squares(m.from, m.to)
    }

    /// Plays the legal move with the given endpoints.
    pub fn make_move_squares(&mut self, from: Square, to: Square) -> Result<Move, GameError> {
        if self.is_game_over() {
            return Err(GameError::GameAlreadyOver);
        }
        let m = self
            .legal
            .find(from, to)
            .ok_or(GameError::IllegalMove { from, to })?;
        self.position.apply_move(m);
        self.legal = movegen::legal_moves(&mut self.position);
        Ok(m)
    }

    /// Takes back the last move. Does nothing when no move has been
    /// played.
    pub fn undo(&mut self) {
        self.position.undo_move();
        self.legal = movegen::legal_moves(&mut self.position);
    }

    /// Abandons the game and starts over from the standard starting
    /// position.
    pub fn reset(&mut self) {
        *self = Game::new();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
