//! Chess rules engine over a plain 8x8 board grid.
//!
//! This crate owns the board representation, enforces legal move
//! generation (castling, en passant, and promotion included), tracks
//! check/checkmate/stalemate, and supports reversible move application
//! for search and UI undo.
//!
//! - [`Board`] - the 8x8 grid of cells
//! - [`Position`] - full game state with apply/undo history
//! - [`Game`] - validated command surface for a UI or search driver
//! - [`movegen`] - pseudo-legal generation, attack queries, and the
//!   legality filter
//! - [`perft`] - move-path enumeration used as a regression oracle
//!
//! # Example
//!
//! ```
//! use chess_core::Square;
//! use chess_rules::Game;
//!
//! let mut game = Game::new();
//! assert_eq!(game.legal_moves().len(), 20);
//!
//! let from = Square::from_algebraic("e2").unwrap();
//! let to = Square::from_algebraic("e4").unwrap();
//! game.make_move_squares(from, to).unwrap();
//! assert_eq!(game.notation_log(), vec!["e4"]);
//! ```

mod board;
mod game;
pub mod movegen;
pub mod perft;
mod position;

pub use board::Board;
pub use game::{Game, GameError};
pub use movegen::{
    castle_moves, is_king_attacked, is_square_attacked, legal_moves, pseudo_legal_moves, MoveList,
};
pub use position::{CastlingRights, Position, SetupError};
