//! Core types for chess.
//!
//! This crate provides the fundamental value types used across the rules
//! engine:
//! - [`Color`], [`PieceKind`], and [`Piece`] for piece representation
//! - [`Square`] for board coordinates
//! - [`Move`] for move representation

mod color;
mod mov;
mod piece;
mod square;

pub use color::Color;
pub use mov::Move;
pub use piece::{Piece, PieceKind};
pub use square::Square;
