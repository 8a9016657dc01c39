//! Core chess types.
//!
//! This module contains the fundamental types used throughout the crate:
//! - `PieceType`, `Color` and `Piece` - piece kinds, sides and colored pieces
//! - `Square` - linear 0-63 board square
//! - `Direction` - the eight stepping directions with their edge masks
//! - `Bitboard` - 64-bit square set
//! - `Move` - from/to pair
//! - `CastlingRights` - castling state

mod bitboard;
mod castling;
mod direction;
mod moves;
mod piece;
mod square;

// Re-export all public types
pub use bitboard::{Bitboard, BitboardIter};
pub use castling::CastlingRights;
pub use direction::Direction;
pub use moves::Move;
pub use piece::{Color, Piece, PieceType};
pub use square::Square;
