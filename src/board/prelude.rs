//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//!
//! let mut board = Board::new();
//! assert!(board.make_move(Square::E2, Square::E4).is_ok());
//! assert_eq!(board.side_to_move(), Color::Black);
//! ```

pub use super::{
    Bitboard, Board, BoardBuilder, CastlingRights, Color, FenError, Move, MoveError,
    MoveParseError, Piece, PieceType, Square, SquareError,
};
