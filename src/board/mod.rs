//! Chess board representation and move legality.
//!
//! A position is twelve bitboards, one per (color, piece type), plus castling
//! rights and the side to move. Moves are checked against the rules of chess
//! without en passant or promotion: pawn pushes and captures, blocked slider
//! rays, castling preconditions, and whether the mover's king is left in check.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, MoveError, Square};
//!
//! let mut board = Board::new();
//! assert!(board.move_is_legal(Square::E2, Square::E4).is_ok());
//! assert_eq!(
//!     board.move_is_legal(Square::A1, Square::A3),
//!     Err(MoveError::SquareNotEmpty { square: Square::A2 })
//! );
//! board.make_move(Square::G1, Square::F3).unwrap();
//! assert_eq!(board.board_fen(), "rnbqkbnr/pppppppp/8/8/8/5N2/PPPPPPPP/RNBQKB1R");
//! ```

mod attack_tables;
mod builder;
mod display;
mod error;
mod fen;
mod legality;
pub mod masks;
mod movegen;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{FenError, MoveError, MoveParseError, SquareError};
pub use fen::{STARTING_BOARD_FEN, STARTING_FEN};
pub use state::Board;
pub use types::{
    Bitboard, BitboardIter, CastlingRights, Color, Direction, Move, Piece, PieceType, Square,
};
