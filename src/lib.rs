pub mod board;
pub mod cli;

pub use board::{Bitboard, Board, Color, Move, MoveError, Piece, PieceType, Square};
