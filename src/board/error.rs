//! Error types for chess board operations.

use std::fmt;

use super::types::Square;

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// Piece placement does not have exactly 8 `/`-separated rows
    WrongRowCount { found: usize },
    /// A row does not describe exactly 8 squares (row 0 is rank 8)
    BadRowLength { row: usize, squares: usize },
    /// Two digits next to each other in a row
    AdjacentDigits { row: usize },
    /// A digit outside 1-8
    InvalidDigit { char: char },
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// Full FEN does not have exactly 6 space-separated fields
    WrongFieldCount { found: usize },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Invalid castling field
    InvalidCastling { found: String },
    /// Invalid en passant square
    InvalidEnPassant { found: String },
    /// Halfmove clock or fullmove number is not a number
    InvalidCounter { found: String },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::WrongRowCount { found } => {
                write!(f, "FEN placement must have 8 rows, found {found}")
            }
            FenError::BadRowLength { row, squares } => {
                write!(f, "FEN row {row} covers {squares} squares, expected 8")
            }
            FenError::AdjacentDigits { row } => {
                write!(f, "FEN row {row} contains two adjacent digits")
            }
            FenError::InvalidDigit { char } => {
                write!(f, "Invalid empty-square count '{char}' in FEN")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::WrongFieldCount { found } => {
                write!(f, "FEN must have 6 fields, found {found}")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidCastling { found } => {
                write!(f, "Invalid castling rights '{found}' in FEN")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
            FenError::InvalidCounter { found } => {
                write!(f, "Invalid move counter '{found}' in FEN")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Why a move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// There is no piece on the source square
    EmptySource { square: Square },
    /// The piece cannot reach the destination even on an otherwise empty board,
    /// or a slider's ray is cut off before it
    NotPseudoLegal { from: Square, to: Square },
    /// A square that must be empty is occupied (push target, path square,
    /// castling gap, or a friendly piece on the destination)
    SquareNotEmpty { square: Square },
    /// The destination holds the enemy king
    KingCapture { square: Square },
    /// The mover's king would be attacked after the move
    KingInCheck,
    /// Castling rights, king or rook placement do not allow castling
    CastlingNotAllowed,
    /// The king is in check or would cross an attacked square while castling
    CastlingThroughCheck { square: Square },
    /// Diagonal pawn move onto an empty square
    PawnCaptureOnEmpty { square: Square },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::EmptySource { square } => {
                write!(f, "Square {square} is empty, there is no piece to move")
            }
            MoveError::NotPseudoLegal { from, to } => {
                write!(f, "Piece on {from} cannot move to {to}")
            }
            MoveError::SquareNotEmpty { square } => {
                write!(f, "Square {square} is not empty")
            }
            MoveError::KingCapture { square } => {
                write!(f, "Move captures the king on {square}")
            }
            MoveError::KingInCheck => write!(f, "King would be in check"),
            MoveError::CastlingNotAllowed => write!(f, "Castling is not allowed"),
            MoveError::CastlingThroughCheck { square } => {
                write!(f, "King would castle through check on {square}")
            }
            MoveError::PawnCaptureOnEmpty { square } => {
                write!(f, "Pawn cannot capture on empty square {square}")
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for move parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4 characters)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
    /// Move is not legal in the current position
    IllegalMove { notation: String, reason: MoveError },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
            MoveParseError::IllegalMove { notation, reason } => {
                write!(f, "Illegal move '{notation}': {reason}")
            }
        }
    }
}

impl std::error::Error for MoveParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveParseError::IllegalMove { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Index out of bounds (must be 0-63)
    IndexOutOfBounds { index: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::IndexOutOfBounds { index } => {
                write!(f, "Square index {index} out of bounds (must be 0-63)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}
