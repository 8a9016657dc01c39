//! Square types and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::bitboard::Bitboard;
use super::direction::Direction;
use crate::board::error::SquareError;

/// A square on the chess board as a linear index (a1=0, b1=1, ..., h8=63).
///
/// The index is always in `0..64`; every constructor validates it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(u8);

macro_rules! named_squares {
    ($($name:ident = $idx:expr),* $(,)?) => {
        impl Square {
            $(pub const $name: Square = Square($idx);)*
        }
    };
}

named_squares! {
    A1 = 0, B1 = 1, C1 = 2, D1 = 3, E1 = 4, F1 = 5, G1 = 6, H1 = 7,
    A2 = 8, B2 = 9, C2 = 10, D2 = 11, E2 = 12, F2 = 13, G2 = 14, H2 = 15,
    A3 = 16, B3 = 17, C3 = 18, D3 = 19, E3 = 20, F3 = 21, G3 = 22, H3 = 23,
    A4 = 24, B4 = 25, C4 = 26, D4 = 27, E4 = 28, F4 = 29, G4 = 30, H4 = 31,
    A5 = 32, B5 = 33, C5 = 34, D5 = 35, E5 = 36, F5 = 37, G5 = 38, H5 = 39,
    A6 = 40, B6 = 41, C6 = 42, D6 = 43, E6 = 44, F6 = 45, G6 = 46, H6 = 47,
    A7 = 48, B7 = 49, C7 = 50, D7 = 51, E7 = 52, F7 = 53, G7 = 54, H7 = 55,
    A8 = 56, B8 = 57, C8 = 58, D8 = 59, E8 = 60, F8 = 61, G8 = 62, H8 = 63,
}

impl Square {
    /// Number of squares on the board
    pub const COUNT: usize = 64;

    /// Create a square from rank and file (both 0-7), with bounds checking
    #[inline]
    #[must_use]
    pub const fn new(rank: usize, file: usize) -> Option<Self> {
        if rank < 8 && file < 8 {
            Some(Square(((rank << 3) | file) as u8))
        } else {
            None
        }
    }

    /// Create a square from a linear index (0-63)
    #[inline]
    #[must_use]
    pub const fn from_index(idx: usize) -> Option<Self> {
        if idx < Self::COUNT {
            Some(Square(idx as u8))
        } else {
            None
        }
    }

    /// Caller guarantees `idx < 64`.
    #[inline]
    pub(crate) const fn from_index_unchecked(idx: usize) -> Self {
        debug_assert!(idx < Self::COUNT);
        Square(idx as u8)
    }

    /// Get the square's index (0-63)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the rank (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        (self.0 >> 3) as usize
    }

    /// Get the file (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        (self.0 & 7) as usize
    }

    /// Index of the a1-h8 style diagonal through this square, `7 + rank - file` (0-14)
    #[inline]
    #[must_use]
    pub const fn diagonal(self) -> usize {
        7 + self.rank() - self.file()
    }

    /// Index of the a8-h1 style antidiagonal through this square, `rank + file` (0-14)
    #[inline]
    #[must_use]
    pub const fn antidiagonal(self) -> usize {
        self.rank() + self.file()
    }

    /// Single-square bitboard
    #[inline]
    #[must_use]
    pub const fn bitboard(self) -> Bitboard {
        Bitboard(1u64 << self.0)
    }

    /// Step one square in `direction`.
    ///
    /// Returns `None` when the step would leave the board; a step off the h-file
    /// never wraps onto the a-file of the next rank.
    #[inline]
    #[must_use]
    pub const fn shift(self, direction: Direction) -> Option<Square> {
        if self.bitboard().intersects(direction.edge()) {
            return None;
        }
        Some(Square((self.0 as i8 + direction.offset()) as u8))
    }

    /// Step `steps` squares in `direction`, validating every single step.
    #[must_use]
    pub fn shift_by(self, direction: Direction, steps: usize) -> Option<Square> {
        (0..steps).try_fold(self, |sq, _| sq.shift(direction))
    }

    /// King-move (Chebyshev) distance between two squares
    #[must_use]
    pub fn distance(self, other: Square) -> usize {
        self.rank()
            .abs_diff(other.rank())
            .max(self.file().abs_diff(other.file()))
    }

    /// Rank difference plus file difference
    #[must_use]
    pub fn manhattan_distance(self, other: Square) -> usize {
        self.rank().abs_diff(other.rank()) + self.file().abs_diff(other.file())
    }

    /// Flip the square vertically (e.g., a1 <-> a8)
    #[inline]
    #[must_use]
    pub const fn mirror(self) -> Square {
        Square(self.0 ^ 56)
    }

    /// All 64 squares in index order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..Self::COUNT as u8).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            (self.file() as u8 + b'a') as char,
            self.rank() + 1
        )
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((rank, file): (usize, usize)) -> Result<Self, Self::Error> {
        if rank >= 8 {
            return Err(SquareError::RankOutOfBounds { rank });
        }
        if file >= 8 {
            return Err(SquareError::FileOutOfBounds { file });
        }
        Ok(Square(((rank << 3) | file) as u8))
    }
}

impl TryFrom<usize> for Square {
    type Error = SquareError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Square::from_index(index).ok_or(SquareError::IndexOutOfBounds { index })
    }
}

impl FromStr for Square {
    type Err = SquareError;

    /// Parse algebraic notation; the file letter may be upper or lower case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }

        let file = match bytes[0].to_ascii_lowercase() {
            c @ b'a'..=b'h' => (c - b'a') as usize,
            _ => return Err(invalid()),
        };
        let rank = match bytes[1] {
            c @ b'1'..=b'8' => (c - b'1') as usize,
            _ => return Err(invalid()),
        };

        Ok(Square(((rank << 3) | file) as u8))
    }
}
