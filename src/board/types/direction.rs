//! Board directions.

use super::bitboard::Bitboard;
use super::square::Square;

/// One of the eight compass directions a piece can step in.
///
/// "Up" is toward rank 8, "right" toward the h-file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    /// Rook directions
    pub const ORTHOGONAL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Bishop directions
    pub const DIAGONAL: [Direction; 4] = [
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    /// Change in square index for one step
    #[inline]
    #[must_use]
    pub const fn offset(self) -> i8 {
        match self {
            Direction::Up => 8,
            Direction::Down => -8,
            Direction::Left => -1,
            Direction::Right => 1,
            Direction::UpLeft => 7,
            Direction::UpRight => 9,
            Direction::DownLeft => -9,
            Direction::DownRight => -7,
        }
    }

    /// Squares from which a step in this direction would leave the board
    #[inline]
    #[must_use]
    pub const fn edge(self) -> Bitboard {
        match self {
            Direction::Up => Bitboard::RANK_8,
            Direction::Down => Bitboard::RANK_1,
            Direction::Left => Bitboard::FILE_A,
            Direction::Right => Bitboard::FILE_H,
            Direction::UpLeft => Bitboard::RANK_8.or(Bitboard::FILE_A),
            Direction::UpRight => Bitboard::RANK_8.or(Bitboard::FILE_H),
            Direction::DownLeft => Bitboard::RANK_1.or(Bitboard::FILE_A),
            Direction::DownRight => Bitboard::RANK_1.or(Bitboard::FILE_H),
        }
    }

    #[inline]
    #[must_use]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::UpLeft => Direction::DownRight,
            Direction::UpRight => Direction::DownLeft,
            Direction::DownLeft => Direction::UpRight,
            Direction::DownRight => Direction::UpLeft,
        }
    }

    /// Direction of the straight line leading from `from` to `to`.
    ///
    /// Returns `None` if the squares are equal or do not share a rank, file,
    /// diagonal or antidiagonal.
    #[must_use]
    pub fn between(from: Square, to: Square) -> Option<Direction> {
        let dr = to.rank() as isize - from.rank() as isize;
        let df = to.file() as isize - from.file() as isize;

        match (dr.signum(), df.signum()) {
            (0, 0) => None,
            (1, 0) => Some(Direction::Up),
            (-1, 0) => Some(Direction::Down),
            (0, 1) => Some(Direction::Right),
            (0, -1) => Some(Direction::Left),
            _ if dr.abs() != df.abs() => None,
            (1, 1) => Some(Direction::UpRight),
            (1, -1) => Some(Direction::UpLeft),
            (-1, 1) => Some(Direction::DownRight),
            _ => Some(Direction::DownLeft),
        }
    }
}
