//! Precomputed destination tables for leapers and pawns, plus the
//! unobstructed line unions sliders start from.

use once_cell::sync::Lazy;

use super::super::masks::{antidiagonal_at, diagonal_at, file_at, rank_at};
use super::super::types::{Bitboard, Color, Direction, Square};

/// A knight jump: two steps one way, then one step sideways
const KNIGHT_JUMPS: [(Direction, Direction); 8] = [
    (Direction::Up, Direction::Left),
    (Direction::Up, Direction::Right),
    (Direction::Down, Direction::Left),
    (Direction::Down, Direction::Right),
    (Direction::Left, Direction::Up),
    (Direction::Left, Direction::Down),
    (Direction::Right, Direction::Up),
    (Direction::Right, Direction::Down),
];

fn per_square(f: impl Fn(Square) -> Bitboard) -> [Bitboard; 64] {
    let mut table = [Bitboard::EMPTY; 64];
    for (sq, slot) in Square::all().zip(table.iter_mut()) {
        *slot = f(sq);
    }
    table
}

fn per_color_square(f: impl Fn(Color, Square) -> Bitboard) -> [[Bitboard; 64]; 2] {
    Color::BOTH.map(|color| per_square(|sq| f(color, sq)))
}

pub(crate) static KNIGHT_MOVES: Lazy<[Bitboard; 64]> = Lazy::new(|| {
    per_square(|sq| {
        KNIGHT_JUMPS
            .iter()
            .filter_map(|&(long, short)| sq.shift_by(long, 2)?.shift(short))
            .collect()
    })
});

pub(crate) static KING_MOVES: Lazy<[Bitboard; 64]> = Lazy::new(|| {
    per_square(|sq| Direction::ALL.iter().filter_map(|&dir| sq.shift(dir)).collect())
});

/// Single push, plus the double push from the starting rank. Occupancy is
/// checked by the legality engine.
pub(crate) static PAWN_PUSHES: Lazy<[[Bitboard; 64]; 2]> = Lazy::new(|| {
    per_color_square(|color, sq| {
        let forward = color.forward();
        let mut pushes = sq.shift(forward).map_or(Bitboard::EMPTY, Square::bitboard);
        if sq.rank() == color.pawn_start_rank() {
            if let Some(double) = sq.shift_by(forward, 2) {
                pushes |= double.bitboard();
            }
        }
        pushes
    })
});

/// The two forward diagonal squares a pawn captures on
pub(crate) static PAWN_CAPTURES: Lazy<[[Bitboard; 64]; 2]> = Lazy::new(|| {
    per_color_square(|color, sq| {
        let Some(ahead) = sq.shift(color.forward()) else {
            return Bitboard::EMPTY;
        };
        [Direction::Left, Direction::Right]
            .iter()
            .filter_map(|&side| ahead.shift(side))
            .collect()
    })
});

/// Rank and file through each square, minus the square itself
pub(crate) static ROOK_RAYS: Lazy<[Bitboard; 64]> =
    Lazy::new(|| per_square(|sq| (rank_at(sq) | file_at(sq)) & !sq.bitboard()));

/// Both diagonals through each square, minus the square itself
pub(crate) static BISHOP_RAYS: Lazy<[Bitboard; 64]> =
    Lazy::new(|| per_square(|sq| (diagonal_at(sq) | antidiagonal_at(sq)) & !sq.bitboard()));

pub(crate) static QUEEN_RAYS: Lazy<[Bitboard; 64]> =
    Lazy::new(|| per_square(|sq| ROOK_RAYS[sq.index()] | BISHOP_RAYS[sq.index()]));
