//! Attack tables for move generation.
//!
//! Leaper and pawn destinations are looked up in tables built once on first
//! use. Sliding pieces (bishop, rook, queen) start from the unobstructed line
//! union of their square and are cut down to the first blocker on each ray by
//! walking the ray one square at a time.

mod tables;

pub(crate) use tables::{
    BISHOP_RAYS, KING_MOVES, KNIGHT_MOVES, PAWN_CAPTURES, PAWN_PUSHES, QUEEN_RAYS, ROOK_RAYS,
};

use std::iter::successors;

use super::types::{Bitboard, Direction, PieceType, Square};

/// Squares reached by stepping from `from` in `direction`, excluding `from`,
/// up to the board edge.
pub(crate) fn walk(from: Square, direction: Direction) -> impl Iterator<Item = Square> {
    successors(from.shift(direction), move |sq| sq.shift(direction))
}

/// Squares along one ray up to and including the first occupied square.
pub(crate) fn ray_attacks(from: Square, direction: Direction, occupancy: Bitboard) -> Bitboard {
    let mut attacks = Bitboard::EMPTY;
    for sq in walk(from, direction) {
        attacks |= sq.bitboard();
        if occupancy.contains(sq) {
            break;
        }
    }
    attacks
}

/// Union of [`ray_attacks`] over several directions
pub(crate) fn sliding_attacks(
    from: Square,
    directions: &[Direction],
    occupancy: Bitboard,
) -> Bitboard {
    directions
        .iter()
        .fold(Bitboard::EMPTY, |acc, &dir| acc | ray_attacks(from, dir, occupancy))
}

/// Get bishop attacks (diagonals only)
#[inline]
pub(crate) fn bishop_attacks(square: Square, occupancy: Bitboard) -> Bitboard {
    sliding_attacks(square, &Direction::DIAGONAL, occupancy) & BISHOP_RAYS[square.index()]
}

/// Get rook attacks (ranks and files only)
#[inline]
pub(crate) fn rook_attacks(square: Square, occupancy: Bitboard) -> Bitboard {
    sliding_attacks(square, &Direction::ORTHOGONAL, occupancy) & ROOK_RAYS[square.index()]
}

/// Get queen attacks (all 8 directions)
#[inline]
pub(crate) fn queen_attacks(square: Square, occupancy: Bitboard) -> Bitboard {
    bishop_attacks(square, occupancy) | rook_attacks(square, occupancy)
}

/// Unobstructed line union for a slider, empty for other pieces
#[inline]
pub(crate) fn slider_rays(kind: PieceType, square: Square) -> Bitboard {
    match kind {
        PieceType::Bishop => BISHOP_RAYS[square.index()],
        PieceType::Rook => ROOK_RAYS[square.index()],
        PieceType::Queen => QUEEN_RAYS[square.index()],
        PieceType::Pawn | PieceType::Knight | PieceType::King => Bitboard::EMPTY,
    }
}
