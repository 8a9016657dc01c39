//! Compile-time line masks: ranks, files, diagonals and antidiagonals.
//!
//! Diagonals are numbered `7 + rank - file` (0 = h1, 7 = a1-h8, 14 = a8) and
//! antidiagonals `rank + file` (0 = a1, 7 = a8-h1, 14 = h8), matching
//! [`Square::diagonal`] and [`Square::antidiagonal`].

use super::types::{Bitboard, Square};

/// Rank masks, index 0 = rank 1
pub const RANK_MASKS: [Bitboard; 8] = {
    let mut masks = [Bitboard(0); 8];
    let mut r = 0;
    while r < 8 {
        masks[r] = Bitboard::rank_mask(r);
        r += 1;
    }
    masks
};

/// File masks, index 0 = file a
pub const FILE_MASKS: [Bitboard; 8] = {
    let mut masks = [Bitboard(0); 8];
    let mut f = 0;
    while f < 8 {
        masks[f] = Bitboard::file_mask(f);
        f += 1;
    }
    masks
};

/// Diagonal (a1-h8 direction) masks indexed by `7 + rank - file`
pub const DIAGONAL_MASKS: [Bitboard; 15] = {
    let mut masks = [Bitboard(0); 15];
    let mut sq = 0;
    while sq < 64 {
        let rank = sq / 8;
        let file = sq % 8;
        masks[7 + rank - file].0 |= 1u64 << sq;
        sq += 1;
    }
    masks
};

/// Antidiagonal (a8-h1 direction) masks indexed by `rank + file`
pub const ANTIDIAGONAL_MASKS: [Bitboard; 15] = {
    let mut masks = [Bitboard(0); 15];
    let mut sq = 0;
    while sq < 64 {
        let rank = sq / 8;
        let file = sq % 8;
        masks[rank + file].0 |= 1u64 << sq;
        sq += 1;
    }
    masks
};

#[inline]
#[must_use]
pub const fn rank_at(sq: Square) -> Bitboard {
    RANK_MASKS[sq.rank()]
}

#[inline]
#[must_use]
pub const fn file_at(sq: Square) -> Bitboard {
    FILE_MASKS[sq.file()]
}

#[inline]
#[must_use]
pub const fn diagonal_at(sq: Square) -> Bitboard {
    DIAGONAL_MASKS[sq.diagonal()]
}

#[inline]
#[must_use]
pub const fn antidiagonal_at(sq: Square) -> Bitboard {
    ANTIDIAGONAL_MASKS[sq.antidiagonal()]
}
