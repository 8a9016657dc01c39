//! Bitboard type and operations.

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

use super::direction::Direction;
use super::square::Square;

/// A 64-bit bitboard; bit `i` set means square `i` is in the set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Bitboard(pub u64);

// File masks (columns)
impl Bitboard {
    pub const FILE_A: Bitboard = Bitboard(0x0101010101010101);
    pub const FILE_B: Bitboard = Bitboard(0x0202020202020202);
    pub const FILE_H: Bitboard = Bitboard(0x8080808080808080);

    pub const RANK_1: Bitboard = Bitboard(0x00000000000000FF);
    pub const RANK_8: Bitboard = Bitboard(0xFF00000000000000);

    pub const EMPTY: Bitboard = Bitboard(0);
    pub const ALL: Bitboard = Bitboard(!0);
}

impl Bitboard {
    /// Returns an iterator over the squares set in this bitboard
    #[inline]
    #[must_use]
    pub fn iter(self) -> BitboardIter {
        BitboardIter(self)
    }

    /// Returns true if the bitboard is empty
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the number of set bits (population count)
    #[inline]
    #[must_use]
    pub const fn popcount(self) -> u32 {
        self.0.count_ones()
    }

    /// Returns true if the given square is set
    #[inline]
    #[must_use]
    pub const fn contains(self, sq: Square) -> bool {
        self.intersects(sq.bitboard())
    }

    /// Returns true if the two sets share at least one square
    #[inline]
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Lowest set square, if any
    #[inline]
    #[must_use]
    pub const fn lsb(self) -> Option<Square> {
        if self.0 == 0 {
            None
        } else {
            Some(Square::from_index_unchecked(self.0.trailing_zeros() as usize))
        }
    }

    /// Move every square one step in `direction`; squares that would leave
    /// the board are dropped instead of wrapping.
    #[inline]
    #[must_use]
    pub const fn shift(self, direction: Direction) -> Self {
        let movable = self.0 & !direction.edge().0;
        let offset = direction.offset();
        if offset > 0 {
            Bitboard(movable << offset)
        } else {
            Bitboard(movable >> -offset)
        }
    }

    /// Get the file mask for a given file index (0-7)
    #[inline]
    #[must_use]
    pub const fn file_mask(file: usize) -> Self {
        Bitboard(Self::FILE_A.0 << file)
    }

    /// Get the rank mask for a given rank index (0-7)
    #[inline]
    #[must_use]
    pub const fn rank_mask(rank: usize) -> Self {
        Bitboard(Self::RANK_1.0 << (rank * 8))
    }

    /// Bitwise OR
    #[inline]
    #[must_use]
    pub const fn or(self, other: Self) -> Self {
        Bitboard(self.0 | other.0)
    }
}

// Board transforms
impl Bitboard {
    /// Mirror ranks (a1 <-> a8)
    #[inline]
    #[must_use]
    pub const fn flip_vertical(self) -> Self {
        Bitboard(self.0.swap_bytes())
    }

    /// Mirror files (a1 <-> h1)
    #[must_use]
    pub const fn flip_horizontal(self) -> Self {
        const K1: u64 = 0x5555_5555_5555_5555;
        const K2: u64 = 0x3333_3333_3333_3333;
        const K4: u64 = 0x0f0f_0f0f_0f0f_0f0f;
        let mut x = self.0;
        x = ((x >> 1) & K1) | ((x & K1) << 1);
        x = ((x >> 2) & K2) | ((x & K2) << 2);
        x = ((x >> 4) & K4) | ((x & K4) << 4);
        Bitboard(x)
    }

    /// Mirror about the a1-h8 diagonal; square (rank, file) goes to (file, rank)
    #[must_use]
    pub const fn flip_diagonal(self) -> Self {
        const K1: u64 = 0x5500_5500_5500_5500;
        const K2: u64 = 0x3333_0000_3333_0000;
        const K4: u64 = 0x0f0f_0f0f_0000_0000;
        let mut x = self.0;
        let mut t = K4 & (x ^ (x << 28));
        x ^= t ^ (t >> 28);
        t = K2 & (x ^ (x << 14));
        x ^= t ^ (t >> 14);
        t = K1 & (x ^ (x << 7));
        x ^= t ^ (t >> 7);
        Bitboard(x)
    }

    /// Mirror about the a8-h1 antidiagonal; (rank, file) goes to (7 - file, 7 - rank)
    #[must_use]
    pub const fn flip_antidiagonal(self) -> Self {
        const K1: u64 = 0xaa00_aa00_aa00_aa00;
        const K2: u64 = 0xcccc_0000_cccc_0000;
        const K4: u64 = 0xf0f0_f0f0_0f0f_0f0f;
        let mut x = self.0;
        let mut t = x ^ (x << 36);
        x ^= K4 & (t ^ (x >> 36));
        t = K2 & (x ^ (x << 18));
        x ^= t ^ (t >> 18);
        t = K1 & (x ^ (x << 9));
        x ^= t ^ (t >> 9);
        Bitboard(x)
    }

    #[inline]
    #[must_use]
    pub const fn rotate_180(self) -> Self {
        Bitboard(self.0.reverse_bits())
    }

    #[inline]
    #[must_use]
    pub const fn rotate_90_clockwise(self) -> Self {
        self.flip_diagonal().flip_vertical()
    }

    #[inline]
    #[must_use]
    pub const fn rotate_90_anticlockwise(self) -> Self {
        self.flip_vertical().flip_diagonal()
    }

    /// Pseudo-rotation by 45 degrees clockwise: each file is rotated down by
    /// its file index, so (rank, file) goes to ((rank - file) mod 8, file) and
    /// the a1-h8 diagonals become ranks.
    #[must_use]
    pub const fn pseudo_rotate_45_clockwise(self) -> Self {
        const K1: u64 = 0xaaaa_aaaa_aaaa_aaaa;
        const K2: u64 = 0xcccc_cccc_cccc_cccc;
        const K4: u64 = 0xf0f0_f0f0_f0f0_f0f0;
        let mut x = self.0;
        x ^= K1 & (x ^ x.rotate_right(8));
        x ^= K2 & (x ^ x.rotate_right(16));
        x ^= K4 & (x ^ x.rotate_right(32));
        Bitboard(x)
    }

    /// Pseudo-rotation by 45 degrees anticlockwise: (rank, file) goes to
    /// ((rank + file + 1) mod 8, file), so the a8-h1 antidiagonals become ranks.
    #[must_use]
    pub const fn pseudo_rotate_45_anticlockwise(self) -> Self {
        const K1: u64 = 0x5555_5555_5555_5555;
        const K2: u64 = 0x3333_3333_3333_3333;
        const K4: u64 = 0x0f0f_0f0f_0f0f_0f0f;
        let mut x = self.0;
        x ^= K1 & (x ^ x.rotate_right(8));
        x ^= K2 & (x ^ x.rotate_right(16));
        x ^= K4 & (x ^ x.rotate_right(32));
        Bitboard(x)
    }

    /// Bitwise rotation towards h8; bits leaving past h8 wrap to a1.
    #[inline]
    #[must_use]
    pub const fn rotate_left(self, bits: u32) -> Self {
        Bitboard(self.0.rotate_left(bits))
    }

    /// Bitwise rotation towards a1; bits leaving past a1 wrap to h8.
    #[inline]
    #[must_use]
    pub const fn rotate_right(self, bits: u32) -> Self {
        Bitboard(self.0.rotate_right(bits))
    }
}

impl BitAnd for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Bitboard(self.0 & rhs.0)
    }
}

impl BitOr for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Bitboard(self.0 | rhs.0)
    }
}

impl BitXor for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitxor(self, rhs: Self) -> Self {
        Bitboard(self.0 ^ rhs.0)
    }
}

impl Not for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn not(self) -> Self {
        Bitboard(!self.0)
    }
}

impl BitAndAssign for Bitboard {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl BitOrAssign for Bitboard {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitXorAssign for Bitboard {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

impl FromIterator<Square> for Bitboard {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Bitboard::EMPTY, |bb, sq| bb | sq.bitboard())
    }
}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = BitboardIter;

    fn into_iter(self) -> BitboardIter {
        BitboardIter(self)
    }
}

/// Renders the set as an 8x8 grid, rank 8 first, `1` for members and `.` otherwise.
impl fmt::Display for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            for file in 0..8 {
                let sq = Square::from_index_unchecked(rank * 8 + file);
                let ch = if self.contains(sq) { '1' } else { '.' };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn pop_lsb(bb: &mut Bitboard) -> Square {
    let idx = bb.0.trailing_zeros() as usize;
    bb.0 &= bb.0 - 1;
    Square::from_index_unchecked(idx)
}

/// Iterator over set bits in a Bitboard
pub struct BitboardIter(Bitboard);

impl Iterator for BitboardIter {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0.is_empty() {
            None
        } else {
            Some(pop_lsb(&mut self.0))
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.popcount() as usize;
        (n, Some(n))
    }
}
