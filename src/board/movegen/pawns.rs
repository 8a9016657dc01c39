use super::super::attack_tables::{PAWN_CAPTURES, PAWN_PUSHES};
use super::super::{Bitboard, Board, Color, Square};

impl Board {
    /// Pushes and diagonal capture squares together; the legality check tells
    /// them apart by file.
    pub(crate) fn pawn_destinations(&self, from: Square, color: Color) -> Bitboard {
        PAWN_PUSHES[color.index()][from.index()] | PAWN_CAPTURES[color.index()][from.index()]
    }
}
