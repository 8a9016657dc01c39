use super::super::attack_tables::KNIGHT_MOVES;
use super::super::{Bitboard, Board, Square};

impl Board {
    pub(crate) fn knight_destinations(&self, from: Square) -> Bitboard {
        KNIGHT_MOVES[from.index()]
    }
}
