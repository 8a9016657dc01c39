use super::super::attack_tables::{bishop_attacks, queen_attacks, rook_attacks};
use super::super::{Bitboard, Board, PieceType, Square};

impl Board {
    pub(crate) fn slider_destinations(&self, from: Square, kind: PieceType) -> Bitboard {
        let occupancy = self.occupied();
        match kind {
            PieceType::Bishop => bishop_attacks(from, occupancy),
            PieceType::Rook => rook_attacks(from, occupancy),
            PieceType::Queen => queen_attacks(from, occupancy),
            PieceType::Pawn | PieceType::Knight | PieceType::King => Bitboard::EMPTY,
        }
    }
}
