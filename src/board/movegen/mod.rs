//! Pseudo-legal destinations: where a piece could go by its movement pattern,
//! before any board-wide legality rules are applied.
//!
//! Leapers and pawns use the precomputed tables as-is, so a pawn's mask holds
//! both its pushes and its diagonal capture squares. Sliders are cut at the
//! first occupied square on each ray, whatever its color.

mod kings;
mod knights;
mod pawns;
mod sliders;

pub(crate) use kings::CastlePath;

use super::{Bitboard, Board, PieceType, Square};

impl Board {
    /// Destinations of the piece on `sq` by its movement pattern; empty if
    /// the square is empty.
    ///
    /// Friendly pieces are not removed from the mask: a slider's ray includes
    /// its first blocker of either color. The king's mask includes the
    /// castling targets when it stands on its home square.
    #[must_use]
    pub fn pseudo_legal_destinations(&self, sq: Square) -> Bitboard {
        let Some(piece) = self.piece_at(sq) else {
            return Bitboard::EMPTY;
        };
        match piece.kind {
            PieceType::Pawn => self.pawn_destinations(sq, piece.color),
            PieceType::Knight => self.knight_destinations(sq),
            PieceType::Bishop | PieceType::Rook | PieceType::Queen => {
                self.slider_destinations(sq, piece.kind)
            }
            PieceType::King => self.king_destinations(sq, piece.color),
        }
    }

    /// True when `to` is among the pseudo-legal destinations of the piece on `from`
    #[inline]
    #[must_use]
    pub fn move_is_pseudo_legal(&self, from: Square, to: Square) -> bool {
        self.pseudo_legal_destinations(from).contains(to)
    }
}
