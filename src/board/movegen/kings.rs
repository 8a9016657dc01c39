use super::super::attack_tables::{
    bishop_attacks, rook_attacks, KING_MOVES, KNIGHT_MOVES, PAWN_CAPTURES,
};
use super::super::{Bitboard, Board, Color, Piece, PieceType, Square};

/// Squares involved in one castling move
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct CastlePath {
    pub kingside: bool,
    pub king_from: Square,
    pub king_to: Square,
    pub rook_from: Square,
    pub rook_to: Square,
    /// Square the king passes over
    pub crossed: Square,
    /// Squares between king and rook
    pub between: Bitboard,
}

fn home_square(color: Color, file: usize) -> Square {
    Square::from_index_unchecked(color.back_rank() * 8 + file)
}

impl CastlePath {
    pub(crate) fn new(color: Color, kingside: bool) -> Self {
        let sq = |file| home_square(color, file);
        if kingside {
            CastlePath {
                kingside,
                king_from: sq(4),
                king_to: sq(6),
                rook_from: sq(7),
                rook_to: sq(5),
                crossed: sq(5),
                between: sq(5).bitboard() | sq(6).bitboard(),
            }
        } else {
            CastlePath {
                kingside,
                king_from: sq(4),
                king_to: sq(2),
                rook_from: sq(0),
                rook_to: sq(3),
                crossed: sq(3),
                between: sq(1).bitboard() | sq(2).bitboard() | sq(3).bitboard(),
            }
        }
    }

    /// The castling move a king of `color` makes by going from `from` to `to`,
    /// if it is one.
    pub(crate) fn for_king_move(color: Color, from: Square, to: Square) -> Option<Self> {
        [true, false]
            .into_iter()
            .map(|kingside| CastlePath::new(color, kingside))
            .find(|path| path.king_from == from && path.king_to == to)
    }
}

impl Board {
    /// One-step king moves, plus both castling targets from the home square.
    pub(crate) fn king_destinations(&self, from: Square, color: Color) -> Bitboard {
        let mut targets = KING_MOVES[from.index()];
        for kingside in [true, false] {
            let path = CastlePath::new(color, kingside);
            if path.king_from == from {
                targets |= path.king_to.bitboard();
            }
        }
        targets
    }

    /// Rights flag, home king and rook, and empty squares between them.
    /// Attacks on the king's path are not considered here.
    pub(crate) fn castling_preconditions_hold(&self, color: Color, kingside: bool) -> bool {
        let path = CastlePath::new(color, kingside);
        self.castling_rights.has(color, kingside)
            && self.piece_at(path.king_from) == Some(Piece::new(PieceType::King, color))
            && self.piece_at(path.rook_from) == Some(Piece::new(PieceType::Rook, color))
            && !self.occupied().intersects(path.between)
    }

    /// True if `color` may castle kingside as far as rights and occupancy go
    #[must_use]
    pub fn can_castle_kingside(&self, color: Color) -> bool {
        self.castling_preconditions_hold(color, true)
    }

    /// True if `color` may castle queenside as far as rights and occupancy go
    #[must_use]
    pub fn can_castle_queenside(&self, color: Color) -> bool {
        self.castling_preconditions_hold(color, false)
    }

    /// Whether any piece of `attacker` attacks `square`.
    ///
    /// Pawns attack diagonally only; sliders are blocked by any piece.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, attacker: Color) -> bool {
        let idx = square.index();

        // A pawn of `attacker` hits `square` from where an opposing pawn on
        // `square` would capture.
        let pawn_sources = PAWN_CAPTURES[attacker.opponent().index()][idx];
        if self.pieces(attacker, PieceType::Pawn).intersects(pawn_sources) {
            return true;
        }
        if self
            .pieces(attacker, PieceType::Knight)
            .intersects(KNIGHT_MOVES[idx])
        {
            return true;
        }
        if self
            .pieces(attacker, PieceType::King)
            .intersects(KING_MOVES[idx])
        {
            return true;
        }

        let occupancy = self.occupied();
        let straight = rook_attacks(square, occupancy);
        let diagonal = bishop_attacks(square, occupancy);

        PieceType::ALL.into_iter().any(|kind| {
            let mut reach = Bitboard::EMPTY;
            if kind.attacks_straight() {
                reach |= straight;
            }
            if kind.attacks_diagonally() {
                reach |= diagonal;
            }
            self.pieces(attacker, kind).intersects(reach)
        })
    }

    /// True when `color` has a king and it is attacked
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.king_square(color)
            .is_some_and(|king| self.is_square_attacked(king, color.opponent()))
    }
}
