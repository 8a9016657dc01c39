use super::error::MoveError;
use super::{Bitboard, CastlingRights, Color, Piece, PieceType, Square};

/// Back rank layout, a-file first
const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// A chess position: one bitboard per (color, piece type) plus castling
/// rights and the side to move.
///
/// A square is set in at most one of the twelve bitboards. The board is a
/// plain value; clone it to explore hypothetical positions.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    pub(crate) pieces: [[Bitboard; PieceType::COUNT]; 2],
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
}

impl Board {
    /// The standard starting position
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        board.reset();
        board
    }

    /// A board with no pieces, White to move and no castling rights
    #[must_use]
    pub fn empty() -> Self {
        Board {
            pieces: [[Bitboard::EMPTY; PieceType::COUNT]; 2],
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
        }
    }

    /// Restore the standard starting position
    pub fn reset(&mut self) {
        self.clear();
        for (file, &kind) in BACK_RANK.iter().enumerate() {
            for color in Color::BOTH {
                let back = color.back_rank();
                let pawns = color.pawn_start_rank();
                self.put(square_at(back, file), Piece::new(kind, color));
                self.put(square_at(pawns, file), Piece::new(PieceType::Pawn, color));
            }
        }
        self.castling_rights = CastlingRights::all();
    }

    /// Remove every piece and all castling rights; White to move
    pub fn clear(&mut self) {
        *self = Board::empty();
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    /// Bitboard of one color's pieces of one type
    #[inline]
    #[must_use]
    pub fn pieces(&self, color: Color, kind: PieceType) -> Bitboard {
        self.pieces[color.index()][kind.index()]
    }

    /// All squares occupied by `color`
    #[must_use]
    pub fn occupied_by(&self, color: Color) -> Bitboard {
        self.pieces[color.index()]
            .iter()
            .fold(Bitboard::EMPTY, |acc, &bb| acc | bb)
    }

    /// All occupied squares
    #[must_use]
    pub fn occupied(&self) -> Bitboard {
        self.occupied_by(Color::White) | self.occupied_by(Color::Black)
    }

    /// Piece type on a square, or `None` if it is empty
    #[must_use]
    pub fn piece_type_at(&self, sq: Square) -> Option<PieceType> {
        self.piece_at(sq).map(|piece| piece.kind)
    }

    /// Colored piece on a square, or `None` if it is empty
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        for color in Color::BOTH {
            for kind in PieceType::ALL {
                if self.pieces(color, kind).contains(sq) {
                    return Some(Piece::new(kind, color));
                }
            }
        }
        None
    }

    /// Color of the piece on a square, or `None` if it is empty
    #[must_use]
    pub fn color_at(&self, sq: Square) -> Option<Color> {
        Color::BOTH
            .into_iter()
            .find(|&color| self.occupied_by(color).contains(sq))
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        !self.occupied().contains(sq)
    }

    /// Square of `color`'s king; the lowest one if a position holds several
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces(color, PieceType::King).lsb()
    }

    /// True when no square is set in more than one bitboard
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let mut seen = Bitboard::EMPTY;
        for bb in self.pieces.iter().flatten() {
            if seen.intersects(*bb) {
                return false;
            }
            seen |= *bb;
        }
        true
    }

    /// Place a piece, replacing whatever stood on the square.
    pub(crate) fn put(&mut self, sq: Square, piece: Piece) {
        self.remove(sq);
        self.pieces[piece.color.index()][piece.kind.index()] |= sq.bitboard();
    }

    /// Empty a square, returning the piece that stood there.
    pub(crate) fn remove(&mut self, sq: Square) -> Option<Piece> {
        let piece = self.piece_at(sq)?;
        self.pieces[piece.color.index()][piece.kind.index()] &= !sq.bitboard();
        Some(piece)
    }

    /// Move the piece on `from` to `to` without any legality check.
    ///
    /// A piece standing on `to` is removed and returned. Fails only when
    /// `from` is empty.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Result<Option<Piece>, MoveError> {
        let piece = self
            .remove(from)
            .ok_or(MoveError::EmptySource { square: from })?;
        let captured = self.remove(to);
        self.pieces[piece.color.index()][piece.kind.index()] |= to.bitboard();
        Ok(captured)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

fn square_at(rank: usize, file: usize) -> Square {
    Square::from_index_unchecked(rank * 8 + file)
}
