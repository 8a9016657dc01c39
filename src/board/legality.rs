//! Full move legality and checked move application.
//!
//! A move is checked in layers: the source must hold a piece, the
//! destination must be pseudo-legal, the destination must not hold a friendly
//! piece or the enemy king, the piece's own rules must hold, and finally the
//! move is played on a scratch copy to make sure the mover's king is not left
//! attacked.

use super::attack_tables::{slider_rays, walk};
use super::error::{MoveError, MoveParseError};
use super::movegen::CastlePath;
use super::{Bitboard, Board, Color, Direction, Move, Piece, PieceType, Square};

impl Board {
    /// Check a move against every rule without changing the board.
    ///
    /// The side to move is not consulted; either color's pieces may be
    /// checked.
    pub fn move_is_legal(&self, from: Square, to: Square) -> Result<(), MoveError> {
        self.validate(from, to).map(|_| ())
    }

    #[inline]
    #[must_use]
    pub fn is_legal(&self, from: Square, to: Square) -> bool {
        self.move_is_legal(from, to).is_ok()
    }

    /// True when the move is legal and takes an enemy piece
    #[must_use]
    pub fn is_capture(&self, from: Square, to: Square) -> bool {
        self.is_legal(from, to) && !self.is_empty(to)
    }

    /// Legal destinations of the piece on `from`
    #[must_use]
    pub fn legal_destinations(&self, from: Square) -> Bitboard {
        self.pseudo_legal_destinations(from)
            .iter()
            .filter(|&to| self.is_legal(from, to))
            .collect()
    }

    /// Every legal move of the side to move, ordered by source then
    /// destination square
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        self.occupied_by(self.side_to_move)
            .iter()
            .flat_map(|from| {
                self.legal_destinations(from)
                    .iter()
                    .map(move |to| Move::new(from, to))
            })
            .collect()
    }

    /// Play a move if it is legal, returning the captured piece.
    ///
    /// Castling also moves the rook. Castling rights are revoked when a king
    /// or rook leaves its home square or a rook is captured there, and the
    /// turn passes to the mover's opponent. On error the board is unchanged.
    pub fn make_move(&mut self, from: Square, to: Square) -> Result<Option<Piece>, MoveError> {
        let castle = self.validate(from, to).map_err(|err| {
            #[cfg(feature = "logging")]
            log::debug!("rejected move {from}{to}: {err}");
            err
        })?;
        let mover = self
            .color_at(from)
            .ok_or(MoveError::EmptySource { square: from })?;

        let captured = self.apply(from, to, castle)?;
        self.revoke_castling_rights(from, to);
        self.side_to_move = mover.opponent();

        #[cfg(feature = "logging")]
        log::trace!("played {from}{to}, captured {captured:?}");
        Ok(captured)
    }

    /// Parse a coordinate-notation move such as `e2e4` and play it.
    pub fn make_move_uci(&mut self, notation: &str) -> Result<Option<Piece>, MoveParseError> {
        let mv: Move = notation.parse()?;
        self.make_move(mv.from, mv.to)
            .map_err(|reason| MoveParseError::IllegalMove {
                notation: notation.to_string(),
                reason,
            })
    }

    /// Run every check; on success return the castling path if the move is one.
    fn validate(&self, from: Square, to: Square) -> Result<Option<CastlePath>, MoveError> {
        let piece = self
            .piece_at(from)
            .ok_or(MoveError::EmptySource { square: from })?;

        // Sliders report the square that blocks them rather than a bare
        // pattern failure.
        if piece.kind.is_slider() && slider_rays(piece.kind, from).contains(to) {
            self.check_slider_path(from, to)?;
        }
        if !self.move_is_pseudo_legal(from, to) {
            return Err(MoveError::NotPseudoLegal { from, to });
        }

        if let Some(target) = self.piece_at(to) {
            if target.color == piece.color {
                return Err(MoveError::SquareNotEmpty { square: to });
            }
            if target.kind == PieceType::King {
                return Err(MoveError::KingCapture { square: to });
            }
        }

        let castle = match piece.kind {
            PieceType::Pawn => {
                self.check_pawn_move(from, to, piece.color)?;
                None
            }
            PieceType::King => self.check_king_move(from, to, piece.color)?,
            PieceType::Knight | PieceType::Bishop | PieceType::Rook | PieceType::Queen => None,
        };

        let mut scratch = self.clone();
        scratch.apply(from, to, castle)?;
        if scratch.is_in_check(piece.color) {
            return Err(MoveError::KingInCheck);
        }
        Ok(castle)
    }

    /// Every square strictly between `from` and `to` must be empty.
    fn check_slider_path(&self, from: Square, to: Square) -> Result<(), MoveError> {
        let Some(direction) = Direction::between(from, to) else {
            return Err(MoveError::NotPseudoLegal { from, to });
        };
        match walk(from, direction)
            .take_while(|&sq| sq != to)
            .find(|&sq| !self.is_empty(sq))
        {
            Some(blocker) => Err(MoveError::SquareNotEmpty { square: blocker }),
            None => Ok(()),
        }
    }

    fn check_pawn_move(&self, from: Square, to: Square, color: Color) -> Result<(), MoveError> {
        if from.file() != to.file() {
            if self.is_empty(to) {
                return Err(MoveError::PawnCaptureOnEmpty { square: to });
            }
            return Ok(());
        }

        if let Some(step) = from.shift(color.forward()).filter(|&sq| sq != to) {
            if !self.is_empty(step) {
                return Err(MoveError::SquareNotEmpty { square: step });
            }
        }
        if !self.is_empty(to) {
            return Err(MoveError::SquareNotEmpty { square: to });
        }
        Ok(())
    }

    fn check_king_move(
        &self,
        from: Square,
        to: Square,
        color: Color,
    ) -> Result<Option<CastlePath>, MoveError> {
        let Some(path) = CastlePath::for_king_move(color, from, to) else {
            return Ok(None);
        };
        if !self.castling_preconditions_hold(color, path.kingside) {
            return Err(MoveError::CastlingNotAllowed);
        }
        let enemy = color.opponent();
        for sq in [path.king_from, path.crossed] {
            if self.is_square_attacked(sq, enemy) {
                return Err(MoveError::CastlingThroughCheck { square: sq });
            }
        }
        Ok(Some(path))
    }

    fn apply(
        &mut self,
        from: Square,
        to: Square,
        castle: Option<CastlePath>,
    ) -> Result<Option<Piece>, MoveError> {
        let captured = self.move_piece(from, to)?;
        if let Some(path) = castle {
            self.move_piece(path.rook_from, path.rook_to)?;
        }
        Ok(captured)
    }

    fn revoke_castling_rights(&mut self, from: Square, to: Square) {
        for color in Color::BOTH {
            for kingside in [true, false] {
                let path = CastlePath::new(color, kingside);
                let touched = [path.king_from, path.rook_from]
                    .iter()
                    .any(|&home| home == from || home == to);
                if touched && self.castling_rights.has(color, kingside) {
                    self.castling_rights.remove(color, kingside);
                    #[cfg(feature = "logging")]
                    log::trace!("{color} loses castling right (kingside: {kingside})");
                }
            }
        }
    }
}
