use std::str::FromStr;

use super::error::FenError;
use super::{Bitboard, Board, CastlingRights, Color, Piece, PieceType, Square};

/// FEN of the standard starting position
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Piece placement field of [`STARTING_FEN`]
pub const STARTING_BOARD_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

type Placement = [[Bitboard; PieceType::COUNT]; 2];

/// Parse the piece placement field.
///
/// Rows run from rank 8 down to rank 1. Within a row the file advances by the
/// value of each digit and by one for each piece letter.
fn parse_placement(text: &str) -> Result<Placement, FenError> {
    let rows: Vec<&str> = text.split('/').collect();
    if rows.len() != 8 {
        return Err(FenError::WrongRowCount { found: rows.len() });
    }

    let mut placement = [[Bitboard::EMPTY; PieceType::COUNT]; 2];
    for (row, row_str) in rows.iter().enumerate() {
        let rank = 7 - row;
        let mut file = 0usize;
        let mut previous_was_digit = false;

        for c in row_str.chars() {
            if let Some(run) = c.to_digit(10) {
                if previous_was_digit {
                    return Err(FenError::AdjacentDigits { row });
                }
                if !(1..=8).contains(&run) {
                    return Err(FenError::InvalidDigit { char: c });
                }
                file += run as usize;
                previous_was_digit = true;
            } else {
                let piece = Piece::from_symbol(c).ok_or(FenError::InvalidPiece { char: c })?;
                if let Some(sq) = Square::new(rank, file) {
                    placement[piece.color.index()][piece.kind.index()] |= sq.bitboard();
                }
                file += 1;
                previous_was_digit = false;
            }
        }

        if file != 8 {
            return Err(FenError::BadRowLength { row, squares: file });
        }
    }
    Ok(placement)
}

fn parse_side_to_move(field: &str) -> Result<Color, FenError> {
    match field {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        other => Err(FenError::InvalidSideToMove {
            found: other.to_string(),
        }),
    }
}

/// En passant is validated but not kept: `-` or a square on rank 3 or 6.
fn validate_en_passant(field: &str) -> Result<(), FenError> {
    if field == "-" {
        return Ok(());
    }
    match field.parse::<Square>() {
        Ok(sq) if field.as_bytes()[0].is_ascii_lowercase() && (sq.rank() == 2 || sq.rank() == 5) => {
            Ok(())
        }
        _ => Err(FenError::InvalidEnPassant {
            found: field.to_string(),
        }),
    }
}

fn validate_counter(field: &str) -> Result<(), FenError> {
    field
        .parse::<u32>()
        .map(|_| ())
        .map_err(|_| FenError::InvalidCounter {
            found: field.to_string(),
        })
}

impl Board {
    /// Build a board from a piece placement string alone.
    ///
    /// The result has White to move and no castling rights.
    pub fn try_from_board_fen(board_fen: &str) -> Result<Self, FenError> {
        let mut board = Board::empty();
        board.set_board_fen(board_fen)?;
        Ok(board)
    }

    /// Replace the pieces from a piece placement string, keeping the side to
    /// move and castling rights. The board is unchanged on error.
    pub fn set_board_fen(&mut self, board_fen: &str) -> Result<(), FenError> {
        let placement = parse_placement(board_fen).map_err(log_rejected(board_fen))?;
        self.pieces = placement;
        Ok(())
    }

    /// Parse a board position from a full six-field FEN.
    ///
    /// Side to move and castling rights are kept; the en passant square and
    /// the move counters are validated and then discarded.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let mut board = Board::empty();
        board.set_fen(fen)?;
        Ok(board)
    }

    /// Parse a board position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Load a full six-field FEN. The board is unchanged on error.
    pub fn set_fen(&mut self, fen: &str) -> Result<(), FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.len() != 6 {
            return Err(log_rejected(fen)(FenError::WrongFieldCount {
                found: fields.len(),
            }));
        }

        let parse = || -> Result<(Placement, Color, CastlingRights), FenError> {
            let placement = parse_placement(fields[0])?;
            let side = parse_side_to_move(fields[1])?;
            let castling = fields[2].parse::<CastlingRights>()?;
            validate_en_passant(fields[3])?;
            validate_counter(fields[4])?;
            validate_counter(fields[5])?;
            Ok((placement, side, castling))
        };
        let (placement, side, castling) = parse().map_err(log_rejected(fen))?;

        self.pieces = placement;
        self.side_to_move = side;
        self.castling_rights = castling;
        Ok(())
    }

    /// Serialize the piece placement, rank 8 first.
    #[must_use]
    pub fn board_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                let sq = Square::from_index_unchecked(rank * 8 + file);
                if let Some(piece) = self.piece_at(sq) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.symbol());
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }
        rows.join("/")
    }

    /// Convert the board position to FEN notation.
    ///
    /// En passant and the counters are not tracked, so they are always `- 0 1`.
    #[must_use]
    pub fn fen(&self) -> String {
        format!(
            "{} {} {} - 0 1",
            self.board_fen(),
            self.side_to_move.fen_symbol(),
            self.castling_rights
        )
    }
}

#[cfg_attr(not(feature = "logging"), allow(unused_variables))]
fn log_rejected(input: &str) -> impl Fn(FenError) -> FenError + '_ {
    move |err| {
        #[cfg(feature = "logging")]
        log::debug!("rejected FEN {input:?}: {err}");
        err
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fen_round_trip() {
        let board = Board::try_from_fen(STARTING_FEN).unwrap();
        assert_eq!(board.fen(), STARTING_FEN);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_board_fen_round_trip() {
        for placement in [
            STARTING_BOARD_FEN,
            "8/8/8/8/8/8/8/8",
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R",
            "4k3/8/8/3pP3/8/8/8/4K3",
            "1n4N1/8/8/8/8/8/8/7k",
        ] {
            let board = Board::try_from_board_fen(placement).unwrap();
            assert_eq!(board.board_fen(), placement);
        }
    }

    #[test]
    fn test_file_tracking_across_mixed_runs() {
        // Digit runs between letters must shift the file by their value only.
        let board = Board::try_from_board_fen("1n2b1qk/8/8/8/8/8/8/K6R").unwrap();
        assert_eq!(board.piece_type_at(Square::B8), Some(PieceType::Knight));
        assert_eq!(board.piece_type_at(Square::E8), Some(PieceType::Bishop));
        assert_eq!(board.piece_type_at(Square::G8), Some(PieceType::Queen));
        assert_eq!(board.piece_type_at(Square::H8), Some(PieceType::King));
        assert_eq!(board.piece_type_at(Square::A1), Some(PieceType::King));
        assert_eq!(board.piece_type_at(Square::H1), Some(PieceType::Rook));
        assert_eq!(board.occupied().popcount(), 6);
    }

    #[test]
    fn test_case_encodes_color() {
        let board = Board::try_from_board_fen("8/8/8/8/8/8/8/Nn6").unwrap();
        assert_eq!(board.color_at(Square::A1), Some(Color::White));
        assert_eq!(board.color_at(Square::B1), Some(Color::Black));
    }

    #[test]
    fn test_fen_error_row_count() {
        assert_eq!(
            Board::try_from_board_fen("8/8/8/8/8/8/8"),
            Err(FenError::WrongRowCount { found: 7 })
        );
        assert_eq!(
            Board::try_from_board_fen(""),
            Err(FenError::WrongRowCount { found: 1 })
        );
    }

    #[test]
    fn test_fen_error_row_length() {
        assert_eq!(
            Board::try_from_board_fen("8/8/8/8/8/8/8/7"),
            Err(FenError::BadRowLength { row: 7, squares: 7 })
        );
        assert_eq!(
            Board::try_from_board_fen("ppppppppp/8/8/8/8/8/8/8"),
            Err(FenError::BadRowLength { row: 0, squares: 9 })
        );
        assert_eq!(
            Board::try_from_board_fen("8/8//8/8/8/8/8"),
            Err(FenError::BadRowLength { row: 2, squares: 0 })
        );
    }

    #[test]
    fn test_fen_error_adjacent_digits() {
        assert_eq!(
            Board::try_from_board_fen("8/8/8/44/8/8/8/8"),
            Err(FenError::AdjacentDigits { row: 3 })
        );
    }

    #[test]
    fn test_fen_error_invalid_symbols() {
        assert_eq!(
            Board::try_from_board_fen("rnbqkbnr/ppppxppp/8/8/8/8/PPPPPPPP/RNBQKBNR"),
            Err(FenError::InvalidPiece { char: 'x' })
        );
        assert_eq!(
            Board::try_from_board_fen("8/8/8/8/8/8/8/p0ppppppp"),
            Err(FenError::InvalidDigit { char: '0' })
        );
        assert_eq!(
            Board::try_from_board_fen("9/8/8/8/8/8/8/8"),
            Err(FenError::InvalidDigit { char: '9' })
        );
    }

    #[test]
    fn test_fen_black_to_move() {
        let fen = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1";
        let board = Board::try_from_fen(fen).unwrap();
        assert_eq!(board.side_to_move(), Color::Black);
        assert_eq!(
            board.fen(),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1"
        );
    }

    #[test]
    fn test_fen_error_field_count() {
        let result = Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq");
        assert_eq!(result, Err(FenError::WrongFieldCount { found: 3 }));
        let result = Board::try_from_fen(&format!("{STARTING_FEN} extra"));
        assert_eq!(result, Err(FenError::WrongFieldCount { found: 7 }));
    }

    #[test]
    fn test_fen_error_invalid_side_to_move() {
        let result =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1");
        assert!(matches!(result, Err(FenError::InvalidSideToMove { .. })));
    }

    #[test]
    fn test_fen_error_invalid_castling() {
        let result =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w XQkq - 0 1");
        assert!(matches!(result, Err(FenError::InvalidCastling { .. })));
    }

    #[test]
    fn test_fen_error_invalid_en_passant() {
        for ep in ["z9", "e4", "E3", "e"] {
            let fen = format!("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq {ep} 0 1");
            assert!(
                matches!(
                    Board::try_from_fen(&fen),
                    Err(FenError::InvalidEnPassant { .. })
                ),
                "{ep} should be rejected"
            );
        }
    }

    #[test]
    fn test_fen_error_invalid_counters() {
        let result =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - x 1");
        assert!(matches!(result, Err(FenError::InvalidCounter { .. })));
        let result =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 -1");
        assert!(matches!(result, Err(FenError::InvalidCounter { .. })));
    }

    #[test]
    fn test_fen_partial_castling() {
        let board =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w Kq - 0 1").unwrap();
        let rights = board.castling_rights();
        assert!(rights.has(Color::White, true));
        assert!(!rights.has(Color::White, false));
        assert!(!rights.has(Color::Black, true));
        assert!(rights.has(Color::Black, false));
    }

    #[test]
    fn test_castling_field_is_written_in_kqkq_order() {
        let board = Board::try_from_fen("r3k2r/8/8/8/8/8/8/R3K2R w qK - 0 1").unwrap();
        assert_eq!(board.fen(), "r3k2r/8/8/8/8/8/8/R3K2R w Kq - 0 1");
        let board = Board::try_from_fen("r3k2r/8/8/8/8/8/8/R3K2R w qkQK - 0 1").unwrap();
        assert_eq!(board.castling_rights(), CastlingRights::all());
        assert!(board.fen().ends_with(" w KQkq - 0 1"));
    }

    #[test]
    fn test_failed_set_fen_leaves_board_untouched() {
        let mut board = Board::new();
        assert!(board.set_fen("8/8/8/8/8/8/8/8 w - - 0").is_err());
        assert!(board.set_board_fen("8/8/8/8/8/8/8/9").is_err());
        assert!(board.set_fen("4k3/8/8/8/8/8/8/4K3 w KQ - 0 1x").is_err());
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_set_board_fen_keeps_state() {
        let mut board = Board::new();
        board.set_side_to_move(Color::Black);
        board.set_board_fen("4k3/8/8/8/8/8/8/4K3").unwrap();
        assert_eq!(board.side_to_move(), Color::Black);
        assert_eq!(board.castling_rights(), CastlingRights::all());
        assert_eq!(board.occupied().popcount(), 2);
    }

    #[test]
    fn test_from_str_trait() {
        let board: Board = STARTING_FEN.parse().unwrap();
        assert_eq!(board.side_to_move(), Color::White);
    }
}
