//! Edge case tests for unusual positions and inputs.

use crate::board::{Bitboard, Board, BoardBuilder, Color, FenError, MoveError, PieceType, Square};

#[test]
fn test_pieces_in_corners() {
    let board = Board::from_fen("r6b/8/8/8/8/8/8/N6K w - - 0 1");
    assert_eq!(board.legal_destinations(Square::A1).popcount(), 2);
    // h8 bishop sees the whole long diagonal down to the knight
    assert!(board.is_legal(Square::H8, Square::B2));
    assert!(board.is_capture(Square::H8, Square::A1));
    assert_eq!(
        board.move_is_legal(Square::A8, Square::H8),
        Err(MoveError::SquareNotEmpty { square: Square::H8 })
    );
}

#[test]
fn test_rook_on_edge_does_not_wrap() {
    let board = Board::from_fen("4k3/8/8/8/7R/8/8/4K3 w - - 0 1");
    let dest = board.legal_destinations(Square::H4);
    assert!(!dest.contains(Square::A5));
    assert!(dest.contains(Square::A4));
    assert_eq!(dest.popcount(), 14);
}

#[test]
fn test_knight_on_h_file_does_not_wrap() {
    let board = Board::from_fen("4k3/8/8/8/7N/8/8/4K3 w - - 0 1");
    let expected: Bitboard = [Square::G2, Square::F3, Square::F5, Square::G6]
        .into_iter()
        .collect();
    assert_eq!(board.legal_destinations(Square::H4), expected);
}

#[test]
fn test_many_queens() {
    let board = Board::from_fen("QQQQQQQQ/8/8/8/8/8/8/k6K w - - 0 1");
    assert_eq!(board.pieces(Color::White, PieceType::Queen).popcount(), 8);
    assert!(board.is_in_check(Color::Black));
    assert_eq!(board.fen(), "QQQQQQQQ/8/8/8/8/8/8/k6K w - - 0 1");
}

#[test]
fn test_two_kings_of_one_color() {
    let board = BoardBuilder::new()
        .piece(Square::A1, Color::White, PieceType::King)
        .piece(Square::H8, Color::White, PieceType::King)
        .piece(Square::A8, Color::Black, PieceType::Rook)
        .build();
    // The lowest king square is the one checked
    assert_eq!(board.king_square(Color::White), Some(Square::A1));
    assert!(board.is_in_check(Color::White));
}

#[test]
fn test_fen_with_extra_whitespace() {
    let board =
        Board::try_from_fen("  rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR   w  KQkq -  0 1 ")
            .unwrap();
    assert_eq!(board, Board::new());
}

#[test]
fn test_fen_rejects_trailing_slash() {
    assert_eq!(
        Board::try_from_board_fen("8/8/8/8/8/8/8/8/"),
        Err(FenError::WrongRowCount { found: 9 })
    );
}

#[test]
fn test_fen_rejects_unicode_digit() {
    assert!(matches!(
        Board::try_from_board_fen("8/8/8/8/8/8/8/٨"),
        Err(FenError::InvalidPiece { .. })
    ));
}

#[test]
fn test_move_after_failed_move_still_works() {
    let mut board = Board::new();
    assert!(board.make_move(Square::E2, Square::E5).is_err());
    assert_eq!(board.side_to_move(), Color::White);
    assert!(board.make_move(Square::E2, Square::E4).is_ok());
}

#[test]
fn test_turn_is_not_enforced() {
    let mut board = Board::new();
    board.make_move(Square::E2, Square::E4).unwrap();
    // White moves again; the turn follows the piece that moved
    board.make_move(Square::D2, Square::D4).unwrap();
    assert_eq!(board.side_to_move(), Color::Black);
}
