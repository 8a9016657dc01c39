//! Castling tests: preconditions, attacked squares, rook relocation and rights.

use crate::board::{Board, Color, MoveError, Piece, PieceType, Square};

const BOTH_SIDES: &str = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1";

#[test]
fn test_kingside_castling_moves_the_rook() {
    let mut board = Board::from_fen(BOTH_SIDES);
    assert_eq!(board.move_is_legal(Square::E1, Square::G1), Ok(()));
    assert_eq!(board.make_move(Square::E1, Square::G1), Ok(None));

    assert_eq!(
        board.piece_at(Square::G1),
        Some(Piece::new(PieceType::King, Color::White))
    );
    assert_eq!(
        board.piece_at(Square::F1),
        Some(Piece::new(PieceType::Rook, Color::White))
    );
    assert!(board.is_empty(Square::E1));
    assert!(board.is_empty(Square::H1));
    assert_eq!(board.board_fen(), "r3k2r/8/8/8/8/8/8/R4RK1");

    let rights = board.castling_rights();
    assert!(!rights.has(Color::White, true));
    assert!(!rights.has(Color::White, false));
    assert!(rights.has(Color::Black, true));
    assert!(rights.has(Color::Black, false));
    assert_eq!(board.side_to_move(), Color::Black);
}

#[test]
fn test_queenside_castling_moves_the_rook() {
    let mut board = Board::from_fen(BOTH_SIDES);
    board.make_move(Square::E1, Square::C1).unwrap();
    assert_eq!(board.board_fen(), "r3k2r/8/8/8/8/8/8/2KR3R");
}

#[test]
fn test_black_castles_both_ways() {
    let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1");
    let mut kingside = board.clone();
    kingside.make_move(Square::E8, Square::G8).unwrap();
    assert_eq!(kingside.board_fen(), "r4rk1/8/8/8/8/8/8/R3K2R");
    assert_eq!(kingside.fen(), "r4rk1/8/8/8/8/8/8/R3K2R w KQ - 0 1");

    board.make_move(Square::E8, Square::C8).unwrap();
    assert_eq!(board.board_fen(), "2kr3r/8/8/8/8/8/8/R3K2R");
}

#[test]
fn test_castling_requires_the_rights_flag() {
    let board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w Qkq - 0 1");
    assert_eq!(
        board.move_is_legal(Square::E1, Square::G1),
        Err(MoveError::CastlingNotAllowed)
    );
    assert_eq!(board.move_is_legal(Square::E1, Square::C1), Ok(()));
}

#[test]
fn test_castling_requires_the_rook_at_home() {
    let board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K3 w KQkq - 0 1");
    assert_eq!(
        board.move_is_legal(Square::E1, Square::G1),
        Err(MoveError::CastlingNotAllowed)
    );

    let board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K1r1 w KQkq - 0 1");
    assert!(!board.is_legal(Square::E1, Square::G1));
}

#[test]
fn test_castling_requires_the_king_at_home() {
    let board = Board::from_fen("r3k2r/8/8/8/8/8/8/R2K3R w KQkq - 0 1");
    assert_eq!(
        board.move_is_legal(Square::D1, Square::F1),
        Err(MoveError::NotPseudoLegal {
            from: Square::D1,
            to: Square::F1
        })
    );
}

#[test]
fn test_castling_requires_empty_squares() {
    let board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3KB1R w KQkq - 0 1");
    assert_eq!(
        board.move_is_legal(Square::E1, Square::G1),
        Err(MoveError::CastlingNotAllowed)
    );

    let board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K1NR w KQkq - 0 1");
    assert_eq!(
        board.move_is_legal(Square::E1, Square::G1),
        Err(MoveError::SquareNotEmpty { square: Square::G1 })
    );

    // The b-file square must be empty even though the king never crosses it
    let board = Board::from_fen("r3k2r/8/8/8/8/8/8/RN2K2R w KQkq - 0 1");
    assert_eq!(
        board.move_is_legal(Square::E1, Square::C1),
        Err(MoveError::CastlingNotAllowed)
    );
    assert_eq!(board.move_is_legal(Square::E1, Square::G1), Ok(()));
}

#[test]
fn test_each_kingside_condition_matters() {
    let legal = Board::from_fen("4k3/8/8/8/8/8/8/4K2R w K - 0 1");
    assert!(legal.is_legal(Square::E1, Square::G1));

    let no_right = Board::from_fen("4k3/8/8/8/8/8/8/4K2R w - - 0 1");
    let no_rook = Board::from_fen("4k3/8/8/8/8/8/8/4K3 w K - 0 1");
    let king_moved = Board::from_fen("4k3/8/8/8/8/8/8/5K1R w K - 0 1");
    let blocked = Board::from_fen("4k3/8/8/8/8/8/8/4KN1R w K - 0 1");
    for board in [no_right, no_rook, blocked] {
        assert!(!board.is_legal(Square::E1, Square::G1), "{}", board.fen());
    }
    assert!(!king_moved.is_legal(Square::F1, Square::H1));
    assert!(!king_moved.can_castle_kingside(Color::White));
}

#[test]
fn test_cannot_castle_through_an_attacked_square() {
    let board = Board::from_fen("r3kr2/8/8/8/8/8/8/R3K2R w KQq - 0 1");
    assert_eq!(
        board.move_is_legal(Square::E1, Square::G1),
        Err(MoveError::CastlingThroughCheck { square: Square::F1 })
    );
    assert_eq!(board.move_is_legal(Square::E1, Square::C1), Ok(()));

    let board = Board::from_fen("3rk3/8/8/8/8/8/8/R3K3 w Q - 0 1");
    assert_eq!(
        board.move_is_legal(Square::E1, Square::C1),
        Err(MoveError::CastlingThroughCheck { square: Square::D1 })
    );
}

#[test]
fn test_cannot_castle_out_of_check() {
    let board = Board::from_fen("4k3/8/8/4r3/8/8/8/R3K2R w KQ - 0 1");
    assert_eq!(
        board.move_is_legal(Square::E1, Square::G1),
        Err(MoveError::CastlingThroughCheck { square: Square::E1 })
    );
}

#[test]
fn test_cannot_castle_into_check() {
    let board = Board::from_fen("4k1r1/8/8/8/8/8/8/R3K2R w KQ - 0 1");
    assert_eq!(
        board.move_is_legal(Square::E1, Square::G1),
        Err(MoveError::KingInCheck)
    );
}

#[test]
fn test_attacked_b_file_square_does_not_stop_queenside() {
    let board = Board::from_fen("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1");
    assert!(board.is_square_attacked(Square::B1, Color::Black));
    assert_eq!(board.move_is_legal(Square::E1, Square::C1), Ok(()));
}

#[test]
fn test_rook_move_revokes_one_side() {
    let mut board = Board::from_fen(BOTH_SIDES);
    board.make_move(Square::H1, Square::H5).unwrap();
    assert!(!board.castling_rights().has(Color::White, true));
    assert!(board.castling_rights().has(Color::White, false));

    board.make_move(Square::A8, Square::A7).unwrap();
    board.make_move(Square::H5, Square::H1).unwrap();
    assert_eq!(
        board.move_is_legal(Square::E1, Square::G1),
        Err(MoveError::CastlingNotAllowed)
    );
    assert_eq!(board.fen(), "4k2r/r7/8/8/8/8/8/R3K2R b Qk - 0 1");
}

#[test]
fn test_king_move_revokes_both_sides() {
    let mut board = Board::from_fen(BOTH_SIDES);
    board.make_move(Square::E1, Square::E2).unwrap();
    board.make_move(Square::E8, Square::E7).unwrap();
    assert!(board.castling_rights().is_empty());
}

#[test]
fn test_capturing_a_home_rook_revokes_its_right() {
    let mut board = Board::from_fen("r3k2r/8/8/8/8/8/6b1/R3K2R b KQkq - 0 1");
    let captured = board.make_move(Square::G2, Square::H1).unwrap();
    assert_eq!(captured, Some(Piece::new(PieceType::Rook, Color::White)));
    let rights = board.castling_rights();
    assert!(!rights.has(Color::White, true));
    assert!(rights.has(Color::White, false));
    assert!(rights.has(Color::Black, true));
    assert!(rights.has(Color::Black, false));
}
