//! SFEN parsing, emission, and the invariant audit behind loading.

use gyoku::board::{Board, Color, Piece, parse_sfen, to_sfen};
use gyoku::game::GameState;
use gyoku::moves::validate::validate_position;
use gyoku::search::agents::RandomAgent;

#[test]
fn authoritative_initial_sfen() {
    let (board, side, movenum) = parse_sfen("rbsgk/4p/5/P4/KGSBR b - 1").expect("valid SFEN");
    assert_eq!(board, Board::initial_position());
    assert_eq!(side, Color::Black);
    assert_eq!(movenum, 1);
}

#[test]
fn every_reachable_position_round_trips() {
    // Walk a seeded random game and require parse(to_sfen(S)) == S at every
    // step, hands and promotions included.
    let mut game = GameState::new();
    let mut agent = RandomAgent::new(0xC0FFEE);

    for _ in 0..50 {
        let sfen = game.to_sfen();
        let (board, side, movenum) = parse_sfen(&sfen).expect("own emission parses");
        assert_eq!(board, game.board, "board drifted through {sfen}");
        assert_eq!(side, game.side_to_move);
        assert_eq!(movenum, game.move_number);

        if game.result.is_terminal() {
            break;
        }
        let Some(mv) = agent.choose_move(&game.board, game.side_to_move) else {
            break;
        };
        assert!(game.make_move(mv));
    }
}

#[test]
fn hands_parse_with_counts_and_cases() {
    let (board, _, _) = parse_sfen("4k/5/5/5/4K w 2PGr 9").expect("valid SFEN");
    assert_eq!(board.hand_count(Color::Black, Piece::Pawn), 2);
    assert_eq!(board.hand_count(Color::Black, Piece::Gold), 1);
    assert_eq!(board.hand_count(Color::White, Piece::Rook), 1);
    assert_eq!(board.hand_count(Color::White, Piece::Pawn), 0);
}

#[test]
fn emission_orders_hands_conventionally() {
    let (board, side, movenum) = parse_sfen("4k/5/5/5/4K b PG2r 3").expect("valid SFEN");
    // Black's hand prints first, each side in descending piece order.
    assert_eq!(to_sfen(&board, side, movenum), "4k/5/5/5/4K b GP2r 3");
}

#[test]
fn malformed_sfens_are_rejected() {
    let cases = [
        // Too few fields.
        "rbsgk/4p/5/P4/KGSBR b -",
        // Six ranks.
        "rbsgk/4p/5/5/P4/KGSBR b - 1",
        // Rank too wide.
        "rbsgk1/4p/5/P4/KGSBR b - 1",
        // Rank too narrow.
        "rbsg/4p/5/P4/KGSBR b - 1",
        // Unknown piece letter.
        "rbsqk/4p/5/P4/KGSBR b - 1",
        // Bad side tag.
        "rbsgk/4p/5/P4/KGSBR x - 1",
        // Dangling promotion marker.
        "rbsgk/4p/5/P4/KGSB+ b - 1",
        // Promotion of an unpromotable piece.
        "rbs+gk/4p/5/P4/KGSBR b - 1",
        // Zero move number.
        "rbsgk/4p/5/P4/KGSBR b - 0",
        // King in hand.
        "rbsg1/4p/5/P4/KGSBR b k 1",
        // Dangling hand count.
        "rbsgk/4p/5/P4/KGSBR b 2 1",
    ];
    for sfen in cases {
        assert!(parse_sfen(sfen).is_err(), "accepted malformed SFEN {sfen:?}");
    }
}

#[test]
fn invariant_violations_fail_the_load() {
    let cases = [
        // Two black kings.
        "4k/5/5/5/3KK b - 1",
        // No white king.
        "5/5/5/5/4K b - 1",
        // Unpromoted pawn on its last rank.
        "P3k/5/5/5/4K b - 1",
        // Nifu on file 1.
        "4k/P4/5/P4/4K b - 1",
        // Unpromoted knight on the second-to-last rank.
        "4k/N4/5/5/4K b - 1",
    ];
    for sfen in cases {
        assert!(parse_sfen(sfen).is_err(), "accepted invalid position {sfen:?}");
    }
}

#[test]
fn validate_position_reports_specific_violations() {
    let mut board = Board::new_empty();
    board.place_piece(13, Piece::King, Color::Black);
    board.update_occupied();

    let violations = validate_position(&board);
    assert!(
        violations.iter().any(|v| v.contains("White")),
        "missing white king unreported: {violations:?}"
    );
}
