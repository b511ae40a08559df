//! Zobrist hashing properties and repetition detection through the game
//! state.

use gyoku::board::{Board, Color, Piece, parse_sfen};
use gyoku::game::GameState;
use gyoku::hash::zobrist::{compute_hash, zobrist_keys};
use gyoku::status::GameResult;

#[test]
fn tables_are_deterministic_across_lookups() {
    let a = zobrist_keys();
    let b = zobrist_keys();
    assert!(std::ptr::eq(a, b));
    assert_ne!(a.side_to_move, 0);
}

#[test]
fn hash_tracks_make_and_undo() {
    let mut game = GameState::new();
    let start_hash = game.hash;

    assert!(game.make_move_usi("1d1c").is_ok());
    assert_ne!(game.hash, start_hash, "a move must change the hash");
    assert_eq!(
        game.hash,
        compute_hash(&game.board, game.side_to_move),
        "stored hash must match a fresh recompute"
    );

    assert!(game.undo_move());
    assert_eq!(game.hash, start_hash);
}

#[test]
fn side_to_move_distinguishes_mirrored_positions() {
    let board = Board::initial_position();
    assert_ne!(
        compute_hash(&board, Color::Black),
        compute_hash(&board, Color::White)
    );
}

#[test]
fn hand_composition_distinguishes_positions() {
    // Materially identical boards whose hands differ are different
    // positions for repetition purposes.
    let (bare, _, _) = parse_sfen("4k/5/5/5/4K b - 1").expect("valid SFEN");
    let (with_pawn, _, _) = parse_sfen("4k/5/5/5/4K b P 1").expect("valid SFEN");
    let (with_two, _, _) = parse_sfen("4k/5/5/5/4K b 2P 1").expect("valid SFEN");

    let h0 = compute_hash(&bare, Color::Black);
    let h1 = compute_hash(&with_pawn, Color::Black);
    let h2 = compute_hash(&with_two, Color::Black);
    assert_ne!(h0, h1);
    assert_ne!(h1, h2);
    assert_ne!(h0, h2);
}

#[test]
fn hand_counts_saturate_above_two() {
    let mut two = Board::new_empty();
    two.add_to_hand(Color::White, Piece::Gold);
    two.add_to_hand(Color::White, Piece::Gold);
    let mut three = two.clone();
    three.add_to_hand(Color::White, Piece::Gold);

    assert_eq!(
        compute_hash(&two, Color::Black),
        compute_hash(&three, Color::Black)
    );
}

#[test]
fn fourfold_repetition_scenario() {
    let mut game = GameState::new();
    // Both golds shuffle out and back; each 4-ply cycle revisits the
    // starting position with Black to move.
    let cycle = ["2e2d", "4a4b", "2d2e", "4b4a"];

    for lap in 1..=3 {
        for notation in cycle {
            assert_eq!(
                game.result,
                GameResult::Ongoing,
                "premature result in lap {lap}"
            );
            game.make_move_usi(notation)
                .unwrap_or_else(|reason| panic!("{notation} in lap {lap}: {reason}"));
        }
    }

    // The start position has now occurred four times (laps 0 through 3).
    assert_eq!(game.result, GameResult::DrawRepetition);
}

#[test]
fn repetition_counts_only_exact_hash_matches() {
    let mut game = GameState::new();
    // Two full cycles revisit the start three times; not yet a draw.
    let cycle = ["2e2d", "4a4b", "2d2e", "4b4a"];
    for _ in 0..2 {
        for notation in cycle {
            game.make_move_usi(notation).expect("legal shuffle");
        }
    }
    assert_eq!(game.result, GameResult::Ongoing);
}
