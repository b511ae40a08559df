//! Evaluation properties and agent behavior.

use gyoku::board::{Color, parse_sfen};
use gyoku::game::GameState;
use gyoku::moves::execute::apply_move;
use gyoku::search::agents::{GreedyAgent, MinimaxAgent, RandomAgent};
use gyoku::search::eval::evaluate;
use gyoku::status::{GameResult, get_game_result};

#[test]
fn evaluation_is_antisymmetric_along_a_random_game() {
    let mut game = GameState::new();
    let mut agent = RandomAgent::new(2024);

    for _ in 0..40 {
        assert_eq!(
            evaluate(&game.board, Color::Black) + evaluate(&game.board, Color::White),
            0,
            "perspectives must cancel at {}",
            game.to_sfen()
        );
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
fn minimax_prefers_mate_over_material() {
    // The white rook on 5c can neither block nor capture on 2b, so the
    // supported mate there must be found.
    let (board, side, _) = parse_sfen("k4/5/1+RG1r/5/4K b - 1").expect("valid SFEN");
    let mv = MinimaxAgent::new(3)
        .choose_move(&board, side)
        .expect("has moves");
    let mut next = board.clone();
    apply_move(&mut next, mv, side);
    assert_eq!(
        get_game_result(&next, Color::White),
        GameResult::BlackWins,
        "expected mate, engine chose {mv}"
    );
}

#[test]
fn minimax_is_deterministic() {
    let (board, side, _) = parse_sfen("rbsgk/4p/5/P4/KGSBR b - 1").expect("valid SFEN");
    let agent = MinimaxAgent::new(3);
    let first = agent.choose_move(&board, side);
    let second = agent.choose_move(&board, side);
    assert_eq!(first, second);
    assert!(first.is_some());
}

#[test]
fn depth_five_search_completes_from_the_opening() {
    let (board, side, _) = parse_sfen("rbsgk/4p/5/P4/KGSBR b - 1").expect("valid SFEN");
    let mv = MinimaxAgent::new(5)
        .choose_move(&board, side)
        .expect("has moves");
    let legal: Vec<String> = gyoku::moves::movegen::generate_legal_moves(&board, side)
        .iter()
        .map(|m| m.to_usi())
        .collect();
    assert!(legal.contains(&mv.to_usi()));
}

#[test]
fn greedy_takes_the_most_valuable_victim() {
    // Both a pawn and a rook hang; greedy must take the rook.
    let (board, side, _) = parse_sfen("k4/5/r1p2/1B3/4K b - 1").expect("valid SFEN");
    let mv = GreedyAgent::new(5)
        .choose_move(&board, side)
        .expect("has moves");
    assert_eq!(
        mv.captured(),
        Some(gyoku::board::Piece::Rook),
        "greedy chose {mv}"
    );
}

#[test]
fn greedy_without_captures_plays_some_quiet_move() {
    let (board, side, _) = parse_sfen("4k/5/5/5/K4 b - 1").expect("valid SFEN");
    let mv = GreedyAgent::new(5)
        .choose_move(&board, side)
        .expect("has moves");
    assert!(!mv.is_capture());
}

#[test]
fn stalemate_is_a_draw_for_the_stalemated_side() {
    // White to move: not in check, but 2a, 1b and 2b are all covered.
    let (board, side, _) = parse_sfen("k1G2/5/1K3/5/5 w - 1").expect("valid SFEN");
    assert_eq!(side, Color::White);
    assert_eq!(get_game_result(&board, Color::White), GameResult::DrawStalemate);

    let game = GameState::from_sfen("k1G2/5/1K3/5/5 w - 1").expect("valid SFEN");
    assert_eq!(game.result, GameResult::DrawStalemate);
    assert_eq!(game.result.as_str(), "DRAW_STALEMATE");
}
