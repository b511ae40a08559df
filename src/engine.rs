//! Stateless facade consumed by the outer wrappers (HTTP adapter, UI,
//! puzzle tooling). Every entry point takes a position as input, either
//! implicitly (new game) or as SFEN, and returns serializable reports.

use crate::board::{Board, Color};
use crate::game::GameState;
use crate::search::agents::{GreedyAgent, MinimaxAgent, RandomAgent};
use serde::Serialize;

pub const MINIMAX_DEPTH: u32 = 5;
pub const EASY_MINIMAX_DEPTH: u32 = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HandEntry {
    /// Uppercase base-piece letter.
    pub piece: char,
    pub count: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionReport {
    pub sfen: String,
    /// `'b'` or `'w'`.
    pub side_to_move: char,
    pub legal_moves: Vec<String>,
    pub in_check: bool,
    pub result: String,
    pub black_hand: Vec<HandEntry>,
    pub white_hand: Vec<HandEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadReport {
    #[serde(flatten)]
    pub position: PositionReport,
    /// Raw occupancy bitboard, handy for UI overlays.
    pub occupied: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoveReport {
    #[serde(flatten)]
    pub position: PositionReport,
    /// The applied move in canonical USI form.
    pub move_played: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegalMovesReport {
    pub moves: Vec<String>,
    pub count: usize,
}

fn hand_entries(board: &Board, color: Color) -> Vec<HandEntry> {
    board
        .pieces_in_hand(color)
        .into_iter()
        .map(|(pt, count)| HandEntry {
            piece: pt.sfen_char(),
            count,
        })
        .collect()
}

fn report(game: &GameState) -> PositionReport {
    PositionReport {
        sfen: game.to_sfen(),
        side_to_move: match game.side_to_move {
            Color::Black => 'b',
            Color::White => 'w',
        },
        legal_moves: game.legal_moves().iter().map(|mv| mv.to_usi()).collect(),
        in_check: game.in_check(),
        result: game.result.as_str().to_string(),
        black_hand: hand_entries(&game.board, Color::Black),
        white_hand: hand_entries(&game.board, Color::White),
    }
}

/// A fresh game from the starting position.
pub fn new_game() -> PositionReport {
    report(&GameState::new())
}

/// Load and audit an SFEN position.
pub fn load_position(sfen: &str) -> Result<LoadReport, String> {
    let game = GameState::from_sfen(sfen)?;
    Ok(LoadReport {
        occupied: game.board.occupied(),
        position: report(&game),
    })
}

/// Apply a USI move to an SFEN position.
pub fn make_move(sfen: &str, notation: &str) -> Result<MoveReport, String> {
    let mut game = GameState::from_sfen(sfen)?;
    game.make_move_usi(notation)?;
    let move_played = game
        .history
        .last()
        .map(|record| record.mv.to_usi())
        .unwrap_or_default();
    Ok(MoveReport {
        position: report(&game),
        move_played,
    })
}

/// Ask an agent for a move. `bot_type` is one of `random`, `greedy`,
/// `minimax` (depth 5) or `easy_minimax` (depth 3).
pub fn get_bot_move(sfen: &str, bot_type: &str) -> Result<String, String> {
    let game = GameState::from_sfen(sfen)?;
    let board = &game.board;
    let side = game.side_to_move;

    let chosen = match bot_type {
        "random" => RandomAgent::from_entropy().choose_move(board, side),
        "greedy" => GreedyAgent::from_entropy().choose_move(board, side),
        "minimax" => MinimaxAgent::new(MINIMAX_DEPTH).choose_move(board, side),
        "easy_minimax" => MinimaxAgent::new(EASY_MINIMAX_DEPTH).choose_move(board, side),
        other => return Err(format!("Unknown bot type: {other}")),
    };

    chosen
        .map(|mv| mv.to_usi())
        .ok_or_else(|| "No legal moves".to_string())
}

/// The legal moves of an SFEN position as USI strings.
pub fn get_legal_moves(sfen: &str) -> Result<LegalMovesReport, String> {
    let game = GameState::from_sfen(sfen)?;
    let moves: Vec<String> = game.legal_moves().iter().map(|mv| mv.to_usi()).collect();
    let count = moves.len();
    Ok(LegalMovesReport { moves, count })
}
