use crate::board::{Board, Color};
use crate::moves::movegen::{generate_legal_moves, is_in_check};

/// Terminal classification of a position. The string forms are part of the
/// external surface; wrappers accept them verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Ongoing,
    BlackWins,
    WhiteWins,
    DrawStalemate,
    DrawRepetition,
    /// Reserved for the impasse rule; never produced by the classifier.
    DrawImpasse,
}

impl GameResult {
    pub fn as_str(self) -> &'static str {
        match self {
            GameResult::Ongoing => "ONGOING",
            GameResult::BlackWins => "BLACK_WINS",
            GameResult::WhiteWins => "WHITE_WINS",
            GameResult::DrawStalemate => "DRAW_STALEMATE",
            GameResult::DrawRepetition => "DRAW_REPETITION",
            GameResult::DrawImpasse => "DRAW_IMPASSE",
        }
    }

    #[inline(always)]
    pub fn is_terminal(self) -> bool {
        self != GameResult::Ongoing
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Move-based outcome for the side to move: checkmated sides lose, a
/// stalemated side draws, anything with a legal reply is still in play.
/// Repetition is layered on top by the game state, which owns the history.
pub fn get_game_result(board: &Board, side: Color) -> GameResult {
    if !generate_legal_moves(board, side).is_empty() {
        return GameResult::Ongoing;
    }
    if is_in_check(board, side) {
        match side {
            Color::Black => GameResult::WhiteWins,
            Color::White => GameResult::BlackWins,
        }
    } else {
        GameResult::DrawStalemate
    }
}
