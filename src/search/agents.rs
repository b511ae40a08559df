//! Move-choosing agents. Each randomized agent owns its RNG so concurrent
//! agents in one process never interfere; the minimax agent is
//! deterministic for a given position.

use crate::board::{Board, Color};
use crate::moves::movegen::generate_legal_moves;
use crate::moves::types::Move;
use crate::search::eval::piece_value;
use crate::search::minimax::best_move;
use rand::{Rng, RngCore, SeedableRng, rngs::StdRng};

fn entropy_rng() -> StdRng {
    let mut seed = [0u8; 32];
    rand::rng().fill_bytes(&mut seed);
    StdRng::from_seed(seed)
}

/// Uniformly random over the legal moves.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        RandomAgent { rng: entropy_rng() }
    }

    pub fn choose_move(&mut self, board: &Board, color: Color) -> Option<Move> {
        let moves = generate_legal_moves(board, color);
        if moves.is_empty() {
            return None;
        }
        let index = self.rng.random_range(0..moves.len());
        Some(moves[index])
    }
}

/// Takes the most valuable capture available, otherwise a random quiet move.
pub struct GreedyAgent {
    rng: StdRng,
}

impl GreedyAgent {
    pub fn new(seed: u64) -> Self {
        GreedyAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        GreedyAgent { rng: entropy_rng() }
    }

    pub fn choose_move(&mut self, board: &Board, color: Color) -> Option<Move> {
        let moves = generate_legal_moves(board, color);
        if moves.is_empty() {
            return None;
        }

        let best_capture = moves
            .iter()
            .filter(|mv| mv.is_capture())
            .max_by_key(|mv| mv.captured().map_or(0, piece_value));
        if let Some(&mv) = best_capture {
            return Some(mv);
        }

        let quiets: Vec<Move> = moves.into_iter().filter(|mv| !mv.is_capture()).collect();
        let index = self.rng.random_range(0..quiets.len());
        Some(quiets[index])
    }
}

/// Fixed-depth alpha-beta from the mover's perspective.
pub struct MinimaxAgent {
    depth: u32,
}

impl MinimaxAgent {
    pub fn new(depth: u32) -> Self {
        MinimaxAgent { depth }
    }

    pub fn choose_move(&self, board: &Board, color: Color) -> Option<Move> {
        best_move(board, color, self.depth)
    }
}
