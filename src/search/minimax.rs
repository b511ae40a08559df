//! Fixed-depth alpha-beta relative to a fixed perspective color.

use crate::board::{Board, Color};
use crate::moves::execute::apply_move;
use crate::moves::movegen::{generate_legal_moves, is_in_check};
use crate::moves::types::Move;
use crate::search::eval::evaluate;
use crate::search::ordering::order_moves;

const MATE_SCORE: i32 = 100_000;
const INF: i32 = i32::MAX - 1;

/// Offset mate scores by remaining depth so the search prefers the
/// shallower mate (and the later loss).
#[inline]
fn mate_value(depth: u32, maximizing: bool) -> i32 {
    let adjust = 10 - depth as i32;
    if maximizing {
        -MATE_SCORE + adjust
    } else {
        MATE_SCORE - adjust
    }
}

#[allow(clippy::too_many_arguments)]
fn alpha_beta(
    board: &Board,
    side: Color,
    agent_color: Color,
    depth: u32,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
) -> i32 {
    if depth == 0 {
        return evaluate(board, agent_color);
    }

    let mut moves = generate_legal_moves(board, side);
    if moves.is_empty() {
        if is_in_check(board, side) {
            return mate_value(depth, maximizing);
        }
        // Stalemate scores as a draw inside the search; the game-state
        // classifier assigns the loss to the stalemated side.
        return 0;
    }
    order_moves(&mut moves);

    if maximizing {
        let mut best = -INF;
        for mv in moves {
            let mut next = board.clone();
            apply_move(&mut next, mv, side);
            let score = alpha_beta(
                &next,
                side.opposite(),
                agent_color,
                depth - 1,
                alpha,
                beta,
                false,
            );
            best = best.max(score);
            alpha = alpha.max(score);
            if beta <= alpha {
                break;
            }
        }
        best
    } else {
        let mut best = INF;
        for mv in moves {
            let mut next = board.clone();
            apply_move(&mut next, mv, side);
            let score = alpha_beta(
                &next,
                side.opposite(),
                agent_color,
                depth - 1,
                alpha,
                beta,
                true,
            );
            best = best.min(score);
            beta = beta.min(score);
            if beta <= alpha {
                break;
            }
        }
        best
    }
}

/// Root search: highest minimax value over the ordered legal moves, ties
/// broken by insertion order.
pub fn best_move(board: &Board, color: Color, depth: u32) -> Option<Move> {
    let mut moves = generate_legal_moves(board, color);
    if moves.is_empty() {
        return None;
    }
    order_moves(&mut moves);

    let mut alpha = -INF;
    let mut best = moves[0];
    let mut best_score = -INF - 1;
    for mv in moves {
        let mut next = board.clone();
        apply_move(&mut next, mv, color);
        let score = alpha_beta(&next, color.opposite(), color, depth.saturating_sub(1), alpha, INF, false);
        if score > best_score {
            best_score = score;
            best = mv;
        }
        alpha = alpha.max(score);
    }
    tracing::debug!(best = %best, score = best_score, depth, "minimax root");
    Some(best)
}
