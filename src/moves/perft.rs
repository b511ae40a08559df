//! Legal-move tree walker used to cross-check the generator.

use crate::board::{Board, Color};
use crate::moves::execute::apply_move;
use crate::moves::movegen::generate_legal_moves;

/// Number of legal move sequences of length `depth` from the position.
pub fn count_nodes(board: &Board, side: Color, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = generate_legal_moves(board, side);
    if depth == 1 {
        return moves.len() as u64;
    }
    moves
        .iter()
        .map(|&mv| {
            let mut next = board.clone();
            apply_move(&mut next, mv, side);
            count_nodes(&next, side.opposite(), depth - 1)
        })
        .sum()
}
