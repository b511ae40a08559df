//! In-place move application and its inverse.
//!
//! Neither function validates: callers pass only moves produced by the
//! generator or accepted by the validator. Both refresh the occupancy
//! caches before returning.

use crate::board::{Board, Color};
use crate::moves::types::Move;

/// Apply a pseudo-legal move for `color`. Captures demote into the hand;
/// the promotion flag places the mover in its promoted form.
pub fn apply_move(board: &mut Board, mv: Move, color: Color) {
    let pt = mv.piece();

    if mv.is_drop() {
        let removed = board.remove_from_hand(color, pt);
        debug_assert!(removed, "drop played without the piece in hand");
        board.place_piece(mv.to_sq(), pt, color);
    } else {
        if let Some(captured) = mv.captured() {
            board.remove_piece(mv.to_sq(), captured, color.opposite());
            board.add_to_hand(color, captured);
        }
        board.remove_piece(mv.from_sq(), pt, color);
        let placed = if mv.is_promotion() {
            pt.promote().unwrap_or(pt)
        } else {
            pt
        };
        board.place_piece(mv.to_sq(), placed, color);
    }

    board.update_occupied();
}

/// Invert [`apply_move`] for the same move and mover.
pub fn undo_move(board: &mut Board, mv: Move, color: Color) {
    let pt = mv.piece();

    if mv.is_drop() {
        board.remove_piece(mv.to_sq(), pt, color);
        board.add_to_hand(color, pt);
    } else {
        let placed = if mv.is_promotion() {
            pt.promote().unwrap_or(pt)
        } else {
            pt
        };
        board.remove_piece(mv.to_sq(), placed, color);
        board.place_piece(mv.from_sq(), pt, color);
        if let Some(captured) = mv.captured() {
            // Restore the capture in the form it stood on the board and take
            // its demoted twin back out of the hand.
            board.place_piece(mv.to_sq(), captured, color.opposite());
            let removed = board.remove_from_hand(color, captured.demote());
            debug_assert!(removed, "undoing a capture the hand never received");
        }
    }

    board.update_occupied();
}
