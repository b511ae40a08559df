//! Explicit per-move validation with typed reasons.
//!
//! The reason strings are part of the observable surface; external tests
//! assert them verbatim. `validate_move` accepting a move is equivalent to
//! the generator emitting it.

use crate::bitboard::{BitboardExt, FILE_BB, LAST_RANK, LAST_TWO_RANKS, PROMO_ZONE};
use crate::board::{Board, Color, Piece};
use crate::moves::execute::apply_move;
use crate::moves::movegen::{attacks_from, has_legal_reply, is_in_check, must_promote};
use crate::moves::types::Move;
use crate::square::{NUM_SQUARES, file_of};

/// Check a move against the position, returning the first failure reason.
pub fn validate_move(board: &Board, mv: Move, side: Color) -> Result<(), String> {
    let to = mv.to_sq();
    if !(1..=NUM_SQUARES).contains(&to) {
        return Err("Invalid dest square".to_string());
    }

    if mv.is_drop() {
        return validate_drop(board, mv, side, to);
    }

    let from = mv.from_sq();
    if !(1..=NUM_SQUARES).contains(&from) {
        return Err("Invalid source square".to_string());
    }

    let Some((pt, owner)) = board.piece_at(from) else {
        return Err("No piece at source square".to_string());
    };
    if pt != mv.piece() || owner != side {
        return Err("Piece type mismatch".to_string());
    }

    if let Some((_, occupant)) = board.piece_at(to)
        && occupant == side
    {
        return Err("Cannot capture own piece".to_string());
    }

    if !attacks_from(pt, side, from, board.occupied()).test_bit(to) {
        return Err("Piece cannot reach destination".to_string());
    }

    if mv.is_promotion() {
        if pt.is_promoted() {
            return Err("This piece is already promoted".to_string());
        }
        let zone = PROMO_ZONE[side as usize];
        if !must_promote(pt, to, side) && !zone.test_bit(from) && !zone.test_bit(to) {
            return Err("Not in promotion zone".to_string());
        }
        if !pt.is_promotable() {
            return Err("This piece cannot promote".to_string());
        }
    } else if must_promote(pt, to, side) {
        return Err("Promotion is mandatory for this move".to_string());
    }

    // Re-derive the capture from the board so a stale captured field in the
    // incoming move cannot corrupt the trial application.
    let captured = board.piece_at(to).map(|(cap, _)| cap);
    let normalized = Move::board_move(from, to, pt, mv.is_promotion(), captured);
    let mut next = board.clone();
    apply_move(&mut next, normalized, side);
    if is_in_check(&next, side) {
        return Err("Move leaves king in check".to_string());
    }

    Ok(())
}

fn validate_drop(board: &Board, mv: Move, side: Color, to: u8) -> Result<(), String> {
    let pt = mv.piece();

    if !board.has_in_hand(side, pt) {
        return Err(format!("No {pt:?} in hand"));
    }
    if board.piece_at(to).is_some() {
        return Err("Destination square is occupied".to_string());
    }

    let ci = side as usize;
    match pt {
        Piece::Pawn => {
            if LAST_RANK[ci].test_bit(to) {
                return Err("Cannot drop pawn on last rank".to_string());
            }
        }
        Piece::Lance => {
            if LAST_RANK[ci].test_bit(to) {
                return Err("Cannot drop lance on last rank".to_string());
            }
        }
        Piece::Knight => {
            if LAST_TWO_RANKS[ci].test_bit(to) {
                return Err("Cannot drop knight on last two ranks".to_string());
            }
        }
        _ => {}
    }

    let mut next = board.clone();
    apply_move(&mut next, Move::drop_move(pt, to), side);
    if is_in_check(&next, side) {
        return Err("Move leaves king in check".to_string());
    }

    // Pawn drops carry two extra vetoes, checked after king safety.
    if pt == Piece::Pawn {
        let file_mask = FILE_BB[file_of(to) as usize - 1];
        if board.bb(side, Piece::Pawn) & file_mask != 0 {
            return Err("Nifu, two pawns already on file".to_string());
        }
        let opponent = side.opposite();
        if is_in_check(&next, opponent) && !has_legal_reply(&next, opponent) {
            return Err("drop pawn makes illegal checkmate".to_string());
        }
    }

    Ok(())
}

/// Audit the position invariants; the named operation behind
/// [`Board::validate`].
pub fn validate_position(board: &Board) -> Vec<String> {
    board.validate()
}
