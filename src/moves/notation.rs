//! USI-style move parsing.
//!
//! Board moves read `<from><to>[+]`, drops read `<PieceChar>*<to>` with an
//! uppercase piece letter. Formatting lives on [`Move::to_usi`]; the two
//! round-trip over every legal move.

use crate::board::{Board, Color, Piece};
use crate::moves::types::Move;
use crate::square::Square;

/// Parse a USI move against the current position. Returns None for bad
/// syntax, a missing or foreign source piece, or a drop the hand cannot
/// supply; full legality is the validator's job.
pub fn parse_move(notation: &str, board: &Board, side: Color) -> Option<Move> {
    let s = notation.trim();
    if !s.is_ascii() {
        return None;
    }
    let bytes = s.as_bytes();

    if bytes.len() == 4 && bytes[1] == b'*' {
        let piece_ch = bytes[0] as char;
        if !piece_ch.is_ascii_uppercase() {
            return None;
        }
        let base = Piece::from_sfen_char(piece_ch)?;
        if base == Piece::King {
            return None;
        }
        let to = Square::from_usi(&s[2..4])?;
        if !board.has_in_hand(side, base) {
            return None;
        }
        return Some(Move::drop_move(base, to.index()));
    }

    if !(4..=5).contains(&bytes.len()) {
        return None;
    }
    let from = Square::from_usi(&s[0..2])?;
    let to = Square::from_usi(&s[2..4])?;
    let promote = match bytes.get(4) {
        None => false,
        Some(b'+') => true,
        Some(_) => return None,
    };

    let (pt, owner) = board.piece_at(from.index())?;
    if owner != side {
        return None;
    }
    // Record a capture only when the destination holds an enemy piece; an
    // own piece there is left for the validator to reject with its reason.
    let captured = match board.piece_at(to.index()) {
        Some((cap, c)) if c != side => Some(cap),
        _ => None,
    };

    Some(Move::board_move(from.index(), to.index(), pt, promote, captured))
}
