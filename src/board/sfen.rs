//! SFEN snapshot parsing and emission.
//!
//! `<board> <side> <hand> <movenum>` with five `/`-separated rank tokens,
//! rank 1 (the top row) first. Uppercase letters are Black, lowercase White,
//! and a `+` prefix promotes the following piece.

use super::{Board, Color, HAND_PIECES, Piece};
use crate::square::{BOARD_SIZE, square_index};

/// Parse an SFEN string into a board plus the side to move and move number.
/// The parsed position is audited against the board invariants.
pub fn parse_sfen(sfen: &str) -> Result<(Board, Color, u32), String> {
    let fields: Vec<&str> = sfen.split_whitespace().collect();
    if fields.len() != 4 {
        return Err(format!("expected 4 SFEN fields, got {}", fields.len()));
    }

    let mut board = Board::new_empty();
    parse_board_field(&mut board, fields[0])?;
    board.update_occupied();

    let side = match fields[1] {
        "b" => Color::Black,
        "w" => Color::White,
        other => return Err(format!("invalid side to move: {other}")),
    };

    parse_hand_field(&mut board, fields[2])?;

    let movenum: u32 = fields[3]
        .parse()
        .map_err(|_| format!("invalid move number: {}", fields[3]))?;
    if movenum == 0 {
        return Err("move number must be at least 1".to_string());
    }

    let violations = board.validate();
    if !violations.is_empty() {
        return Err(format!("position violates invariants: {}", violations.join("; ")));
    }

    Ok((board, side, movenum))
}

fn parse_board_field(board: &mut Board, field: &str) -> Result<(), String> {
    let ranks: Vec<&str> = field.split('/').collect();
    if ranks.len() != BOARD_SIZE as usize {
        return Err(format!("expected 5 ranks, got {}", ranks.len()));
    }

    for (i, rank_str) in ranks.iter().enumerate() {
        let rank = i as u8 + 1;
        let mut file = 1u8;
        let mut promoted = false;
        for c in rank_str.chars() {
            if let Some(run) = c.to_digit(10) {
                if promoted || run == 0 || run > 5 {
                    return Err(format!("bad empty run in rank {rank}"));
                }
                file += run as u8;
            } else if c == '+' {
                if promoted {
                    return Err("doubled promotion prefix".to_string());
                }
                promoted = true;
            } else {
                if file > BOARD_SIZE {
                    return Err(format!("rank {rank} overflows 5 files"));
                }
                let base = Piece::from_sfen_char(c.to_ascii_uppercase())
                    .ok_or_else(|| format!("unknown piece character: {c}"))?;
                let color = if c.is_ascii_uppercase() {
                    Color::Black
                } else {
                    Color::White
                };
                let pt = if promoted {
                    base.promote()
                        .ok_or_else(|| format!("{base:?} has no promoted form"))?
                } else {
                    base
                };
                board.place_piece(square_index(rank, file), pt, color);
                promoted = false;
                file += 1;
            }
        }
        if promoted {
            return Err("dangling promotion prefix".to_string());
        }
        if file != BOARD_SIZE + 1 {
            return Err(format!("rank {rank} covers {} files, expected 5", file - 1));
        }
    }
    Ok(())
}

fn parse_hand_field(board: &mut Board, field: &str) -> Result<(), String> {
    if field == "-" {
        return Ok(());
    }
    let mut count: u8 = 0;
    for c in field.chars() {
        if let Some(d) = c.to_digit(10) {
            count = count
                .checked_mul(10)
                .and_then(|n| n.checked_add(d as u8))
                .ok_or_else(|| "hand count overflow".to_string())?;
        } else {
            let base = Piece::from_sfen_char(c.to_ascii_uppercase())
                .ok_or_else(|| format!("unknown hand character: {c}"))?;
            let slot = base
                .hand_index()
                .ok_or_else(|| format!("{base:?} cannot be held in hand"))?;
            let color = if c.is_ascii_uppercase() {
                Color::Black
            } else {
                Color::White
            };
            let n = if count == 0 { 1 } else { count };
            board.hands[color as usize][slot] += n;
            count = 0;
        }
    }
    if count != 0 {
        return Err("dangling hand count".to_string());
    }
    Ok(())
}

/// Emit the SFEN snapshot for a position. Round-trips with [`parse_sfen`].
pub fn to_sfen(board: &Board, side: Color, movenum: u32) -> String {
    let mut out = String::new();

    for rank in 1..=BOARD_SIZE {
        if rank > 1 {
            out.push('/');
        }
        let mut empties = 0u8;
        for file in 1..=BOARD_SIZE {
            match board.piece_at(square_index(rank, file)) {
                None => empties += 1,
                Some((pt, color)) => {
                    if empties > 0 {
                        out.push((b'0' + empties) as char);
                        empties = 0;
                    }
                    if pt.is_promoted() {
                        out.push('+');
                    }
                    let c = pt.sfen_char();
                    out.push(if color == Color::Black {
                        c
                    } else {
                        c.to_ascii_lowercase()
                    });
                }
            }
        }
        if empties > 0 {
            out.push((b'0' + empties) as char);
        }
    }

    out.push(' ');
    out.push(if side == Color::Black { 'b' } else { 'w' });
    out.push(' ');
    out.push_str(&hand_field(board));
    out.push(' ');
    out.push_str(&movenum.to_string());
    out
}

fn hand_field(board: &Board) -> String {
    let mut out = String::new();
    for color in [Color::Black, Color::White] {
        // Conventional hand order is descending piece value.
        for slot in (0..HAND_PIECES.len()).rev() {
            let n = board.hands[color as usize][slot];
            if n == 0 {
                continue;
            }
            if n > 1 {
                out.push_str(&n.to_string());
            }
            let c = HAND_PIECES[slot].sfen_char();
            out.push(if color == Color::Black {
                c
            } else {
                c.to_ascii_lowercase()
            });
        }
    }
    if out.is_empty() {
        out.push('-');
    }
    out
}
