//! Scan-based slider attack generation and blocker-mask construction.
//!
//! These are the slow reference generators the magic tables are built from
//! and verified against.

use crate::board::Color;
use crate::square::{BOARD_SIZE, file_of, rank_of, square_index};

const ROOK_DIRS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const BISHOP_DIRS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Lance direction per color; Black slides toward rank 1.
#[inline]
pub fn lance_dir(color: Color) -> (i8, i8) {
    match color {
        Color::Black => (-1, 0),
        Color::White => (1, 0),
    }
}

/// Walk one ray from `sq`, collecting squares until the edge or a blocker.
/// The blocker square itself is included in the attack set.
pub fn trace_ray(sq: u8, dir: (i8, i8), blockers: u32) -> u32 {
    let mut attacks = 0u32;
    let mut rank = rank_of(sq) as i8 + dir.0;
    let mut file = file_of(sq) as i8 + dir.1;
    while (1..=BOARD_SIZE as i8).contains(&rank) && (1..=BOARD_SIZE as i8).contains(&file) {
        let s = square_index(rank as u8, file as u8);
        attacks |= 1 << (s - 1);
        if (blockers >> (s - 1)) & 1 != 0 {
            break;
        }
        rank += dir.0;
        file += dir.1;
    }
    attacks
}

#[inline]
pub fn rook_attacks_per_square(sq: u8, blockers: u32) -> u32 {
    ROOK_DIRS
        .iter()
        .fold(0, |acc, &dir| acc | trace_ray(sq, dir, blockers))
}

#[inline]
pub fn bishop_attacks_per_square(sq: u8, blockers: u32) -> u32 {
    BISHOP_DIRS
        .iter()
        .fold(0, |acc, &dir| acc | trace_ray(sq, dir, blockers))
}

#[inline]
pub fn lance_attacks_per_square(sq: u8, color: Color, blockers: u32) -> u32 {
    trace_ray(sq, lance_dir(color), blockers)
}

/// Squares along one ray that can block further progress: everything strictly
/// between `sq` and the board edge (the edge square itself never matters).
fn ray_mask(sq: u8, dir: (i8, i8)) -> u32 {
    let mut mask = 0u32;
    let mut rank = rank_of(sq) as i8 + dir.0;
    let mut file = file_of(sq) as i8 + dir.1;
    loop {
        let next_rank = rank + dir.0;
        let next_file = file + dir.1;
        if !(1..=BOARD_SIZE as i8).contains(&next_rank)
            || !(1..=BOARD_SIZE as i8).contains(&next_file)
        {
            break;
        }
        mask |= 1 << (square_index(rank as u8, file as u8) - 1);
        rank = next_rank;
        file = next_file;
    }
    mask
}

pub fn rook_blocker_mask(sq: u8) -> u32 {
    ROOK_DIRS.iter().fold(0, |acc, &dir| acc | ray_mask(sq, dir))
}

pub fn bishop_blocker_mask(sq: u8) -> u32 {
    BISHOP_DIRS
        .iter()
        .fold(0, |acc, &dir| acc | ray_mask(sq, dir))
}

/// A lance already on (or next to) its last rank gets an empty mask and
/// degenerates to a one-entry table.
pub fn lance_blocker_mask(sq: u8, color: Color) -> u32 {
    ray_mask(sq, lance_dir(color))
}

/// Every occupancy subset of `mask`, in submask enumeration order
/// (2^popcount entries, starting with the empty set).
pub fn enumerate_occupancies(mask: u32) -> Vec<u32> {
    let bits: Vec<u32> = (0..32).filter(|&i| (mask >> i) & 1 != 0).collect();
    let count = 1usize << bits.len();
    let mut subsets = Vec::with_capacity(count);
    for idx in 0..count {
        let mut occ = 0u32;
        for (bit_pos, &bit) in bits.iter().enumerate() {
            if (idx >> bit_pos) & 1 != 0 {
                occ |= 1 << bit;
            }
        }
        subsets.push(occ);
    }
    subsets
}
