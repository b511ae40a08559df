pub mod attacks;
pub mod search;
pub mod structs;

pub use structs::{MagicEntry, SliderTable, SliderTables};

use crate::board::Color;
use crate::square::NUM_SQUARES;
use attacks::{
    bishop_attacks_per_square, bishop_blocker_mask, enumerate_occupancies,
    lance_attacks_per_square, lance_blocker_mask, rook_attacks_per_square, rook_blocker_mask,
};
use rand::RngCore;
use search::find_magic_number_for_square;

fn build_entry<R: RngCore>(
    mask: u32,
    reference: impl Fn(u32) -> u32,
    rng: &mut R,
) -> Result<MagicEntry, String> {
    let blockers = enumerate_occupancies(mask);
    let attack_sets: Vec<u32> = blockers.iter().map(|&b| reference(b)).collect();
    let shift = 32 - mask.count_ones();
    let magic = find_magic_number_for_square(&blockers, &attack_sets, shift, rng)?;

    let mut table = vec![0u32; blockers.len()];
    for (&blocker, &attack) in blockers.iter().zip(&attack_sets) {
        let index = ((blocker.wrapping_mul(magic) as u64) >> shift) as usize;
        table[index] = attack;
    }

    Ok(MagicEntry {
        magic,
        shift,
        mask,
        table: table.into_boxed_slice(),
    })
}

/// Unused square-0 slot so tables index directly by square number.
fn placeholder_entry() -> MagicEntry {
    MagicEntry {
        magic: 0,
        shift: 32,
        mask: 0,
        table: vec![0u32].into_boxed_slice(),
    }
}

fn build_table<R: RngCore>(
    mask_fn: impl Fn(u8) -> u32,
    reference: impl Fn(u8, u32) -> u32,
    rng: &mut R,
) -> Result<SliderTable, String> {
    let mut entries = Vec::with_capacity(NUM_SQUARES as usize + 1);
    entries.push(placeholder_entry());
    for sq in 1..=NUM_SQUARES {
        entries.push(build_entry(mask_fn(sq), |occ| reference(sq, occ), rng)?);
    }
    Ok(SliderTable { entries })
}

/// Construct the rook, bishop, and per-color lance magic tables from
/// scratch. Deterministic for a given seed.
pub fn generate_slider_tables<R: RngCore>(rng: &mut R) -> Result<SliderTables, String> {
    let rook = build_table(rook_blocker_mask, rook_attacks_per_square, rng)?;
    let bishop = build_table(bishop_blocker_mask, bishop_attacks_per_square, rng)?;
    let lance_black = build_table(
        |sq| lance_blocker_mask(sq, Color::Black),
        |sq, occ| lance_attacks_per_square(sq, Color::Black, occ),
        rng,
    )?;
    let lance_white = build_table(
        |sq| lance_blocker_mask(sq, Color::White),
        |sq, occ| lance_attacks_per_square(sq, Color::White, occ),
        rng,
    )?;
    Ok(SliderTables {
        rook,
        bishop,
        lance: [lance_black, lance_white],
    })
}
