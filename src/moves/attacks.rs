//! Precomputed step-piece attack tables and the process-wide table store.
//!
//! Everything here is built once, on first use, from a fixed seed: the step
//! tables by offset enumeration with edge clipping, the slider tables by the
//! magic-number search. All move generation gates on [`tables`].

use crate::board::Color;
use crate::moves::magic::{SliderTables, generate_slider_tables};
use crate::square::{BOARD_SIZE, NUM_SQUARES, file_of, rank_of, square_index};
use once_cell::sync::OnceCell;
use rand::{SeedableRng, rngs::StdRng};

// Fixed seed so the magic multipliers are identical across runs.
const MAGIC_SEED: u64 = 0xB5AD_4ECE_DA1C_E2A9;

// Step offsets as (rank delta, file delta); Black moves toward rank 1, so
// "forward" is a negative rank delta. White uses the negated offsets.
const KING_STEPS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];
const GOLD_STEPS: [(i8, i8); 6] = [(-1, -1), (-1, 0), (-1, 1), (0, -1), (0, 1), (1, 0)];
const SILVER_STEPS: [(i8, i8); 5] = [(-1, -1), (-1, 0), (-1, 1), (1, -1), (1, 1)];
const KNIGHT_STEPS: [(i8, i8); 2] = [(-2, -1), (-2, 1)];
const PAWN_STEPS: [(i8, i8); 1] = [(-1, 0)];
const ORTHOGONAL_STEPS: [(i8, i8); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];
const DIAGONAL_STEPS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Attack tables for every piece class, indexed by square 1..=25.
pub struct AttackTables {
    pub king: [u32; 26],
    pub gold: [[u32; 26]; 2],
    pub silver: [[u32; 26]; 2],
    pub knight: [[u32; 26]; 2],
    pub pawn: [[u32; 26]; 2],
    /// Orthogonal one-step set added to bishop slides for the horse.
    pub horse_bonus: [u32; 26],
    /// Diagonal one-step set added to rook slides for the dragon.
    pub dragon_bonus: [u32; 26],
    pub sliders: SliderTables,
}

fn step_table(offsets: &[(i8, i8)], flip: bool) -> [u32; 26] {
    let mut table = [0u32; 26];
    for sq in 1..=NUM_SQUARES {
        let rank = rank_of(sq) as i8;
        let file = file_of(sq) as i8;
        for &(dr, df) in offsets {
            let (dr, df) = if flip { (-dr, -df) } else { (dr, df) };
            let (r, f) = (rank + dr, file + df);
            if (1..=BOARD_SIZE as i8).contains(&r) && (1..=BOARD_SIZE as i8).contains(&f) {
                table[sq as usize] |= 1 << (square_index(r as u8, f as u8) - 1);
            }
        }
    }
    table
}

fn build_tables() -> AttackTables {
    let mut rng = StdRng::seed_from_u64(MAGIC_SEED);
    let sliders =
        generate_slider_tables(&mut rng).expect("magic table construction must not fail");
    tracing::debug!("attack and magic tables initialized");

    AttackTables {
        king: step_table(&KING_STEPS, false),
        gold: [step_table(&GOLD_STEPS, false), step_table(&GOLD_STEPS, true)],
        silver: [
            step_table(&SILVER_STEPS, false),
            step_table(&SILVER_STEPS, true),
        ],
        knight: [
            step_table(&KNIGHT_STEPS, false),
            step_table(&KNIGHT_STEPS, true),
        ],
        pawn: [step_table(&PAWN_STEPS, false), step_table(&PAWN_STEPS, true)],
        horse_bonus: step_table(&ORTHOGONAL_STEPS, false),
        dragon_bonus: step_table(&DIAGONAL_STEPS, false),
        sliders,
    }
}

/// Global tables, initialized on first use and immutable thereafter.
pub fn tables() -> &'static AttackTables {
    static TABLES: OnceCell<AttackTables> = OnceCell::new();
    TABLES.get_or_init(build_tables)
}

impl AttackTables {
    #[inline(always)]
    pub fn king_attacks(&self, sq: u8) -> u32 {
        self.king[sq as usize]
    }

    #[inline(always)]
    pub fn gold_attacks(&self, color: Color, sq: u8) -> u32 {
        self.gold[color as usize][sq as usize]
    }

    #[inline(always)]
    pub fn silver_attacks(&self, color: Color, sq: u8) -> u32 {
        self.silver[color as usize][sq as usize]
    }

    #[inline(always)]
    pub fn knight_attacks(&self, color: Color, sq: u8) -> u32 {
        self.knight[color as usize][sq as usize]
    }

    #[inline(always)]
    pub fn pawn_attacks(&self, color: Color, sq: u8) -> u32 {
        self.pawn[color as usize][sq as usize]
    }

    #[inline(always)]
    pub fn rook_attacks(&self, sq: u8, occ: u32) -> u32 {
        self.sliders.rook.get_attacks(sq, occ)
    }

    #[inline(always)]
    pub fn bishop_attacks(&self, sq: u8, occ: u32) -> u32 {
        self.sliders.bishop.get_attacks(sq, occ)
    }

    #[inline(always)]
    pub fn lance_attacks(&self, color: Color, sq: u8, occ: u32) -> u32 {
        self.sliders.lance[color as usize].get_attacks(sq, occ)
    }

    #[inline(always)]
    pub fn horse_attacks(&self, sq: u8, occ: u32) -> u32 {
        self.bishop_attacks(sq, occ) | self.horse_bonus[sq as usize]
    }

    #[inline(always)]
    pub fn dragon_attacks(&self, sq: u8, occ: u32) -> u32 {
        self.rook_attacks(sq, occ) | self.dragon_bonus[sq as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitboard::{BitboardExt, SQUARE_BB};

    #[test]
    fn king_attack_counts_clip_at_edges() {
        let t = tables();
        assert_eq!(t.king_attacks(13).popcount(), 8);
        assert_eq!(t.king_attacks(1).popcount(), 3);
        assert_eq!(t.king_attacks(3).popcount(), 5);
        assert_eq!(t.king_attacks(25).popcount(), 3);
    }

    #[test]
    fn gold_is_six_squares_in_the_open_and_rotated_for_white() {
        let t = tables();
        assert_eq!(t.gold_attacks(Color::Black, 13).popcount(), 6);
        // Black gold on 13 covers everything adjacent except SE/SW.
        assert_eq!(
            t.gold_attacks(Color::Black, 13) & (SQUARE_BB[17] | SQUARE_BB[19]),
            0
        );
        // White is the 180-degree rotation: no NE/NW.
        assert_eq!(
            t.gold_attacks(Color::White, 13) & (SQUARE_BB[7] | SQUARE_BB[9]),
            0
        );
    }

    #[test]
    fn silver_misses_the_orthogonal_sides() {
        let t = tables();
        let attacks = t.silver_attacks(Color::Black, 13);
        assert_eq!(attacks.popcount(), 5);
        assert_eq!(attacks & (SQUARE_BB[12] | SQUARE_BB[14] | SQUARE_BB[18]), 0);
    }

    #[test]
    fn knight_jumps_two_forward_one_sideways() {
        let t = tables();
        assert_eq!(
            t.knight_attacks(Color::Black, 23),
            SQUARE_BB[12] | SQUARE_BB[14]
        );
        assert_eq!(
            t.knight_attacks(Color::White, 3),
            SQUARE_BB[12] | SQUARE_BB[14]
        );
        // A knight near the edge keeps only the on-board jump.
        assert_eq!(t.knight_attacks(Color::Black, 21), SQUARE_BB[12]);
        // No destination at all once past the jump range.
        assert_eq!(t.knight_attacks(Color::Black, 6), 0);
    }

    #[test]
    fn pawns_step_one_square_forward() {
        let t = tables();
        assert_eq!(t.pawn_attacks(Color::Black, 13), SQUARE_BB[8]);
        assert_eq!(t.pawn_attacks(Color::White, 13), SQUARE_BB[18]);
        assert_eq!(t.pawn_attacks(Color::Black, 3), 0);
        assert_eq!(t.pawn_attacks(Color::White, 23), 0);
    }

    #[test]
    fn horse_and_dragon_extend_their_sliders() {
        let t = tables();
        let occ = SQUARE_BB[9];
        assert_eq!(
            t.horse_attacks(13, occ),
            t.bishop_attacks(13, occ) | SQUARE_BB[8] | SQUARE_BB[12] | SQUARE_BB[14] | SQUARE_BB[18]
        );
        assert_eq!(
            t.dragon_attacks(13, occ),
            t.rook_attacks(13, occ) | SQUARE_BB[7] | SQUARE_BB[9] | SQUARE_BB[17] | SQUARE_BB[19]
        );
    }
}
