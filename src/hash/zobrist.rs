use crate::bitboard::BitboardExt;
use crate::board::{Board, COLORS, Color, NUM_PIECE_TYPES, PIECES};
use once_cell::sync::OnceCell;
use rand::{RngCore, SeedableRng, rngs::StdRng};

// Fixed seed so the tables are byte-identical across runs.
const ZOBRIST_SEED: u64 = 0x9E37_79B9_AAAC_5C87;

/// Hand counts above this saturate in the hash. Minishogi inventory never
/// exceeds two of a base type per side, so saturation is lossless here; a
/// larger variant must widen the table.
pub const HAND_COUNT_CAP: u8 = 2;

pub struct ZobristKeys {
    /// [color][piece][square] with squares 1..=25 (index 0 unused).
    pub piece: [[[u64; 26]; NUM_PIECE_TYPES]; 2],
    /// [color][hand slot][count - 1] for counts 1..=HAND_COUNT_CAP.
    pub hand: [[[u64; HAND_COUNT_CAP as usize]; 7]; 2],
    /// XORed in when White is to move.
    pub side_to_move: u64,
}

/// Global keys, initialized on first use.
pub fn zobrist_keys() -> &'static ZobristKeys {
    static KEYS: OnceCell<ZobristKeys> = OnceCell::new();
    KEYS.get_or_init(|| generate_zobrist_keys_with_rng(StdRng::seed_from_u64(ZOBRIST_SEED)))
}

fn generate_zobrist_keys_with_rng(mut rng: StdRng) -> ZobristKeys {
    #[inline]
    fn non_zero(r: &mut StdRng) -> u64 {
        // avoid zero keys to reduce degenerate collisions
        let mut v = r.next_u64();
        while v == 0 {
            v = r.next_u64();
        }
        v
    }

    let mut keys = ZobristKeys {
        piece: [[[0u64; 26]; NUM_PIECE_TYPES]; 2],
        hand: [[[0u64; HAND_COUNT_CAP as usize]; 7]; 2],
        side_to_move: 0,
    };

    for c in 0..2 {
        for p in 0..NUM_PIECE_TYPES {
            for sq in 1..=25 {
                keys.piece[c][p][sq] = non_zero(&mut rng);
            }
        }
    }

    for c in 0..2 {
        for slot in 0..7 {
            for count in 0..HAND_COUNT_CAP as usize {
                keys.hand[c][slot][count] = non_zero(&mut rng);
            }
        }
    }

    keys.side_to_move = non_zero(&mut rng);
    keys
}

/// Full position hash: every board piece, every non-empty hand slot
/// (saturated at [`HAND_COUNT_CAP`]), and the side-to-move key.
pub fn compute_hash(board: &Board, side: Color) -> u64 {
    let keys = zobrist_keys();
    let mut hash = 0u64;

    for color in COLORS {
        let ci = color as usize;
        for pt in PIECES {
            for sq in board.bb(color, pt).squares() {
                hash ^= keys.piece[ci][pt as usize][sq as usize];
            }
        }
        for slot in 0..7 {
            let count = board.hands[ci][slot].min(HAND_COUNT_CAP);
            if count > 0 {
                hash ^= keys.hand[ci][slot][count as usize - 1];
            }
        }
    }

    if side == Color::White {
        hash ^= keys.side_to_move;
    }

    hash
}
