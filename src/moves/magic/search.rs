use rand::RngCore;
use std::collections::HashMap;

/// Attempts per square before the search is declared failed. Generously
/// sized; the 5x5 masks (at most 6 relevant bits) converge in a handful of
/// draws.
const MAX_ATTEMPTS: u32 = 10_000_000;

#[inline(always)]
// Generate a sparse 32-bit number by AND-ing three random values.
// Sparse multipliers collide less often in magic indexing.
pub fn random_sparse_u32<R: RngCore>(rng: &mut R) -> u32 {
    rng.next_u32() & rng.next_u32() & rng.next_u32()
}

/// A candidate is valid when no two occupancies with different attack sets
/// hash to the same index. The shift is applied in 64-bit space so the
/// degenerate empty-mask case (shift 32) stays well-defined.
pub fn is_magic_candidate_valid(blockers: &[u32], attacks: &[u32], magic: u32, shift: u32) -> bool {
    let mut seen: HashMap<u64, u32> = HashMap::new();

    for (&blocker, &attack) in blockers.iter().zip(attacks) {
        let index = (blocker.wrapping_mul(magic) as u64) >> shift;
        match seen.get(&index) {
            None => {
                seen.insert(index, attack);
            }
            Some(&existing) if existing != attack => return false,
            Some(_) => {}
        }
    }

    true
}

pub fn find_magic_number_for_square<R: RngCore>(
    blockers: &[u32],
    attacks: &[u32],
    shift: u32,
    rng: &mut R,
) -> Result<u32, String> {
    for _attempt in 0..MAX_ATTEMPTS {
        let magic = random_sparse_u32(rng);
        if is_magic_candidate_valid(blockers, attacks, magic, shift) {
            return Ok(magic);
        }
    }
    Err(format!(
        "failed to find a valid magic number after {MAX_ATTEMPTS} attempts"
    ))
}
