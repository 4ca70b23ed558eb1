use rand::SeedableRng;
use rand_pcg::Pcg64;

/// Deterministic RNG factory for a given (seed, user_id, draw) triple.
///
/// Implementation detail:
/// - Derives a per-draw 64-bit seed by chaining SplitMix64 over seed, user_id and draw,
///   so swapping user_id and draw gives a different stream.
/// - Uses PCG 64-bit generator (rand_pcg::Pcg64) for reproducible sequences.
#[inline]
pub fn rng_for_draw(seed: u64, user_id: u64, draw: u32) -> Pcg64 {
    let derived: u64 = splitmix64(splitmix64(seed ^ user_id) ^ u64::from(draw));
    Pcg64::seed_from_u64(derived)
}

#[inline]
fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Non-reproducible generator for live draws.
#[inline]
pub fn rng_from_entropy() -> Pcg64 {
    Pcg64::from_entropy()
}
