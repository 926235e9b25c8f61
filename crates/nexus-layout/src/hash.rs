//! Deterministic per-id noise.
//!
//! All visual variation (ring placement, drift phase, particle seeding)
//! derives from a single FNV-1a hash of the node id. Two runs, or two
//! implementations, that hash the same id get the same jitter.

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// FNV-1a hash of an id string.
pub fn id_hash(id: &str) -> u64 {
    let mut hash = FNV_OFFSET;
    for byte in id.bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Radial jitter in `[0, 1)`, three decimal digits of resolution.
pub fn radius_jitter(id: &str) -> f32 {
    (id_hash(id) % 1000) as f32 / 1000.0
}

/// Drift phase in `[0, 2π)`, hundredth-radian resolution.
pub fn drift_phase(id: &str) -> f32 {
    (id_hash(id) % 628) as f32 / 100.0
}
