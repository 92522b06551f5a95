//! Deterministic per-trial RNG seeds.
//!
//! A master seed expands into one sub-seed per trial index via BLAKE3.
//! Because derivation is hash-based rather than draw-order-based, trial N
//! gets the same seed whether trials run sequentially or across a rayon
//! pool, so calibration results are identical regardless of thread count.

use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Debug, Clone, Copy)]
pub struct TrialSeeds {
    master_seed: u64,
}

impl TrialSeeds {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    /// Derive the deterministic sub-seed for one trial.
    pub fn sub_seed(&self, trial: u32) -> u64 {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&self.master_seed.to_le_bytes());
        hasher.update(&trial.to_le_bytes());
        let hash = hasher.finalize();
        u64::from_le_bytes(hash.as_bytes()[..8].try_into().unwrap())
    }

    /// Create a seeded StdRng for one trial.
    pub fn rng_for(&self, trial: u32) -> StdRng {
        StdRng::seed_from_u64(self.sub_seed(trial))
    }
}
