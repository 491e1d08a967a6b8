use rand::{rngs::StdRng, SeedableRng};

pub mod generator;

/// Seeded rng when a seed is configured, OS entropy otherwise.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
