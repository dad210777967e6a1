use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random capability consumed by the difficulty policy. Kept as a trait so
/// tests can script the draws instead of chasing seeds.
pub trait MoveRng {
    /// One independent draw that is true with probability `p`.
    fn chance(&mut self, p: f64) -> bool;

    /// Uniform index into a non-empty collection of length `len`.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Seedable random source, one per game session. Reproducible from its seed.
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl MoveRng for SessionRng {
    fn chance(&mut self, p: f64) -> bool {
        self.rng.random_bool(p)
    }

    fn pick_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}
