//! Seeded RNG for sampled maintenance and randomized tests.
//!
//! The navigation core is deterministic unless a caller opts into sampling.
//! A given seed always replays the same sequence.

use rand::rngs::SmallRng;
use rand::distributions::uniform::{SampleRange, SampleUniform};
use rand::{Rng, SeedableRng};

use crate::geo::{GridCoord, WorldPoint};

/// Seeded `SmallRng` with helpers for grid and world sampling.
///
/// Not shared across threads; each owner holds its own instance.
pub struct SimRng {
    rng:  SmallRng,
    seed: u64,
}

impl SimRng {
    pub fn new(seed: u64) -> Self {
        Self { rng: SmallRng::seed_from_u64(seed), seed }
    }

    /// Seed this generator was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[inline]
    pub fn gen_range<T: SampleUniform, R: SampleRange<T>>(&mut self, range: R) -> T {
        self.rng.gen_range(range)
    }

    /// `true` with probability `p`, clamped to `[0, 1]`.  NaN counts as 0.
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        let p = if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) };
        self.rng.gen_bool(p)
    }

    /// Uniform cell in `[0, cols) × [0, rows)`.  Both bounds must be positive.
    pub fn cell_in(&mut self, cols: i32, rows: i32) -> GridCoord {
        GridCoord::new(self.rng.gen_range(0..cols), self.rng.gen_range(0..rows))
    }

    /// Uniform point in `[0, width) × [0, height)`.  Both bounds must be positive.
    pub fn point_in(&mut self, width: f32, height: f32) -> WorldPoint {
        WorldPoint::new(self.rng.gen_range(0.0..width), self.rng.gen_range(0.0..height))
    }
}

impl std::fmt::Debug for SimRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SimRng(seed {})", self.seed)
    }
}
