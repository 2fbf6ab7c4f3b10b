//! Deterministic simulation RNG wrapper.
//!
//! All randomness in the driver flows through an explicitly constructed
//! `SimRng`; nothing reads from thread-local or global random state.  The
//! same seed therefore always yields the same arrival stream, which is what
//! makes generator tests and run comparisons possible.

use rand::distributions::{Distribution, Open01, Standard};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulation-level RNG.
///
/// Used only in single-threaded contexts.  A multi-threaded host gives each
/// worker its own `SimRng` with a distinct seed.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        Standard: Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Uniform `f64` on the open interval `(0, 1)`.
    ///
    /// Never returns exactly 0 or 1, so `ln(1 - u)` is always finite.
    #[inline]
    pub fn open01(&mut self) -> f64 {
        Open01.sample(&mut self.0)
    }
}
