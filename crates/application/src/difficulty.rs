//! Difficulty multiplier sources.
//!
//! Registration draws one multiplier per test. The source is injected so
//! tests can script exact values.

use athlete_perf_domain::{round_half_even, TestTriple, DIFFICULTY_MAX, DIFFICULTY_MIN};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Supplies difficulty multipliers for a registration
pub trait DifficultySource: Send {
    /// Draw one multiplier per test, in Resistance, Strength, Velocity order
    fn draw(&mut self) -> TestTriple<f64>;
}

impl<D: DifficultySource + ?Sized> DifficultySource for Box<D> {
    fn draw(&mut self) -> TestTriple<f64> {
        (**self).draw()
    }
}

/// Independent uniform draws in [1.0, 1.3], rounded to one decimal place
#[derive(Debug, Clone)]
pub struct UniformDifficultySource<R = StdRng> {
    rng: R,
}

impl UniformDifficultySource<StdRng> {
    /// Seed from operating system entropy
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic source for reproducible runs
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for UniformDifficultySource<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng + Send> UniformDifficultySource<R> {
    /// Wrap an existing random number generator
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    fn sample(&mut self) -> f64 {
        let raw = self.rng.gen_range(DIFFICULTY_MIN..=DIFFICULTY_MAX);
        (round_half_even(raw * 10.0) / 10.0).clamp(DIFFICULTY_MIN, DIFFICULTY_MAX)
    }
}

impl<R: Rng + Send> DifficultySource for UniformDifficultySource<R> {
    fn draw(&mut self) -> TestTriple<f64> {
        TestTriple::new(self.sample(), self.sample(), self.sample())
    }
}

/// Always returns the same multipliers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedDifficultySource(pub TestTriple<f64>);

impl FixedDifficultySource {
    pub fn new(resistance: f64, strength: f64, velocity: f64) -> Self {
        Self(TestTriple::new(resistance, strength, velocity))
    }

    /// All multipliers equal to 1.0
    pub fn neutral() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }
}

impl DifficultySource for FixedDifficultySource {
    fn draw(&mut self) -> TestTriple<f64> {
        self.0
    }
}
