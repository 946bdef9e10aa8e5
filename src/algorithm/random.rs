//! Random variate source for the simulation
//!
//! All randomness in a run flows through one [`VariateSource`]. Production
//! runs seed it from the operating system; tests inject a seeded generator so
//! populations, samples and estimates are exactly repeatable.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Bernoulli draws and uniform subsampling over an injected generator
#[derive(Debug, Clone)]
pub struct VariateSource<R> {
    rng: R,
}

impl VariateSource<StdRng> {
    /// Source seeded from operating system entropy
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Source with a fixed seed
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> VariateSource<R> {
    /// Wrap an existing generator
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Draw from Bernoulli(p)
    ///
    /// `p` is not clamped: values at or above 1 always succeed and values at
    /// or below 0 never do.
    pub fn bernoulli(&mut self, p: f64) -> bool {
        self.rng.random::<f64>() < p
    }

    /// Fair coin, used for randomized assignment
    pub fn coin_flip(&mut self) -> bool {
        self.bernoulli(0.5)
    }

    /// Return `value` negated with probability `p`
    pub fn flip_with(&mut self, value: bool, p: f64) -> bool {
        if self.bernoulli(p) { !value } else { value }
    }

    /// Uniform sample of `amount` items without replacement
    ///
    /// Returns all items (in shuffled order) when `amount` exceeds the length.
    pub fn choose_without_replacement<T: Clone>(&mut self, mut items: Vec<T>, amount: usize) -> Vec<T> {
        let amount = amount.min(items.len());
        let (chosen, _) = items.partial_shuffle(&mut self.rng, amount);
        chosen.to_vec()
    }
}
