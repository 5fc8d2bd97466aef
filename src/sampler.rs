use std::sync::{Mutex, PoisonError};

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{UniformSource, engine, error::SampleError};

/// Weighted sampler over a single RNG shared by every caller.
///
/// The lock is held only while one uniform value is drawn, so concurrent
/// calls interleave their draws but never their working state. Wrap it in an
/// `Arc` to share across threads.
#[derive(Debug)]
pub struct Sampler<R = StdRng> {
    rng: Mutex<R>,
}

impl Sampler<StdRng> {
    /// Deterministic sampler; the same seed replays the same draws when
    /// used from a single thread.
    pub fn new(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    /// Sampler seeded from the operating system. Not reproducible.
    pub fn from_os_rng() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }
}

impl<R: Rng> Sampler<R> {
    pub fn from_rng(rng: R) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }

    /// Draw `draws` elements of `population` by value.
    ///
    /// `weights` must match `population` in length when given; without them
    /// every element is equally likely. Duplicates appear only when `replace`
    /// is set.
    ///
    /// # Errors
    /// See [`sample_indices`](crate::sample_indices).
    ///
    /// # Examples
    /// ```rust
    /// # use weighted_draw::Sampler;
    /// let sampler = Sampler::new(42);
    /// let picks = sampler.sample(&[1.0, 2.0, 3.0], 3, false, Some(&[0.2, 0.2, 9.6]))?;
    /// assert_eq!(picks.len(), 3);
    /// # Ok::<(), weighted_draw::SampleError>(())
    /// ```
    pub fn sample<T: Clone>(
        &self,
        population: &[T],
        draws: usize,
        replace: bool,
        weights: Option<&[f64]>,
    ) -> Result<Vec<T>, SampleError> {
        let idx = self.sample_indices(population.len(), draws, replace, weights)?;
        Ok(idx.into_iter().map(|i| population[i].clone()).collect())
    }

    /// Like [`sample`](Self::sample) but borrows (no `Clone` bound).
    pub fn sample_refs<'a, T>(
        &self,
        population: &'a [T],
        draws: usize,
        replace: bool,
        weights: Option<&[f64]>,
    ) -> Result<Vec<&'a T>, SampleError> {
        let idx = self.sample_indices(population.len(), draws, replace, weights)?;
        Ok(idx.into_iter().map(|i| &population[i]).collect())
    }

    /// Positions into a population of `population` elements.
    pub fn sample_indices(
        &self,
        population: usize,
        draws: usize,
        replace: bool,
        weights: Option<&[f64]>,
    ) -> Result<Vec<usize>, SampleError> {
        engine::sample_indices(population, draws, replace, weights, self)
    }

    /// Give back the inner RNG.
    pub fn into_inner(self) -> R {
        self.rng.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<R: Rng> UniformSource for Sampler<R> {
    fn next_uniform(&self) -> f64 {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.random::<f64>()
    }
}
