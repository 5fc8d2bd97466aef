//! # weighted_draw
//!
//! Weighted random sampling from a finite population, with or without
//! replacement, over one RNG shared by any number of threads.
//!
//! Each draw takes a uniform value in `[0, 1)` and picks the first bucket of
//! the cumulative distribution that reaches it. Sampling without replacement
//! removes the drawn element and renormalizes the survivors before the next
//! draw, so relative proportions among the remaining elements are preserved.
//!
//! ## Quick start
//!
//! ```rust
//! use weighted_draw::Sampler;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let sampler = Sampler::new(42);
//! let loot = ["common", "uncommon", "rare"];
//!
//! // ten draws, repeats allowed
//! let bag = sampler.sample(&loot, 10, true, Some(&[60.0, 30.0, 10.0]))?;
//! assert_eq!(bag.len(), 10);
//!
//! // a weighted shuffle: every element exactly once
//! let order = sampler.sample(&loot, 3, false, Some(&[60.0, 30.0, 10.0]))?;
//! assert_eq!(order.len(), 3);
//! # Ok(()) }
//! ```
//!
//! ## Performance
//! * **Per draw**: O(n) linear scan of the cumulative vector.
//! * **Without replacement**: an extra O(n) removal and rebuild per draw.
//! * Fine for populations that fit comfortably in memory; there is no alias
//!   table or streaming mode.
//!
//! ## Gotchas
//! * Weights need not sum to 1, but should be non-negative and not all zero.
//!   They are **not** validated: an all-zero vector always yields the last
//!   remaining element, and negative weights give meaningless proportions.
//! * Reproducibility from [`Sampler::new`] holds for a single caller. Threads
//!   sharing a sampler interleave their draws nondeterministically.
//!
//! Diagnostics are emitted through the [`log`] facade at `debug`/`trace`.

mod engine;
mod error;
mod index;
mod sampler;
mod weights;

pub use engine::{sample_indices, select_index};
pub use error::SampleError;
pub use index::IndexSet;
pub use sampler::Sampler;
pub use weights::WeightVector;

/// A source of uniform values in `[0, 1)`.
///
/// Implemented by [`Sampler`] (lock-guarded shared RNG) and by any
/// `Fn() -> f64`, which makes fixed sequences easy to inject.
pub trait UniformSource {
    fn next_uniform(&self) -> f64;
}

impl<F> UniformSource for F
where
    F: Fn() -> f64,
{
    #[inline]
    fn next_uniform(&self) -> f64 {
        self()
    }
}
