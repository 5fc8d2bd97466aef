//! The draw loop shared by every [`Sampler`](crate::Sampler) wrapper.
//!
//! Each call owns private copies of the weights, the cumulative distribution
//! and the [`IndexSet`]; the only state touched across calls is the
//! [`UniformSource`].
//!
//! ## Complexity
//! * **With replacement**: O(k·n), one linear scan of the cumulative vector
//!   per draw.
//! * **Without replacement**: O(k·n) as well, plus a removal and a full
//!   cumulative rebuild after every draw.

use log::{debug, trace};

use crate::{IndexSet, UniformSource, WeightVector, error::SampleError};

/// Smallest position `i` with `u <= cumulative[i]`.
///
/// Values past the last entry (rounding at the tail, or NaN entries from a
/// zero-sum vector) clamp to the last position. Returns 0 for an empty slice.
#[inline]
pub fn select_index(cumulative: &[f64], u: f64) -> usize {
    cumulative
        .iter()
        .position(|&c| u <= c)
        .unwrap_or_else(|| cumulative.len().saturating_sub(1))
}

/// Draw `draws` positions from `0..population`.
///
/// `weights`, when given, must have exactly `population` entries; they are
/// copied, never mutated. Without weights every position is equally likely.
///
/// # Errors
/// * [`SampleError::LengthMismatch`] if `weights.len() != population`.
/// * [`SampleError::OverDraw`] if `!replace` and `draws > population`.
/// * [`SampleError::Empty`] if `replace` and `draws > 0` with no population.
///
/// Zero or negative weights are accepted as-is. An all-zero vector degrades
/// to always drawing the last remaining position.
pub fn sample_indices<S>(
    population: usize,
    draws: usize,
    replace: bool,
    weights: Option<&[f64]>,
    source: &S,
) -> Result<Vec<usize>, SampleError>
where
    S: UniformSource + ?Sized,
{
    if let Some(w) = weights {
        if w.len() != population {
            return Err(SampleError::LengthMismatch {
                population,
                weights: w.len(),
            });
        }
    }
    if !replace && draws > population {
        return Err(SampleError::OverDraw { draws, population });
    }
    if draws > 0 && population == 0 {
        return Err(SampleError::Empty { draws });
    }

    let mut weights = match weights {
        Some(w) => WeightVector::from(w),
        None => WeightVector::uniform(population),
    };
    let mut indices = IndexSet::identity(population);
    let mut cumulative = weights.cumulative_probability();
    debug!("sampling {draws} of {population} (replace={replace}), cumulative {cumulative}");

    let mut results = Vec::with_capacity(draws);
    for _ in 0..draws {
        let u = source.next_uniform();
        let pos = select_index(cumulative.as_slice(), u);
        let original = indices.as_slice()[pos];
        trace!("u={u:.3} -> position {pos} (original {original})");
        results.push(original);

        if !replace {
            indices = indices.remove_at(pos);
            weights = weights.remove_at(pos);
            cumulative = weights.scale().cumulative_probability();
            trace!("remaining {:?}, cumulative {cumulative}", indices.as_slice());
        }
    }

    Ok(results)
}
