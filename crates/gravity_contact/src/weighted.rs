//! Weighted random selection.
//!
//! [`pick_weighted_index`] draws an index proportionally to its weight. The
//! [`WeightedSampler`] trait is the seam through which the contact model draws;
//! every [`rand::RngCore`] implements it, so a seeded `StdRng` can be passed
//! directly and tests can substitute fixed or scripted samplers.
use rand::RngCore;

use crate::error::{Error, Result};

/// Source of weighted draws over a slice of non-negative weights.
pub trait WeightedSampler {
    /// Returns an index with probability `weights[i] / sum(weights)`.
    fn pick_index(&mut self, weights: &[f64]) -> Result<usize>;
}

impl<R: RngCore + ?Sized> WeightedSampler for R {
    fn pick_index(&mut self, weights: &[f64]) -> Result<usize> {
        pick_weighted_index(weights, self)
    }
}

/// Generate a random float in the range [0, 1).
#[inline]
pub fn rand01<R: RngCore + ?Sized>(rng: &mut R) -> f64 {
    // 53 random mantissa bits.
    (rng.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
}

/// Sum of `weights`, rejecting negative and non-finite entries.
pub fn total_weight(weights: &[f64]) -> Result<f64> {
    let mut total = 0.0;
    for (index, &weight) in weights.iter().enumerate() {
        if !weight.is_finite() || weight < 0.0 {
            return Err(Error::InvalidWeight { index, weight });
        }
        total += weight;
    }
    if !total.is_finite() {
        return Err(Error::InvalidWeight {
            index: weights.len(),
            weight: total,
        });
    }
    Ok(total)
}

/// Draws an index proportionally to `weights`. Zero-weight entries are never picked.
pub fn pick_weighted_index<R: RngCore + ?Sized>(weights: &[f64], rng: &mut R) -> Result<usize> {
    if weights.is_empty() {
        return Err(Error::empty("no weights"));
    }

    let total = total_weight(weights)?;
    if total <= 0.0 {
        return Err(Error::empty("all weights are zero"));
    }

    let mut roll = rand01(rng) * total;
    let mut last_positive = None;
    for (i, &w) in weights.iter().enumerate() {
        if w <= 0.0 {
            continue;
        }
        roll -= w;
        if roll < 0.0 {
            return Ok(i);
        }
        last_positive = Some(i);
    }

    // Rounding can leave a tiny remainder; it belongs to the last positive weight.
    last_positive.ok_or_else(|| Error::empty("all weights are zero"))
}
