// src/stats/mod.rs
/*!
Aggregation consumers over engine containers: mean, percentile, quantile,
interquartile range, and equal-width binning.

These functions read a payload (or every payload of a collection / grid)
and reduce it; they never participate in alignment.

Conventions:
- `mean`, `quantile`, `interquartile_range` return `f64` (fractional for
  integer payloads).
- `percentile` is nearest-rank: for rank `p` in `(0, 100]`, the element at
  sorted index `ceil(p/100 * n) - 1` — always an actual observation, so it
  returns the element type.
- `quantile(q)` for `q` in `[0, 1]` interpolates linearly between the two
  closest order statistics.
- Selection uses quickselect with a `partial_cmp` total-order fallback, not
  a full sort.
- Empty payloads are `EmptyInput`; out-of-range ranks are
  `InvalidParameter`.
*/

use core::cmp::Ordering;
use std::collections::BTreeMap;

use crate::data::collection::CoordinateCollection;
use crate::data::coordinate::Coordinate;
use crate::data::grid::Grid;
use crate::error::{PlateError, Result};
use crate::math::scalar::Scalar;

// ============================================================================
// ------------------------------ Slice statistics -----------------------------
// ============================================================================

/// Arithmetic mean.
pub fn mean<T: Scalar>(data: &[T]) -> Result<f64> {
    if data.is_empty() {
        return Err(PlateError::EmptyInput("mean of empty payload"));
    }
    let sum: f64 = data.iter().map(|x| Scalar::to_f64(*x)).sum();
    Ok(sum / data.len() as f64)
}

#[inline]
fn total_cmp<T: Scalar>(a: &T, b: &T) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

/// Nearest-rank percentile for `p` in `(0, 100]`.
pub fn percentile<T: Scalar>(data: &[T], p: f64) -> Result<T> {
    if data.is_empty() {
        return Err(PlateError::EmptyInput("percentile of empty payload"));
    }
    if !(p > 0.0 && p <= 100.0) {
        return Err(PlateError::InvalidParameter("percentile rank must be in (0, 100]"));
    }
    let n = data.len();
    let rank = ((p / 100.0) * n as f64).ceil() as usize;
    let idx = rank.max(1) - 1;

    let mut vals = data.to_vec();
    vals.select_nth_unstable_by(idx, total_cmp);
    Ok(vals[idx])
}

/// Linearly interpolated quantile for `q` in `[0, 1]`.
pub fn quantile<T: Scalar>(data: &[T], q: f64) -> Result<f64> {
    if data.is_empty() {
        return Err(PlateError::EmptyInput("quantile of empty payload"));
    }
    if !(0.0..=1.0).contains(&q) {
        return Err(PlateError::InvalidParameter("quantile must be in [0, 1]"));
    }
    let n = data.len();
    if n == 1 {
        return Ok(data[0].to_f64());
    }

    let h = q * (n - 1) as f64;
    let lo = h.floor() as usize;
    let frac = h - lo as f64;

    let mut vals = data.to_vec();
    vals.select_nth_unstable_by(lo, total_cmp);
    let v_lo = vals[lo].to_f64();
    if frac == 0.0 {
        return Ok(v_lo);
    }
    // smallest element strictly above position `lo`
    let v_hi = vals[lo + 1..]
        .iter()
        .copied()
        .min_by(total_cmp)
        .map(|x| x.to_f64())
        .unwrap_or(v_lo);
    Ok(v_lo + frac * (v_hi - v_lo))
}

/// Interquartile range: `quantile(0.75) - quantile(0.25)`.
pub fn interquartile_range<T: Scalar>(data: &[T]) -> Result<f64> {
    Ok(quantile(data, 0.75)? - quantile(data, 0.25)?)
}

/// Equal-width histogram over `[min, max]`; counts sum to `data.len()`.
///
/// A degenerate payload (all values equal) lands entirely in bin 0.
pub fn bin_counts<T: Scalar>(data: &[T], bins: usize) -> Result<Vec<usize>> {
    if data.is_empty() {
        return Err(PlateError::EmptyInput("binning of empty payload"));
    }
    if bins == 0 {
        return Err(PlateError::InvalidParameter("bin count must be > 0"));
    }

    let lo = data.iter().copied().min_by(total_cmp).map(|x| x.to_f64());
    let hi = data.iter().copied().max_by(total_cmp).map(|x| x.to_f64());
    let (lo, hi) = match (lo, hi) {
        (Some(lo), Some(hi)) => (lo, hi),
        _ => return Err(PlateError::EmptyInput("binning of empty payload")),
    };
    let width = (hi - lo) / bins as f64;

    let mut counts = vec![0usize; bins];
    for x in data {
        let x = Scalar::to_f64(*x);
        let idx = if width == 0.0 {
            0
        } else {
            // the max value belongs to the last bin, not one past it
            (((x - lo) / width) as usize).min(bins - 1)
        };
        counts[idx] += 1;
    }
    Ok(counts)
}

// ============================================================================
// ---------------------------- Container adapters -----------------------------
// ============================================================================

/// Per-well means of a collection, keyed by coordinate.
pub fn mean_by_coordinate<T: Scalar>(
    c: &CoordinateCollection<T>,
) -> Result<BTreeMap<Coordinate, f64>> {
    c.iter()
        .map(|v| Ok((v.coord(), mean(v.data())?)))
        .collect()
}

/// Per-well nearest-rank percentiles of a collection.
pub fn percentile_by_coordinate<T: Scalar>(
    c: &CoordinateCollection<T>,
    p: f64,
) -> Result<BTreeMap<Coordinate, T>> {
    c.iter()
        .map(|v| Ok((v.coord(), percentile(v.data(), p)?)))
        .collect()
}

/// Pool every measurement of every well in a grid into one sequence.
fn pooled<T: Scalar>(g: &Grid<T>) -> Vec<T> {
    g.collection()
        .iter()
        .flat_map(|v| v.data().iter().copied())
        .collect()
}

/// Plate-level mean across all wells.
pub fn grid_mean<T: Scalar>(g: &Grid<T>) -> Result<f64> {
    mean(&pooled(g))
}

/// Plate-level interpolated quantile across all wells.
pub fn grid_quantile<T: Scalar>(g: &Grid<T>, q: f64) -> Result<f64> {
    quantile(&pooled(g), q)
}

/// Plate-level interquartile range across all wells.
pub fn grid_interquartile_range<T: Scalar>(g: &Grid<T>) -> Result<f64> {
    interquartile_range(&pooled(g))
}
