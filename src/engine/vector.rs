// src/engine/vector.rs
/*!
The **Vector Alignment Policy**: combine two numeric sequences of possibly
unequal length into one result, given an injected [`BinaryKernel`].

Rules:
- **Standard**: kernel over `0..min(len_a, len_b)`, then the tail of the
  longer operand is copied through unchanged. Result length =
  `max(len_a, len_b)`.
- **Strict**: kernel over `0..min(len_a, len_b)` only; the longer tail is
  discarded. Result length = `min(len_a, len_b)`.
- **Window** `[begin, begin + length)`: only window indices are read or
  emitted. Standard requires the window to fit the *longer* operand,
  strict the *shorter* — so a strict windowed combine equals combining the
  two pre-sliced sub-vectors. Violations are `IndexOutOfRange`, raised
  before any element is touched.
- **Constant operand**: broadcast to every index in range; lengths never
  mismatch, so no passthrough logic exists on that path (and the pure
  per-element map runs data-parallel).
*/

use rayon::prelude::*;

use super::kernel::{AlignMode, BinaryKernel, Window};
use crate::data::vector::DataVector;
use crate::error::{PlateError, Result};
use crate::math::scalar::Scalar;

// ======================================================================================
// ----------------------------------- Validation ---------------------------------------
// ======================================================================================

/// Check a binary window against the mode-dependent bound.
#[inline]
pub(crate) fn validate_window_binary(
    len_a: usize,
    len_b: usize,
    mode: AlignMode,
    window: Option<Window>,
) -> Result<()> {
    let Some(w) = window else { return Ok(()) };
    let bound = match mode {
        AlignMode::Standard => len_a.max(len_b),
        AlignMode::Strict => len_a.min(len_b),
    };
    // checked: an absurd begin/length pair must not wrap past the bound
    if w.begin.checked_add(w.length).map_or(true, |end| end > bound) {
        return Err(PlateError::IndexOutOfRange {
            begin: w.begin,
            length: w.length,
            len: bound,
        });
    }
    Ok(())
}

/// Check a window against a single operand's length.
#[inline]
pub(crate) fn validate_window_unary(len: usize, window: Option<Window>) -> Result<()> {
    let Some(w) = window else { return Ok(()) };
    if w.begin.checked_add(w.length).map_or(true, |end| end > len) {
        return Err(PlateError::IndexOutOfRange {
            begin: w.begin,
            length: w.length,
            len,
        });
    }
    Ok(())
}

// ======================================================================================
// ----------------------------------- Core policy --------------------------------------
// ======================================================================================

/// Combine two bare sequences under `mode`, optionally windowed.
pub fn combine_slices<T, K>(
    a: &[T],
    b: &[T],
    kernel: &K,
    mode: AlignMode,
    window: Option<Window>,
) -> Result<Vec<T>>
where
    T: Scalar,
    K: BinaryKernel<T> + ?Sized,
{
    validate_window_binary(a.len(), b.len(), mode, window)?;

    let shared = a.len().min(b.len());
    let (lo, hi) = match window {
        Some(w) => (w.begin, w.end()),
        None => (
            0,
            match mode {
                AlignMode::Standard => a.len().max(b.len()),
                AlignMode::Strict => shared,
            },
        ),
    };
    // Strict windows are bounded by `shared`, so the passthrough arm below
    // is unreachable in strict mode.
    let longer = if a.len() >= b.len() { a } else { b };

    let mut out = Vec::with_capacity(hi.saturating_sub(lo));
    for i in lo..hi {
        if i < shared {
            out.push(kernel.apply(a[i], b[i]));
        } else {
            out.push(longer[i]);
        }
    }
    Ok(out)
}

/// Combine a sequence with a broadcast constant, optionally windowed.
pub fn combine_slice_with_constant<T, K>(
    a: &[T],
    constant: T,
    kernel: &K,
    window: Option<Window>,
) -> Result<Vec<T>>
where
    T: Scalar,
    K: BinaryKernel<T> + ?Sized,
{
    validate_window_unary(a.len(), window)?;
    let (lo, hi) = match window {
        Some(w) => (w.begin, w.end()),
        None => (0, a.len()),
    };
    Ok(a[lo..hi]
        .par_iter()
        .map(|&x| kernel.apply(x, constant))
        .collect())
}

// ======================================================================================
// -------------------------------- DataVector surface ----------------------------------
// ======================================================================================

/// Combine two wells; the result keeps the **left** operand's coordinate.
pub fn combine_vectors<T, K>(
    a: &DataVector<T>,
    b: &DataVector<T>,
    kernel: &K,
    mode: AlignMode,
    window: Option<Window>,
) -> Result<DataVector<T>>
where
    T: Scalar,
    K: BinaryKernel<T> + ?Sized,
{
    let data = combine_slices(a.data(), b.data(), kernel, mode, window)?;
    Ok(a.with_data(data))
}

/// Combine a well with a bare sequence (same alignment rules as two wells).
pub fn combine_vector_with_slice<T, K>(
    a: &DataVector<T>,
    b: &[T],
    kernel: &K,
    mode: AlignMode,
    window: Option<Window>,
) -> Result<DataVector<T>>
where
    T: Scalar,
    K: BinaryKernel<T> + ?Sized,
{
    let data = combine_slices(a.data(), b, kernel, mode, window)?;
    Ok(a.with_data(data))
}

/// Combine a well with a broadcast constant.
pub fn combine_vector_with_constant<T, K>(
    a: &DataVector<T>,
    constant: T,
    kernel: &K,
    window: Option<Window>,
) -> Result<DataVector<T>>
where
    T: Scalar,
    K: BinaryKernel<T> + ?Sized,
{
    let data = combine_slice_with_constant(a.data(), constant, kernel, window)?;
    Ok(a.with_data(data))
}

// ======================================================================================
// ------------------------------- Legacy 4-call surface --------------------------------
// ======================================================================================

/// Standard full-sequence combine.
#[inline]
pub fn combine<T, K>(a: &[T], b: &[T], kernel: &K) -> Result<Vec<T>>
where
    T: Scalar,
    K: BinaryKernel<T> + ?Sized,
{
    combine_slices(a, b, kernel, AlignMode::Standard, None)
}

/// Strict full-sequence combine.
#[inline]
pub fn combine_strict<T, K>(a: &[T], b: &[T], kernel: &K) -> Result<Vec<T>>
where
    T: Scalar,
    K: BinaryKernel<T> + ?Sized,
{
    combine_slices(a, b, kernel, AlignMode::Strict, None)
}

/// Standard windowed combine over `[begin, begin + length)`.
#[inline]
pub fn combine_range<T, K>(a: &[T], b: &[T], kernel: &K, begin: usize, length: usize) -> Result<Vec<T>>
where
    T: Scalar,
    K: BinaryKernel<T> + ?Sized,
{
    combine_slices(a, b, kernel, AlignMode::Standard, Some(Window::new(begin, length)))
}

/// Strict windowed combine over `[begin, begin + length)`.
#[inline]
pub fn combine_strict_range<T, K>(
    a: &[T],
    b: &[T],
    kernel: &K,
    begin: usize,
    length: usize,
) -> Result<Vec<T>>
where
    T: Scalar,
    K: BinaryKernel<T> + ?Sized,
{
    combine_slices(a, b, kernel, AlignMode::Strict, Some(Window::new(begin, length)))
}
