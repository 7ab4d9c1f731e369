// src/engine/collection.rs
/*!
**CoordinateCollection alignment**: combine two well sets, applying the
Vector Alignment Policy to each pair of wells sharing a coordinate.

Membership rules:
- `common` (coordinates in both) is combined per the active mode/window.
- **Standard**: wells present on only one side pass through. With a window,
  a passthrough well is **sliced** to `[begin, min(begin + length, len))`,
  clamped rather than validated — the same sub-range restriction applied to
  combined pairs, carried over to the wells that never met a partner.
- **Strict**: only `common` appears in the result.

Validation is eager: every common pair's window is checked before any
result vector is built, so a failure constructs nothing.
*/

use tracing::debug;

use super::kernel::{AlignMode, BinaryKernel, Window};
use super::vector;
use crate::data::collection::CoordinateCollection;
use crate::data::vector::DataVector;
use crate::error::Result;
use crate::math::scalar::Scalar;

/// Slice or clone a passthrough well per the standard-mode window rule.
#[inline]
fn passthrough<T: Scalar>(v: &DataVector<T>, window: Option<Window>) -> DataVector<T> {
    match window {
        Some(w) => v.slice_clamped(w.begin, w.length),
        None => v.clone(),
    }
}

/// Combine two collections under `mode`, optionally windowed.
///
/// Result membership: `common ∪ (only_a ∪ only_b)` in standard mode,
/// `common` alone in strict mode.
pub fn combine_collections<T, K>(
    a: &CoordinateCollection<T>,
    b: &CoordinateCollection<T>,
    kernel: &K,
    mode: AlignMode,
    window: Option<Window>,
) -> Result<CoordinateCollection<T>>
where
    T: Scalar,
    K: BinaryKernel<T> + ?Sized,
{
    debug!(
        kernel = kernel.name(),
        mode = ?mode,
        a_len = a.len(),
        b_len = b.len(),
        "combining collections"
    );

    // Pass 1: validate every common pair up front (fail before building).
    for va in a.iter() {
        if let Some(vb) = b.get(va.coord()) {
            vector::validate_window_binary(va.len(), vb.len(), mode, window)?;
        }
    }

    // Pass 2: build.
    let mut out = CoordinateCollection::new();
    for va in a.iter() {
        match b.get(va.coord()) {
            Some(vb) => {
                let combined = vector::combine_vectors(va, vb, kernel, mode, window)?;
                let _ = out.replace(combined);
            }
            None if mode == AlignMode::Standard => {
                let _ = out.replace(passthrough(va, window));
            }
            None => {}
        }
    }
    if mode == AlignMode::Standard {
        for vb in b.iter() {
            if !a.contains(vb.coord()) {
                let _ = out.replace(passthrough(vb, window));
            }
        }
    }
    Ok(out)
}

/// Combine every well of a collection with a bare sequence.
pub fn combine_collection_with_slice<T, K>(
    a: &CoordinateCollection<T>,
    b: &[T],
    kernel: &K,
    mode: AlignMode,
    window: Option<Window>,
) -> Result<CoordinateCollection<T>>
where
    T: Scalar,
    K: BinaryKernel<T> + ?Sized,
{
    debug!(
        kernel = kernel.name(),
        mode = ?mode,
        a_len = a.len(),
        operand_len = b.len(),
        "combining collection with sequence"
    );

    for va in a.iter() {
        vector::validate_window_binary(va.len(), b.len(), mode, window)?;
    }

    let mut out = CoordinateCollection::new();
    for va in a.iter() {
        let combined = vector::combine_vector_with_slice(va, b, kernel, mode, window)?;
        let _ = out.replace(combined);
    }
    Ok(out)
}

/// Combine every well of a collection with a broadcast constant.
pub fn combine_collection_with_constant<T, K>(
    a: &CoordinateCollection<T>,
    constant: T,
    kernel: &K,
    window: Option<Window>,
) -> Result<CoordinateCollection<T>>
where
    T: Scalar,
    K: BinaryKernel<T> + ?Sized,
{
    debug!(
        kernel = kernel.name(),
        a_len = a.len(),
        "combining collection with constant"
    );

    for va in a.iter() {
        vector::validate_window_unary(va.len(), window)?;
    }

    let mut out = CoordinateCollection::new();
    for va in a.iter() {
        let combined = vector::combine_vector_with_constant(va, constant, kernel, window)?;
        let _ = out.replace(combined);
    }
    Ok(out)
}
