// src/engine/grid.rs
/*!
**Grid and GridStack propagation**: push the collection-level alignment up
through the two outer container levels.

- Grid ⊕ Grid: dimensions must match (checked before any per-well work);
  the result owns the aligned collection and the **union** of both group
  tables (a name on both sides keeps the left list and appends the right's
  unlisted coordinates — neither side's references are lost).
- Grid ⊕ constant / sequence / collection: the operand is applied against
  the grid's collection; group structure is copied from the sole grid.
- Stack ⊕ Stack: pairwise by position. Standard mode appends the longer
  stack's surplus grids unchanged (windowed: with their wells sliced, the
  same passthrough rule the vector level uses); strict mode discards the
  surplus.
*/

use ahash::AHashMap;
use tracing::debug;

use super::collection;
use super::kernel::{AlignMode, BinaryKernel, Window};
use crate::data::collection::CoordinateCollection;
use crate::data::coordinate::Coordinate;
use crate::data::grid::Grid;
use crate::data::stack::GridStack;
use crate::error::{PlateError, Result};
use crate::math::scalar::Scalar;

// ======================================================================================
// ------------------------------------ Grid level --------------------------------------
// ======================================================================================

#[inline]
fn check_dims<T: Scalar>(a: &Grid<T>, b: &Grid<T>) -> Result<()> {
    if a.rows() != b.rows() || a.columns() != b.columns() {
        return Err(PlateError::DimensionMismatch {
            expected_rows: a.rows(),
            expected_columns: a.columns(),
            got_rows: b.rows(),
            got_columns: b.columns(),
        });
    }
    Ok(())
}

/// Union of two group tables: left lists win, right coordinates not already
/// listed are appended.
fn union_groups<T: Scalar>(a: &Grid<T>, b: &Grid<T>) -> AHashMap<String, Vec<Coordinate>> {
    let mut groups = a.groups().clone();
    for (name, coords) in b.groups() {
        match groups.get_mut(name) {
            Some(existing) => {
                for c in coords {
                    if !existing.contains(c) {
                        existing.push(*c);
                    }
                }
            }
            None => {
                groups.insert(name.clone(), coords.clone());
            }
        }
    }
    groups
}

/// Combine two grids of identical dimensions.
pub fn combine_grids<T, K>(
    a: &Grid<T>,
    b: &Grid<T>,
    kernel: &K,
    mode: AlignMode,
    window: Option<Window>,
) -> Result<Grid<T>>
where
    T: Scalar,
    K: BinaryKernel<T> + ?Sized,
{
    check_dims(a, b)?;
    debug!(
        kernel = kernel.name(),
        mode = ?mode,
        rows = a.rows(),
        columns = a.columns(),
        "combining grids"
    );

    let combined = collection::combine_collections(a.collection(), b.collection(), kernel, mode, window)?;
    Ok(Grid::from_parts(
        a.rows(),
        a.columns(),
        combined,
        union_groups(a, b),
    ))
}

/// Combine a grid's wells with an external collection; groups are copied
/// from the sole input grid.
pub fn combine_grid_with_collection<T, K>(
    a: &Grid<T>,
    b: &CoordinateCollection<T>,
    kernel: &K,
    mode: AlignMode,
    window: Option<Window>,
) -> Result<Grid<T>>
where
    T: Scalar,
    K: BinaryKernel<T> + ?Sized,
{
    // Standard-mode passthrough can admit operand wells; they must fit
    // this grid's coordinate space. Checked before any combining starts.
    if mode == AlignMode::Standard {
        for coord in b.coordinates() {
            if !coord.in_bounds(a.rows(), a.columns()) {
                return Err(PlateError::CoordinateOutOfBounds {
                    coord,
                    rows: a.rows(),
                    columns: a.columns(),
                });
            }
        }
    }
    let combined = collection::combine_collections(a.collection(), b, kernel, mode, window)?;
    Ok(Grid::from_parts(a.rows(), a.columns(), combined, a.groups().clone()))
}

/// Combine every well of a grid with a bare sequence.
pub fn combine_grid_with_slice<T, K>(
    a: &Grid<T>,
    b: &[T],
    kernel: &K,
    mode: AlignMode,
    window: Option<Window>,
) -> Result<Grid<T>>
where
    T: Scalar,
    K: BinaryKernel<T> + ?Sized,
{
    let combined = collection::combine_collection_with_slice(a.collection(), b, kernel, mode, window)?;
    Ok(Grid::from_parts(a.rows(), a.columns(), combined, a.groups().clone()))
}

/// Combine every well of a grid with a broadcast constant.
pub fn combine_grid_with_constant<T, K>(
    a: &Grid<T>,
    constant: T,
    kernel: &K,
    window: Option<Window>,
) -> Result<Grid<T>>
where
    T: Scalar,
    K: BinaryKernel<T> + ?Sized,
{
    let combined = collection::combine_collection_with_constant(a.collection(), constant, kernel, window)?;
    Ok(Grid::from_parts(a.rows(), a.columns(), combined, a.groups().clone()))
}

// ======================================================================================
// ------------------------------------ Stack level -------------------------------------
// ======================================================================================

#[inline]
fn check_stack_dims<T: Scalar>(a: &GridStack<T>, b: &GridStack<T>) -> Result<()> {
    if a.rows() != b.rows() || a.columns() != b.columns() {
        return Err(PlateError::DimensionMismatch {
            expected_rows: a.rows(),
            expected_columns: a.columns(),
            got_rows: b.rows(),
            got_columns: b.columns(),
        });
    }
    Ok(())
}

/// Copy a grid for standard-mode stack passthrough, slicing its wells when
/// a window was requested.
fn passthrough_grid<T: Scalar>(g: &Grid<T>, window: Option<Window>) -> Grid<T> {
    match window {
        Some(w) => {
            let mut sliced = CoordinateCollection::new();
            for v in g.collection().iter() {
                let _ = sliced.replace(v.slice_clamped(w.begin, w.length));
            }
            Grid::from_parts(g.rows(), g.columns(), sliced, g.groups().clone())
        }
        None => g.clone(),
    }
}

/// Combine two stacks pairwise by position.
pub fn combine_stacks<T, K>(
    a: &GridStack<T>,
    b: &GridStack<T>,
    kernel: &K,
    mode: AlignMode,
    window: Option<Window>,
) -> Result<GridStack<T>>
where
    T: Scalar,
    K: BinaryKernel<T> + ?Sized,
{
    check_stack_dims(a, b)?;
    debug!(
        kernel = kernel.name(),
        mode = ?mode,
        a_len = a.len(),
        b_len = b.len(),
        "combining stacks"
    );

    let paired = a.len().min(b.len());
    let mut grids = Vec::with_capacity(match mode {
        AlignMode::Standard => a.len().max(b.len()),
        AlignMode::Strict => paired,
    });

    for i in 0..paired {
        // Indices < paired exist in both stacks.
        let (ga, gb) = (a.get(i), b.get(i));
        debug_assert!(ga.is_some() && gb.is_some());
        if let (Some(ga), Some(gb)) = (ga, gb) {
            grids.push(combine_grids(ga, gb, kernel, mode, window)?);
        }
    }

    if mode == AlignMode::Standard {
        let longer = if a.len() >= b.len() { a } else { b };
        for g in longer.iter().skip(paired) {
            grids.push(passthrough_grid(g, window));
        }
    }

    GridStack::from_grids(a.rows(), a.columns(), grids)
}

/// Combine every grid of a stack with an external collection.
pub fn combine_stack_with_collection<T, K>(
    a: &GridStack<T>,
    b: &CoordinateCollection<T>,
    kernel: &K,
    mode: AlignMode,
    window: Option<Window>,
) -> Result<GridStack<T>>
where
    T: Scalar,
    K: BinaryKernel<T> + ?Sized,
{
    let grids: Result<Vec<_>> = a
        .iter()
        .map(|g| combine_grid_with_collection(g, b, kernel, mode, window))
        .collect();
    GridStack::from_grids(a.rows(), a.columns(), grids?)
}

/// Combine every well of every grid in a stack with a bare sequence.
pub fn combine_stack_with_slice<T, K>(
    a: &GridStack<T>,
    b: &[T],
    kernel: &K,
    mode: AlignMode,
    window: Option<Window>,
) -> Result<GridStack<T>>
where
    T: Scalar,
    K: BinaryKernel<T> + ?Sized,
{
    let grids: Result<Vec<_>> = a
        .iter()
        .map(|g| combine_grid_with_slice(g, b, kernel, mode, window))
        .collect();
    GridStack::from_grids(a.rows(), a.columns(), grids?)
}

/// Combine every well of every grid in a stack with a broadcast constant.
pub fn combine_stack_with_constant<T, K>(
    a: &GridStack<T>,
    constant: T,
    kernel: &K,
    window: Option<Window>,
) -> Result<GridStack<T>>
where
    T: Scalar,
    K: BinaryKernel<T> + ?Sized,
{
    let grids: Result<Vec<_>> = a
        .iter()
        .map(|g| combine_grid_with_constant(g, constant, kernel, window))
        .collect();
    GridStack::from_grids(a.rows(), a.columns(), grids?)
}
