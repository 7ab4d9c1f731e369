// src/engine/broadcast.rs
/*!
The **unary broadcast engine**: apply a single-operand kernel to every
element of a sequence, and broadcast it to every well of a collection,
every well of a grid, and every grid of a stack.

With one operand there is no alignment policy; only window validation
applies (`begin + length <= len`, checked for every participating well
before any result is built). A windowed map emits the window only. The
per-element map is pure, so it runs data-parallel.
*/

use rayon::prelude::*;
use tracing::debug;

use super::kernel::{UnaryKernel, Window};
use super::vector::validate_window_unary;
use crate::data::collection::CoordinateCollection;
use crate::data::grid::Grid;
use crate::data::stack::GridStack;
use crate::data::vector::DataVector;
use crate::error::Result;
use crate::math::scalar::Scalar;

/// Map a bare sequence, optionally windowed.
pub fn map_slice<T, K>(a: &[T], kernel: &K, window: Option<Window>) -> Result<Vec<T>>
where
    T: Scalar,
    K: UnaryKernel<T> + ?Sized,
{
    validate_window_unary(a.len(), window)?;
    let (lo, hi) = match window {
        Some(w) => (w.begin, w.end()),
        None => (0, a.len()),
    };
    Ok(a[lo..hi].par_iter().map(|&x| kernel.apply(x)).collect())
}

/// Map one well, keeping its identity.
pub fn map_vector<T, K>(a: &DataVector<T>, kernel: &K, window: Option<Window>) -> Result<DataVector<T>>
where
    T: Scalar,
    K: UnaryKernel<T> + ?Sized,
{
    let data = map_slice(a.data(), kernel, window)?;
    Ok(a.with_data(data))
}

/// Map every well of a collection.
pub fn map_collection<T, K>(
    a: &CoordinateCollection<T>,
    kernel: &K,
    window: Option<Window>,
) -> Result<CoordinateCollection<T>>
where
    T: Scalar,
    K: UnaryKernel<T> + ?Sized,
{
    debug!(kernel = kernel.name(), a_len = a.len(), "broadcasting over collection");

    for v in a.iter() {
        validate_window_unary(v.len(), window)?;
    }

    let mut out = CoordinateCollection::new();
    for v in a.iter() {
        let _ = out.replace(map_vector(v, kernel, window)?);
    }
    Ok(out)
}

/// Map every well of a grid; groups and dimensions are preserved.
pub fn map_grid<T, K>(a: &Grid<T>, kernel: &K, window: Option<Window>) -> Result<Grid<T>>
where
    T: Scalar,
    K: UnaryKernel<T> + ?Sized,
{
    let mapped = map_collection(a.collection(), kernel, window)?;
    Ok(Grid::from_parts(a.rows(), a.columns(), mapped, a.groups().clone()))
}

/// Map every grid of a stack, preserving order and dimensions.
pub fn map_stack<T, K>(a: &GridStack<T>, kernel: &K, window: Option<Window>) -> Result<GridStack<T>>
where
    T: Scalar,
    K: UnaryKernel<T> + ?Sized,
{
    debug!(kernel = kernel.name(), stack_len = a.len(), "broadcasting over stack");
    let grids: Result<Vec<_>> = a.iter().map(|g| map_grid(g, kernel, window)).collect();
    GridStack::from_grids(a.rows(), a.columns(), grids?)
}
