// src/data/rand.rs
/*
    Fill wells, collections, grids, and stacks with random measurements
    (parallelized).

    Design goals
    ------------
    - **Thread-safe & parallel**: every element is sampled independently in
      a `par_iter_mut()` loop; each loop body creates its own local RNG via
      `rand::rng()`, so there is no shared mutable state or locking.
    - **Clear type split**:
        * `f64` payloads: Uniform / Normal
        * `i64` payloads: UniformInt
    - **No duplication**: small distribution-specific fillers; user code
      calls the public dispatchers `fill_random_f64` / `fill_random_i64`
      or the whole-container builders.

    Notes
    -----
    - Bounds/parameter validation is performed by the distribution
      constructors (this is test/demo data generation; invalid parameters
      panic with the constructor's message).
    - Builders fill the full rows × columns space with one well per
      coordinate, all payloads of length `len`.
*/

use rand::rng;
use rand_distr::{Distribution, Normal, Uniform};
use rayon::prelude::*;

use super::collection::CoordinateCollection;
use super::coordinate::Coordinate;
use super::grid::Grid;
use super::stack::GridStack;
use super::vector::DataVector;
use crate::error::Result;

// ============================================================================
// ------------------------- Distribution dispatchers --------------------------
// ============================================================================

/// Which distribution to sample from.
#[derive(Debug, Clone, Copy)]
pub enum RandType {
    /// Continuous uniform on `[low, high)`.
    Uniform { low: f64, high: f64 },
    /// Normal with the given mean and standard deviation.
    Normal { mean: f64, std: f64 },
    /// Discrete uniform on `[low, high]` (inclusive).
    UniformInt { low: i64, high: i64 },
}

/// Fill an `f64` payload in place. `UniformInt` samples are cast to `f64`.
pub fn fill_random_f64(data: &mut [f64], rt: RandType) {
    match rt {
        RandType::Uniform { low, high } => {
            let dist = Uniform::new(low, high)
                .expect("fill_random_f64: invalid uniform bounds (require low < high)");
            data.par_iter_mut().for_each(|x| {
                let mut rng_local = rng();
                *x = dist.sample(&mut rng_local);
            });
        }
        RandType::Normal { mean, std } => {
            let dist = Normal::new(mean, std)
                .expect("fill_random_f64: invalid normal params (std must be >= 0)");
            data.par_iter_mut().for_each(|x| {
                let mut rng_local = rng();
                *x = dist.sample(&mut rng_local);
            });
        }
        RandType::UniformInt { low, high } => {
            let dist = Uniform::new_inclusive(low, high)
                .expect("fill_random_f64: invalid integer bounds (require low <= high)");
            data.par_iter_mut().for_each(|x| {
                let mut rng_local = rng();
                *x = dist.sample(&mut rng_local) as f64;
            });
        }
    }
}

/// Fill an `i64` payload in place; only `UniformInt` applies.
///
/// # Panics
/// Panics if `rt` is a continuous distribution.
pub fn fill_random_i64(data: &mut [i64], rt: RandType) {
    match rt {
        RandType::UniformInt { low, high } => {
            let dist = Uniform::new_inclusive(low, high)
                .expect("fill_random_i64: invalid integer bounds (require low <= high)");
            data.par_iter_mut().for_each(|x| {
                let mut rng_local = rng();
                *x = dist.sample(&mut rng_local);
            });
        }
        other => panic!("fill_random_i64: unsupported distribution {other:?} for integer payloads"),
    }
}

// ============================================================================
// ----------------------------- Container builders ----------------------------
// ============================================================================

/// One random well at `coord` with a payload of `len` samples.
pub fn random_vector_f64(coord: Coordinate, len: usize, rt: RandType) -> DataVector<f64> {
    let mut data = vec![0.0; len];
    fill_random_f64(&mut data, rt);
    DataVector::new(coord, data)
}

/// A full collection: one well per coordinate of the rows × columns space.
pub fn random_collection_f64(
    rows: usize,
    columns: usize,
    len: usize,
    rt: RandType,
) -> Result<CoordinateCollection<f64>> {
    let mut out = CoordinateCollection::new();
    for row in 0..rows {
        for column in 0..columns {
            out.insert(random_vector_f64(Coordinate::new(row, column), len, rt))?;
        }
    }
    Ok(out)
}

/// A fully populated random grid.
pub fn random_grid_f64(rows: usize, columns: usize, len: usize, rt: RandType) -> Result<Grid<f64>> {
    let mut grid = Grid::new(rows, columns)?;
    for row in 0..rows {
        for column in 0..columns {
            grid.insert(random_vector_f64(Coordinate::new(row, column), len, rt))?;
        }
    }
    Ok(grid)
}

/// A stack of `depth` fully populated random grids.
pub fn random_stack_f64(
    rows: usize,
    columns: usize,
    len: usize,
    depth: usize,
    rt: RandType,
) -> Result<GridStack<f64>> {
    let mut stack = GridStack::new(rows, columns)?;
    for _ in 0..depth {
        stack.push(random_grid_f64(rows, columns, len, rt)?)?;
    }
    Ok(stack)
}

/// A fully populated random integer grid (`UniformInt` only).
pub fn random_grid_i64(rows: usize, columns: usize, len: usize, rt: RandType) -> Result<Grid<i64>> {
    let mut grid = Grid::new(rows, columns)?;
    for row in 0..rows {
        for column in 0..columns {
            let mut data = vec![0i64; len];
            fill_random_i64(&mut data, rt);
            grid.insert(DataVector::new(Coordinate::new(row, column), data))?;
        }
    }
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_fill_respects_bounds() {
        let mut data = vec![0.0; 256];
        fill_random_f64(&mut data, RandType::Uniform { low: -1.0, high: 1.0 });
        assert!(data.iter().all(|x| (-1.0..1.0).contains(x)));
    }

    #[test]
    fn builders_fill_the_whole_coordinate_space() {
        let g = random_grid_f64(3, 4, 5, RandType::Normal { mean: 0.0, std: 1.0 }).unwrap();
        assert_eq!(g.collection().len(), 12);
        assert!(g.collection().iter().all(|v| v.len() == 5));

        let s = random_stack_f64(2, 2, 3, 4, RandType::Uniform { low: 0.0, high: 9.0 }).unwrap();
        assert_eq!(s.len(), 4);
    }

    #[test]
    fn integer_fill_is_inclusive() {
        let mut data = vec![0i64; 512];
        fill_random_i64(&mut data, RandType::UniformInt { low: 0, high: 3 });
        assert!(data.iter().all(|x| (0..=3).contains(x)));
    }
}
