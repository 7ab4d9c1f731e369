// src/math/cast.rs
/*!
Overflow-checked elementwise type conversion for payloads and containers.

Conversion goes through `num_traits::NumCast`: the first element that
over/underflows (or is NaN for an integer target) aborts the whole
conversion with [`PlateError::CastOverflow`] naming the offending position,
so a partially converted container is never produced.
*/

use num_traits::NumCast;

use crate::data::collection::CoordinateCollection;
use crate::data::grid::Grid;
use crate::data::stack::GridStack;
use crate::data::vector::DataVector;
use crate::error::{PlateError, Result};
use crate::math::scalar::Scalar;

/// Convert a bare sequence element by element.
pub fn try_cast_slice<T: Scalar, U: Scalar>(data: &[T]) -> Result<Vec<U>> {
    data.iter()
        .enumerate()
        .map(|(i, &x)| {
            NumCast::from(x).ok_or_else(|| PlateError::CastOverflow {
                what: format!("value {x} at index {i}"),
            })
        })
        .collect()
}

/// Convert a well's payload, keeping its identity.
pub fn try_cast_vector<T: Scalar, U: Scalar>(v: &DataVector<T>) -> Result<DataVector<U>> {
    let data = try_cast_slice(v.data()).map_err(|e| match e {
        PlateError::CastOverflow { what } => PlateError::CastOverflow {
            what: format!("{what} in well {}", v.coord()),
        },
        other => other,
    })?;
    Ok(DataVector::new(v.coord(), data))
}

/// Convert every well of a collection.
pub fn try_cast_collection<T: Scalar, U: Scalar>(
    c: &CoordinateCollection<T>,
) -> Result<CoordinateCollection<U>> {
    let mut out = CoordinateCollection::new();
    for v in c.iter() {
        let _ = out.replace(try_cast_vector(v)?);
    }
    Ok(out)
}

/// Convert every well of a grid; dimensions and groups are preserved.
pub fn try_cast_grid<T: Scalar, U: Scalar>(g: &Grid<T>) -> Result<Grid<U>> {
    let collection = try_cast_collection(g.collection())?;
    Ok(Grid::from_parts(
        g.rows(),
        g.columns(),
        collection,
        g.groups().clone(),
    ))
}

/// Convert every grid of a stack, preserving order.
pub fn try_cast_stack<T: Scalar, U: Scalar>(s: &GridStack<T>) -> Result<GridStack<U>> {
    let grids: Result<Vec<_>> = s.iter().map(|g| try_cast_grid::<T, U>(g)).collect();
    GridStack::from_grids(s.rows(), s.columns(), grids?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_range_roundtrips() {
        let small: Vec<u8> = try_cast_slice::<i64, u8>(&[0, 127, 255]).unwrap();
        assert_eq!(small, vec![0u8, 127, 255]);
        let back: Vec<i64> = try_cast_slice::<u8, i64>(&small).unwrap();
        assert_eq!(back, vec![0i64, 127, 255]);
    }

    #[test]
    fn overflow_names_position() {
        let err = try_cast_slice::<i64, u8>(&[1, 256, 3]).unwrap_err();
        match err {
            PlateError::CastOverflow { what } => {
                assert!(what.contains("256"));
                assert!(what.contains("index 1"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn vector_cast_names_well() {
        let v = DataVector::at(2, 5, vec![-1i64]);
        let err = try_cast_vector::<i64, u8>(&v).unwrap_err();
        match err {
            PlateError::CastOverflow { what } => assert!(what.contains("(2, 5)")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
