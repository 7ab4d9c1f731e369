// src/data/stack.rs
/*!
A **GridStack**: an ordered sequence of [`Grid`]s sharing dimensions.

Dimensional conformance is enforced at construction (`push` rejects a grid
whose rows/columns differ from the stack's), so the engine can rely on the
invariant instead of re-checking every member mid-combine.
*/

use serde::{Deserialize, Serialize};

use super::grid::Grid;
use crate::error::{PlateError, Result};
use crate::math::scalar::Scalar;

/// An ordered sequence of plates with common dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StackRepr<T>")]
pub struct GridStack<T: Scalar> {
    rows: usize,
    columns: usize,
    grids: Vec<Grid<T>>,
}

impl<T: Scalar> GridStack<T> {
    /// New empty stack; zero dimensions are rejected.
    pub fn new(rows: usize, columns: usize) -> Result<Self> {
        if rows == 0 || columns == 0 {
            return Err(PlateError::InvalidDimensions { rows, columns });
        }
        Ok(Self {
            rows,
            columns,
            grids: Vec::new(),
        })
    }

    /// Build from grids, enforcing dimensional conformance.
    pub fn from_grids(
        rows: usize,
        columns: usize,
        grids: impl IntoIterator<Item = Grid<T>>,
    ) -> Result<Self> {
        let mut out = Self::new(rows, columns)?;
        for g in grids {
            out.push(g)?;
        }
        Ok(out)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.grids.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.grids.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Grid<T>> {
        self.grids.get(index)
    }

    /// Ordered iteration over member grids.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Grid<T>> {
        self.grids.iter()
    }

    /// Append a grid; its dimensions must match the stack's.
    pub fn push(&mut self, grid: Grid<T>) -> Result<()> {
        if grid.rows() != self.rows || grid.columns() != self.columns {
            return Err(PlateError::DimensionMismatch {
                expected_rows: self.rows,
                expected_columns: self.columns,
                got_rows: grid.rows(),
                got_columns: grid.columns(),
            });
        }
        self.grids.push(grid);
        Ok(())
    }
}

// ===================================================================
// ------------------------- Serialization ----------------------------
// ===================================================================

/// Raw mirror of `GridStack` used to validate deserialized input.
#[derive(Deserialize)]
struct StackRepr<T: Scalar> {
    rows: usize,
    columns: usize,
    grids: Vec<Grid<T>>,
}

impl<T: Scalar> TryFrom<StackRepr<T>> for GridStack<T> {
    type Error = PlateError;

    fn try_from(repr: StackRepr<T>) -> Result<Self> {
        GridStack::from_grids(repr.rows, repr.columns, repr.grids)
    }
}

impl<T: Scalar + Serialize + serde::de::DeserializeOwned> GridStack<T> {
    /// Serialize to a compact JSON string.
    #[inline]
    pub fn to_json_string(&self) -> core::result::Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serialize to a pretty JSON string.
    #[inline]
    pub fn to_json_pretty(&self) -> core::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from a JSON string, re-validating conformance.
    #[inline]
    pub fn from_json_str(s: &str) -> core::result::Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}
