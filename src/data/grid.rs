// src/data/grid.rs
/*!
A **Grid**: fixed rows × columns container owning one
[`CoordinateCollection`] plus named coordinate **groups** — a *plate*.

Invariants:
- `rows > 0 && columns > 0`.
- Every vector in the owned collection satisfies
  `row < rows && column < columns` (0-based convention).

Groups are named, ordered coordinate lists referencing positions in the
grid's coordinate space. Groups may overlap and may name coordinates the
collection does not (yet) hold; membership is resolved on lookup, not at
registration.
*/

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use super::collection::CoordinateCollection;
use super::coordinate::Coordinate;
use super::vector::DataVector;
use crate::error::{PlateError, Result};
use crate::math::scalar::Scalar;

/// A fixed-dimension plate owning a well collection and named groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GridRepr<T>")]
pub struct Grid<T: Scalar> {
    rows: usize,
    columns: usize,
    collection: CoordinateCollection<T>,
    groups: AHashMap<String, Vec<Coordinate>>,
}

// ===================================================================
// ----------------------------- Basics ------------------------------
// ===================================================================

impl<T: Scalar> Grid<T> {
    /// New empty grid; zero dimensions are rejected.
    pub fn new(rows: usize, columns: usize) -> Result<Self> {
        if rows == 0 || columns == 0 {
            return Err(PlateError::InvalidDimensions { rows, columns });
        }
        Ok(Self {
            rows,
            columns,
            collection: CoordinateCollection::new(),
            groups: AHashMap::new(),
        })
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
    pub fn collection(&self) -> &CoordinateCollection<T> {
        &self.collection
    }

    /// Insert a vector after bounds-checking its coordinate; duplicate
    /// coordinates are rejected by the collection.
    pub fn insert(&mut self, vector: DataVector<T>) -> Result<()> {
        self.check_bounds(vector.coord())?;
        self.collection.insert(vector)
    }

    /// Insert or overwrite after bounds-checking.
    pub fn replace(&mut self, vector: DataVector<T>) -> Result<Option<DataVector<T>>> {
        self.check_bounds(vector.coord())?;
        Ok(self.collection.replace(vector))
    }

    #[inline]
    pub fn get(&self, coord: Coordinate) -> Option<&DataVector<T>> {
        self.collection.get(coord)
    }

    #[inline]
    fn check_bounds(&self, coord: Coordinate) -> Result<()> {
        if coord.in_bounds(self.rows, self.columns) {
            Ok(())
        } else {
            Err(PlateError::CoordinateOutOfBounds {
                coord,
                rows: self.rows,
                columns: self.columns,
            })
        }
    }
}

// ===================================================================
// ------------------------------ Groups ------------------------------
// ===================================================================

impl<T: Scalar> Grid<T> {
    /// Register (or redefine) a named group.
    pub fn set_group(&mut self, name: impl Into<String>, coords: Vec<Coordinate>) {
        self.groups.insert(name.into(), coords);
    }

    /// The coordinate list of a group, in registration order.
    pub fn group(&self, name: &str) -> Result<&[Coordinate]> {
        self.groups
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| PlateError::UnknownGroup(name.to_string()))
    }

    /// Resolve a group to the vectors actually present in the collection,
    /// preserving the group's coordinate order; absent coordinates are
    /// skipped.
    pub fn group_vectors(&self, name: &str) -> Result<Vec<&DataVector<T>>> {
        let coords = self.group(name)?;
        Ok(coords
            .iter()
            .filter_map(|c| self.collection.get(*c))
            .collect())
    }

    /// Group names (hash order; names, not membership, are unordered).
    #[inline]
    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    #[inline]
    pub fn groups(&self) -> &AHashMap<String, Vec<Coordinate>> {
        &self.groups
    }
}

// ===================================================================
// ------------------------ Engine construction -----------------------
// ===================================================================

impl<T: Scalar> Grid<T> {
    /// Assemble a grid from parts already known to satisfy the invariants
    /// (engine results built from validated inputs).
    pub(crate) fn from_parts(
        rows: usize,
        columns: usize,
        collection: CoordinateCollection<T>,
        groups: AHashMap<String, Vec<Coordinate>>,
    ) -> Self {
        debug_assert!(rows > 0 && columns > 0);
        debug_assert!(collection.coordinates().all(|c| c.in_bounds(rows, columns)));
        Self {
            rows,
            columns,
            collection,
            groups,
        }
    }
}

// ===================================================================
// ------------------------- Serialization ----------------------------
// ===================================================================

/// Raw mirror of `Grid` used to validate deserialized input.
#[derive(Deserialize)]
struct GridRepr<T: Scalar> {
    rows: usize,
    columns: usize,
    collection: CoordinateCollection<T>,
    groups: AHashMap<String, Vec<Coordinate>>,
}

impl<T: Scalar> TryFrom<GridRepr<T>> for Grid<T> {
    type Error = PlateError;

    fn try_from(repr: GridRepr<T>) -> Result<Self> {
        let mut grid = Grid::new(repr.rows, repr.columns)?;
        for v in repr.collection.iter() {
            grid.insert(v.clone())?;
        }
        grid.groups = repr.groups;
        Ok(grid)
    }
}

impl<T: Scalar + Serialize + serde::de::DeserializeOwned> Grid<T> {
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

    /// Deserialize from a JSON string, re-validating dimensions and bounds.
    #[inline]
    pub fn from_json_str(s: &str) -> core::result::Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}
