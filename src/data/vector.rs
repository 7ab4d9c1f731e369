// src/data/vector.rs
/*!
A **DataVector**: one well's ordered measurement sequence with a fixed
(row, column) identity.

Invariants:
- Identity is the coordinate alone; two vectors are the "same well" iff
  their coordinates match, regardless of payload length.
- Payload length is unconstrained (length 0 is a valid empty well).
*/

use serde::{Deserialize, Serialize};

use super::coordinate::Coordinate;
use crate::math::scalar::Scalar;

/// A coordinate-addressed numeric measurement sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataVector<T: Scalar> {
    coord: Coordinate,
    data: Vec<T>,
}

impl<T: Scalar> DataVector<T> {
    /// New vector at `coord` with the given payload.
    #[inline]
    pub fn new(coord: Coordinate, data: Vec<T>) -> Self {
        Self { coord, data }
    }

    /// Convenience: new vector at `(row, column)`.
    #[inline]
    pub fn at(row: usize, column: usize, data: Vec<T>) -> Self {
        Self::new(Coordinate::new(row, column), data)
    }

    /// Empty vector at `coord`.
    #[inline]
    pub fn empty(coord: Coordinate) -> Self {
        Self::new(coord, Vec::new())
    }

    #[inline]
    pub fn coord(&self) -> Coordinate {
        self.coord
    }

    #[inline]
    pub fn row(&self) -> usize {
        self.coord.row
    }

    #[inline]
    pub fn column(&self) -> usize {
        self.coord.column
    }

    /// The measurement payload.
    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Identity comparison: same well position, payload ignored.
    #[inline]
    pub fn same_identity(&self, other: &Self) -> bool {
        self.coord == other.coord
    }

    /// Append one measurement.
    #[inline]
    pub fn push(&mut self, value: T) {
        self.data.push(value);
    }

    /// Copy of this vector restricted to `[begin, begin + length)`,
    /// **clamped** to the payload length (empty when `begin >= len`).
    ///
    /// This is the passthrough slicing rule used by standard windowed
    /// combines; strict paths validate windows instead of clamping.
    #[inline]
    pub fn slice_clamped(&self, begin: usize, length: usize) -> Self {
        let lo = begin.min(self.data.len());
        let hi = begin.saturating_add(length).min(self.data.len());
        Self::new(self.coord, self.data[lo..hi].to_vec())
    }

    /// Replace the payload, keeping the identity.
    #[inline]
    pub fn with_data(&self, data: Vec<T>) -> Self {
        Self::new(self.coord, data)
    }
}
