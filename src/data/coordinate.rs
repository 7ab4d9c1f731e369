// src/data/coordinate.rs
/*!
The (row, column) key addressing a well within a plate's coordinate space.

Ordering is an explicit, tested contract: ascending by row, then column.
Collections iterate in this order; nothing relies on hash order.

Convention: 0-based. A coordinate is in bounds for a `rows` × `columns`
grid iff `row < rows && column < columns`.
*/

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 0-based (row, column) well address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub row: usize,
    pub column: usize,
}

impl Coordinate {
    #[inline]
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// True iff this coordinate lies inside a `rows` × `columns` space.
    #[inline]
    pub fn in_bounds(&self, rows: usize, columns: usize) -> bool {
        self.row < rows && self.column < columns
    }
}

impl From<(usize, usize)> for Coordinate {
    #[inline]
    fn from((row, column): (usize, usize)) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_is_row_major() {
        let mut coords = vec![
            Coordinate::new(1, 0),
            Coordinate::new(0, 2),
            Coordinate::new(0, 0),
            Coordinate::new(1, 1),
        ];
        coords.sort();
        assert_eq!(
            coords,
            vec![
                Coordinate::new(0, 0),
                Coordinate::new(0, 2),
                Coordinate::new(1, 0),
                Coordinate::new(1, 1),
            ]
        );
    }

    #[test]
    fn bounds_are_exclusive() {
        assert!(Coordinate::new(1, 2).in_bounds(2, 3));
        assert!(!Coordinate::new(2, 0).in_bounds(2, 3));
        assert!(!Coordinate::new(0, 3).in_bounds(2, 3));
    }
}
