// src/error.rs
//! Typed error taxonomy for container mutations and engine operations.
//!
//! Every public engine operation validates eagerly, before any partial
//! result is constructed; a failed call returns one of these variants and
//! constructs nothing.

use crate::data::coordinate::Coordinate;

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, PlateError>;

/// Errors surfaced by containers and the combination engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlateError {
    /// Two grids (or stacks) combined at grid level disagree on rows/columns.
    #[error("dimension mismatch: expected {expected_rows}x{expected_columns}, got {got_rows}x{got_columns}")]
    DimensionMismatch {
        expected_rows: usize,
        expected_columns: usize,
        got_rows: usize,
        got_columns: usize,
    },

    /// A requested window `[begin, begin + length)` exceeds the bounds of a
    /// participating vector.
    #[error("index window [{begin}, {begin}+{length}) exceeds vector length {len}")]
    IndexOutOfRange {
        begin: usize,
        length: usize,
        len: usize,
    },

    /// Insert would violate the one-vector-per-coordinate invariant.
    #[error("duplicate coordinate {0}")]
    DuplicateCoordinate(Coordinate),

    /// A coordinate lies outside a grid's rows × columns space.
    #[error("coordinate {coord} out of bounds for {rows}x{columns} grid")]
    CoordinateOutOfBounds {
        coord: Coordinate,
        rows: usize,
        columns: usize,
    },

    /// A named group was requested that the grid does not define.
    #[error("unknown group {0:?}")]
    UnknownGroup(String),

    /// A grid or stack was constructed with a zero dimension.
    #[error("invalid dimensions {rows}x{columns}: rows and columns must be > 0")]
    InvalidDimensions { rows: usize, columns: usize },

    /// An elementwise numeric cast over/underflowed the target type.
    #[error("numeric cast out of range: {what}")]
    CastOverflow { what: String },

    /// An aggregation was asked for on an empty payload.
    #[error("empty input: {0}")]
    EmptyInput(&'static str),

    /// A statistical parameter (percentile rank, quantile, bin count) is
    /// outside its valid range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_carry_context() {
        let e = PlateError::DimensionMismatch {
            expected_rows: 2,
            expected_columns: 3,
            got_rows: 3,
            got_columns: 3,
        };
        assert!(e.to_string().contains("2x3"));
        assert!(e.to_string().contains("3x3"));

        let e = PlateError::IndexOutOfRange {
            begin: 4,
            length: 5,
            len: 6,
        };
        assert!(e.to_string().contains('4'));
        assert!(e.to_string().contains('6'));

        let e = PlateError::DuplicateCoordinate(Coordinate::new(1, 2));
        assert!(e.to_string().contains("(1, 2)"));
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PlateError>();
    }
}
