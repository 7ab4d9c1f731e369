// src/math/mod.rs
//! Numeric foundations: the sealed [`Scalar`] element trait and
//! overflow-checked elementwise conversions.

pub mod cast;
pub mod scalar;

pub use cast::{try_cast_collection, try_cast_grid, try_cast_slice, try_cast_stack, try_cast_vector};
pub use scalar::{IntScalar, Scalar};
