// src/data/mod.rs
//! Container hierarchy: coordinate, vector (well), collection (well set),
//! grid (plate), stack — plus random data generation for tests and demos.

pub mod collection;
pub mod coordinate;
pub mod grid;
pub mod rand;
pub mod stack;
pub mod vector;

pub use collection::CoordinateCollection;
pub use coordinate::Coordinate;
pub use grid::Grid;
pub use stack::GridStack;
pub use vector::DataVector;
