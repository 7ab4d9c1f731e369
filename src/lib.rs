// src/lib.rs
/*!
**platekit** — microplate assay data containers and a generic elementwise
combination engine.

Container hierarchy, leaf to root:

- [`DataVector`]: an ordered sequence of numeric values addressed by a
  (row, column) [`Coordinate`] — a single assay *well*.
- [`CoordinateCollection`]: a coordinate-keyed, duplicate-free collection of
  `DataVector`s with ascending (row, column) iteration — a *well set*.
- [`Grid`]: a fixed rows × columns container owning one collection plus
  named coordinate groups — a *plate*.
- [`GridStack`]: an ordered sequence of `Grid`s sharing dimensions.

The [`engine`] module applies a pluggable elementwise kernel across all four
levels, reconciling unequal vector lengths and unequal membership under two
alignment policies:

- **Standard**: union-preserving; elements or members present on only one
  side pass through unmodified.
- **Strict**: intersection-only; mismatches are dropped.

Either policy accepts an optional [`Window`] restricting combination to the
index range `[begin, begin + length)`.

Every engine operation is a pure function: inputs are never mutated, all
validation happens before any output is constructed, and failures surface as
a typed [`PlateError`].
*/

pub mod data;
pub mod engine;
pub mod error;
pub mod math;
pub mod ops;
pub mod stats;

pub use data::coordinate::Coordinate;
pub use data::collection::CoordinateCollection;
pub use data::grid::Grid;
pub use data::stack::GridStack;
pub use data::vector::DataVector;
pub use engine::kernel::{AlignMode, BinaryKernel, UnaryKernel, Window};
pub use error::{PlateError, Result};
pub use math::scalar::{IntScalar, Scalar};
