// src/engine/mod.rs
/*!
The combination engine: applies a pluggable elementwise kernel across the
four container levels, reconciling unequal vector lengths and unequal
membership under the active [`AlignMode`].

Layering, leaf to root:

- [`vector`]: the Vector Alignment Policy over two numeric sequences
  (standard min/max passthrough vs strict truncation, optional window,
  scalar and bare-slice operands).
- [`collection`]: alignment of two coordinate-keyed collections (combine
  common coordinates, pass through or drop the rest).
- [`grid`]: grid- and stack-level propagation (dimension checks, group
  union, pairwise stack walks).
- [`broadcast`]: the unary engine (single-operand kernels at every level).

Every operation validates eagerly and returns freshly built containers;
inputs are never mutated.
*/

pub mod broadcast;
pub mod collection;
pub mod grid;
pub mod kernel;
pub mod vector;

pub use broadcast::{map_collection, map_grid, map_slice, map_stack, map_vector};
pub use collection::{
    combine_collection_with_constant, combine_collection_with_slice, combine_collections,
};
pub use grid::{
    combine_grid_with_collection, combine_grid_with_constant, combine_grid_with_slice,
    combine_grids, combine_stack_with_collection, combine_stack_with_constant,
    combine_stack_with_slice, combine_stacks,
};
pub use kernel::{AlignMode, BinaryKernel, UnaryKernel, Window};
pub use vector::{
    combine, combine_range, combine_slice_with_constant, combine_slices, combine_strict,
    combine_strict_range, combine_vector_with_constant, combine_vector_with_slice,
    combine_vectors,
};
