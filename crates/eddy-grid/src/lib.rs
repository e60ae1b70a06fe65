//! Grid topology and field storage for Eddy simulations.
//!
//! - [`SquareGrid`]: the fixed `N x N` lattice, with row-major indexing,
//!   interior ranges, and bounds-checked cell lookup.
//! - [`FieldPair`]: a current/previous buffer pair whose roles are
//!   exchanged by swapping owned handles, never by copying.
//! - [`FluidState`]: the six parallel arrays (`u`, `v`, density and their
//!   previous-step counterparts) owned by one simulation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod pair;
pub mod state;

pub use error::GridError;
pub use grid::SquareGrid;
pub use pair::FieldPair;
pub use state::FluidState;
