//! Numerical stages of the Stable Fluids solver.
//!
//! Every stage is a free function over flat row-major slices laid out on a
//! [`SquareGrid`](eddy_grid::SquareGrid). Stages never allocate.
//!
//! # Dependency order
//!
//! 1. [`boundary::enforce`] and [`relax::relax`] are leaves.
//! 2. [`diffusion::diffuse`] and [`projection::project`] build on both.
//! 3. [`advection::advect`] samples a field backward along the flow.
//! 4. [`decay::decay`] fades a field uniformly.
//!
//! [`diagnostics`] holds read-only measurements used by tests and the
//! engine's finite-value guard.
//!
//! # Parallelism
//!
//! With the `parallel` feature, the cell-independent passes (advection,
//! divergence, gradient subtraction, decay) split interior rows across the
//! rayon pool. Relaxation always sweeps serially in row-major order, so
//! results are bit-identical with and without the feature.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod advection;
pub mod boundary;
pub mod decay;
pub mod diagnostics;
pub mod diffusion;
pub mod projection;
pub mod relax;
mod sweep;

pub use advection::advect;
pub use boundary::enforce;
pub use decay::{decay, DEFAULT_DECAY};
pub use diffusion::diffuse;
pub use projection::project;
pub use relax::{relax, DEFAULT_ITERATIONS};
