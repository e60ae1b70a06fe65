//! Eddy: a grid-based Stable Fluids solver for real-time 2D effects.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Eddy sub-crates. For most users, adding `eddy` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use eddy::prelude::*;
//!
//! let mut sim = FluidSim::new(FluidConfig {
//!     size: 64,
//!     ..FluidConfig::default()
//! })
//! .unwrap();
//!
//! // Drop some dye and push it to the right.
//! sim.apply(&[
//!     Impulse::Density { col: 32, row: 32, amount: 100.0 },
//!     Impulse::Velocity { col: 32, row: 32, dx: 5.0, dy: 0.0 },
//! ]);
//! for _ in 0..10 {
//!     sim.step(0.016, 0.0, 0.0001).unwrap();
//! }
//!
//! // Out-of-range writes are discarded.
//! assert!(!sim.add_density(-1, 0, 5.0));
//!
//! let frame: &[f32] = sim.density();
//! assert_eq!(frame.len(), 64 * 64);
//! assert_eq!(sim.tick(), TickId(10));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `eddy-core` | IDs, boundary tags, impulses, step errors |
//! | [`grid`] | `eddy-grid` | Square grid topology and double-buffered state |
//! | [`solver`] | `eddy-solver` | Boundary rule, relaxation, diffusion, projection, advection, diagnostics |
//! | [`engine`] | `eddy-engine` | `FluidSim`, configuration, step metrics |
//!
//! # Features
//!
//! - `parallel`: split the cell-independent passes across the rayon pool.
//!   Results are bit-identical to the serial build.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and IDs (`eddy-core`).
///
/// Contains [`types::Boundary`], [`types::FieldKind`], [`types::Impulse`]
/// and the per-step [`types::StepError`].
pub use eddy_core as types;

/// Grid topology and field storage (`eddy-grid`).
///
/// [`grid::SquareGrid`] addresses cells; [`grid::FluidState`] owns the six
/// field buffers as three [`grid::FieldPair`]s.
pub use eddy_grid as grid;

/// Numerical stages and diagnostics (`eddy-solver`).
///
/// Stage functions operate on raw slices and can drive a custom pipeline;
/// [`solver::diagnostics`] measures divergence, mass and energy.
pub use eddy_solver as solver;

/// Step orchestration (`eddy-engine`).
///
/// [`engine::FluidSim`] runs the full pipeline; [`engine::FluidConfig`]
/// validates its inputs.
pub use eddy_engine as engine;

/// Common imports for typical Eddy usage.
///
/// ```rust
/// use eddy::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use eddy_core::{Boundary, FieldKind, Impulse, TickId};

    // Errors
    pub use eddy_core::{ReadError, StepError};
    pub use eddy_engine::ConfigError;
    pub use eddy_grid::GridError;

    // Grid
    pub use eddy_grid::{FluidState, SquareGrid};

    // Engine
    pub use eddy_engine::{FluidConfig, FluidSim, Stage, StepMetrics};
}
