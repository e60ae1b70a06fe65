//! Step orchestration for the Eddy fluid solver.
//!
//! [`FluidSim`] owns one grid's state and runs the Stable Fluids pipeline
//! once per [`step()`](FluidSim::step): velocity diffusion, projection,
//! self-advection, a second projection, then density diffusion,
//! advection and decay. Callers inject impulses between steps and read
//! density for rendering after a step returns.
//!
//! Construction is validated through [`FluidConfig`]; per-step timings are
//! reported as [`StepMetrics`]. Diagnostics are emitted through the `log`
//! facade; no logger is installed here.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod fluid;
pub mod metrics;

pub use config::{ConfigError, FluidConfig};
pub use fluid::FluidSim;
pub use metrics::{Stage, StepMetrics};
