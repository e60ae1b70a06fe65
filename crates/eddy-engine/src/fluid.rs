//! The owned simulation object.
//!
//! [`FluidSim`] owns all six field buffers of one grid and advances them
//! with [`step()`](FluidSim::step). Several simulations may coexist; none
//! of them share state.
//!
//! # Ownership model
//!
//! Every mutating method takes `&mut self`, and the read accessors borrow
//! from `self`. A caller holding a [`density()`](FluidSim::density) view
//! cannot step until the view is dropped, so a renderer never observes a
//! half-written frame. Callers that must keep a frame across steps copy it
//! out with [`density_snapshot()`](FluidSim::density_snapshot) or
//! [`copy_density_into()`](FluidSim::copy_density_into).

use std::time::Instant;

use eddy_core::{Boundary, FieldKind, Impulse, ReadError, StepError, TickId};
use eddy_grid::{FluidState, SquareGrid};
use eddy_solver::{advect, decay, diagnostics, diffuse, project};

use crate::config::{ConfigError, FluidConfig};
use crate::metrics::{Stage, StepMetrics};

// Compile-time assertion: FluidSim can be moved to another thread.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<FluidSim>();
    }
};

/// Validated inputs of one step.
#[derive(Clone, Copy, Debug)]
struct StepParams {
    dt: f32,
    viscosity: f32,
    diffusion: f32,
}

// ── FluidSim ───────────────────────────────────────────────────────

/// A Stable Fluids simulation on a fixed square grid.
///
/// # Examples
///
/// ```
/// use eddy_engine::FluidSim;
///
/// let mut sim = FluidSim::with_defaults();
/// sim.add_density(64, 64, 100.0);
/// sim.add_velocity(64, 64, 5.0, 0.0);
/// sim.step(0.016, 0.0, 0.0001).unwrap();
///
/// assert_eq!(sim.density().len(), 128 * 128);
/// assert_eq!(sim.tick().0, 1);
/// ```
pub struct FluidSim {
    config: FluidConfig,
    grid: SquareGrid,
    state: FluidState,
    tick: TickId,
    last_metrics: StepMetrics,
}

impl FluidSim {
    /// Create a simulation from a validated configuration.
    ///
    /// All buffers are allocated here, zeroed, and reused by every step.
    pub fn new(config: FluidConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = SquareGrid::new(config.size)?;
        Ok(Self::build(config, grid))
    }

    /// The reference configuration: a 128x128 grid with 20 relaxation
    /// sweeps and 0.99 decay.
    pub fn with_defaults() -> Self {
        Self::build(FluidConfig::default(), SquareGrid::default())
    }

    fn build(config: FluidConfig, grid: SquareGrid) -> Self {
        let state = FluidState::new(grid);
        log::debug!(
            "fluid sim created: {n}x{n} grid, {} iterations, decay {}, {} bytes",
            config.iterations,
            config.decay,
            state.memory_bytes(),
            n = grid.size(),
        );
        Self {
            config,
            grid,
            state,
            tick: TickId::default(),
            last_metrics: StepMetrics::default(),
        }
    }

    /// Zero every buffer, reset the tick to 0 and clear metrics.
    pub fn init(&mut self) {
        self.state.clear();
        self.tick = TickId::default();
        self.last_metrics = StepMetrics::default();
        log::debug!("fluid sim reset");
    }

    // ── Impulses ───────────────────────────────────────────────────

    /// Add `amount` to the density at `(col, row)`.
    ///
    /// Out-of-range cells are ignored; returns whether the write landed.
    pub fn add_density(&mut self, col: i32, row: i32, amount: f32) -> bool {
        self.state.add_density(col, row, amount)
    }

    /// Add `(dx, dy)` to the velocity at `(col, row)`.
    ///
    /// Out-of-range cells are ignored; returns whether the write landed.
    pub fn add_velocity(&mut self, col: i32, row: i32, dx: f32, dy: f32) -> bool {
        self.state.add_velocity(col, row, dx, dy)
    }

    /// Apply a batch of impulses in order. Returns how many landed.
    pub fn apply(&mut self, impulses: &[Impulse]) -> usize {
        impulses
            .iter()
            .filter(|imp| self.state.apply(imp))
            .count()
    }

    // ── Stepping ───────────────────────────────────────────────────

    /// Advance the simulation by one step.
    ///
    /// Runs [`Stage::PIPELINE`] in order and returns the step's metrics.
    ///
    /// # Errors
    ///
    /// - [`StepError::InvalidDt`] if `dt` is not finite and positive.
    /// - [`StepError::DtOutOfRange`] if `dt` exceeds the configured `max_dt`.
    /// - [`StepError::InvalidRate`] if a rate is not finite and non-negative.
    ///
    /// The grid is untouched in all three cases. With `check_finite`
    /// enabled, [`StepError::NonFinite`] reports the first NaN or infinity
    /// found after the step; that step has already been applied and
    /// counted.
    pub fn step(
        &mut self,
        dt: f32,
        viscosity: f32,
        diffusion: f32,
    ) -> Result<&StepMetrics, StepError> {
        let params = match self.check_params(dt, viscosity, diffusion) {
            Ok(p) => p,
            Err(e) => {
                log::warn!("step rejected at tick {}: {e}", self.tick);
                return Err(e);
            }
        };

        let step_start = Instant::now();
        let mut metrics = StepMetrics {
            tick: self.tick.next(),
            memory_bytes: self.state.memory_bytes(),
            ..StepMetrics::default()
        };
        for stage in Stage::PIPELINE {
            let stage_start = Instant::now();
            run_stage(
                stage,
                self.grid,
                &mut self.state,
                params,
                self.config.iterations,
                self.config.decay,
            );
            metrics
                .stage_us
                .push((stage, stage_start.elapsed().as_micros() as u64));
        }
        metrics.total_us = step_start.elapsed().as_micros() as u64;

        self.tick = metrics.tick;
        log::trace!("tick {} stepped in {}us", self.tick, metrics.total_us);
        self.last_metrics = metrics;

        if self.config.check_finite {
            if let Some(err) = self.find_non_finite() {
                log::warn!("tick {}: {err}", self.tick);
                return Err(err);
            }
        }
        Ok(&self.last_metrics)
    }

    /// Step with the configured default viscosity and diffusion.
    pub fn step_with_defaults(&mut self, dt: f32) -> Result<&StepMetrics, StepError> {
        self.step(dt, self.config.viscosity, self.config.diffusion)
    }

    fn check_params(&self, dt: f32, viscosity: f32, diffusion: f32) -> Result<StepParams, StepError> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(StepError::InvalidDt { value: dt });
        }
        if let Some(max) = self.config.max_dt {
            if dt > max {
                return Err(StepError::DtOutOfRange { dt, max });
            }
        }
        for (name, value) in [("viscosity", viscosity), ("diffusion", diffusion)] {
            if !value.is_finite() || value < 0.0 {
                return Err(StepError::InvalidRate { name, value });
            }
        }
        Ok(StepParams {
            dt,
            viscosity,
            diffusion,
        })
    }

    fn find_non_finite(&self) -> Option<StepError> {
        FieldKind::ALL.into_iter().find_map(|field| {
            diagnostics::first_non_finite(self.state.field(field))
                .map(|cell| StepError::NonFinite { field, cell })
        })
    }

    // ── Read access ────────────────────────────────────────────────

    /// Row-major density, `N²` cells. Valid until the next mutation.
    pub fn density(&self) -> &[f32] {
        self.state.density.current()
    }

    /// Row-major horizontal velocity `u`.
    pub fn velocity_x(&self) -> &[f32] {
        self.state.velocity_x.current()
    }

    /// Row-major vertical velocity `v`.
    pub fn velocity_y(&self) -> &[f32] {
        self.state.velocity_y.current()
    }

    /// Current values of `kind`.
    pub fn field(&self, kind: FieldKind) -> &[f32] {
        self.state.field(kind)
    }

    /// An owned copy of the density buffer.
    pub fn density_snapshot(&self) -> Vec<f32> {
        self.density().to_vec()
    }

    /// Copy density into `out`, which must hold exactly `N²` cells.
    pub fn copy_density_into(&self, out: &mut [f32]) -> Result<(), ReadError> {
        let src = self.density();
        if out.len() != src.len() {
            return Err(ReadError::LengthMismatch {
                expected: src.len(),
                actual: out.len(),
            });
        }
        out.copy_from_slice(src);
        Ok(())
    }

    /// The full field state, scratch buffers included.
    pub fn state(&self) -> &FluidState {
        &self.state
    }

    // ── Diagnostics ────────────────────────────────────────────────

    /// Summed density over every cell.
    pub fn total_density(&self) -> f64 {
        diagnostics::total(self.density())
    }

    /// Largest interior divergence of the current velocity field.
    pub fn max_divergence(&self) -> f32 {
        diagnostics::max_divergence(self.grid, self.velocity_x(), self.velocity_y())
    }

    /// Mean interior kinetic energy of the current velocity field.
    pub fn kinetic_energy(&self) -> f64 {
        diagnostics::kinetic_energy(self.grid, self.velocity_x(), self.velocity_y())
    }

    /// Bit-exact fingerprint of density and velocity.
    pub fn state_hash(&self) -> u64 {
        diagnostics::state_hash(&self.state)
    }

    // ── Accessors ──────────────────────────────────────────────────

    /// Steps completed since construction or the last [`init()`](Self::init).
    pub fn tick(&self) -> TickId {
        self.tick
    }

    /// Metrics from the most recent successful step.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }

    /// The configuration this simulation was built from.
    pub fn config(&self) -> &FluidConfig {
        &self.config
    }

    /// The simulation grid.
    pub fn grid(&self) -> SquareGrid {
        self.grid
    }
}

impl std::fmt::Debug for FluidSim {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FluidSim")
            .field("size", &self.grid.size())
            .field("tick", &self.tick)
            .field("iterations", &self.config.iterations)
            .finish()
    }
}

/// Execute one pipeline stage. Buffer swaps happen inside the stage that
/// consumes them.
fn run_stage(
    stage: Stage,
    grid: SquareGrid,
    state: &mut FluidState,
    params: StepParams,
    iterations: u32,
    decay_factor: f32,
) {
    let dt = params.dt;
    match stage {
        Stage::VelocityDiffuse => {
            state.velocity_x.swap();
            state.velocity_y.swap();
            let (u, u0) = state.velocity_x.split_mut();
            diffuse(grid, Boundary::Horizontal, u, u0, params.viscosity, dt, iterations);
            let (v, v0) = state.velocity_y.split_mut();
            diffuse(grid, Boundary::Vertical, v, v0, params.viscosity, dt, iterations);
        }
        Stage::Project => {
            let (u, p) = state.velocity_x.split_mut();
            let (v, div) = state.velocity_y.split_mut();
            project(grid, u, v, p, div, iterations);
        }
        Stage::VelocityAdvect => {
            state.velocity_x.swap();
            state.velocity_y.swap();
            let (u, u0) = state.velocity_x.split_mut();
            let (v, v0) = state.velocity_y.split_mut();
            let (u0, v0) = (&*u0, &*v0);
            advect(grid, Boundary::Horizontal, u, u0, u0, v0, dt);
            advect(grid, Boundary::Vertical, v, v0, u0, v0, dt);
        }
        Stage::DensityDiffuse => {
            state.density.swap();
            let (d, d0) = state.density.split_mut();
            diffuse(grid, Boundary::Scalar, d, d0, params.diffusion, dt, iterations);
        }
        Stage::DensityAdvect => {
            state.density.swap();
            let (d, d0) = state.density.split_mut();
            advect(
                grid,
                Boundary::Scalar,
                d,
                d0,
                state.velocity_x.current(),
                state.velocity_y.current(),
                dt,
            );
        }
        Stage::Decay => decay(state.density.current_mut(), decay_factor),
    }
}
