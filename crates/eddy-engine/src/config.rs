//! Simulation configuration, validation, and error types.
//!
//! [`FluidConfig`] is the constructor input for a [`FluidSim`](crate::FluidSim).
//! [`validate()`](FluidConfig::validate) checks every invariant up front so
//! that a constructed simulation never allocates or fails structurally
//! again.

use std::error::Error;
use std::fmt;

use eddy_grid::{GridError, SquareGrid};
use eddy_solver::{DEFAULT_DECAY, DEFAULT_ITERATIONS};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`FluidConfig::validate()`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Grid size is out of range.
    Grid(GridError),
    /// `iterations` is zero, so no relaxation would run.
    ZeroIterations,
    /// `decay` is NaN, infinite, or outside `[0, 1]`.
    InvalidDecay {
        /// The invalid value.
        value: f32,
    },
    /// A default rate is NaN, infinite, or negative.
    InvalidRate {
        /// Which rate (`"viscosity"` or `"diffusion"`).
        name: &'static str,
        /// The invalid value.
        value: f32,
    },
    /// `max_dt` is NaN, infinite, zero, or negative.
    InvalidMaxDt {
        /// The invalid value.
        value: f32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::ZeroIterations => write!(f, "iterations must be at least 1"),
            Self::InvalidDecay { value } => {
                write!(f, "decay must be finite and in [0, 1], got {value}")
            }
            Self::InvalidRate { name, value } => {
                write!(f, "default {name} must be finite and >= 0, got {value}")
            }
            Self::InvalidMaxDt { value } => {
                write!(f, "max_dt must be finite and positive, got {value}")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

// ── FluidConfig ────────────────────────────────────────────────────

/// Complete configuration for a [`FluidSim`](crate::FluidSim).
///
/// # Examples
///
/// ```
/// use eddy_engine::FluidConfig;
///
/// let cfg = FluidConfig {
///     size: 64,
///     max_dt: Some(0.05),
///     ..FluidConfig::default()
/// };
/// assert!(cfg.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct FluidConfig {
    /// Cells per side. Default: 128.
    pub size: usize,
    /// Gauss-Seidel sweeps per relaxation. Default: 20.
    pub iterations: u32,
    /// Fraction of density retained per step. Default: 0.99.
    pub decay: f32,
    /// Viscosity used by `step_with_defaults`. Default: 0.0.
    pub viscosity: f32,
    /// Density diffusivity used by `step_with_defaults`. Default: 0.0001.
    pub diffusion: f32,
    /// Largest accepted `dt`, if any. Default: `None`.
    pub max_dt: Option<f32>,
    /// Scan fields for NaN/infinity after every step. Default: `false`.
    pub check_finite: bool,
}

impl Default for FluidConfig {
    fn default() -> Self {
        Self {
            size: SquareGrid::DEFAULT_SIZE,
            iterations: DEFAULT_ITERATIONS,
            decay: DEFAULT_DECAY,
            viscosity: 0.0,
            diffusion: 0.0001,
            max_dt: None,
            check_finite: false,
        }
    }
}

impl FluidConfig {
    /// Validate all invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Grid size must leave an interior and stay addressable.
        SquareGrid::new(self.size)?;
        // 2. At least one relaxation sweep.
        if self.iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        // 3. Decay is a retention fraction.
        if !self.decay.is_finite() || !(0.0..=1.0).contains(&self.decay) {
            return Err(ConfigError::InvalidDecay { value: self.decay });
        }
        // 4. Default rates are finite and non-negative.
        for (name, value) in [("viscosity", self.viscosity), ("diffusion", self.diffusion)] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidRate { name, value });
            }
        }
        // 5. max_dt, if present, is finite and positive.
        if let Some(max) = self.max_dt {
            if !max.is_finite() || max <= 0.0 {
                return Err(ConfigError::InvalidMaxDt { value: max });
            }
        }
        Ok(())
    }
}
