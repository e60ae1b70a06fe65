//! Error types raised while advancing the simulation.
//!
//! Construction-time errors live next to the code that validates them
//! (`GridError` in `eddy-grid`, `ConfigError` in `eddy-engine`). This module
//! holds the per-step and read-out taxonomy shared by the engine and its
//! callers.

use std::error::Error;
use std::fmt;

use crate::field::FieldKind;

/// Errors from `FluidSim::step()`.
///
/// Parameter errors are detected before any buffer is touched, so the grid
/// is left exactly as it was. [`StepError::NonFinite`] is the exception: it
/// is reported after the step has been applied.
#[derive(Clone, Debug, PartialEq)]
pub enum StepError {
    /// `dt` is NaN, infinite, zero, or negative.
    InvalidDt {
        /// The rejected value.
        value: f32,
    },
    /// `dt` exceeds the configured `max_dt`.
    DtOutOfRange {
        /// The requested time step.
        dt: f32,
        /// The configured upper bound.
        max: f32,
    },
    /// A viscosity or diffusion rate is NaN, infinite, or negative.
    InvalidRate {
        /// Which rate was rejected (`"viscosity"` or `"diffusion"`).
        name: &'static str,
        /// The rejected value.
        value: f32,
    },
    /// A NaN or infinity was found in a field after the step completed.
    NonFinite {
        /// The field containing the value.
        field: FieldKind,
        /// Linear index (`row * N + col`) of the first offending cell.
        cell: usize,
    },
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDt { value } => {
                write!(f, "dt must be finite and positive, got {value}")
            }
            Self::DtOutOfRange { dt, max } => {
                write!(f, "dt {dt} exceeds max_dt {max}")
            }
            Self::InvalidRate { name, value } => {
                write!(f, "{name} must be finite and >= 0, got {value}")
            }
            Self::NonFinite { field, cell } => {
                write!(f, "non-finite value in {field} at cell {cell}")
            }
        }
    }
}

impl Error for StepError {}

/// Errors from copying a field out into a caller-owned buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReadError {
    /// The destination does not hold exactly `N²` cells.
    LengthMismatch {
        /// Cells in the field (`N²`).
        expected: usize,
        /// Cells in the destination buffer.
        actual: usize,
    },
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { expected, actual } => {
                write!(f, "destination holds {actual} cells, expected {expected}")
            }
        }
    }
}

impl Error for ReadError {}
