//! Per-step timing metrics.
//!
//! [`StepMetrics`] captures the wall-clock cost of a single step, broken
//! down by pipeline [`Stage`].

use std::fmt;

use eddy_core::TickId;
use smallvec::SmallVec;

/// One pass of the step pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Swap velocity buffers and diffuse by viscosity.
    VelocityDiffuse,
    /// Pressure projection of the velocity field.
    Project,
    /// Swap velocity buffers and self-advect.
    VelocityAdvect,
    /// Swap density buffers and diffuse by diffusivity.
    DensityDiffuse,
    /// Swap density buffers and advect through the final velocity.
    DensityAdvect,
    /// Uniform multiplicative fade of density.
    Decay,
}

impl Stage {
    /// Execution order within one step. [`Stage::Project`] runs twice.
    pub const PIPELINE: [Stage; 7] = [
        Self::VelocityDiffuse,
        Self::Project,
        Self::VelocityAdvect,
        Self::Project,
        Self::DensityDiffuse,
        Self::DensityAdvect,
        Self::Decay,
    ];

    /// Short name for logs.
    pub fn name(self) -> &'static str {
        match self {
            Self::VelocityDiffuse => "velocity_diffuse",
            Self::Project => "project",
            Self::VelocityAdvect => "velocity_advect",
            Self::DensityDiffuse => "density_diffuse",
            Self::DensityAdvect => "density_advect",
            Self::Decay => "decay",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Timing collected during a single step.
///
/// All durations are in microseconds. The engine fills this in after each
/// successful step; it is reset by `FluidSim::init()`.
#[derive(Clone, Debug, Default)]
pub struct StepMetrics {
    /// The tick this step produced.
    pub tick: TickId,
    /// Wall-clock time for the whole step, in microseconds.
    pub total_us: u64,
    /// Per-stage execution times in pipeline order.
    pub stage_us: SmallVec<[(Stage, u64); 8]>,
    /// Bytes held by the six field buffers.
    pub memory_bytes: usize,
}

impl StepMetrics {
    /// Summed time spent in every run of `stage`, in microseconds.
    pub fn stage_total_us(&self, stage: Stage) -> u64 {
        self.stage_us
            .iter()
            .filter(|(s, _)| *s == stage)
            .map(|(_, us)| us)
            .sum()
    }
}
