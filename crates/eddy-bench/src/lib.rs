//! Benchmark profiles and utilities for the Eddy fluid solver.
//!
//! - [`reference_profile`]: the 128x128 reference grid
//! - [`stress_profile`]: a 512x512 grid (16x the cells)
//! - [`splash`]: deterministic impulse batches via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use eddy_core::Impulse;
use eddy_engine::FluidConfig;
use eddy_grid::SquareGrid;

/// The reference configuration: N=128, 20 sweeps, 0.99 decay.
pub fn reference_profile() -> FluidConfig {
    FluidConfig::default()
}

/// Same pipeline as [`reference_profile`] on a 512x512 grid.
pub fn stress_profile() -> FluidConfig {
    FluidConfig {
        size: 512,
        ..FluidConfig::default()
    }
}

/// Generate `n` deterministic impulses inside a `size x size` grid.
///
/// Alternates density deposits and velocity pushes at positions derived
/// from a simple hash of the seed. Every impulse lands in the interior.
/// Sizes below [`SquareGrid::MIN_SIZE`] are raised to it.
pub fn splash(size: usize, n: usize, seed: u64) -> Vec<Impulse> {
    let interior = (size.max(SquareGrid::MIN_SIZE) - 2) as u64;
    let mut out = Vec::with_capacity(n);
    for i in 0..n as u64 {
        let h = seed
            .wrapping_mul(6364136223846793005)
            .wrapping_add(i.wrapping_mul(1442695040888963407));
        let col = (1 + (h >> 33) % interior) as i32;
        let row = (1 + (h >> 17) % interior) as i32;
        let sign = if (h >> 7) & 1 == 0 { 1.0 } else { -1.0 };
        out.push(if i % 2 == 0 {
            Impulse::Density {
                col,
                row,
                amount: 50.0,
            }
        } else {
            Impulse::Velocity {
                col,
                row,
                dx: 4.0 * sign,
                dy: -2.0 * sign,
            }
        });
    }
    out
}
