//! Read-only measurements over solver fields.
//!
//! None of these mutate state. Reductions accumulate in `f64` so sums over
//! large grids do not drift with summation order.

use eddy_core::Boundary;
use eddy_grid::{FluidState, SquareGrid};

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_u32(mut hash: u64, v: u32) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = (hash ^ b as u64).wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Sum of every cell in `field`.
pub fn total(field: &[f32]) -> f64 {
    field.iter().map(|&x| x as f64).sum()
}

/// Largest absolute discrete divergence over interior cells.
///
/// Uses the same stencil as the projection's right-hand side,
/// `-0.5 * h * (Δu + Δv)` with `h = 1/N`, so the value is directly
/// comparable before and after a projection pass.
pub fn max_divergence(grid: SquareGrid, u: &[f32], v: &[f32]) -> f32 {
    let n = grid.size();
    let h = grid.spacing();
    let mut worst = 0.0f32;
    for j in grid.interior() {
        for i in grid.interior() {
            let k = j * n + i;
            let div = -0.5 * h * (u[k + 1] - u[k - 1] + v[k + n] - v[k - n]);
            worst = worst.max(div.abs());
        }
    }
    worst
}

/// Mean kinetic energy `½(u² + v²)` over interior cells.
pub fn kinetic_energy(grid: SquareGrid, u: &[f32], v: &[f32]) -> f64 {
    let n = grid.size();
    let mut sum = 0.0f64;
    for j in grid.interior() {
        for i in grid.interior() {
            let k = j * n + i;
            let (a, b) = (u[k] as f64, v[k] as f64);
            sum += 0.5 * (a * a + b * b);
        }
    }
    let interior = grid.interior().len();
    sum / (interior * interior) as f64
}

/// Density-weighted mean `(col, row)` of `field`.
///
/// Returns `None` when the field's total is zero or not finite.
pub fn centroid(grid: SquareGrid, field: &[f32]) -> Option<(f64, f64)> {
    let mut mass = 0.0f64;
    let (mut cx, mut cy) = (0.0f64, 0.0f64);
    for (k, &x) in field.iter().enumerate() {
        let (col, row) = grid.coords(k);
        let w = x as f64;
        mass += w;
        cx += w * col as f64;
        cy += w * row as f64;
    }
    if mass == 0.0 || !mass.is_finite() {
        return None;
    }
    Some((cx / mass, cy / mass))
}

/// Largest deviation of any non-corner border cell from the wall rule.
///
/// Zero whenever [`enforce`](crate::boundary::enforce) was the last write to
/// the border.
pub fn boundary_error(grid: SquareGrid, boundary: Boundary, x: &[f32]) -> f32 {
    let last = grid.last();
    let row_sign = if boundary.flips_rows() { -1.0 } else { 1.0 };
    let col_sign = if boundary.flips_cols() { -1.0 } else { 1.0 };
    let mut worst = 0.0f32;
    for k in grid.interior() {
        let pairs = [
            (grid.idx(k, 0), grid.idx(k, 1), row_sign),
            (grid.idx(k, last), grid.idx(k, last - 1), row_sign),
            (grid.idx(0, k), grid.idx(1, k), col_sign),
            (grid.idx(last, k), grid.idx(last - 1, k), col_sign),
        ];
        for (edge, inner, sign) in pairs {
            worst = worst.max((x[edge] - sign * x[inner]).abs());
        }
    }
    worst
}

/// Index of the first NaN or infinite cell, if any.
pub fn first_non_finite(field: &[f32]) -> Option<usize> {
    field.iter().position(|x| !x.is_finite())
}

/// FNV-1a hash over the bit patterns of density, `u` and `v`.
///
/// Two states hash equal only if every current value is bit-identical.
/// The scratch buffers do not contribute.
pub fn state_hash(state: &FluidState) -> u64 {
    let mut hash = FNV_OFFSET;
    hash = fnv1a_u32(hash, state.grid().size() as u32);
    for (tag, field) in [
        state.density.current(),
        state.velocity_x.current(),
        state.velocity_y.current(),
    ]
    .into_iter()
    .enumerate()
    {
        hash = fnv1a_u32(hash, tag as u32);
        for &v in field {
            hash = fnv1a_u32(hash, v.to_bits());
        }
    }
    hash
}
