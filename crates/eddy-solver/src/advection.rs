//! Semi-Lagrangian advection.

use eddy_core::Boundary;
use eddy_grid::SquareGrid;

use crate::boundary::enforce;
use crate::sweep::interior_rows;

/// Transport `d0` through `(u, v)` for `dt`, writing the result into `d`.
///
/// Each interior cell traces back to `(i - dt·(N-2)·u, j - dt·(N-2)·v)`,
/// clamped to `[0.5, N-1.5]` on both axes, and bilinearly samples `d0`
/// there. The clamp keeps every sample inside the grid for any `dt` or
/// velocity, non-finite ones included. `d` must not alias `d0`, `u` or `v`.
pub fn advect(
    grid: SquareGrid,
    boundary: Boundary,
    d: &mut [f32],
    d0: &[f32],
    u: &[f32],
    v: &[f32],
    dt: f32,
) {
    let n = grid.size();
    let last = grid.last();
    let dt0 = dt * grid.interior_extent();
    let hi = n as f32 - 1.5;

    interior_rows(grid, d, |j, row| {
        for i in 1..last {
            let k = j * n + i;
            let x = (i as f32 - dt0 * u[k]).clamp(0.5, hi);
            let y = (j as f32 - dt0 * v[k]).clamp(0.5, hi);

            let (x0, y0) = (x.floor(), y.floor());
            let s1 = x - x0;
            let s0 = 1.0 - s1;
            let t1 = y - y0;
            let t0 = 1.0 - t1;

            // NaN traces survive the clamp and saturate to column/row 0.
            let (i0, j0) = (x0 as usize, y0 as usize);
            let (i1, j1) = (i0 + 1, j0 + 1);

            row[i] = s0 * (t0 * d0[j0 * n + i0] + t1 * d0[j1 * n + i0])
                + s1 * (t0 * d0[j0 * n + i1] + t1 * d0[j1 * n + i1]);
        }
    });
    enforce(grid, boundary, d);
}
