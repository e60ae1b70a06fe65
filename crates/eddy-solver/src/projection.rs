//! Pressure projection: remove the divergent part of a velocity field.

use eddy_core::Boundary;
use eddy_grid::SquareGrid;

use crate::boundary::enforce;
use crate::relax::relax;
use crate::sweep::{interior_rows, interior_rows2};

/// Make `(u, v)` approximately divergence-free.
///
/// `p` and `div` are scratch buffers and are overwritten:
///
/// 1. `div = -0.5 * h * (Δu + Δv)` by central differences, `h = 1/N`;
///    `p = 0` on the interior.
/// 2. Relax `∇²p = div` with `a = 1`, `c = 4`.
/// 3. Subtract `0.5 * Δp / h` from each component.
///
/// Walls are applied to `div` and `p` as scalars and to `u`/`v` with their
/// own sign rules.
pub fn project(
    grid: SquareGrid,
    u: &mut [f32],
    v: &mut [f32],
    p: &mut [f32],
    div: &mut [f32],
    iterations: u32,
) {
    let n = grid.size();
    let h = grid.spacing();
    let last = grid.last();

    {
        let (u, v) = (&*u, &*v);
        interior_rows2(grid, div, p, |j, div_row, p_row| {
            for i in 1..last {
                let k = j * n + i;
                div_row[i] = -0.5 * h * (u[k + 1] - u[k - 1] + v[k + n] - v[k - n]);
                p_row[i] = 0.0;
            }
        });
    }
    enforce(grid, Boundary::Scalar, div);
    enforce(grid, Boundary::Scalar, p);

    relax(grid, Boundary::Scalar, p, div, 1.0, 4.0, iterations);

    let p = &*p;
    interior_rows(grid, u, |j, row| {
        for i in 1..last {
            let k = j * n + i;
            row[i] -= 0.5 * (p[k + 1] - p[k - 1]) / h;
        }
    });
    interior_rows(grid, v, |j, row| {
        for i in 1..last {
            let k = j * n + i;
            row[i] -= 0.5 * (p[k + n] - p[k - n]) / h;
        }
    });
    enforce(grid, Boundary::Horizontal, u);
    enforce(grid, Boundary::Vertical, v);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::max_divergence;
    use crate::relax::DEFAULT_ITERATIONS;
    use eddy_test_utils::gaussian_bump;

    #[test]
    fn smooth_field_is_made_nearly_divergence_free() {
        let g = SquareGrid::new(128).unwrap();
        let mut u = gaussian_bump(g, 64.0, 64.0, 4.0, 1.0);
        let mut v = vec![0.0; g.cell_count()];
        let mut p = vec![0.0; g.cell_count()];
        let mut div = vec![0.0; g.cell_count()];

        let before = max_divergence(g, &u, &v);
        project(g, &mut u, &mut v, &mut p, &mut div, DEFAULT_ITERATIONS);
        let after = max_divergence(g, &u, &v);

        assert!(after < before, "divergence grew: {before} -> {after}");
        assert!(after < 1e-3, "post-projection divergence {after}");
    }

    #[test]
    fn zero_field_stays_zero() {
        let g = SquareGrid::new(16).unwrap();
        let mut u = vec![0.0; 256];
        let mut v = vec![0.0; 256];
        let mut p = vec![1.0; 256];
        let mut div = vec![1.0; 256];
        project(g, &mut u, &mut v, &mut p, &mut div, DEFAULT_ITERATIONS);
        assert!(u.iter().all(|&x| x == 0.0));
        assert!(v.iter().all(|&x| x == 0.0));
        assert!(p.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn walls_hold_after_projection() {
        let g = SquareGrid::new(24).unwrap();
        let mut u = gaussian_bump(g, 8.0, 12.0, 3.0, 1.0);
        let mut v = gaussian_bump(g, 12.0, 16.0, 3.0, -1.0);
        let mut p = vec![0.0; g.cell_count()];
        let mut div = vec![0.0; g.cell_count()];
        project(g, &mut u, &mut v, &mut p, &mut div, DEFAULT_ITERATIONS);
        for k in g.interior() {
            assert_eq!(u[g.idx(0, k)], -u[g.idx(1, k)]);
            assert_eq!(u[g.idx(23, k)], -u[g.idx(22, k)]);
            assert_eq!(v[g.idx(k, 0)], -v[g.idx(k, 1)]);
            assert_eq!(v[g.idx(k, 23)], -v[g.idx(k, 22)]);
        }
    }
}
