//! Gauss-Seidel relaxation for the implicit stencil shared by diffusion and
//! the pressure solve.

use eddy_core::Boundary;
use eddy_grid::SquareGrid;

use crate::boundary::enforce;

/// Relaxation sweeps per solve unless configured otherwise.
pub const DEFAULT_ITERATIONS: u32 = 20;

/// Relax `x` toward `x = (x0 + a * Σneighbours(x)) / c` on every interior
/// cell.
///
/// Runs exactly `iterations` sweeps with no convergence check. Each sweep
/// visits rows top to bottom and columns left to right, reading neighbours
/// already updated in the same sweep, then applies the wall rule for
/// `boundary`. The sweep order is part of the result and is never
/// parallelised.
pub fn relax(
    grid: SquareGrid,
    boundary: Boundary,
    x: &mut [f32],
    x0: &[f32],
    a: f32,
    c: f32,
    iterations: u32,
) {
    let n = grid.size();
    debug_assert_eq!(x.len(), grid.cell_count());
    debug_assert_eq!(x0.len(), grid.cell_count());

    let c_recip = 1.0 / c;
    for _ in 0..iterations {
        for j in grid.interior() {
            for i in grid.interior() {
                let k = j * n + i;
                x[k] = (x0[k] + a * (x[k + 1] + x[k - 1] + x[k + n] + x[k - n])) * c_recip;
            }
        }
        enforce(grid, boundary, x);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eddy_test_utils::random_field;

    #[test]
    fn zero_coupling_copies_source() {
        let g = SquareGrid::new(8).unwrap();
        let x0 = random_field(g, 7, 3.0);
        let mut x = vec![9.0; 64];
        relax(g, Boundary::Scalar, &mut x, &x0, 0.0, 1.0, 1);
        for j in g.interior() {
            for i in g.interior() {
                assert_eq!(x[g.idx(i, j)], x0[g.idx(i, j)]);
            }
        }
    }

    #[test]
    fn zero_iterations_is_noop() {
        let g = SquareGrid::new(6).unwrap();
        let x0 = random_field(g, 8, 1.0);
        let mut x = random_field(g, 9, 1.0);
        let before = x.clone();
        relax(g, Boundary::Scalar, &mut x, &x0, 1.0, 4.0, 0);
        assert_eq!(x, before);
    }

    #[test]
    fn reads_updated_neighbours_within_a_sweep() {
        // One sweep on a 4x4 grid with x0 = 1 at (1,1) only: cell (2,1)
        // sees the freshly written (1,1), which a Jacobi sweep would not.
        let g = SquareGrid::new(4).unwrap();
        let mut x0 = vec![0.0; 16];
        x0[g.idx(1, 1)] = 1.0;
        let mut x = vec![0.0; 16];
        relax(g, Boundary::Scalar, &mut x, &x0, 1.0, 4.0, 1);
        assert_eq!(x[g.idx(1, 1)], 0.25);
        assert_eq!(x[g.idx(2, 1)], 0.0625);
    }

    #[test]
    fn more_iterations_reduce_residual() {
        let g = SquareGrid::new(16).unwrap();
        let x0 = random_field(g, 10, 1.0);
        let residual = |x: &[f32]| -> f32 {
            let n = g.size();
            let mut worst = 0.0f32;
            for j in g.interior() {
                for i in g.interior() {
                    let k = j * n + i;
                    let r = x0[k] + 0.5 * (x[k + 1] + x[k - 1] + x[k + n] + x[k - n]) - 3.0 * x[k];
                    worst = worst.max(r.abs());
                }
            }
            worst
        };
        let mut few = vec![0.0; g.cell_count()];
        relax(g, Boundary::Scalar, &mut few, &x0, 0.5, 3.0, 2);
        let mut many = vec![0.0; g.cell_count()];
        relax(g, Boundary::Scalar, &mut many, &x0, 0.5, 3.0, 40);
        assert!(residual(&many) < residual(&few));
        assert!(residual(&many) < 1e-4);
    }

    #[test]
    fn border_obeys_wall_rule_after_solve() {
        let g = SquareGrid::new(6).unwrap();
        let x0 = random_field(g, 11, 1.0);
        let mut x = vec![0.0; 36];
        relax(g, Boundary::Horizontal, &mut x, &x0, 1.0, 5.0, DEFAULT_ITERATIONS);
        for j in g.interior() {
            assert_eq!(x[g.idx(0, j)], -x[g.idx(1, j)]);
        }
    }
}
