//! Implicit diffusion.

use eddy_core::Boundary;
use eddy_grid::SquareGrid;

use crate::relax::relax;

/// Diffuse `x0` into `x` over `dt` at `rate` (viscosity or diffusivity).
///
/// Solves the implicit system with `a = dt * rate * (N-2)²` and
/// `c = 1 + 4a`. `x` is seeded from `x0` before relaxing, so a zero rate
/// reproduces `x0` exactly.
pub fn diffuse(
    grid: SquareGrid,
    boundary: Boundary,
    x: &mut [f32],
    x0: &[f32],
    rate: f32,
    dt: f32,
    iterations: u32,
) {
    let extent = grid.interior_extent();
    let a = dt * rate * extent * extent;
    x.copy_from_slice(x0);
    relax(grid, boundary, x, x0, a, 1.0 + 4.0 * a, iterations);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::total;
    use crate::relax::DEFAULT_ITERATIONS;
    use eddy_test_utils::{assert_relative_eq, point_field};

    #[test]
    fn zero_rate_is_identity_on_interior() {
        let g = SquareGrid::new(10).unwrap();
        let x0 = point_field(g, 5, 5, 4.0);
        let mut x = vec![0.0; g.cell_count()];
        diffuse(g, Boundary::Scalar, &mut x, &x0, 0.0, 0.016, DEFAULT_ITERATIONS);
        assert_eq!(x[g.idx(5, 5)], 4.0);
        assert_eq!(x[g.idx(4, 5)], 0.0);
    }

    #[test]
    fn spreads_a_point_symmetrically() {
        let g = SquareGrid::new(32).unwrap();
        let x0 = point_field(g, 16, 16, 100.0);
        let mut x = vec![0.0; g.cell_count()];
        diffuse(g, Boundary::Scalar, &mut x, &x0, 0.01, 0.016, DEFAULT_ITERATIONS);

        let centre = x[g.idx(16, 16)];
        assert!(centre < 100.0);
        assert!(x[g.idx(17, 16)] > 0.0);
        assert_relative_eq(x[g.idx(15, 16)], x[g.idx(17, 16)], 1e-5);
        assert_relative_eq(x[g.idx(16, 15)], x[g.idx(16, 17)], 1e-5);
        assert_relative_eq(x[g.idx(17, 16)], x[g.idx(16, 17)], 1e-5);
    }

    #[test]
    fn conserves_mass_away_from_walls() {
        let g = SquareGrid::new(32).unwrap();
        let x0 = point_field(g, 16, 16, 100.0);
        let mut x = vec![0.0; g.cell_count()];
        diffuse(g, Boundary::Scalar, &mut x, &x0, 0.001, 0.016, DEFAULT_ITERATIONS);
        assert_relative_eq(total(&x) as f32, 100.0, 1e-4);
    }
}
