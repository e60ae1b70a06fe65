//! Wall handling: rewrite the border ring from the interior.

use eddy_core::Boundary;
use eddy_grid::SquareGrid;

/// Rewrite every border cell of `x` from its interior neighbour.
///
/// - Top and bottom rows copy row `1` / `N-2`, negated for
///   [`Boundary::Vertical`].
/// - Left and right columns copy column `1` / `N-2`, negated for
///   [`Boundary::Horizontal`].
/// - Each corner becomes the mean of its two adjacent edge cells, computed
///   after the edges are written.
///
/// The normal velocity component is mirrored with a sign flip so flow
/// cannot cross a wall; tangential and scalar values are copied.
pub fn enforce(grid: SquareGrid, boundary: Boundary, x: &mut [f32]) {
    let n = grid.size();
    let last = n - 1;
    debug_assert_eq!(x.len(), grid.cell_count());

    let row_sign = if boundary.flips_rows() { -1.0 } else { 1.0 };
    let col_sign = if boundary.flips_cols() { -1.0 } else { 1.0 };

    for i in grid.interior() {
        x[grid.idx(i, 0)] = row_sign * x[grid.idx(i, 1)];
        x[grid.idx(i, last)] = row_sign * x[grid.idx(i, last - 1)];
    }
    for j in grid.interior() {
        x[grid.idx(0, j)] = col_sign * x[grid.idx(1, j)];
        x[grid.idx(last, j)] = col_sign * x[grid.idx(last - 1, j)];
    }

    x[grid.idx(0, 0)] = 0.5 * (x[grid.idx(1, 0)] + x[grid.idx(0, 1)]);
    x[grid.idx(0, last)] = 0.5 * (x[grid.idx(1, last)] + x[grid.idx(0, last - 1)]);
    x[grid.idx(last, 0)] = 0.5 * (x[grid.idx(last - 1, 0)] + x[grid.idx(last, 1)]);
    x[grid.idx(last, last)] = 0.5 * (x[grid.idx(last - 1, last)] + x[grid.idx(last, last - 1)]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use eddy_test_utils::random_field;
    use proptest::prelude::*;

    fn grid(n: usize) -> SquareGrid {
        SquareGrid::new(n).unwrap()
    }

    #[test]
    fn scalar_copies_edges() {
        let g = grid(5);
        let mut x = random_field(g, 1, 1.0);
        enforce(g, Boundary::Scalar, &mut x);
        for k in g.interior() {
            assert_eq!(x[g.idx(k, 0)], x[g.idx(k, 1)]);
            assert_eq!(x[g.idx(k, 4)], x[g.idx(k, 3)]);
            assert_eq!(x[g.idx(0, k)], x[g.idx(1, k)]);
            assert_eq!(x[g.idx(4, k)], x[g.idx(3, k)]);
        }
    }

    #[test]
    fn horizontal_flips_side_walls_only() {
        let g = grid(6);
        let mut x = random_field(g, 2, 1.0);
        enforce(g, Boundary::Horizontal, &mut x);
        for k in g.interior() {
            assert_eq!(x[g.idx(0, k)], -x[g.idx(1, k)]);
            assert_eq!(x[g.idx(5, k)], -x[g.idx(4, k)]);
            assert_eq!(x[g.idx(k, 0)], x[g.idx(k, 1)]);
            assert_eq!(x[g.idx(k, 5)], x[g.idx(k, 4)]);
        }
    }

    #[test]
    fn vertical_flips_top_and_bottom_only() {
        let g = grid(6);
        let mut x = random_field(g, 3, 1.0);
        enforce(g, Boundary::Vertical, &mut x);
        for k in g.interior() {
            assert_eq!(x[g.idx(k, 0)], -x[g.idx(k, 1)]);
            assert_eq!(x[g.idx(k, 5)], -x[g.idx(k, 4)]);
            assert_eq!(x[g.idx(0, k)], x[g.idx(1, k)]);
            assert_eq!(x[g.idx(5, k)], x[g.idx(4, k)]);
        }
    }

    #[test]
    fn corners_average_adjacent_edges() {
        let g = grid(4);
        let mut x: Vec<f32> = (0..16).map(|i| i as f32).collect();
        enforce(g, Boundary::Scalar, &mut x);
        assert_eq!(x[g.idx(0, 0)], 0.5 * (x[g.idx(1, 0)] + x[g.idx(0, 1)]));
        assert_eq!(x[g.idx(3, 0)], 0.5 * (x[g.idx(2, 0)] + x[g.idx(3, 1)]));
        assert_eq!(x[g.idx(0, 3)], 0.5 * (x[g.idx(1, 3)] + x[g.idx(0, 2)]));
        assert_eq!(x[g.idx(3, 3)], 0.5 * (x[g.idx(2, 3)] + x[g.idx(3, 2)]));
    }

    #[test]
    fn interior_is_untouched() {
        let g = grid(7);
        let before = random_field(g, 4, 10.0);
        let mut x = before.clone();
        enforce(g, Boundary::Vertical, &mut x);
        for j in g.interior() {
            for i in g.interior() {
                assert_eq!(x[g.idx(i, j)], before[g.idx(i, j)]);
            }
        }
    }

    proptest! {
        #[test]
        fn enforce_is_idempotent(
            n in 3usize..12,
            seed in any::<u64>(),
            b in prop_oneof![
                Just(Boundary::Scalar),
                Just(Boundary::Horizontal),
                Just(Boundary::Vertical),
            ],
        ) {
            let g = grid(n);
            let mut once = random_field(g, seed, 5.0);
            enforce(g, b, &mut once);
            let mut twice = once.clone();
            enforce(g, b, &mut twice);
            prop_assert_eq!(once, twice);
        }
    }
}
