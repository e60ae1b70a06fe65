//! The square simulation lattice.

use std::ops::Range;

use crate::error::GridError;

/// An `N x N` lattice addressed as `(col, row)` with linear index
/// `row * N + col`.
///
/// Rows and columns `0` and `N - 1` are border cells; everything in
/// [`interior()`](SquareGrid::interior) on both axes is simulated. The size
/// is fixed at construction.
///
/// # Examples
///
/// ```
/// use eddy_grid::SquareGrid;
///
/// let grid = SquareGrid::new(8).unwrap();
/// assert_eq!(grid.cell_count(), 64);
/// assert_eq!(grid.idx(3, 2), 19);
/// assert_eq!(grid.cell_index(-1, 0), None);
/// assert_eq!(grid.interior(), 1..7);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SquareGrid {
    size: usize,
}

impl SquareGrid {
    /// Smallest grid with at least one interior cell.
    pub const MIN_SIZE: usize = 3;
    /// Largest grid whose cell count fits in an `i32`.
    pub const MAX_SIZE: usize = 46_340;
    /// The reference grid size.
    pub const DEFAULT_SIZE: usize = 128;

    /// Create a grid with `size * size` cells.
    pub fn new(size: usize) -> Result<Self, GridError> {
        if size < Self::MIN_SIZE {
            return Err(GridError::TooSmall {
                size,
                min: Self::MIN_SIZE,
            });
        }
        if size > Self::MAX_SIZE {
            return Err(GridError::TooLarge {
                size,
                max: Self::MAX_SIZE,
            });
        }
        Ok(Self { size })
    }

    /// Cells per side (`N`).
    pub fn size(self) -> usize {
        self.size
    }

    /// Total cell count (`N²`).
    pub fn cell_count(self) -> usize {
        self.size * self.size
    }

    /// Index of the last row/column (`N - 1`).
    pub fn last(self) -> usize {
        self.size - 1
    }

    /// Linear index of `(col, row)`. The caller guarantees both are `< N`.
    #[inline]
    pub fn idx(self, col: usize, row: usize) -> usize {
        row * self.size + col
    }

    /// Inverse of [`idx`](Self::idx): `(col, row)` of a linear index.
    pub fn coords(self, index: usize) -> (usize, usize) {
        (index % self.size, index / self.size)
    }

    /// Interior range on either axis: `1..N-1`.
    pub fn interior(self) -> Range<usize> {
        1..self.size - 1
    }

    /// Bounds-checked linear index for signed coordinates.
    ///
    /// Returns `None` if either coordinate is outside `[0, N)`.
    pub fn cell_index(self, col: i32, row: i32) -> Option<usize> {
        let n = self.size as i64;
        let (c, r) = (col as i64, row as i64);
        if c < 0 || c >= n || r < 0 || r >= n {
            return None;
        }
        Some(self.idx(c as usize, r as usize))
    }

    /// Cell spacing `h = 1 / N` used by the pressure projection.
    pub fn spacing(self) -> f32 {
        1.0 / self.size as f32
    }

    /// Interior extent `N - 2`, which scales rates and velocities into cells.
    pub fn interior_extent(self) -> f32 {
        (self.size - 2) as f32
    }
}

impl Default for SquareGrid {
    fn default() -> Self {
        Self {
            size: Self::DEFAULT_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn rejects_too_small() {
        assert_eq!(
            SquareGrid::new(2),
            Err(GridError::TooSmall { size: 2, min: 3 })
        );
        assert!(SquareGrid::new(0).is_err());
    }

    #[test]
    fn rejects_too_large() {
        assert!(matches!(
            SquareGrid::new(SquareGrid::MAX_SIZE + 1),
            Err(GridError::TooLarge { .. })
        ));
        assert!(SquareGrid::new(SquareGrid::MAX_SIZE).is_ok());
    }

    #[test]
    fn default_is_reference_size() {
        let g = SquareGrid::default();
        assert_eq!(g.size(), 128);
        assert_eq!(g.cell_count(), 16_384);
        assert_eq!(g.last(), 127);
    }

    #[test]
    fn indexing_is_row_major() {
        let g = SquareGrid::new(5).unwrap();
        assert_eq!(g.idx(0, 0), 0);
        assert_eq!(g.idx(4, 0), 4);
        assert_eq!(g.idx(0, 1), 5);
        assert_eq!(g.idx(2, 3), 17);
    }

    #[test]
    fn cell_index_bounds() {
        let g = SquareGrid::new(4).unwrap();
        assert_eq!(g.cell_index(0, 0), Some(0));
        assert_eq!(g.cell_index(3, 3), Some(15));
        assert_eq!(g.cell_index(4, 0), None);
        assert_eq!(g.cell_index(0, 4), None);
        assert_eq!(g.cell_index(-1, 2), None);
        assert_eq!(g.cell_index(2, i32::MIN), None);
    }

    #[test]
    fn scales() {
        let g = SquareGrid::new(128).unwrap();
        assert_eq!(g.spacing(), 1.0 / 128.0);
        assert_eq!(g.interior_extent(), 126.0);
    }

    proptest! {
        #[test]
        fn coords_inverts_idx(size in 3usize..64, col in 0usize..64, row in 0usize..64) {
            let g = SquareGrid::new(size).unwrap();
            let (col, row) = (col % size, row % size);
            prop_assert_eq!(g.coords(g.idx(col, row)), (col, row));
            prop_assert_eq!(g.cell_index(col as i32, row as i32), Some(g.idx(col, row)));
        }
    }
}
