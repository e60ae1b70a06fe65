//! The six arrays owned by one fluid simulation.

use eddy_core::{FieldKind, Impulse};

use crate::grid::SquareGrid;
use crate::pair::FieldPair;

/// All mutable per-cell state of a simulation.
///
/// Three [`FieldPair`]s (`u`, `v`, density), each `N²` cells long. The
/// solver swaps buffers within a pair but never across pairs.
///
/// # Examples
///
/// ```
/// use eddy_grid::{FluidState, SquareGrid};
///
/// let mut state = FluidState::new(SquareGrid::new(16).unwrap());
/// assert!(state.add_density(8, 8, 2.5));
/// assert!(!state.add_density(16, 8, 2.5));
/// assert_eq!(state.density.current()[8 * 16 + 8], 2.5);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct FluidState {
    grid: SquareGrid,
    /// Horizontal velocity `u` and its scratch buffer.
    pub velocity_x: FieldPair,
    /// Vertical velocity `v` and its scratch buffer.
    pub velocity_y: FieldPair,
    /// Density and its scratch buffer.
    pub density: FieldPair,
}

impl FluidState {
    /// Zero-initialised state for `grid`.
    pub fn new(grid: SquareGrid) -> Self {
        let cells = grid.cell_count();
        Self {
            grid,
            velocity_x: FieldPair::zeroed(cells),
            velocity_y: FieldPair::zeroed(cells),
            density: FieldPair::zeroed(cells),
        }
    }

    /// The grid these buffers are laid out on.
    pub fn grid(&self) -> SquareGrid {
        self.grid
    }

    /// Zero all six arrays.
    pub fn clear(&mut self) {
        self.velocity_x.clear();
        self.velocity_y.clear();
        self.density.clear();
    }

    /// The pair backing `kind`.
    pub fn pair(&self, kind: FieldKind) -> &FieldPair {
        match kind {
            FieldKind::VelocityX => &self.velocity_x,
            FieldKind::VelocityY => &self.velocity_y,
            FieldKind::Density => &self.density,
        }
    }

    /// Current values of `kind`.
    pub fn field(&self, kind: FieldKind) -> &[f32] {
        self.pair(kind).current()
    }

    /// Add `amount` to the density at `(col, row)`.
    ///
    /// Returns `false` and leaves the state untouched if the cell is outside
    /// the grid.
    pub fn add_density(&mut self, col: i32, row: i32, amount: f32) -> bool {
        match self.grid.cell_index(col, row) {
            Some(i) => {
                self.density.current_mut()[i] += amount;
                true
            }
            None => false,
        }
    }

    /// Add `(dx, dy)` to the velocity at `(col, row)`.
    ///
    /// Returns `false` and leaves the state untouched if the cell is outside
    /// the grid.
    pub fn add_velocity(&mut self, col: i32, row: i32, dx: f32, dy: f32) -> bool {
        match self.grid.cell_index(col, row) {
            Some(i) => {
                self.velocity_x.current_mut()[i] += dx;
                self.velocity_y.current_mut()[i] += dy;
                true
            }
            None => false,
        }
    }

    /// Apply one impulse. Returns whether it landed inside the grid.
    pub fn apply(&mut self, impulse: &Impulse) -> bool {
        match *impulse {
            Impulse::Density { col, row, amount } => self.add_density(col, row, amount),
            Impulse::Velocity { col, row, dx, dy } => self.add_velocity(col, row, dx, dy),
        }
    }

    /// Bytes held by the six buffers.
    pub fn memory_bytes(&self) -> usize {
        6 * self.grid.cell_count() * std::mem::size_of::<f32>()
    }
}
