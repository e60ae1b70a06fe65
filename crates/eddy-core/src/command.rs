//! Impulses injected by external callers between steps.
//!
//! The solver owns no sources or obstacle geometry. Callers deposit density
//! and push velocity at single cells; out-of-range cells are discarded
//! without error because impulses arrive from a per-frame hot path.

/// A localized deposit into the simulation state.
///
/// Coordinates are signed so that callers can pass cursor positions
/// straight through; anything outside `[0, N)` on either axis is ignored
/// when the impulse is applied.
///
/// # Examples
///
/// ```
/// use eddy_core::Impulse;
///
/// let splash = [
///     Impulse::Density { col: 64, row: 64, amount: 100.0 },
///     Impulse::Velocity { col: 64, row: 64, dx: 5.0, dy: 0.0 },
/// ];
/// assert_eq!(splash[0].cell(), (64, 64));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Impulse {
    /// Add `amount` to the density at `(col, row)`.
    Density {
        /// Column (x).
        col: i32,
        /// Row (y).
        row: i32,
        /// Density added to the cell.
        amount: f32,
    },
    /// Add `(dx, dy)` to the velocity at `(col, row)`.
    Velocity {
        /// Column (x).
        col: i32,
        /// Row (y).
        row: i32,
        /// Added horizontal velocity.
        dx: f32,
        /// Added vertical velocity.
        dy: f32,
    },
}

impl Impulse {
    /// The `(col, row)` this impulse targets.
    pub fn cell(&self) -> (i32, i32) {
        match *self {
            Self::Density { col, row, .. } | Self::Velocity { col, row, .. } => (col, row),
        }
    }
}
