//! Error types for grid construction.

use std::fmt;

/// Errors arising from grid construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// The grid has no interior cells.
    TooSmall {
        /// The requested size.
        size: usize,
        /// Smallest accepted size.
        min: usize,
    },
    /// `size * size` cells cannot be addressed with `i32` coordinates.
    TooLarge {
        /// The requested size.
        size: usize,
        /// Largest accepted size.
        max: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooSmall { size, min } => {
                write!(f, "grid size {size} is below minimum of {min}")
            }
            Self::TooLarge { size, max } => {
                write!(f, "grid size {size} exceeds maximum of {max}")
            }
        }
    }
}

impl std::error::Error for GridError {}
