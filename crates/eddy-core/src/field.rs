//! Field identities and the wall rules that drive boundary handling.

use std::fmt;

/// Which wall rule applies when border cells are rewritten from the interior.
///
/// # Examples
///
/// ```
/// use eddy_core::Boundary;
///
/// assert!(Boundary::Vertical.flips_rows());
/// assert!(!Boundary::Vertical.flips_cols());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Boundary {
    /// Scalar field: every border cell copies its interior neighbour.
    Scalar,
    /// Horizontal velocity component: negated across the left/right walls.
    Horizontal,
    /// Vertical velocity component: negated across the top/bottom walls.
    Vertical,
}

impl Boundary {
    /// Whether the top and bottom rows take the negated interior value.
    pub fn flips_rows(self) -> bool {
        self == Self::Vertical
    }

    /// Whether the left and right columns take the negated interior value.
    pub fn flips_cols(self) -> bool {
        self == Self::Horizontal
    }
}

/// The simulated fields, used to label errors, diagnostics and metrics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Horizontal velocity component `u`.
    VelocityX,
    /// Vertical velocity component `v`.
    VelocityY,
    /// Advected scalar density.
    Density,
}

impl FieldKind {
    /// All fields in canonical order (`u`, `v`, density).
    pub const ALL: [FieldKind; 3] = [Self::VelocityX, Self::VelocityY, Self::Density];

    /// The wall rule applied to this field.
    pub fn boundary(self) -> Boundary {
        match self {
            Self::VelocityX => Boundary::Horizontal,
            Self::VelocityY => Boundary::Vertical,
            Self::Density => Boundary::Scalar,
        }
    }

    /// Short lowercase name for logs.
    pub fn name(self) -> &'static str {
        match self {
            Self::VelocityX => "velocity_x",
            Self::VelocityY => "velocity_y",
            Self::Density => "density",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
