//! Strongly-typed identifiers.

use std::fmt;

/// Monotonically increasing step counter.
///
/// Incremented each time the simulation completes one step. Reset to zero
/// when the simulation is re-initialised.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickId(pub u64);

impl TickId {
    /// The tick following this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for TickId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TickId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_zero() {
        assert_eq!(TickId::default(), TickId(0));
    }

    #[test]
    fn next_increments() {
        assert_eq!(TickId(41).next(), TickId(42));
    }

    #[test]
    fn display_is_bare_number() {
        assert_eq!(format!("{}", TickId(7)), "7");
    }
}
