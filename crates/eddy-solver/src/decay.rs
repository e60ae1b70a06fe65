//! Uniform multiplicative fade.

use crate::sweep::scale;

/// Density retained per step unless configured otherwise.
pub const DEFAULT_DECAY: f32 = 0.99;

/// Multiply every cell of `field`, border included, by `factor`.
pub fn decay(field: &mut [f32], factor: f32) {
    scale(field, factor);
}
