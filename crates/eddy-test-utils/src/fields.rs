//! Deterministic field generators.

use eddy_grid::{FluidState, SquareGrid};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Uniform noise in `[-amplitude, amplitude)` on every cell, border included.
pub fn random_field(grid: SquareGrid, seed: u64, amplitude: f32) -> Vec<f32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..grid.cell_count())
        .map(|_| (rng.random::<f32>() * 2.0 - 1.0) * amplitude)
        .collect()
}

/// Zero everywhere except `value` at `(col, row)`.
pub fn point_field(grid: SquareGrid, col: usize, row: usize, value: f32) -> Vec<f32> {
    let mut f = vec![0.0; grid.cell_count()];
    f[grid.idx(col, row)] = value;
    f
}

/// `amplitude * exp(-r² / 2σ²)` centred at `(cx, cy)`.
pub fn gaussian_bump(grid: SquareGrid, cx: f32, cy: f32, sigma: f32, amplitude: f32) -> Vec<f32> {
    let two_s2 = 2.0 * sigma * sigma;
    (0..grid.cell_count())
        .map(|k| {
            let (col, row) = grid.coords(k);
            let dx = col as f32 - cx;
            let dy = row as f32 - cy;
            amplitude * (-(dx * dx + dy * dy) / two_s2).exp()
        })
        .collect()
}

/// A state with noisy velocity in `[-amplitude, amplitude)` and density in
/// `[0, 10 * amplitude)`. Scratch buffers stay zero.
pub fn random_state(grid: SquareGrid, seed: u64, amplitude: f32) -> FluidState {
    let mut state = FluidState::new(grid);
    state
        .velocity_x
        .current_mut()
        .copy_from_slice(&random_field(grid, seed, amplitude));
    state
        .velocity_y
        .current_mut()
        .copy_from_slice(&random_field(grid, seed.wrapping_add(1), amplitude));
    let density: Vec<f32> = random_field(grid, seed.wrapping_add(2), 5.0 * amplitude)
        .into_iter()
        .map(|x| x + 5.0 * amplitude)
        .collect();
    state.density.current_mut().copy_from_slice(&density);
    state
}
