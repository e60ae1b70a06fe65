//! Row-parallel iteration over interior rows.
//!
//! Each helper hands `f` the row index and the full row slice (all `N`
//! cells, border columns included). Rows are disjoint, so the serial and
//! rayon paths compute identical values.

use eddy_grid::SquareGrid;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Run `f(row, cells)` for every interior row of `out`.
pub(crate) fn interior_rows<F>(grid: SquareGrid, out: &mut [f32], f: F)
where
    F: Fn(usize, &mut [f32]) + Sync + Send,
{
    let n = grid.size();
    let rows = &mut out[n..n * (n - 1)];

    #[cfg(feature = "parallel")]
    rows.par_chunks_mut(n)
        .enumerate()
        .for_each(|(k, row)| f(k + 1, row));

    #[cfg(not(feature = "parallel"))]
    rows.chunks_mut(n)
        .enumerate()
        .for_each(|(k, row)| f(k + 1, row));
}

/// Run `f(row, a_cells, b_cells)` for every interior row of two buffers.
pub(crate) fn interior_rows2<F>(grid: SquareGrid, a: &mut [f32], b: &mut [f32], f: F)
where
    F: Fn(usize, &mut [f32], &mut [f32]) + Sync + Send,
{
    let n = grid.size();
    let rows_a = &mut a[n..n * (n - 1)];
    let rows_b = &mut b[n..n * (n - 1)];

    #[cfg(feature = "parallel")]
    rows_a
        .par_chunks_mut(n)
        .zip(rows_b.par_chunks_mut(n))
        .enumerate()
        .for_each(|(k, (ra, rb))| f(k + 1, ra, rb));

    #[cfg(not(feature = "parallel"))]
    rows_a
        .chunks_mut(n)
        .zip(rows_b.chunks_mut(n))
        .enumerate()
        .for_each(|(k, (ra, rb))| f(k + 1, ra, rb));
}

/// Multiply every element of `field` by `factor`.
pub(crate) fn scale(field: &mut [f32], factor: f32) {
    #[cfg(feature = "parallel")]
    field.par_iter_mut().for_each(|x| *x *= factor);

    #[cfg(not(feature = "parallel"))]
    field.iter_mut().for_each(|x| *x *= factor);
}
