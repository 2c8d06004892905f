//! Parallel zonal-average first guess.
//!
//! ## Purpose
//!
//! Seeds the undefined cells with the mean of the defined cells of their
//! line, the lines being split across the workers of a dedicated pool.
//! Lines are independent, so the result matches the sequential pass exactly.

// External dependencies
use ndarray::{ArrayView2, ArrayViewMut2, Axis};
use num_traits::Float;
use rayon::prelude::*;

// Export dependencies from gridfill crate
use gridfill::internals::algorithms::first_guess::apply_zonal_average;
use gridfill::internals::primitives::errors::FillError;
use gridfill::internals::primitives::partition::chunk_len;

// Internal dependencies
use crate::engine::dispatch::{guarded, settle, thread_pool};

/// Zonal-average first guess on `num_threads` workers.
///
/// Matches the `ZonalPassFn` hook of the `gridfill` engine.
pub fn zonal_average_parallel<T>(
    grid: &mut ArrayViewMut2<'_, T>,
    mask: &ArrayView2<'_, bool>,
    num_threads: usize,
) -> Result<(), FillError>
where
    T: Float + Send + Sync,
{
    let (_, y_size) = grid.dim();
    if y_size == 0 {
        return Ok(());
    }

    let chunk = chunk_len(y_size, num_threads);
    let pieces: Vec<_> = grid
        .axis_chunks_iter_mut(Axis(1), chunk)
        .zip(mask.axis_chunks_iter(Axis(1), chunk))
        .collect();

    let pool = thread_pool(num_threads)?;
    let outcomes: Vec<Result<(), FillError>> = pool.install(|| {
        pieces
            .into_par_iter()
            .enumerate()
            .map(|(worker, (mut lines, lines_mask))| {
                guarded(worker, || apply_zonal_average(&mut lines, &lines_mask))
            })
            .collect()
    });

    settle(outcomes).map(|_| ())
}
