//! Parallel LOESS extrapolation.
//!
//! ## Purpose
//!
//! Every estimate reads only the input grid, so the output rows are split
//! into even chunks and filled without any synchronization. Each chunk is
//! one worker slot; the tallies of the chunks are summed afterwards.
//!
//! ## Invariants
//!
//! * The output equals the sequential LOESS output cell for cell.
//! * A panicking axis collaborator becomes a `WorkerFault`, reported once
//!   every chunk has finished.

// External dependencies
use ndarray::Axis as ArrayAxis;
use num_traits::Float;
use rayon::prelude::*;
use tracing::{debug, warn};

// Export dependencies from gridfill crate
use gridfill::internals::algorithms::loess::{LoessTally, LoessWindow, loess_rows};
use gridfill::internals::engine::output::LoessResult;
use gridfill::internals::primitives::axis::Axis;
use gridfill::internals::primitives::errors::FillError;
use gridfill::internals::primitives::grid::Grid2D;
use gridfill::internals::primitives::partition::{Band, chunk_len};

// Internal dependencies
use crate::engine::dispatch::{guarded, settle, thread_pool};

/// Build a filled copy of `grid` on `num_threads` workers.
///
/// With a single worker the pass runs on the calling thread.
pub fn loess_parallel<T, A>(
    grid: &Grid2D<'_, T, A>,
    window: LoessWindow,
    num_threads: usize,
) -> Result<LoessResult<T>, FillError>
where
    T: Float + Send + Sync,
    A: Axis<T> + Sync,
{
    let (x_size, _) = grid.shape();
    let mut values = grid.values().to_owned();

    let tally = if num_threads <= 1 || x_size <= 1 {
        let rows = Band {
            start: 0,
            end: x_size,
        };
        let mut output = values.view_mut();
        let outcome = guarded(0, || loess_rows(grid, rows, window, &mut output));
        settle(vec![outcome])?
            .into_iter()
            .fold(LoessTally::default(), sum_tally)
    } else {
        let chunk = chunk_len(x_size, num_threads);
        debug!(chunk, num_threads, "parallel LOESS");

        let pieces: Vec<_> = values
            .axis_chunks_iter_mut(ArrayAxis(0), chunk)
            .enumerate()
            .collect();

        let pool = thread_pool(num_threads)?;
        let outcomes: Vec<Result<LoessTally, FillError>> = pool.install(|| {
            pieces
                .into_par_iter()
                .map(|(worker, mut output)| {
                    let start = worker * chunk;
                    let rows = Band {
                        start,
                        end: start + output.nrows(),
                    };
                    guarded(worker, || loess_rows(grid, rows, window, &mut output))
                })
                .collect()
        });
        settle(outcomes)?
            .into_iter()
            .fold(LoessTally::default(), sum_tally)
    };

    if tally.unresolved > 0 {
        warn!(
            unresolved = tally.unresolved,
            nx = window.nx,
            ny = window.ny,
            "LOESS window too small for some undefined cells"
        );
    }
    Ok(LoessResult {
        values,
        filled: tally.filled,
        unresolved: tally.unresolved,
    })
}

fn sum_tally(mut total: LoessTally, part: LoessTally) -> LoessTally {
    total += part;
    total
}
