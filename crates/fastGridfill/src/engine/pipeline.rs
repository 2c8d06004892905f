//! Pipelined parallel Gauss-Seidel sweep.
//!
//! ## Purpose
//!
//! This module provides the sweep that is injected into the `gridfill`
//! relaxation engine. It runs one Gauss-Seidel sweep on several threads while
//! producing exactly the values of the sequential sweep.
//!
//! ## Design notes
//!
//! * **Bands**: The y axis is split into contiguous bands, one per worker.
//!   Every worker walks all columns `ix` in order and relaxes its own rows of
//!   each column.
//! * **Handshake**: Worker `k` may start column `ix` only once worker `k - 1`
//!   has finished that column. Each worker publishes the number of columns it
//!   completed on its own cursor (release store); its successor polls that
//!   cursor (acquire load), spinning briefly and then sleeping.
//! * **Ordering**: The sequential scan visits `(ix, iy)` with `ix` outer and
//!   `iy` inner. The only cross-band reads are the y neighbours at band edges,
//!   and the handshake orders them exactly as the sequential scan does, so
//!   every cell sees the same neighbour values bit for bit.
//!
//! ## Invariants
//!
//! * Workers write only the rows of their own band.
//! * A worker that faults still publishes completion of every column, so no
//!   successor waits forever.
//! * All workers are joined before the sweep returns.
//!
//! ## Non-goals
//!
//! * This module does not run the convergence loop (handled by `gridfill`).
//! * This module does not reuse threads across sweeps.

// External dependencies
use core::marker::PhantomData;
use core::ops::Range;
use ndarray::{ArrayView2, ArrayViewMut2};
use num_traits::Float;
use std::hint;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;
use tracing::debug;

// Export dependencies from gridfill crate
use gridfill::internals::algorithms::relaxation::{gauss_seidel_sweep, relax_column};
use gridfill::internals::math::stencil::Stencil;
use gridfill::internals::primitives::errors::FillError;
use gridfill::internals::primitives::grid::CellAccess;
use gridfill::internals::primitives::partition::{Band, partition_bands};

// Internal dependencies
use crate::engine::dispatch::{guarded, panic_message, settle};

/// Polls spent spinning before a waiting worker starts sleeping.
const SPIN_LIMIT: u32 = 64;

/// Sleep between polls once spinning is over.
const POLL_INTERVAL: Duration = Duration::from_nanos(5);

// ============================================================================
// Pipeline Cursor
// ============================================================================

/// Number of columns a worker has completed in the current sweep.
#[derive(Debug, Default)]
pub struct PipelineCursor {
    completed: AtomicUsize,
}

impl PipelineCursor {
    /// A cursor with no completed column.
    pub fn new() -> Self {
        Self {
            completed: AtomicUsize::new(0),
        }
    }

    /// Publish that the first `columns` columns are done.
    #[inline]
    pub fn publish(&self, columns: usize) {
        self.completed.store(columns, Ordering::Release);
    }

    /// Block until at least `columns` columns are published.
    pub fn wait_for(&self, columns: usize) {
        let mut spins = 0;
        while self.completed.load(Ordering::Acquire) < columns {
            if spins < SPIN_LIMIT {
                spins += 1;
                hint::spin_loop();
            } else {
                thread::sleep(POLL_INTERVAL);
            }
        }
    }

    /// Columns published so far.
    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::Acquire)
    }
}

// ============================================================================
// Shared Grid
// ============================================================================

/// Grid cells reachable from several workers at once.
///
/// Built from an exclusive borrow of the grid, so nothing else can touch the
/// storage while copies of it are alive.
#[derive(Debug, Clone, Copy)]
pub struct SharedGrid<'a, T> {
    ptr: *mut T,
    strides: (isize, isize),
    dim: (usize, usize),
    _borrow: PhantomData<&'a mut T>,
}

// SAFETY: workers only write cells of their own band, and cross-band reads
// are ordered after the owner's writes by the cursor handshake
// (release/acquire). No cell is ever accessed by two workers concurrently
// when one of them writes.
unsafe impl<T: Send> Send for SharedGrid<'_, T> {}
// SAFETY: see `Send`.
unsafe impl<T: Send> Sync for SharedGrid<'_, T> {}

impl<'a, T> SharedGrid<'a, T> {
    /// Share the cells of `grid` for the duration of the borrow.
    pub fn new(grid: &'a mut ArrayViewMut2<'_, T>) -> Self {
        let strides = (grid.strides()[0], grid.strides()[1]);
        Self {
            strides,
            dim: grid.dim(),
            ptr: grid.as_mut_ptr(),
            _borrow: PhantomData,
        }
    }

    #[inline]
    fn offset(&self, ix: usize, iy: usize) -> isize {
        assert!(
            ix < self.dim.0 && iy < self.dim.1,
            "cell ({ix}, {iy}) outside grid {:?}",
            self.dim
        );
        ix as isize * self.strides.0 + iy as isize * self.strides.1
    }
}

impl<T: Copy> CellAccess<T> for SharedGrid<'_, T> {
    #[inline]
    fn get(&self, ix: usize, iy: usize) -> T {
        let offset = self.offset(ix, iy);
        // SAFETY: the index was bounds checked against the borrowed view.
        unsafe { *self.ptr.offset(offset) }
    }

    #[inline]
    fn set(&mut self, ix: usize, iy: usize, value: T) {
        let offset = self.offset(ix, iy);
        // SAFETY: the index was bounds checked against the borrowed view and
        // the cell belongs to the calling worker's band.
        unsafe { *self.ptr.offset(offset) = value }
    }
}

// ============================================================================
// Pipeline Driver
// ============================================================================

/// Run `column(worker, ix, rows)` for every column and band, pipelined.
///
/// Returns the largest value returned by any call.
pub fn run_pipeline<T, F>(x_size: usize, bands: &[Band], column: F) -> Result<T, FillError>
where
    T: Float + Send,
    F: Fn(usize, usize, Range<usize>) -> T + Sync,
{
    let cursors: Vec<PipelineCursor> = bands.iter().map(|_| PipelineCursor::new()).collect();
    let cursors = &cursors;
    let column = &column;

    let outcomes: Vec<Result<T, FillError>> = thread::scope(|scope| {
        let handles: Vec<_> = bands
            .iter()
            .enumerate()
            .map(|(worker, band)| {
                let rows = band.range();
                scope.spawn(move || {
                    let outcome = guarded(worker, || {
                        let mut max_residual = T::zero();
                        for ix in 0..x_size {
                            if worker > 0 {
                                cursors[worker - 1].wait_for(ix + 1);
                            }
                            max_residual = max_residual.max(column(worker, ix, rows.clone()));
                            cursors[worker].publish(ix + 1);
                        }
                        max_residual
                    });
                    if outcome.is_err() {
                        cursors[worker].publish(x_size);
                    }
                    outcome
                })
            })
            .collect();

        handles
            .into_iter()
            .enumerate()
            .map(|(worker, handle)| {
                handle.join().unwrap_or_else(|payload| {
                    Err(FillError::WorkerFault {
                        worker,
                        message: panic_message(payload),
                    })
                })
            })
            .collect()
    });

    let residuals = settle(outcomes)?;
    Ok(residuals.into_iter().fold(T::zero(), T::max))
}

// ============================================================================
// Pipelined Sweep
// ============================================================================

/// One Gauss-Seidel sweep over `grid` using up to `num_threads` workers.
///
/// Matches the `SweepPassFn` hook of the `gridfill` engine.
pub fn sweep_pipelined<T>(
    grid: &mut ArrayViewMut2<'_, T>,
    mask: &ArrayView2<'_, bool>,
    is_circle: bool,
    relaxation: T,
    num_threads: usize,
) -> Result<T, FillError>
where
    T: Float + Send + Sync,
{
    let (x_size, y_size) = grid.dim();
    if x_size == 0 || y_size == 0 {
        return Ok(T::zero());
    }

    let bands = partition_bands(y_size, num_threads);
    if bands.len() == 1 {
        return Ok(gauss_seidel_sweep(grid, mask, is_circle, relaxation));
    }
    debug!(bands = bands.len(), x_size, y_size, "pipelined sweep");

    let stencil = Stencil::new(x_size, y_size, is_circle);
    let shared = SharedGrid::new(grid);
    run_pipeline(x_size, &bands, |_, ix, rows| {
        let mut cells = shared;
        relax_column(&mut cells, mask, &stencil, ix, rows, relaxation)
    })
}
