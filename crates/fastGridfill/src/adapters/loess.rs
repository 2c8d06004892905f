//! LOESS extrapolation adapter with parallel execution.
//!
//! ## Purpose
//!
//! This module wraps the `gridfill` LOESS builder and runs the extrapolation
//! on a per-call pool, one chunk of x rows per worker.
//!
//! ## Invariants
//!
//! * The input grid is never modified.
//! * The output does not depend on the worker count.

// External dependencies
use core::marker::PhantomData;
use num_traits::Float;
use std::result::Result;
use tracing::debug;

// Export dependencies from gridfill crate
use gridfill::internals::adapters::loess::LoessFillBuilder;
use gridfill::internals::algorithms::loess::LoessWindow;
use gridfill::internals::engine::output::LoessResult;
use gridfill::internals::primitives::axis::Axis;
use gridfill::internals::primitives::errors::FillError;
use gridfill::internals::primitives::grid::Grid2D;

// Internal dependencies
use crate::engine::loess::loess_parallel;
use crate::engine::threads::{ConcurrencyProbe, hardware_concurrency, resolve_num_threads};

// ============================================================================
// Extended LOESS Builder
// ============================================================================

/// Builder for the LOESS fill processor with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelLoessFillBuilder<T: Float> {
    /// Base builder from the gridfill crate
    pub base: LoessFillBuilder<T>,

    /// Probe used when the worker count is 0
    pub concurrency_probe: ConcurrencyProbe,
}

impl<T: Float> Default for ParallelLoessFillBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> ParallelLoessFillBuilder<T> {
    /// Create a new builder with default parameters.
    ///
    /// # Defaults
    ///
    /// * window: 5 points on each side along x and y
    /// * num_threads: 0 (all cores)
    fn new() -> Self {
        Self {
            base: LoessFillBuilder::default().num_threads(0),
            concurrency_probe: hardware_concurrency,
        }
    }

    /// Set the half window along x and y.
    pub fn half_window(mut self, nx: u32, ny: u32) -> Self {
        self.base = self.base.half_window(nx, ny);
        self
    }

    /// Set the number of worker threads (0 means all cores).
    pub fn num_threads(mut self, num_threads: usize) -> Self {
        self.base = self.base.num_threads(num_threads);
        self
    }

    /// Replace the probe consulted when the worker count is 0.
    pub fn hardware_concurrency(mut self, probe: ConcurrencyProbe) -> Self {
        self.concurrency_probe = probe;
        self
    }

    /// Build the parallel LOESS processor.
    pub fn build(self) -> Result<ParallelLoessFill<T>, FillError> {
        let num_threads = resolve_num_threads(self.base.num_threads, self.concurrency_probe);
        debug!(num_threads, "resolved LOESS workers");

        let window = self.base.build()?.window();
        Ok(ParallelLoessFill {
            window,
            num_threads,
            _marker: PhantomData,
        })
    }
}

// ============================================================================
// Extended LOESS Processor
// ============================================================================

/// LOESS fill processor with parallel support.
#[derive(Debug, Clone, Copy)]
pub struct ParallelLoessFill<T> {
    window: LoessWindow,
    num_threads: usize,
    _marker: PhantomData<T>,
}

impl<T: Float + Send + Sync> ParallelLoessFill<T> {
    /// Build a copy of `grid` whose undefined cells are extrapolated.
    pub fn fill<A>(&self, grid: &Grid2D<'_, T, A>) -> Result<LoessResult<T>, FillError>
    where
        A: Axis<T> + Sync,
    {
        loess_parallel(grid, self.window, self.num_threads)
    }

    /// The validated half window.
    pub fn window(&self) -> LoessWindow {
        self.window
    }

    /// Resolved number of worker threads.
    pub fn num_threads(&self) -> usize {
        self.num_threads
    }
}
