//! LOESS extrapolation adapter.
//!
//! ## Purpose
//!
//! This module provides the builder and processor that produce a filled copy
//! of a grid, each undefined cell receiving the tri-cube weighted mean of the
//! defined cells of its window.
//!
//! ## Design notes
//!
//! * **Non-mutating**: The input grid is only read; a new grid is returned.
//! * **Delegation**: Delegates computation to the execution engine.
//!
//! ## Invariants
//!
//! * Both half windows are at least one point wide.
//! * Cells without a weighted neighbour stay NaN in the output.

// External dependencies
use core::marker::PhantomData;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::loess::LoessWindow;
use crate::engine::executor::LoessExecutor;
use crate::engine::output::LoessResult;
use crate::engine::validator::Validator;
use crate::primitives::axis::Axis;
use crate::primitives::errors::FillError;
use crate::primitives::grid::Grid2D;

// ============================================================================
// LOESS Builder
// ============================================================================

/// Builder for the LOESS fill processor.
#[derive(Debug, Clone)]
pub struct LoessFillBuilder<T: Float> {
    /// Half window along each axis
    pub window: LoessWindow,

    /// Deferred error from adapter conversion
    pub deferred_error: Option<FillError>,

    /// Number of worker threads requested (used by extension crates).
    #[doc(hidden)]
    pub num_threads: usize,

    _marker: PhantomData<T>,
}

impl<T: Float> Default for LoessFillBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> LoessFillBuilder<T> {
    /// Create a new builder with default parameters.
    ///
    /// # Defaults
    ///
    /// * window: 5 points on each side along x and y
    fn new() -> Self {
        Self {
            window: LoessWindow::default(),
            deferred_error: None,
            num_threads: 1,
            _marker: PhantomData,
        }
    }

    /// Set the half window along x and y.
    pub fn half_window(mut self, nx: u32, ny: u32) -> Self {
        self.window = LoessWindow { nx, ny };
        self
    }

    /// Set the number of worker threads.
    #[doc(hidden)]
    pub fn num_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = num_threads;
        self
    }

    /// Build the LOESS processor.
    pub fn build(self) -> Result<LoessFill<T>, FillError> {
        if let Some(err) = self.deferred_error {
            return Err(err);
        }

        Validator::validate_window(self.window)?;

        Ok(LoessFill {
            window: self.window,
            _marker: PhantomData,
        })
    }
}

// ============================================================================
// LOESS Processor
// ============================================================================

/// LOESS fill processor.
#[derive(Debug, Clone, Copy)]
pub struct LoessFill<T> {
    window: LoessWindow,
    _marker: PhantomData<T>,
}

impl<T: Float> LoessFill<T> {
    /// Build a copy of `grid` whose undefined cells are extrapolated.
    pub fn fill<A: Axis<T>>(&self, grid: &Grid2D<'_, T, A>) -> Result<LoessResult<T>, FillError> {
        Ok(LoessExecutor::run(grid, self.window))
    }

    /// The validated half window.
    pub fn window(&self) -> LoessWindow {
        self.window
    }
}
