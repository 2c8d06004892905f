//! Gauss-Seidel relaxation adapter with parallel execution.
//!
//! ## Purpose
//!
//! This module wraps the `gridfill` Gauss-Seidel builder. It resolves the
//! worker count and, when more than one worker is available, plugs the
//! pipelined sweep and the parallel zonal average into the base engine.
//!
//! ## Design notes
//!
//! * **Delegation**: Validation and the convergence loop stay in `gridfill`.
//! * **Parallelism**: One worker per y band; see `engine::pipeline`.
//! * **Determinism**: Results do not depend on the worker count.
//!
//! ## Invariants
//!
//! * A worker count of 0 means every core reported by the probe.
//! * With one worker no thread is spawned and no hook is installed.

// External dependencies
use ndarray::{ArrayBase, DataMut, Ix2};
use num_traits::Float;
use std::result::Result;
use tracing::debug;

// Export dependencies from gridfill crate
use gridfill::internals::adapters::relaxation::{GaussSeidelFill, GaussSeidelFillBuilder};
use gridfill::internals::algorithms::first_guess::FirstGuess;
use gridfill::internals::engine::output::RelaxationResult;
use gridfill::internals::primitives::errors::FillError;

// Internal dependencies
use crate::engine::pipeline::sweep_pipelined;
use crate::engine::threads::{ConcurrencyProbe, hardware_concurrency, resolve_num_threads};
use crate::engine::zonal::zonal_average_parallel;

// ============================================================================
// Extended Gauss-Seidel Builder
// ============================================================================

/// Builder for the Gauss-Seidel fill processor with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelGaussSeidelFillBuilder<T: Float> {
    /// Base builder from the gridfill crate
    pub base: GaussSeidelFillBuilder<T>,

    /// Probe used when the worker count is 0
    pub concurrency_probe: ConcurrencyProbe,
}

impl<T: Float> Default for ParallelGaussSeidelFillBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> ParallelGaussSeidelFillBuilder<T> {
    /// Create a new builder with default parameters.
    ///
    /// # Defaults
    ///
    /// * All base parameters from gridfill GaussSeidelFillBuilder
    /// * num_threads: 0 (all cores)
    fn new() -> Self {
        Self {
            base: GaussSeidelFillBuilder::default().num_threads(0),
            concurrency_probe: hardware_concurrency,
        }
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

    // ========================================================================
    // Shared Setters
    // ========================================================================

    /// Set the first guess strategy.
    pub fn first_guess(mut self, first_guess: FirstGuess) -> Self {
        self.base = self.base.first_guess(first_guess);
        self
    }

    /// Declare whether the x axis is circular.
    pub fn circular(mut self, is_circle: bool) -> Self {
        self.base = self.base.circular(is_circle);
        self
    }

    /// Set the maximum number of sweeps.
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.base = self.base.max_iterations(max_iterations);
        self
    }

    /// Set the convergence tolerance.
    pub fn epsilon(mut self, epsilon: T) -> Self {
        self.base = self.base.epsilon(epsilon);
        self
    }

    /// Set the relaxation factor.
    pub fn relaxation(mut self, relaxation: T) -> Self {
        self.base = self.base.relaxation(relaxation);
        self
    }
}

impl<T: Float + Send + Sync> ParallelGaussSeidelFillBuilder<T> {
    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the parallel Gauss-Seidel processor.
    pub fn build(self) -> Result<ParallelGaussSeidelFill<T>, FillError> {
        let num_threads = resolve_num_threads(self.base.num_threads, self.concurrency_probe);
        debug!(num_threads, "resolved Gauss-Seidel workers");

        let mut builder = self.base.num_threads(num_threads);
        if num_threads > 1 {
            builder = builder
                .custom_sweep_pass(sweep_pipelined)
                .custom_zonal_pass(zonal_average_parallel);
        } else {
            builder.custom_sweep_pass = None;
            builder.custom_zonal_pass = None;
        }

        // Validation and deferred errors are handled by the base builder
        Ok(ParallelGaussSeidelFill {
            inner: builder.build()?,
        })
    }
}

// ============================================================================
// Extended Gauss-Seidel Processor
// ============================================================================

/// Gauss-Seidel fill processor with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelGaussSeidelFill<T> {
    inner: GaussSeidelFill<T>,
}

impl<T: Float> ParallelGaussSeidelFill<T> {
    /// Replace every NaN of `grid` by relaxation; returns the work performed.
    pub fn fill<S>(&self, grid: &mut ArrayBase<S, Ix2>) -> Result<RelaxationResult<T>, FillError>
    where
        S: DataMut<Elem = T>,
    {
        self.inner.fill(grid)
    }

    /// Resolved number of worker threads.
    pub fn num_threads(&self) -> usize {
        self.inner.config().num_threads
    }
}
