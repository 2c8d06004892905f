//! Gauss-Seidel relaxation adapter.
//!
//! ## Purpose
//!
//! This module provides the builder and processor that fill the undefined
//! cells of a grid in place by Gauss-Seidel relaxation of the Laplace
//! equation.
//!
//! ## Design notes
//!
//! * **Processing**: Validates once at `build()`, then fills any number of grids.
//! * **Delegation**: Delegates the convergence loop to the execution engine.
//! * **Extensibility**: The sweep and zonal-average passes can be swapped for
//!   parallel ones by extension crates.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * The relaxation factor is in (0, 2) and the tolerance is finite and >= 0.
//! * Only the cells that were NaN on entry are modified.
//!
//! ## Non-goals
//!
//! * This adapter does not spawn threads (see `fastGridfill`).
//! * This adapter does not resize or reallocate the grid.

// External dependencies
use ndarray::{ArrayBase, DataMut, Ix2};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::first_guess::FirstGuess;
use crate::engine::executor::{RelaxationConfig, RelaxationExecutor, SweepPassFn, ZonalPassFn};
use crate::engine::output::RelaxationResult;
use crate::engine::validator::Validator;
use crate::primitives::errors::FillError;

/// Default maximum number of sweeps.
pub const DEFAULT_MAX_ITERATIONS: usize = 2000;

/// Default convergence tolerance.
pub const DEFAULT_EPSILON: f64 = 1e-4;

/// Default relaxation factor.
pub const DEFAULT_RELAXATION: f64 = 1.0;

// ============================================================================
// Gauss-Seidel Builder
// ============================================================================

/// Builder for the Gauss-Seidel fill processor.
#[derive(Debug, Clone)]
pub struct GaussSeidelFillBuilder<T: Float> {
    /// First guess strategy
    pub first_guess: FirstGuess,

    /// Whether the x axis wraps around
    pub is_circle: bool,

    /// Maximum number of sweeps
    pub max_iterations: usize,

    /// Convergence tolerance on the maximum residual
    pub epsilon: T,

    /// Relaxation factor
    pub relaxation: T,

    /// Deferred error from adapter conversion
    pub deferred_error: Option<FillError>,

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++
    /// Number of worker threads handed to custom passes.
    #[doc(hidden)]
    pub num_threads: usize,

    /// Custom sweep pass function.
    #[doc(hidden)]
    pub custom_sweep_pass: Option<SweepPassFn<T>>,

    /// Custom zonal-average pass function.
    #[doc(hidden)]
    pub custom_zonal_pass: Option<ZonalPassFn<T>>,
}

impl<T: Float> Default for GaussSeidelFillBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> GaussSeidelFillBuilder<T> {
    /// Create a new builder with default parameters.
    ///
    /// # Defaults
    ///
    /// * first_guess: ZonalAverage
    /// * is_circle: false
    /// * max_iterations: 2000
    /// * epsilon: 1e-4
    /// * relaxation: 1.0
    fn new() -> Self {
        Self {
            first_guess: FirstGuess::default(),
            is_circle: false,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            epsilon: T::from(DEFAULT_EPSILON).unwrap_or_else(T::epsilon),
            relaxation: T::from(DEFAULT_RELAXATION).unwrap_or_else(T::one),
            deferred_error: None,
            num_threads: 1,
            custom_sweep_pass: None,
            custom_zonal_pass: None,
        }
    }

    /// Set the first guess strategy.
    pub fn first_guess(mut self, first_guess: FirstGuess) -> Self {
        self.first_guess = first_guess;
        self
    }

    /// Declare whether the x axis is circular.
    pub fn circular(mut self, is_circle: bool) -> Self {
        self.is_circle = is_circle;
        self
    }

    /// Set the maximum number of sweeps.
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence tolerance.
    pub fn epsilon(mut self, epsilon: T) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set the relaxation factor.
    pub fn relaxation(mut self, relaxation: T) -> Self {
        self.relaxation = relaxation;
        self
    }

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++

    /// Set the number of worker threads handed to custom passes.
    #[doc(hidden)]
    pub fn num_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = num_threads;
        self
    }

    /// Set a custom sweep pass function.
    #[doc(hidden)]
    pub fn custom_sweep_pass(mut self, pass: SweepPassFn<T>) -> Self {
        self.custom_sweep_pass = Some(pass);
        self
    }

    /// Set a custom zonal-average pass function.
    #[doc(hidden)]
    pub fn custom_zonal_pass(mut self, pass: ZonalPassFn<T>) -> Self {
        self.custom_zonal_pass = Some(pass);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the Gauss-Seidel processor.
    pub fn build(self) -> Result<GaussSeidelFill<T>, FillError> {
        if let Some(err) = self.deferred_error {
            return Err(err);
        }

        Validator::validate_relaxation(self.relaxation)?;
        Validator::validate_tolerance(self.epsilon)?;

        Ok(GaussSeidelFill {
            config: RelaxationConfig {
                first_guess: self.first_guess,
                is_circle: self.is_circle,
                max_iterations: self.max_iterations,
                epsilon: self.epsilon,
                relaxation: self.relaxation,
                num_threads: self.num_threads.max(1),
                custom_sweep_pass: self.custom_sweep_pass,
                custom_zonal_pass: self.custom_zonal_pass,
            },
        })
    }
}

// ============================================================================
// Gauss-Seidel Processor
// ============================================================================

/// Gauss-Seidel fill processor.
#[derive(Debug, Clone)]
pub struct GaussSeidelFill<T> {
    config: RelaxationConfig<T>,
}

impl<T: Float> GaussSeidelFill<T> {
    /// Replace every NaN of `grid` by relaxation; returns the work performed.
    pub fn fill<S>(&self, grid: &mut ArrayBase<S, Ix2>) -> Result<RelaxationResult<T>, FillError>
    where
        S: DataMut<Elem = T>,
    {
        RelaxationExecutor::run(&mut grid.view_mut(), &self.config)
    }

    /// The validated configuration.
    pub fn config(&self) -> &RelaxationConfig<T> {
        &self.config
    }
}
