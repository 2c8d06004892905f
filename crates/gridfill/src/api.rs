//! High-level API for grid filling.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for the fill parameters and selects the fill strategy
//! (Gauss-Seidel relaxation or LOESS extrapolation) through an adapter.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Polymorphic**: Marker types transition to strategy-specific builders.
//! * **Validated**: Parameters are validated when `.build()` is called on the adapter.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`FillBuilder`] via `Fill::new()`.
//! 2. Chain configuration methods (`.first_guess()`, `.epsilon()`, etc.).
//! 3. Select a strategy via `.adapter(GaussSeidel)` or `.adapter(Loess)`.
//! 4. Call `.build()` and then `.fill(...)`.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::adapters::loess::LoessFillBuilder;
use crate::adapters::relaxation::GaussSeidelFillBuilder;
use crate::engine::executor::{SweepPassFn, ZonalPassFn};

// Publicly re-exported types
pub use crate::adapters::loess::LoessFill;
pub use crate::adapters::relaxation::GaussSeidelFill;
pub use crate::algorithms::first_guess::FirstGuess;
pub use crate::algorithms::loess::LoessWindow;
pub use crate::engine::output::{LoessResult, RelaxationResult, Termination};
pub use crate::primitives::axis::{Axis, Boundary, RegularAxis};
pub use crate::primitives::errors::FillError;
pub use crate::primitives::grid::Grid2D;

/// Marker types for selecting the fill strategy.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::{GaussSeidel, Loess};
}

/// Fluent builder for configuring fill parameters.
#[derive(Debug, Clone)]
pub struct FillBuilder<T> {
    /// First guess strategy (GaussSeidel only).
    pub first_guess: Option<FirstGuess>,

    /// Whether the x axis wraps around (GaussSeidel only).
    pub is_circle: Option<bool>,

    /// Maximum number of sweeps (GaussSeidel only).
    pub max_iterations: Option<usize>,

    /// Convergence tolerance (GaussSeidel only).
    pub epsilon: Option<T>,

    /// Relaxation factor (GaussSeidel only).
    pub relaxation: Option<T>,

    /// Half window along x and y (Loess only).
    pub half_window: Option<(u32, u32)>,

    /// Number of worker threads.
    pub num_threads: Option<usize>,

    // ======================================
    // DEV
    // ======================================
    /// Custom sweep pass function.
    #[doc(hidden)]
    pub custom_sweep_pass: Option<SweepPassFn<T>>,

    /// Custom zonal-average pass function.
    #[doc(hidden)]
    pub custom_zonal_pass: Option<ZonalPassFn<T>>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for FillBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> FillBuilder<T> {
    /// Select a fill strategy to transition to its builder.
    pub fn adapter<A>(self, _adapter: A) -> A::Output
    where
        A: FillAdapter<T>,
    {
        A::convert(self)
    }

    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            first_guess: None,
            is_circle: None,
            max_iterations: None,
            epsilon: None,
            relaxation: None,
            half_window: None,
            num_threads: None,
            custom_sweep_pass: None,
            custom_zonal_pass: None,
            duplicate_param: None,
        }
    }

    /// Set the first guess strategy.
    pub fn first_guess(mut self, first_guess: FirstGuess) -> Self {
        if self.first_guess.is_some() {
            self.duplicate_param = Some("first_guess");
        }
        self.first_guess = Some(first_guess);
        self
    }

    /// Declare whether the x axis is circular.
    pub fn circular(mut self, is_circle: bool) -> Self {
        if self.is_circle.is_some() {
            self.duplicate_param = Some("circular");
        }
        self.is_circle = Some(is_circle);
        self
    }

    /// Set the maximum number of sweeps.
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        if self.max_iterations.is_some() {
            self.duplicate_param = Some("max_iterations");
        }
        self.max_iterations = Some(max_iterations);
        self
    }

    /// Set the convergence tolerance on the maximum residual.
    pub fn epsilon(mut self, epsilon: T) -> Self {
        if self.epsilon.is_some() {
            self.duplicate_param = Some("epsilon");
        }
        self.epsilon = Some(epsilon);
        self
    }

    /// Set the relaxation factor.
    pub fn relaxation(mut self, relaxation: T) -> Self {
        if self.relaxation.is_some() {
            self.duplicate_param = Some("relaxation");
        }
        self.relaxation = Some(relaxation);
        self
    }

    /// Set the LOESS half window along x and y.
    pub fn half_window(mut self, nx: u32, ny: u32) -> Self {
        if self.half_window.is_some() {
            self.duplicate_param = Some("half_window");
        }
        self.half_window = Some((nx, ny));
        self
    }

    /// Set the number of worker threads (0 means all available cores).
    pub fn num_threads(mut self, num_threads: usize) -> Self {
        if self.num_threads.is_some() {
            self.duplicate_param = Some("num_threads");
        }
        self.num_threads = Some(num_threads);
        self
    }

    // ======================================
    // DEV
    // ======================================

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

    // Deferred error shared by every adapter conversion.
    fn duplicate_error(&self) -> Option<FillError> {
        self.duplicate_param
            .map(|parameter| FillError::DuplicateParameter { parameter })
    }
}

// ============================================================================
// Adapter Trait and Markers
// ============================================================================

/// Conversion from the generic builder to a strategy-specific builder.
pub trait FillAdapter<T: Float> {
    /// Strategy-specific builder.
    type Output;

    /// Convert the generic builder.
    fn convert(builder: FillBuilder<T>) -> Self::Output;
}

/// Marker for in-place Gauss-Seidel relaxation.
#[derive(Debug, Clone, Copy)]
pub struct GaussSeidel;

impl<T: Float> FillAdapter<T> for GaussSeidel {
    type Output = GaussSeidelFillBuilder<T>;

    fn convert(builder: FillBuilder<T>) -> Self::Output {
        let mut result = GaussSeidelFillBuilder::default();

        if let Some(first_guess) = builder.first_guess {
            result.first_guess = first_guess;
        }
        if let Some(is_circle) = builder.is_circle {
            result.is_circle = is_circle;
        }
        if let Some(max_iterations) = builder.max_iterations {
            result.max_iterations = max_iterations;
        }
        if let Some(epsilon) = builder.epsilon {
            result.epsilon = epsilon;
        }
        if let Some(relaxation) = builder.relaxation {
            result.relaxation = relaxation;
        }
        if let Some(num_threads) = builder.num_threads {
            result.num_threads = num_threads;
        }

        // ======================================
        // DEV
        // ======================================
        result.custom_sweep_pass = builder.custom_sweep_pass;
        result.custom_zonal_pass = builder.custom_zonal_pass;

        result.deferred_error = builder.duplicate_error();
        if result.deferred_error.is_none() && builder.half_window.is_some() {
            result.deferred_error = Some(FillError::UnsupportedFeature {
                adapter: "GaussSeidel",
                feature: "half_window",
            });
        }

        result
    }
}

/// Marker for LOESS extrapolation into a new grid.
#[derive(Debug, Clone, Copy)]
pub struct Loess;

impl<T: Float> FillAdapter<T> for Loess {
    type Output = LoessFillBuilder<T>;

    fn convert(builder: FillBuilder<T>) -> Self::Output {
        let mut result = LoessFillBuilder::default();

        if let Some((nx, ny)) = builder.half_window {
            result = result.half_window(nx, ny);
        }
        if let Some(num_threads) = builder.num_threads {
            result.num_threads = num_threads;
        }

        result.deferred_error = builder.duplicate_error();
        if result.deferred_error.is_none() {
            let relaxation_only = [
                ("first_guess", builder.first_guess.is_some()),
                ("circular", builder.is_circle.is_some()),
                ("max_iterations", builder.max_iterations.is_some()),
                ("epsilon", builder.epsilon.is_some()),
                ("relaxation", builder.relaxation.is_some()),
            ];
            if let Some((feature, _)) = relaxation_only.iter().find(|(_, set)| *set) {
                result.deferred_error = Some(FillError::UnsupportedFeature {
                    adapter: "Loess",
                    feature: *feature,
                });
            }
        }

        result
    }
}
