//! High-level API for grid filling with parallel execution support.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry points of the parallel
//! crate. It re-uses the `gridfill` fluent builder and swaps in adapters that
//! run on every available core, plus two flat functions for callers that do
//! not need the builder.
//!
//! ## Design notes
//!
//! * **Fluent Integration**: Re-uses the base `gridfill` builder pattern.
//! * **Parallel-First**: The worker count defaults to 0 (all cores).
//! * **Transparent**: Marker types (GaussSeidel, Loess) select the parallel builders.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`FillBuilder`] via `Fill::new()`.
//! 2. Chain configuration methods (`.first_guess()`, `.num_threads()`, etc.).
//! 3. Select a strategy via `.adapter(GaussSeidel)` to get a parallel builder.

// External dependencies
use ndarray::{Array2, ArrayBase, DataMut, Ix2};
use num_traits::Float;

// Import base marker types for delegation
use gridfill::internals::api::GaussSeidel as BaseGaussSeidel;
use gridfill::internals::api::Loess as BaseLoess;

// Internal dependencies
use crate::adapters::loess::ParallelLoessFillBuilder;
use crate::adapters::relaxation::ParallelGaussSeidelFillBuilder;

// Publicly re-exported types
pub use crate::adapters::loess::ParallelLoessFill;
pub use crate::adapters::relaxation::ParallelGaussSeidelFill;
pub use crate::engine::threads::hardware_concurrency;
pub use gridfill::internals::algorithms::first_guess::FirstGuess;
pub use gridfill::internals::algorithms::loess::LoessWindow;
pub use gridfill::internals::api::{FillAdapter, FillBuilder};
pub use gridfill::internals::engine::output::{LoessResult, RelaxationResult, Termination};
pub use gridfill::internals::primitives::axis::{Axis, Boundary, RegularAxis};
pub use gridfill::internals::primitives::errors::FillError;
pub use gridfill::internals::primitives::grid::Grid2D;

// ============================================================================
// Adapter Module
// ============================================================================

/// Adapter selection namespace.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::{GaussSeidel, Loess};
}

// ============================================================================
// Adapter Marker Types
// ============================================================================

/// Marker for pipelined parallel Gauss-Seidel relaxation.
#[derive(Debug, Clone, Copy)]
pub struct GaussSeidel;

impl<T: Float> FillAdapter<T> for GaussSeidel {
    type Output = ParallelGaussSeidelFillBuilder<T>;

    fn convert(builder: FillBuilder<T>) -> Self::Output {
        // All cores unless the caller chose otherwise
        let num_threads = builder.num_threads.unwrap_or(0);

        // Delegate to base implementation to create base builder
        let base = <BaseGaussSeidel as FillAdapter<T>>::convert(builder).num_threads(num_threads);

        // Wrap with extension fields
        ParallelGaussSeidelFillBuilder {
            base,
            concurrency_probe: hardware_concurrency,
        }
    }
}

/// Marker for row-parallel LOESS extrapolation.
#[derive(Debug, Clone, Copy)]
pub struct Loess;

impl<T: Float> FillAdapter<T> for Loess {
    type Output = ParallelLoessFillBuilder<T>;

    fn convert(builder: FillBuilder<T>) -> Self::Output {
        let num_threads = builder.num_threads.unwrap_or(0);
        let base = <BaseLoess as FillAdapter<T>>::convert(builder).num_threads(num_threads);
        ParallelLoessFillBuilder {
            base,
            concurrency_probe: hardware_concurrency,
        }
    }
}

// ============================================================================
// Flat Entry Points
// ============================================================================

/// Fill the undefined cells of `grid` in place by Gauss-Seidel relaxation.
///
/// Returns the number of sweeps performed and the residual of the last one;
/// `(0, 0)` when the grid had no undefined cell. A `num_threads` of 0 uses
/// every core.
///
/// # Example
///
/// ```rust
/// use fastGridfill::prelude::*;
/// use ndarray::Array2;
///
/// let mut grid = Array2::from_elem((5, 5), 1.0);
/// grid[[2, 2]] = f64::NAN;
///
/// let (iterations, residual) = gauss_seidel(&mut grid, Zero, false, 50, 1e-6, 1.0, 2)?;
/// assert_eq!(iterations, 2);
/// assert_eq!(residual, 0.0);
/// assert_eq!(grid[[2, 2]], 1.0);
/// # Result::<(), FillError>::Ok(())
/// ```
pub fn gauss_seidel<T, S>(
    grid: &mut ArrayBase<S, Ix2>,
    first_guess: FirstGuess,
    is_circle: bool,
    max_iterations: usize,
    epsilon: T,
    relaxation: T,
    num_threads: usize,
) -> Result<(usize, T), FillError>
where
    T: Float + Send + Sync,
    S: DataMut<Elem = T>,
{
    let result = FillBuilder::new()
        .first_guess(first_guess)
        .circular(is_circle)
        .max_iterations(max_iterations)
        .epsilon(epsilon)
        .relaxation(relaxation)
        .num_threads(num_threads)
        .adapter(GaussSeidel)
        .build()?
        .fill(grid)?;
    Ok((result.iterations, result.residual))
}

/// Build a copy of `grid` whose undefined cells are extrapolated by LOESS.
///
/// `nx` and `ny` are the half windows in grid indexes. Cells whose window
/// holds no defined value stay NaN. A `num_threads` of 0 uses every core.
pub fn loess<T, A>(
    grid: &Grid2D<'_, T, A>,
    nx: u32,
    ny: u32,
    num_threads: usize,
) -> Result<Array2<T>, FillError>
where
    T: Float + Send + Sync,
    A: Axis<T> + Sync,
{
    let result = FillBuilder::new()
        .half_window(nx, ny)
        .num_threads(num_threads)
        .adapter(Loess)
        .build()?
        .fill(grid)?;
    Ok(result.into_values())
}
