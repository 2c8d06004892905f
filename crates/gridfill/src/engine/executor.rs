//! Execution engine for grid filling.
//!
//! ## Purpose
//!
//! This module drives both fill strategies. For relaxation it implements
//! the convergence controller:
//!
//! ```text
//! Init → Seeding → Sweeping → {Converged | BudgetExhausted}
//! ```
//!
//! * **Init**: Build the undefined-cell mask; leave immediately when it is empty.
//! * **Seeding**: Apply the first guess exactly once.
//! * **Sweeping**: Run sweeps until the residual falls below the tolerance or
//!   the iteration budget is spent.
//!
//! For LOESS it allocates the output grid and runs the estimate over every row.
//!
//! ## Design notes
//!
//! * **Injectable passes**: The sweep and zonal-average passes can be replaced
//!   by parallel implementations (see the `fastGridfill` crate) through the
//!   `SweepPassFn` and `ZonalPassFn` hooks. Without hooks everything runs
//!   sequentially on the calling thread.
//! * **Mask lifetime**: The mask is built once per call and outlives every
//!   sweep of that call; it is never recomputed from the mutated grid.
//!
//! ## Non-goals
//!
//! * This module does not validate configuration (handled by `validator`).
//! * This module does not spawn threads itself.

// External dependencies
use ndarray::{ArrayView2, ArrayViewMut2};
use num_traits::Float;
use tracing::{debug, trace, warn};

// Internal dependencies
use crate::algorithms::first_guess::{FirstGuess, apply_zero, apply_zonal_average};
use crate::algorithms::loess::{LoessWindow, loess_rows};
use crate::algorithms::relaxation::gauss_seidel_sweep;
use crate::engine::output::{LoessResult, RelaxationResult, Termination};
use crate::primitives::axis::Axis;
use crate::primitives::errors::FillError;
use crate::primitives::grid::Grid2D;
use crate::primitives::mask::{count_undefined, has_undefined, undefined_mask};
use crate::primitives::partition::Band;

// ============================================================================
// Type Definitions
// ============================================================================

/// Signature for a custom relaxation sweep; returns the sweep's maximum residual.
#[doc(hidden)]
pub type SweepPassFn<T> = fn(
    &mut ArrayViewMut2<'_, T>, // grid
    &ArrayView2<'_, bool>,     // mask
    bool,                      // is_circle
    T,                         // relaxation
    usize,                     // num_threads
) -> Result<T, FillError>;

/// Signature for a custom zonal-average first guess pass.
#[doc(hidden)]
pub type ZonalPassFn<T> = fn(
    &mut ArrayViewMut2<'_, T>, // grid
    &ArrayView2<'_, bool>,     // mask
    usize,                     // num_threads
) -> Result<(), FillError>;

// ============================================================================
// Relaxation
// ============================================================================

/// Configuration of one relaxation fill.
#[derive(Debug, Clone, Copy)]
pub struct RelaxationConfig<T> {
    /// First guess strategy.
    pub first_guess: FirstGuess,

    /// Whether the x axis wraps around.
    pub is_circle: bool,

    /// Maximum number of sweeps.
    pub max_iterations: usize,

    /// Residual under which the loop stops.
    pub epsilon: T,

    /// Relaxation (damping) factor.
    pub relaxation: T,

    /// Number of worker threads, already resolved (>= 1).
    pub num_threads: usize,

    /// Custom sweep pass.
    #[doc(hidden)]
    pub custom_sweep_pass: Option<SweepPassFn<T>>,

    /// Custom zonal-average pass.
    #[doc(hidden)]
    pub custom_zonal_pass: Option<ZonalPassFn<T>>,
}

/// Convergence controller of the relaxation fill.
pub struct RelaxationExecutor;

impl RelaxationExecutor {
    /// Fill the undefined cells of `grid` in place.
    pub fn run<T: Float>(
        grid: &mut ArrayViewMut2<'_, T>,
        config: &RelaxationConfig<T>,
    ) -> Result<RelaxationResult<T>, FillError> {
        // Init
        if !has_undefined(grid) {
            debug!("grid has no undefined value, nothing to fill");
            return Ok(RelaxationResult::untouched());
        }
        let mask = undefined_mask(grid);
        let mask = mask.view();

        // Seeding
        debug!(
            undefined = count_undefined(&mask),
            first_guess = config.first_guess.name(),
            num_threads = config.num_threads,
            "seeding undefined cells"
        );
        match config.first_guess {
            FirstGuess::Zero => apply_zero(grid, &mask),
            FirstGuess::ZonalAverage => match config.custom_zonal_pass {
                Some(pass) => pass(grid, &mask, config.num_threads)?,
                None => apply_zonal_average(grid, &mask),
            },
        }

        // Sweeping
        let mut iterations = 0;
        let mut residual = T::zero();
        let mut termination = Termination::BudgetExhausted;
        for _ in 0..config.max_iterations {
            iterations += 1;
            residual = match config.custom_sweep_pass {
                Some(pass) => pass(
                    grid,
                    &mask,
                    config.is_circle,
                    config.relaxation,
                    config.num_threads,
                )?,
                None => gauss_seidel_sweep(grid, &mask, config.is_circle, config.relaxation),
            };
            trace!(
                iteration = iterations,
                residual = residual.to_f64().unwrap_or(f64::NAN),
                "relaxation sweep"
            );
            if residual < config.epsilon {
                termination = Termination::Converged;
                break;
            }
        }

        debug!(
            iterations,
            residual = residual.to_f64().unwrap_or(f64::NAN),
            termination = termination.name(),
            "relaxation finished"
        );
        Ok(RelaxationResult {
            iterations,
            residual,
            termination,
        })
    }
}

// ============================================================================
// LOESS
// ============================================================================

/// Sequential LOESS driver.
pub struct LoessExecutor;

impl LoessExecutor {
    /// Build a filled copy of `grid`.
    pub fn run<T, A>(grid: &Grid2D<'_, T, A>, window: LoessWindow) -> LoessResult<T>
    where
        T: Float,
        A: Axis<T>,
    {
        let (x_size, _) = grid.shape();
        let mut values = grid.values().to_owned();
        let tally = loess_rows(
            grid,
            Band {
                start: 0,
                end: x_size,
            },
            window,
            &mut values.view_mut(),
        );

        if tally.unresolved > 0 {
            warn!(
                unresolved = tally.unresolved,
                nx = window.nx,
                ny = window.ny,
                "LOESS window too small for some undefined cells"
            );
        }
        LoessResult {
            values,
            filled: tally.filled,
            unresolved: tally.unresolved,
        }
    }
}
