//! # gridfill: Filling undefined cells of regular grids
//!
//! Replaces the undefined (NaN) cells of a two-dimensional regular grid so
//! that the field can be handed to an interpolator that cannot cope with
//! missing values.
//!
//! ## Strategies
//!
//! * **Gauss-Seidel relaxation**: Solves the discrete Laplace equation over
//!   the undefined cells, in place, starting from a first guess (zero or
//!   zonal average). Supports a circular x axis (longitudes wrapping at ±180°).
//! * **LOESS**: Each undefined cell receives the tri-cube weighted mean of the
//!   defined cells of a rectangular window around it. Produces a new grid.
//!
//! This crate runs both strategies sequentially on the calling thread. The
//! `fastGridfill` crate runs them on several threads with identical results.
//!
//! ## Quick Start
//!
//! ### Gauss-Seidel
//!
//! ```rust
//! use gridfill::prelude::*;
//! use ndarray::array;
//!
//! let mut grid = array![
//!     [1.0, 1.0, 1.0],
//!     [1.0, f64::NAN, 1.0],
//!     [1.0, 1.0, 1.0],
//! ];
//!
//! let result = Fill::new()
//!     .first_guess(ZonalAverage)   // Seed with the mean of each line
//!     .max_iterations(100)         // Sweep budget
//!     .epsilon(1e-6)               // Stop when the largest correction is below this
//!     .adapter(GaussSeidel)
//!     .build()?
//!     .fill(&mut grid)?;
//!
//! assert_eq!(grid[[1, 1]], 1.0);
//! assert_eq!(result.termination, Termination::Converged);
//! # Result::<(), FillError>::Ok(())
//! ```
//!
//! ### LOESS
//!
//! ```rust
//! use gridfill::prelude::*;
//! use ndarray::Array2;
//!
//! let mut values = Array2::from_elem((5, 5), 2.0);
//! values[[2, 2]] = f64::NAN;
//!
//! let grid = Grid2D::new(RegularAxis::indexed(5), RegularAxis::indexed(5), &values)?;
//! let result = Fill::new()
//!     .half_window(2, 2)
//!     .adapter(Loess)
//!     .build()?
//!     .fill(&grid)?;
//!
//! assert_eq!(result.values[[2, 2]], 2.0);
//! assert!(values[[2, 2]].is_nan()); // the input is left untouched
//! # Result::<(), FillError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! Relaxation returns a [`RelaxationResult`](prelude::RelaxationResult) with
//! the number of sweeps, the last residual and the terminal state. Spending
//! the whole iteration budget is reported through
//! `Termination::BudgetExhausted`, not as an error. Errors
//! ([`FillError`](prelude::FillError)) are reserved for invalid arguments and
//! worker faults.
//!
//! ## Logging
//!
//! The crate emits `tracing` events (sweeps at `TRACE`, outcomes at `DEBUG`,
//! unresolved LOESS cells at `WARN`). Install a subscriber to see them.

// Layer 1: Primitives - errors, masks, collaborators, partitioning.
mod primitives;

// Layer 2: Math - kernel and stencil.
mod math;

// Layer 3: Algorithms - first guess, relaxation, LOESS.
mod algorithms;

// Layer 4: Engine - validation, convergence control, results.
mod engine;

// Layer 5: Adapters - strategy builders and processors.
mod adapters;

// High-level fluent API.
mod api;

// Standard gridfill prelude.
pub mod prelude {
    pub use crate::api::{
        Adapter::{GaussSeidel, Loess},
        Axis, Boundary, FillBuilder as Fill, FillError, FirstGuess,
        FirstGuess::{Zero, ZonalAverage},
        Grid2D, LoessResult, LoessWindow, RegularAxis, RelaxationResult, Termination,
    };
}

// Internal modules for extension crates and tests.
//
// This module re-exports internal modules so that `fastGridfill` can plug its
// parallel passes into the engine and tests can reach individual layers.
#[doc(hidden)]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
