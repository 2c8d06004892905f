//! # fastGridfill: Multi-threaded filling of undefined grid cells
//!
//! Parallel extension of [`gridfill`]. Both strategies produce exactly the
//! values of the sequential crate, whatever the number of workers:
//!
//! * **Gauss-Seidel relaxation** runs as a pipeline. The y axis is split into
//!   bands, one per worker, and each column is handed from band to band
//!   through atomic cursors so that every cell is updated in the sequential
//!   scan order.
//! * **LOESS** splits the rows of the output across a per-call `rayon` pool;
//!   cells are independent, so no synchronization is needed.
//!
//! ## Quick Start
//!
//! ```rust
//! use fastGridfill::prelude::*;
//! use ndarray::Array2;
//!
//! // A smooth field with a hole in the middle
//! let mut grid = Array2::from_shape_fn((16, 12), |(ix, iy)| ix as f64 + 2.0 * iy as f64);
//! grid[[7, 5]] = f64::NAN;
//! grid[[8, 5]] = f64::NAN;
//!
//! let result = Fill::new()
//!     .first_guess(ZonalAverage)
//!     .epsilon(1e-10)
//!     .num_threads(4)          // 0 (the default) uses every core
//!     .adapter(GaussSeidel)
//!     .build()?
//!     .fill(&mut grid)?;
//!
//! assert!(result.converged());
//! assert!((grid[[7, 5]] - 17.0).abs() < 1e-6);
//! # Result::<(), FillError>::Ok(())
//! ```
//!
//! The flat functions [`gauss_seidel`](prelude::gauss_seidel) and
//! [`loess`](prelude::loess) cover the same ground without the builder.
//!
//! ## Threads
//!
//! A fresh set of workers is created for every call and joined before it
//! returns. A worker count of 0 asks
//! [`hardware_concurrency`](prelude::hardware_concurrency); the probe can be
//! replaced on the builders. A panic inside a worker is reported as
//! `FillError::WorkerFault` once every worker has stopped.

#![allow(non_snake_case)]

// Layer 4: Engine - parallel passes and worker bookkeeping.
mod engine;

// Layer 5: Adapters - parallel strategy builders.
mod adapters;

// High-level fluent API and flat entry points.
mod api;

// Standard fastGridfill prelude.
pub mod prelude {
    pub use crate::api::{
        Adapter::{GaussSeidel, Loess},
        Axis, Boundary, FillBuilder as Fill, FillError, FirstGuess,
        FirstGuess::{Zero, ZonalAverage},
        Grid2D, LoessResult, LoessWindow, RegularAxis, RelaxationResult, Termination,
        gauss_seidel, hardware_concurrency, loess,
    };
}

// Internal modules for development and testing.
#[doc(hidden)]
pub mod internals {
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
