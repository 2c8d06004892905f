//! Layer 4: Engine
//!
//! This layer provides the parallel passes injected into the `gridfill`
//! engine, the parallel LOESS driver, and the worker bookkeeping they share.

// Worker count resolution and the hardware concurrency probe.
pub mod threads;

// Per-call pools and worker outcome settlement.
pub mod dispatch;

// Pipelined Gauss-Seidel sweep.
pub mod pipeline;

// Parallel zonal-average first guess.
pub mod zonal;

// Parallel LOESS extrapolation.
pub mod loess;
