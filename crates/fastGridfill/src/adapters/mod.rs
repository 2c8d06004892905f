//! Layer 5: Adapters
//!
//! This layer wraps the `gridfill` strategy builders with multi-threaded
//! execution:
//!
//! - **GaussSeidel**: Pipelined relaxation, in place
//! - **Loess**: Row-parallel extrapolation into a new grid

// Parallel Gauss-Seidel relaxation.
pub mod relaxation;

// Parallel LOESS extrapolation.
pub mod loess;
