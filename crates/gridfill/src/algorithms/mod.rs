//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer provides the numerical algorithms of the two fill strategies:
//! the first guess, the Gauss-Seidel relaxation sweep and the LOESS estimate.
//! All of them are sequential; the parallel extension crate distributes them
//! across threads without changing their arithmetic.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// First guess strategies.
pub mod first_guess;

/// Gauss-Seidel relaxation sweep.
pub mod relaxation;

/// LOESS extrapolation.
pub mod loess;
