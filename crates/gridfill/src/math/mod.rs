//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the mathematical building blocks of both fill
//! strategies: the tri-cube kernel used by LOESS and the five-point Laplace
//! stencil used by the relaxation sweep.
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
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Tri-cube kernel.
pub mod kernel;

/// Laplace stencil neighbour indexing.
pub mod stencil;
