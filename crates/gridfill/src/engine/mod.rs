//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates the fill strategies: configuration validation,
//! the relaxation convergence controller, the sequential LOESS driver and
//! the result types.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Convergence controller and LOESS driver.
pub mod executor;

/// Result types.
pub mod output;

/// Configuration validation.
pub mod validator;
