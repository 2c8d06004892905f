//! Error types for grid filling operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while filling the
//! undefined cells of a grid: configuration errors caught before any work is
//! done, collaborator mismatches, and faults raised by worker threads.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending value (e.g., the rejected relaxation factor).
//! * **Deferred**: Builder misuse is recorded and reported by `build()`.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error`.
//!
//! ## Key concepts
//!
//! 1. **Invalid arguments**: Out-of-range relaxation factor, tolerance, window or first guess.
//! 2. **Collaborator mismatch**: Grid values whose shape disagrees with its axes.
//! 3. **Worker faults**: A worker thread panicked during a sweep or a LOESS pass.
//!
//! ## Non-goals
//!
//! * Exhausting the iteration budget is not an error (see `Termination`).
//! * A LOESS cell without defined neighbours is not an error; it stays undefined.

// External dependencies
use std::error::Error;
use std::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for grid filling operations.
#[derive(Debug, Clone, PartialEq)]
pub enum FillError {
    /// Generic invalid input error with a descriptive message.
    InvalidInput(String),

    /// The requested first guess is not a known strategy.
    InvalidFirstGuess(String),

    /// Relaxation factor must be finite and strictly between 0 and 2.
    InvalidRelaxation(f64),

    /// Convergence tolerance must be finite and non-negative.
    InvalidTolerance(f64),

    /// LOESS half window must contain at least one point.
    InvalidHalfWindow {
        /// Axis the half window applies to ("x" or "y").
        axis: &'static str,
        /// The half window provided.
        got: u32,
    },

    /// The grid values do not match the shape described by its axes.
    ShapeMismatch {
        /// Shape described by the axes `(x, y)`.
        expected: (usize, usize),
        /// Shape of the values.
        got: (usize, usize),
    },

    /// Selected adapter does not support the requested parameter.
    UnsupportedFeature {
        /// Name of the adapter (e.g., "GaussSeidel", "Loess").
        adapter: &'static str,
        /// Name of the unsupported feature.
        feature: &'static str,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },

    /// The per-call worker pool could not be created.
    ThreadPool(String),

    /// A worker thread panicked; the payload is rendered into `message`.
    WorkerFault {
        /// Index of the faulting worker (band number).
        worker: usize,
        /// Panic message of the worker.
        message: String,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for FillError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            Self::InvalidFirstGuess(kind) => write!(f, "Invalid guess type: {kind}"),
            Self::InvalidRelaxation(value) => {
                write!(f, "Invalid relaxation: {value} (must be > 0 and < 2)")
            }
            Self::InvalidTolerance(tol) => {
                write!(f, "Invalid tolerance: {tol} (must be >= 0 and finite)")
            }
            Self::InvalidHalfWindow { axis, got } => {
                write!(f, "Invalid half window along {axis}: {got} (must be >= 1)")
            }
            Self::ShapeMismatch { expected, got } => {
                write!(
                    f,
                    "Shape mismatch: axes describe {}x{}, values are {}x{}",
                    expected.0, expected.1, got.0, got.1
                )
            }
            Self::UnsupportedFeature { adapter, feature } => {
                write!(f, "Adapter '{adapter}' does not support feature: {feature}")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
            Self::ThreadPool(msg) => write!(f, "Unable to start worker threads: {msg}"),
            Self::WorkerFault { worker, message } => {
                write!(f, "Worker {worker} failed: {message}")
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

impl Error for FillError {}
