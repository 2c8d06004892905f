//! Output types of fill operations.
//!
//! ## Purpose
//!
//! `RelaxationResult` reports the work performed by the relaxation solver
//! (the grid itself is filled in place). `LoessResult` carries the new grid
//! produced by LOESS together with the number of cells it filled.
//!
//! ## Key concepts
//!
//! * **Termination**: Which terminal state the convergence loop reached.
//!   Running out of iterations is a normal outcome, not an error.

// External dependencies
use core::fmt::{Display, Formatter, LowerExp, Result};
use ndarray::Array2;
use num_traits::Float;

// ============================================================================
// Relaxation
// ============================================================================

/// Terminal state of the convergence loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The grid had no undefined cell; nothing was done.
    NoUndefinedValues,

    /// The residual of the last sweep fell below the tolerance.
    Converged,

    /// The iteration budget was spent before reaching the tolerance.
    BudgetExhausted,
}

impl Termination {
    /// Get the name of the terminal state.
    pub const fn name(&self) -> &'static str {
        match self {
            Termination::NoUndefinedValues => "no undefined values",
            Termination::Converged => "converged",
            Termination::BudgetExhausted => "iteration budget exhausted",
        }
    }
}

/// Outcome of a relaxation fill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RelaxationResult<T> {
    /// Number of sweeps performed.
    pub iterations: usize,

    /// Maximum absolute residual of the last sweep.
    pub residual: T,

    /// Terminal state reached.
    pub termination: Termination,
}

impl<T: Float> RelaxationResult<T> {
    /// Result of a call that found nothing to fill.
    pub fn untouched() -> Self {
        Self {
            iterations: 0,
            residual: T::zero(),
            termination: Termination::NoUndefinedValues,
        }
    }

    /// Whether the tolerance was reached (or nothing had to be done).
    pub fn converged(&self) -> bool {
        self.termination != Termination::BudgetExhausted
    }
}

impl<T: Float + LowerExp> Display for RelaxationResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Iterations: {}", self.iterations)?;
        writeln!(f, "  Residual:   {:.6e}", self.residual)?;
        write!(f, "  Status:     {}", self.termination.name())
    }
}

// ============================================================================
// LOESS
// ============================================================================

/// Outcome of a LOESS fill.
#[derive(Debug, Clone, PartialEq)]
pub struct LoessResult<T> {
    /// The filled grid, same shape as the input.
    pub values: Array2<T>,

    /// Undefined cells that received a value.
    pub filled: usize,

    /// Undefined cells left undefined; a larger window is needed for them.
    pub unresolved: usize,
}

impl<T> LoessResult<T> {
    /// Whether every undefined cell received a value.
    pub fn is_complete(&self) -> bool {
        self.unresolved == 0
    }

    /// Consume the result, keeping only the grid.
    pub fn into_values(self) -> Array2<T> {
        self.values
    }
}

impl<T> Display for LoessResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let (nx, ny) = self.values.dim();
        writeln!(f, "Summary:")?;
        writeln!(f, "  Grid:       {nx}x{ny}")?;
        writeln!(f, "  Filled:     {}", self.filled)?;
        write!(f, "  Unresolved: {}", self.unresolved)
    }
}
