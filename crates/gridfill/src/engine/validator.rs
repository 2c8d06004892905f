//! Configuration validation for grid filling.
//!
//! ## Purpose
//!
//! Checks every configuration value before any work is done, so invalid
//! arguments are reported before a single thread is spawned.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Non-goals
//!
//! * This module does not inspect the grid values (NaN cells are the input, not an error).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::loess::LoessWindow;
use crate::primitives::errors::FillError;

/// Validation utility for fill configuration.
pub struct Validator;

impl Validator {
    /// Validate the relaxation factor: finite and in (0, 2).
    pub fn validate_relaxation<T: Float>(relaxation: T) -> Result<(), FillError> {
        let two = T::one() + T::one();
        if !relaxation.is_finite() || relaxation <= T::zero() || relaxation >= two {
            return Err(FillError::InvalidRelaxation(
                relaxation.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the convergence tolerance: finite and non-negative.
    pub fn validate_tolerance<T: Float>(epsilon: T) -> Result<(), FillError> {
        if !epsilon.is_finite() || epsilon < T::zero() {
            return Err(FillError::InvalidTolerance(
                epsilon.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the LOESS half window: at least one point on each axis.
    pub fn validate_window(window: LoessWindow) -> Result<(), FillError> {
        if window.nx == 0 {
            return Err(FillError::InvalidHalfWindow {
                axis: "x",
                got: window.nx,
            });
        }
        if window.ny == 0 {
            return Err(FillError::InvalidHalfWindow {
                axis: "y",
                got: window.ny,
            });
        }
        Ok(())
    }
}
