//! Tests for the execution engine.
//!
//! These tests verify the convergence controller and the LOESS driver:
//! - Early exit on grids without undefined cells
//! - First guess seeding and the sweep budget
//! - Convergence bookkeeping
//! - Injected passes and error propagation
//! - Configuration validation
//!
//! ## Test Organization
//!
//! 1. **Validation** - Relaxation, tolerance and window checks
//! 2. **Relaxation Controller** - States and counters
//! 3. **Injected Passes** - Custom sweep and zonal passes
//! 4. **LOESS Driver** - Output grid and tallies

use ndarray::{Array2, ArrayView2, ArrayViewMut2, s};

use gridfill::internals::algorithms::first_guess::FirstGuess;
use gridfill::internals::algorithms::loess::LoessWindow;
use gridfill::internals::engine::executor::{LoessExecutor, RelaxationConfig, RelaxationExecutor};
use gridfill::internals::engine::output::{RelaxationResult, Termination};
use gridfill::internals::engine::validator::Validator;
use gridfill::internals::primitives::axis::RegularAxis;
use gridfill::internals::primitives::errors::FillError;
use gridfill::internals::primitives::grid::Grid2D;

fn config(first_guess: FirstGuess, max_iterations: usize, epsilon: f64) -> RelaxationConfig<f64> {
    RelaxationConfig {
        first_guess,
        is_circle: false,
        max_iterations,
        epsilon,
        relaxation: 1.0,
        num_threads: 1,
        custom_sweep_pass: None,
        custom_zonal_pass: None,
    }
}

fn flat_with_hole() -> Array2<f64> {
    let mut grid = Array2::from_elem((5, 5), 1.0);
    grid[[2, 2]] = f64::NAN;
    grid
}

// ============================================================================
// Validation Tests
// ============================================================================

/// Test the accepted range of relaxation factors.
#[test]
fn test_validate_relaxation() {
    assert!(Validator::validate_relaxation(1.0).is_ok());
    assert!(Validator::validate_relaxation(1.9).is_ok());
    assert!(Validator::validate_relaxation(0.05).is_ok());

    assert_eq!(
        Validator::validate_relaxation(0.0),
        Err(FillError::InvalidRelaxation(0.0))
    );
    assert_eq!(
        Validator::validate_relaxation(2.0),
        Err(FillError::InvalidRelaxation(2.0))
    );
    assert!(matches!(
        Validator::validate_relaxation(f64::NAN),
        Err(FillError::InvalidRelaxation(_))
    ));
}

/// Test the accepted range of tolerances.
#[test]
fn test_validate_tolerance() {
    assert!(Validator::validate_tolerance(0.0).is_ok());
    assert!(Validator::validate_tolerance(1e-12).is_ok());

    assert_eq!(
        Validator::validate_tolerance(-1e-3),
        Err(FillError::InvalidTolerance(-1e-3))
    );
    assert!(matches!(
        Validator::validate_tolerance(f64::INFINITY),
        Err(FillError::InvalidTolerance(_))
    ));
}

/// Test that both half windows must be at least 1.
#[test]
fn test_validate_window() {
    assert!(Validator::validate_window(LoessWindow { nx: 1, ny: 1 }).is_ok());
    assert_eq!(
        Validator::validate_window(LoessWindow { nx: 0, ny: 3 }),
        Err(FillError::InvalidHalfWindow { axis: "x", got: 0 })
    );
    assert_eq!(
        Validator::validate_window(LoessWindow { nx: 3, ny: 0 }),
        Err(FillError::InvalidHalfWindow { axis: "y", got: 0 })
    );
}

// ============================================================================
// Relaxation Controller Tests
// ============================================================================

/// Test that a grid without undefined cells is left untouched.
#[test]
fn test_run_without_undefined_cells() {
    let mut grid = Array2::from_shape_fn((4, 6), |(ix, iy)| (ix * 6 + iy) as f64 * 0.1);
    let before = grid.clone();

    let result =
        RelaxationExecutor::run(&mut grid.view_mut(), &config(FirstGuess::Zero, 50, 1e-6)).unwrap();

    assert_eq!(result, RelaxationResult::untouched());
    assert_eq!(result.iterations, 0);
    assert_eq!(result.residual, 0.0);
    assert_eq!(result.termination, Termination::NoUndefinedValues);
    assert_eq!(grid, before);
}

/// Test the flat field with a hole seeded with zero.
///
/// The first sweep moves the hole from 0 to 1, the second one confirms it.
#[test]
fn test_run_flat_field_zero_guess() {
    let mut grid = flat_with_hole();

    let result =
        RelaxationExecutor::run(&mut grid.view_mut(), &config(FirstGuess::Zero, 50, 1e-6)).unwrap();

    assert_eq!(result.iterations, 2);
    assert_eq!(result.residual, 0.0);
    assert_eq!(result.termination, Termination::Converged);
    assert_eq!(grid[[2, 2]], 1.0);
}

/// Test the flat field with a hole seeded with the zonal average.
///
/// The seed is already the solution, so one sweep suffices.
#[test]
fn test_run_flat_field_zonal_guess() {
    let mut grid = flat_with_hole();

    let result = RelaxationExecutor::run(
        &mut grid.view_mut(),
        &config(FirstGuess::ZonalAverage, 50, 1e-6),
    )
    .unwrap();

    assert_eq!(result.iterations, 1);
    assert_eq!(result.residual, 0.0);
    assert!(result.converged());
    assert_eq!(grid[[2, 2]], 1.0);
}

/// Test that a zero budget only applies the first guess.
#[test]
fn test_run_zero_budget() {
    let mut grid = flat_with_hole();

    let result =
        RelaxationExecutor::run(&mut grid.view_mut(), &config(FirstGuess::Zero, 0, 1e-6)).unwrap();

    assert_eq!(result.iterations, 0);
    assert_eq!(result.residual, 0.0);
    assert_eq!(result.termination, Termination::BudgetExhausted);
    assert_eq!(grid[[2, 2]], 0.0);
}

/// Test that spending the budget is reported, not raised.
#[test]
fn test_run_budget_exhausted() {
    let mut grid = Array2::from_shape_fn((20, 20), |(ix, iy)| (ix + iy) as f64);
    grid.slice_mut(s![2..18, 2..18]).fill(f64::NAN);

    let result =
        RelaxationExecutor::run(&mut grid.view_mut(), &config(FirstGuess::Zero, 3, 0.0)).unwrap();

    assert_eq!(result.iterations, 3);
    assert!(result.residual > 0.0);
    assert_eq!(result.termination, Termination::BudgetExhausted);
    assert!(!result.converged());
    assert!(grid.iter().all(|value| !value.is_nan()));
}

/// Test the circular wrap through the controller.
#[test]
fn test_run_circular_axis() {
    let mut grid = Array2::<f64>::zeros((4, 3));
    grid.slice_mut(s![3, ..]).fill(8.0);
    grid[[0, 1]] = f64::NAN;

    let mut settings = config(FirstGuess::Zero, 10, 1e-12);
    settings.is_circle = true;
    let result = RelaxationExecutor::run(&mut grid.view_mut(), &settings).unwrap();

    assert_eq!(grid[[0, 1]], 2.0);
    assert_eq!(result.iterations, 2);
}

/// Test the summary printed for a relaxation result.
#[test]
fn test_relaxation_result_display() {
    let result = RelaxationResult {
        iterations: 2,
        residual: 0.0,
        termination: Termination::Converged,
    };
    let text = result.to_string();

    assert!(text.starts_with("Summary:"));
    assert!(text.contains("Iterations: 2"));
    assert!(text.contains("Status:     converged"));
}

// ============================================================================
// Injected Pass Tests
// ============================================================================

fn failing_sweep(
    _grid: &mut ArrayViewMut2<'_, f64>,
    _mask: &ArrayView2<'_, bool>,
    _is_circle: bool,
    _relaxation: f64,
    _num_threads: usize,
) -> Result<f64, FillError> {
    Err(FillError::WorkerFault {
        worker: 1,
        message: "injected".into(),
    })
}

fn sevens(
    grid: &mut ArrayViewMut2<'_, f64>,
    mask: &ArrayView2<'_, bool>,
    _num_threads: usize,
) -> Result<(), FillError> {
    ndarray::Zip::from(grid).and(mask).for_each(|value, &undefined| {
        if undefined {
            *value = 7.0;
        }
    });
    Ok(())
}

/// Test that an error from an injected sweep aborts the call.
#[test]
fn test_custom_sweep_error_propagates() {
    let mut grid = flat_with_hole();
    let mut settings = config(FirstGuess::Zero, 10, 1e-6);
    settings.custom_sweep_pass = Some(failing_sweep);

    let err = RelaxationExecutor::run(&mut grid.view_mut(), &settings).unwrap_err();
    assert_eq!(
        err,
        FillError::WorkerFault {
            worker: 1,
            message: "injected".into(),
        }
    );
}

/// Test that the zonal hook only replaces the zonal-average seeding.
#[test]
fn test_custom_zonal_pass() {
    let mut zonal = flat_with_hole();
    let mut settings = config(FirstGuess::ZonalAverage, 0, 1e-6);
    settings.custom_zonal_pass = Some(sevens);
    RelaxationExecutor::run(&mut zonal.view_mut(), &settings).unwrap();
    assert_eq!(zonal[[2, 2]], 7.0);

    let mut zero = flat_with_hole();
    settings.first_guess = FirstGuess::Zero;
    RelaxationExecutor::run(&mut zero.view_mut(), &settings).unwrap();
    assert_eq!(zero[[2, 2]], 0.0);
}

// ============================================================================
// LOESS Driver Tests
// ============================================================================

/// Test that a grid without undefined cells is copied unchanged.
#[test]
fn test_loess_without_undefined_cells() {
    let values = Array2::from_shape_fn((5, 4), |(ix, iy)| (ix * iy) as f64);
    let grid = Grid2D::new(RegularAxis::indexed(5), RegularAxis::indexed(4), &values).unwrap();

    let result = LoessExecutor::run(&grid, LoessWindow::default());

    assert_eq!(result.values, values);
    assert_eq!(result.filled, 0);
    assert!(result.is_complete());
}

/// Test that unresolved cells stay undefined and are counted.
#[test]
fn test_loess_unresolved_cells() {
    let mut values = Array2::from_elem((8, 8), f64::NAN);
    values[[0, 0]] = 4.0;
    values[[1, 0]] = 4.0;
    let grid = Grid2D::new(RegularAxis::indexed(8), RegularAxis::indexed(8), &values).unwrap();

    let result = LoessExecutor::run(&grid, LoessWindow { nx: 2, ny: 2 });

    assert_eq!(result.filled + result.unresolved, 62);
    assert!(result.unresolved > 0);
    assert!(result.values[[7, 7]].is_nan());
    assert_eq!(result.values[[0, 1]], 4.0);
    assert_eq!(result.values[[0, 0]], 4.0);
    assert!(!result.is_complete());
}
