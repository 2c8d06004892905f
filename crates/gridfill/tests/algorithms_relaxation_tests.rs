//! Tests for the Gauss-Seidel relaxation sweep.
//!
//! These tests verify:
//! - The residual formula and the relaxation factor
//! - In-place (Gauss-Seidel) propagation within a sweep
//! - That defined cells are never touched
//! - Residual behaviour over successive sweeps
//!
//! ## Test Organization
//!
//! 1. **Single Column** - `relax_column` on small grids
//! 2. **Full Sweep** - `gauss_seidel_sweep` semantics
//! 3. **Convergence** - Residuals across sweeps

use approx::assert_abs_diff_eq;
use ndarray::{Array2, array, s};

use gridfill::internals::algorithms::first_guess::apply_zero;
use gridfill::internals::algorithms::relaxation::{gauss_seidel_sweep, relax_column};
use gridfill::internals::math::stencil::Stencil;
use gridfill::internals::primitives::mask::undefined_mask;

fn smooth_field(x_size: usize, y_size: usize) -> Array2<f64> {
    Array2::from_shape_fn((x_size, y_size), |(ix, iy)| {
        (ix as f64 * 0.4).sin() + (iy as f64 * 0.3).cos() + 2.0
    })
}

// ============================================================================
// Single Column Tests
// ============================================================================

/// Test one update of an isolated cell.
#[test]
fn test_relax_column_single_cell() {
    let mut grid = array![[1.0, 1.0, 1.0], [1.0, f64::NAN, 1.0], [1.0, 1.0, 1.0]];
    let mask = undefined_mask(&grid);
    let mut view = grid.view_mut();
    apply_zero(&mut view, &mask.view());

    let stencil = Stencil::new(3, 3, false);
    let residual = relax_column(&mut view, &mask.view(), &stencil, 1, 0..3, 1.0);

    assert_eq!(residual, 1.0);
    assert_eq!(grid[[1, 1]], 1.0);
}

/// Test that the relaxation factor scales the correction.
#[test]
fn test_relax_column_over_relaxation() {
    let mut grid = array![[1.0, 1.0, 1.0], [1.0, 0.0, 1.0], [1.0, 1.0, 1.0]];
    let mut mask = Array2::from_elem((3, 3), false);
    mask[[1, 1]] = true;

    let stencil = Stencil::new(3, 3, false);
    let residual = relax_column(&mut grid.view_mut(), &mask.view(), &stencil, 1, 0..3, 1.5);

    assert_eq!(residual, 1.5);
    assert_eq!(grid[[1, 1]], 1.5);
}

/// Test that only the requested rows are relaxed.
#[test]
fn test_relax_column_row_range() {
    let mut grid = Array2::<f64>::zeros((3, 4));
    grid.slice_mut(s![0, ..]).fill(4.0);
    let mut mask = Array2::from_elem((3, 4), false);
    mask.slice_mut(s![1, ..]).fill(true);

    let stencil = Stencil::new(3, 4, false);
    relax_column(&mut grid.view_mut(), &mask.view(), &stencil, 1, 2..4, 1.0);

    assert_eq!(grid[[1, 0]], 0.0);
    assert_eq!(grid[[1, 1]], 0.0);
    assert_eq!(grid[[1, 2]], 1.0);
    assert_eq!(grid[[1, 3]], 1.5);
}

// ============================================================================
// Full Sweep Tests
// ============================================================================

/// Test that updates are visible to later cells of the same sweep.
///
/// A Jacobi update would leave the last cell at 0.
#[test]
fn test_sweep_is_gauss_seidel() {
    let mut grid = array![[4.0], [f64::NAN], [f64::NAN]];
    let mask = undefined_mask(&grid);
    apply_zero(&mut grid.view_mut(), &mask.view());

    let residual = gauss_seidel_sweep(&mut grid.view_mut(), &mask.view(), false, 1.0);

    assert_eq!(residual, 1.0);
    assert_eq!(grid, array![[4.0], [1.0], [0.5]]);
}

/// Test that defined cells are unchanged by a sweep.
#[test]
fn test_sweep_leaves_defined_cells() {
    let mut grid = smooth_field(8, 8);
    let reference = grid.clone();
    grid[[3, 4]] = f64::NAN;
    grid[[6, 1]] = f64::NAN;
    let mask = undefined_mask(&grid);
    apply_zero(&mut grid.view_mut(), &mask.view());

    gauss_seidel_sweep(&mut grid.view_mut(), &mask.view(), false, 1.0);

    for ((index, &value), &undefined) in grid.indexed_iter().zip(mask.iter()) {
        if !undefined {
            assert_eq!(value, reference[index]);
        }
    }
}

/// Test the circular left neighbour of column 0.
#[test]
fn test_sweep_circular_wrap() {
    let mut wrapped = Array2::<f64>::zeros((4, 3));
    wrapped.slice_mut(s![3, ..]).fill(8.0);
    wrapped[[0, 1]] = f64::NAN;
    let mut plain = wrapped.clone();

    let mask = undefined_mask(&wrapped);
    apply_zero(&mut wrapped.view_mut(), &mask.view());
    apply_zero(&mut plain.view_mut(), &mask.view());

    gauss_seidel_sweep(&mut wrapped.view_mut(), &mask.view(), true, 1.0);
    gauss_seidel_sweep(&mut plain.view_mut(), &mask.view(), false, 1.0);

    assert_eq!(wrapped[[0, 1]], 2.0);
    assert_eq!(plain[[0, 1]], 0.0);
}

/// Test degenerate grids.
#[test]
fn test_sweep_empty_and_single_cell() {
    let mut empty = Array2::<f64>::zeros((0, 3));
    let mask = undefined_mask(&empty);
    assert_eq!(
        gauss_seidel_sweep(&mut empty.view_mut(), &mask.view(), false, 1.0),
        0.0
    );

    // A lone cell is its own neighbour on both axes
    let mut single = array![[f64::NAN]];
    let mask = undefined_mask(&single);
    apply_zero(&mut single.view_mut(), &mask.view());
    assert_eq!(
        gauss_seidel_sweep(&mut single.view_mut(), &mask.view(), true, 1.0),
        0.0
    );
    assert_eq!(single[[0, 0]], 0.0);
}

// ============================================================================
// Convergence Tests
// ============================================================================

/// Test that residuals never increase for relaxation factors in (0, 1].
#[test]
fn test_residual_non_increasing() {
    for relaxation in [1.0, 0.7, 0.3] {
        let mut grid = smooth_field(16, 12);
        grid.slice_mut(s![4..12, 3..9]).fill(f64::NAN);
        let mask = undefined_mask(&grid);
        apply_zero(&mut grid.view_mut(), &mask.view());

        let mut previous = f64::INFINITY;
        for _ in 0..60 {
            let residual = gauss_seidel_sweep(&mut grid.view_mut(), &mask.view(), false, relaxation);
            assert!(
                residual <= previous * (1.0 + 1e-12) + 1e-15,
                "residual grew from {previous} to {residual} (relaxation {relaxation})"
            );
            previous = residual;
        }
    }
}

/// Test that a harmonic field is recovered.
///
/// A linear field solves the discrete Laplace equation exactly.
#[test]
fn test_sweeps_recover_linear_field() {
    let reference = Array2::from_shape_fn((10, 8), |(ix, iy)| 0.5 * ix as f64 - iy as f64 + 3.0);
    let mut grid = reference.clone();
    grid.slice_mut(s![3..7, 2..6]).fill(f64::NAN);
    let mask = undefined_mask(&grid);
    apply_zero(&mut grid.view_mut(), &mask.view());

    for _ in 0..500 {
        if gauss_seidel_sweep(&mut grid.view_mut(), &mask.view(), false, 1.0) < 1e-13 {
            break;
        }
    }

    for (&value, &expected) in grid.iter().zip(reference.iter()) {
        assert_abs_diff_eq!(value, expected, epsilon = 1e-10);
    }
}
