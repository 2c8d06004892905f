//! Tests for the LOESS cell estimate.
//!
//! ## Test Organization
//!
//! 1. **Estimate** - Weighted means on hand-checked windows
//! 2. **Zero Weight** - Cells that cannot be resolved
//! 3. **Rows** - Band output and tallies

use approx::assert_abs_diff_eq;
use ndarray::{Array2, array};

use gridfill::internals::algorithms::loess::{LoessTally, LoessWindow, loess_estimate, loess_rows};
use gridfill::internals::primitives::axis::RegularAxis;
use gridfill::internals::primitives::grid::Grid2D;
use gridfill::internals::primitives::partition::Band;

fn indexed(len: usize) -> RegularAxis<f64> {
    RegularAxis::indexed(len)
}

// ============================================================================
// Estimate Tests
// ============================================================================

/// Test the default half window.
#[test]
fn test_default_window() {
    assert_eq!(LoessWindow::default(), LoessWindow { nx: 5, ny: 5 });
}

/// Test that an isolated hole in a constant field gets the constant.
#[test]
fn test_estimate_constant_field() {
    let mut values = Array2::from_elem((7, 7), 1.0);
    values[[3, 3]] = f64::NAN;
    let grid = Grid2D::new(indexed(7), indexed(7), &values).unwrap();

    let estimate = loess_estimate(&grid, 3, 3, LoessWindow { nx: 3, ny: 3 });
    assert_eq!(estimate, Some(1.0));
}

/// Test tri-cube weighting along one axis.
///
/// The window of x index 2 with a half window of 2 is [1, 2, 3, 4]. Index 4
/// sits at normalised distance 1 and gets no weight, indexes 1 and 3 share
/// the same weight.
#[test]
fn test_estimate_tricube_weights() {
    let values = array![[2.0], [2.0], [f64::NAN], [4.0], [100.0]];
    let grid = Grid2D::new(indexed(5), indexed(1), &values).unwrap();

    let estimate = loess_estimate(&grid, 2, 0, LoessWindow { nx: 2, ny: 1 });
    assert_eq!(estimate, Some(3.0));
}

/// Test that the window wraps on a circular x axis.
#[test]
fn test_estimate_circular_axis() {
    let values = array![[f64::NAN], [2.0], [10.0], [10.0], [10.0], [4.0]];
    let window = LoessWindow { nx: 2, ny: 1 };

    // Window [0, 1, 2, 5]: index 5 is one step to the left of index 0
    let ring = Grid2D::new(indexed(6).circular(true), indexed(1), &values).unwrap();
    assert_eq!(loess_estimate(&ring, 0, 0, window), Some(3.0));

    // Window [0, 1, 2]: only index 1 carries weight
    let plain = Grid2D::new(indexed(6), indexed(1), &values).unwrap();
    assert_eq!(loess_estimate(&plain, 0, 0, window), Some(2.0));
}

/// Test a two-dimensional window on a smooth field.
#[test]
fn test_estimate_linear_field_centre() {
    let mut values = Array2::from_shape_fn((9, 9), |(ix, iy)| ix as f64 + iy as f64);
    values[[4, 4]] = f64::NAN;
    let grid = Grid2D::new(indexed(9), indexed(9), &values).unwrap();

    let estimate = loess_estimate(&grid, 4, 4, LoessWindow { nx: 2, ny: 2 }).unwrap();

    // Offsets of 2 sit on the kernel's edge, the remaining weights are symmetric
    assert_abs_diff_eq!(estimate, 8.0, epsilon = 1e-12);
}

// ============================================================================
// Zero Weight Tests
// ============================================================================

/// Test that a window without any defined cell gives no estimate.
#[test]
fn test_estimate_all_undefined() {
    let values = Array2::from_elem((5, 5), f64::NAN);
    let grid = Grid2D::new(indexed(5), indexed(5), &values).unwrap();

    assert_eq!(loess_estimate(&grid, 2, 2, LoessWindow { nx: 2, ny: 2 }), None);
}

/// Test that a defined neighbour on the kernel's edge carries no weight.
#[test]
fn test_estimate_neighbour_on_kernel_edge() {
    let mut values = Array2::from_elem((5, 5), f64::NAN);
    values[[4, 4]] = 3.0;
    let grid = Grid2D::new(indexed(5), indexed(5), &values).unwrap();
    let window = LoessWindow { nx: 1, ny: 1 };

    assert_eq!(loess_estimate(&grid, 3, 3, window), None);
    assert_eq!(loess_estimate(&grid, 3, 4, window), None);
}

// ============================================================================
// Row Tests
// ============================================================================

/// Test that a band writes only its own rows, offset to the band start.
#[test]
fn test_loess_rows_band() {
    let mut values = Array2::from_elem((6, 4), 2.0);
    values[[1, 1]] = f64::NAN;
    values[[4, 2]] = f64::NAN;
    let grid = Grid2D::new(indexed(6), indexed(4), &values).unwrap();

    let mut output = Array2::<f64>::zeros((3, 4));
    let tally = loess_rows(
        &grid,
        Band { start: 3, end: 6 },
        LoessWindow { nx: 2, ny: 2 },
        &mut output.view_mut(),
    );

    assert_eq!(
        tally,
        LoessTally {
            filled: 1,
            unresolved: 0,
        }
    );
    assert_abs_diff_eq!(output[[1, 2]], 2.0, epsilon = 1e-12);
    assert_eq!(output[[0, 0]], 2.0);
}

/// Test that tallies add up.
#[test]
fn test_tally_add_assign() {
    let mut total = LoessTally {
        filled: 2,
        unresolved: 1,
    };
    total += LoessTally {
        filled: 3,
        unresolved: 4,
    };
    assert_eq!(
        total,
        LoessTally {
            filled: 5,
            unresolved: 5,
        }
    );
}
