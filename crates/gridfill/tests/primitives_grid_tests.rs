//! Tests for grid primitives: masks, partitions and the grid collaborator.
//!
//! ## Test Organization
//!
//! 1. **Mask** - Undefined-cell detection
//! 2. **Partition** - Band splitting across workers
//! 3. **Grid2D** - Shape checking and access

use ndarray::{Array2, array};

use gridfill::internals::primitives::axis::RegularAxis;
use gridfill::internals::primitives::errors::FillError;
use gridfill::internals::primitives::grid::{CellAccess, Grid2D};
use gridfill::internals::primitives::mask::{count_undefined, has_undefined, undefined_mask};
use gridfill::internals::primitives::partition::{Band, chunk_len, partition_bands};

// ============================================================================
// Mask Tests
// ============================================================================

/// Test that only NaN counts as undefined.
#[test]
fn test_mask_flags_nan_only() {
    let grid = array![
        [1.0, f64::NAN, f64::INFINITY],
        [f64::NEG_INFINITY, 0.0, f64::NAN]
    ];
    let mask = undefined_mask(&grid);

    assert_eq!(mask, array![[false, true, false], [false, false, true]]);
    assert_eq!(count_undefined(&mask.view()), 2);
    assert!(has_undefined(&grid));
}

/// Test a fully defined grid.
#[test]
fn test_mask_fully_defined() {
    let grid = Array2::<f64>::zeros((3, 3));
    assert!(!has_undefined(&grid));
    assert_eq!(count_undefined(&undefined_mask(&grid).view()), 0);
}

// ============================================================================
// Partition Tests
// ============================================================================

/// Test that the last band absorbs the remainder.
#[test]
fn test_partition_remainder_in_last_band() {
    let bands = partition_bands(10, 3);
    assert_eq!(
        bands,
        vec![
            Band { start: 0, end: 3 },
            Band { start: 3, end: 6 },
            Band { start: 6, end: 10 },
        ]
    );
    assert_eq!(bands[2].len(), 4);
}

/// Test that there are never more bands than indexes.
#[test]
fn test_partition_more_parts_than_indexes() {
    let bands = partition_bands(2, 5);
    assert_eq!(bands.len(), 2);
    assert!(bands.iter().all(|band| !band.is_empty()));
}

/// Test degenerate requests.
#[test]
fn test_partition_degenerate() {
    assert_eq!(partition_bands(0, 4), vec![Band { start: 0, end: 0 }]);
    assert_eq!(partition_bands(7, 0), vec![Band { start: 0, end: 7 }]);
}

/// Test that bands are contiguous and cover the whole range.
#[test]
fn test_partition_covers_range() {
    for len in 1..30 {
        for parts in 1..9 {
            let bands = partition_bands(len, parts);
            assert_eq!(bands.len(), parts.min(len));
            assert_eq!(bands[0].start, 0);
            assert_eq!(bands[bands.len() - 1].end, len);
            for pair in bands.windows(2) {
                assert_eq!(pair[0].end, pair[1].start);
            }
            assert!(bands.iter().all(|band| !band.is_empty()));
        }
    }
}

/// Test chunk lengths for even chunking.
#[test]
fn test_chunk_len() {
    assert_eq!(chunk_len(10, 3), 4);
    assert_eq!(chunk_len(9, 3), 3);
    assert_eq!(chunk_len(0, 3), 1);
    assert_eq!(chunk_len(5, 0), 5);
}

// ============================================================================
// Grid2D Tests
// ============================================================================

/// Test that the values must match the axes.
#[test]
fn test_grid_shape_mismatch() {
    let values = Array2::<f64>::zeros((3, 4));
    let result = Grid2D::new(RegularAxis::indexed(4), RegularAxis::indexed(3), &values);

    assert_eq!(
        result.err(),
        Some(FillError::ShapeMismatch {
            expected: (4, 3),
            got: (3, 4),
        })
    );
}

/// Test value access through the grid.
#[test]
fn test_grid_access() {
    let values = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
    let grid = Grid2D::new(RegularAxis::indexed(2), RegularAxis::indexed(3), &values).unwrap();

    assert_eq!(grid.shape(), (2, 3));
    assert_eq!(grid.value(1, 2), 6.0);
    assert_eq!(grid.values()[[0, 1]], 2.0);
}

/// Test cell access on a mutable view.
#[test]
fn test_cell_access_on_view() {
    let mut values = Array2::<f64>::zeros((2, 2));
    let mut view = values.view_mut();
    CellAccess::set(&mut view, 1, 0, 3.5);
    assert_eq!(CellAccess::get(&view, 1, 0), 3.5);
    assert_eq!(values[[1, 0]], 3.5);
}
