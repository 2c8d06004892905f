//! LOESS extrapolation of undefined cells.
//!
//! ## Purpose
//!
//! Each undefined cell receives the tri-cube weighted mean of the defined
//! cells found in a rectangular window around it. The window comes from the
//! axes' windowed index search in symmetric boundary mode.
//!
//! ## Design notes
//!
//! * **Input only**: Every estimate reads the input grid, never the output,
//!   so cells are independent and rows can be processed in any order.
//! * **Index units**: Offsets are measured in grid indexes (shortest way round
//!   on circular axes) and scaled by the half windows.
//!
//! ## Invariants
//!
//! * Defined cells are copied through unchanged.
//! * A cell whose window holds no defined neighbour with non-zero weight is
//!   copied through unchanged (it stays NaN).

// External dependencies
use core::ops::AddAssign;
use ndarray::ArrayViewMut2;
use num_traits::Float;

// Internal dependencies
use crate::math::kernel::{normalized_distance, tricube};
use crate::primitives::axis::{Axis, Boundary};
use crate::primitives::grid::Grid2D;
use crate::primitives::partition::Band;

/// Half window of the LOESS neighbourhood, in grid indexes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoessWindow {
    /// Number of points on each side along x.
    pub nx: u32,

    /// Number of points on each side along y.
    pub ny: u32,
}

impl Default for LoessWindow {
    fn default() -> Self {
        Self { nx: 5, ny: 5 }
    }
}

/// Counts of undefined cells handled by a LOESS pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoessTally {
    /// Undefined cells that received a value.
    pub filled: usize,

    /// Undefined cells left undefined (no weighted neighbour).
    pub unresolved: usize,
}

impl AddAssign for LoessTally {
    fn add_assign(&mut self, other: Self) {
        self.filled += other.filled;
        self.unresolved += other.unresolved;
    }
}

/// Weighted estimate of cell `(ix, iy)`, or `None` when the total weight is zero.
pub fn loess_estimate<T, A>(grid: &Grid2D<'_, T, A>, ix: usize, iy: usize, window: LoessWindow) -> Option<T>
where
    T: Float,
    A: Axis<T>,
{
    let x_axis = grid.x();
    let y_axis = grid.y();

    let x_frame = x_axis.find_indexes(x_axis.coordinate_value(ix), window.nx, Boundary::Sym);
    let y_frame = y_axis.find_indexes(y_axis.coordinate_value(iy), window.ny, Boundary::Sym);

    let mut value = T::zero();
    let mut weight = T::zero();
    for &wx in &x_frame {
        let dx = x_axis.offset(ix, wx);
        for &wy in &y_frame {
            let zi = grid.value(wx, wy);
            if zi.is_nan() {
                continue;
            }
            let dy = y_axis.offset(iy, wy);
            let wi = tricube::<T>(normalized_distance(dx, dy, window.nx, window.ny));
            value = value + wi * zi;
            weight = weight + wi;
        }
    }

    if weight == T::zero() {
        None
    } else {
        Some(value / weight)
    }
}

/// Fill the rows `rows` (x indexes) of `output` from `grid`.
///
/// `output` covers exactly the rows of the band: row 0 of `output` is row
/// `rows.start` of the grid.
pub fn loess_rows<T, A>(
    grid: &Grid2D<'_, T, A>,
    rows: Band,
    window: LoessWindow,
    output: &mut ArrayViewMut2<'_, T>,
) -> LoessTally
where
    T: Float,
    A: Axis<T>,
{
    let (_, y_size) = grid.shape();
    let mut tally = LoessTally::default();

    for (row, ix) in rows.range().enumerate() {
        for iy in 0..y_size {
            let z = grid.value(ix, iy);
            let resolved = if z.is_nan() {
                match loess_estimate(grid, ix, iy, window) {
                    Some(estimate) => {
                        tally.filled += 1;
                        estimate
                    }
                    None => {
                        tally.unresolved += 1;
                        z
                    }
                }
            } else {
                z
            };
            output[[row, iy]] = resolved;
        }
    }
    tally
}
