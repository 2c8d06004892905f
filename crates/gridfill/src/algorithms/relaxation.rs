//! Gauss-Seidel relaxation of the discrete Laplace equation.
//!
//! ## Purpose
//!
//! This module implements one relaxation sweep over the undefined cells of a
//! grid. Each undefined cell moves toward the mean of its four neighbours:
//!
//! ```text
//! residual = relaxation * (0.25 * (left + right + below + above) - value)
//! value   += residual
//! ```
//!
//! ## Design notes
//!
//! * **In place**: Updates are written immediately, so later cells of the same
//!   sweep read already-updated neighbours (Gauss-Seidel, not Jacobi).
//! * **Scan order**: x outer, y inner. The parallel pipeline reproduces this
//!   order exactly by splitting y into bands and handing columns down the bands.
//! * **Column granularity**: `relax_column` is the unit of work shared by the
//!   sequential sweep and the pipelined one.
//!
//! ## Invariants
//!
//! * Only cells flagged in the mask are updated.
//! * The returned residual is the largest absolute correction applied.

// External dependencies
use core::ops::Range;
use ndarray::{ArrayView2, ArrayViewMut2};
use num_traits::Float;

// Internal dependencies
use crate::math::stencil::Stencil;
use crate::primitives::grid::CellAccess;

/// Relax the undefined cells of column `ix` for the rows in `rows`.
///
/// Returns the largest absolute correction applied in this segment.
#[inline]
pub fn relax_column<T, G>(
    grid: &mut G,
    mask: &ArrayView2<'_, bool>,
    stencil: &Stencil,
    ix: usize,
    rows: Range<usize>,
    relaxation: T,
) -> T
where
    T: Float,
    G: CellAccess<T> + ?Sized,
{
    let quarter = T::from(0.25).unwrap_or_else(T::zero);
    let (ix0, ix1) = stencil.x_neighbors(ix);

    let mut max_residual = T::zero();
    for iy in rows {
        if !mask[[ix, iy]] {
            continue;
        }
        let (iy0, iy1) = stencil.y_neighbors(iy);
        let value = grid.get(ix, iy);
        let residual = (quarter
            * (grid.get(ix0, iy) + grid.get(ix1, iy) + grid.get(ix, iy0) + grid.get(ix, iy1))
            - value)
            * relaxation;
        grid.set(ix, iy, value + residual);
        max_residual = max_residual.max(residual.abs());
    }
    max_residual
}

/// One sequential sweep over the whole grid.
///
/// Returns the maximum absolute residual of the sweep.
pub fn gauss_seidel_sweep<T: Float>(
    grid: &mut ArrayViewMut2<'_, T>,
    mask: &ArrayView2<'_, bool>,
    is_circle: bool,
    relaxation: T,
) -> T {
    let (x_size, y_size) = grid.dim();
    if x_size == 0 || y_size == 0 {
        return T::zero();
    }

    let stencil = Stencil::new(x_size, y_size, is_circle);
    let mut max_residual = T::zero();
    for ix in 0..x_size {
        let residual = relax_column(grid, mask, &stencil, ix, 0..y_size, relaxation);
        max_residual = max_residual.max(residual);
    }
    max_residual
}
