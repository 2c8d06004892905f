//! Undefined-cell masks.
//!
//! A mask is a boolean matrix of the grid's shape, `true` where the grid
//! holds NaN. It is computed once per fill call, before the first guess is
//! applied, and is never recomputed from the mutated grid: cells that acquire
//! a value during relaxation keep being treated as fillable until the call
//! returns.

// External dependencies
use ndarray::{Array2, ArrayBase, ArrayView2, Data, Ix2};
use num_traits::Float;

/// Flag every NaN cell of `grid`.
pub fn undefined_mask<T, S>(grid: &ArrayBase<S, Ix2>) -> Array2<bool>
where
    T: Float,
    S: Data<Elem = T>,
{
    grid.mapv(|value| value.is_nan())
}

/// Whether `grid` holds at least one NaN cell.
pub fn has_undefined<T, S>(grid: &ArrayBase<S, Ix2>) -> bool
where
    T: Float,
    S: Data<Elem = T>,
{
    grid.iter().any(|value| value.is_nan())
}

/// Number of cells flagged in `mask`.
pub fn count_undefined(mask: &ArrayView2<'_, bool>) -> usize {
    mask.iter().filter(|&&undefined| undefined).count()
}
