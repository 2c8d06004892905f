//! Grid collaborators.
//!
//! ## Purpose
//!
//! Two views of a grid are used by the fill core:
//!
//! * `Grid2D` pairs an immutable matrix of values with its x and y axes.
//!   LOESS reads it; it never mutates it.
//! * `CellAccess` is the minimal read/write capability the relaxation sweep
//!   needs. The sequential sweep uses it on an `ndarray` view; the parallel
//!   extension implements it over a shared pointer to the same storage.
//!
//! ## Invariants
//!
//! * The value matrix is indexed `(ix, iy)`: axis 0 follows x, axis 1 follows y.
//! * `Grid2D` values have exactly `(x.len(), y.len())` cells.

// External dependencies
use ndarray::{ArrayBase, ArrayView2, ArrayViewMut2, Data, Ix2};
use num_traits::Float;

// Internal dependencies
use crate::primitives::axis::Axis;
use crate::primitives::errors::FillError;

// ============================================================================
// Cell Access
// ============================================================================

/// Read/write access to the cells of a grid indexed `(ix, iy)`.
pub trait CellAccess<T> {
    /// Value at `(ix, iy)`.
    fn get(&self, ix: usize, iy: usize) -> T;

    /// Overwrite the value at `(ix, iy)`.
    fn set(&mut self, ix: usize, iy: usize, value: T);
}

impl<T: Copy> CellAccess<T> for ArrayViewMut2<'_, T> {
    #[inline]
    fn get(&self, ix: usize, iy: usize) -> T {
        self[[ix, iy]]
    }

    #[inline]
    fn set(&mut self, ix: usize, iy: usize, value: T) {
        self[[ix, iy]] = value;
    }
}

// ============================================================================
// Grid2D
// ============================================================================

/// Cartesian grid: two axes and the values defined on their nodes.
#[derive(Debug, Clone)]
pub struct Grid2D<'a, T, A> {
    x: A,
    y: A,
    values: ArrayView2<'a, T>,
}

impl<'a, T: Float, A: Axis<T>> Grid2D<'a, T, A> {
    /// Pair `values` with its axes, checking that the shapes agree.
    pub fn new<S>(x: A, y: A, values: &'a ArrayBase<S, Ix2>) -> Result<Self, FillError>
    where
        S: Data<Elem = T>,
    {
        let expected = (x.len(), y.len());
        let got = values.dim();
        if expected != got {
            return Err(FillError::ShapeMismatch { expected, got });
        }
        Ok(Self {
            x,
            y,
            values: values.view(),
        })
    }

    /// The x axis (axis 0 of the values).
    #[inline]
    pub fn x(&self) -> &A {
        &self.x
    }

    /// The y axis (axis 1 of the values).
    #[inline]
    pub fn y(&self) -> &A {
        &self.y
    }

    /// The values of the grid.
    #[inline]
    pub fn values(&self) -> &ArrayView2<'a, T> {
        &self.values
    }

    /// Value at `(ix, iy)`.
    #[inline]
    pub fn value(&self, ix: usize, iy: usize) -> T {
        self.values[[ix, iy]]
    }

    /// Shape `(x.len(), y.len())`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        self.values.dim()
    }
}
