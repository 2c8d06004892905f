//! Five-point Laplace stencil neighbour indexing.
//!
//! ## Purpose
//!
//! Gives, for every cell `(ix, iy)`, the indexes of its left/right and
//! below/above neighbours used by the relaxation update.
//!
//! ## Key concepts
//!
//! * **Circular x axis**: The left neighbour of column 0 is the last column
//!   and the right neighbour of the last column is column 0.
//! * **Clamped edges**: Otherwise an edge cell reuses its single interior
//!   neighbour on both sides (zero-gradient boundary). The y axis is always
//!   clamped.
//!
//! ## Invariants
//!
//! * Returned indexes are always in range.
//! * An axis with a single point is its own neighbour.

/// Neighbour lookup for a grid of fixed shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stencil {
    x_size: usize,
    y_size: usize,
    is_circle: bool,
}

impl Stencil {
    /// Stencil for an `x_size` by `y_size` grid.
    pub fn new(x_size: usize, y_size: usize, is_circle: bool) -> Self {
        Self {
            x_size,
            y_size,
            is_circle,
        }
    }

    /// Number of points along x.
    #[inline]
    pub fn x_size(&self) -> usize {
        self.x_size
    }

    /// Number of points along y.
    #[inline]
    pub fn y_size(&self) -> usize {
        self.y_size
    }

    /// `(left, right)` neighbours of column `ix`.
    #[inline]
    pub fn x_neighbors(&self, ix: usize) -> (usize, usize) {
        let last = self.x_size - 1;
        if self.is_circle {
            let left = if ix == 0 { last } else { ix - 1 };
            let right = if ix == last { 0 } else { ix + 1 };
            (left, right)
        } else {
            clamped(ix, last)
        }
    }

    /// `(below, above)` neighbours of row `iy`.
    #[inline]
    pub fn y_neighbors(&self, iy: usize) -> (usize, usize) {
        clamped(iy, self.y_size - 1)
    }
}

// Zero-gradient neighbours of `index` on an axis whose last index is `last`.
#[inline]
fn clamped(index: usize, last: usize) -> (usize, usize) {
    let interior_after = (index + 1).min(last);
    let interior_before = index.saturating_sub(1);
    let before = if index == 0 { interior_after } else { interior_before };
    let after = if index == last { interior_before } else { interior_after };
    (before, after)
}
