//! Axis collaborators for windowed neighbour search.
//!
//! ## Purpose
//!
//! LOESS needs, for every undefined cell, the indexes of the cells within a
//! rectangular window around it. This module defines the `Axis` capability
//! set the fill core relies on (coordinate lookup, windowed index search,
//! periodicity) and a `RegularAxis` implementation for evenly spaced axes.
//!
//! ## Design notes
//!
//! * **Interface first**: The fill core only talks to `Axis`, never to a storage layout.
//! * **Boundary handling**: Out-of-range window indexes are resolved per `Boundary`.
//! * **Circular axes**: Always wrap, whatever boundary is requested.
//!
//! ## Key concepts
//!
//! * **Interval**: The pair of consecutive indexes `(i0, i1)` enclosing a coordinate.
//! * **Window**: `half_window` indexes on each side of the interval, deduplicated and sorted.
//!
//! ## Invariants
//!
//! * Returned indexes are always `< len`.
//! * A window never holds the same index twice, so it may hold fewer than
//!   `2 * half_window` indexes near the edges of the axis.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::FillError;

/// Tolerance, in units of one step, under which a coordinate snaps to a node.
const NODE_SNAP: f64 = 1e-9;

// ============================================================================
// Boundary
// ============================================================================

/// Policy for window indexes falling outside a non-circular axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Boundary {
    /// Clamp to the first or last index.
    Expand,

    /// Wrap around as if the axis were periodic.
    Wrap,

    /// Mirror around the first or last index.
    #[default]
    Sym,

    /// Give up: the whole window is reported as empty.
    Undef,
}

/// Outcome of resolving one window index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The index maps to a valid position.
    Inside(usize),

    /// The index cannot be mapped and is dropped from the window.
    Outside,

    /// The window must be abandoned.
    Abort,
}

impl Boundary {
    /// Map a possibly out-of-range `index` onto an axis of `len` points.
    pub fn resolve(self, index: i64, len: usize) -> Resolution {
        let n = len as i64;
        if n == 0 {
            return Resolution::Outside;
        }
        if (0..n).contains(&index) {
            return Resolution::Inside(index as usize);
        }

        let mapped = match self {
            Boundary::Expand => index.clamp(0, n - 1),
            Boundary::Wrap => index.rem_euclid(n),
            Boundary::Sym => {
                if index < 0 {
                    -index
                } else {
                    2 * (n - 1) - index
                }
            }
            Boundary::Undef => return Resolution::Abort,
        };

        if (0..n).contains(&mapped) {
            Resolution::Inside(mapped as usize)
        } else {
            Resolution::Outside
        }
    }
}

// ============================================================================
// Axis Trait
// ============================================================================

/// Capability set of a grid axis.
pub trait Axis<T: Float> {
    /// Number of points on the axis.
    fn len(&self) -> usize;

    /// Whether the axis holds no point.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Coordinate of the point at `index`.
    fn coordinate_value(&self, index: usize) -> T;

    /// Whether the last and first points are neighbours.
    fn is_circle(&self) -> bool;

    /// Indexes of the window of `half_window` points on each side of `coordinate`.
    ///
    /// An empty vector means no window could be built (coordinate outside
    /// the axis, or `Boundary::Undef` hit an edge).
    fn find_indexes(&self, coordinate: T, half_window: u32, boundary: Boundary) -> Vec<usize>;

    /// Signed index distance from `from` to `to`, shortest way round on circles.
    fn offset(&self, from: usize, to: usize) -> isize {
        let len = self.len() as isize;
        let delta = to as isize - from as isize;
        if !self.is_circle() || len == 0 {
            return delta;
        }
        let wrapped = delta.rem_euclid(len);
        if wrapped > len / 2 {
            wrapped - len
        } else {
            wrapped
        }
    }
}

// ============================================================================
// Regular Axis
// ============================================================================

/// Evenly spaced axis: `start + index * step`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegularAxis<T> {
    start: T,
    step: T,
    len: usize,
    circle: bool,
}

impl<T: Float> RegularAxis<T> {
    /// Create an axis of `len` points starting at `start`, spaced by `step`.
    pub fn new(start: T, step: T, len: usize) -> Result<Self, FillError> {
        if !start.is_finite() || !step.is_finite() || step == T::zero() {
            return Err(FillError::InvalidInput(format!(
                "axis start={} step={} must be finite with a non-zero step",
                start.to_f64().unwrap_or(f64::NAN),
                step.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(Self {
            start,
            step,
            len,
            circle: false,
        })
    }

    /// Axis whose coordinates are the indexes themselves.
    pub fn indexed(len: usize) -> Self {
        Self {
            start: T::zero(),
            step: T::one(),
            len,
            circle: false,
        }
    }

    /// Mark the axis as circular (e.g., longitudes wrapping at ±180°).
    pub fn circular(mut self, circle: bool) -> Self {
        self.circle = circle;
        self
    }

    /// Spacing between consecutive points.
    pub fn step(&self) -> T {
        self.step
    }

    /// Consecutive indexes `(i0, i1)` enclosing `coordinate`.
    pub fn find_interval(&self, coordinate: T) -> Option<(usize, usize)> {
        if self.len == 0 || !coordinate.is_finite() {
            return None;
        }
        if self.len == 1 {
            return Some((0, 0));
        }

        let n = T::from(self.len)?;
        let mut position = (coordinate - self.start) / self.step;
        let node = position.round();
        if (position - node).abs() < T::from(NODE_SNAP)? {
            position = node;
        }

        if self.circle {
            position = position % n;
            if position < T::zero() {
                position = position + n;
            }
            let i0 = position.floor().to_usize()? % self.len;
            return Some((i0, (i0 + 1) % self.len));
        }

        if position < T::zero() || position > n - T::one() {
            return None;
        }
        let i0 = position.floor().to_usize()?.min(self.len - 2);
        Some((i0, i0 + 1))
    }
}

impl<T: Float> Axis<T> for RegularAxis<T> {
    fn len(&self) -> usize {
        self.len
    }

    fn coordinate_value(&self, index: usize) -> T {
        let index = T::from(index).unwrap_or_else(T::nan);
        self.start + index * self.step
    }

    fn is_circle(&self) -> bool {
        self.circle
    }

    fn find_indexes(&self, coordinate: T, half_window: u32, boundary: Boundary) -> Vec<usize> {
        let Some((i0, i1)) = self.find_interval(coordinate) else {
            return Vec::new();
        };
        let boundary = if self.circle { Boundary::Wrap } else { boundary };

        let mut frame = Vec::with_capacity(2 * half_window as usize);
        for shift in 0..i64::from(half_window) {
            for index in [i0 as i64 - shift, i1 as i64 + shift] {
                match boundary.resolve(index, self.len) {
                    Resolution::Inside(resolved) => frame.push(resolved),
                    Resolution::Outside => {}
                    Resolution::Abort => return Vec::new(),
                }
            }
        }

        frame.sort_unstable();
        frame.dedup();
        frame
    }
}
