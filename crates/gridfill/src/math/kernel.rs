//! Tri-cube kernel for LOESS extrapolation.
//!
//! ## Purpose
//!
//! Maps the normalised distance between an undefined cell and one of its
//! neighbours to a weight. Cells at the centre weigh 1, cells at or beyond
//! the window edge weigh 0.
//!
//! ## Key concepts
//!
//! * **Normalised distance**: d = sqrt((dx / nx)^2 + (dy / ny)^2), with dx, dy
//!   index offsets and nx, ny the half windows.
//! * **Tri-cube**: w(d) = (1 - |d|^3)^3 for d <= 1, zero beyond.
//!
//! ## Invariants
//!
//! * Weights are in [0, 1].
//! * w(0) = 1 and w(d) = 0 for every d >= 1.

// External dependencies
use num_traits::Float;

/// Tri-cube weight of a normalised distance.
#[inline]
pub fn tricube<T: Float>(d: T) -> T {
    let d = d.abs();
    if d >= T::one() {
        return T::zero();
    }
    let tmp = T::one() - d * d * d;
    tmp * tmp * tmp
}

/// Euclidean distance of the index offset `(dx, dy)` scaled by the half window.
#[inline]
pub fn normalized_distance<T: Float>(dx: isize, dy: isize, nx: u32, ny: u32) -> T {
    let scaled = |delta: isize, half: u32| -> T {
        let delta = T::from(delta).unwrap_or_else(T::infinity);
        let half = T::from(half).unwrap_or_else(T::one);
        delta / half
    };
    scaled(dx, nx).hypot(scaled(dy, ny))
}
