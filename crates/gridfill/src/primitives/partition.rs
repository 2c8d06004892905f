//! Band partitioning of a grid axis across workers.
//!
//! ## Purpose
//!
//! Splits an index range `[0, len)` into contiguous, non-overlapping bands,
//! one per worker. The relaxation pipeline hands one band of the y axis to
//! each worker; the zonal average and LOESS passes use even chunking.
//!
//! ## Invariants
//!
//! * Bands are contiguous, ordered and cover `[0, len)` exactly.
//! * No band is empty unless `len == 0` (a single empty band is returned).
//! * The last band absorbs the remainder of an uneven split.

// External dependencies
use core::ops::Range;

/// Half-open index band `[start, end)` owned by one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    /// First index of the band (inclusive).
    pub start: usize,

    /// Last index of the band (exclusive).
    pub end: usize,
}

impl Band {
    /// Number of indexes covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the band covers no index.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The band as a range.
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Split `[0, len)` into at most `parts` bands.
///
/// The number of bands is clamped to `[1, len]` so that no worker receives
/// an empty band. Each band holds `len / bands` indexes and the last one also
/// takes the remainder.
pub fn partition_bands(len: usize, parts: usize) -> Vec<Band> {
    let count = parts.clamp(1, len.max(1));
    let shift = len / count;

    let mut bands = Vec::with_capacity(count);
    let mut start = 0;
    for _ in 0..count - 1 {
        bands.push(Band {
            start,
            end: start + shift,
        });
        start += shift;
    }
    bands.push(Band { start, end: len });
    bands
}

/// Chunk length that splits `len` items into at most `parts` even chunks.
#[inline]
pub fn chunk_len(len: usize, parts: usize) -> usize {
    len.div_ceil(parts.max(1)).max(1)
}
