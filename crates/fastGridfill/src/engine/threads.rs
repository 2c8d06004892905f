//! Worker count resolution.
//!
//! ## Purpose
//!
//! A requested thread count of zero means "use every core". The machine
//! probe lives behind a plain function pointer so callers and tests can pin
//! it to a known value.

// External dependencies
use std::num::NonZeroUsize;
use std::thread;

/// Signature of a hardware concurrency probe.
pub type ConcurrencyProbe = fn() -> usize;

/// Number of threads the machine can run in parallel (at least 1).
pub fn hardware_concurrency() -> usize {
    thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}

/// Resolve a requested thread count; `0` asks `probe` for the machine's count.
pub fn resolve_num_threads(requested: usize, probe: ConcurrencyProbe) -> usize {
    if requested == 0 {
        probe().max(1)
    } else {
        requested
    }
}
