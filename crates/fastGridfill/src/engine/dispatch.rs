//! Worker pools and worker outcome settlement.
//!
//! ## Purpose
//!
//! Every parallel pass of this crate follows the same shape: one slot per
//! worker, each worker's body guarded against panics, the slots settled after
//! every worker has returned.
//!
//! ## Invariants
//!
//! * A worker panic never crosses the pool boundary; it becomes a
//!   `FillError::WorkerFault` in that worker's slot.
//! * Every fault is logged. When several workers fault, the slot with the
//!   highest worker index is the one returned.
//! * A fresh pool is built per call and dropped when the call ends.

// External dependencies
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};
use tracing::error;

// Export dependencies from gridfill crate
use gridfill::internals::primitives::errors::FillError;

/// Build a dedicated pool of `num_threads` workers for one call.
pub fn thread_pool(num_threads: usize) -> Result<ThreadPool, FillError> {
    ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .thread_name(|index| format!("gridfill-worker-{index}"))
        .build()
        .map_err(|err| FillError::ThreadPool(err.to_string()))
}

/// Human readable message of a panic payload.
pub fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "worker panicked".to_string()
    }
}

/// Run `task` for `worker`, turning a panic into a `WorkerFault`.
pub fn guarded<R, F>(worker: usize, task: F) -> Result<R, FillError>
where
    F: FnOnce() -> R,
{
    catch_unwind(AssertUnwindSafe(task)).map_err(|payload| FillError::WorkerFault {
        worker,
        message: panic_message(payload),
    })
}

/// Settle the per-worker outcomes, ordered by worker index.
///
/// Returns every value, or the fault of the last faulting worker.
pub fn settle<R>(outcomes: Vec<Result<R, FillError>>) -> Result<Vec<R>, FillError> {
    let mut values = Vec::with_capacity(outcomes.len());
    let mut fault = None;

    for outcome in outcomes {
        match outcome {
            Ok(value) => values.push(value),
            Err(err) => {
                error!(%err, "worker fault");
                fault = Some(err);
            }
        }
    }

    match fault {
        Some(err) => Err(err),
        None => Ok(values),
    }
}
