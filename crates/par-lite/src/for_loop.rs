//! Parallel range iteration.
//!
//! A fixed pool of workers (one per available core) pulls indices from
//! a shared cursor until the range is exhausted or a stop is observed,
//! then the calling thread joins them all.

use std::thread;

use crate::cursor::{IndexCursor, LoopIndex};
use crate::loop_state::LoopState;
use crate::num_cpus;

/// Spawn one scoped worker per available core and join them all.
///
/// The scope join is the only barrier: nothing after this function
/// returns on the calling thread runs concurrently with any worker.
fn spawn_workers<F>(worker: F)
where
    F: Fn(usize) + Sync,
{
    let workers = num_cpus().max(1);
    tracing::debug!("Parallel loop: {} workers", workers);

    thread::scope(|s| {
        for worker_index in 0..workers {
            let worker = &worker;
            s.spawn(move || worker(worker_index));
        }
    });
}

/// Execute `body` once for every index in `[from, to)`, in parallel.
///
/// Workers claim indices dynamically from a shared cursor, so each
/// index runs exactly once but in no particular order and on no
/// particular thread. Blocks until every worker has finished. An
/// empty range (`from >= to`) performs no iterations and returns
/// immediately.
///
/// Anything the body touches besides the index is the caller's
/// responsibility to make thread-safe. A panic inside the body unwinds
/// its worker thread and resurfaces on the calling thread at the join;
/// other workers are neither stopped nor isolated from it.
pub fn parallel_for<I, F>(from: I, to: I, body: F)
where
    I: LoopIndex,
    F: Fn(I) + Sync,
{
    if from >= to {
        return;
    }

    let cursor = IndexCursor::new(from, to);
    spawn_workers(|_| {
        while let Some(index) = cursor.claim() {
            body(index);
        }
    });
}

/// Like [`parallel_for`], but the body also receives a [`LoopState`]
/// handle through which it may request early termination.
///
/// `LoopState::stop` is cooperative: every worker checks the flag
/// before claiming another index, so in-flight iterations run to
/// completion and a worker may process a bounded number of further
/// indices before it observes the stop. There is no acknowledgment and
/// no rendezvous.
pub fn parallel_for_with_state<I, F>(from: I, to: I, body: F)
where
    I: LoopIndex,
    F: Fn(I, &LoopState) + Sync,
{
    if from >= to {
        return;
    }

    let cursor = IndexCursor::new(from, to);
    let state = LoopState::new();
    spawn_workers(|_| {
        while !state.is_stopped() {
            let Some(index) = cursor.claim() else { break };
            body(index, &state);
        }
    });
}

/// Like [`parallel_for_with_state`], with per-worker accumulator state.
///
/// Each worker calls `init` once before its first claim, folds every
/// index it processes through `body` (which returns the new
/// accumulator value, so both mutate-and-return and replace-by-value
/// styles work), and passes its final accumulator to `finish` exactly
/// once when its loop exits, whether by exhaustion or by an observed
/// stop. Finalizers run on their own worker's thread and may run
/// concurrently with each other.
///
/// The engine never combines accumulators; composing the finalized
/// per-worker values is the caller's business inside `finish` or
/// afterward. An empty range returns immediately without creating any
/// accumulator.
pub fn parallel_for_with_local<I, T, Init, Body, Finish>(
    from: I,
    to: I,
    init: Init,
    body: Body,
    finish: Finish,
) where
    I: LoopIndex,
    Init: Fn() -> T + Sync,
    Body: Fn(I, &LoopState, T) -> T + Sync,
    Finish: Fn(T) + Sync,
{
    if from >= to {
        return;
    }

    let cursor = IndexCursor::new(from, to);
    let state = LoopState::new();
    spawn_workers(|_| {
        let mut local = init();
        while !state.is_stopped() {
            let Some(index) = cursor.claim() else { break };
            local = body(index, &state, local);
        }
        finish(local);
    });
}
