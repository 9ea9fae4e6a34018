//! par-lite - Minimal Parallel Execution Primitives
//!
//! Thread-per-worker parallel range loops, fan-out/join of independent
//! actions, and a coarsely locked concurrent map. No runtime, no work
//! stealing, no external thread pool.

mod cursor;
mod for_loop;
mod invoke;
mod loop_state;
mod map;

pub use cursor::{IndexCursor, LoopIndex};
pub use for_loop::{parallel_for, parallel_for_with_local, parallel_for_with_state};
pub use invoke::parallel_invoke;
pub use loop_state::LoopState;
pub use map::{ConcurrentMap, MapError};

/// Get the number of available CPU cores
pub fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|p| p.get())
        .unwrap_or(4)
}
