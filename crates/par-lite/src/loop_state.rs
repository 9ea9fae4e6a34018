//! Cooperative stop signal shared by the workers of one loop.

use std::sync::atomic::{AtomicBool, Ordering};

/// Shared stop flag for one parallel loop invocation.
///
/// `stop` is fire-and-forget: workers check the flag before claiming
/// another index, so iterations already dispatched run to completion
/// and a worker may claim a few more indices before it notices. The
/// flag is atomic (a read never tears against a concurrent write) but
/// carries no ordering guarantees beyond that.
#[derive(Debug, Default)]
pub struct LoopState {
    stop: AtomicBool,
}

impl LoopState {
    pub(crate) fn new() -> Self {
        Self {
            stop: AtomicBool::new(false),
        }
    }

    /// Request early termination of the loop. Never blocks.
    pub fn stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    /// Whether a stop has been requested.
    pub fn is_stopped(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }
}
