//! Parallel fan-out/join of independent actions.

use std::thread;

/// Run every action on its own thread and wait for all of them.
///
/// One thread per action, no pooling or reuse. Actions take no
/// arguments, share no coordination, and may run in any order. Zero
/// actions returns immediately. Blocks until every action has
/// finished.
///
/// Heterogeneous closures can be passed as `Vec<Box<dyn FnOnce() +
/// Send>>`. A panicking action unwinds its own thread and resurfaces
/// on the calling thread at the join; other actions still run to
/// completion first.
pub fn parallel_invoke<F, A>(actions: A)
where
    F: FnOnce() + Send,
    A: IntoIterator<Item = F>,
{
    thread::scope(|s| {
        let mut spawned = 0usize;
        for action in actions {
            s.spawn(action);
            spawned += 1;
        }
        tracing::debug!("Invoking {} actions", spawned);
    });
}
