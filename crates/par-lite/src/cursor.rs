//! Shared index cursor for parallel range iteration.

use std::fmt::Display;
use std::sync::Mutex;

/// Integer behavior required of a loop index.
///
/// Implemented for the 32-bit and 64-bit signed and unsigned widths
/// plus `usize`, so every width shares one generic loop engine.
pub trait LoopIndex: Copy + Ord + Send + Sync + Display {
    /// The index following `self`.
    fn successor(self) -> Self;
}

macro_rules! impl_loop_index {
    ($($ty:ty),*) => {
        $(impl LoopIndex for $ty {
            #[inline]
            fn successor(self) -> Self {
                self + 1
            }
        })*
    };
}

impl_loop_index!(i32, i64, u32, u64, usize);

/// Hands out the next unclaimed index from a half-open range.
///
/// One cursor is shared by all workers of a single parallel loop. The
/// compare-then-increment runs as one critical section, so the indices
/// claimed across all workers are exactly `[from, to)` with no
/// duplicates and no gaps. Claim order across workers is unspecified.
pub struct IndexCursor<I> {
    next: Mutex<I>,
    to: I,
}

impl<I: LoopIndex> IndexCursor<I> {
    /// Create a cursor over `[from, to)`.
    pub fn new(from: I, to: I) -> Self {
        Self {
            next: Mutex::new(from),
            to,
        }
    }

    /// Claim the next index, or `None` once the range is exhausted.
    pub fn claim(&self) -> Option<I> {
        let mut next = self.next.lock().unwrap();
        if *next >= self.to {
            return None;
        }
        let claimed = *next;
        *next = claimed.successor();
        Some(claimed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn claims_whole_range_in_order() {
        let cursor = IndexCursor::new(3, 7);
        assert_eq!(cursor.claim(), Some(3));
        assert_eq!(cursor.claim(), Some(4));
        assert_eq!(cursor.claim(), Some(5));
        assert_eq!(cursor.claim(), Some(6));
        assert_eq!(cursor.claim(), None);
        assert_eq!(cursor.claim(), None);
    }

    #[test]
    fn empty_range_is_exhausted() {
        let cursor = IndexCursor::new(5, 5);
        assert_eq!(cursor.claim(), None);

        let inverted = IndexCursor::new(10, 5);
        assert_eq!(inverted.claim(), None);
    }

    #[test]
    fn negative_range() {
        let cursor = IndexCursor::new(-2i32, 1);
        assert_eq!(cursor.claim(), Some(-2));
        assert_eq!(cursor.claim(), Some(-1));
        assert_eq!(cursor.claim(), Some(0));
        assert_eq!(cursor.claim(), None);
    }

    #[test]
    fn concurrent_claims_are_unique_and_complete() {
        let cursor = Arc::new(IndexCursor::new(0usize, 1000));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let cursor = Arc::clone(&cursor);
                thread::spawn(move || {
                    let mut mine = Vec::new();
                    while let Some(i) = cursor.claim() {
                        mine.push(i);
                    }
                    mine
                })
            })
            .collect();

        let mut all: Vec<usize> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        all.sort();

        let expected: Vec<usize> = (0..1000).collect();
        assert_eq!(all, expected);
    }
}
