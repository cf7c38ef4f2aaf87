//! Min-height priority queue of boundary cells.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use basin_core::Height;

/// A queued boundary cell.
///
/// Ordered by height, then by insertion sequence, then by index, so the
/// heap is a total order and pops are deterministic. The sequence number
/// makes equal-height entries leave in insertion order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Entry {
    height: Height,
    seq: u64,
    index: usize,
}

/// Min-heap of `(height, cell)` boundary entries.
///
/// A cell may be queued more than once before it is first expanded; the
/// solver skips stale entries on pop. Only the lowest entry is ever
/// observable.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Reverse<Entry>>,
    next_seq: u64,
}

impl Frontier {
    /// Create an empty frontier with room for `capacity` entries.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            next_seq: 0,
        }
    }

    /// Queue cell `index` at `height`.
    pub(crate) fn push(&mut self, height: Height, index: usize) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(Entry { height, seq, index }));
    }

    /// Remove and return the lowest entry as `(height, index)`.
    pub(crate) fn pop(&mut self) -> Option<(Height, usize)> {
        self.heap.pop().map(|Reverse(e)| (e.height, e.index))
    }

    /// Number of queued entries, stale duplicates included.
    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }

    /// Total number of pushes over the frontier's lifetime.
    pub(crate) fn pushes(&self) -> u64 {
        self.next_seq
    }
}
