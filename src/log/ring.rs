//! Cyclic circulation-history log.
//!
//! A singly linked list whose tail always points back to the first-ever
//! node, forming a true cycle with a head that never advances. Reads
//! stop at `min(limit, len)` and never follow the cycle around, so the
//! structure behaves observably like a capped append-only sequence.
//! Nodes live in an arena (`Vec`); links are plain indices.

use std::sync::atomic::{AtomicU64, Ordering};

/// One arena slot: an item and its successor index.
#[derive(Debug)]
struct RingNode<T> {
    item: T,
    /// Successor; the tail's successor is always [`RingLog::HEAD`].
    next: usize,
}

/// Append-only cyclic list with limit-capped oldest-first reads.
///
/// Nodes are never removed; the log grows for the life of the catalog.
/// A broken cycle is a programming error, checked by a debug assertion
/// on every append, never surfaced as a recoverable result.
#[derive(Debug)]
pub struct RingLog<T> {
    nodes: Vec<RingNode<T>>,
    /// Index of the current tail, `None` while empty.
    tail: Option<usize>,
    /// Total appends since construction.
    appends: AtomicU64,
}

impl<T> RingLog<T> {
    /// The head is the first-ever node and never advances.
    const HEAD: usize = 0;

    /// Create an empty log.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            tail: None,
            appends: AtomicU64::new(0),
        }
    }

    /// Append an item after the current tail, closing the cycle back
    /// to the head.
    ///
    /// The first append forms a single-node cycle (the node is its own
    /// successor).
    pub fn append(&mut self, item: T) {
        let new_idx = self.nodes.len();

        match self.tail {
            Some(tail) => {
                debug_assert_eq!(
                    self.nodes[tail].next,
                    Self::HEAD,
                    "ring cycle broken before append"
                );
                self.nodes.push(RingNode {
                    item,
                    next: Self::HEAD,
                });
                self.nodes[tail].next = new_idx;
            }
            None => {
                self.nodes.push(RingNode {
                    item,
                    next: Self::HEAD,
                });
            }
        }

        self.tail = Some(new_idx);
        self.appends.fetch_add(1, Ordering::Relaxed);
    }

    /// The oldest `min(limit, len)` items, oldest-first.
    ///
    /// Walks successor links from the head exactly that many hops, so
    /// the traversal never wraps and never repeats an item, even when
    /// `limit` exceeds the current length.
    pub fn history(&self, limit: usize) -> Vec<T>
    where
        T: Clone,
    {
        let take = limit.min(self.nodes.len());
        let mut out = Vec::with_capacity(take);

        let mut cur = Self::HEAD;
        for _ in 0..take {
            out.push(self.nodes[cur].item.clone());
            cur = self.nodes[cur].next;
        }

        out
    }

    /// Number of items ever appended (nothing is removed).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the log holds no items.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Total appends since construction.
    pub fn operation_count(&self) -> u64 {
        self.appends.load(Ordering::Relaxed)
    }
}

impl<T> Default for RingLog<T> {
    fn default() -> Self {
        Self::new()
    }
}
