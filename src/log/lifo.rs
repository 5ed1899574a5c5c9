//! LIFO audit log.

use std::sync::atomic::{AtomicU64, Ordering};

/// Unbounded stack holding audit records in recency order.
///
/// The operation counter increments on every push and on every
/// successful pop. Peeks and pops of an empty log do not count.
#[derive(Debug)]
pub struct LifoLog<T> {
    /// Bottom-to-top storage; the top is the last element.
    items: Vec<T>,
    /// Pushes plus successful pops.
    ops: AtomicU64,
}

impl<T> LifoLog<T> {
    /// Create an empty log.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            ops: AtomicU64::new(0),
        }
    }

    /// Push an item onto the top.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
        self.ops.fetch_add(1, Ordering::Relaxed);
    }

    /// Remove and return the top item, or `None` when empty.
    pub fn pop(&mut self) -> Option<T> {
        let item = self.items.pop();
        if item.is_some() {
            self.ops.fetch_add(1, Ordering::Relaxed);
        }
        item
    }

    /// Read the top item without removing it. Does not count.
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Snapshot of all items, most-recent-first.
    pub fn all(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.iter().rev().cloned().collect()
    }

    /// Number of items currently held.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the log holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pushes plus successful pops since construction.
    pub fn operation_count(&self) -> u64 {
        self.ops.load(Ordering::Relaxed)
    }
}

impl<T> Default for LifoLog<T> {
    fn default() -> Self {
        Self::new()
    }
}
