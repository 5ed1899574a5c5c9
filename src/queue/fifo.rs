//! FIFO pending-request queue.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};

/// Queue holding pending requests in arrival order (front = oldest).
///
/// FIFO ordering is the only observable contract. The `VecDeque`
/// backing gives O(1) dequeue without disturbing that order.
///
/// The operation counter increments on every enqueue and on every
/// successful dequeue. Peeks and dequeues of an empty queue do not
/// count.
#[derive(Debug)]
pub struct FifoQueue<T> {
    /// Front-to-back storage (front = oldest).
    items: VecDeque<T>,
    /// Enqueues plus successful dequeues.
    ops: AtomicU64,
}

impl<T> FifoQueue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
            ops: AtomicU64::new(0),
        }
    }

    /// Add an item to the back.
    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
        self.ops.fetch_add(1, Ordering::Relaxed);
    }

    /// Remove and return the front item, or `None` when empty.
    pub fn dequeue(&mut self) -> Option<T> {
        let item = self.items.pop_front();
        if item.is_some() {
            self.ops.fetch_add(1, Ordering::Relaxed);
        }
        item
    }

    /// Read the front item without removing it. Does not count.
    pub fn front(&self) -> Option<&T> {
        self.items.front()
    }

    /// Snapshot of all items in enqueue order (oldest-first).
    pub fn all(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.iter().cloned().collect()
    }

    /// Number of items currently queued.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the queue holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Enqueues plus successful dequeues since construction.
    pub fn operation_count(&self) -> u64 {
        self.ops.load(Ordering::Relaxed)
    }
}

impl<T> Default for FifoQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut queue = FifoQueue::new();
        queue.enqueue(1);
        queue.enqueue(2);
        queue.enqueue(3);

        assert_eq!(queue.dequeue(), Some(1));
        assert_eq!(queue.dequeue(), Some(2));
        assert_eq!(queue.dequeue(), Some(3));
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn test_all_oldest_first() {
        let mut queue = FifoQueue::new();
        queue.enqueue("a");
        queue.enqueue("b");
        queue.enqueue("c");

        assert_eq!(queue.all(), vec!["a", "b", "c"]);
        // Snapshot, not drain.
        assert_eq!(queue.len(), 3);
    }

    #[test]
    fn test_front_does_not_remove() {
        let mut queue = FifoQueue::new();
        assert_eq!(queue.front(), None);

        queue.enqueue(9);
        assert_eq!(queue.front(), Some(&9));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_operation_counter() {
        let mut queue = FifoQueue::new();
        queue.enqueue(1);
        queue.enqueue(2);
        assert_eq!(queue.operation_count(), 2);

        queue.dequeue();
        assert_eq!(queue.operation_count(), 3);

        // Peek and empty dequeue do not count.
        queue.front();
        queue.dequeue();
        queue.dequeue();
        assert_eq!(queue.operation_count(), 4);
        assert!(queue.is_empty());
    }
}
