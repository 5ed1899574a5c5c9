//! Ordered book index backed by an unbalanced binary search tree.
//!
//! The tree never rebalances: depth is a function of insertion order
//! alone, and sorted-order insertion degenerates it into a linked list
//! (O(n) per operation). That is accepted behavior for this layer, not
//! a defect. Nodes live in an arena (`Vec`) with index links, so there
//! are no pointer cycles and no `Rc`/`RefCell`.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::record::Book;

/// One arena slot: a book and its child links.
#[derive(Debug)]
struct Node {
    book: Book,
    left: Option<usize>,
    right: Option<usize>,
}

/// Unbalanced binary search tree keyed by isbn.
///
/// # Key policy
/// Keys compare lexicographically as raw strings. Duplicate keys are
/// never rejected or overwritten: a new record with an existing isbn is
/// routed into the right subtree, so duplicates coexist as distinct
/// nodes ordered among themselves by insertion sequence.
///
/// # Instrumentation
/// Every `search`/`search_mut` call bumps a monotonic counter, found or
/// not. The counter is atomic only so `search(&self)` can record itself;
/// this is not a thread-safety claim for the tree.
///
/// # Example
/// ```
/// use libralog::{Book, OrderedIndex};
///
/// let mut index = OrderedIndex::new();
/// index.insert(Book::new("978-0262", "SICP", "Abelson", "CS", 2));
/// index.insert(Book::new("978-0131", "C", "K&R", "CS", 1));
///
/// assert!(index.search("978-0131").is_some());
/// let isbns: Vec<String> = index.all().into_iter().map(|b| b.isbn).collect();
/// assert_eq!(isbns, ["978-0131", "978-0262"]);
/// ```
#[derive(Debug)]
pub struct OrderedIndex {
    /// Arena of nodes; links are indices into this vec.
    nodes: Vec<Node>,
    /// Index of the root node, `None` while empty.
    root: Option<usize>,
    /// Searches performed, found or not.
    searches: AtomicU64,
}

impl OrderedIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
            searches: AtomicU64::new(0),
        }
    }

    /// Insert a book record, keeping every duplicate.
    ///
    /// Descends from the root: strictly smaller keys go left, equal or
    /// greater keys go right. The right bias on equality is what keeps
    /// duplicate isbns ordered by insertion sequence in [`all`](Self::all).
    pub fn insert(&mut self, book: Book) {
        let new_idx = self.nodes.len();
        self.nodes.push(Node {
            book,
            left: None,
            right: None,
        });

        let Some(mut cur) = self.root else {
            self.root = Some(new_idx);
            return;
        };

        loop {
            let go_left = self.nodes[new_idx].book.isbn < self.nodes[cur].book.isbn;
            let next = if go_left {
                self.nodes[cur].left
            } else {
                self.nodes[cur].right
            };
            match next {
                Some(idx) => cur = idx,
                None => {
                    if go_left {
                        self.nodes[cur].left = Some(new_idx);
                    } else {
                        self.nodes[cur].right = Some(new_idx);
                    }
                    return;
                }
            }
        }
    }

    /// Look up a book by exact isbn.
    ///
    /// Returns the first match encountered on the descent. For duplicate
    /// keys that is the earliest-inserted record, since later duplicates
    /// sit below it in the right subtree.
    ///
    /// Counts one search whether or not the key is found.
    pub fn search(&self, isbn: &str) -> Option<&Book> {
        self.searches.fetch_add(1, Ordering::Relaxed);
        self.locate(isbn).map(|idx| &self.nodes[idx].book)
    }

    /// Look up a book by exact isbn for in-place mutation.
    ///
    /// Same descent and counting as [`search`](Self::search); the facade
    /// uses this to flip status and copies on borrow/return.
    pub fn search_mut(&mut self, isbn: &str) -> Option<&mut Book> {
        self.searches.fetch_add(1, Ordering::Relaxed);
        let idx = self.locate(isbn)?;
        Some(&mut self.nodes[idx].book)
    }

    /// All records in ascending key order (iterative in-order traversal).
    ///
    /// Duplicate keys appear in their insertion order relative to each
    /// other, a consequence of the right-biased insert.
    pub fn all(&self) -> Vec<Book> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack = Vec::new();
        let mut cur = self.root;

        loop {
            while let Some(idx) = cur {
                stack.push(idx);
                cur = self.nodes[idx].left;
            }
            let Some(idx) = stack.pop() else { break };
            out.push(self.nodes[idx].book.clone());
            cur = self.nodes[idx].right;
        }

        out
    }

    /// Number of records (duplicates included).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the index holds no records.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Longest root-to-leaf path, in nodes; 0 when empty.
    ///
    /// With no rebalancing this is the observable witness of insertion
    /// order: n sorted inserts produce depth n.
    pub fn depth(&self) -> usize {
        let Some(root) = self.root else { return 0 };

        let mut max = 0;
        let mut stack = vec![(root, 1)];
        while let Some((idx, d)) = stack.pop() {
            max = max.max(d);
            let node = &self.nodes[idx];
            if let Some(left) = node.left {
                stack.push((left, d + 1));
            }
            if let Some(right) = node.right {
                stack.push((right, d + 1));
            }
        }
        max
    }

    /// Total searches performed since construction.
    pub fn search_count(&self) -> u64 {
        self.searches.load(Ordering::Relaxed)
    }

    /// Find the arena index of the first node matching `isbn` on the descent.
    fn locate(&self, isbn: &str) -> Option<usize> {
        let mut cur = self.root;
        while let Some(idx) = cur {
            let node = &self.nodes[idx];
            if isbn == node.book.isbn {
                return Some(idx);
            }
            cur = if isbn < node.book.isbn.as_str() {
                node.left
            } else {
                node.right
            };
        }
        None
    }
}

impl Default for OrderedIndex {
    fn default() -> Self {
        Self::new()
    }
}
