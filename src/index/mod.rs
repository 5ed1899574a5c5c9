//! Index structures for keyed record lookup.
//!
//! Two complementary lookup structures, composed by the catalog facade:
//! - [`OrderedIndex`] - unbalanced binary search tree; sorted traversal plus
//!   exact-key search over book isbns
//! - [`DirectTable`] - fixed-bucket chained hash table; exact-key access to
//!   member records, no ordering guarantee
//!
//! Their output orders differ on purpose: `OrderedIndex::all` is ascending
//! by key, `DirectTable::all` is bucket order. Callers must not conflate
//! the two.

mod direct;
mod ordered;

pub use direct::DirectTable;
pub use ordered::OrderedIndex;
