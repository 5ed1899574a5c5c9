//! Catalog facade and its instrumentation.
//!
//! [`Catalog`] is the only mutation boundary in the crate: it owns the
//! five structures and sequences every borrow, return, add, and
//! reservation across them. [`CatalogStats`] snapshots the structures'
//! instrumentation counters.

mod facade;
mod stats;

pub use facade::Catalog;
pub use stats::CatalogStats;
