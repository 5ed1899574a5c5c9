//! Catalog instrumentation counters.

use std::fmt;

/// A point-in-time snapshot of the per-structure counters.
///
/// Each structure owns its counter (initialized to zero at
/// construction); [`Catalog::stats`](crate::catalog::Catalog::stats)
/// gathers them into this plain struct, which can be safely printed,
/// compared, and stored.
///
/// Counters only ever grow. None of them affects behavior; they exist
/// for instrumentation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CatalogStats {
    /// Book index searches, hits and misses alike.
    pub searches: u64,
    /// Member-table new-key inserts that found their bucket occupied.
    pub collisions: u64,
    /// Audit log pushes plus successful pops.
    pub transaction_ops: u64,
    /// Reservation enqueues plus successful dequeues.
    pub reservation_ops: u64,
    /// History ring appends.
    pub history_appends: u64,
}

impl fmt::Display for CatalogStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ searches: {}, collisions: {}, txn_ops: {}, reservation_ops: {}, history_appends: {} }}",
            self.searches,
            self.collisions,
            self.transaction_ops,
            self.reservation_ops,
            self.history_appends
        )
    }
}
