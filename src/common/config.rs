//! Configuration constants for libralog.

/// Default number of buckets in a [`DirectTable`](crate::index::DirectTable).
///
/// The bucket count is fixed at construction; the table never rehashes.
/// 100 keeps chains short for catalogs in the low thousands of members
/// while staying small enough that `all()`'s bucket sweep is cheap.
pub const DEFAULT_BUCKET_COUNT: usize = 100;

/// Loan period applied to every borrow, in days.
///
/// The due date on a Borrow transaction is the transaction date plus
/// this many days. Fine policy (what happens after the due date) belongs
/// to collaborator shells, not this core.
pub const LOAN_PERIOD_DAYS: i64 = 30;

/// Default number of entries read views return when the caller gives no limit.
///
/// Applies to `recent_transactions` and `circulation_history` convenience
/// callers in collaborator shells; the core itself always takes an explicit
/// limit.
pub const DEFAULT_HISTORY_LIMIT: usize = 10;
