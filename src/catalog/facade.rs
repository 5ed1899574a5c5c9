//! Catalog facade - the borrow/return state machine.
//!
//! The [`Catalog`] provides:
//! - Borrow/return workflows with explicit, recoverable outcomes
//! - Add operations for book and member records
//! - Reservation queueing and fulfillment
//! - Snapshot read views over every structure

use chrono::{Duration, NaiveDate, Utc};
use tracing::{debug, trace};

use crate::catalog::CatalogStats;
use crate::common::config::{DEFAULT_BUCKET_COUNT, LOAN_PERIOD_DAYS};
use crate::common::{CatalogError, Result};
use crate::index::{DirectTable, OrderedIndex};
use crate::log::{LifoLog, RingLog};
use crate::queue::FifoQueue;
use crate::record::{Book, BookStatus, Member, Reservation, Transaction, TransactionKind};

/// Composes the five catalog structures behind one mutation boundary.
///
/// # Architecture
/// ```text
/// ┌──────────────────────────────────────────────────────────────┐
/// │                           Catalog                            │
/// │  ┌──────────────┐  ┌───────────────────────────────────┐    │
/// │  │ books        │  │ members                           │    │
/// │  │ OrderedIndex │  │ DirectTable<Member>               │    │
/// │  └──────────────┘  └───────────────────────────────────┘    │
/// │  ┌──────────────┐  ┌──────────────┐  ┌──────────────┐       │
/// │  │ transactions │  │ reservations │  │ history      │       │
/// │  │ LifoLog<Txn> │  │ FifoQueue    │  │ RingLog<Txn> │       │
/// │  └──────────────┘  └──────────────┘  └──────────────┘       │
/// └──────────────────────────────────────────────────────────────┘
/// ```
///
/// The facade is the sole owner of all five structures; nothing else
/// mutates them. Mutating operations take `&mut self` and run to
/// completion, read views take `&self` and return owned snapshots, so
/// callers can never alias into live structure state.
///
/// # State machine
/// A book's `status` flips on every circulation event: any successful
/// borrow sets `Borrowed` (even with copies left on the shelf), any
/// successful return sets `Available`. This is the governing policy of
/// this core, distinct from per-copy availability accounting.
///
/// # Usage
/// ```
/// use libralog::{Book, Catalog, Member, MemberRole, TransactionKind};
///
/// let mut catalog = Catalog::new();
/// catalog.add_book(Book::new("978-0134685991", "Effective Java", "Joshua Bloch", "Programming", 3));
/// catalog.add_member(Member::new("STU001", "Alice Johnson", "alice@university.edu", MemberRole::Student));
///
/// let receipt = catalog.borrow_book("STU001", "978-0134685991").unwrap();
/// assert_eq!(receipt.kind, TransactionKind::Borrow);
/// assert_eq!(receipt.id, "TXN001");
/// assert!(receipt.due_date.is_some());
/// ```
pub struct Catalog {
    /// Book records, ordered by isbn.
    books: OrderedIndex,
    /// Member records, keyed by member id.
    members: DirectTable<Member>,
    /// Full audit trail, most recent on top.
    transactions: LifoLog<Transaction>,
    /// Pending reservations in arrival order.
    reservations: FifoQueue<Reservation>,
    /// Append-only circulation history with capped reads.
    history: RingLog<Transaction>,
}

impl Catalog {
    /// Create an empty catalog with the default member-table size.
    pub fn new() -> Self {
        Self::with_bucket_count(DEFAULT_BUCKET_COUNT)
    }

    /// Create an empty catalog with a fixed member-table bucket count.
    ///
    /// # Panics
    /// Panics if `bucket_count` is 0.
    pub fn with_bucket_count(bucket_count: usize) -> Self {
        Self {
            books: OrderedIndex::new(),
            members: DirectTable::with_buckets(bucket_count),
            transactions: LifoLog::new(),
            reservations: FifoQueue::new(),
            history: RingLog::new(),
        }
    }

    // ========================================================================
    // Public API: Add records
    // ========================================================================

    /// Add a book record.
    ///
    /// Never fails and never deduplicates: a record with an already
    /// present isbn coexists with the earlier one in the index.
    pub fn add_book(&mut self, book: Book) {
        trace!(target: "libralog::catalog", isbn = %book.isbn, "book added");
        self.books.insert(book);
    }

    /// Add a member record.
    ///
    /// Re-adding an existing `member_id` silently overwrites; the
    /// displaced record is returned so callers can audit the change.
    pub fn add_member(&mut self, member: Member) -> Option<Member> {
        trace!(target: "libralog::catalog", member_id = %member.member_id, "member added");
        self.members.insert(member.member_id.clone(), member)
    }

    // ========================================================================
    // Public API: Borrow and return
    // ========================================================================

    /// Borrow a book for a member.
    ///
    /// Checks run in a fixed order and the first failure wins: book
    /// found, member found, status `Available`, copies remaining. On
    /// success the book loses one copy and flips to `Borrowed`
    /// unconditionally, the member's open-loan count rises, and a
    /// `Borrow` transaction (due in [`LOAN_PERIOD_DAYS`]) is appended
    /// to the audit log and the history ring.
    ///
    /// # Errors
    /// - [`CatalogError::BookNotFound`] if no record matches `isbn`
    /// - [`CatalogError::MemberNotFound`] if no record matches `member_id`
    /// - [`CatalogError::BookUnavailable`] if the book is not `Available`
    /// - [`CatalogError::NoCopiesAvailable`] if no copies remain
    pub fn borrow_book(&mut self, member_id: &str, isbn: &str) -> Result<Transaction> {
        let Some(book) = self.books.search_mut(isbn) else {
            return Err(CatalogError::BookNotFound(isbn.to_string()));
        };
        let Some(member) = self.members.get_mut(member_id) else {
            return Err(CatalogError::MemberNotFound(member_id.to_string()));
        };
        if book.status != BookStatus::Available {
            return Err(CatalogError::BookUnavailable(isbn.to_string()));
        }
        if book.copies == 0 {
            return Err(CatalogError::NoCopiesAvailable(isbn.to_string()));
        }

        book.status = BookStatus::Borrowed;
        book.copies -= 1;
        member.books_borrowed += 1;

        let date = today();
        let due = date + Duration::days(LOAN_PERIOD_DAYS);
        let txn = self.record_transaction(member_id, isbn, TransactionKind::Borrow, date, Some(due));

        debug!(
            target: "libralog::catalog",
            id = %txn.id, member_id, isbn, due = %due,
            "borrow recorded"
        );
        Ok(txn)
    }

    /// Return a book for a member.
    ///
    /// Requires only that both records exist and the member has an open
    /// loan; the book's current status is not consulted. On success the
    /// book gains one copy and flips to `Available` unconditionally,
    /// the member's open-loan count drops, and a `Return` transaction
    /// (no due date) is appended to the audit log and the history ring.
    ///
    /// # Errors
    /// - [`CatalogError::BookNotFound`] if no record matches `isbn`
    /// - [`CatalogError::MemberNotFound`] if no record matches `member_id`
    /// - [`CatalogError::NothingToReturn`] if the member has no open loans
    pub fn return_book(&mut self, member_id: &str, isbn: &str) -> Result<Transaction> {
        let Some(book) = self.books.search_mut(isbn) else {
            return Err(CatalogError::BookNotFound(isbn.to_string()));
        };
        let Some(member) = self.members.get_mut(member_id) else {
            return Err(CatalogError::MemberNotFound(member_id.to_string()));
        };
        if member.books_borrowed == 0 {
            return Err(CatalogError::NothingToReturn(member_id.to_string()));
        }

        book.status = BookStatus::Available;
        book.copies += 1;
        member.books_borrowed -= 1;

        let date = today();
        let txn = self.record_transaction(member_id, isbn, TransactionKind::Return, date, None);

        debug!(
            target: "libralog::catalog",
            id = %txn.id, member_id, isbn,
            "return recorded"
        );
        Ok(txn)
    }

    // ========================================================================
    // Public API: Reservations
    // ========================================================================

    /// Queue a reservation for a book.
    ///
    /// Both records must exist (a reservation for an unknown key could
    /// never be fulfilled); the existence check for the book counts as
    /// one index search. Reservations touch no book or member state and
    /// are not circulation events, so nothing reaches the audit logs.
    ///
    /// # Errors
    /// - [`CatalogError::BookNotFound`] if no record matches `isbn`
    /// - [`CatalogError::MemberNotFound`] if no record matches `member_id`
    pub fn reserve(&mut self, member_id: &str, isbn: &str) -> Result<Reservation> {
        if self.books.search(isbn).is_none() {
            return Err(CatalogError::BookNotFound(isbn.to_string()));
        }
        if self.members.get(member_id).is_none() {
            return Err(CatalogError::MemberNotFound(member_id.to_string()));
        }

        let reservation = Reservation {
            member_id: member_id.to_string(),
            book_isbn: isbn.to_string(),
            date_requested: today(),
        };
        self.reservations.enqueue(reservation.clone());

        debug!(target: "libralog::catalog", member_id, isbn, "reservation queued");
        Ok(reservation)
    }

    /// Pop the oldest pending reservation, or `None` when none are queued.
    ///
    /// Collaborator workflows call this when a copy frees up, then run
    /// [`borrow_book`](Self::borrow_book) for the reserving member.
    pub fn next_reservation(&mut self) -> Option<Reservation> {
        self.reservations.dequeue()
    }

    // ========================================================================
    // Public API: Lookups and read views
    // ========================================================================

    /// Look up a book by exact isbn. Counts one index search.
    ///
    /// For duplicate isbns this returns the earliest-inserted record.
    pub fn search(&self, isbn: &str) -> Option<Book> {
        self.books.search(isbn).cloned()
    }

    /// Look up a member by exact id.
    pub fn lookup_member(&self, member_id: &str) -> Option<Member> {
        self.members.get(member_id).cloned()
    }

    /// All books, ascending by isbn (duplicates in insertion order).
    pub fn list_books(&self) -> Vec<Book> {
        self.books.all()
    }

    /// All members, in bucket order. Not sorted by key.
    pub fn list_members(&self) -> Vec<Member> {
        self.members.all()
    }

    /// The most recent transactions, newest first, at most `limit`.
    pub fn recent_transactions(&self, limit: usize) -> Vec<Transaction> {
        let mut recent = self.transactions.all();
        recent.truncate(limit);
        recent
    }

    /// The oldest `min(limit, total)` transactions, oldest first.
    pub fn circulation_history(&self, limit: usize) -> Vec<Transaction> {
        self.history.history(limit)
    }

    /// Pending reservations in arrival order.
    pub fn pending_reservations(&self) -> Vec<Reservation> {
        self.reservations.all()
    }

    // ========================================================================
    // Public API: Counts and stats
    // ========================================================================

    /// Number of book records (duplicates included).
    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    /// Number of member records.
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Number of transactions in the audit log.
    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    /// Number of pending reservations.
    pub fn reservation_count(&self) -> usize {
        self.reservations.len()
    }

    /// Snapshot of the per-structure instrumentation counters.
    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            searches: self.books.search_count(),
            collisions: self.members.collision_count(),
            transaction_ops: self.transactions.operation_count(),
            reservation_ops: self.reservations.operation_count(),
            history_appends: self.history.operation_count(),
        }
    }

    // ========================================================================
    // Internal: transaction records
    // ========================================================================

    /// Build a transaction, then append it to both audit structures.
    ///
    /// Ids are `TXN` + zero-padded audit-log length + 1, computed before
    /// the push. The facade never pops the audit log, so ids stay
    /// unique for the life of the catalog.
    fn record_transaction(
        &mut self,
        member_id: &str,
        isbn: &str,
        kind: TransactionKind,
        date: NaiveDate,
        due_date: Option<NaiveDate>,
    ) -> Transaction {
        let txn = Transaction {
            id: format!("TXN{:03}", self.transactions.len() + 1),
            member_id: member_id.to_string(),
            book_isbn: isbn.to_string(),
            kind,
            date,
            due_date,
        };

        self.transactions.push(txn.clone());
        self.history.append(txn.clone());
        txn
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Current UTC calendar date; transaction and reservation timestamps.
fn today() -> NaiveDate {
    Utc::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::MemberRole;

    fn book(isbn: &str, copies: u32) -> Book {
        Book::new(isbn, format!("Title {isbn}"), "Author", "Genre", copies)
    }

    fn member(id: &str) -> Member {
        Member::new(id, "Test Member", "member@university.edu", MemberRole::Student)
    }

    /// Catalog pre-loaded with one book and one member.
    fn catalog_with(book: Book, member: Member) -> Catalog {
        let mut catalog = Catalog::new();
        catalog.add_book(book);
        catalog.add_member(member);
        catalog
    }

    // --- Borrow ---

    #[test]
    fn test_borrow_success() {
        let mut catalog = catalog_with(book("B1", 3), member("M1"));

        let txn = catalog.borrow_book("M1", "B1").unwrap();
        assert_eq!(txn.id, "TXN001");
        assert_eq!(txn.kind, TransactionKind::Borrow);
        assert_eq!(txn.member_id, "M1");
        assert_eq!(txn.book_isbn, "B1");
        assert_eq!(txn.due_date, Some(txn.date + Duration::days(LOAN_PERIOD_DAYS)));

        let seen = catalog.search("B1").unwrap();
        assert_eq!(seen.copies, 2);
        assert_eq!(seen.status, BookStatus::Borrowed);
        assert_eq!(catalog.lookup_member("M1").unwrap().books_borrowed, 1);
    }

    #[test]
    fn test_borrow_depletes_and_flags() {
        // Status flips even though one copy remains on the shelf.
        let mut catalog = catalog_with(book("B1", 2), member("M1"));

        assert!(catalog.borrow_book("M1", "B1").is_ok());

        let seen = catalog.search("B1").unwrap();
        assert_eq!(seen.copies, 1);
        assert_eq!(seen.status, BookStatus::Borrowed);
    }

    #[test]
    fn test_borrow_on_borrowed_book_fails_without_mutation() {
        let mut unavailable = book("B2", 0);
        unavailable.status = BookStatus::Borrowed;
        let mut catalog = catalog_with(unavailable, member("M1"));

        let err = catalog.borrow_book("M1", "B2").unwrap_err();
        assert_eq!(err, CatalogError::BookUnavailable("B2".to_string()));

        // Nothing mutated, nothing logged.
        let seen = catalog.search("B2").unwrap();
        assert_eq!(seen.copies, 0);
        assert_eq!(seen.status, BookStatus::Borrowed);
        assert_eq!(catalog.lookup_member("M1").unwrap().books_borrowed, 0);
        assert_eq!(catalog.transaction_count(), 0);
    }

    #[test]
    fn test_borrow_zero_copies_of_available_book() {
        // Status passes, the copy check fires.
        let mut catalog = catalog_with(book("B1", 0), member("M1"));

        let err = catalog.borrow_book("M1", "B1").unwrap_err();
        assert_eq!(err, CatalogError::NoCopiesAvailable("B1".to_string()));
        assert_eq!(catalog.search("B1").unwrap().status, BookStatus::Available);
    }

    #[test]
    fn test_borrow_check_order() {
        // Book existence is checked before member existence.
        let mut catalog = Catalog::new();
        let err = catalog.borrow_book("ghost", "ghost-isbn").unwrap_err();
        assert_eq!(err, CatalogError::BookNotFound("ghost-isbn".to_string()));

        catalog.add_book(book("B1", 1));
        let err = catalog.borrow_book("ghost", "B1").unwrap_err();
        assert_eq!(err, CatalogError::MemberNotFound("ghost".to_string()));

        // Status outranks the copy check: a Borrowed book with zero
        // copies reports unavailability, not copy exhaustion.
        let mut flagged = book("B2", 0);
        flagged.status = BookStatus::Borrowed;
        catalog.add_book(flagged);
        catalog.add_member(member("M1"));
        let err = catalog.borrow_book("M1", "B2").unwrap_err();
        assert_eq!(err, CatalogError::BookUnavailable("B2".to_string()));
    }

    // --- Return ---

    #[test]
    fn test_return_after_borrow() {
        let mut catalog = catalog_with(book("B1", 1), member("M1"));
        catalog.borrow_book("M1", "B1").unwrap();

        let txn = catalog.return_book("M1", "B1").unwrap();
        assert_eq!(txn.id, "TXN002");
        assert_eq!(txn.kind, TransactionKind::Return);
        assert_eq!(txn.due_date, None);

        let seen = catalog.search("B1").unwrap();
        assert_eq!(seen.copies, 1);
        assert_eq!(seen.status, BookStatus::Available);
        assert_eq!(catalog.lookup_member("M1").unwrap().books_borrowed, 0);
    }

    #[test]
    fn test_return_ignores_book_status() {
        // The book is already Available; the return still succeeds and
        // bumps copies, because returns never consult book state.
        let mut returning = member("M1");
        returning.books_borrowed = 1;
        let mut catalog = catalog_with(book("B1", 5), returning);

        assert!(catalog.return_book("M1", "B1").is_ok());

        let seen = catalog.search("B1").unwrap();
        assert_eq!(seen.copies, 6);
        assert_eq!(seen.status, BookStatus::Available);
    }

    #[test]
    fn test_return_with_no_open_loans_rejected() {
        let mut catalog = catalog_with(book("B1", 1), member("M1"));

        let err = catalog.return_book("M1", "B1").unwrap_err();
        assert_eq!(err, CatalogError::NothingToReturn("M1".to_string()));

        // No mutation on rejection.
        assert_eq!(catalog.search("B1").unwrap().copies, 1);
        assert_eq!(catalog.transaction_count(), 0);
    }

    #[test]
    fn test_return_missing_records() {
        let mut catalog = catalog_with(book("B1", 1), member("M1"));

        assert_eq!(
            catalog.return_book("M1", "nope").unwrap_err(),
            CatalogError::BookNotFound("nope".to_string())
        );
        assert_eq!(
            catalog.return_book("nope", "B1").unwrap_err(),
            CatalogError::MemberNotFound("nope".to_string())
        );
    }

    // --- Add operations ---

    #[test]
    fn test_add_book_keeps_duplicates() {
        let mut catalog = Catalog::new();
        catalog.add_book(Book::new("X", "first", "A", "G", 1));
        catalog.add_book(Book::new("X", "second", "A", "G", 1));

        assert_eq!(catalog.book_count(), 2);
        assert_eq!(catalog.list_books().len(), 2);
        // Search hits the earlier-inserted record.
        assert_eq!(catalog.search("X").unwrap().title, "first");
    }

    #[test]
    fn test_add_member_overwrites_silently() {
        let mut catalog = Catalog::new();
        assert_eq!(catalog.add_member(member("M1")), None);

        let mut replacement = member("M1");
        replacement.name = "Replacement".to_string();
        let displaced = catalog.add_member(replacement).unwrap();
        assert_eq!(displaced.name, "Test Member");

        assert_eq!(catalog.member_count(), 1);
        assert_eq!(catalog.lookup_member("M1").unwrap().name, "Replacement");
    }

    // --- Read views ---

    #[test]
    fn test_list_books_sorted() {
        let mut catalog = Catalog::new();
        for isbn in ["0300", "0100", "0200"] {
            catalog.add_book(book(isbn, 1));
        }

        let isbns: Vec<String> = catalog.list_books().into_iter().map(|b| b.isbn).collect();
        assert_eq!(isbns, ["0100", "0200", "0300"]);
    }

    #[test]
    fn test_recent_transactions_newest_first() {
        let mut catalog = catalog_with(book("B1", 5), member("M1"));
        catalog.borrow_book("M1", "B1").unwrap();
        catalog.return_book("M1", "B1").unwrap();
        catalog.borrow_book("M1", "B1").unwrap();

        let recent = catalog.recent_transactions(2);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].id, "TXN003");
        assert_eq!(recent[1].id, "TXN002");

        // A larger limit returns everything without padding.
        assert_eq!(catalog.recent_transactions(10).len(), 3);
    }

    #[test]
    fn test_circulation_history_oldest_first() {
        let mut catalog = catalog_with(book("B1", 5), member("M1"));
        catalog.borrow_book("M1", "B1").unwrap();
        catalog.return_book("M1", "B1").unwrap();
        catalog.borrow_book("M1", "B1").unwrap();

        let history = catalog.circulation_history(2);
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].id, "TXN001");
        assert_eq!(history[1].id, "TXN002");

        assert_eq!(catalog.circulation_history(100).len(), 3);
    }

    #[test]
    fn test_read_views_are_snapshots() {
        let mut catalog = catalog_with(book("B1", 1), member("M1"));

        let mut copy = catalog.search("B1").unwrap();
        copy.copies = 99;
        copy.status = BookStatus::Borrowed;

        // The live record is untouched.
        assert_eq!(catalog.search("B1").unwrap().copies, 1);
    }

    // --- Reservations ---

    #[test]
    fn test_reserve_and_fulfill_in_fifo_order() {
        let mut catalog = catalog_with(book("B1", 1), member("M1"));
        catalog.add_member(member("M2"));

        let first = catalog.reserve("M1", "B1").unwrap();
        catalog.reserve("M2", "B1").unwrap();

        let pending = catalog.pending_reservations();
        assert_eq!(pending.len(), 2);
        assert_eq!(pending[0].member_id, "M1");
        assert_eq!(pending[1].member_id, "M2");

        assert_eq!(catalog.next_reservation(), Some(first));
        assert_eq!(catalog.reservation_count(), 1);
    }

    #[test]
    fn test_reserve_requires_existing_records() {
        let mut catalog = catalog_with(book("B1", 1), member("M1"));

        assert_eq!(
            catalog.reserve("M1", "nope").unwrap_err(),
            CatalogError::BookNotFound("nope".to_string())
        );
        assert_eq!(
            catalog.reserve("nope", "B1").unwrap_err(),
            CatalogError::MemberNotFound("nope".to_string())
        );
        assert_eq!(catalog.reservation_count(), 0);
    }

    #[test]
    fn test_reservations_do_not_touch_audit_logs() {
        let mut catalog = catalog_with(book("B1", 1), member("M1"));
        catalog.reserve("M1", "B1").unwrap();

        assert_eq!(catalog.transaction_count(), 0);
        assert!(catalog.circulation_history(10).is_empty());
    }

    // --- Stats ---

    #[test]
    fn test_stats_aggregate_per_structure_counters() {
        let mut catalog = Catalog::with_bucket_count(1);
        catalog.add_book(book("B1", 5));
        catalog.add_member(member("M1"));
        catalog.add_member(member("M2")); // single bucket: collides

        catalog.borrow_book("M1", "B1").unwrap(); // 1 search, 1 push, 1 append
        catalog.return_book("M1", "B1").unwrap(); // 1 search, 1 push, 1 append
        catalog.search("B1"); // 1 search
        catalog.reserve("M2", "B1").unwrap(); // 1 search, 1 enqueue
        catalog.next_reservation(); // 1 dequeue

        let stats = catalog.stats();
        assert_eq!(stats.searches, 4);
        assert_eq!(stats.collisions, 1);
        assert_eq!(stats.transaction_ops, 2);
        assert_eq!(stats.reservation_ops, 2);
        assert_eq!(stats.history_appends, 2);
    }

    #[test]
    fn test_counts_empty_catalog() {
        let catalog = Catalog::new();
        assert_eq!(catalog.book_count(), 0);
        assert_eq!(catalog.member_count(), 0);
        assert_eq!(catalog.transaction_count(), 0);
        assert_eq!(catalog.reservation_count(), 0);
        assert_eq!(catalog.stats(), CatalogStats::default());
    }
}
