//! libralog - in-memory index layer and borrow/return facade for a library catalog.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │             Collaborator shells (out of scope)              │
//! │              GUI | database adapter | CLI                   │
//! └──────────────────────────────┬──────────────────────────────┘
//!                                ↓
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Catalog (catalog/)                     │
//! │   borrow_book | return_book | add_* | reserve | read views  │
//! ├──────────────┬───────────────┬──────────────────────────────┤
//! │ OrderedIndex │  DirectTable  │  LifoLog  FifoQueue  RingLog │
//! │   (index/)   │   (index/)    │   (log/)  (queue/)   (log/)  │
//! │  Book        │  Member       │  Transaction / Reservation   │
//! └──────────────┴───────────────┴──────────────────────────────┘
//! ```
//!
//! The facade owns the five structures and is the only mutation path;
//! no structure depends on another except through it. Everything lives
//! in memory for the life of the catalog - persistence, rendering, and
//! authentication belong to the collaborator shells.
//!
//! # Modules
//! - [`common`] - Shared primitives (config constants, CatalogError)
//! - [`record`] - Book, Member, Transaction, Reservation shapes
//! - [`index`] - OrderedIndex (books), DirectTable (members)
//! - [`log`] - LifoLog (audit trail), RingLog (circulation history)
//! - [`queue`] - FifoQueue (pending reservations)
//! - [`catalog`] - The composing facade and its stats snapshot
//! - [`sample`] - Demo fixture built through facade operations
//!
//! # Quick Start
//! ```
//! use libralog::{Book, Catalog, Member, MemberRole};
//!
//! let mut catalog = Catalog::new();
//! catalog.add_book(Book::new("978-0134685991", "Effective Java", "Joshua Bloch", "Programming", 3));
//! catalog.add_member(Member::new("STU001", "Alice Johnson", "alice.j@university.edu", MemberRole::Student));
//!
//! // Borrow: one copy leaves the shelf, the status flips.
//! let receipt = catalog.borrow_book("STU001", "978-0134685991").unwrap();
//! assert!(receipt.due_date.is_some());
//!
//! // Read views are snapshots, ordered by each structure's contract.
//! let books = catalog.list_books();
//! assert_eq!(books[0].copies, 2);
//! ```

pub mod catalog;
pub mod common;
pub mod index;
pub mod log;
pub mod queue;
pub mod record;
pub mod sample;

// Re-export commonly used items at crate root for convenience
pub use common::config::{DEFAULT_BUCKET_COUNT, DEFAULT_HISTORY_LIMIT, LOAN_PERIOD_DAYS};
pub use common::{CatalogError, Result};

pub use catalog::{Catalog, CatalogStats};
pub use index::{DirectTable, OrderedIndex};
pub use log::{LifoLog, RingLog};
pub use queue::FifoQueue;
pub use record::{Book, BookStatus, Member, MemberRole, Reservation, Transaction, TransactionKind};
