//! Record shapes held by the index structures.
//!
//! These are plain data carriers: the catalog facade owns all mutation,
//! and collaborator shells (GUI, database adapter, CLI) serialize them
//! as-is. Shapes here must round-trip through serde without changing
//! the ordering or counting semantics of the structures that hold them.
//!
//! - [`Book`] - keyed by isbn, lives in the ordered index
//! - [`Member`] - keyed by member id, lives in the member table
//! - [`Transaction`] - immutable audit record, lives in the LIFO log and ring log
//! - [`Reservation`] - immutable pending request, lives in the FIFO queue

mod book;
mod member;
mod reservation;
mod transaction;

pub use book::{Book, BookStatus};
pub use member::{Member, MemberRole};
pub use reservation::Reservation;
pub use transaction::{Transaction, TransactionKind};
