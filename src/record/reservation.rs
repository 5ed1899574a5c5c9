//! Reservation record - a pending borrow request.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A pending request for a book, held only in the FIFO queue.
///
/// Immutable once created. No other structure reads reservations;
/// fulfilling one (dequeue, then borrow) is a collaborator workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub member_id: String,
    pub book_isbn: String,
    pub date_requested: NaiveDate,
}
