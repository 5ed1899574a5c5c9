//! Transaction record - the immutable audit unit.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Direction of a circulation event.
///
/// Serialized as `type` for compatibility with the record shape the
/// collaborator persistence layers already store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    Borrow,
    Return,
}

/// One circulation event, created by the facade and never mutated.
///
/// Every successful borrow and return appends one of these to both the
/// LIFO audit log and the ring history log. Ids are `TXN` plus a
/// zero-padded sequence number (`TXN001`), numbered from the audit log
/// length at creation time; a fresh catalog restarts the sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub member_id: String,
    pub book_isbn: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// Date the event happened.
    pub date: NaiveDate,
    /// Due date, present only on `Borrow` records.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
}
