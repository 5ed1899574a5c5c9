//! Book record and circulation status.

use serde::{Deserialize, Serialize};

/// Circulation status of a book record.
///
/// The facade flips this unconditionally on every borrow and return,
/// regardless of how many copies remain. `Borrowed` therefore means
/// "the most recent circulation event was a borrow", not "zero copies
/// on the shelf".
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookStatus {
    /// Eligible for borrowing (copies may still be 0).
    #[default]
    Available,
    /// Most recently borrowed; returns flip it back.
    Borrowed,
}

/// A catalog book record.
///
/// Keyed by `isbn`, compared lexicographically as a raw string by the
/// ordered index. Duplicate isbns are allowed; the index keeps every
/// inserted record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Catalog key. Lexicographic raw-string ordering, no normalization.
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub genre: String,
    /// Circulation status, mutated in place by the facade.
    pub status: BookStatus,
    /// Copies on the shelf, decremented on borrow, incremented on return.
    pub copies: u32,
}

impl Book {
    /// Create a book record with `Available` status.
    pub fn new(
        isbn: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
        copies: u32,
    ) -> Self {
        Self {
            isbn: isbn.into(),
            title: title.into(),
            author: author.into(),
            genre: genre.into(),
            status: BookStatus::Available,
            copies,
        }
    }
}
