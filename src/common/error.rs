//! Error types for libralog.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, CatalogError>` everywhere, we can write
/// `Result<T>`. This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, CatalogError>;

/// All recoverable catalog outcomes that are not successes.
///
/// Every variant is an expected condition a caller can hit through the
/// facade (unknown key, wrong book state); none indicates corruption.
/// Structural invariant violations panic instead of surfacing here.
///
/// The `Display` text is the human-readable reason collaborator shells
/// show to users, so changing a message is an interface change.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// No book with this isbn exists in the ordered index.
    #[error("book not found: {0}")]
    BookNotFound(String),

    /// No member with this id exists in the member table.
    #[error("member not found: {0}")]
    MemberNotFound(String),

    /// Borrow attempted while the book's status is not `Available`.
    #[error("book {0} is not available")]
    BookUnavailable(String),

    /// Borrow attempted while the book has zero copies.
    ///
    /// Checked after the status check, so an `Available` book with zero
    /// copies reports this rather than `BookUnavailable`.
    #[error("no copies of {0} available")]
    NoCopiesAvailable(String),

    /// Return attempted by a member with no borrowed books on record.
    #[error("member {0} has no borrowed books")]
    NothingToReturn(String),
}
