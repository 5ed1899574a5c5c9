//! Member record and role.

use serde::{Deserialize, Serialize};

/// Membership role.
///
/// The core does not gate any operation on role; collaborator shells
/// use it for display and policy (fine rates, loan caps).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemberRole {
    Student,
    Faculty,
    Librarian,
    Administrator,
}

/// A library member record.
///
/// Keyed by `member_id`, looked up only by exact key in the member
/// table. Re-adding an id overwrites the existing record in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    /// Table key. Exact-match lookup only.
    pub member_id: String,
    pub name: String,
    pub email: String,
    pub role: MemberRole,
    /// Open loan count, maintained by the facade on borrow/return.
    pub books_borrowed: u32,
    /// Outstanding fines; owned by collaborator fine policy, carried here.
    pub fine_amount: f64,
}

impl Member {
    /// Create a member record with no open loans and no fines.
    pub fn new(
        member_id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: MemberRole,
    ) -> Self {
        Self {
            member_id: member_id.into(),
            name: name.into(),
            email: email.into(),
            role,
            books_borrowed: 0,
            fine_amount: 0.0,
        }
    }
}
