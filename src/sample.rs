//! Demo catalog fixture.
//!
//! Builds a populated catalog strictly through facade operations, so
//! statuses, loan counts, and audit logs stay mutually consistent.
//! Collaborator shells use it as startup data; benches use it as a
//! realistic working set. No I/O involved.

use crate::catalog::Catalog;
use crate::record::{Book, BookStatus, Member, MemberRole};

/// Flag a seeded book as already circulating.
fn borrowed(mut book: Book) -> Book {
    book.status = BookStatus::Borrowed;
    book
}

/// Pre-set a seeded member's loan count and fines.
fn with_loans(mut member: Member, books_borrowed: u32, fine_amount: f64) -> Member {
    member.books_borrowed = books_borrowed;
    member.fine_amount = fine_amount;
    member
}

/// A catalog seeded with demo books, members, reservations, and a
/// short circulation history.
///
/// The circulation events run through [`Catalog::borrow_book`] and
/// [`Catalog::return_book`], so the resulting statuses and transaction
/// ids (`TXN001`..) are exactly what live operation would produce.
pub fn sample_catalog() -> Catalog {
    let mut catalog = Catalog::new();

    for book in [
        Book::new("978-0134685991", "Effective Java", "Joshua Bloch", "Programming", 3),
        Book::new("978-0135166307", "Clean Code", "Robert Martin", "Programming", 2),
        borrowed(Book::new("978-0596517748", "JavaScript: The Good Parts", "Douglas Crockford", "Programming", 1)),
        Book::new("978-0321125215", "Domain-Driven Design", "Eric Evans", "Software Engineering", 2),
        Book::new("978-0201616224", "The Pragmatic Programmer", "Andy Hunt", "Programming", 4),
        Book::new("978-0132350884", "Clean Architecture", "Robert Martin", "Software Engineering", 2),
        borrowed(Book::new("978-0134494166", "Clean Coder", "Robert Martin", "Professional Development", 1)),
        Book::new("978-0321146533", "Test Driven Development", "Kent Beck", "Programming", 3),
    ] {
        catalog.add_book(book);
    }

    for member in [
        with_loans(Member::new("STU001", "Alice Johnson", "alice.j@university.edu", MemberRole::Student), 2, 0.0),
        with_loans(Member::new("FAC001", "Dr. Robert Smith", "r.smith@university.edu", MemberRole::Faculty), 5, 0.0),
        with_loans(Member::new("STU002", "Bob Wilson", "bob.w@university.edu", MemberRole::Student), 1, 15.50),
        Member::new("STU003", "Carol Davis", "carol.d@university.edu", MemberRole::Student),
        with_loans(Member::new("FAC002", "Prof. Sarah Lee", "s.lee@university.edu", MemberRole::Faculty), 3, 0.0),
        Member::new("LIB001", "Michael Chen", "m.chen@university.edu", MemberRole::Librarian),
        with_loans(Member::new("STU004", "Diana Martinez", "diana.m@university.edu", MemberRole::Student), 4, 5.00),
        Member::new("ADM001", "Admin User", "admin@university.edu", MemberRole::Administrator),
    ] {
        catalog.add_member(member);
    }

    // Live circulation over the seeded records. Every pair is valid by
    // construction, so a failure means the fixture itself regressed.
    catalog
        .borrow_book("STU001", "978-0134685991")
        .expect("sample borrow is consistent");
    catalog
        .borrow_book("FAC001", "978-0135166307")
        .expect("sample borrow is consistent");
    catalog
        .return_book("STU001", "978-0321125215")
        .expect("sample return is consistent");
    catalog
        .borrow_book("FAC002", "978-0201616224")
        .expect("sample borrow is consistent");

    catalog
        .reserve("STU003", "978-0596517748")
        .expect("sample reservation is consistent");
    catalog
        .reserve("STU004", "978-0134685991")
        .expect("sample reservation is consistent");

    catalog
}
