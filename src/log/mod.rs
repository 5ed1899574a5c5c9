//! Audit log structures.
//!
//! Both logs grow without bound; neither evicts. They differ in read
//! direction and capping:
//! - [`LifoLog`] - stack; snapshot reads are most-recent-first
//! - [`RingLog`] - cyclic singly linked list with a pinned head;
//!   reads are oldest-first, capped by a caller limit

mod lifo;
mod ring;

pub use lifo::LifoLog;
pub use ring::RingLog;
