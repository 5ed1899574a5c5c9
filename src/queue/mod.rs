//! Pending-request queue.
//!
//! - [`FifoQueue`] - holds reservation records in enqueue order until a
//!   collaborator workflow fulfills them

mod fifo;

pub use fifo::FifoQueue;
