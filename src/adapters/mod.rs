//! Narrow views over [`Sequence`](crate::Sequence).
//!
//! Each adapter owns one sequence and forwards to it, so every error condition
//! and every teardown point is exactly the one of the underlying container.

mod deque;
mod queue;
mod stack;

pub use deque::Deque;
pub use queue::Queue;
pub use stack::Stack;
