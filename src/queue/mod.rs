//! Priority queue for pending tasks.
//!
//! `PriorityHeap` is a caller-owned binary max-heap. There is no
//! process-wide instance; each session or test constructs its own.

mod heap;

pub use heap::PriorityHeap;
