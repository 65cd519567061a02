//! Priority-driven task scheduling.
//!
//! A binary max-heap orders pending tasks by priority, and a
//! single-server, non-preemptive simulation stamps each task in a given
//! order with waiting time, turnaround time, remaining time to deadline
//! and a missed-deadline flag.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Task`, `TaskTiming`, `RemainingTime`
//! - **`queue`**: `PriorityHeap`, the caller-owned max-heap
//! - **`scheduler`**: `ScheduleSimulator`, `ScheduleSession`, `SchedulePlan`, `ScheduleKpi`
//! - **`validation`**: Input checks applied before a task enters a heap
//!
//! # Example
//!
//! ```
//! use u_priority_schedule::models::Task;
//! use u_priority_schedule::queue::PriorityHeap;
//! use u_priority_schedule::scheduler::ScheduleSimulator;
//!
//! let mut heap = PriorityHeap::new();
//! heap.insert(Task::new("A").with_priority(5).with_duration(10).with_deadline(15))?;
//! heap.insert(Task::new("B").with_priority(8).with_duration(5).with_deadline(20))?;
//!
//! let order = heap.drain_ordered();
//! let plan = ScheduleSimulator::new().simulated(order);
//! assert_eq!(plan[0].name, "B");
//! assert_eq!(plan[1].timing.unwrap().turnaround_min, 15);
//! # Ok::<(), u_priority_schedule::ScheduleError>(())
//! ```
//!
//! # References
//!
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 6
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

mod error;
pub mod models;
pub mod queue;
pub mod scheduler;
pub mod validation;

pub use error::ScheduleError;
