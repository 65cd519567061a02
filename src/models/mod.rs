//! Scheduling domain models.
//!
//! | Type | Role |
//! |------|------|
//! | `Task` | Unit of work: name, priority, duration, optional deadline |
//! | `TaskTiming` | Waiting, turnaround, remaining time and miss flag |
//! | `RemainingTime` | Finite minutes or unbounded (no deadline) |

mod task;
mod timing;

pub use task::Task;
pub use timing::{RemainingTime, TaskTiming};
