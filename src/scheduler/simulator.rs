//! Non-preemptive single-server timeline simulation.
//!
//! # Algorithm
//!
//! 1. Start the clock at t=0.
//! 2. For each task in input order: it waits until the clock, runs for
//!    its duration, and completes at the new clock value.
//! 3. Stamp waiting time, turnaround time, remaining time to deadline
//!    and the miss flag.
//!
//! Tasks are never reordered. A later task with a tighter deadline still
//! runs after earlier ones and may be marked skipped in place.
//!
//! # Complexity
//! O(n) for n tasks.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

use tracing::{debug, trace};

use crate::models::{Task, TaskTiming};

/// Single-server, non-preemptive schedule simulator.
///
/// # Example
///
/// ```
/// use u_priority_schedule::models::{RemainingTime, Task};
/// use u_priority_schedule::scheduler::ScheduleSimulator;
///
/// let mut tasks = vec![
///     Task::new("B").with_priority(8).with_duration(5).with_deadline(20),
///     Task::new("A").with_priority(5).with_duration(10).with_deadline(15),
///     Task::new("C").with_priority(3).with_duration(20).with_deadline(25),
/// ];
/// ScheduleSimulator::new().simulate(&mut tasks);
///
/// let c = tasks[2].timing.unwrap();
/// assert_eq!(c.waiting_min, 15);
/// assert_eq!(c.turnaround_min, 35);
/// assert_eq!(c.remaining, RemainingTime::Minutes(-10));
/// assert!(c.skipped);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ScheduleSimulator;

impl ScheduleSimulator {
    /// Creates a simulator.
    pub fn new() -> Self {
        Self
    }

    /// Simulates execution in slice order, overwriting each task's timing.
    ///
    /// Returns the completion time of the last task (0 when empty).
    pub fn simulate(&self, tasks: &mut [Task]) -> i64 {
        let mut clock: i64 = 0;

        for task in tasks.iter_mut() {
            let timing = TaskTiming::compute(clock, task.duration_min, task.deadline);
            clock = timing.turnaround_min;

            trace!(
                task = %task.name,
                waiting = timing.waiting_min,
                turnaround = timing.turnaround_min,
                "simulated"
            );
            if timing.skipped {
                debug!(
                    task = %task.name,
                    turnaround = timing.turnaround_min,
                    deadline = ?task.deadline,
                    "deadline missed"
                );
            }

            task.timing = Some(timing);
        }

        clock
    }

    /// Owning form of [`simulate`](Self::simulate).
    pub fn simulated(&self, mut tasks: Vec<Task>) -> Vec<Task> {
        self.simulate(&mut tasks);
        tasks
    }
}
