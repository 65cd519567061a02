//! Task model.
//!
//! A task is a single unit of work executed on one server without
//! preemption. It carries the scheduling inputs (priority, duration,
//! deadline) and, once a simulation pass has run, the derived timing.
//!
//! # Time Representation
//! All times are whole minutes relative to the scheduling start (t=0).

use serde::{Deserialize, Serialize};

use super::TaskTiming;

/// A task to be scheduled.
///
/// Identity is structural: two tasks with the same fields are
/// indistinguishable, and `name` is not required to be unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Human-readable name.
    pub name: String,
    /// Scheduling priority (higher = extracted first).
    pub priority: i32,
    /// Execution duration in minutes. Must be non-negative.
    pub duration_min: i64,
    /// Latest completion time in minutes. `None` = no deadline.
    pub deadline: Option<i64>,
    /// Derived timing from the most recent simulation pass.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timing: Option<TaskTiming>,
}

impl Task {
    /// Creates a new task with zero priority, zero duration and no deadline.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            priority: 0,
            duration_min: 0,
            deadline: None,
            timing: None,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the execution duration (minutes).
    pub fn with_duration(mut self, duration_min: i64) -> Self {
        self.duration_min = duration_min;
        self
    }

    /// Sets the deadline (minutes from scheduling start).
    pub fn with_deadline(mut self, deadline_min: i64) -> Self {
        self.deadline = Some(deadline_min);
        self
    }

    /// Whether this task has a deadline.
    pub fn has_deadline(&self) -> bool {
        self.deadline.is_some()
    }

    /// Whether the last simulation pass marked this task as missing its deadline.
    ///
    /// `false` for a task that has not been simulated.
    pub fn is_skipped(&self) -> bool {
        self.timing.is_some_and(|t| t.skipped)
    }

    /// Clears derived timing.
    pub fn reset_timing(&mut self) {
        self.timing = None;
    }
}
