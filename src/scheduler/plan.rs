//! Simulated schedule and the flags derived from it.
//!
//! Everything here is a pure function of stamped task timings. Display
//! layers read alerts and the running marker from a plan instead of the
//! simulator raising them.

use serde::{Deserialize, Serialize};

use super::ScheduleKpi;
use crate::models::{RemainingTime, Task};

/// A simulated schedule in execution order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulePlan {
    /// Tasks in execution order, each with timing set.
    pub tasks: Vec<Task>,
    /// Near-deadline window used by [`alerts`](Self::alerts) (minutes).
    pub near_deadline_threshold_min: i64,
}

/// A deadline condition worth surfacing to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadlineAlert {
    /// Position in the plan.
    pub index: usize,
    /// Task name.
    pub task: String,
    /// Condition.
    pub kind: AlertKind,
}

/// Classification of deadline alerts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    /// Will finish on time, with at most the threshold to spare.
    NearDeadline {
        /// Minutes left after completion.
        remaining_min: i64,
    },
    /// Finishes after its deadline.
    Missed {
        /// Minutes past the deadline.
        overdue_min: i64,
    },
}

impl SchedulePlan {
    /// Wraps already simulated tasks.
    pub fn new(tasks: Vec<Task>, near_deadline_threshold_min: i64) -> Self {
        Self {
            tasks,
            near_deadline_threshold_min,
        }
    }

    /// Number of tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the plan is empty.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Completion time of the last task.
    pub fn makespan_min(&self) -> i64 {
        self.tasks
            .iter()
            .filter_map(|t| t.timing)
            .map(|t| t.turnaround_min)
            .max()
            .unwrap_or(0)
    }

    /// Index of the currently running task: the first one not skipped.
    pub fn current_index(&self) -> Option<usize> {
        self.tasks
            .iter()
            .position(|t| t.timing.is_some_and(|timing| !timing.skipped))
    }

    /// The currently running task.
    pub fn current(&self) -> Option<&Task> {
        self.current_index().map(|i| &self.tasks[i])
    }

    /// Tasks that miss their deadline.
    pub fn skipped(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|t| t.is_skipped())
    }

    /// Tasks inside the near-deadline window.
    pub fn near_deadline(&self) -> impl Iterator<Item = &Task> {
        let threshold = self.near_deadline_threshold_min;
        self.tasks
            .iter()
            .filter(move |t| t.timing.is_some_and(|timing| timing.is_near_deadline(threshold)))
    }

    /// Near-deadline and missed-deadline alerts in plan order.
    pub fn alerts(&self) -> Vec<DeadlineAlert> {
        let threshold = self.near_deadline_threshold_min;

        self.tasks
            .iter()
            .enumerate()
            .filter_map(|(index, task)| {
                let timing = task.timing?;
                let kind = if timing.skipped {
                    AlertKind::Missed {
                        overdue_min: timing.tardiness_min(),
                    }
                } else if timing.is_near_deadline(threshold) {
                    let RemainingTime::Minutes(remaining_min) = timing.remaining else {
                        return None;
                    };
                    AlertKind::NearDeadline { remaining_min }
                } else {
                    return None;
                };

                Some(DeadlineAlert {
                    index,
                    task: task.name.clone(),
                    kind,
                })
            })
            .collect()
    }

    /// Quality metrics for this plan.
    pub fn kpi(&self) -> ScheduleKpi {
        ScheduleKpi::calculate(&self.tasks)
    }

    /// Consumes the plan, returning the tasks.
    pub fn into_tasks(self) -> Vec<Task> {
        self.tasks
    }
}
