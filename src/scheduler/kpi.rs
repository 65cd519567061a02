//! Schedule quality metrics (KPIs).
//!
//! Computes standard single-server performance indicators from
//! simulated tasks.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan (C_max) | Latest completion time |
//! | Avg Waiting | Mean time queued before start |
//! | Avg Turnaround | Mean completion time |
//! | Total Tardiness | Sum of max(0, completion - deadline) |
//! | Maximum Tardiness | Largest single delay |
//! | On-Time Rate | Fraction meeting deadlines |
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 1.2: Performance Measures

use serde::{Deserialize, Serialize};

use crate::models::Task;

/// Schedule performance indicators.
///
/// All time values are in minutes. Tasks without timing are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleKpi {
    /// Number of simulated tasks counted.
    pub task_count: usize,
    /// Makespan: latest completion time.
    pub makespan_min: i64,
    /// Sum of waiting times.
    pub total_waiting_min: i64,
    /// Mean waiting time.
    pub avg_waiting_min: f64,
    /// Mean turnaround time.
    pub avg_turnaround_min: f64,
    /// Sum of tardiness across all tasks.
    pub total_tardiness_min: i64,
    /// Maximum tardiness of any single task.
    pub max_tardiness_min: i64,
    /// Tasks that missed their deadline.
    pub missed_count: usize,
    /// Fraction of tasks completing on time (0.0..1.0).
    pub on_time_rate: f64,
}

impl ScheduleKpi {
    /// Computes KPIs from simulated tasks.
    pub fn calculate(tasks: &[Task]) -> Self {
        let mut counted_tasks: usize = 0;
        let mut makespan: i64 = 0;
        let mut total_waiting: i64 = 0;
        let mut total_turnaround: i64 = 0;
        let mut total_tardiness: i64 = 0;
        let mut max_tardiness: i64 = 0;
        let mut missed: usize = 0;

        for timing in tasks.iter().filter_map(|t| t.timing) {
            counted_tasks += 1;
            makespan = makespan.max(timing.turnaround_min);
            total_waiting = total_waiting.saturating_add(timing.waiting_min);
            total_turnaround = total_turnaround.saturating_add(timing.turnaround_min);

            // No deadline → considered on-time
            if timing.skipped {
                missed += 1;
                let tardiness = timing.tardiness_min();
                total_tardiness = total_tardiness.saturating_add(tardiness);
                max_tardiness = max_tardiness.max(tardiness);
            }
        }

        let (avg_waiting, avg_turnaround, on_time_rate) = if counted_tasks == 0 {
            (0.0, 0.0, 1.0)
        } else {
            let n = counted_tasks as f64;
            (
                total_waiting as f64 / n,
                total_turnaround as f64 / n,
                (counted_tasks - missed) as f64 / n,
            )
        };

        Self {
            task_count: counted_tasks,
            makespan_min: makespan,
            total_waiting_min: total_waiting,
            avg_waiting_min: avg_waiting,
            avg_turnaround_min: avg_turnaround,
            total_tardiness_min: total_tardiness,
            max_tardiness_min: max_tardiness,
            missed_count: missed,
            on_time_rate,
        }
    }

    /// Whether the schedule stays within the given tardiness bound.
    pub fn meets_threshold(&self, max_tardiness_min: i64) -> bool {
        self.max_tardiness_min <= max_tardiness_min
    }
}
