//! Derived timing produced by a simulation pass.

use serde::{Deserialize, Serialize};

/// Time left between completion and deadline.
///
/// `Unbounded` is the value for tasks without a deadline and orders
/// after every finite value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemainingTime {
    /// Deadline minus turnaround, in minutes. Negative when missed.
    Minutes(i64),
    /// No deadline.
    Unbounded,
}

impl RemainingTime {
    /// Finite minutes, or `None` when unbounded.
    pub fn minutes(self) -> Option<i64> {
        match self {
            Self::Minutes(m) => Some(m),
            Self::Unbounded => None,
        }
    }

    /// Whether there is no deadline.
    pub fn is_unbounded(self) -> bool {
        matches!(self, Self::Unbounded)
    }
}

/// Per-task result of a single-server simulation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskTiming {
    /// Minutes spent queued before execution starts.
    pub waiting_min: i64,
    /// Completion time in minutes from scheduling start.
    pub turnaround_min: i64,
    /// Deadline minus turnaround.
    pub remaining: RemainingTime,
    /// Whether turnaround exceeded the deadline.
    pub skipped: bool,
}

impl TaskTiming {
    /// Computes timing for a task starting at `start_min` and running
    /// for `duration_min`.
    pub fn compute(start_min: i64, duration_min: i64, deadline: Option<i64>) -> Self {
        let turnaround_min = start_min.saturating_add(duration_min);
        let (remaining, skipped) = match deadline {
            Some(d) => (
                RemainingTime::Minutes(d.saturating_sub(turnaround_min)),
                turnaround_min > d,
            ),
            None => (RemainingTime::Unbounded, false),
        };

        Self {
            waiting_min: start_min,
            turnaround_min,
            remaining,
            skipped,
        }
    }

    /// Execution time implied by this timing.
    #[inline]
    pub fn service_min(&self) -> i64 {
        self.turnaround_min - self.waiting_min
    }

    /// Not skipped and `0 < remaining <= threshold_min`.
    pub fn is_near_deadline(&self, threshold_min: i64) -> bool {
        if self.skipped {
            return false;
        }
        match self.remaining {
            RemainingTime::Minutes(m) => m > 0 && m <= threshold_min,
            RemainingTime::Unbounded => false,
        }
    }

    /// Minutes past the deadline (0 when on time or unbounded).
    pub fn tardiness_min(&self) -> i64 {
        match self.remaining {
            RemainingTime::Minutes(m) if m < 0 => m.saturating_neg(),
            _ => 0,
        }
    }
}
