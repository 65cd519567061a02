//! Session configuration.

use serde::{Deserialize, Serialize};

/// Default near-deadline warning window (minutes).
pub const DEFAULT_NEAR_DEADLINE_MIN: i64 = 10;

/// Ordering fed to the simulator when planning from a heap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimulationOrder {
    /// Priority descending. Stable: equal priorities keep heap array order.
    #[default]
    Priority,
    /// Raw heap array order. Satisfies the heap property but is not
    /// sorted, so timings can differ from extraction order.
    HeapArray,
}

/// Configuration for a [`ScheduleSession`](super::ScheduleSession).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Ordering used by `plan()`.
    pub order: SimulationOrder,
    /// Upper bound of the near-deadline window (minutes).
    pub near_deadline_threshold_min: i64,
}

impl SessionConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the planning order.
    pub fn with_order(mut self, order: SimulationOrder) -> Self {
        self.order = order;
        self
    }

    /// Sets the near-deadline window.
    pub fn with_near_deadline_threshold(mut self, minutes: i64) -> Self {
        self.near_deadline_threshold_min = minutes;
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            order: SimulationOrder::Priority,
            near_deadline_threshold_min: DEFAULT_NEAR_DEADLINE_MIN,
        }
    }
}
