//! Caller-owned scheduling session.
//!
//! Bundles one `PriorityHeap` with a configuration and composes it with
//! the simulator. Each session is independent; a service that shares
//! one across threads wraps it in a mutex.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{SchedulePlan, ScheduleSimulator, SessionConfig, SimulationOrder};
use crate::error::ScheduleError;
use crate::models::Task;
use crate::queue::PriorityHeap;

/// A scheduling session: pending tasks plus planning configuration.
///
/// # Example
///
/// ```
/// use u_priority_schedule::models::Task;
/// use u_priority_schedule::scheduler::ScheduleSession;
///
/// let mut session = ScheduleSession::new();
/// session.submit(Task::new("A").with_priority(5).with_duration(10).with_deadline(15)).unwrap();
/// session.submit(Task::new("B").with_priority(8).with_duration(5).with_deadline(20)).unwrap();
/// session.submit(Task::new("C").with_priority(3).with_duration(20).with_deadline(25)).unwrap();
///
/// let plan = session.plan();
/// let names: Vec<&str> = plan.tasks.iter().map(|t| t.name.as_str()).collect();
/// assert_eq!(names, ["B", "A", "C"]);
/// assert_eq!(plan.skipped().count(), 1);
/// assert_eq!(session.len(), 3);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleSession {
    heap: PriorityHeap,
    config: SessionConfig,
    #[serde(skip)]
    simulator: ScheduleSimulator,
}

impl ScheduleSession {
    /// Creates an empty session with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the configuration.
    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Adds a task to the queue.
    pub fn submit(&mut self, task: Task) -> Result<(), ScheduleError> {
        self.heap.insert(task)
    }

    /// Adds several tasks, stopping at the first invalid one.
    ///
    /// Tasks before the invalid one remain queued.
    pub fn submit_all<I>(&mut self, tasks: I) -> Result<(), ScheduleError>
    where
        I: IntoIterator<Item = Task>,
    {
        for task in tasks {
            self.submit(task)?;
        }
        Ok(())
    }

    /// Removes and returns the highest-priority task.
    pub fn next_task(&mut self) -> Option<Task> {
        self.heap.extract_max()
    }

    /// Number of queued tasks.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether no tasks are queued.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Copy of the queued tasks in heap array order.
    pub fn snapshot(&self) -> Vec<Task> {
        self.heap.snapshot()
    }

    /// Simulates the queued tasks without removing them.
    ///
    /// Ordering follows [`SessionConfig::order`].
    pub fn plan(&self) -> SchedulePlan {
        let mut tasks = self.heap.snapshot();
        if self.config.order == SimulationOrder::Priority {
            tasks.sort_by(|a, b| b.priority.cmp(&a.priority));
        }
        self.finish(tasks)
    }

    /// Extracts every queued task and simulates them in extraction order.
    pub fn drain_plan(&mut self) -> SchedulePlan {
        let tasks = self.heap.drain_ordered();
        self.finish(tasks)
    }

    fn finish(&self, mut tasks: Vec<Task>) -> SchedulePlan {
        let makespan = self.simulator.simulate(&mut tasks);
        debug!(
            tasks = tasks.len(),
            makespan,
            order = ?self.config.order,
            "planned"
        );
        SchedulePlan::new(tasks, self.config.near_deadline_threshold_min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RemainingTime;

    fn example_session(config: SessionConfig) -> ScheduleSession {
        let mut session = ScheduleSession::new().with_config(config);
        session
            .submit_all([
                Task::new("A").with_priority(5).with_duration(10).with_deadline(15),
                Task::new("B").with_priority(8).with_duration(5).with_deadline(20),
                Task::new("C").with_priority(3).with_duration(20).with_deadline(25),
            ])
            .unwrap();
        session
    }

    fn names(plan: &SchedulePlan) -> Vec<&str> {
        plan.tasks.iter().map(|t| t.name.as_str()).collect()
    }

    #[test]
    fn test_plan_priority_order() {
        let session = example_session(SessionConfig::new());
        let plan = session.plan();

        assert_eq!(names(&plan), vec!["B", "A", "C"]);
        let a = plan.tasks[1].timing.unwrap();
        assert_eq!(a.remaining, RemainingTime::Minutes(0));
        assert!(!a.skipped);
        assert_eq!(plan.current().unwrap().name, "B");

        // Planning does not consume or annotate the queue.
        assert_eq!(session.len(), 3);
        assert!(session.snapshot().iter().all(|t| t.timing.is_none()));
    }

    #[test]
    fn test_plan_heap_array_order() {
        // Heap array after inserts 3, 1, 2 is [3, 1, 2], not sorted.
        let mut session = ScheduleSession::new()
            .with_config(SessionConfig::new().with_order(SimulationOrder::HeapArray));
        session
            .submit_all([
                Task::new("x").with_priority(3).with_duration(1),
                Task::new("y").with_priority(1).with_duration(1),
                Task::new("z").with_priority(2).with_duration(1),
            ])
            .unwrap();

        assert_eq!(names(&session.plan()), vec!["x", "y", "z"]);

        let sorted = session.clone().with_config(SessionConfig::new()).plan();
        assert_eq!(names(&sorted), vec!["x", "z", "y"]);
    }

    #[test]
    fn test_plan_ties_keep_heap_order() {
        let mut session = ScheduleSession::new();
        session
            .submit_all([
                Task::new("first").with_priority(1).with_duration(1),
                Task::new("second").with_priority(1).with_duration(1),
            ])
            .unwrap();
        assert_eq!(names(&session.plan()), vec!["first", "second"]);
    }

    #[test]
    fn test_drain_plan_matches_priority_plan() {
        let mut session = example_session(SessionConfig::new());
        let planned = session.plan();
        let drained = session.drain_plan();

        assert_eq!(planned.tasks, drained.tasks);
        assert!(session.is_empty());
    }

    #[test]
    fn test_next_task_and_empty_signal() {
        let mut session = example_session(SessionConfig::new());
        assert_eq!(session.next_task().unwrap().name, "B");
        assert_eq!(session.len(), 2);

        session.drain_plan();
        assert!(session.next_task().is_none());
        assert!(session.plan().is_empty());
    }

    #[test]
    fn test_submit_all_stops_at_invalid() {
        let mut session = ScheduleSession::new();
        let err = session
            .submit_all([
                Task::new("ok").with_duration(1),
                Task::new("bad").with_duration(-3),
                Task::new("never").with_duration(1),
            ])
            .unwrap_err();

        assert!(matches!(err, ScheduleError::InvalidTask { ref name, .. } if name == "bad"));
        assert_eq!(session.len(), 1);
    }

    #[test]
    fn test_threshold_from_config() {
        let mut session = ScheduleSession::new()
            .with_config(SessionConfig::new().with_near_deadline_threshold(20));
        session
            .submit(Task::new("t").with_duration(5).with_deadline(20))
            .unwrap();

        let plan = session.plan();
        assert_eq!(plan.near_deadline_threshold_min, 20);
        assert_eq!(plan.alerts().len(), 1);
        assert_eq!(ScheduleSession::new().config().near_deadline_threshold_min, 10);
    }

    #[test]
    fn test_deserialize_validates_queue() {
        let json = r#"{
            "heap": [
                {"name": "low", "priority": 1, "duration_min": 5, "deadline": null},
                {"name": "high", "priority": 9, "duration_min": 5, "deadline": null}
            ],
            "config": {"order": "priority", "near_deadline_threshold_min": 10}
        }"#;
        let mut session: ScheduleSession = serde_json::from_str(json).unwrap();
        assert_eq!(session.next_task().unwrap().name, "high");

        let invalid = r#"{
            "heap": [{"name": "neg", "priority": 1, "duration_min": -5, "deadline": null}],
            "config": {}
        }"#;
        let err = serde_json::from_str::<ScheduleSession>(invalid).unwrap_err();
        assert!(err.to_string().contains("invalid task 'neg'"));
    }

    #[test]
    fn test_sessions_are_independent() {
        let mut a = ScheduleSession::new();
        let b = ScheduleSession::new();
        a.submit(Task::new("only-a").with_duration(1)).unwrap();
        assert_eq!(a.len(), 1);
        assert!(b.is_empty());
    }
}
