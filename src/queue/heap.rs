//! Binary max-heap over tasks keyed by priority.
//!
//! # Algorithm
//!
//! Array-backed complete binary tree. Node `i` has parent `(i-1)/2` and
//! children `2i+1`, `2i+2`. Insertion sifts the new element up while it
//! strictly outranks its parent; extraction moves the last element to the
//! root and sifts it down toward the strictly higher-priority child.
//!
//! # Complexity
//! `insert` and `extract_max` are O(log n); `snapshot` is O(n).
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 6 (Heapsort)

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ScheduleError;
use crate::models::Task;
use crate::validation::validate_task;

/// Max-heap of tasks ordered by `priority`.
///
/// Equal priorities have no defined relative order; the heap only
/// guarantees that no child outranks its parent.
///
/// # Example
///
/// ```
/// use u_priority_schedule::models::Task;
/// use u_priority_schedule::queue::PriorityHeap;
///
/// let mut heap = PriorityHeap::new();
/// heap.insert(Task::new("A").with_priority(5).with_duration(10)).unwrap();
/// heap.insert(Task::new("B").with_priority(8).with_duration(5)).unwrap();
///
/// assert_eq!(heap.extract_max().unwrap().name, "B");
/// assert_eq!(heap.extract_max().unwrap().name, "A");
/// assert!(heap.extract_max().is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Task>", into = "Vec<Task>")]
pub struct PriorityHeap {
    items: Vec<Task>,
}

impl PriorityHeap {
    /// Creates an empty heap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty heap with room for `capacity` tasks.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Inserts a task.
    ///
    /// The task is validated first; on error the heap is left unchanged.
    pub fn insert(&mut self, task: Task) -> Result<(), ScheduleError> {
        if let Err(errors) = validate_task(&task) {
            return Err(ScheduleError::invalid_task(task.name, errors));
        }

        debug!(
            task = %task.name,
            priority = task.priority,
            len = self.items.len() + 1,
            "insert"
        );
        self.items.push(task);
        self.sift_up(self.items.len() - 1);
        Ok(())
    }

    /// Removes and returns the highest-priority task, or `None` when empty.
    pub fn extract_max(&mut self) -> Option<Task> {
        let max = match self.items.len() {
            0 => return None,
            1 => self.items.pop(),
            _ => {
                let last = self.items.pop()?;
                let max = std::mem::replace(&mut self.items[0], last);
                self.sift_down(0);
                Some(max)
            }
        };

        if let Some(task) = &max {
            debug!(
                task = %task.name,
                priority = task.priority,
                len = self.items.len(),
                "extract_max"
            );
        }
        max
    }

    /// Highest-priority task without removing it.
    pub fn peek(&self) -> Option<&Task> {
        self.items.first()
    }

    /// Whether the heap holds no tasks.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of tasks.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Copy of the tasks in heap array order.
    ///
    /// This order satisfies the heap property but is **not** sorted by
    /// priority; sort the result before treating it as a schedule.
    pub fn snapshot(&self) -> Vec<Task> {
        self.items.clone()
    }

    /// Extracts every task, returning them in extraction order
    /// (non-increasing priority).
    pub fn drain_ordered(&mut self) -> Vec<Task> {
        let mut out = Vec::with_capacity(self.items.len());
        while let Some(task) = self.extract_max() {
            out.push(task);
        }
        out
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.items[index].priority <= self.items[parent].priority {
                break;
            }
            self.items.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.items.len();
        let priority = self.items[index].priority;

        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut swap = None;

            if left < len && self.items[left].priority > priority {
                swap = Some(left);
            }
            // Right must beat the current candidate, not just the sinking element.
            if right < len {
                let bar = match swap {
                    Some(l) => self.items[l].priority,
                    None => priority,
                };
                if self.items[right].priority > bar {
                    swap = Some(right);
                }
            }

            match swap {
                Some(child) => {
                    self.items.swap(index, child);
                    index = child;
                }
                None => break,
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn as_slice(&self) -> &[Task] {
        &self.items
    }
}

/// Rebuilds a heap by inserting each task, so every task is validated
/// and the heap property holds regardless of input order.
impl TryFrom<Vec<Task>> for PriorityHeap {
    type Error = ScheduleError;

    fn try_from(tasks: Vec<Task>) -> Result<Self, Self::Error> {
        let mut heap = Self::with_capacity(tasks.len());
        for task in tasks {
            heap.insert(task)?;
        }
        Ok(heap)
    }
}

impl From<PriorityHeap> for Vec<Task> {
    fn from(heap: PriorityHeap) -> Self {
        heap.items
    }
}
