//! Input validation for tasks.
//!
//! Checks a task before it enters a heap. Detects:
//! - Negative execution duration
//!
//! Priority and deadline are integers, so unordered values (NaN)
//! cannot be represented and need no check.

use thiserror::Error;

use crate::models::Task;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationErrorKind {
    /// Execution duration is below zero.
    NegativeDuration,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a single task.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_task(task: &Task) -> ValidationResult {
    let mut errors = Vec::new();

    if task.duration_min < 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NegativeDuration,
            format!(
                "Task '{}' has negative duration: {} min",
                task.name, task.duration_min
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a batch of tasks, collecting the issues of every task.
pub fn validate_tasks(tasks: &[Task]) -> ValidationResult {
    let errors: Vec<ValidationError> = tasks
        .iter()
        .filter_map(|t| validate_task(t).err())
        .flatten()
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_task() {
        let task = Task::new("ok").with_priority(-3).with_duration(0);
        assert!(validate_task(&task).is_ok());
    }

    #[test]
    fn test_negative_duration() {
        let task = Task::new("bad").with_duration(-1);
        let errors = validate_task(&task).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::NegativeDuration);
        assert!(errors[0].message.contains("bad"));
        assert_eq!(errors[0].to_string(), errors[0].message);
    }

    #[test]
    fn test_negative_deadline_allowed() {
        let task = Task::new("late").with_duration(1).with_deadline(-5);
        assert!(validate_task(&task).is_ok());
    }

    #[test]
    fn test_batch_collects_all() {
        let tasks = vec![
            Task::new("a").with_duration(-1),
            Task::new("b").with_duration(3),
            Task::new("c").with_duration(-7),
        ];
        let errors = validate_tasks(&tasks).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[1].message.contains("'c'"));
    }

    #[test]
    fn test_batch_empty() {
        assert!(validate_tasks(&[]).is_ok());
    }
}
