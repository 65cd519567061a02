//! Crate-level error type.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors returned by scheduling operations.
///
/// An empty heap and a missed deadline are not errors: the former is
/// `None` from extraction, the latter a `skipped` flag on the task.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ScheduleError {
    /// The task failed validation and was not inserted.
    #[error("invalid task '{name}': {}", join_messages(.errors))]
    InvalidTask {
        /// Name of the rejected task.
        name: String,
        /// Every issue found.
        errors: Vec<ValidationError>,
    },
}

impl ScheduleError {
    /// Creates an invalid task error.
    pub fn invalid_task(name: impl Into<String>, errors: Vec<ValidationError>) -> Self {
        Self::InvalidTask {
            name: name.into(),
            errors,
        }
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
