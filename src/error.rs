use crate::task::TaskId;
use thiserror::Error;

/// Longest description accepted, matching the 512-byte input buffer of the form
pub const MAX_DESCRIPTION_LEN: usize = 511;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Task description cannot be empty")]
    EmptyDescription,

    #[error("Pick a priority before adding the task")]
    PriorityUnset,

    #[error("Task description too long: {0} chars (max {max})", max = MAX_DESCRIPTION_LEN)]
    DescriptionTooLong(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Task not found: {0}")]
    NotFound(TaskId),

    #[error("No task at row {0}")]
    RowNotFound(usize),
}

impl StoreError {
    pub fn is_validation(&self) -> bool {
        matches!(self, StoreError::Validation(_))
    }

    /// True for both stale ids and out-of-range rows
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_) | StoreError::RowNotFound(_))
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        let err: StoreError = ValidationError::EmptyDescription.into();
        assert!(err.is_validation());
        assert!(!err.is_not_found());

        assert!(StoreError::NotFound(TaskId::new()).is_not_found());
        assert!(StoreError::RowNotFound(4).is_not_found());
    }

    #[test]
    fn test_error_display() {
        let err: StoreError = ValidationError::DescriptionTooLong(600).into();
        assert_eq!(err.to_string(), "Task description too long: 600 chars (max 511)");
        assert_eq!(StoreError::RowNotFound(3).to_string(), "No task at row 3");
    }
}
