// In-memory task list with priority ordering and filtered views

use crate::error::{MAX_DESCRIPTION_LEN, StoreError, StoreResult, ValidationError};
use crate::filter::Filter;
use crate::task::{Priority, Task, TaskId};
use chrono::{DateTime, Local};
use tracing::debug;

/// Ordered collection of tasks, highest priority first
///
/// The list is re-sorted after every insertion. The sort is stable, so tasks
/// of equal priority keep the order they had before the insertion.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a task stamped with the current local time
    pub fn add_task(&mut self, description: &str, priority: Option<Priority>) -> StoreResult<TaskId> {
        self.add_task_at(description, priority, Local::now())
    }

    /// Add a task with an explicit creation time
    pub fn add_task_at(
        &mut self,
        description: &str,
        priority: Option<Priority>,
        created_at: DateTime<Local>,
    ) -> StoreResult<TaskId> {
        let description = Self::validate_description(description)?;
        let priority = priority.ok_or(ValidationError::PriorityUnset)?;

        let task = Task::new(description, priority, created_at);
        let id = task.id;
        debug!(%id, %priority, "add_task: appending");

        self.tasks.push(task);
        self.sort_by_priority();

        Ok(id)
    }

    /// Remove a task, keeping the order of the rest
    pub fn remove_task(&mut self, id: TaskId) -> StoreResult<Task> {
        let index = self.position(id)?;
        debug!(%id, index, "remove_task");
        Ok(self.tasks.remove(index))
    }

    /// Flip the completed flag; returns the new value
    pub fn toggle_completed(&mut self, id: TaskId) -> StoreResult<bool> {
        let task = self.get_mut(id)?;
        task.completed = !task.completed;
        debug!(%id, completed = task.completed, "toggle_completed");
        Ok(task.completed)
    }

    /// Advance Low -> Medium -> High -> Low; returns the new priority
    ///
    /// The list is not re-sorted: only insertion reorders tasks.
    pub fn cycle_priority(&mut self, id: TaskId) -> StoreResult<Priority> {
        let task = self.get_mut(id)?;
        task.priority = task.priority.next();
        debug!(%id, priority = %task.priority, "cycle_priority");
        Ok(task.priority)
    }

    /// Lazy view of the tasks the filter lets through, in list order
    ///
    /// The returned iterator is `Clone`, so a view can be walked more than once.
    pub fn list_visible(&self, filter: Filter) -> impl Iterator<Item = &Task> + Clone + '_ {
        self.tasks.iter().filter(move |task| filter.matches(task))
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// All tasks in list order
    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    /// Number of tasks a filter tab would show
    pub fn count(&self, filter: Filter) -> usize {
        self.list_visible(filter).count()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    // ========================================================================
    // Helper methods
    // ========================================================================

    fn sort_by_priority(&mut self) {
        // sort_by is stable
        self.tasks.sort_by(|a, b| b.priority.cmp(&a.priority));
    }

    fn position(&self, id: TaskId) -> StoreResult<usize> {
        self.tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(StoreError::NotFound(id))
    }

    fn get_mut(&mut self, id: TaskId) -> StoreResult<&mut Task> {
        self.tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(StoreError::NotFound(id))
    }

    pub(crate) fn validate_description(description: &str) -> Result<&str, ValidationError> {
        let trimmed = description.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyDescription);
        }

        let len = trimmed.chars().count();
        if len > MAX_DESCRIPTION_LEN {
            return Err(ValidationError::DescriptionTooLong(len));
        }

        Ok(trimmed)
    }
}

impl<'a> IntoIterator for &'a TaskStore {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
