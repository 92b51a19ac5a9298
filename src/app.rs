// Presentation state and event dispatch

use crate::error::{StoreError, StoreResult};
use crate::filter::Filter;
use crate::store::TaskStore;
use crate::task::{Priority, TaskId};
use tracing::debug;

/// Screen currently shown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Dashboard,
    NewTask,
}

/// Contents of the new-task form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub description: String,
    pub priority: Option<Priority>,
}

impl Draft {
    /// Whether the Add button is enabled
    pub fn is_valid(&self) -> bool {
        self.priority.is_some() && TaskStore::validate_description(&self.description).is_ok()
    }

    fn clear(&mut self) {
        self.description.clear();
        self.priority = None;
    }
}

/// User interaction relayed by the front end
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    OpenNewTask,
    Back,
    SelectFilter(Filter),
    /// Rows are 1-based positions in the currently visible list
    ToggleRow(usize),
    CycleRow(usize),
    DeleteRow(usize),
    EditDescription(String),
    SelectPriority(Priority),
    Submit,
}

/// What an event did, for the front end to report
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Ignored,
    Updated,
    Added(TaskId),
    Removed(TaskId),
}

#[derive(Debug, Clone, Default)]
pub struct App {
    store: TaskStore,
    tab: Tab,
    filter: Filter,
    draft: Draft,
}

impl App {
    pub fn new(filter: Filter) -> Self {
        Self {
            filter,
            ..Self::default()
        }
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn can_submit(&self) -> bool {
        self.draft.is_valid()
    }

    /// Apply one event; events meant for the other tab are ignored
    pub fn handle(&mut self, event: Event) -> StoreResult<Outcome> {
        match (self.tab, event) {
            (Tab::Dashboard, Event::OpenNewTask) => {
                self.tab = Tab::NewTask;
                Ok(Outcome::Updated)
            }
            (Tab::Dashboard, Event::SelectFilter(filter)) => {
                self.filter = filter;
                Ok(Outcome::Updated)
            }
            (Tab::Dashboard, Event::ToggleRow(row)) => {
                let id = self.row_id(row)?;
                self.store.toggle_completed(id)?;
                Ok(Outcome::Updated)
            }
            (Tab::Dashboard, Event::CycleRow(row)) => {
                let id = self.row_id(row)?;
                self.store.cycle_priority(id)?;
                Ok(Outcome::Updated)
            }
            (Tab::Dashboard, Event::DeleteRow(row)) => {
                let id = self.row_id(row)?;
                self.store.remove_task(id)?;
                Ok(Outcome::Removed(id))
            }
            (Tab::NewTask, Event::Back) => {
                self.tab = Tab::Dashboard;
                Ok(Outcome::Updated)
            }
            (Tab::NewTask, Event::EditDescription(text)) => {
                self.draft.description = text;
                Ok(Outcome::Updated)
            }
            (Tab::NewTask, Event::SelectPriority(priority)) => {
                self.draft.priority = Some(priority);
                Ok(Outcome::Updated)
            }
            (Tab::NewTask, Event::Submit) => {
                let id = self.store.add_task(&self.draft.description, self.draft.priority)?;
                self.draft.clear();
                self.tab = Tab::Dashboard;
                Ok(Outcome::Added(id))
            }
            (tab, event) => {
                debug!(?tab, ?event, "handle: event not available on this tab");
                Ok(Outcome::Ignored)
            }
        }
    }

    /// Resolve a 1-based row of the visible list to the task shown there
    fn row_id(&self, row: usize) -> StoreResult<TaskId> {
        row.checked_sub(1)
            .and_then(|index| self.store.list_visible(self.filter).nth(index))
            .map(|task| task.id)
            .ok_or(StoreError::RowNotFound(row))
    }
}
