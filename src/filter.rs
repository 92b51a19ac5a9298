// View filters over the task list

use crate::task::Task;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which tasks a view shows; never changes the list itself
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Filter {
    #[default]
    All,
    InProgress, // not completed
    Completed,
}

impl Filter {
    /// Tab order in the header
    pub const ALL: [Filter; 3] = [Filter::All, Filter::InProgress, Filter::Completed];

    pub fn matches(self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::InProgress => !task.completed,
            Filter::Completed => task.completed,
        }
    }

    /// Tab caption
    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::InProgress => "in progress",
            Filter::Completed => "completed",
        }
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Filter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_ascii_lowercase()
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect();

        match normalized.as_str() {
            "all" => Ok(Filter::All),
            "inprogress" | "progress" | "todo" | "open" => Ok(Filter::InProgress),
            "completed" | "done" => Ok(Filter::Completed),
            _ => Err(format!(
                "unknown filter '{}' (expected all, in-progress or completed)",
                s.trim()
            )),
        }
    }
}
