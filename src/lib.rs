// todoc - In-memory to-do list with priority ordering and filter tabs

pub mod app;
pub mod command;
pub mod config;
pub mod error;
pub mod filter;
pub mod render;
pub mod session;
pub mod store;
pub mod task;

// Re-export main types for convenience
pub use app::{App, Draft, Event, Outcome, Tab};
pub use config::Config;
pub use error::{StoreError, StoreResult, ValidationError};
pub use filter::Filter;
pub use render::{Frame, RenderOptions, render};
pub use store::TaskStore;
pub use task::{Priority, Task, TaskId};
