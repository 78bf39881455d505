//! Core domain logic for in-memory todo lists.
//! This crate is the single source of truth for list invariants.

pub mod logging;
pub mod model;

pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingConfig};
pub use model::todo::{Todo, TodoId, DONE_MARKER, UNDONE_MARKER};
pub use model::todo_list::{MarkOutcome, TodoList, TodoListError, TodoListResult};
