//! Todo record model.
//!
//! # Responsibility
//! - Define the single titled, describable work item held by a `TodoList`.
//! - Own the done/undone state transitions and the one-line rendering.
//!
//! # Invariants
//! - `done` is only changed through `mark_done` / `mark_undone`.
//! - Equality is identity: two todos are equal iff they share a `TodoId`.
//! - Rendering never includes the description.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Marker rendered between brackets for a completed todo.
pub const DONE_MARKER: char = 'X';
/// Marker rendered between brackets for an open todo.
pub const UNDONE_MARKER: char = ' ';

/// Stable identity handle for a todo.
///
/// A clone is an independent copy that keeps the id. Copies compare equal
/// even after their titles or flags diverge.
pub type TodoId = Uuid;

/// Single work item with a title, a description and a completion flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Todo {
    id: TodoId,
    /// Free text, may be empty.
    pub title: String,
    /// Free text, empty by default.
    pub description: String,
    done: bool,
}

impl Todo {
    /// Creates an open todo with an empty description and a fresh identity.
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_description(title, "")
    }

    /// Creates an open todo with a description and a fresh identity.
    pub fn with_description(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            done: false,
        }
    }

    /// Creates an open todo with a caller-provided identity.
    ///
    /// The description starts empty. Exported snapshots are restored through
    /// `Deserialize`, which keeps every field.
    pub fn with_id(id: TodoId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            done: false,
        }
    }

    pub fn id(&self) -> TodoId {
        self.id
    }

    /// Marks this todo as done. Idempotent.
    pub fn mark_done(&mut self) {
        self.done = true;
    }

    /// Marks this todo as not done. Idempotent.
    pub fn mark_undone(&mut self) {
        self.done = false;
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn is_undone(&self) -> bool {
        !self.done
    }

    fn marker(&self) -> char {
        if self.done {
            DONE_MARKER
        } else {
            UNDONE_MARKER
        }
    }
}

impl PartialEq for Todo {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Todo {}

impl Display for Todo {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.marker(), self.title)
    }
}
