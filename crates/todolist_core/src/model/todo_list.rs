//! Ordered todo collection.
//!
//! # Responsibility
//! - Hold an ordered sequence of `Todo` records under a list title.
//! - Provide validated positional, title-based and bulk status operations.
//! - Render the list as a header line followed by one line per todo.
//!
//! # Invariants
//! - Every mutation validates its input before touching the sequence.
//! - `add_at` accepts `index <= len`; lookups accept negative indices
//!   counting from the end. The two bounds policies are intentionally distinct.
//! - Derived lists (`select`, `all_done`, `all_not_done`) keep the source
//!   title and never mutate the source.
//! - List equality compares todos by identity and ignores titles.
//! - Each slot owns its todo; copies sharing an id change independently.
//! - Log events carry indices and sizes only, never titles or descriptions.

use crate::model::todo::Todo;
use log::debug;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::ops::Shl;

pub type TodoListResult<T> = Result<T, TodoListError>;

/// Error for list operations that reject their input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoListError {
    /// Index is outside the range accepted by the operation.
    IndexOutOfBounds { index: isize, len: usize },
    /// Insert position is past the end of the list.
    InsertOutOfBounds { index: usize, len: usize },
    /// Title text does not compile as a case-insensitive pattern.
    InvalidTitlePattern { pattern: String, message: String },
    /// No todo title matches the given text.
    NoTitleMatch(String),
}

impl Display for TodoListError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} outside of list bounds (len {len})")
            }
            Self::InsertOutOfBounds { index, len } => {
                write!(f, "insert index {index} outside of list bounds (len {len})")
            }
            Self::InvalidTitlePattern { pattern, message } => {
                write!(f, "invalid title pattern `{pattern}`: {message}")
            }
            Self::NoTitleMatch(text) => write!(f, "no todo title matches `{text}`"),
        }
    }
}

impl Error for TodoListError {}

/// Result of marking a todo by title.
///
/// A missing match is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkOutcome {
    /// The first matching todo, at `index`, was marked.
    Marked { index: usize },
    /// Nothing matched; the list is unchanged.
    NotFound { message: String },
}

impl MarkOutcome {
    fn not_found(text: &str) -> Self {
        Self::NotFound {
            message: format!("No item found with '{text}' in its title."),
        }
    }

    pub fn is_marked(&self) -> bool {
        matches!(self, Self::Marked { .. })
    }

    /// Human-readable message for a missed match.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Marked { .. } => None,
            Self::NotFound { message } => Some(message.as_str()),
        }
    }
}

/// Titled, ordered collection of todos.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoList {
    title: String,
    todos: Vec<Todo>,
}

impl TodoList {
    /// Creates an empty list.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            todos: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Replaces the list title.
    pub fn rename_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        debug!("event=list_rename module=todo_list status=ok");
    }

    /// Appends a todo and returns the list for chaining.
    ///
    /// `list << todo` is the by-value operator form.
    pub fn add(&mut self, todo: Todo) -> &mut Self {
        self.todos.push(todo);
        debug!(
            "event=todo_add module=todo_list status=ok size={}",
            self.todos.len()
        );
        self
    }

    /// Inserts a todo at `index`, shifting later todos right.
    ///
    /// `index == len` appends.
    ///
    /// # Errors
    /// - `InsertOutOfBounds` when `index > len`.
    pub fn add_at(&mut self, index: usize, todo: Todo) -> TodoListResult<&mut Self> {
        self.check_bounds(index)?;
        self.todos.insert(index, todo);
        debug!(
            "event=todo_add_at module=todo_list status=ok index={} size={}",
            index,
            self.todos.len()
        );
        Ok(self)
    }

    /// Returns the todo at `index`; negative indices count from the end.
    ///
    /// # Errors
    /// - `IndexOutOfBounds` when no todo sits at the resolved position.
    pub fn item_at(&self, index: isize) -> TodoListResult<&Todo> {
        let position = self.resolve_index(index)?;
        Ok(&self.todos[position])
    }

    /// Removes and returns the todo at `index`, resolved like [`Self::item_at`].
    ///
    /// # Errors
    /// - `IndexOutOfBounds` when no todo sits at the resolved position.
    pub fn remove_at(&mut self, index: isize) -> TodoListResult<Todo> {
        let position = self.resolve_index(index)?;
        let removed = self.todos.remove(position);
        debug!(
            "event=todo_remove module=todo_list status=ok index={} size={}",
            position,
            self.todos.len()
        );
        Ok(removed)
    }

    /// Marks the todo at `index` as done.
    pub fn mark_done_at(&mut self, index: isize) -> TodoListResult<()> {
        let position = self.resolve_index(index)?;
        self.todos[position].mark_done();
        Ok(())
    }

    /// Marks the todo at `index` as not done.
    pub fn mark_undone_at(&mut self, index: isize) -> TodoListResult<()> {
        let position = self.resolve_index(index)?;
        self.todos[position].mark_undone();
        Ok(())
    }

    #[doc(alias = "done")]
    pub fn mark_all_done(&mut self) -> &mut Self {
        self.each_mut(Todo::mark_done)
    }

    #[doc(alias = "undone")]
    pub fn mark_all_undone(&mut self) -> &mut Self {
        self.each_mut(Todo::mark_undone)
    }

    /// True when every todo is done; an empty list counts as done.
    pub fn is_all_done(&self) -> bool {
        self.todos.iter().all(Todo::is_done)
    }

    /// Returns the first todo whose title matches `text`.
    ///
    /// `text` is a case-insensitive pattern matched anywhere in the title, so
    /// `"ROOM"` finds `"Clean room"`.
    ///
    /// # Errors
    /// - `InvalidTitlePattern` when `text` does not compile as a pattern.
    pub fn find_by_title(&self, text: &str) -> TodoListResult<Option<&Todo>> {
        let pattern = title_pattern(text)?;
        Ok(self.todos.iter().find(|todo| pattern.is_match(&todo.title)))
    }

    /// Marks the first todo matching `text` as done.
    ///
    /// Returns `MarkOutcome::NotFound` without mutating when nothing matches.
    pub fn mark_done(&mut self, text: &str) -> TodoListResult<MarkOutcome> {
        self.mark_title(text, true)
    }

    /// Marks the first todo matching `text` as not done.
    ///
    /// Returns `MarkOutcome::NotFound` without mutating when nothing matches.
    pub fn mark_undone(&mut self, text: &str) -> TodoListResult<MarkOutcome> {
        self.mark_title(text, false)
    }

    /// Replaces the description of the first todo matching `text`.
    ///
    /// # Errors
    /// - `InvalidTitlePattern` when `text` does not compile as a pattern.
    /// - `NoTitleMatch` when no title matches.
    pub fn update_description(
        &mut self,
        text: &str,
        description: impl Into<String>,
    ) -> TodoListResult<()> {
        let pattern = title_pattern(text)?;
        let todo = self
            .todos
            .iter_mut()
            .find(|todo| pattern.is_match(&todo.title))
            .ok_or_else(|| TodoListError::NoTitleMatch(text.to_string()))?;
        todo.description = description.into();
        Ok(())
    }

    /// Returns a new list with the same title holding the todos accepted by
    /// `predicate`, in order. The source is left untouched.
    pub fn select<P>(&self, mut predicate: P) -> TodoList
    where
        P: FnMut(&Todo) -> bool,
    {
        Self {
            title: self.title.clone(),
            todos: self
                .todos
                .iter()
                .filter(|todo| predicate(*todo))
                .cloned()
                .collect(),
        }
    }

    /// Lazy form of [`Self::select`].
    pub fn select_iter<'a, P>(
        &'a self,
        mut predicate: P,
    ) -> impl Iterator<Item = &'a Todo> + 'a
    where
        P: FnMut(&Todo) -> bool + 'a,
    {
        self.todos.iter().filter(move |todo| predicate(*todo))
    }

    pub fn all_done(&self) -> TodoList {
        self.select(Todo::is_done)
    }

    pub fn all_not_done(&self) -> TodoList {
        self.select(Todo::is_undone)
    }

    /// Visits every todo in order and returns the list for chaining.
    pub fn each<F>(&self, mut action: F) -> &Self
    where
        F: FnMut(&Todo),
    {
        for todo in &self.todos {
            action(todo);
        }
        self
    }

    /// Mutating form of [`Self::each`].
    pub fn each_mut<F>(&mut self, mut action: F) -> &mut Self
    where
        F: FnMut(&mut Todo),
    {
        for todo in &mut self.todos {
            action(todo);
        }
        self
    }

    /// Restartable iterator over the current todos.
    pub fn iter(&self) -> std::slice::Iter<'_, Todo> {
        self.todos.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Todo> {
        self.todos.iter_mut()
    }

    pub fn first(&self) -> Option<&Todo> {
        self.todos.first()
    }

    pub fn last(&self) -> Option<&Todo> {
        self.todos.last()
    }

    /// Removes and returns the last todo.
    pub fn pop(&mut self) -> Option<Todo> {
        self.todos.pop()
    }

    /// Removes and returns the first todo.
    pub fn shift(&mut self) -> Option<Todo> {
        if self.todos.is_empty() {
            return None;
        }
        Some(self.todos.remove(0))
    }

    /// Inserts a todo at the front and returns the list for chaining.
    pub fn unshift(&mut self, todo: Todo) -> &mut Self {
        self.todos.insert(0, todo);
        self
    }

    #[doc(alias = "size")]
    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// True when a todo with the same identity is in the list.
    pub fn contains(&self, todo: &Todo) -> bool {
        self.todos.contains(todo)
    }

    /// Position of the first todo with the same identity.
    pub fn position_of(&self, todo: &Todo) -> Option<usize> {
        self.todos.iter().position(|candidate| candidate == todo)
    }

    pub fn as_slice(&self) -> &[Todo] {
        &self.todos
    }

    /// Owned snapshot of the current todos.
    #[doc(alias = "to_a")]
    pub fn to_vec(&self) -> Vec<Todo> {
        self.todos.clone()
    }

    // Upper bound only; negative positions never reach here.
    fn check_bounds(&self, index: usize) -> TodoListResult<()> {
        if index <= self.todos.len() {
            return Ok(());
        }
        Err(TodoListError::InsertOutOfBounds {
            index,
            len: self.todos.len(),
        })
    }

    fn resolve_index(&self, index: isize) -> TodoListResult<usize> {
        let len = self.todos.len();
        let position = if index < 0 {
            len.checked_sub(index.unsigned_abs())
        } else {
            usize::try_from(index).ok()
        };

        match position {
            Some(position) if position < len => Ok(position),
            _ => Err(TodoListError::IndexOutOfBounds { index, len }),
        }
    }

    fn mark_title(&mut self, text: &str, done: bool) -> TodoListResult<MarkOutcome> {
        // Slot of the match itself; copies may share an id but not a title.
        let pattern = title_pattern(text)?;
        let position = self
            .todos
            .iter()
            .position(|todo| pattern.is_match(&todo.title));

        let Some(index) = position else {
            debug!("event=todo_mark module=todo_list status=not_found done={done}");
            return Ok(MarkOutcome::not_found(text));
        };

        let todo = &mut self.todos[index];
        if done {
            todo.mark_done();
        } else {
            todo.mark_undone();
        }
        debug!("event=todo_mark module=todo_list status=ok index={index} done={done}");
        Ok(MarkOutcome::Marked { index })
    }
}

impl PartialEq for TodoList {
    fn eq(&self, other: &Self) -> bool {
        self.todos == other.todos
    }
}

impl Eq for TodoList {}

impl Shl<Todo> for TodoList {
    type Output = TodoList;

    fn shl(mut self, todo: Todo) -> Self::Output {
        self.add(todo);
        self
    }
}

impl Display for TodoList {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "---- {} ----", self.title)?;
        for todo in &self.todos {
            write!(f, "\n{todo}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a TodoList {
    type Item = &'a Todo;
    type IntoIter = std::slice::Iter<'a, Todo>;

    fn into_iter(self) -> Self::IntoIter {
        self.todos.iter()
    }
}

impl<'a> IntoIterator for &'a mut TodoList {
    type Item = &'a mut Todo;
    type IntoIter = std::slice::IterMut<'a, Todo>;

    fn into_iter(self) -> Self::IntoIter {
        self.todos.iter_mut()
    }
}

impl IntoIterator for TodoList {
    type Item = Todo;
    type IntoIter = std::vec::IntoIter<Todo>;

    fn into_iter(self) -> Self::IntoIter {
        self.todos.into_iter()
    }
}

fn title_pattern(text: &str) -> TodoListResult<Regex> {
    RegexBuilder::new(text)
        .case_insensitive(true)
        .build()
        .map_err(|err| TodoListError::InvalidTitlePattern {
            pattern: text.to_string(),
            message: err.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::{title_pattern, TodoList, TodoListError};
    use crate::model::todo::Todo;

    fn three_item_list() -> TodoList {
        TodoList::new("Today's Todos")
            << Todo::new("Buy milk")
            << Todo::new("Clean room")
            << Todo::new("Go to gym")
    }

    #[test]
    fn check_bounds_accepts_up_to_len() {
        let list = three_item_list();
        assert!(list.check_bounds(0).is_ok());
        assert!(list.check_bounds(1).is_ok());
        assert!(list.check_bounds(3).is_ok());
    }

    #[test]
    fn check_bounds_rejects_past_len() {
        let list = three_item_list();
        assert_eq!(
            list.check_bounds(4).expect_err("4 is past len"),
            TodoListError::InsertOutOfBounds { index: 4, len: 3 }
        );
        assert_eq!(
            list.check_bounds(usize::MAX).expect_err("usize::MAX is past len"),
            TodoListError::InsertOutOfBounds {
                index: usize::MAX,
                len: 3
            }
        );
    }

    #[test]
    fn resolve_index_counts_negative_from_end() {
        let list = three_item_list();
        assert_eq!(list.resolve_index(0).expect("first"), 0);
        assert_eq!(list.resolve_index(-1).expect("last"), 2);
        assert_eq!(list.resolve_index(-3).expect("first from end"), 0);
        assert!(list.resolve_index(3).is_err());
        assert!(list.resolve_index(-4).is_err());
    }

    #[test]
    fn resolve_index_rejects_everything_on_empty_list() {
        let list = TodoList::new("empty");
        assert_eq!(
            list.resolve_index(0).expect_err("empty list has no items"),
            TodoListError::IndexOutOfBounds { index: 0, len: 0 }
        );
        assert!(list.resolve_index(-1).is_err());
    }

    #[test]
    fn title_pattern_is_case_insensitive_and_unanchored() {
        let pattern = title_pattern("ROoM").expect("valid pattern");
        assert!(pattern.is_match("Clean room"));
        assert!(!pattern.is_match("Go to gym"));
    }

    #[test]
    fn title_pattern_reports_invalid_syntax() {
        let err = title_pattern("(unclosed").expect_err("unbalanced group must fail");
        match err {
            TodoListError::InvalidTitlePattern { pattern, .. } => {
                assert_eq!(pattern, "(unclosed")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn mark_title_reports_not_found_for_both_directions() {
        let mut list = three_item_list();
        let message = "No item found with 'taco' in its title.";

        let done = list.mark_title("taco", true).expect("valid pattern");
        assert_eq!(done.message(), Some(message));
        let undone = list.mark_title("taco", false).expect("valid pattern");
        assert_eq!(undone.message(), Some(message));
        assert!(list.iter().all(Todo::is_undone));
    }
}
