//! In-memory todo domain model.
//!
//! # Responsibility
//! - Define the `Todo` record and the ordered `TodoList` collection.
//! - Keep every list invariant behind validated operations.
//!
//! # Invariants
//! - Every todo carries a stable `TodoId`; equality never compares content.
//! - Insertion order is preserved except by explicit positional operations.

pub mod todo;
pub mod todo_list;
