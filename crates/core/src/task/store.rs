//! In-memory task store
//!
//! Holds the id-to-task mapping and the next-id counter for one
//! process run. All mutations are single map updates, so a failed
//! operation never leaves partial state behind.

use std::collections::BTreeMap;

use super::model::{Task, TaskStatus};
use crate::{Error, Result};

/// In-memory store owning all tasks for the current session
///
/// Ids start at 1 and are never reused, even after deletion.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: BTreeMap<u64, Task>,
    next_id: u64,
}

impl TaskStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            tasks: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Create a new task from the given text
    ///
    /// The text is trimmed before storage. Fails with
    /// [`Error::InvalidArgument`] if it trims to empty, in which case
    /// the store (counter included) is unchanged.
    pub fn create(&mut self, text: &str) -> Result<Task> {
        let text = Self::validate_text(text)?;
        let task = Task::new(self.next_id, text);
        self.tasks.insert(task.id, task.clone());
        self.next_id += 1;
        Ok(task)
    }

    /// Get a task by ID
    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.get(&id)
    }

    /// Get all tasks, ordered by ascending ID
    pub fn list(&self) -> Vec<Task> {
        self.tasks.values().cloned().collect()
    }

    /// Replace the text of an existing task
    ///
    /// Id, status, and creation time are preserved. The new text is
    /// validated before the id is looked up.
    pub fn update(&mut self, id: u64, new_text: &str) -> Result<Task> {
        let new_text = Self::validate_text(new_text)?;
        let task = self.tasks.get_mut(&id).ok_or(Error::NotFound(id))?;
        task.text = new_text.to_string();
        Ok(task.clone())
    }

    /// Remove a task by ID, returning the removed record
    pub fn delete(&mut self, id: u64) -> Result<Task> {
        self.tasks.remove(&id).ok_or(Error::NotFound(id))
    }

    /// Mark a task as complete
    ///
    /// Idempotent: completing an already-completed task succeeds and
    /// leaves it completed.
    pub fn mark_complete(&mut self, id: u64) -> Result<Task> {
        self.set_status(id, TaskStatus::Completed)
    }

    /// Mark a task as pending
    ///
    /// Idempotent, same as [`TaskStore::mark_complete`].
    pub fn mark_incomplete(&mut self, id: u64) -> Result<Task> {
        self.set_status(id, TaskStatus::Pending)
    }

    fn set_status(&mut self, id: u64, status: TaskStatus) -> Result<Task> {
        let task = self.tasks.get_mut(&id).ok_or(Error::NotFound(id))?;
        task.status = status;
        Ok(task.clone())
    }

    fn validate_text(text: &str) -> Result<&str> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidArgument(
                "task text cannot be empty or contain only whitespace".to_string(),
            ));
        }
        Ok(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_trims_text() {
        let mut store = TaskStore::new();
        let task = store.create("  Buy milk  ").unwrap();

        assert_eq!(task.id, 1);
        assert_eq!(task.text, "Buy milk");
        assert_eq!(task.status, TaskStatus::Pending);
    }

    #[test]
    fn test_create_assigns_increasing_ids() {
        let mut store = TaskStore::new();
        let first = store.create("Task 1").unwrap();
        let second = store.create("Task 2").unwrap();
        let third = store.create("Task 3").unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(third.id, 3);
    }

    #[test]
    fn test_create_rejects_empty_text() {
        let mut store = TaskStore::new();

        for text in ["", "   ", "\t\n"] {
            let result = store.create(text);
            match result.unwrap_err() {
                Error::InvalidArgument(_) => {}
                e => panic!("Expected InvalidArgument error, got: {:?}", e),
            }
        }

        // Failed creations leave no trace, counter included
        assert!(store.list().is_empty());
        assert_eq!(store.create("First real task").unwrap().id, 1);
    }

    #[test]
    fn test_get_task() {
        let mut store = TaskStore::new();
        let id = store.create("Test task").unwrap().id;

        assert!(store.get(id).is_some());
        assert!(store.get(999).is_none());
    }

    #[test]
    fn test_list_orders_by_id() {
        let mut store = TaskStore::new();
        store.create("Task 1").unwrap();
        store.create("Task 2").unwrap();
        store.create("Task 3").unwrap();

        let tasks = store.list();
        let ids: Vec<u64> = tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_list_empty_store() {
        let store = TaskStore::new();
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_update_replaces_text_only() {
        let mut store = TaskStore::new();
        let original = store.create("Original text").unwrap();
        store.mark_complete(original.id).unwrap();

        let updated = store.update(original.id, "  Updated text ").unwrap();

        assert_eq!(updated.id, original.id);
        assert_eq!(updated.text, "Updated text");
        assert_eq!(updated.status, TaskStatus::Completed);
        assert_eq!(updated.created_at, original.created_at);
    }

    #[test]
    fn test_update_nonexistent_task() {
        let mut store = TaskStore::new();
        let result = store.update(7, "New text");

        assert_eq!(result.unwrap_err(), Error::NotFound(7));
    }

    #[test]
    fn test_update_rejects_empty_text() {
        let mut store = TaskStore::new();
        let id = store.create("Keep me").unwrap().id;

        let result = store.update(id, "   ");
        match result.unwrap_err() {
            Error::InvalidArgument(_) => {}
            e => panic!("Expected InvalidArgument error, got: {:?}", e),
        }
        assert_eq!(store.get(id).unwrap().text, "Keep me");
    }

    #[test]
    fn test_delete_task() {
        let mut store = TaskStore::new();
        let id = store.create("Task to delete").unwrap().id;

        let deleted = store.delete(id).unwrap();
        assert_eq!(deleted.id, id);
        assert!(store.get(id).is_none());
        assert!(store.list().is_empty());

        // Every id-taking operation now reports the id as unknown
        assert_eq!(store.delete(id).unwrap_err(), Error::NotFound(id));
        assert_eq!(store.update(id, "text").unwrap_err(), Error::NotFound(id));
        assert_eq!(store.mark_complete(id).unwrap_err(), Error::NotFound(id));
        assert_eq!(store.mark_incomplete(id).unwrap_err(), Error::NotFound(id));
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let mut store = TaskStore::new();
        let first = store.create("Task 1").unwrap();
        store.delete(first.id).unwrap();

        let second = store.create("Task 2").unwrap();
        assert_eq!(second.id, 2);
    }

    #[test]
    fn test_mark_complete_is_idempotent() {
        let mut store = TaskStore::new();
        let id = store.create("Test task").unwrap().id;

        let once = store.mark_complete(id).unwrap();
        assert_eq!(once.status, TaskStatus::Completed);

        let twice = store.mark_complete(id).unwrap();
        assert_eq!(twice.status, TaskStatus::Completed);
    }

    #[test]
    fn test_mark_incomplete_is_idempotent() {
        let mut store = TaskStore::new();
        let id = store.create("Test task").unwrap().id;

        // Already pending; marking incomplete is a no-op that succeeds
        let once = store.mark_incomplete(id).unwrap();
        assert_eq!(once.status, TaskStatus::Pending);

        store.mark_complete(id).unwrap();
        store.mark_incomplete(id).unwrap();
        let twice = store.mark_incomplete(id).unwrap();
        assert_eq!(twice.status, TaskStatus::Pending);
    }

    #[test]
    fn test_mark_nonexistent_task() {
        let mut store = TaskStore::new();

        assert_eq!(store.mark_complete(3).unwrap_err(), Error::NotFound(3));
        assert_eq!(store.mark_incomplete(3).unwrap_err(), Error::NotFound(3));
    }

    #[test]
    fn test_session_scenario() {
        let mut store = TaskStore::new();

        let milk = store.create("Buy milk").unwrap();
        let dog = store.create("Walk dog").unwrap();
        assert_eq!(milk.id, 1);
        assert_eq!(dog.id, 2);

        let tasks = store.list();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].text, "Buy milk");
        assert_eq!(tasks[1].text, "Walk dog");
        assert!(tasks.iter().all(|t| t.status == TaskStatus::Pending));

        store.mark_complete(1).unwrap();
        assert!(store.get(1).unwrap().is_completed());
        assert!(!store.get(2).unwrap().is_completed());

        store.delete(2).unwrap();
        let tasks = store.list();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, 1);

        let updated = store.update(1, "Buy oat milk").unwrap();
        assert_eq!(updated.text, "Buy oat milk");
        assert_eq!(updated.status, TaskStatus::Completed);
    }
}
