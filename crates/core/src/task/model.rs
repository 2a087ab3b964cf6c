//! Task model definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Completion state of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    Completed,
}

impl Default for TaskStatus {
    fn default() -> Self {
        Self::Pending
    }
}

/// A single to-do item
///
/// The id and created_at fields are assigned by the store at creation
/// and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub text: String,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
}

impl Task {
    pub(crate) fn new(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            status: TaskStatus::default(),
            created_at: Utc::now(),
        }
    }

    /// Whether the task has been marked complete
    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }
}
