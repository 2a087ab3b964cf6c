//! Task module
//!
//! This module contains the task record types and the in-memory store.

mod model;
mod store;

pub use model::{Task, TaskStatus};
pub use store::TaskStore;
