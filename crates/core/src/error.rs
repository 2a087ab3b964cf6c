//! Error types for the core library

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Task with ID {0} does not exist")]
    NotFound(u64),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
