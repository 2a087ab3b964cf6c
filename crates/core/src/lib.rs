//! Core library for the todo CLI
//!
//! This crate contains the in-memory task store and its record types.
//! Everything lives for one process run; there is no persistence.

pub mod error;
pub mod task;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;
