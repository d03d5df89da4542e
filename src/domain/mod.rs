//! Domain models for the todo shell
//!
//! Contains the core types without any I/O concerns.

mod id;
mod task;

pub use id::{IdError, TaskId};
pub use task::{Task, Title, TitleError};
