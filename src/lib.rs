//! Todo Shell - an interactive, in-memory task list manager
//!
//! Tasks live only for the duration of a session. They can be added,
//! listed, completed, renamed and deleted, and exported to JSON or CSV.

pub mod domain;
pub mod storage;
pub mod cli;

pub use domain::{Task, TaskId, Title};
pub use storage::{ExportFormat, StoreError, TaskStore};
