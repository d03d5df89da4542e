//! # Storage Layer
//!
//! In-memory task storage plus the export writers.
//!
//! Nothing is persisted between runs. The only files this layer writes are
//! the exports the user asks for:
//!
//! | Format | Default file name | Shape |
//! |--------|-------------------|-------|
//! | JSON | `tasks_<YYYY-MM-DD>.json` | `{ exportDate, totalTasks, tasks }` |
//! | CSV | `tasks_<YYYY-MM-DD>.csv` | `ID,Title,Status` header, one row per task |
//!
//! ## Key Types
//!
//! - [`TaskStore`] - Owns the task list and ID allocation
//! - [`ExportFormat`] / [`ExportOptions`] - What and where to export
//! - [`Config`] - User configuration (TOML)

mod config;
pub mod export;
mod store;

pub use config::{Config, ConfigError, ExportConfig, ShellConfig};
pub use export::{ExportError, ExportFormat, ExportOptions};
pub use store::{StoreError, TaskStore};
