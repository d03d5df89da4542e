//! # Command-Line Interface
//!
//! The `todo` binary is a menu-driven interactive shell:
//!
//! ```text
//! --- TODO MENU ---
//! 1. Add new task
//! 2. View all tasks
//! 3. Mark task as complete
//! 4. Edit task
//! 5. Delete task
//! 6. Export tasks
//! 7. Exit
//! ```
//!
//! ## Flags
//!
//! | Flag | Purpose |
//! |------|---------|
//! | `--config <PATH>` | Read configuration from a specific TOML file |
//! | `--export-dir <DIR>` | Base directory for export files |
//! | `--no-banner` | Skip the welcome banner |
//! | `--verbose` / `-v` | Debug output on stderr |
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and start the shell.

mod app;
mod menu;
mod output;
mod shell;

pub use app::{run, Cli};
pub use menu::{parse_export_choice, InvalidChoice, MenuChoice};
pub use output::Output;
pub use shell::Shell;
