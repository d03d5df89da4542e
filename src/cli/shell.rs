//! Interactive menu shell
//!
//! Reads one line per prompt, validates it and routes it to the
//! [`TaskStore`]. Validation failures and missing tasks are reported and
//! the loop carries on; only the exit option (or end of input) stops it.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use super::menu::{self, MenuChoice};
use super::output::Output;
use crate::domain::{TaskId, Title};
use crate::storage::{ExportFormat, TaskStore};

/// Interactive shell over a task store
pub struct Shell<R, W> {
    store: TaskStore,
    input: R,
    out: W,
    output: Output,
    banner: bool,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(store: TaskStore, input: R, out: W, output: Output) -> Self {
        Self {
            store,
            input,
            out,
            output,
            banner: true,
        }
    }

    /// Enables or disables the welcome banner
    pub fn with_banner(mut self, banner: bool) -> Self {
        self.banner = banner;
        self
    }

    /// Returns the underlying store
    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Consumes the shell and returns the store
    pub fn into_store(self) -> TaskStore {
        self.store
    }

    /// Runs the menu loop until the user exits or input ends
    pub fn run(&mut self) -> Result<()> {
        if self.banner {
            writeln!(self.out, "Welcome to Todo List App!")?;
            writeln!(self.out, "========================")?;
        }

        loop {
            self.show_menu()?;

            let Some(line) = self.prompt("Enter your choice: ")? else {
                self.output.verbose("End of input, leaving the shell");
                writeln!(self.out)?;
                writeln!(self.out, "Goodbye!")?;
                break;
            };

            match line.parse::<MenuChoice>() {
                Ok(MenuChoice::Add) => self.add_task()?,
                Ok(MenuChoice::View) => self.view_tasks()?,
                Ok(MenuChoice::Complete) => self.complete_task()?,
                Ok(MenuChoice::Edit) => self.edit_task()?,
                Ok(MenuChoice::Delete) => self.delete_task()?,
                Ok(MenuChoice::Export) => self.export_tasks()?,
                Ok(MenuChoice::Exit) => {
                    writeln!(self.out, "Goodbye!")?;
                    break;
                }
                Err(e) => {
                    self.output.verbose_ctx("menu", &e.to_string());
                    writeln!(self.out, "Invalid choice. Please try again.")?;
                }
            }

            writeln!(self.out)?;
        }

        self.out.flush().context("Failed to flush output")?;
        Ok(())
    }

    fn show_menu(&mut self) -> Result<()> {
        writeln!(self.out, "\n--- TODO MENU ---")?;
        for choice in MenuChoice::ALL {
            writeln!(self.out, "{}. {}", choice.key(), choice.label())?;
        }
        Ok(())
    }

    /// Prints `message` and reads one line, without its line terminator.
    /// Returns `None` at end of input.
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.out, "{}", message)?;
        self.out.flush().context("Failed to flush output")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;

        if read == 0 {
            return Ok(None);
        }

        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Shows the list, then asks for an ID. `None` means the flow should stop.
    ///
    /// Anything that isn't an integer is a validation error. Integers that
    /// can't be task IDs (zero, negative) are reported as not found.
    fn select_task(&mut self, message: &str) -> Result<Option<TaskId>> {
        self.view_tasks()?;
        if self.store.is_empty() {
            return Ok(None);
        }

        let Some(raw) = self.prompt(message)? else {
            return Ok(None);
        };

        let value: i64 = match raw.trim().parse() {
            Ok(value) => value,
            Err(e) => {
                self.output.verbose_ctx("select", &format!("'{}': {}", raw, e));
                writeln!(self.out, "Please enter a valid number.")?;
                return Ok(None);
            }
        };

        match u64::try_from(value).ok().and_then(|v| TaskId::new(v).ok()) {
            Some(id) => Ok(Some(id)),
            None => {
                self.output.verbose_ctx("select", &format!("No task can have ID {}", value));
                writeln!(self.out, "Task not found.")?;
                Ok(None)
            }
        }
    }

    fn add_task(&mut self) -> Result<()> {
        let Some(raw) = self.prompt("Enter task title: ")? else {
            return Ok(());
        };

        let title = match Title::parse(&raw) {
            Ok(title) => title,
            Err(e) => {
                writeln!(self.out, "{}", e)?;
                return Ok(());
            }
        };

        match self.store.add(&title) {
            Ok(task) => {
                let id = task.id;
                self.output.verbose_ctx("add", &format!("Created task {}: {}", id, title));
                writeln!(self.out, "Task added successfully! ID: {}", id)?;
            }
            Err(e) => writeln!(self.out, "{}", e)?,
        }

        Ok(())
    }

    fn view_tasks(&mut self) -> Result<()> {
        let tasks = self.store.list();
        if tasks.is_empty() {
            writeln!(self.out, "No tasks found.")?;
            return Ok(());
        }

        writeln!(self.out, "\n--- YOUR TASKS ---")?;
        for task in tasks {
            writeln!(self.out, "{}", task)?;
        }

        Ok(())
    }

    fn complete_task(&mut self) -> Result<()> {
        let Some(id) = self.select_task("Enter task ID to mark as complete: ")? else {
            return Ok(());
        };

        match self.store.complete(id) {
            Ok(_) => {
                self.output.verbose_ctx("complete", &format!("Completed task {}", id));
                writeln!(self.out, "Task marked as complete!")?;
            }
            Err(e) => {
                self.output.verbose_ctx("complete", &e.to_string());
                writeln!(self.out, "Task not found.")?;
            }
        }

        Ok(())
    }

    fn edit_task(&mut self) -> Result<()> {
        let Some(id) = self.select_task("Enter task ID to edit: ")? else {
            return Ok(());
        };

        let Some(current) = self.store.find(id).map(|t| t.title.clone()) else {
            writeln!(self.out, "Task not found.")?;
            return Ok(());
        };

        writeln!(self.out, "Current title: {}", current)?;
        let Some(raw) = self.prompt("Enter new title: ")? else {
            return Ok(());
        };

        let title = match Title::parse(&raw) {
            Ok(title) => title,
            Err(e) => {
                writeln!(self.out, "{}", e)?;
                return Ok(());
            }
        };

        match self.store.edit(id, &title) {
            Ok(_) => {
                self.output
                    .verbose_ctx("edit", &format!("Renamed task {}: '{}' -> '{}'", id, current, title));
                writeln!(self.out, "Task updated successfully!")?;
            }
            Err(e) => {
                self.output.verbose_ctx("edit", &e.to_string());
                writeln!(self.out, "Failed to update task.")?;
            }
        }

        Ok(())
    }

    fn delete_task(&mut self) -> Result<()> {
        let Some(id) = self.select_task("Enter task ID to delete: ")? else {
            return Ok(());
        };

        let Some(title) = self.store.find(id).map(|t| t.title.clone()) else {
            writeln!(self.out, "Task not found.")?;
            return Ok(());
        };

        let question = format!("Are you sure you want to delete \"{}\"? (y/n): ", title);
        let confirmed = self
            .prompt(&question)?
            .is_some_and(|answer| answer.eq_ignore_ascii_case("y"));

        if !confirmed {
            writeln!(self.out, "Delete cancelled.")?;
            return Ok(());
        }

        match self.store.delete(id) {
            Ok(removed) => {
                self.output
                    .verbose_ctx("delete", &format!("Deleted task {}: {}", removed.id, removed.title));
                writeln!(self.out, "Task deleted successfully!")?;
            }
            Err(e) => {
                self.output.verbose_ctx("delete", &e.to_string());
                writeln!(self.out, "Failed to delete task.")?;
            }
        }

        Ok(())
    }

    fn export_tasks(&mut self) -> Result<()> {
        if self.store.is_empty() {
            writeln!(self.out, "No tasks to export.")?;
            return Ok(());
        }

        writeln!(self.out, "\n--- EXPORT TASKS ---")?;
        for (key, _, label) in menu::EXPORT_CHOICES {
            writeln!(self.out, "{}. {}", key, label)?;
        }

        let Some(raw) = self.prompt("Choose export format: ")? else {
            return Ok(());
        };

        let format = match menu::parse_export_choice(&raw) {
            Ok(format) => format,
            Err(e) => {
                self.output.verbose_ctx("export", &e.to_string());
                writeln!(self.out, "Invalid choice.")?;
                return Ok(());
            }
        };

        self.export_as(format)
    }

    fn export_as(&mut self, format: ExportFormat) -> Result<()> {
        let Some(raw) = self.prompt("Enter filename (press Enter for default): ")? else {
            return Ok(());
        };

        let filename = Some(raw.trim()).filter(|f| !f.is_empty());
        self.output.verbose_ctx(
            "export",
            &format!("Exporting {} tasks as {}, filename: {:?}", self.store.len(), format, filename),
        );

        match self.store.export_to(format, filename) {
            Ok(path) => writeln!(self.out, "Tasks exported successfully to: {}", path.display())?,
            Err(e) => writeln!(self.out, "Export failed: {}", e)?,
        }

        Ok(())
    }
}
