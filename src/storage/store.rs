//! In-memory task store
//!
//! Owns the ordered task list and the ID counter for the lifetime of the
//! process. Lookups are linear scans over insertion order.

use std::path::PathBuf;

use thiserror::Error;

use super::export::{self, ExportError, ExportFormat, ExportOptions};
use crate::domain::{Task, TaskId, Title, TitleError};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error(transparent)]
    InvalidTitle(#[from] TitleError),

    #[error("Task not found: {0}")]
    NotFound(TaskId),
}

/// Store for the tasks of a single session
#[derive(Debug)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: TaskId,
    export: ExportOptions,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore {
    /// Creates an empty store whose exports land in the working directory
    pub fn new() -> Self {
        Self::with_export_options(ExportOptions::default())
    }

    /// Creates an empty store with the given export settings
    pub fn with_export_options(export: ExportOptions) -> Self {
        Self {
            tasks: Vec::new(),
            next_id: TaskId::FIRST,
            export,
        }
    }

    /// Returns the ID the next added task will receive
    pub fn next_id(&self) -> TaskId {
        self.next_id
    }

    /// Adds a task with the given title and returns it
    ///
    /// The title is trimmed; a blank title is rejected and consumes no ID.
    pub fn add(&mut self, title: &str) -> Result<&Task, StoreError> {
        let title = Title::parse(title)?;
        let id = self.next_id;
        self.next_id = id.next();

        self.tasks.push(Task::new(id, title));
        self.tasks.last().ok_or(StoreError::NotFound(id))
    }

    /// Returns all tasks in insertion order
    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Finds a task by ID
    pub fn find(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    fn find_mut(&mut self, id: TaskId) -> Result<&mut Task, StoreError> {
        self.tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))
    }

    /// Marks a task as completed. Completing a done task succeeds.
    pub fn complete(&mut self, id: TaskId) -> Result<&Task, StoreError> {
        let task = self.find_mut(id)?;
        task.complete();
        Ok(task)
    }

    /// Replaces the title of a task
    ///
    /// The new title is validated before the lookup, so a blank title
    /// leaves the store untouched regardless of `id`.
    pub fn edit(&mut self, id: TaskId, title: &str) -> Result<&Task, StoreError> {
        let title = Title::parse(title)?;
        let task = self.find_mut(id)?;
        task.rename(title);
        Ok(task)
    }

    /// Removes a task and returns it. Does not affect the ID counter.
    pub fn delete(&mut self, id: TaskId) -> Result<Task, StoreError> {
        let index = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))?;

        Ok(self.tasks.remove(index))
    }

    /// Writes all tasks as a JSON export envelope and returns the path written
    pub fn export_json(&self, filename: Option<&str>) -> Result<PathBuf, ExportError> {
        self.export_to(ExportFormat::Json, filename)
    }

    /// Writes all tasks as CSV and returns the path written
    pub fn export_csv(&self, filename: Option<&str>) -> Result<PathBuf, ExportError> {
        self.export_to(ExportFormat::Csv, filename)
    }

    /// Writes all tasks in the given format and returns the path written
    pub fn export_to(
        &self,
        format: ExportFormat,
        filename: Option<&str>,
    ) -> Result<PathBuf, ExportError> {
        let base = self.export_base_dir(format)?;
        let path = export::resolve_path(&base, format, filename);
        export::write(&self.tasks, format, &path, &self.export)?;
        Ok(path)
    }

    fn export_base_dir(&self, format: ExportFormat) -> Result<PathBuf, ExportError> {
        match &self.export.directory {
            Some(dir) => Ok(dir.clone()),
            None => std::env::current_dir().map_err(|source| ExportError::CurrentDir {
                format,
                source,
            }),
        }
    }
}
