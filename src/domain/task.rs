//! Task domain model
//!
//! A task is a single to-do item: an identifier, a title and a completion
//! flag. Titles are always stored trimmed and never empty.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;
use thiserror::Error;

use super::id::TaskId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TitleError {
    #[error("Task title cannot be empty.")]
    Empty,
}

/// Trimmed, non-empty task title
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Title(String);

impl Title {
    /// Trims the input and rejects it if nothing is left
    pub fn parse(raw: &str) -> Result<Self, TitleError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TitleError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for Title {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Title {
    type Error = TitleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Title> for String {
    fn from(title: Title) -> Self {
        title.0
    }
}

/// A single to-do item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, assigned by the store
    pub id: TaskId,

    /// Human-readable title
    pub title: Title,

    /// Whether the task has been completed
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Creates a new, pending task
    pub fn new(id: TaskId, title: Title) -> Self {
        Self {
            id,
            title,
            completed: false,
        }
    }

    /// Marks the task as done. Completing twice is a no-op.
    pub fn complete(&mut self) {
        self.completed = true;
    }

    /// Replaces the title
    pub fn rename(&mut self, title: Title) {
        self.title = title;
    }

    /// Status label used in the interactive listing
    pub fn marker(&self) -> &'static str {
        if self.completed {
            "[DONE]"
        } else {
            "[TODO]"
        }
    }

    /// Status label used in the CSV export
    pub fn status_label(&self) -> &'static str {
        if self.completed {
            "Completed"
        } else {
            "Pending"
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {} {}", self.id, self.marker(), self.title)
    }
}
