//! Task identifiers
//!
//! IDs are positive integers handed out by the store in increasing order,
//! starting at 1. They are never reused, even after the task is deleted.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdError {
    #[error("Invalid task ID: expected a positive number, got '{0}'")]
    NotANumber(String),

    #[error("Invalid task ID: IDs start at 1")]
    Zero,
}

/// Identifier of a task within a store
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct TaskId(u64);

impl TaskId {
    /// The first ID a fresh store assigns
    pub const FIRST: TaskId = TaskId(1);

    /// Creates an ID from a raw value, rejecting zero
    pub fn new(value: u64) -> Result<Self, IdError> {
        if value == 0 {
            return Err(IdError::Zero);
        }
        Ok(Self(value))
    }

    /// Returns the raw numeric value
    pub fn get(self) -> u64 {
        self.0
    }

    /// Returns the ID that follows this one
    pub(crate) fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TaskId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        // u64::from_str accepts a leading '+', which isn't a task ID
        if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit()) {
            return Err(IdError::NotANumber(s.to_string()));
        }

        let value: u64 = s.parse().map_err(|_| IdError::NotANumber(s.to_string()))?;
        Self::new(value)
    }
}

impl TryFrom<u64> for TaskId {
    type Error = IdError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TaskId> for u64 {
    fn from(id: TaskId) -> Self {
        id.0
    }
}
