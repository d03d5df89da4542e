//! Menu choices for the interactive shell

use std::str::FromStr;

use thiserror::Error;

use crate::storage::ExportFormat;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid choice: '{0}'")]
pub struct InvalidChoice(pub String);

/// Top-level menu options, selected by the literals `"1"` to `"7"`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    View,
    Complete,
    Edit,
    Delete,
    Export,
    Exit,
}

impl MenuChoice {
    /// All options in menu order
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::Add,
        MenuChoice::View,
        MenuChoice::Complete,
        MenuChoice::Edit,
        MenuChoice::Delete,
        MenuChoice::Export,
        MenuChoice::Exit,
    ];

    /// The literal the user types to pick this option
    pub fn key(&self) -> &'static str {
        match self {
            MenuChoice::Add => "1",
            MenuChoice::View => "2",
            MenuChoice::Complete => "3",
            MenuChoice::Edit => "4",
            MenuChoice::Delete => "5",
            MenuChoice::Export => "6",
            MenuChoice::Exit => "7",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::Add => "Add new task",
            MenuChoice::View => "View all tasks",
            MenuChoice::Complete => "Mark task as complete",
            MenuChoice::Edit => "Edit task",
            MenuChoice::Delete => "Delete task",
            MenuChoice::Export => "Export tasks",
            MenuChoice::Exit => "Exit",
        }
    }
}

impl FromStr for MenuChoice {
    type Err = InvalidChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MenuChoice::ALL
            .into_iter()
            .find(|choice| choice.key() == s)
            .ok_or_else(|| InvalidChoice(s.to_string()))
    }
}

/// Export sub-menu options in display order
pub const EXPORT_CHOICES: [(&str, ExportFormat, &str); 2] = [
    ("1", ExportFormat::Json, "Export to JSON file"),
    ("2", ExportFormat::Csv, "Export to CSV file"),
];

/// Parses an export sub-menu selection
pub fn parse_export_choice(input: &str) -> Result<ExportFormat, InvalidChoice> {
    EXPORT_CHOICES
        .iter()
        .find(|(key, _, _)| *key == input)
        .map(|(_, format, _)| *format)
        .ok_or_else(|| InvalidChoice(input.to_string()))
}
