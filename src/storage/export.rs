//! JSON and CSV export of the task list
//!
//! JSON exports wrap the tasks in an envelope:
//!
//! ```json
//! {
//!   "exportDate": "2026-10-19T08:15:30.123Z",
//!   "totalTasks": 1,
//!   "tasks": [{ "id": 1, "title": "Buy milk", "completed": false }]
//! }
//! ```
//!
//! CSV exports have an `ID,Title,Status` header and one row per task.
//! Without an explicit file name, exports are written to
//! `tasks_<YYYY-MM-DD>.<ext>` using the current UTC date.

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::domain::Task;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    /// File extension, without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }

    /// Default file name for an export made on `date`
    pub fn default_file_name(&self, date: NaiveDate) -> String {
        format!("tasks_{}.{}", date.format("%Y-%m-%d"), self.extension())
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Json => f.write_str("JSON"),
            ExportFormat::Csv => f.write_str("CSV"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to export to {format}: cannot determine working directory: {source}")]
    CurrentDir {
        format: ExportFormat,
        #[source]
        source: io::Error,
    },

    #[error("Failed to export to {format}: {}: {source}", .path.display())]
    Write {
        format: ExportFormat,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to export to JSON: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Settings that shape export output
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Base directory for relative file names (working directory if unset)
    pub directory: Option<PathBuf>,

    /// Pretty-print JSON with two-space indentation
    pub pretty_json: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            directory: None,
            pretty_json: true,
        }
    }
}

/// Envelope written by the JSON export
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportEnvelope<'a> {
    #[serde(serialize_with = "serialize_millis")]
    pub export_date: DateTime<Utc>,
    pub total_tasks: usize,
    pub tasks: &'a [Task],
}

impl<'a> ExportEnvelope<'a> {
    pub fn new(tasks: &'a [Task], export_date: DateTime<Utc>) -> Self {
        Self {
            export_date,
            total_tasks: tasks.len(),
            tasks,
        }
    }
}

fn serialize_millis<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&date.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Resolves the target path of an export
///
/// An empty or missing file name falls back to the dated default.
/// Absolute file names are kept as they are.
pub fn resolve_path(base: &Path, format: ExportFormat, filename: Option<&str>) -> PathBuf {
    match filename.map(str::trim).filter(|f| !f.is_empty()) {
        Some(name) => base.join(name),
        None => base.join(format.default_file_name(Utc::now().date_naive())),
    }
}

/// Renders the JSON export envelope
pub fn render_json(
    tasks: &[Task],
    export_date: DateTime<Utc>,
    pretty: bool,
) -> Result<String, serde_json::Error> {
    let envelope = ExportEnvelope::new(tasks, export_date);
    if pretty {
        serde_json::to_string_pretty(&envelope)
    } else {
        serde_json::to_string(&envelope)
    }
}

/// Renders the CSV export
pub fn render_csv(tasks: &[Task]) -> String {
    let mut out = String::from("ID,Title,Status\n");
    for task in tasks {
        out.push_str(&format!(
            "{},{},{}\n",
            task.id,
            csv_field(&task.title),
            task.status_label()
        ));
    }
    out
}

/// Quotes a field if it contains a comma, doubling embedded quotes
fn csv_field(value: &str) -> String {
    if value.contains(',') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Renders `tasks` in `format` and writes them to `path`
pub fn write(
    tasks: &[Task],
    format: ExportFormat,
    path: &Path,
    options: &ExportOptions,
) -> Result<(), ExportError> {
    let content = match format {
        ExportFormat::Json => render_json(tasks, Utc::now(), options.pretty_json)?,
        ExportFormat::Csv => render_csv(tasks),
    };

    let write_err = |source| ExportError::Write {
        format,
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(content.as_bytes()).map_err(write_err)?;
    writer.flush().map_err(write_err)?;

    Ok(())
}
