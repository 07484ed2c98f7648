use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DateError;

/// Date-only wire format used by the backend rows.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Years accepted from task rows.
pub const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1..=9999;

/// Workflow status of a task. Only drives bar colour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    #[serde(rename = "Completed")]
    Completed,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Review")]
    Review,
    #[serde(rename = "At Risk")]
    AtRisk,
    #[serde(rename = "Not Started")]
    #[default]
    NotStarted,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 5] = [
        TaskStatus::Completed,
        TaskStatus::InProgress,
        TaskStatus::Review,
        TaskStatus::AtRisk,
        TaskStatus::NotStarted,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::InProgress => "In Progress",
            Self::Review => "Review",
            Self::AtRisk => "At Risk",
            Self::NotStarted => "Not Started",
        }
    }

    /// Lenient parse used by the CSV importer.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "completed" | "complete" | "done" | "finished" => Some(Self::Completed),
            "in progress" | "in-progress" | "in_progress" | "active" | "started" => {
                Some(Self::InProgress)
            }
            "review" | "in review" => Some(Self::Review),
            "at risk" | "at-risk" | "at_risk" | "blocked" => Some(Self::AtRisk),
            "not started" | "not-started" | "not_started" | "new" | "todo" => {
                Some(Self::NotStarted)
            }
            _ => None,
        }
    }
}

/// A schedulable unit as delivered by the backend.
///
/// Dates stay in their string form so a malformed row can still be held
/// and displayed; parse them through [`Task::start`] / [`Task::end`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Uuid,
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
}

impl Task {
    /// Create a new task with a fresh id.
    pub fn new(name: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            start_date: format_date(start),
            end_date: format_date(end),
            status: TaskStatus::default(),
            assignee: None,
        }
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    pub fn start(&self) -> Result<NaiveDate, DateError> {
        parse_date(&self.start_date)
    }

    pub fn end(&self) -> Result<NaiveDate, DateError> {
        parse_date(&self.end_date)
    }

    /// Both dates, or the first parse failure.
    pub fn dates(&self) -> Result<(NaiveDate, NaiveDate), DateError> {
        Ok((self.start()?, self.end()?))
    }
}

/// Parse an ISO-8601 date-only string. A trailing time part
/// (`2024-03-01T00:00:00Z`) is tolerated and ignored. Years outside
/// [`YEAR_RANGE`] are rejected.
pub fn parse_date(s: &str) -> Result<NaiveDate, DateError> {
    let trimmed = s.trim();
    let date_part = trimmed.split('T').next().unwrap_or(trimmed);
    let date = NaiveDate::parse_from_str(date_part, DATE_FORMAT).map_err(|_| DateError::new(s))?;
    if !is_supported(date) {
        return Err(DateError::new(s));
    }
    Ok(date)
}

/// True when `date` falls in [`YEAR_RANGE`] and so survives a text round trip.
pub fn is_supported(date: NaiveDate) -> bool {
    YEAR_RANGE.contains(&date.year())
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
