use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

/// A task row carried a date string that is not a calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid date '{value}': expected YYYY-MM-DD")]
pub struct DateError {
    pub value: String,
}

impl DateError {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// Rejected schedule edits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("end date {end} is before start date {start}")]
    InvertedRange { start: NaiveDate, end: NaiveDate },
}

/// Failures of the task store and the CSV exchange.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid task file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV is missing required columns (found: {found}); need task name, start date, end date")]
    MissingColumns { found: String },

    #[error("no valid tasks found in CSV ({skipped} rows skipped)")]
    NoValidRows { skipped: usize },

    #[error("task not found: {0}")]
    TaskNotFound(Uuid),
}
