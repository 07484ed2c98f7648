use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::error::StoreError;
use crate::model::task::format_date;
use crate::model::Task;

/// Source of the task collection and sink for schedule changes.
///
/// The timeline never calls this itself; the owner persists after
/// applying a change to its in-memory board.
pub trait TaskStore {
    fn load(&self) -> Result<Vec<Task>, StoreError>;

    fn persist_dates(&mut self, id: Uuid, start: NaiveDate, end: NaiveDate) -> Result<(), StoreError>;

    /// Human-readable name of the backing source.
    fn describe(&self) -> String;
}

/// Tasks kept as a JSON array of backend rows in a local file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TaskStore for JsonFileStore {
    fn load(&self) -> Result<Vec<Task>, StoreError> {
        load_tasks(&self.path)
    }

    fn persist_dates(&mut self, id: Uuid, start: NaiveDate, end: NaiveDate) -> Result<(), StoreError> {
        let mut tasks = load_tasks(&self.path)?;
        let task = tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::TaskNotFound(id))?;
        task.start_date = format_date(start);
        task.end_date = format_date(end);
        save_tasks(&tasks, &self.path)?;
        log::info!("Persisted dates for task {} to {}", id, self.path.display());
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Save tasks to a JSON file.
pub fn save_tasks(tasks: &[Task], path: &Path) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(tasks)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Load tasks from a JSON file.
pub fn load_tasks(path: &Path) -> Result<Vec<Task>, StoreError> {
    let json = std::fs::read_to_string(path)?;
    let tasks: Vec<Task> = serde_json::from_str(&json)?;
    log::debug!("Loaded {} tasks from {}", tasks.len(), path.display());
    Ok(tasks)
}
