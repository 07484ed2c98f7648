use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::calendar::add_days;
use super::task::{format_date, is_supported, Task, TaskStatus};
use crate::error::ScheduleError;

/// In-memory working copy of the task collection shown in the timeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskBoard {
    pub tasks: Vec<Task>,
}

impl TaskBoard {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn get(&self, id: Uuid) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Replace the collection wholesale, e.g. after a reload.
    pub fn replace(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }

    /// Rewrite one task's dates in place. Other tasks are not touched.
    ///
    /// Returns false when no task has `id`. The range is not validated
    /// here; see [`validate_range`].
    pub fn set_task_dates(&mut self, id: Uuid, new_start: NaiveDate, new_end: NaiveDate) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.start_date = format_date(new_start);
                task.end_date = format_date(new_end);
                log::debug!("Rescheduled '{}' to {} .. {}", task.name, task.start_date, task.end_date);
                true
            }
            None => {
                log::debug!("set_task_dates: no task with id {}", id);
                false
            }
        }
    }

    /// Move a task by `days`, keeping its duration.
    ///
    /// Returns the new `(start, end)`, or `None` for an unknown id, a task
    /// whose dates do not parse, or a move that would take either date out
    /// of the supported years.
    /// The task is left unchanged whenever `None` is returned.
    pub fn shift_task(&mut self, id: Uuid, days: i64) -> Option<(NaiveDate, NaiveDate)> {
        let (start, end) = match self.get(id)?.dates() {
            Ok(dates) => dates,
            Err(e) => {
                log::warn!("Cannot shift task {}: {}", id, e);
                return None;
            }
        };
        let moved = add_days(start, days)
            .zip(add_days(end, days))
            .filter(|(s, e)| is_supported(*s) && is_supported(*e));
        let Some(moved) = moved else {
            log::warn!("Cannot shift task {} by {} days", id, days);
            return None;
        };
        self.set_task_dates(id, moved.0, moved.1);
        Some(moved)
    }

    /// Task count per status, in [`TaskStatus::ALL`] order.
    pub fn status_counts(&self) -> Vec<(TaskStatus, usize)> {
        TaskStatus::ALL
            .iter()
            .map(|s| (*s, self.tasks.iter().filter(|t| t.status == *s).count()))
            .collect()
    }
}

/// Reject edits whose end falls before their start.
pub fn validate_range(start: NaiveDate, end: NaiveDate) -> Result<(), ScheduleError> {
    if end < start {
        return Err(ScheduleError::InvertedRange { start, end });
    }
    Ok(())
}
