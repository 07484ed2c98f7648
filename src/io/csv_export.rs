use std::path::Path;

use crate::error::StoreError;
use crate::model::Task;

/// Export tasks to a semicolon-delimited CSV file the importer reads back.
///
/// Columns: Task ; Start Date ; End Date ; Status ; Assignee.
/// Dates are written as stored. Returns the number of tasks written.
pub fn export_csv(tasks: &[Task], path: &Path) -> Result<usize, StoreError> {
    let wtr = csv::WriterBuilder::new().delimiter(b';').from_path(path)?;
    let count = write_tasks(tasks, wtr)?;
    log::info!("Exported {} tasks to {}", count, path.display());
    Ok(count)
}

fn write_tasks<W: std::io::Write>(tasks: &[Task], mut wtr: csv::Writer<W>) -> Result<usize, StoreError> {
    wtr.write_record(["Task", "Start Date", "End Date", "Status", "Assignee"])?;
    for task in tasks {
        wtr.write_record([
            task.name.as_str(),
            task.start_date.as_str(),
            task.end_date.as_str(),
            task.status.label(),
            task.assignee.as_deref().unwrap_or(""),
        ])?;
    }
    wtr.flush()?;
    Ok(tasks.len())
}
