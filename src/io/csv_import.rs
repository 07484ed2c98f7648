use std::path::Path;

use chrono::NaiveDate;

use crate::error::StoreError;
use crate::model::task::is_supported;
use crate::model::{Task, TaskStatus};

/// Try parsing a date string with several common formats.
fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    for fmt in &["%Y-%m-%d", "%d/%m/%Y", "%m/%d/%Y", "%d-%m-%Y", "%d.%m.%Y", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d).filter(|d| is_supported(*d));
        }
    }
    None
}

/// Detect delimiter by checking the first line for common separators.
fn detect_delimiter(first_line: &str) -> u8 {
    let semicolons = first_line.matches(';').count();
    let commas = first_line.matches(',').count();
    let tabs = first_line.matches('\t').count();

    if semicolons >= commas && semicolons >= tabs {
        b';'
    } else if tabs >= commas {
        b'\t'
    } else {
        b','
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
    Name,
    Start,
    End,
    Status,
    Assignee,
}

fn header_to_column(header: &str) -> Option<Column> {
    let normalized = header.trim().to_lowercase().replace([' ', '-', '_'], "");
    match normalized.as_str() {
        "name" | "task" | "taskname" | "tasklabel" | "title" | "label" => Some(Column::Name),
        "start" | "startdate" | "from" | "begin" => Some(Column::Start),
        "end" | "enddate" | "to" | "finish" | "due" | "duedate" => Some(Column::End),
        "status" | "state" | "stage" => Some(Column::Status),
        "assignee" | "assignedto" | "owner" | "employee" => Some(Column::Assignee),
        _ => None,
    }
}

/// Import tasks from a CSV file. See [`import_csv_str`].
pub fn import_csv(path: &Path) -> Result<(Vec<Task>, usize), StoreError> {
    let content = std::fs::read_to_string(path)?;
    import_csv_str(&content)
}

/// Parse CSV text into tasks.
///
/// Auto-detects the delimiter and matches headers loosely. Rows with an
/// empty name or an unreadable date are skipped. Returns
/// `(tasks, skipped_count)`.
pub fn import_csv_str(content: &str) -> Result<(Vec<Task>, usize), StoreError> {
    let first_line = content.lines().next().unwrap_or("");
    let delimiter = detect_delimiter(first_line);

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let headers = reader.headers()?.clone();
    let columns: Vec<Option<Column>> = headers.iter().map(header_to_column).collect();

    let has = |c: Column| columns.contains(&Some(c));
    if !has(Column::Name) || !has(Column::Start) || !has(Column::End) {
        return Err(StoreError::MissingColumns {
            found: headers.iter().collect::<Vec<_>>().join(", "),
        });
    }

    let mut tasks = Vec::new();
    let mut skipped = 0usize;

    for (i, result) in reader.records().enumerate() {
        let row = i + 2;
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                log::warn!("Skipping CSV row {}: {}", row, e);
                skipped += 1;
                continue;
            }
        };

        let field = |c: Column| {
            columns
                .iter()
                .position(|col| *col == Some(c))
                .and_then(|idx| record.get(idx))
                .map(str::trim)
                .filter(|s| !s.is_empty())
        };

        let Some(name) = field(Column::Name) else {
            skipped += 1;
            continue;
        };
        let Some(start) = field(Column::Start).and_then(parse_date) else {
            log::warn!("Skipping row {}: invalid start date '{}'", row, field(Column::Start).unwrap_or(""));
            skipped += 1;
            continue;
        };
        let Some(end) = field(Column::End).and_then(parse_date) else {
            log::warn!("Skipping row {}: invalid end date '{}'", row, field(Column::End).unwrap_or(""));
            skipped += 1;
            continue;
        };

        let status = match field(Column::Status) {
            Some(s) => TaskStatus::parse(s).unwrap_or_else(|| {
                log::debug!("Row {}: unknown status '{}', using Not Started", row, s);
                TaskStatus::NotStarted
            }),
            None => TaskStatus::NotStarted,
        };

        let mut task = Task::new(name, start, end).with_status(status);
        task.assignee = field(Column::Assignee).map(str::to_string);
        tasks.push(task);
    }

    if tasks.is_empty() {
        return Err(StoreError::NoValidRows { skipped });
    }

    log::info!("Imported {} tasks from CSV ({} skipped)", tasks.len(), skipped);
    Ok((tasks, skipped))
}
