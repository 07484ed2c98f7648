use chrono::NaiveDate;

use super::calendar::days_between;
use super::task::Task;

/// Default pixel width of one day column.
pub const DEFAULT_CELL_WIDTH: f32 = 60.0;

/// Horizontal placement of a task bar relative to the grid's first column.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Position {
    pub left: f32,
    pub width: f32,
}

impl Position {
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0
    }

    /// Clip to `[0, grid_width]`. Returns `None` when nothing remains visible.
    pub fn clip(&self, grid_width: f32) -> Option<Position> {
        let left = self.left.max(0.0);
        let right = self.right().min(grid_width);
        if right <= left {
            return None;
        }
        Some(Position {
            left,
            width: right - left,
        })
    }
}

/// Bar rectangle for `task` in a grid starting at `reference_start`.
///
/// Both endpoints are inclusive. Tasks outside the grid get a negative
/// `left` or overflow the grid; callers clip. A task whose dates do not
/// parse gets a zero-size position.
pub fn position_for(task: &Task, reference_start: NaiveDate, cell_width: f32) -> Position {
    match task.dates() {
        Ok((start, end)) => position_for_dates(start, end, reference_start, cell_width),
        Err(e) => {
            log::warn!("Cannot position task '{}' ({}): {}", task.name, task.id, e);
            Position::default()
        }
    }
}

pub fn position_for_dates(
    start: NaiveDate,
    end: NaiveDate,
    reference_start: NaiveDate,
    cell_width: f32,
) -> Position {
    let start_offset_days = days_between(reference_start, start);
    let duration_days = days_between(start, end) + 1;
    Position {
        left: start_offset_days as f32 * cell_width,
        width: duration_days as f32 * cell_width,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn single_day_at_reference() {
        let reference = d(2024, 6, 2);
        let task = Task::new("Kickoff", reference, reference);
        assert_eq!(
            position_for(&task, reference, DEFAULT_CELL_WIDTH),
            Position {
                left: 0.0,
                width: 60.0
            }
        );
    }

    #[test]
    fn five_day_task_at_reference() {
        let reference = d(2024, 6, 2);
        let task = Task::new("Design", reference, d(2024, 6, 6));
        assert_eq!(
            position_for(&task, reference, 60.0),
            Position {
                left: 0.0,
                width: 300.0
            }
        );
    }

    #[test]
    fn task_before_reference_has_negative_left() {
        let reference = d(2024, 6, 2);
        let task = Task::new("Prep", d(2024, 5, 31), d(2024, 6, 1));
        assert_eq!(
            position_for(&task, reference, 60.0),
            Position {
                left: -120.0,
                width: 120.0
            }
        );
    }

    #[test]
    fn malformed_dates_degrade_to_zero() {
        let reference = d(2024, 6, 2);
        let mut task = Task::new("Broken", reference, reference);
        task.start_date = "next tuesday".into();
        assert_eq!(position_for(&task, reference, 60.0), Position::default());

        let mut task = Task::new("Broken end", reference, reference);
        task.end_date = String::new();
        assert!(position_for(&task, reference, 60.0).is_empty());
    }

    #[test]
    fn inverted_range_yields_non_positive_width() {
        let reference = d(2024, 6, 2);
        let pos = position_for_dates(d(2024, 6, 5), d(2024, 6, 3), reference, 60.0);
        assert_eq!(pos.left, 180.0);
        assert_eq!(pos.width, -60.0);
        assert!(pos.is_empty());
    }

    #[test]
    fn clipping_to_grid() {
        let pos = Position {
            left: -120.0,
            width: 300.0,
        };
        assert_eq!(
            pos.clip(600.0),
            Some(Position {
                left: 0.0,
                width: 180.0
            })
        );
        let overflow = Position {
            left: 540.0,
            width: 180.0,
        };
        assert_eq!(
            overflow.clip(600.0),
            Some(Position {
                left: 540.0,
                width: 60.0
            })
        );
        let outside = Position {
            left: -240.0,
            width: 120.0,
        };
        assert_eq!(outside.clip(600.0), None);
    }
}
