use chrono::NaiveDate;

use super::calendar::{add_days, days_between};
use super::position::{position_for, Position};
use super::task::Task;

/// Earliest start and latest end across `tasks`.
///
/// Tasks whose dates do not parse are skipped. Returns `None` when no
/// task contributes a date.
pub fn derive_range(tasks: &[Task]) -> Option<(NaiveDate, NaiveDate)> {
    let mut range: Option<(NaiveDate, NaiveDate)> = None;
    for task in tasks {
        let (start, end) = match task.dates() {
            Ok(dates) => dates,
            Err(e) => {
                log::warn!("Skipping task '{}' when deriving range: {}", task.name, e);
                continue;
            }
        };
        range = Some(match range {
            None => (start, end),
            Some((lo, hi)) => (lo.min(start), hi.max(end)),
        });
    }
    range
}

/// The contiguous date range currently rendered in the timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibleWindow {
    /// The leftmost visible date.
    pub start: NaiveDate,
    /// The rightmost visible date (inclusive).
    pub end: NaiveDate,
    /// Pixels per day column.
    pub cell_width: f32,
}

impl VisibleWindow {
    pub fn new(start: NaiveDate, end: NaiveDate, cell_width: f32) -> Self {
        Self {
            start,
            end,
            cell_width,
        }
    }

    /// A window covering `tasks`, or `fallback` when none of them has usable dates.
    pub fn for_tasks(tasks: &[Task], fallback: (NaiveDate, NaiveDate), cell_width: f32) -> Self {
        let (start, end) = derive_range(tasks).unwrap_or(fallback);
        Self::new(start, end, cell_width)
    }

    /// Recompute bounds from `tasks`. Keeps the current bounds when the
    /// collection yields no range. Returns whether the bounds changed.
    pub fn refit(&mut self, tasks: &[Task]) -> bool {
        match derive_range(tasks) {
            Some((start, end)) => {
                let changed = (start, end) != (self.start, self.end);
                self.start = start;
                self.end = end;
                changed
            }
            None => {
                log::debug!("No task dates to fit, keeping window {} .. {}", self.start, self.end);
                false
            }
        }
    }

    pub fn set_bounds(&mut self, start: NaiveDate, end: NaiveDate) {
        self.start = start;
        self.end = end;
    }

    /// Every calendar day from `start` to `end` inclusive; empty if inverted.
    pub fn days_iter(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }

    pub fn days(&self) -> Vec<NaiveDate> {
        self.days_iter().collect()
    }

    /// Number of day columns; zero for an inverted window.
    pub fn day_count(&self) -> i64 {
        (days_between(self.start, self.end) + 1).max(0)
    }

    pub fn grid_width(&self) -> f32 {
        self.day_count() as f32 * self.cell_width
    }

    /// X offset of the left edge of `date`'s column.
    pub fn date_to_x(&self, date: NaiveDate) -> f32 {
        days_between(self.start, date) as f32 * self.cell_width
    }

    pub fn position(&self, task: &Task) -> Position {
        position_for(task, self.start, self.cell_width)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Scroll the window by a number of days, keeping its span.
    ///
    /// Leaves the window untouched and returns false when either bound
    /// would leave the representable calendar.
    pub fn shift_days(&mut self, days: i64) -> bool {
        match (add_days(self.start, days), add_days(self.end, days)) {
            (Some(start), Some(end)) => {
                self.start = start;
                self.end = end;
                true
            }
            _ => {
                log::warn!("Cannot shift window {} .. {} by {} days", self.start, self.end, days);
                false
            }
        }
    }

    pub fn page_forward(&mut self) -> bool {
        self.shift_days(self.page_len())
    }

    pub fn page_backward(&mut self) -> bool {
        self.shift_days(-self.page_len())
    }

    /// Move the window so it starts on `date`, keeping its span.
    pub fn jump_to(&mut self, date: NaiveDate) -> bool {
        let delta = days_between(self.start, date);
        self.shift_days(delta)
    }

    fn page_len(&self) -> i64 {
        self.day_count().max(1)
    }
}
