//! Calendar arithmetic and day classification for the timeline grid.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Weekday};

/// Weekend days of the Gulf-region work week.
pub const WEEKEND: [Weekday; 2] = [Weekday::Fri, Weekday::Sat];

/// Signed number of calendar days from `from` to `to`.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}

/// `date` moved by `days`, or `None` past the representable calendar.
pub fn add_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    Duration::try_days(days).and_then(|delta| date.checked_add_signed(delta))
}

/// True on Fridays and Saturdays.
pub fn is_weekend(date: NaiveDate) -> bool {
    WEEKEND.contains(&date.weekday())
}

/// True iff `date` is the current local calendar date.
pub fn is_today(date: NaiveDate) -> bool {
    is_today_at(date, chrono::Local::now().naive_local())
}

/// Same as [`is_today`] against an explicit local wall-clock instant.
pub fn is_today_at(date: NaiveDate, now: NaiveDateTime) -> bool {
    let today = now.date();
    date.year() == today.year() && date.month() == today.month() && date.day() == today.day()
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn at(date: NaiveDate, h: u32, min: u32) -> NaiveDateTime {
        date.and_time(NaiveTime::from_hms_opt(h, min, 0).unwrap())
    }

    #[test]
    fn days_between_is_signed() {
        assert_eq!(days_between(d(2024, 1, 1), d(2024, 1, 1)), 0);
        assert_eq!(days_between(d(2024, 1, 1), d(2024, 1, 5)), 4);
        assert_eq!(days_between(d(2024, 1, 5), d(2024, 1, 1)), -4);
        // leap day
        assert_eq!(days_between(d(2024, 2, 28), d(2024, 3, 1)), 2);
    }

    #[test]
    fn add_days_stops_at_calendar_limits() {
        assert_eq!(add_days(d(2024, 2, 28), 2), Some(d(2024, 3, 1)));
        assert_eq!(add_days(d(2024, 3, 1), -2), Some(d(2024, 2, 28)));
        assert_eq!(add_days(NaiveDate::MAX, 1), None);
        assert_eq!(add_days(NaiveDate::MIN, -1), None);
        assert_eq!(add_days(d(2024, 1, 1), i64::MAX), None);
    }

    #[test]
    fn friday_and_saturday_are_the_weekend() {
        // 2024-03-08 is a Friday.
        assert!(is_weekend(d(2024, 3, 8)));
        assert!(is_weekend(d(2024, 3, 9)));
        assert!(!is_weekend(d(2024, 3, 10)));
        assert!(!is_weekend(d(2024, 3, 11)));
        assert!(!is_weekend(d(2024, 3, 14)));
    }

    #[test]
    fn today_just_before_midnight() {
        let now = at(d(2024, 3, 10), 23, 59);
        assert!(is_today_at(d(2024, 3, 10), now));
        assert!(!is_today_at(d(2024, 3, 11), now));
        assert!(!is_today_at(d(2024, 3, 9), now));
    }

    #[test]
    fn today_just_after_midnight() {
        let now = at(d(2024, 3, 11), 0, 1);
        assert!(is_today_at(d(2024, 3, 11), now));
        assert!(!is_today_at(d(2024, 3, 10), now));
        assert!(!is_today_at(d(2024, 3, 12), now));
    }

    #[test]
    fn same_day_other_year_is_not_today() {
        let now = at(d(2024, 3, 11), 12, 0);
        assert!(!is_today_at(d(2023, 3, 11), now));
        assert!(!is_today_at(d(2024, 4, 11), now));
    }

    #[test]
    fn wall_clock_today() {
        let now = today();
        assert!(is_today(now));
        assert!(!is_today(now.succ_opt().unwrap()));
    }
}
