//! Calendar helpers for week-anchored plans.

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

/// First day of a plan week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    Sunday,
    Monday,
}

/// Advance `date` to the next week boundary. A date already on the
/// boundary is returned unchanged.
pub fn next_week_boundary(date: NaiveDate, start: WeekStart) -> NaiveDate {
    let offset = match start {
        WeekStart::Sunday => date.weekday().num_days_from_sunday(),
        WeekStart::Monday => date.weekday().num_days_from_monday(),
    };
    let days_ahead = (7 - offset) % 7;
    date + Duration::days(days_ahead as i64)
}

/// ISO week-of-year label, e.g. `2024-W01`.
pub fn iso_week_label(date: NaiveDate) -> String {
    let iso = date.iso_week();
    format!("{}-W{:02}", iso.year(), iso.week())
}

/// Map a 1-based week index onto a display level given the number of
/// weeks in each level. Weeks past the end of the layout fall into the
/// last level.
pub fn level_for_week(week_index: u32, layout: &[u32]) -> u32 {
    let mut upper = 0;
    for (i, size) in layout.iter().enumerate() {
        upper += size;
        if week_index <= upper {
            return i as u32 + 1;
        }
    }
    layout.len().max(1) as u32
}
