//! Days left until a goal's target date.

use fittrack_core::{Goal, Time};
use serde::{Deserialize, Serialize};

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Where a goal stands relative to its target date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeadlineStatus {
    /// Whole days still left
    Remaining(i64),
    /// Target date is today
    DueToday,
    /// Whole days past the target date
    Overdue(i64),
}

impl std::fmt::Display for DeadlineStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeadlineStatus::Remaining(1) => write!(f, "1 day remaining"),
            DeadlineStatus::Remaining(days) => write!(f, "{days} days remaining"),
            DeadlineStatus::DueToday => write!(f, "Due today"),
            DeadlineStatus::Overdue(1) => write!(f, "1 day overdue"),
            DeadlineStatus::Overdue(days) => write!(f, "{days} days overdue"),
        }
    }
}

/// Days from the start of `now`'s day to the target date, rounded up.
pub fn days_remaining(goal: &Goal, now: Time) -> i64 {
    let start_of_day = now
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .map(|midnight| midnight.and_utc())
        .unwrap_or(now);
    let millis = (goal.target_date - start_of_day).num_milliseconds() as f64;
    (millis / MILLIS_PER_DAY).ceil() as i64
}

/// Deadline status of a goal as seen at `now`.
pub fn deadline_status(goal: &Goal, now: Time) -> DeadlineStatus {
    match days_remaining(goal, now) {
        0 => DeadlineStatus::DueToday,
        days if days > 0 => DeadlineStatus::Remaining(days),
        days => DeadlineStatus::Overdue(days.abs()),
    }
}
