//! Derived views for dashboards and charts.

use std::collections::HashMap;

use chrono::Duration;
use fittrack_core::{Goal, GoalId, Time, Workout};
use serde::{Deserialize, Serialize};

/// Window of workouts a view covers, relative to "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeRange {
    /// Last 7 days
    #[default]
    Week,
    /// Last 30 days
    Month,
    /// Everything
    All,
}

impl TimeRange {
    /// Whether a workout dated `date` falls inside the window ending at `now`.
    pub fn contains(&self, date: Time, now: Time) -> bool {
        match self {
            TimeRange::Week => now - date <= Duration::days(7),
            TimeRange::Month => now - date <= Duration::days(30),
            TimeRange::All => true,
        }
    }
}

impl std::str::FromStr for TimeRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "week" => Ok(TimeRange::Week),
            "month" => Ok(TimeRange::Month),
            "all" => Ok(TimeRange::All),
            other => Err(format!("unknown time range: {other}")),
        }
    }
}

/// Totals and averages over a set of workouts.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutStats {
    /// Number of workouts
    pub total_workouts: usize,
    /// Calories over all workouts
    pub total_calories: f64,
    /// Minutes over all workouts
    pub total_duration: f64,
    /// Rounded to a whole number
    pub avg_calories: f64,
    /// Rounded to a whole number
    pub avg_duration: f64,
}

/// One point of a chart series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Short date label, e.g. `Oct 3`
    pub label: String,
    /// Plotted value
    pub value: f64,
}

/// Workouts inside `range`, oldest first.
pub fn workouts_in_range<'a>(workouts: &'a [Workout], range: TimeRange, now: Time) -> Vec<&'a Workout> {
    let mut selected: Vec<_> = workouts
        .iter()
        .filter(|workout| range.contains(workout.date, now))
        .collect();
    selected.sort_by_key(|workout| workout.date);
    selected
}

/// Totals and rounded averages; all zero for an empty slice.
pub fn workout_stats(workouts: &[&Workout]) -> WorkoutStats {
    let total_workouts = workouts.len();
    let total_calories: f64 = workouts.iter().map(|w| w.calories).sum();
    let total_duration: f64 = workouts.iter().map(|w| w.duration).sum();

    let average = |total: f64| {
        if total_workouts > 0 {
            (total / total_workouts as f64).round()
        } else {
            0.0
        }
    };

    WorkoutStats {
        total_workouts,
        total_calories,
        total_duration,
        avg_calories: average(total_calories),
        avg_duration: average(total_duration),
    }
}

/// Calories per workout, in the order given.
pub fn calories_series(workouts: &[&Workout]) -> Vec<ChartPoint> {
    workouts
        .iter()
        .map(|w| ChartPoint { label: short_date(w.date), value: w.calories })
        .collect()
}

/// Duration per workout, in the order given.
pub fn duration_series(workouts: &[&Workout]) -> Vec<ChartPoint> {
    workouts
        .iter()
        .map(|w| ChartPoint { label: short_date(w.date), value: w.duration })
        .collect()
}

/// Running total of a goal's ledger, sorted by entry date.
pub fn goal_progress_series(goal: &Goal) -> Vec<ChartPoint> {
    let mut entries: Vec<_> = goal.progress.iter().collect();
    entries.sort_by_key(|entry| entry.date);

    let mut cumulative = 0.0;
    entries
        .into_iter()
        .map(|entry| {
            cumulative += entry.value;
            ChartPoint { label: short_date(entry.date), value: cumulative }
        })
        .collect()
}

/// Goal id to goal name, for labelling linked workouts.
pub fn goal_names(goals: &[Goal]) -> HashMap<GoalId, String> {
    goals.iter().map(|goal| (goal.id, goal.name.clone())).collect()
}

/// Goals ordered by target date, soonest first.
pub fn goals_by_target_date(goals: &[Goal]) -> Vec<&Goal> {
    let mut sorted: Vec<_> = goals.iter().collect();
    sorted.sort_by_key(|goal| goal.target_date);
    sorted
}

/// Workouts ordered newest first.
pub fn workouts_newest_first(workouts: &[Workout]) -> Vec<&Workout> {
    let mut sorted: Vec<_> = workouts.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}

fn short_date(date: Time) -> String {
    date.format("%b %-d").to_string()
}
