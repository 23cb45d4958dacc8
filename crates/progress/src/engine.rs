//! Progress engine: completion percentages and ledger updates.
//!
//! Every function here is pure. Goals come in by reference and leave as new
//! values, so a caller can keep the previous state around for undo.

use fittrack_core::{EntrySource, Goal, GoalType, ProgressEntry, Time, TrackedMetric, Workout, WorkoutId};

/// Assumed starting point of a decrease goal, as a multiple of its target.
///
/// No starting value is recorded for decrease goals, so completion is measured
/// against a start 20% above the target.
pub const DECREASE_START_FACTOR: f64 = 1.2;

/// How complete a goal is, as a whole percentage in `0..=100`.
///
/// Increase goals compare `current_value` to `target_value` directly. Decrease
/// goals are complete once `current_value <= target_value`; above the target
/// they are measured from `target_value * DECREASE_START_FACTOR`.
///
/// `target_value` is expected to be positive. A zero target never panics and
/// never leaves the range, but the result carries no meaning.
pub fn compute_completion_percentage(goal: &Goal) -> u8 {
    match goal.goal_type {
        GoalType::Increase => to_percentage(goal.current_value / goal.target_value),
        GoalType::Decrease => {
            if goal.current_value <= goal.target_value {
                return 100;
            }
            let estimated_start = goal.target_value * DECREASE_START_FACTOR;
            to_percentage(
                (estimated_start - goal.current_value) / (estimated_start - goal.target_value),
            )
        }
    }
}

/// Whether a goal has reached its target.
pub fn is_complete(goal: &Goal) -> bool {
    compute_completion_percentage(goal) >= 100
}

/// Copy of `goal` with `progress_percentage` recomputed.
pub fn refresh_percentage(goal: &Goal) -> Goal {
    let mut updated = goal.clone();
    updated.progress_percentage = compute_completion_percentage(&updated);
    updated
}

/// Raw value a workout contributes to `goal`, or `None` for custom metrics.
pub fn workout_contribution(goal: &Goal, workout: &Workout) -> Option<f64> {
    match goal.metric_to_track {
        TrackedMetric::Duration => Some(workout.duration),
        TrackedMetric::Calories => Some(workout.calories),
        TrackedMetric::Workouts => Some(1.0),
        TrackedMetric::Custom => None,
    }
}

/// Record one contribution against a goal.
///
/// The rule applied depends on where the value came from:
///
/// * [`EntrySource::Manual`]: the value is the goal's new absolute value. The
///   entry's percentage is the share of the remaining gap this entry closed.
/// * [`EntrySource::Workout`]: the value is added to the ledger. Increase goals
///   take the ledger sum as their new value; decrease goals keep theirs, since
///   a workout says nothing about body weight and similar metrics. The entry's
///   percentage is the goal's completion after the entry.
///
/// In both cases the entry is appended and `progress_percentage` recomputed.
pub fn record_contribution(
    goal: &Goal,
    raw_value: f64,
    source_date: Time,
    source: EntrySource,
) -> (Goal, ProgressEntry) {
    match source {
        EntrySource::Manual { .. } => apply_manual(goal, raw_value, source_date, source),
        EntrySource::Workout { .. } => apply_workout(goal, raw_value, source_date, source),
    }
}

/// Manual entry: `raw_value` replaces `current_value`.
pub fn record_manual_entry(
    goal: &Goal,
    raw_value: f64,
    date: Time,
    name: impl Into<String>,
) -> (Goal, ProgressEntry) {
    record_contribution(goal, raw_value, date, EntrySource::Manual { name: name.into() })
}

/// Workout-linked entry tagged with the workout's id and name.
pub fn record_workout_contribution(
    goal: &Goal,
    workout: &Workout,
    raw_value: f64,
) -> (Goal, ProgressEntry) {
    record_contribution(
        goal,
        raw_value,
        workout.date,
        EntrySource::Workout {
            workout_id: workout.id,
            workout_name: workout.name.clone(),
        },
    )
}

/// Drop every ledger entry produced by `workout_id`.
///
/// Increase goals fall back to the sum of the remaining entries (zero when none
/// remain). Decrease goals keep their manually set value.
pub fn remove_contribution(goal: &Goal, workout_id: WorkoutId) -> Goal {
    let mut updated = goal.clone();
    updated
        .progress
        .retain(|entry| entry.workout_id() != Some(workout_id));

    if updated.goal_type == GoalType::Increase {
        updated.current_value = updated.ledger_total();
    }
    updated.progress_percentage = compute_completion_percentage(&updated);
    updated
}

fn apply_manual(goal: &Goal, raw_value: f64, date: Time, source: EntrySource) -> (Goal, ProgressEntry) {
    let gap = goal.target_value - goal.current_value;
    let entry = ProgressEntry {
        date,
        value: raw_value,
        percentage: to_percentage((raw_value - goal.current_value) / gap),
        unit: goal.unit.clone(),
        source,
    };

    let mut updated = goal.clone();
    updated.current_value = raw_value;
    updated.progress.push(entry.clone());
    updated.progress_percentage = compute_completion_percentage(&updated);
    (updated, entry)
}

fn apply_workout(goal: &Goal, raw_value: f64, date: Time, source: EntrySource) -> (Goal, ProgressEntry) {
    let mut updated = goal.clone();
    updated.progress.push(ProgressEntry {
        date,
        value: raw_value,
        percentage: 0,
        unit: goal.unit.clone(),
        source,
    });

    if updated.goal_type == GoalType::Increase && updated.tracks_workouts() {
        updated.current_value = updated.ledger_total();
    }
    let percentage = compute_completion_percentage(&updated);
    updated.progress_percentage = percentage;

    // Just pushed, so the ledger is non-empty.
    let last = updated.progress.len() - 1;
    updated.progress[last].percentage = percentage;
    let entry = updated.progress[last].clone();
    (updated, entry)
}

/// Turn a completion ratio into a clamped whole percentage.
///
/// NaN (0/0) maps to 0; infinities clamp to the nearest bound.
pub(crate) fn to_percentage(ratio: f64) -> u8 {
    let percentage = (ratio * 100.0).round();
    if percentage.is_nan() {
        0
    } else {
        percentage.clamp(0.0, 100.0) as u8
    }
}
