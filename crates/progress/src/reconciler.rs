//! Collection reconciler.
//!
//! Keeps the workout and goal collections consistent with each other. All
//! writes to either collection go through here; each function takes the
//! current snapshots and returns new ones.

use fittrack_core::{Goal, GoalId, Workout, WorkoutId, WorkoutTemplate};
use tracing::debug;

use crate::engine;

/// Append a workout and credit its linked goal.
///
/// The workout is always added. Its goal receives a ledger entry only when
/// `goal_id` names an existing goal that tracks a workout metric; otherwise
/// the goal collection is returned unchanged.
pub fn create_workout(
    workout: Workout,
    workouts: &[Workout],
    goals: &[Goal],
) -> (Vec<Workout>, Vec<Goal>) {
    let goals = match workout.goal_id {
        Some(goal_id) => credit_goal(&workout, goal_id, goals),
        None => goals.to_vec(),
    };

    let mut workouts = workouts.to_vec();
    workouts.push(workout);
    (workouts, goals)
}

/// Remove a workout and withdraw its contribution from the linked goal.
///
/// Unknown ids are a no-op. The removed workout is not altered, so passing it
/// back to [`create_workout`] restores the previous state.
pub fn delete_workout(
    workout_id: WorkoutId,
    workouts: &[Workout],
    goals: &[Goal],
) -> (Vec<Workout>, Vec<Goal>) {
    let Some(workout) = workouts.iter().find(|w| w.id == workout_id) else {
        debug!(%workout_id, "delete of unknown workout ignored");
        return (workouts.to_vec(), goals.to_vec());
    };

    let goals = match workout.goal_id {
        Some(goal_id) => goals
            .iter()
            .map(|goal| {
                if goal.id == goal_id {
                    engine::remove_contribution(goal, workout_id)
                } else {
                    goal.clone()
                }
            })
            .collect(),
        None => goals.to_vec(),
    };

    let workouts = workouts
        .iter()
        .filter(|w| w.id != workout_id)
        .cloned()
        .collect();
    (workouts, goals)
}

/// Append a new goal with its cached percentage brought up to date.
pub fn create_goal(goal: Goal, goals: &[Goal]) -> Vec<Goal> {
    let mut goals = goals.to_vec();
    goals.push(engine::refresh_percentage(&goal));
    goals
}

/// Remove a goal and detach every workout that pointed at it.
///
/// The goal's ledger goes with it. Linked workouts are kept with `goal_id`
/// cleared and all other fields untouched.
pub fn delete_goal(
    goal_id: GoalId,
    workouts: &[Workout],
    goals: &[Goal],
) -> (Vec<Workout>, Vec<Goal>) {
    let workouts = workouts
        .iter()
        .map(|workout| {
            if workout.goal_id == Some(goal_id) {
                let mut detached = workout.clone();
                detached.goal_id = None;
                detached
            } else {
                workout.clone()
            }
        })
        .collect();

    let goals = goals
        .iter()
        .filter(|goal| goal.id != goal_id)
        .cloned()
        .collect();
    (workouts, goals)
}

/// Goals a workout from `template` can be linked to: not yet complete, and in
/// one of the categories the template targets.
pub fn compatible_goals<'a>(template: &WorkoutTemplate, goals: &'a [Goal]) -> Vec<&'a Goal> {
    goals
        .iter()
        .filter(|goal| !engine::is_complete(goal))
        .filter(|goal| template.targets(&goal.category))
        .collect()
}

fn credit_goal(workout: &Workout, goal_id: GoalId, goals: &[Goal]) -> Vec<Goal> {
    let Some(target) = goals.iter().find(|goal| goal.id == goal_id) else {
        debug!(workout_id = %workout.id, %goal_id, "workout links to a missing goal, skipping progress");
        return goals.to_vec();
    };

    let Some(raw_value) = engine::workout_contribution(target, workout) else {
        debug!(workout_id = %workout.id, %goal_id, "custom metric goal, skipping progress");
        return goals.to_vec();
    };

    let (updated, _entry) = engine::record_workout_contribution(target, workout, raw_value);
    goals
        .iter()
        .map(|goal| if goal.id == goal_id { updated.clone() } else { goal.clone() })
        .collect()
}
