//! Exercise catalog (read-only reference data).
//!
//! Lookups over the built-in exercises, workout templates and goal
//! categories. Nothing here is mutated at runtime.

#![warn(missing_docs)]

mod data;

use data::{EXERCISES, GOAL_CATEGORIES, WORKOUT_TEMPLATES};
use fittrack_core::{Exercise, GoalCategory, WorkoutTemplate};

/// All exercises, in catalog order.
pub fn exercises() -> &'static [Exercise] {
    EXERCISES
}

/// All workout templates, in catalog order.
pub fn workout_templates() -> &'static [WorkoutTemplate] {
    WORKOUT_TEMPLATES
}

/// Goal categories together with the units each one allows.
pub fn categories_and_units() -> &'static [GoalCategory] {
    GOAL_CATEGORIES
}

/// Get exercise details by id.
pub fn exercise_by_id(id: &str) -> Option<&'static Exercise> {
    EXERCISES.iter().find(|exercise| exercise.id == id)
}

/// Get workout template details by id.
pub fn template_by_id(id: &str) -> Option<&'static WorkoutTemplate> {
    WORKOUT_TEMPLATES.iter().find(|template| template.id == id)
}

/// Exercises suitable for a template, in catalog order. Unknown template → empty.
pub fn exercises_for_template(template_id: &str) -> Vec<&'static Exercise> {
    let Some(template) = template_by_id(template_id) else {
        return Vec::new();
    };

    EXERCISES
        .iter()
        .filter(|exercise| template.suitable_exercises.contains(&exercise.id))
        .collect()
}

/// Templates that help with goals of `category`.
pub fn templates_for_goal_category(category: &str) -> Vec<&'static WorkoutTemplate> {
    WORKOUT_TEMPLATES
        .iter()
        .filter(|template| template.targets(category))
        .collect()
}

/// Look up a goal category by name.
pub fn category_by_name(name: &str) -> Option<&'static GoalCategory> {
    GOAL_CATEGORIES
        .iter()
        .find(|category| category.name.eq_ignore_ascii_case(name.trim()))
}

/// Units allowed for a category; empty for unknown categories.
pub fn units_for_category(name: &str) -> Vec<&'static str> {
    category_by_name(name)
        .map(|category| category.metric_units.iter().map(|m| m.unit).collect())
        .unwrap_or_default()
}

/// Snapshot exercise names for the given ids. Unknown ids are kept verbatim.
pub fn exercise_names(ids: &[String]) -> Vec<String> {
    ids.iter()
        .map(|id| match exercise_by_id(id) {
            Some(exercise) => exercise.name.to_string(),
            None => id.clone(),
        })
        .collect()
}
