//! Form validation. Turns raw command-line input into the validated drafts the
//! tracker accepts; nothing reaches the core without passing through here.

use chrono::{Duration, NaiveDate};
use fittrack_core::{Goal, GoalId, GoalType, NewGoal, NewWorkout, Time, TrackedMetric};
use fittrack_progress::reconciler;

/// Days ahead a goal's target date defaults to.
pub const DEFAULT_GOAL_HORIZON_DAYS: i64 = 30;

/// Why a form was rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("{field} must be a positive number (got {value})")]
    NotPositive { field: &'static str, value: f64 },

    #[error("{field} must be a non-negative number (got {value})")]
    Negative { field: &'static str, value: f64 },

    #[error("unknown workout template: {0}")]
    UnknownTemplate(String),

    #[error("exercise {exercise} is not part of template {template}")]
    ExerciseNotInTemplate { exercise: String, template: String },

    #[error("at least one exercise is required")]
    NoExercises,

    #[error("unknown goal category: {0}")]
    UnknownCategory(String),

    #[error("unit {unit:?} is not used for {category} goals (allowed: {allowed})")]
    UnitNotAllowed { unit: String, category: String, allowed: String },

    #[error("goal {0} cannot be linked to this workout")]
    IncompatibleGoal(GoalId),

    #[error("target date must not be in the past")]
    TargetDateInPast,

    #[error("invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),
}

/// Raw input for logging a workout.
#[derive(Debug, Clone, Default)]
pub struct WorkoutForm {
    pub template_id: String,
    pub name: Option<String>,
    pub date: Option<String>,
    pub duration: Option<f64>,
    pub calories: Option<f64>,
    pub exercise_ids: Vec<String>,
    pub goal_id: Option<GoalId>,
}

/// Raw input for creating a goal.
#[derive(Debug, Clone)]
pub struct GoalForm {
    pub name: String,
    pub category: String,
    pub target_date: Option<String>,
    pub target_value: f64,
    pub current_value: f64,
    pub unit: Option<String>,
    pub goal_type: GoalType,
    pub metric_to_track: TrackedMetric,
    /// Accept a unit outside the category's list
    pub any_unit: bool,
}

/// Raw input for a manual progress entry.
#[derive(Debug, Clone)]
pub struct ProgressForm {
    pub name: String,
    pub value: f64,
    pub date: Option<String>,
}

/// Validated manual progress entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressInput {
    pub name: String,
    pub value: f64,
    pub date: Time,
}

/// Validate a workout form. Name, duration and calories default to the
/// template's values; exercise names are snapshotted from the catalog.
pub fn workout(form: WorkoutForm, goals: &[Goal], now: Time) -> Result<NewWorkout, ValidationError> {
    let template = fittrack_catalog::template_by_id(&form.template_id)
        .ok_or_else(|| ValidationError::UnknownTemplate(form.template_id.clone()))?;

    let name = form.name.unwrap_or_else(|| template.name.to_string());
    if name.trim().is_empty() {
        return Err(ValidationError::Required("workout name"));
    }

    let duration = positive("duration", form.duration.unwrap_or(template.recommended_duration))?;
    let calories = positive("calories", form.calories.unwrap_or(template.estimated_calories))?;

    if form.exercise_ids.is_empty() {
        return Err(ValidationError::NoExercises);
    }
    for id in &form.exercise_ids {
        if !template.suitable_exercises.contains(&id.as_str()) {
            return Err(ValidationError::ExerciseNotInTemplate {
                exercise: id.clone(),
                template: template.id.to_string(),
            });
        }
    }

    if let Some(goal_id) = form.goal_id {
        let compatible = reconciler::compatible_goals(template, goals);
        if !compatible.iter().any(|goal| goal.id == goal_id) {
            return Err(ValidationError::IncompatibleGoal(goal_id));
        }
    }

    let date = match form.date {
        Some(raw) => parse_date(&raw)?,
        None => now,
    };

    Ok(NewWorkout {
        template_id: Some(template.id.to_string()),
        name: name.trim().to_string(),
        date,
        duration,
        calories,
        exercises: fittrack_catalog::exercise_names(&form.exercise_ids),
        goal_id: form.goal_id,
    })
}

/// Validate a goal form.
///
/// Workout-linked metrics default their unit (`min`, `cal`, `workouts`).
/// Custom metrics need an explicit unit from the category's list unless
/// `any_unit` is set.
pub fn goal(form: GoalForm, now: Time) -> Result<NewGoal, ValidationError> {
    if form.name.trim().is_empty() {
        return Err(ValidationError::Required("goal name"));
    }
    if form.category.trim().is_empty() {
        return Err(ValidationError::Required("goal category"));
    }
    let category = fittrack_catalog::category_by_name(&form.category)
        .ok_or_else(|| ValidationError::UnknownCategory(form.category.clone()))?;

    let target_value = positive("target value", form.target_value)?;
    let current_value = non_negative("current value", form.current_value)?;

    let unit = match (form.unit, form.metric_to_track.default_unit()) {
        (Some(unit), _) if !unit.trim().is_empty() => unit.trim().to_string(),
        (_, Some(default)) => default.to_string(),
        _ => return Err(ValidationError::Required("unit")),
    };
    let linked = form.metric_to_track.is_workout_linked();
    if !linked && !form.any_unit && !category.allows_unit(&unit) {
        let allowed: Vec<_> = category.metric_units.iter().map(|m| m.unit).collect();
        return Err(ValidationError::UnitNotAllowed {
            unit,
            category: category.name.to_string(),
            allowed: allowed.join(", "),
        });
    }

    let target_date = match form.target_date {
        Some(raw) => parse_date(&raw)?,
        None => now + Duration::days(DEFAULT_GOAL_HORIZON_DAYS),
    };
    if target_date.date_naive() < now.date_naive() {
        return Err(ValidationError::TargetDateInPast);
    }

    Ok(NewGoal {
        name: form.name.trim().to_string(),
        category: category.name.to_string(),
        target_date,
        target_value,
        current_value,
        unit,
        goal_type: form.goal_type,
        metric_to_track: form.metric_to_track,
    })
}

/// Validate a manual progress entry.
pub fn progress(form: ProgressForm, now: Time) -> Result<ProgressInput, ValidationError> {
    if form.name.trim().is_empty() {
        return Err(ValidationError::Required("progress name"));
    }
    let value = non_negative("value", form.value)?;
    let date = match form.date {
        Some(raw) => parse_date(&raw)?,
        None => now,
    };

    Ok(ProgressInput {
        name: form.name.trim().to_string(),
        value,
        date,
    })
}

/// Parse `YYYY-MM-DD` as midnight UTC.
pub fn parse_date(raw: &str) -> Result<Time, ValidationError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
        .ok_or_else(|| ValidationError::InvalidDate(raw.to_string()))
}

fn positive(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ValidationError::NotPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ValidationError::Negative { field, value })
    }
}
