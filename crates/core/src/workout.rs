//! Workout model - one logged training session.

use serde::{Deserialize, Serialize};
use crate::id::{GoalId, WorkoutId};
use crate::Time;

/// A logged workout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    /// Unique identifier
    pub id: WorkoutId,

    /// Catalog template this workout was created from (lookup only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,

    /// Workout name
    pub name: String,

    /// When the workout took place
    pub date: Time,

    /// Duration in minutes
    pub duration: f64,

    /// Calories burned
    pub calories: f64,

    /// Exercise names, copied from the catalog at creation
    #[serde(default)]
    pub exercises: Vec<String>,

    /// Goal this workout contributes to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_id: Option<GoalId>,
}

impl Workout {
    /// Build a workout from a validated draft.
    pub fn new(spec: NewWorkout) -> Self {
        Self {
            id: WorkoutId::new(),
            template_id: spec.template_id,
            name: spec.name,
            date: spec.date,
            duration: spec.duration,
            calories: spec.calories,
            exercises: spec.exercises,
            goal_id: spec.goal_id,
        }
    }
}

/// Validated input for logging a workout.
#[derive(Debug, Clone)]
pub struct NewWorkout {
    /// Catalog template, if any
    pub template_id: Option<String>,
    /// Workout name
    pub name: String,
    /// When the workout took place
    pub date: Time,
    /// Minutes
    pub duration: f64,
    /// Calories burned
    pub calories: f64,
    /// Exercise names
    pub exercises: Vec<String>,
    /// Goal to credit
    pub goal_id: Option<GoalId>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_unlinked_workout_omits_optional_fields() {
        let workout = Workout::new(NewWorkout {
            template_id: None,
            name: "Evening walk".to_string(),
            date: Utc::now(),
            duration: 30.0,
            calories: 120.0,
            exercises: Vec::new(),
            goal_id: None,
        });

        let json = serde_json::to_value(&workout).unwrap();
        assert!(json.get("goalId").is_none());
        assert!(json.get("templateId").is_none());
        assert_eq!(json["duration"], 30.0);
    }

    #[test]
    fn test_workout_roundtrip_keeps_goal_link() {
        let goal_id = GoalId::new();
        let workout = Workout::new(NewWorkout {
            template_id: Some("wt-1".to_string()),
            name: "Cardio Blast".to_string(),
            date: Utc::now(),
            duration: 30.0,
            calories: 300.0,
            exercises: vec!["Running".to_string(), "Cycling".to_string()],
            goal_id: Some(goal_id),
        });

        let json = serde_json::to_string(&workout).unwrap();
        let back: Workout = serde_json::from_str(&json).unwrap();
        assert_eq!(back, workout);
        assert_eq!(back.goal_id, Some(goal_id));
    }
}
