//! Goal model - a fitness target with its progress ledger.

use serde::{Deserialize, Serialize};
use crate::id::{GoalId, WorkoutId};
use crate::Time;

/// A goal is a target value the user wants to reach by a date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    /// Unique identifier
    pub id: GoalId,

    /// Goal name
    pub name: String,

    /// Goal category, matched against the catalog's categories
    pub category: String,

    /// Date the goal should be reached by
    pub target_date: Time,

    /// Value to reach
    pub target_value: f64,

    /// Latest known value
    pub current_value: f64,

    /// Unit of `target_value` and `current_value`
    pub unit: String,

    /// Direction `current_value` must move in
    pub goal_type: GoalType,

    /// Which workout attribute feeds this goal
    pub metric_to_track: TrackedMetric,

    /// Progress ledger, in entry order
    #[serde(default)]
    pub progress: Vec<ProgressEntry>,

    /// Cached completion percentage (0-100)
    #[serde(default)]
    pub progress_percentage: u8,
}

impl Goal {
    /// Build a goal from a validated draft. The ledger starts empty.
    ///
    /// `progress_percentage` starts at 0; `reconciler::create_goal` in
    /// `fittrack-progress` fills it in when the goal joins a collection.
    pub fn new(spec: NewGoal) -> Self {
        Self {
            id: GoalId::new(),
            name: spec.name,
            category: spec.category,
            target_date: spec.target_date,
            target_value: spec.target_value,
            current_value: spec.current_value,
            unit: spec.unit,
            goal_type: spec.goal_type,
            metric_to_track: spec.metric_to_track,
            progress: Vec::new(),
            progress_percentage: 0,
        }
    }

    /// Whether workouts linked to this goal contribute automatically.
    pub fn tracks_workouts(&self) -> bool {
        self.metric_to_track.is_workout_linked()
    }

    /// Sum of every ledger value.
    pub fn ledger_total(&self) -> f64 {
        self.progress.iter().map(|entry| entry.value).sum()
    }
}

/// Direction in which a goal's value must move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalType {
    /// Higher is better (distance, reps, minutes)
    Increase,
    /// Lower is better (body weight, resting heart rate)
    Decrease,
}

impl GoalType {
    /// Lowercase name as stored.
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalType::Increase => "increase",
            GoalType::Decrease => "decrease",
        }
    }
}

impl std::str::FromStr for GoalType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "increase" => Ok(GoalType::Increase),
            "decrease" => Ok(GoalType::Decrease),
            other => Err(format!("unknown goal type: {other}")),
        }
    }
}

/// Workout attribute that updates a goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackedMetric {
    /// Workout duration in minutes
    Duration,
    /// Calories burned
    Calories,
    /// One per workout
    Workouts,
    /// Entered by hand, never updated by workouts
    Custom,
}

impl TrackedMetric {
    /// True for every metric except `Custom`.
    pub fn is_workout_linked(&self) -> bool {
        !matches!(self, TrackedMetric::Custom)
    }

    /// Unit a goal gets by default for this metric.
    pub fn default_unit(&self) -> Option<&'static str> {
        match self {
            TrackedMetric::Duration => Some("min"),
            TrackedMetric::Calories => Some("cal"),
            TrackedMetric::Workouts => Some("workouts"),
            TrackedMetric::Custom => None,
        }
    }

    /// Lowercase name as stored.
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackedMetric::Duration => "duration",
            TrackedMetric::Calories => "calories",
            TrackedMetric::Workouts => "workouts",
            TrackedMetric::Custom => "custom",
        }
    }
}

impl std::str::FromStr for TrackedMetric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "duration" => Ok(TrackedMetric::Duration),
            "calories" => Ok(TrackedMetric::Calories),
            "workouts" => Ok(TrackedMetric::Workouts),
            "custom" => Ok(TrackedMetric::Custom),
            other => Err(format!("unknown metric: {other}")),
        }
    }
}

/// One contribution recorded against a goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressEntry {
    /// When the contribution happened
    pub date: Time,

    /// Contribution magnitude
    pub value: f64,

    /// Goal completion at the time of this entry
    pub percentage: u8,

    /// Unit of `value`
    pub unit: String,

    /// Where the entry came from
    #[serde(flatten)]
    pub source: EntrySource,
}

impl ProgressEntry {
    /// Workout that produced this entry, if any.
    pub fn workout_id(&self) -> Option<WorkoutId> {
        match &self.source {
            EntrySource::Workout { workout_id, .. } => Some(*workout_id),
            EntrySource::Manual { .. } => None,
        }
    }

    /// Display label: the workout name or the manual entry name.
    pub fn label(&self) -> &str {
        match &self.source {
            EntrySource::Workout { workout_name, .. } => workout_name,
            EntrySource::Manual { name } => name,
        }
    }
}

/// Provenance of a progress entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "lowercase")]
pub enum EntrySource {
    /// Produced automatically from a logged workout
    Workout {
        /// Workout that produced the entry
        #[serde(rename = "workoutId")]
        workout_id: WorkoutId,
        /// Workout name at the time of the entry
        #[serde(rename = "workoutName")]
        workout_name: String,
    },
    /// Entered by hand
    Manual {
        /// Entry label, e.g. "Weigh-in"
        name: String,
    },
}

/// Validated input for creating a goal.
#[derive(Debug, Clone)]
pub struct NewGoal {
    /// Goal name
    pub name: String,
    /// Catalog category name
    pub category: String,
    /// Date the goal should be reached by
    pub target_date: Time,
    /// Value to reach
    pub target_value: f64,
    /// Starting value
    pub current_value: f64,
    /// Unit of both values
    pub unit: String,
    /// Direction of travel
    pub goal_type: GoalType,
    /// Workout attribute feeding the goal
    pub metric_to_track: TrackedMetric,
}
