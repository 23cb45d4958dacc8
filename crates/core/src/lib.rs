//! FitTrack core data models.
//!
//! This crate defines the goals, workouts and progress entries that the
//! progress engine and the collection reconciler operate on, plus the
//! reference-data types of the exercise catalog.

#![warn(missing_docs)]

// Core identities
mod id;

// Tracked entities
mod goal;
mod workout;

// Reference data
mod catalog;

// Re-exports
pub use id::*;

pub use goal::{Goal, GoalType, TrackedMetric, ProgressEntry, EntrySource, NewGoal};
pub use workout::{Workout, NewWorkout};
pub use catalog::{Exercise, WorkoutTemplate, GoalCategory, MetricUnit};

/// Timestamp type
pub type Time = chrono::DateTime<chrono::Utc>;
