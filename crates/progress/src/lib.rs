//! Progress Tracking
//!
//! Goal completion, workout-to-goal reconciliation, and the derived views
//! built on top of them.

#![warn(missing_docs)]

pub mod engine;
pub mod reconciler;
pub mod stats;
pub mod deadline;

pub use engine::{
    compute_completion_percentage, is_complete, record_contribution, record_manual_entry,
    record_workout_contribution, remove_contribution, DECREASE_START_FACTOR,
};
pub use reconciler::{compatible_goals, create_goal, create_workout, delete_goal, delete_workout};
pub use stats::{ChartPoint, TimeRange, WorkoutStats};
pub use deadline::{days_remaining, deadline_status, DeadlineStatus};
