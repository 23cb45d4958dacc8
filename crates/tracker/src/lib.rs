//! Tracker service.
//!
//! Owns the workout and goal collections, applies every change through the
//! reconciler, and persists the result.

#![warn(missing_docs)]

pub mod manager;

pub use manager::{Tracker, TrackerConfig, TrackerError, Result, UNDO_KEY};
