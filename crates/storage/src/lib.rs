//! Storage abstraction and implementations for FitTrack.
//!
//! This crate provides a trait-based key-value storage interface with a
//! JSON file reference implementation.

#![warn(missing_docs)]

pub mod trait_;
pub mod json_storage;

pub use trait_::{Storage, StorageError, Result, WORKOUTS_KEY, GOALS_KEY};
pub use json_storage::JsonStorage;
