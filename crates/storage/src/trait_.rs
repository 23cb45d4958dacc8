//! Storage trait abstraction.

use async_trait::async_trait;
use fittrack_core::{Goal, Workout};

/// Key holding the workout collection.
pub const WORKOUTS_KEY: &str = "workouts";

/// Key holding the goal collection.
pub const GOALS_KEY: &str = "goals";

/// Error type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Other error
    #[error("{0}")]
    Other(String),
}

/// Key-value storage for FitTrack collections.
///
/// Values are plain JSON. This trait allows different backends to be plugged
/// in; the typed helpers only need `load` and `save`.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Load the value stored under `key`, or `None` if nothing was saved yet.
    async fn load(&self, key: &str) -> Result<Option<serde_json::Value>>;

    /// Store `value` under `key`, replacing any previous value.
    async fn save(&mut self, key: &str, value: &serde_json::Value) -> Result<()>;

    // === Typed collections ===

    /// Load the workout collection (empty when never saved).
    async fn load_workouts(&self) -> Result<Vec<Workout>> {
        load_collection(self, WORKOUTS_KEY).await
    }

    /// Load the goal collection (empty when never saved).
    async fn load_goals(&self) -> Result<Vec<Goal>> {
        load_collection(self, GOALS_KEY).await
    }

    /// Replace the stored workout collection.
    async fn save_workouts(&mut self, workouts: &[Workout]) -> Result<()> {
        let value = serde_json::to_value(workouts)?;
        self.save(WORKOUTS_KEY, &value).await
    }

    /// Replace the stored goal collection.
    async fn save_goals(&mut self, goals: &[Goal]) -> Result<()> {
        let value = serde_json::to_value(goals)?;
        self.save(GOALS_KEY, &value).await
    }
}

async fn load_collection<S, T>(storage: &S, key: &str) -> Result<Vec<T>>
where
    S: Storage + ?Sized,
    T: serde::de::DeserializeOwned,
{
    match storage.load(key).await? {
        Some(value) => Ok(serde_json::from_value(value)?),
        None => Ok(Vec::new()),
    }
}
