//! JSON file storage implementation.
//!
//! Stores each key as `<root>/<key>.json` and keeps a small per-key meta
//! marker (version + updated_at) under `<root>/meta/`.

use std::path::{Path, PathBuf};
use super::{Storage, StorageError, Result};
use tokio::fs;
use tracing::debug;

/// File-based JSON storage backend.
pub struct JsonStorage {
    root: PathBuf,
}

impl JsonStorage {
    /// Create storage rooted at `root`, creating the data and meta directories.
    pub async fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();

        fs::create_dir_all(&root).await?;
        fs::create_dir_all(root.join("meta")).await?;

        Ok(Self { root })
    }

    /// Directory this storage writes into.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Number of times `key` has been saved (0 if never).
    pub async fn version(&self, key: &str) -> Result<u64> {
        let path = self.meta_path(check_key(key)?);
        match fs::read_to_string(&path).await {
            Ok(s) => {
                let json: serde_json::Value = serde_json::from_str(&s)?;
                Ok(json.get("version").and_then(|v| v.as_u64()).unwrap_or(0))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(0),
            Err(e) => Err(e.into()),
        }
    }

    fn value_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn meta_path(&self, key: &str) -> PathBuf {
        self.root.join("meta").join(format!("{}.meta.json", key))
    }

    /// Read and increment the per-key version, return the new version.
    async fn bump_version(&self, key: &str) -> Result<u64> {
        let version = self.version(key).await? + 1;
        let meta = serde_json::json!({"version": version, "updated_at": chrono::Utc::now()});
        fs::write(self.meta_path(key), serde_json::to_string_pretty(&meta)?.as_bytes()).await?;
        Ok(version)
    }
}

#[async_trait::async_trait]
impl Storage for JsonStorage {
    async fn load(&self, key: &str) -> Result<Option<serde_json::Value>> {
        let path = self.value_path(check_key(key)?);
        match fs::read_to_string(&path).await {
            Ok(json) => Ok(Some(serde_json::from_str(&json)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&mut self, key: &str, value: &serde_json::Value) -> Result<()> {
        let path = self.value_path(check_key(key)?);
        let json = serde_json::to_string_pretty(value)?;
        fs::write(&path, json.as_bytes()).await?;

        let version = self.bump_version(key).await?;
        debug!(key, version, "saved {}", path.display());
        Ok(())
    }
}

/// Keys become file names, so they must be plain names.
fn check_key(key: &str) -> Result<&str> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(key)
    } else {
        Err(StorageError::Other(format!("invalid storage key: {key:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use fittrack_core::{GoalType, NewGoal, NewWorkout, TrackedMetric, Workout, Goal};

    #[tokio::test]
    async fn test_load_missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonStorage::new(dir.path()).await.unwrap();

        assert!(storage.load("workouts").await.unwrap().is_none());
        assert!(storage.load_workouts().await.unwrap().is_empty());
        assert_eq!(storage.version("workouts").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_save_and_load_value() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = JsonStorage::new(dir.path()).await.unwrap();

        let value = serde_json::json!([{"a": 1}, {"b": [true, null]}]);
        storage.save("things", &value).await.unwrap();
        assert_eq!(storage.load("things").await.unwrap(), Some(value));
        assert!(dir.path().join("things.json").exists());
    }

    #[tokio::test]
    async fn test_version_bumps_on_every_save() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = JsonStorage::new(dir.path()).await.unwrap();

        storage.save_goals(&[]).await.unwrap();
        storage.save_goals(&[]).await.unwrap();
        assert_eq!(storage.version("goals").await.unwrap(), 2);
        assert_eq!(storage.version("workouts").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_typed_collections_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = JsonStorage::new(dir.path()).await.unwrap();

        let goal = Goal::new(NewGoal {
            name: "Lose weight".to_string(),
            category: "weight loss".to_string(),
            target_date: Utc::now(),
            target_value: 70.0,
            current_value: 75.0,
            unit: "kg".to_string(),
            goal_type: GoalType::Decrease,
            metric_to_track: TrackedMetric::Custom,
        });
        let workout = Workout::new(NewWorkout {
            template_id: Some("wt-1".to_string()),
            name: "Cardio Blast".to_string(),
            date: Utc::now(),
            duration: 30.0,
            calories: 300.0,
            exercises: vec!["Running".to_string()],
            goal_id: Some(goal.id),
        });

        storage.save_goals(std::slice::from_ref(&goal)).await.unwrap();
        storage.save_workouts(std::slice::from_ref(&workout)).await.unwrap();

        // A fresh handle reads what the first one wrote.
        let reopened = JsonStorage::new(dir.path()).await.unwrap();
        assert_eq!(reopened.load_goals().await.unwrap(), vec![goal]);
        assert_eq!(reopened.load_workouts().await.unwrap(), vec![workout]);
    }

    #[tokio::test]
    async fn test_rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = JsonStorage::new(dir.path()).await.unwrap();

        let err = storage.save("../escape", &serde_json::Value::Null).await.unwrap_err();
        assert!(matches!(err, StorageError::Other(_)));
        assert!(storage.load("").await.is_err());
    }

    #[tokio::test]
    async fn test_corrupt_file_is_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonStorage::new(dir.path()).await.unwrap();
        std::fs::write(dir.path().join("goals.json"), b"{not json").unwrap();

        let err = storage.load_goals().await.unwrap_err();
        assert!(matches!(err, StorageError::Json(_)));
    }
}
