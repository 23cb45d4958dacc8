//! Tracker service: the single owner of the workout and goal collections.

use fittrack_core::{Goal, GoalId, NewGoal, NewWorkout, ProgressEntry, Time, Workout, WorkoutId, WorkoutTemplate};
use fittrack_progress::{engine, reconciler};
use fittrack_storage::{Storage, StorageError};
use tracing::{debug, info};

/// Key holding recently deleted workouts, newest last.
pub const UNDO_KEY: &str = "undo";

/// Error type for tracker operations.
pub type Result<T> = std::result::Result<T, TrackerError>;

/// Errors surfaced by the tracker.
#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    /// Storage backend failed
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Manual progress was entered for a goal that does not exist
    #[error("goal not found: {0}")]
    GoalNotFound(GoalId),

    /// Undo requested with no deleted workout on record
    #[error("nothing to undo")]
    NothingToUndo,
}

/// Configuration for the tracker.
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Persist both collections after every mutation
    pub auto_save: bool,
    /// How many deleted workouts to keep for undo
    pub undo_depth: usize,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            auto_save: true,
            undo_depth: 10,
        }
    }
}

/// Owns the collections and routes every change through the reconciler.
///
/// ```text
/// mutate (reconciler / engine) → replace snapshot → persist
/// ```
pub struct Tracker<S: Storage> {
    storage: S,
    config: TrackerConfig,
    workouts: Vec<Workout>,
    goals: Vec<Goal>,
    deleted: Vec<Workout>,
}

impl<S: Storage> Tracker<S> {
    /// Load both collections (and the undo history) from `storage`.
    pub async fn open(storage: S) -> Result<Self> {
        let workouts = storage.load_workouts().await?;
        // Stored percentages may be missing or stale; the value pair is authoritative.
        let goals = storage
            .load_goals()
            .await?
            .iter()
            .map(engine::refresh_percentage)
            .collect::<Vec<_>>();
        let deleted = match storage.load(UNDO_KEY).await? {
            Some(value) => serde_json::from_value(value).map_err(StorageError::from)?,
            None => Vec::new(),
        };
        debug!(workouts = workouts.len(), goals = goals.len(), "tracker opened");

        Ok(Self {
            storage,
            config: TrackerConfig::default(),
            workouts,
            goals,
            deleted,
        })
    }

    /// Set the configuration.
    pub fn with_config(mut self, config: TrackerConfig) -> Self {
        self.config = config;
        self
    }

    /// Current workouts, in insertion order.
    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    /// Current goals, in insertion order.
    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    /// Look up a goal.
    pub fn goal(&self, id: GoalId) -> Option<&Goal> {
        self.goals.iter().find(|goal| goal.id == id)
    }

    /// Look up a workout.
    pub fn workout(&self, id: WorkoutId) -> Option<&Workout> {
        self.workouts.iter().find(|workout| workout.id == id)
    }

    /// Deleted workouts that can still be restored, oldest first.
    pub fn undo_history(&self) -> &[Workout] {
        &self.deleted
    }

    /// Underlying storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Goals a workout from `template` can be linked to.
    pub fn compatible_goals(&self, template: &WorkoutTemplate) -> Vec<&Goal> {
        reconciler::compatible_goals(template, &self.goals)
    }

    /// Log a workout and credit its goal.
    pub async fn add_workout(&mut self, spec: NewWorkout) -> Result<Workout> {
        let workout = Workout::new(spec);
        self.insert_workout(workout.clone()).await?;
        info!(workout_id = %workout.id, name = %workout.name, "workout added");
        Ok(workout)
    }

    /// Delete a workout. Returns the removed workout, or `None` if the id was
    /// unknown (nothing changes in that case).
    pub async fn delete_workout(&mut self, id: WorkoutId) -> Result<Option<Workout>> {
        let Some(removed) = self.workout(id).cloned() else {
            debug!(workout_id = %id, "workout already gone");
            return Ok(None);
        };

        let (workouts, goals) = reconciler::delete_workout(id, &self.workouts, &self.goals);
        self.workouts = workouts;
        self.goals = goals;

        self.deleted.push(removed.clone());
        if self.deleted.len() > self.config.undo_depth {
            let excess = self.deleted.len() - self.config.undo_depth;
            self.deleted.drain(..excess);
        }

        self.persist().await?;
        info!(workout_id = %id, "workout deleted");
        Ok(Some(removed))
    }

    /// Restore the most recently deleted workout.
    ///
    /// The workout is re-created exactly as it was, so its goal is credited
    /// again if that goal still exists.
    pub async fn undo_delete(&mut self) -> Result<Workout> {
        let workout = self.deleted.pop().ok_or(TrackerError::NothingToUndo)?;
        self.insert_workout(workout.clone()).await?;
        info!(workout_id = %workout.id, "workout restored");
        Ok(workout)
    }

    /// Create a goal.
    pub async fn add_goal(&mut self, spec: NewGoal) -> Result<Goal> {
        let goal = Goal::new(spec);
        let id = goal.id;
        self.goals = reconciler::create_goal(goal, &self.goals);
        self.persist().await?;

        let created = self
            .goal(id)
            .cloned()
            .ok_or(TrackerError::GoalNotFound(id))?;
        info!(goal_id = %id, category = %created.category, "goal added");
        Ok(created)
    }

    /// Delete a goal and detach its workouts. Returns the removed goal, or
    /// `None` if the id was unknown.
    pub async fn delete_goal(&mut self, id: GoalId) -> Result<Option<Goal>> {
        let removed = self.goal(id).cloned();
        let (workouts, goals) = reconciler::delete_goal(id, &self.workouts, &self.goals);
        self.workouts = workouts;
        self.goals = goals;

        // Deleted workouts restored later must not point at the dead goal.
        for workout in self.deleted.iter_mut().filter(|w| w.goal_id == Some(id)) {
            workout.goal_id = None;
        }

        self.persist().await?;
        if removed.is_some() {
            info!(goal_id = %id, "goal deleted");
        }
        Ok(removed)
    }

    /// Record a manually entered value for a goal.
    pub async fn record_progress(
        &mut self,
        goal_id: GoalId,
        value: f64,
        date: Time,
        name: impl Into<String>,
    ) -> Result<ProgressEntry> {
        let goal = self.goal(goal_id).ok_or(TrackerError::GoalNotFound(goal_id))?;
        let (updated, entry) = engine::record_manual_entry(goal, value, date, name);

        for goal in self.goals.iter_mut().filter(|g| g.id == goal_id) {
            *goal = updated.clone();
        }
        self.persist().await?;
        info!(%goal_id, value, percentage = updated.progress_percentage, "progress recorded");
        Ok(entry)
    }

    /// Write both collections and the undo history to storage.
    pub async fn save(&mut self) -> Result<()> {
        self.storage.save_workouts(&self.workouts).await?;
        self.storage.save_goals(&self.goals).await?;
        let deleted = serde_json::to_value(&self.deleted).map_err(StorageError::from)?;
        self.storage.save(UNDO_KEY, &deleted).await?;
        Ok(())
    }

    async fn insert_workout(&mut self, workout: Workout) -> Result<()> {
        let (workouts, goals) = reconciler::create_workout(workout, &self.workouts, &self.goals);
        self.workouts = workouts;
        self.goals = goals;
        self.persist().await
    }

    async fn persist(&mut self) -> Result<()> {
        if self.config.auto_save {
            self.save().await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use chrono::{TimeZone, Utc};
    use fittrack_core::{GoalType, TrackedMetric};

    #[derive(Default)]
    struct MockStorage {
        values: HashMap<String, serde_json::Value>,
        saves: usize,
    }

    #[async_trait::async_trait]
    impl Storage for MockStorage {
        async fn load(&self, key: &str) -> fittrack_storage::Result<Option<serde_json::Value>> {
            Ok(self.values.get(key).cloned())
        }

        async fn save(&mut self, key: &str, value: &serde_json::Value) -> fittrack_storage::Result<()> {
            self.values.insert(key.to_string(), value.clone());
            self.saves += 1;
            Ok(())
        }
    }

    fn duration_goal() -> NewGoal {
        NewGoal {
            name: "100 minutes".to_string(),
            category: "endurance".to_string(),
            target_date: Utc.with_ymd_and_hms(2026, 12, 31, 0, 0, 0).unwrap(),
            target_value: 100.0,
            current_value: 0.0,
            unit: "min".to_string(),
            goal_type: GoalType::Increase,
            metric_to_track: TrackedMetric::Duration,
        }
    }

    fn run(duration: f64, goal_id: Option<GoalId>) -> NewWorkout {
        NewWorkout {
            template_id: Some("wt-1".to_string()),
            name: "Cardio Blast".to_string(),
            date: Utc.with_ymd_and_hms(2026, 10, 17, 6, 45, 0).unwrap(),
            duration,
            calories: 300.0,
            exercises: vec!["Running".to_string()],
            goal_id,
        }
    }

    #[tokio::test]
    async fn test_open_empty_storage() {
        let tracker = Tracker::open(MockStorage::default()).await.unwrap();
        assert!(tracker.workouts().is_empty());
        assert!(tracker.goals().is_empty());
        assert!(tracker.undo_history().is_empty());
    }

    #[tokio::test]
    async fn test_add_workout_updates_goal_and_persists() {
        let mut tracker = Tracker::open(MockStorage::default()).await.unwrap();
        let goal = tracker.add_goal(duration_goal()).await.unwrap();
        tracker.add_workout(run(45.0, Some(goal.id))).await.unwrap();

        let goal = tracker.goal(goal.id).unwrap();
        assert_eq!(goal.current_value, 45.0);
        assert_eq!(goal.progress_percentage, 45);

        let stored = tracker.storage().load_goals().await.unwrap();
        assert_eq!(stored[0].current_value, 45.0);
        assert_eq!(tracker.storage().load_workouts().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_and_undo_workout() {
        let mut tracker = Tracker::open(MockStorage::default()).await.unwrap();
        let goal = tracker.add_goal(duration_goal()).await.unwrap();
        let workout = tracker.add_workout(run(45.0, Some(goal.id))).await.unwrap();

        let removed = tracker.delete_workout(workout.id).await.unwrap();
        assert_eq!(removed, Some(workout.clone()));
        assert!(tracker.workouts().is_empty());
        assert_eq!(tracker.goal(goal.id).unwrap().current_value, 0.0);

        // Second delete is a no-op.
        assert_eq!(tracker.delete_workout(workout.id).await.unwrap(), None);

        let restored = tracker.undo_delete().await.unwrap();
        assert_eq!(restored, workout);
        assert_eq!(tracker.goal(goal.id).unwrap().current_value, 45.0);
        assert!(matches!(tracker.undo_delete().await, Err(TrackerError::NothingToUndo)));
    }

    #[tokio::test]
    async fn test_undo_history_survives_reopen() {
        let mut tracker = Tracker::open(MockStorage::default()).await.unwrap();
        let workout = tracker.add_workout(run(30.0, None)).await.unwrap();
        tracker.delete_workout(workout.id).await.unwrap();

        let storage = tracker.storage;
        let mut reopened = Tracker::open(storage).await.unwrap();
        assert_eq!(reopened.undo_history().len(), 1);
        assert_eq!(reopened.undo_delete().await.unwrap().id, workout.id);
    }

    #[tokio::test]
    async fn test_undo_depth_is_bounded() {
        let mut tracker = Tracker::open(MockStorage::default())
            .await
            .unwrap()
            .with_config(TrackerConfig { auto_save: true, undo_depth: 2 });

        let mut ids = Vec::new();
        for minutes in [10.0, 20.0, 30.0] {
            ids.push(tracker.add_workout(run(minutes, None)).await.unwrap().id);
        }
        for id in &ids {
            tracker.delete_workout(*id).await.unwrap();
        }

        let kept: Vec<_> = tracker.undo_history().iter().map(|w| w.id).collect();
        assert_eq!(kept, vec![ids[1], ids[2]]);
    }

    #[tokio::test]
    async fn test_delete_goal_detaches_workouts_and_undo_history() {
        let mut tracker = Tracker::open(MockStorage::default()).await.unwrap();
        let goal = tracker.add_goal(duration_goal()).await.unwrap();
        let kept = tracker.add_workout(run(45.0, Some(goal.id))).await.unwrap();
        let trashed = tracker.add_workout(run(15.0, Some(goal.id))).await.unwrap();
        tracker.delete_workout(trashed.id).await.unwrap();

        let removed = tracker.delete_goal(goal.id).await.unwrap();
        assert_eq!(removed.map(|g| g.id), Some(goal.id));
        assert!(tracker.goals().is_empty());

        let survivor = tracker.workout(kept.id).unwrap();
        assert_eq!(survivor.goal_id, None);
        assert_eq!(survivor.duration, 45.0);

        let restored = tracker.undo_delete().await.unwrap();
        assert_eq!(restored.goal_id, None);

        assert_eq!(tracker.delete_goal(goal.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_record_progress() {
        let mut tracker = Tracker::open(MockStorage::default()).await.unwrap();
        let goal = tracker
            .add_goal(NewGoal {
                name: "Lose weight".to_string(),
                category: "weight loss".to_string(),
                unit: "kg".to_string(),
                target_value: 70.0,
                current_value: 80.0,
                goal_type: GoalType::Decrease,
                metric_to_track: TrackedMetric::Custom,
                ..duration_goal()
            })
            .await
            .unwrap();
        // Estimated start 84: (84 - 80) / (84 - 70)
        assert_eq!(goal.progress_percentage, 29);

        let entry = tracker
            .record_progress(goal.id, 75.0, Utc::now(), "Weigh-in")
            .await
            .unwrap();
        assert_eq!(entry.percentage, 50);
        assert_eq!(entry.unit, "kg");

        let goal = tracker.goal(goal.id).unwrap();
        assert_eq!(goal.current_value, 75.0);
        assert_eq!(goal.progress_percentage, 64);

        let missing = tracker.record_progress(GoalId::new(), 1.0, Utc::now(), "x").await;
        assert!(matches!(missing, Err(TrackerError::GoalNotFound(_))));
    }

    #[tokio::test]
    async fn test_auto_save_off_defers_writes() {
        let mut tracker = Tracker::open(MockStorage::default())
            .await
            .unwrap()
            .with_config(TrackerConfig { auto_save: false, ..Default::default() });

        tracker.add_workout(run(20.0, None)).await.unwrap();
        assert_eq!(tracker.storage().saves, 0);

        tracker.save().await.unwrap();
        assert_eq!(tracker.storage().saves, 3);
        assert_eq!(tracker.storage().load_workouts().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_json_storage_backend() {
        let dir = tempfile::tempdir().unwrap();
        let storage = fittrack_storage::JsonStorage::new(dir.path()).await.unwrap();
        let mut tracker = Tracker::open(storage).await.unwrap();
        let goal = tracker.add_goal(duration_goal()).await.unwrap();
        tracker.add_workout(run(45.0, Some(goal.id))).await.unwrap();

        let storage = fittrack_storage::JsonStorage::new(dir.path()).await.unwrap();
        let reopened = Tracker::open(storage).await.unwrap();
        assert_eq!(reopened.goal(goal.id).unwrap().progress_percentage, 45);
        assert_eq!(reopened.workouts().len(), 1);
    }

    #[tokio::test]
    async fn test_open_recomputes_cached_percentage() {
        let mut storage = MockStorage::default();
        let stored = serde_json::json!([{
            "id": GoalId::new().to_string(),
            "name": "Half way",
            "category": "endurance",
            "targetDate": "2026-12-31T00:00:00Z",
            "targetValue": 100.0,
            "currentValue": 50.0,
            "unit": "min",
            "goalType": "increase",
            "metricToTrack": "duration"
        }]);
        storage.save(fittrack_storage::GOALS_KEY, &stored).await.unwrap();

        let tracker = Tracker::open(storage).await.unwrap();
        let goal = &tracker.goals()[0];
        assert_eq!(goal.progress_percentage, 50);
        assert_eq!(goal.progress_percentage, engine::compute_completion_percentage(goal));
    }
}
