//! Shared data model for the progression engine.
//!
//! Plain value types exchanged with the host service. The engine never
//! persists them and never mutates caller-owned data; histories and
//! snapshots are read, results are returned as new values.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One recorded set of an exercise.
///
/// Every field is optional: trackers sync partial data, and missing
/// numeric fields are treated as zero for arithmetic. A set with no reps
/// and no completion or RPE marker is classified as a warm-up.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkoutSet {
    /// Position of the set within the session (1-based).
    pub set_number: Option<u32>,
    /// Repetitions performed.
    pub reps: Option<u32>,
    /// Weight lifted in kilograms.
    pub weight: Option<f64>,
    /// Rate of Perceived Exertion (0-10).
    pub rpe: Option<f64>,
    /// Whether the set was marked completed.
    pub completed: Option<bool>,
}

impl WorkoutSet {
    /// Create a set with reps and weight, the common tracker payload.
    pub fn new(reps: u32, weight: f64) -> Self {
        Self {
            set_number: None,
            reps: Some(reps),
            weight: Some(weight),
            rpe: None,
            completed: None,
        }
    }

    /// Set the position within the session.
    pub fn with_number(mut self, set_number: u32) -> Self {
        self.set_number = Some(set_number);
        self
    }

    /// Attach an RPE score.
    pub fn with_rpe(mut self, rpe: f64) -> Self {
        self.rpe = Some(rpe);
        self
    }

    /// Mark the set completed.
    pub fn completed(mut self) -> Self {
        self.completed = Some(true);
        self
    }
}

/// One past session of a specific exercise.
///
/// Histories are passed most-recent-first by caller convention.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseHistoryEntry {
    /// Sets in session order.
    pub sets: Vec<WorkoutSet>,
    /// Calendar day of the session.
    pub workout_date: NaiveDate,
    /// When the session was marked complete.
    pub completed_at: DateTime<Utc>,
}

impl ExerciseHistoryEntry {
    /// Create a history entry.
    pub fn new(sets: Vec<WorkoutSet>, workout_date: NaiveDate, completed_at: DateTime<Utc>) -> Self {
        Self {
            sets,
            workout_date,
            completed_at,
        }
    }
}

/// The record book for one exercise.
///
/// Owned by the caller's storage layer. The engine reads it and returns
/// deltas; applying them is the caller's move (see
/// `PreviousBest::with_events` in the records module).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviousBest {
    /// Heaviest weight lifted in a single set (kg).
    pub max_weight: f64,
    /// Most reps in a single set.
    pub max_reps: u32,
    /// Highest single-session volume (kg).
    pub max_volume: f64,
    /// Best estimated one-rep max (kg).
    pub estimated_1rm: f64,
}

/// Point-in-time cumulative statistics, assembled by the caller from
/// persisted aggregates.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProgressSnapshot {
    /// Total workouts ever completed.
    pub total_workouts: u32,
    /// Current streak length in days.
    pub current_streak: u32,
    /// Longest streak length in days.
    pub longest_streak: u32,
    /// Total personal records set.
    pub total_prs: u32,
    /// Lifetime training volume (kg).
    pub total_volume: f64,
    /// Volume of the most recent workout (kg), if known.
    pub latest_workout_volume: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_builder() {
        let set = WorkoutSet::new(8, 100.0).with_number(2).with_rpe(7.5).completed();

        assert_eq!(set.set_number, Some(2));
        assert_eq!(set.reps, Some(8));
        assert_eq!(set.weight, Some(100.0));
        assert_eq!(set.rpe, Some(7.5));
        assert_eq!(set.completed, Some(true));
    }

    #[test]
    fn test_sparse_set_deserializes() {
        // Trackers often sync only reps and weight
        let set: WorkoutSet = serde_json::from_str(r#"{"reps": 8, "weight": 60.0}"#)
            .expect("Should parse sparse set");

        assert_eq!(set.reps, Some(8));
        assert_eq!(set.weight, Some(60.0));
        assert_eq!(set.set_number, None);
        assert_eq!(set.rpe, None);
        assert_eq!(set.completed, None);
    }

    #[test]
    fn test_fresh_record_book_is_all_zero() {
        let best: PreviousBest = serde_json::from_str("{}").expect("Should parse empty bests");

        assert_eq!(best.max_weight, 0.0);
        assert_eq!(best.max_reps, 0);
        assert_eq!(best.max_volume, 0.0);
        assert_eq!(best.estimated_1rm, 0.0);
    }

    #[test]
    fn test_snapshot_defaults() {
        let snapshot: UserProgressSnapshot =
            serde_json::from_str(r#"{"total_workouts": 10, "current_streak": 7}"#)
                .expect("Should parse partial snapshot");

        assert_eq!(snapshot.total_workouts, 10);
        assert_eq!(snapshot.current_streak, 7);
        assert_eq!(snapshot.longest_streak, 0);
        assert_eq!(snapshot.latest_workout_volume, None);
    }
}
