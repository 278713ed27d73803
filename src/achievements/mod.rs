//! Achievement catalog and unlock evaluation.

pub mod definitions;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::UserProgressSnapshot;

/// Locked achievements surfaced as "coming up next".
const NEXT_ACHIEVEMENT_COUNT: usize = 3;

/// Achievement category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AchievementCategory {
    /// Workout-count achievements
    Workout,
    /// Continuity-streak achievements
    Streak,
    /// Personal-record and heavy-session achievements
    Strength,
    /// Cumulative-volume milestones
    Milestone,
}

/// Statistic a requirement is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequirementKind {
    /// Total completed workouts.
    WorkoutCount,
    /// Current or longest streak length in days.
    StreakDays,
    /// Total personal records set.
    PrCount,
    /// Cumulative volume in kg.
    TotalVolume,
    /// Volume of the latest single workout in kg.
    SingleWorkoutVolume,
}

/// Threshold a snapshot must reach to unlock an achievement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Requirement {
    /// Statistic being measured.
    pub kind: RequirementKind,
    /// Threshold value.
    pub value: f64,
    /// Restrict to one exercise, for host-side filtering.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub exercise_id: Option<String>,
}

impl Requirement {
    /// Require a statistic to reach at least `value`.
    pub fn at_least(kind: RequirementKind, value: f64) -> Self {
        Self {
            kind,
            value,
            exercise_id: None,
        }
    }

    /// Scope the requirement to a single exercise.
    pub fn for_exercise(mut self, exercise_id: &str) -> Self {
        self.exercise_id = Some(exercise_id.to_string());
        self
    }

    /// The snapshot statistic this requirement measures.
    pub fn progress_value(&self, snapshot: &UserProgressSnapshot) -> f64 {
        match self.kind {
            RequirementKind::WorkoutCount => f64::from(snapshot.total_workouts),
            RequirementKind::StreakDays => {
                f64::from(snapshot.current_streak.max(snapshot.longest_streak))
            }
            RequirementKind::PrCount => f64::from(snapshot.total_prs),
            RequirementKind::TotalVolume => snapshot.total_volume,
            RequirementKind::SingleWorkoutVolume => snapshot.latest_workout_volume.unwrap_or(0.0),
        }
    }

    /// Whether the snapshot satisfies this requirement.
    pub fn is_met_by(&self, snapshot: &UserProgressSnapshot) -> bool {
        self.progress_value(snapshot) >= self.value
    }
}

/// Achievement definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Achievement {
    /// Unique, stable identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Description
    pub description: String,
    /// Icon name
    pub icon: String,
    /// Category
    pub category: AchievementCategory,
    /// Unlock requirement
    pub requirement: Requirement,
    /// XP granted on unlock
    pub xp_reward: u64,
}

impl Achievement {
    /// Create new achievement
    pub fn new(
        id: &str,
        name: &str,
        description: &str,
        category: AchievementCategory,
        requirement: Requirement,
        xp_reward: u64,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            icon: format!("achievement_{}", id),
            category,
            requirement,
            xp_reward,
        }
    }

    /// Override the default icon
    pub fn with_icon(mut self, icon: &str) -> Self {
        self.icon = icon.to_string();
        self
    }

    /// Whether this achievement is unlocked under the snapshot.
    pub fn is_unlocked_by(&self, snapshot: &UserProgressSnapshot) -> bool {
        self.requirement.is_met_by(snapshot)
    }

    /// Progress toward the requirement (0..100).
    pub fn progress_percent(&self, snapshot: &UserProgressSnapshot) -> f64 {
        let target = self.requirement.value;
        if target <= 0.0 {
            return 100.0;
        }
        ((self.requirement.progress_value(snapshot) / target) * 100.0).min(100.0)
    }
}

/// A locked achievement with its completion percentage, for progress UI.
#[derive(Debug, Clone, Serialize)]
pub struct NextAchievement<'a> {
    /// The locked achievement.
    pub achievement: &'a Achievement,
    /// Completion percentage, capped at 99 until actually unlocked.
    pub percent: f64,
}

/// Catalog construction failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Two achievements share an id.
    #[error("Duplicate achievement id: {0}")]
    DuplicateId(String),
}

/// Immutable, validated achievement catalog.
///
/// Built once at startup; every unlock query derives from a snapshot
/// alone, so results are reproducible and carry no hidden awarded state.
pub struct AchievementCatalog {
    /// All achievements, in display order.
    achievements: Vec<Achievement>,
}

impl AchievementCatalog {
    /// Build a catalog, rejecting duplicate ids.
    pub fn new(achievements: Vec<Achievement>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for achievement in &achievements {
            if !seen.insert(achievement.id.as_str()) {
                return Err(CatalogError::DuplicateId(achievement.id.clone()));
            }
        }
        Ok(Self { achievements })
    }

    /// The built-in catalog.
    pub fn standard() -> Self {
        Self {
            achievements: definitions::all_achievements(),
        }
    }

    /// Get all achievements
    pub fn achievements(&self) -> &[Achievement] {
        &self.achievements
    }

    /// Get achievements by category
    pub fn by_category(&self, category: AchievementCategory) -> Vec<&Achievement> {
        self.achievements
            .iter()
            .filter(|a| a.category == category)
            .collect()
    }

    /// Every achievement the snapshot unlocks.
    ///
    /// Re-derivable at any time: the result depends only on the snapshot,
    /// never on what was previously awarded.
    pub fn unlocked(&self, snapshot: &UserProgressSnapshot) -> Vec<&Achievement> {
        self.achievements
            .iter()
            .filter(|a| a.is_unlocked_by(snapshot))
            .collect()
    }

    /// Achievements unlocked by `current` but not by `previous`.
    ///
    /// The host fires exactly-once notifications from this difference.
    pub fn newly_unlocked(
        &self,
        previous: &UserProgressSnapshot,
        current: &UserProgressSnapshot,
    ) -> Vec<&Achievement> {
        let before: HashSet<&str> = self
            .unlocked(previous)
            .iter()
            .map(|a| a.id.as_str())
            .collect();

        let fresh: Vec<&Achievement> = self
            .unlocked(current)
            .into_iter()
            .filter(|a| !before.contains(a.id.as_str()))
            .collect();

        if !fresh.is_empty() {
            tracing::debug!("Unlocked {} new achievement(s)", fresh.len());
        }

        fresh
    }

    /// The closest locked achievements, highest completion first.
    pub fn next_achievements(&self, snapshot: &UserProgressSnapshot) -> Vec<NextAchievement<'_>> {
        let mut next: Vec<NextAchievement<'_>> = self
            .achievements
            .iter()
            .filter(|a| !a.is_unlocked_by(snapshot))
            .map(|a| NextAchievement {
                achievement: a,
                percent: a.progress_percent(snapshot).min(99.0),
            })
            .collect();

        next.sort_by(|a, b| {
            b.percent
                .partial_cmp(&a.percent)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        next.truncate(NEXT_ACHIEVEMENT_COUNT);
        next
    }
}

/// Total XP granted by a batch of achievements.
pub fn xp_awarded(achievements: &[&Achievement]) -> u64 {
    achievements.iter().map(|a| a.xp_reward).sum()
}
