//! RepForge - Workout Progression and Gamification Engine
//!
//! A pure, stateless computation library that turns a history of completed
//! exercise sets and workout dates into continuity streaks, personal-record
//! detections, progressive-overload advice, and achievement/XP unlock
//! decisions. The host supplies input snapshots and persists results; every
//! function here is deterministic and free of I/O.

pub mod achievements;
pub mod formulas;
pub mod leveling;
pub mod models;
pub mod overload;
pub mod records;
pub mod streaks;

// Re-export commonly used types
pub use achievements::{Achievement, AchievementCatalog, NextAchievement};
pub use leveling::{LevelInfo, LevelTable, LevelUpCheck};
pub use models::{ExerciseHistoryEntry, PreviousBest, UserProgressSnapshot, WorkoutSet};
pub use overload::{OverloadAdvisor, OverloadSuggestion};
pub use records::{detect_personal_records, PersonalRecordEvent};
pub use streaks::{StreakCalculator, StreakState};
