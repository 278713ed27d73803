//! Progressive-overload recommendations.
//!
//! Evaluates recent exercise history and recommends the next adjustment:
//! - Weight increases when the target rep range is beaten or effort is low
//! - Weight decreases when reps collapse or effort maxes out
//! - Rep increases inside the target range
//! - A deload when the top working weight has plateaued
//!
//! Rules are checked in priority order; the first match wins.

use serde::{Deserialize, Serialize};

use crate::formulas::working_sets;
use crate::models::{ExerciseHistoryEntry, WorkoutSet};

/// Recent entries analyzed for consistency and struggle signals.
const ANALYSIS_WINDOW: usize = 3;
/// Sessions with an identical top weight that signal a plateau.
const PLATEAU_WINDOW: usize = 4;

/// Kind of training adjustment recommended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    /// Add weight next session.
    IncreaseWeight,
    /// Add reps at the current weight.
    IncreaseReps,
    /// Back the weight off.
    DecreaseWeight,
    /// Take a planned lighter session.
    Deload,
    /// Keep the current prescription.
    Maintain,
}

impl SuggestionKind {
    /// Display label for the adjustment.
    pub fn label(&self) -> &'static str {
        match self {
            SuggestionKind::IncreaseWeight => "Increase Weight",
            SuggestionKind::IncreaseReps => "Increase Reps",
            SuggestionKind::DecreaseWeight => "Decrease Weight",
            SuggestionKind::Deload => "Deload",
            SuggestionKind::Maintain => "Maintain",
        }
    }
}

/// Confidence grade for a suggestion, driven by how much history backed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// Full analysis window available.
    High,
    /// Two sessions analyzed.
    Medium,
    /// One session or less.
    Low,
}

/// Prescriptive adjustment for one exercise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverloadSuggestion {
    /// Adjustment to make next session.
    pub kind: SuggestionKind,
    /// Human-readable coaching text.
    pub suggestion: String,
    /// Target weight in kg, when the adjustment names one.
    pub recommended_weight: Option<f64>,
    /// Target reps per set, when the adjustment names one.
    pub recommended_reps: Option<u32>,
    /// The condition that triggered this suggestion.
    pub reason: String,
    /// Analysis depth grade.
    pub confidence: Confidence,
}

/// Aggregates computed over the most recent session's working sets.
struct SessionStats {
    /// Heaviest weight used.
    last_weight: f64,
    /// Mean reps per set.
    avg_reps: f64,
    /// Best single-set rep count.
    max_reps: u32,
    /// Mean RPE over sets that recorded one, if any did.
    avg_rpe: Option<f64>,
}

impl SessionStats {
    fn from_sets(sets: &[&WorkoutSet]) -> Self {
        let last_weight = sets
            .iter()
            .map(|set| set.weight.unwrap_or(0.0))
            .fold(0.0_f64, f64::max);
        let total_reps: u64 = sets
            .iter()
            .map(|set| u64::from(set.reps.unwrap_or(0)))
            .sum();
        let avg_reps = total_reps as f64 / sets.len() as f64;
        let max_reps = sets
            .iter()
            .map(|set| set.reps.unwrap_or(0))
            .max()
            .unwrap_or(0);

        let rpes: Vec<f64> = sets.iter().filter_map(|set| set.rpe).collect();
        let avg_rpe = if rpes.is_empty() {
            None
        } else {
            Some(rpes.iter().sum::<f64>() / rpes.len() as f64)
        };

        Self {
            last_weight,
            avg_reps,
            max_reps,
            avg_rpe,
        }
    }
}

/// Progressive-overload advisor for a target rep range.
pub struct OverloadAdvisor {
    /// Lower bound of the target rep range.
    reps_min: u32,
    /// Upper bound of the target rep range.
    reps_max: u32,
}

impl OverloadAdvisor {
    /// Create an advisor with the default 8-12 rep range.
    pub fn new() -> Self {
        Self {
            reps_min: 8,
            reps_max: 12,
        }
    }

    /// Create an advisor with a custom rep range (`reps_min <= reps_max`).
    pub fn with_rep_range(reps_min: u32, reps_max: u32) -> Self {
        Self { reps_min, reps_max }
    }

    /// Recommend the next adjustment from recent history.
    ///
    /// `history` is ordered most-recent-first; only the newest few entries
    /// are analyzed. Fewer entries than the analysis window is fine and is
    /// reflected in the suggestion's confidence.
    pub fn suggest(&self, history: &[ExerciseHistoryEntry]) -> OverloadSuggestion {
        if history.is_empty() {
            return self.no_history();
        }

        let latest_working = working_sets(&history[0].sets);
        if latest_working.is_empty() {
            return self.incomplete_data();
        }

        let recent = &history[..history.len().min(ANALYSIS_WINDOW)];
        let stats = SessionStats::from_sets(&latest_working);
        let confidence = confidence_for(recent.len());

        let hit_target_consistently = recent.iter().all(|entry| {
            let sets = working_sets(&entry.sets);
            !sets.is_empty()
                && sets
                    .iter()
                    .all(|set| set.reps.unwrap_or(0) >= self.reps_min)
        });
        let struggling_recently = recent.iter().any(|entry| {
            working_sets(&entry.sets)
                .iter()
                .any(|set| i64::from(set.reps.unwrap_or(0)) < i64::from(self.reps_min) - 2)
        });

        if hit_target_consistently && stats.avg_reps >= f64::from(self.reps_max) {
            return self.increase_weight_consistent(&stats, confidence);
        }

        if let Some(avg_rpe) = stats.avg_rpe {
            if avg_rpe < 7.0 && stats.avg_reps >= f64::from(self.reps_min) {
                return self.increase_weight_low_rpe(&stats, avg_rpe, confidence);
            }
        }

        if struggling_recently || stats.avg_rpe.map_or(false, |rpe| rpe > 9.0) {
            return self.decrease_weight(&stats, struggling_recently, confidence);
        }

        if stats.avg_reps >= f64::from(self.reps_min) && stats.avg_reps < f64::from(self.reps_max) {
            return self.increase_reps(&stats, confidence);
        }

        if self.plateaued(history) {
            return self.deload(&stats, confidence);
        }

        self.maintain(&stats, confidence)
    }

    /// Suggestion when the exercise has never been logged.
    fn no_history(&self) -> OverloadSuggestion {
        OverloadSuggestion {
            kind: SuggestionKind::Maintain,
            suggestion: "Start with a comfortable weight and focus on form".to_string(),
            recommended_weight: None,
            recommended_reps: None,
            reason: "No recorded history for this exercise".to_string(),
            confidence: Confidence::Low,
        }
    }

    /// Suggestion when the latest session has nothing usable in it.
    fn incomplete_data(&self) -> OverloadSuggestion {
        OverloadSuggestion {
            kind: SuggestionKind::Maintain,
            suggestion: "Log completed sets to get a recommendation".to_string(),
            recommended_weight: None,
            recommended_reps: None,
            reason: "Most recent session has incomplete data".to_string(),
            confidence: Confidence::Low,
        }
    }

    /// Weight increase after consistently clearing the top of the range.
    fn increase_weight_consistent(
        &self,
        stats: &SessionStats,
        confidence: Confidence,
    ) -> OverloadSuggestion {
        let target = stats.last_weight + weight_increment(stats.last_weight);
        OverloadSuggestion {
            kind: SuggestionKind::IncreaseWeight,
            suggestion: format!(
                "Increase to {} kg (best set: {} reps at {} kg)",
                target, stats.max_reps, stats.last_weight
            ),
            recommended_weight: Some(target),
            recommended_reps: None,
            reason: format!(
                "Hit the target range consistently, averaging {:.1} reps",
                stats.avg_reps
            ),
            confidence,
        }
    }

    /// Weight increase when effort stays low despite adequate reps.
    fn increase_weight_low_rpe(
        &self,
        stats: &SessionStats,
        avg_rpe: f64,
        confidence: Confidence,
    ) -> OverloadSuggestion {
        let target = stats.last_weight + weight_increment(stats.last_weight);
        OverloadSuggestion {
            kind: SuggestionKind::IncreaseWeight,
            suggestion: format!("Effort is low; increase to {} kg", target),
            recommended_weight: Some(target),
            recommended_reps: None,
            reason: format!(
                "Average RPE {:.1} is below 7 with reps on target",
                avg_rpe
            ),
            confidence,
        }
    }

    /// Weight decrease when reps collapse or effort maxes out.
    fn decrease_weight(
        &self,
        stats: &SessionStats,
        struggling: bool,
        confidence: Confidence,
    ) -> OverloadSuggestion {
        let target = stats.last_weight * 0.9;
        let reason = if struggling {
            "Struggling to stay near the target rep range".to_string()
        } else {
            "Average RPE above 9 signals excessive effort".to_string()
        };
        OverloadSuggestion {
            kind: SuggestionKind::DecreaseWeight,
            suggestion: format!("Reduce to {:.1} kg to restore quality reps", target),
            recommended_weight: Some(target),
            recommended_reps: None,
            reason,
            confidence,
        }
    }

    /// Rep increase while inside the target range.
    fn increase_reps(&self, stats: &SessionStats, confidence: Confidence) -> OverloadSuggestion {
        let target_reps = (stats.avg_reps.ceil() as u32 + 1).min(self.reps_max);
        OverloadSuggestion {
            kind: SuggestionKind::IncreaseReps,
            suggestion: format!(
                "Aim for {} reps per set at {} kg",
                target_reps, stats.last_weight
            ),
            recommended_weight: Some(stats.last_weight),
            recommended_reps: Some(target_reps),
            reason: format!(
                "Averaging {:.1} reps, inside the target range with room to grow",
                stats.avg_reps
            ),
            confidence,
        }
    }

    /// Planned lighter session after a weight plateau.
    fn deload(&self, stats: &SessionStats, confidence: Confidence) -> OverloadSuggestion {
        let target = stats.last_weight * 0.85;
        OverloadSuggestion {
            kind: SuggestionKind::Deload,
            suggestion: format!("Deload to {:.1} kg for a session, then rebuild", target),
            recommended_weight: Some(target),
            recommended_reps: None,
            reason: format!(
                "Top weight stuck at {} kg for {} sessions (plateau)",
                stats.last_weight, PLATEAU_WINDOW
            ),
            confidence,
        }
    }

    /// Fallback when no rule fires.
    fn maintain(&self, stats: &SessionStats, confidence: Confidence) -> OverloadSuggestion {
        OverloadSuggestion {
            kind: SuggestionKind::Maintain,
            suggestion: format!("Stay at {} kg and keep logging", stats.last_weight),
            recommended_weight: Some(stats.last_weight),
            recommended_reps: None,
            reason: "No adjustment signal from recent sessions".to_string(),
            confidence,
        }
    }

    /// True when the top working weight is identical across the plateau
    /// window. Entries without working sets have no top weight and never
    /// match.
    fn plateaued(&self, history: &[ExerciseHistoryEntry]) -> bool {
        if history.len() < PLATEAU_WINDOW {
            return false;
        }

        let first = match top_weight(&history[0]) {
            Some(weight) => weight,
            None => return false,
        };
        history[1..PLATEAU_WINDOW]
            .iter()
            .all(|entry| top_weight(entry) == Some(first))
    }
}

impl Default for OverloadAdvisor {
    fn default() -> Self {
        Self::new()
    }
}

/// Standard plate jump: 5 kg on heavy lifts, 2.5 kg otherwise.
fn weight_increment(last_weight: f64) -> f64 {
    if last_weight >= 100.0 {
        5.0
    } else {
        2.5
    }
}

/// Heaviest working-set weight of one session, if it had working sets.
fn top_weight(entry: &ExerciseHistoryEntry) -> Option<f64> {
    let sets = working_sets(&entry.sets);
    if sets.is_empty() {
        return None;
    }
    Some(
        sets.iter()
            .map(|set| set.weight.unwrap_or(0.0))
            .fold(0.0_f64, f64::max),
    )
}

fn confidence_for(analyzed: usize) -> Confidence {
    if analyzed >= ANALYSIS_WINDOW {
        Confidence::High
    } else if analyzed == 2 {
        Confidence::Medium
    } else {
        Confidence::Low
    }
}
