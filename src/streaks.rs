//! Workout streak calculation.
//!
//! Derives current and longest continuity streaks from raw workout
//! timestamps. The caller passes "today" explicitly, keeping the
//! calculator clock-free and fully deterministic.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Computed streak values for a workout date history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StreakState {
    /// Length of the run ending at the most recent workout, 0 if broken.
    pub current_streak: u32,
    /// Longest run anywhere in the history.
    pub longest_streak: u32,
    /// First day of the current run, `None` when no run is active.
    pub streak_start_date: Option<NaiveDate>,
}

/// Streak calculator with a configurable rest-day tolerance.
///
/// The tolerance applies in two places. Since the last workout, up to
/// `allowed_rest_days + 1` days may pass before the streak breaks (today
/// may simply not have had its session yet). Between recorded workout
/// days, gaps must stay within `allowed_rest_days`.
pub struct StreakCalculator {
    /// Missed days tolerated before a streak breaks.
    allowed_rest_days: i64,
}

impl StreakCalculator {
    /// Create with the default tolerance of one rest day.
    pub fn new() -> Self {
        Self {
            allowed_rest_days: 1,
        }
    }

    /// Create with a custom rest-day tolerance.
    pub fn with_rest_days(allowed_rest_days: u32) -> Self {
        Self {
            allowed_rest_days: i64::from(allowed_rest_days),
        }
    }

    /// Compute streaks from workout instants.
    ///
    /// Instants are normalized to calendar days before scanning. The list
    /// may arrive in any order; one entry per day is the caller's
    /// contract (duplicates are not removed here and would inflate runs).
    pub fn calculate(&self, dates: &[DateTime<Utc>], today: NaiveDate) -> StreakState {
        let mut days: Vec<NaiveDate> = dates.iter().map(|d| d.date_naive()).collect();
        days.sort_unstable_by(|a, b| b.cmp(a));

        if days.is_empty() {
            return StreakState::default();
        }

        let longest_streak = self.longest_run(&days);

        let most_recent = days[0];
        let days_since_last = (today - most_recent).num_days();
        if days_since_last > self.allowed_rest_days + 1 {
            return StreakState {
                current_streak: 0,
                longest_streak,
                streak_start_date: None,
            };
        }

        let mut current_streak = 1u32;
        let mut streak_start = most_recent;
        for pair in days.windows(2) {
            let gap = (pair[0] - pair[1]).num_days();
            if gap > self.allowed_rest_days {
                break;
            }
            current_streak += 1;
            streak_start = pair[1];
        }

        StreakState {
            current_streak,
            longest_streak,
            streak_start_date: Some(streak_start),
        }
    }

    /// Longest run over the whole history under the adjacency rule.
    fn longest_run(&self, days_desc: &[NaiveDate]) -> u32 {
        let mut longest = 0u32;
        let mut run = 0u32;
        let mut prev: Option<NaiveDate> = None;

        for &day in days_desc.iter().rev() {
            run = match prev {
                Some(p) if (day - p).num_days() <= self.allowed_rest_days => run + 1,
                _ => 1,
            };
            longest = longest.max(run);
            prev = Some(day);
        }

        longest
    }
}

impl Default for StreakCalculator {
    fn default() -> Self {
        Self::new()
    }
}
