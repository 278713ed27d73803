//! XP-to-level mapping.
//!
//! A monotonically increasing threshold table maps cumulative XP to a
//! titled level. The table is validated once at construction; lookups
//! assume a well-formed table and never re-check it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One row of the level threshold table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelDefinition {
    /// Display title for the level.
    pub title: String,
    /// Cumulative XP at which the level starts.
    pub xp_floor: u64,
}

impl LevelDefinition {
    /// Create a level row.
    pub fn new(title: &str, xp_floor: u64) -> Self {
        Self {
            title: title.to_string(),
            xp_floor,
        }
    }
}

/// Resolved level for a given XP total.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelInfo {
    /// Level number, starting at 1.
    pub level: u32,
    /// Display title.
    pub title: String,
    /// XP where this level starts.
    pub xp_floor: u64,
    /// XP where the next level starts, `None` at the top level.
    pub xp_ceiling: Option<u64>,
}

impl LevelInfo {
    /// Progress through this level (0..100) for an XP total.
    pub fn progress_percent(&self, xp: u64) -> f64 {
        match self.xp_ceiling {
            Some(ceiling) => {
                let span = (ceiling - self.xp_floor) as f64;
                let into = xp.saturating_sub(self.xp_floor) as f64;
                ((into / span) * 100.0).min(100.0)
            }
            None => 100.0,
        }
    }
}

/// Outcome of comparing levels before and after an XP change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelUpCheck {
    /// Whether the new XP total crossed into a higher level.
    pub did_level_up: bool,
    /// Level for the new XP total.
    pub new_level: LevelInfo,
}

/// Level table construction failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LevelTableError {
    /// No levels supplied.
    #[error("Level table is empty")]
    Empty,
    /// The first level must start at zero XP.
    #[error("First level must start at 0 XP, got {0}")]
    NonZeroFirstFloor(u64),
    /// Floors must strictly increase.
    #[error("Level {level} floor {floor} does not increase monotonically")]
    NonMonotonic {
        /// 1-based level number of the offending row.
        level: usize,
        /// The floor that failed to increase.
        floor: u64,
    },
}

/// Validated XP threshold table.
pub struct LevelTable {
    /// Levels ordered by ascending floor; the first floor is 0.
    levels: Vec<LevelDefinition>,
}

impl LevelTable {
    /// Build a table, validating shape and monotonicity once.
    pub fn new(levels: Vec<LevelDefinition>) -> Result<Self, LevelTableError> {
        if levels.is_empty() {
            return Err(LevelTableError::Empty);
        }
        if levels[0].xp_floor != 0 {
            return Err(LevelTableError::NonZeroFirstFloor(levels[0].xp_floor));
        }
        for (i, pair) in levels.windows(2).enumerate() {
            if pair[1].xp_floor <= pair[0].xp_floor {
                return Err(LevelTableError::NonMonotonic {
                    level: i + 2,
                    floor: pair[1].xp_floor,
                });
            }
        }

        Ok(Self { levels })
    }

    /// The built-in 10-level table.
    pub fn standard() -> Self {
        Self {
            levels: vec![
                LevelDefinition::new("Novice", 0),
                LevelDefinition::new("Beginner", 100),
                LevelDefinition::new("Apprentice", 300),
                LevelDefinition::new("Committed", 600),
                LevelDefinition::new("Consistent", 1000),
                LevelDefinition::new("Dedicated", 1600),
                LevelDefinition::new("Advanced", 2500),
                LevelDefinition::new("Elite", 4000),
                LevelDefinition::new("Master", 6000),
                LevelDefinition::new("Legend", 9000),
            ],
        }
    }

    /// Get all level rows
    pub fn levels(&self) -> &[LevelDefinition] {
        &self.levels
    }

    /// The highest level whose floor is at or below `xp`.
    pub fn level_for_xp(&self, xp: u64) -> LevelInfo {
        let idx = self.levels.partition_point(|level| level.xp_floor <= xp);
        // idx >= 1 because the first floor is always 0
        let current = &self.levels[idx - 1];
        let ceiling = self.levels.get(idx).map(|next| next.xp_floor);

        LevelInfo {
            level: idx as u32,
            title: current.title.clone(),
            xp_floor: current.xp_floor,
            xp_ceiling: ceiling,
        }
    }

    /// Compare levels before and after an XP change.
    ///
    /// XP is non-decreasing by caller contract; a lower `new_xp` is still
    /// handled and simply reports no level-up.
    pub fn check_level_up(&self, previous_xp: u64, new_xp: u64) -> LevelUpCheck {
        let previous = self.level_for_xp(previous_xp);
        let new_level = self.level_for_xp(new_xp);
        let did_level_up = new_level.level > previous.level;

        if did_level_up {
            tracing::debug!(
                "Level up: {} -> {} ({})",
                previous.level,
                new_level.level,
                new_level.title
            );
        }

        LevelUpCheck {
            did_level_up,
            new_level,
        }
    }
}
