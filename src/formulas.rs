//! Strength-training formulas.
//!
//! Pure numeric helpers shared by the record detector and the overload
//! advisor:
//! - Estimated one-rep max via the Epley formula
//! - Working-set classification (warm-up filtering)
//! - Session volume
//! - Best-set selection for 1RM candidacy

use crate::models::WorkoutSet;

/// Highest rep count the Epley estimate is valid for.
pub const EPLEY_MAX_REPS: u32 = 12;

/// Estimate a one-rep max from a set using the Epley formula.
///
/// A single rep is its own 1RM and is returned unchanged. For 2-12 reps
/// the estimate is `weight * (1 + reps / 30)`, rounded to two decimals.
/// Zero reps and rep counts above 12 are outside the formula's valid
/// range and yield `None` rather than a misleading number.
pub fn estimated_1rm(weight: f64, reps: u32) -> Option<f64> {
    match reps {
        0 => None,
        1 => Some(weight),
        r if r <= EPLEY_MAX_REPS => {
            let raw = weight * (1.0 + r as f64 / 30.0);
            Some((raw * 100.0).round() / 100.0)
        }
        _ => None,
    }
}

/// Filter a session down to its working sets.
///
/// Warm-up sets carry no reps and no completion or RPE marker; everything
/// else counts toward progress analysis. A set qualifies when it was
/// marked completed, carries an RPE, or has reps recorded.
pub fn working_sets(sets: &[WorkoutSet]) -> Vec<&WorkoutSet> {
    sets.iter()
        .filter(|s| s.completed == Some(true) || s.rpe.is_some() || s.reps.unwrap_or(0) > 0)
        .collect()
}

/// Total session volume in kilograms: `reps * weight` summed over every
/// supplied set.
///
/// No working-set filtering: volume is a gross load metric and includes
/// warm-ups. Missing reps or weight count as zero.
pub fn workout_volume(sets: &[WorkoutSet]) -> f64 {
    sets.iter()
        .map(|s| s.reps.unwrap_or(0) as f64 * s.weight.unwrap_or(0.0))
        .sum()
}

/// Pick the set with the best 1RM-proxy score `weight * (1 + reps / 30)`.
///
/// Only sets inside the Epley range (1-12 reps) are candidates, so the
/// result is always safe to feed into `estimated_1rm`. The first
/// occurrence wins ties, keeping selection stable.
pub fn best_set_by_score(sets: &[WorkoutSet]) -> Option<&WorkoutSet> {
    let mut best: Option<(&WorkoutSet, f64)> = None;

    for set in sets {
        let reps = set.reps.unwrap_or(0);
        if reps == 0 || reps > EPLEY_MAX_REPS {
            continue;
        }

        let score = set.weight.unwrap_or(0.0) * (1.0 + reps as f64 / 30.0);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((set, score)),
        }
    }

    best.map(|(set, _)| set)
}
