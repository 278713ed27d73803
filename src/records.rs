//! Personal-record detection.
//!
//! Compares a just-completed exercise's sets against the stored record
//! book and emits an event per beaten metric. The detector never writes
//! back; the caller persists updated bests after accepting the events.

use serde::{Deserialize, Serialize};

use crate::formulas::{best_set_by_score, estimated_1rm, workout_volume};
use crate::models::{PreviousBest, WorkoutSet};

/// Record metric a workout can beat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    /// Estimated one-rep max via the Epley formula.
    #[serde(rename = "1rm")]
    OneRepMax,
    /// Heaviest weight on any set.
    MaxWeight,
    /// Most reps in any set.
    MaxReps,
    /// Highest single-session volume.
    MaxVolume,
}

impl RecordKind {
    /// Display label for the record type.
    pub fn label(&self) -> &'static str {
        match self {
            RecordKind::OneRepMax => "Estimated 1RM",
            RecordKind::MaxWeight => "Max Weight",
            RecordKind::MaxReps => "Max Reps",
            RecordKind::MaxVolume => "Max Volume",
        }
    }

    /// Unit the record's value is expressed in.
    pub fn unit(&self) -> RecordUnit {
        match self {
            RecordKind::MaxReps => RecordUnit::Reps,
            _ => RecordUnit::Kg,
        }
    }
}

/// Unit attached to a record value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordUnit {
    /// Kilograms.
    Kg,
    /// Repetitions.
    Reps,
}

/// A new personal record, emitted once per beaten metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PersonalRecordEvent {
    /// Which record was beaten.
    pub kind: RecordKind,
    /// The new best value.
    pub value: f64,
    /// Unit of `value`.
    pub unit: RecordUnit,
}

impl PersonalRecordEvent {
    /// Create an event, deriving the unit from the record kind.
    pub fn new(kind: RecordKind, value: f64) -> Self {
        Self {
            kind,
            value,
            unit: kind.unit(),
        }
    }
}

/// Detect personal records in a completed exercise's sets.
///
/// Four metrics are checked: heaviest weight, most reps in a set, total
/// session volume, and the estimated 1RM of the best-scoring set. An
/// event fires only when the new value strictly exceeds the stored best,
/// so ties stay silent and repeated calls with unchanged inputs produce
/// the same events again.
pub fn detect_personal_records(
    sets: &[WorkoutSet],
    previous: &PreviousBest,
) -> Vec<PersonalRecordEvent> {
    let mut events = Vec::new();

    let max_weight = sets
        .iter()
        .map(|set| set.weight.unwrap_or(0.0))
        .fold(0.0_f64, f64::max);
    if max_weight > previous.max_weight {
        events.push(PersonalRecordEvent::new(RecordKind::MaxWeight, max_weight));
    }

    let max_reps = sets
        .iter()
        .map(|set| set.reps.unwrap_or(0))
        .max()
        .unwrap_or(0);
    if max_reps > previous.max_reps {
        events.push(PersonalRecordEvent::new(
            RecordKind::MaxReps,
            f64::from(max_reps),
        ));
    }

    let volume = workout_volume(sets);
    if volume > previous.max_volume {
        events.push(PersonalRecordEvent::new(RecordKind::MaxVolume, volume));
    }

    if let Some(best) = best_set_by_score(sets) {
        if let Some(one_rm) = estimated_1rm(best.weight.unwrap_or(0.0), best.reps.unwrap_or(0)) {
            if one_rm > previous.estimated_1rm {
                events.push(PersonalRecordEvent::new(RecordKind::OneRepMax, one_rm));
            }
        }
    }

    if !events.is_empty() {
        tracing::debug!("Detected {} personal record(s)", events.len());
    }

    events
}

impl PreviousBest {
    /// Record book after accepting a batch of detected events.
    ///
    /// Pure: returns the updated bests, leaving `self` untouched. Feeding
    /// the result back into `detect_personal_records` with the same sets
    /// yields no further events.
    pub fn with_events(&self, events: &[PersonalRecordEvent]) -> PreviousBest {
        let mut updated = *self;
        for event in events {
            match event.kind {
                RecordKind::OneRepMax => updated.estimated_1rm = event.value,
                RecordKind::MaxWeight => updated.max_weight = event.value,
                RecordKind::MaxReps => updated.max_reps = event.value.round() as u32,
                RecordKind::MaxVolume => updated.max_volume = event.value,
            }
        }
        updated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn established_bests() -> PreviousBest {
        PreviousBest {
            max_weight: 100.0,
            max_reps: 10,
            max_volume: 3000.0,
            estimated_1rm: 133.33,
        }
    }

    #[test]
    fn test_ties_produce_no_events() {
        // One set matching every stored best exactly.
        let sets = vec![WorkoutSet::new(10, 100.0).completed()];
        let prev = PreviousBest {
            max_volume: 1000.0,
            ..established_bests()
        };

        let events = detect_personal_records(&sets, &prev);
        assert!(events.is_empty());
    }

    #[test]
    fn test_strict_improvement_fires_single_event() {
        // A heavy rack-out set beats max weight without touching reps,
        // volume, or the 1RM candidate.
        let sets = vec![
            WorkoutSet::new(10, 100.0).completed(),
            WorkoutSet {
                weight: Some(105.0),
                ..WorkoutSet::default()
            },
        ];
        let prev = PreviousBest {
            max_volume: 1000.0,
            ..established_bests()
        };

        let events = detect_personal_records(&sets, &prev);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, RecordKind::MaxWeight);
        assert_eq!(events[0].value, 105.0);
        assert_eq!(events[0].unit, RecordUnit::Kg);
    }

    #[test]
    fn test_fresh_record_book_fires_all_metrics() {
        let sets = vec![WorkoutSet::new(10, 100.0).completed()];

        let events = detect_personal_records(&sets, &PreviousBest::default());
        assert_eq!(events.len(), 4);
        assert_eq!(events[0].kind, RecordKind::MaxWeight);
        assert_eq!(events[1].kind, RecordKind::MaxReps);
        assert_eq!(events[1].unit, RecordUnit::Reps);
        assert_eq!(events[2].kind, RecordKind::MaxVolume);
        assert_eq!(events[2].value, 1000.0);
        assert_eq!(events[3].kind, RecordKind::OneRepMax);
        assert!((events[3].value - 133.33).abs() < 0.001);
    }

    #[test]
    fn test_record_kind_labels_and_units() {
        assert_eq!(RecordKind::OneRepMax.label(), "Estimated 1RM");
        assert_eq!(RecordKind::MaxVolume.label(), "Max Volume");
        assert_eq!(RecordKind::MaxReps.unit(), RecordUnit::Reps);
        assert_eq!(RecordKind::MaxWeight.unit(), RecordUnit::Kg);
    }

    #[test]
    fn test_detection_is_idempotent() {
        let sets = vec![
            WorkoutSet::new(12, 80.0).completed(),
            WorkoutSet::new(8, 90.0).completed(),
        ];
        let prev = established_bests();

        let first = detect_personal_records(&sets, &prev);
        let second = detect_personal_records(&sets, &prev);
        assert_eq!(first, second);
    }

    #[test]
    fn test_high_rep_sets_never_produce_a_1rm() {
        // 15 reps at 60 kg would estimate 90 kg if the formula applied,
        // well above the stored 50 kg. It must not.
        let sets = vec![WorkoutSet::new(15, 60.0).completed()];
        let prev = PreviousBest {
            max_weight: 80.0,
            max_reps: 20,
            max_volume: 2000.0,
            estimated_1rm: 50.0,
        };

        let events = detect_personal_records(&sets, &prev);
        assert!(events.is_empty());
    }

    #[test]
    fn test_with_events_updates_matching_fields() {
        let events = vec![
            PersonalRecordEvent::new(RecordKind::MaxWeight, 110.0),
            PersonalRecordEvent::new(RecordKind::OneRepMax, 140.0),
        ];

        let updated = established_bests().with_events(&events);
        assert_eq!(updated.max_weight, 110.0);
        assert_eq!(updated.estimated_1rm, 140.0);
        assert_eq!(updated.max_reps, 10);
        assert_eq!(updated.max_volume, 3000.0);
    }

    #[test]
    fn test_with_events_rounds_rep_counts() {
        // Host-deserialized events may carry a fractional rep value.
        let event = PersonalRecordEvent::new(RecordKind::MaxReps, 11.6);

        let updated = established_bests().with_events(&[event]);
        assert_eq!(updated.max_reps, 12);
    }

    #[test]
    fn test_accepted_events_silence_redetection() {
        let sets = vec![WorkoutSet::new(10, 100.0).completed()];
        let prev = PreviousBest::default();

        let events = detect_personal_records(&sets, &prev);
        assert!(!events.is_empty());

        let accepted = prev.with_events(&events);
        let again = detect_personal_records(&sets, &accepted);
        assert!(again.is_empty());
    }
}
