//! Integration tests for the progression pipeline.
//!
//! Tests the end-to-end flow:
//! 1. Complete an exercise session and detect personal records
//! 2. Fold accepted records into the stored bests
//! 3. Ask the overload advisor for the next adjustment
//! 4. Derive streaks from the workout calendar

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use repforge::formulas::{estimated_1rm, workout_volume};
use repforge::models::{ExerciseHistoryEntry, PreviousBest, WorkoutSet};
use repforge::overload::{OverloadAdvisor, SuggestionKind};
use repforge::records::{detect_personal_records, RecordKind};
use repforge::streaks::StreakCalculator;

/// Builds a session of identical completed sets.
fn create_session(count: usize, reps: u32, weight: f64) -> Vec<WorkoutSet> {
    (1..=count)
        .map(|n| WorkoutSet::new(reps, weight).with_number(n as u32).completed())
        .collect()
}

/// Builds a history entry completed on the given June 2025 day.
fn create_entry(day: u32, sets: Vec<WorkoutSet>) -> ExerciseHistoryEntry {
    let date = NaiveDate::from_ymd_opt(2025, 6, day).expect("valid date");
    let completed_at = Utc.with_ymd_and_hms(2025, 6, day, 18, 0, 0).unwrap();
    ExerciseHistoryEntry::new(sets, date, completed_at)
}

fn workout_on(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, day, 18, 0, 0).unwrap()
}

#[test]
fn test_session_to_record_book_cycle() {
    // Step 1: a session with a heavier top set than the stored best.
    let sets = vec![
        WorkoutSet::new(10, 100.0).with_number(1).completed(),
        WorkoutSet::new(8, 105.0).with_number(2).with_rpe(8.0).completed(),
    ];
    let previous = PreviousBest {
        max_weight: 100.0,
        max_reps: 12,
        max_volume: 2500.0,
        estimated_1rm: 130.0,
    };

    // Step 2: exactly the weight and 1RM records fall.
    let events = detect_personal_records(&sets, &previous);
    assert_eq!(events.len(), 2, "Should beat max weight and estimated 1RM");
    assert_eq!(events[0].kind, RecordKind::MaxWeight);
    assert_eq!(events[0].value, 105.0);
    assert_eq!(events[1].kind, RecordKind::OneRepMax);
    assert!((events[1].value - 133.33).abs() < 0.001);

    // Step 3: accepting the events silences re-detection.
    let updated = previous.with_events(&events);
    assert_eq!(updated.max_weight, 105.0);
    assert_eq!(updated.max_volume, 2500.0, "Volume best must be untouched");
    assert!(detect_personal_records(&sets, &updated).is_empty());
}

#[test]
fn test_advisor_prescribes_progression_after_strong_sessions() {
    let history = vec![
        create_entry(10, create_session(3, 12, 100.0)),
        create_entry(8, create_session(3, 12, 100.0)),
        create_entry(6, create_session(3, 12, 100.0)),
    ];

    let suggestion = OverloadAdvisor::new().suggest(&history);
    assert_eq!(suggestion.kind, SuggestionKind::IncreaseWeight);
    assert_eq!(suggestion.recommended_weight, Some(105.0));
    assert_eq!(
        suggestion.confidence,
        repforge::overload::Confidence::High,
        "Three analyzed sessions give full confidence"
    );
}

#[test]
fn test_advisor_prescribes_deload_after_stall() {
    // Four sessions stuck below the rep target at the same weight.
    let history = vec![
        create_entry(12, create_session(3, 6, 90.0)),
        create_entry(10, create_session(3, 6, 90.0)),
        create_entry(8, create_session(3, 6, 90.0)),
        create_entry(6, create_session(3, 6, 90.0)),
    ];

    let suggestion = OverloadAdvisor::new().suggest(&history);
    assert_eq!(suggestion.kind, SuggestionKind::Deload);
    assert_eq!(suggestion.recommended_weight, Some(76.5));
    assert!(suggestion.reason.contains("plateau"));
}

#[test]
fn test_streak_over_training_calendar() {
    // Four straight days, then a two-day break before two more.
    let dates = vec![
        workout_on(20),
        workout_on(19),
        workout_on(18),
        workout_on(17),
        workout_on(15),
        workout_on(14),
    ];
    let today = NaiveDate::from_ymd_opt(2025, 6, 20).expect("valid date");

    let state = StreakCalculator::new().calculate(&dates, today);
    assert_eq!(state.current_streak, 4, "The two-day break ends the run");
    assert_eq!(state.longest_streak, 4);
    assert_eq!(
        state.streak_start_date,
        Some(NaiveDate::from_ymd_opt(2025, 6, 17).expect("valid date"))
    );
}

#[test]
fn test_streak_survives_one_rest_day_then_breaks() {
    let dates = vec![workout_on(19), workout_on(18)];
    let calculator = StreakCalculator::new();

    // Two days after the last workout: today's session may still come.
    let pending = calculator.calculate(&dates, NaiveDate::from_ymd_opt(2025, 6, 21).expect("valid date"));
    assert_eq!(pending.current_streak, 2);

    // Three days after: broken, but the history keeps its best run.
    let broken = calculator.calculate(&dates, NaiveDate::from_ymd_opt(2025, 6, 22).expect("valid date"));
    assert_eq!(broken.current_streak, 0);
    assert_eq!(broken.longest_streak, 2);
    assert_eq!(broken.streak_start_date, None);
}

#[test]
fn test_formula_boundaries() {
    // Epley holds for 1..=12 reps and is undefined outside.
    assert_eq!(estimated_1rm(100.0, 1), Some(100.0));
    let ten_rep = estimated_1rm(100.0, 10).expect("Should estimate for 10 reps");
    assert!((ten_rep - 133.33).abs() < 0.001);
    assert_eq!(estimated_1rm(100.0, 0), None);
    assert_eq!(estimated_1rm(100.0, 13), None);

    // Volume is a gross-load sum over every supplied set.
    let sets = vec![
        WorkoutSet {
            weight: Some(60.0),
            ..WorkoutSet::default()
        },
        WorkoutSet::new(10, 100.0).completed(),
        WorkoutSet::new(8, 100.0).completed(),
    ];
    assert_eq!(workout_volume(&sets), 1800.0);
}

#[test]
fn test_record_event_wire_format() {
    // Events reach the notification dispatcher as JSON with stable names.
    let sets = vec![WorkoutSet::new(10, 100.0).with_number(1).completed()];
    let events = detect_personal_records(&sets, &PreviousBest::default());

    let one_rm = events
        .iter()
        .find(|event| event.kind == RecordKind::OneRepMax)
        .expect("Should detect a 1RM record");
    let payload = serde_json::to_value(one_rm).expect("Should serialize the event");
    assert_eq!(payload["kind"], "1rm");
    assert_eq!(payload["unit"], "kg");

    let rep_record = events
        .iter()
        .find(|event| event.kind == RecordKind::MaxReps)
        .expect("Should detect a rep record");
    let payload = serde_json::to_value(rep_record).expect("Should serialize the event");
    assert_eq!(payload["kind"], "max_reps");
    assert_eq!(payload["unit"], "reps");
}
