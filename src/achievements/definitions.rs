//! Achievement definitions.

use super::{Achievement, AchievementCategory, Requirement, RequirementKind};

/// Get all achievement definitions
pub fn all_achievements() -> Vec<Achievement> {
    let mut achievements = Vec::new();

    // Workout-count achievements
    achievements.extend(workout_achievements());

    // Streak achievements
    achievements.extend(streak_achievements());

    // Strength achievements
    achievements.extend(strength_achievements());

    // Volume milestones
    achievements.extend(milestone_achievements());

    achievements
}

fn workout_achievements() -> Vec<Achievement> {
    vec![
        Achievement::new(
            "first_workout",
            "First Rep",
            "Complete your first workout",
            AchievementCategory::Workout,
            Requirement::at_least(RequirementKind::WorkoutCount, 1.0),
            100,
        ),
        Achievement::new(
            "workout_10",
            "Regular Lifter",
            "Complete 10 workouts",
            AchievementCategory::Workout,
            Requirement::at_least(RequirementKind::WorkoutCount, 10.0),
            100,
        ),
        Achievement::new(
            "workout_50",
            "Half Century",
            "Complete 50 workouts",
            AchievementCategory::Workout,
            Requirement::at_least(RequirementKind::WorkoutCount, 50.0),
            250,
        ),
        Achievement::new(
            "workout_100",
            "Centurion",
            "Complete 100 workouts",
            AchievementCategory::Workout,
            Requirement::at_least(RequirementKind::WorkoutCount, 100.0),
            500,
        ),
        Achievement::new(
            "workout_250",
            "Gym Fixture",
            "Complete 250 workouts",
            AchievementCategory::Workout,
            Requirement::at_least(RequirementKind::WorkoutCount, 250.0),
            1000,
        ),
    ]
}

fn streak_achievements() -> Vec<Achievement> {
    vec![
        Achievement::new(
            "streak_7",
            "Week Warrior",
            "Train 7 days in a row",
            AchievementCategory::Streak,
            Requirement::at_least(RequirementKind::StreakDays, 7.0),
            250,
        ),
        Achievement::new(
            "streak_14",
            "Habit Forming",
            "Train 14 days in a row",
            AchievementCategory::Streak,
            Requirement::at_least(RequirementKind::StreakDays, 14.0),
            500,
        ),
        Achievement::new(
            "streak_30",
            "Monthly Motivation",
            "Train 30 days in a row",
            AchievementCategory::Streak,
            Requirement::at_least(RequirementKind::StreakDays, 30.0),
            1000,
        ),
        Achievement::new(
            "streak_60",
            "Iron Discipline",
            "Train 60 days in a row",
            AchievementCategory::Streak,
            Requirement::at_least(RequirementKind::StreakDays, 60.0),
            2500,
        ),
    ]
}

fn strength_achievements() -> Vec<Achievement> {
    vec![
        Achievement::new(
            "first_pr",
            "Personal Best",
            "Set your first personal record",
            AchievementCategory::Strength,
            Requirement::at_least(RequirementKind::PrCount, 1.0),
            100,
        ),
        Achievement::new(
            "pr_10",
            "Record Breaker",
            "Set 10 personal records",
            AchievementCategory::Strength,
            Requirement::at_least(RequirementKind::PrCount, 10.0),
            250,
        ),
        Achievement::new(
            "pr_25",
            "Record Collector",
            "Set 25 personal records",
            AchievementCategory::Strength,
            Requirement::at_least(RequirementKind::PrCount, 25.0),
            500,
        ),
        Achievement::new(
            "pr_50",
            "Limit Pusher",
            "Set 50 personal records",
            AchievementCategory::Strength,
            Requirement::at_least(RequirementKind::PrCount, 50.0),
            1000,
        ),
        Achievement::new(
            "session_5k",
            "Big Day",
            "Move 5,000 kg in a single workout",
            AchievementCategory::Strength,
            Requirement::at_least(RequirementKind::SingleWorkoutVolume, 5000.0),
            250,
        ),
        Achievement::new(
            "session_10k",
            "Monster Session",
            "Move 10,000 kg in a single workout",
            AchievementCategory::Strength,
            Requirement::at_least(RequirementKind::SingleWorkoutVolume, 10_000.0),
            500,
        ),
    ]
}

fn milestone_achievements() -> Vec<Achievement> {
    vec![
        Achievement::new(
            "volume_10k",
            "Moving Metal",
            "Lift 10,000 kg of cumulative volume",
            AchievementCategory::Milestone,
            Requirement::at_least(RequirementKind::TotalVolume, 10_000.0),
            100,
        ),
        Achievement::new(
            "volume_100k",
            "Serious Tonnage",
            "Lift 100,000 kg of cumulative volume",
            AchievementCategory::Milestone,
            Requirement::at_least(RequirementKind::TotalVolume, 100_000.0),
            250,
        ),
        Achievement::new(
            "volume_500k",
            "Half Million Club",
            "Lift 500,000 kg of cumulative volume",
            AchievementCategory::Milestone,
            Requirement::at_least(RequirementKind::TotalVolume, 500_000.0),
            1000,
        ),
        Achievement::new(
            "volume_1m",
            "Million Kilo Club",
            "Lift 1,000,000 kg of cumulative volume",
            AchievementCategory::Milestone,
            Requirement::at_least(RequirementKind::TotalVolume, 1_000_000.0),
            2500,
        ),
    ]
}
