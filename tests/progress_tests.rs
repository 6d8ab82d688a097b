use chrono::NaiveDate;
use rfitlogger::core::calculator::progress::{
    create_progress, log_calories, log_workout, reset_progress,
};
use rfitlogger::errors::AppError;
use rfitlogger::models::daily_progress::DailyProgress;
use rfitlogger::models::daily_target::DailyTarget;

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
}

fn fresh(calories: f64, minutes: f64) -> DailyProgress {
    let target = DailyTarget {
        calorie_target: calories,
        workout_minutes_target: minutes,
    };
    create_progress("alice", day(), &target)
}

#[test]
fn create_starts_at_zero_with_frozen_targets() {
    let p = fresh(2094.0, 75.0);

    assert_eq!(p.user_id, "alice");
    assert_eq!(p.date, day());
    assert_eq!(p.calories_consumed, 0.0);
    assert_eq!(p.workout_minutes_completed, 0.0);
    assert_eq!(p.calories_target, 2094.0);
    assert_eq!(p.workout_minutes_target, 75.0);
    assert_eq!(p.calories_progress(), 0.0);
    assert_eq!(p.calories_remaining(), 2094.0);
    assert_eq!(p.workout_minutes_remaining(), 75.0);
}

#[test]
fn logging_is_additive_in_any_order() {
    let amounts = [250.0, 600.5, 125.25];
    let minutes = [10.0, 22.5, 7.25];
    let orders = [[0, 1, 2], [2, 0, 1], [1, 2, 0]];

    for order in orders {
        let mut p = fresh(2000.0, 45.0);
        for i in order {
            p = log_calories(&p, amounts[i]).unwrap();
            p = log_workout(&p, minutes[i]).unwrap();
        }
        assert_eq!(p.calories_consumed, 975.75);
        assert_eq!(p.workout_minutes_completed, 39.75);
    }
}

#[test]
fn logging_returns_a_new_value() {
    let p = fresh(2000.0, 45.0);
    let next = log_calories(&p, 300.0).unwrap();

    assert_eq!(p.calories_consumed, 0.0);
    assert_eq!(next.calories_consumed, 300.0);
    assert_eq!(next.calories_target, p.calories_target);
}

#[test]
fn ratios_are_clamped_when_target_is_exceeded() {
    let p = log_calories(&fresh(2000.0, 60.0), 3000.0).unwrap();
    let p = log_workout(&p, 90.0).unwrap();

    assert_eq!(p.calories_consumed, 3000.0);
    assert_eq!(p.calories_progress(), 1.0);
    assert_eq!(p.calories_remaining(), 0.0);
    assert_eq!(p.workout_progress(), 1.0);
    assert_eq!(p.workout_minutes_remaining(), 0.0);
}

#[test]
fn partial_progress_ratios() {
    let p = log_calories(&fresh(2000.0, 60.0), 500.0).unwrap();
    let p = log_workout(&p, 15.0).unwrap();

    assert_eq!(p.calories_progress(), 0.25);
    assert_eq!(p.calories_remaining(), 1500.0);
    assert_eq!(p.workout_progress(), 0.25);
    assert_eq!(p.workout_minutes_remaining(), 45.0);
}

#[test]
fn non_positive_amounts_are_rejected() {
    let p = fresh(2000.0, 45.0);

    for bad in [0.0, -10.0, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            log_calories(&p, bad),
            Err(AppError::InvalidLogAmount(_))
        ));
        assert!(matches!(
            log_workout(&p, bad),
            Err(AppError::InvalidLogAmount(_))
        ));
    }
}

#[test]
fn reset_keeps_targets_and_is_idempotent() {
    let p = log_calories(&fresh(2094.0, 75.0), 800.0).unwrap();
    let p = log_workout(&p, 20.0).unwrap();

    let once = reset_progress(&p);
    let twice = reset_progress(&once);

    assert_eq!(once, twice);
    assert_eq!(once.calories_consumed, 0.0);
    assert_eq!(once.workout_minutes_completed, 0.0);
    assert_eq!(once.calories_target, 2094.0);
    assert_eq!(once.workout_minutes_target, 75.0);
    assert_eq!(once.date, day());
}
