//! State transitions of a `DailyProgress` record.
//!
//! Every function returns a new value; persisting it is up to the caller.

use crate::errors::{AppError, AppResult};
use crate::models::daily_progress::DailyProgress;
use crate::models::daily_target::DailyTarget;
use chrono::NaiveDate;

/// Start a day: counters at zero, targets frozen from `target`.
pub fn create_progress(user_id: &str, date: NaiveDate, target: &DailyTarget) -> DailyProgress {
    DailyProgress {
        user_id: user_id.to_string(),
        date,
        calories_consumed: 0.0,
        workout_minutes_completed: 0.0,
        calories_target: target.calorie_target,
        workout_minutes_target: target.workout_minutes_target,
    }
}

fn check_amount(amount: f64) -> AppResult<()> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(AppError::InvalidLogAmount(amount));
    }
    Ok(())
}

/// Add `amount` kcal. Consumption may exceed the target.
pub fn log_calories(progress: &DailyProgress, amount: f64) -> AppResult<DailyProgress> {
    check_amount(amount)?;
    Ok(DailyProgress {
        calories_consumed: progress.calories_consumed + amount,
        ..progress.clone()
    })
}

/// Add `minutes` of completed workout.
pub fn log_workout(progress: &DailyProgress, minutes: f64) -> AppResult<DailyProgress> {
    check_amount(minutes)?;
    Ok(DailyProgress {
        workout_minutes_completed: progress.workout_minutes_completed + minutes,
        ..progress.clone()
    })
}

/// Zero both counters, keeping date and targets.
pub fn reset_progress(progress: &DailyProgress) -> DailyProgress {
    DailyProgress {
        calories_consumed: 0.0,
        workout_minutes_completed: 0.0,
        ..progress.clone()
    }
}
