// src/export/model.rs

use crate::models::daily_progress::DailyProgress;
use serde::Serialize;

/// Flat row used by the CSV and JSON exports.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct DailyProgressExport {
    pub date: String,
    pub user_id: String,
    pub calories_consumed: f64,
    pub calories_target: f64,
    pub calories_progress: f64,
    pub calories_remaining: f64,
    pub workout_minutes_completed: f64,
    pub workout_minutes_target: f64,
    pub workout_progress: f64,
    pub workout_minutes_remaining: f64,
}

impl From<&DailyProgress> for DailyProgressExport {
    fn from(p: &DailyProgress) -> Self {
        Self {
            date: p.date_str(),
            user_id: p.user_id.clone(),
            calories_consumed: p.calories_consumed,
            calories_target: p.calories_target,
            calories_progress: p.calories_progress(),
            calories_remaining: p.calories_remaining(),
            workout_minutes_completed: p.workout_minutes_completed,
            workout_minutes_target: p.workout_minutes_target,
            workout_progress: p.workout_progress(),
            workout_minutes_remaining: p.workout_minutes_remaining(),
        }
    }
}
