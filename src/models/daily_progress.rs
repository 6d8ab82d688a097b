use chrono::NaiveDate;
use serde::Serialize;

/// Consumption and workout counters of one user for one calendar day.
///
/// Targets are frozen when the record is created; profile changes made later
/// do not touch a day already in progress.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyProgress {
    pub user_id: String,                // ⇔ daily_progress.user_id
    pub date: NaiveDate,                // ⇔ daily_progress.date (TEXT "YYYY-MM-DD")
    pub calories_consumed: f64,         // ⇔ daily_progress.calories_consumed
    pub workout_minutes_completed: f64, // ⇔ daily_progress.workout_minutes_completed
    pub calories_target: f64,           // ⇔ daily_progress.calories_target
    pub workout_minutes_target: f64,    // ⇔ daily_progress.workout_minutes_target
}

impl DailyProgress {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Consumed / target, clamped to [0, 1].
    pub fn calories_progress(&self) -> f64 {
        ratio(self.calories_consumed, self.calories_target)
    }

    /// Completed / target, clamped to [0, 1].
    pub fn workout_progress(&self) -> f64 {
        ratio(self.workout_minutes_completed, self.workout_minutes_target)
    }

    pub fn calories_remaining(&self) -> f64 {
        (self.calories_target - self.calories_consumed).max(0.0)
    }

    pub fn workout_minutes_remaining(&self) -> f64 {
        (self.workout_minutes_target - self.workout_minutes_completed).max(0.0)
    }
}

fn ratio(done: f64, target: f64) -> f64 {
    if target <= 0.0 {
        return 0.0;
    }
    (done / target).clamp(0.0, 1.0)
}
