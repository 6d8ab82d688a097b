use serde::{Deserialize, Serialize};

/// Calorie and workout goals for one day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyTarget {
    /// kcal/day, whole number, always > 0
    pub calorie_target: f64,
    /// minutes/day, always > 0
    pub workout_minutes_target: f64,
}
