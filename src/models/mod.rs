pub mod biometrics;
pub mod daily_progress;
pub mod daily_target;
pub mod macro_breakdown;
pub mod profile;
