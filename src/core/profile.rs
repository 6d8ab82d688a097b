use crate::core::calculator::target::{
    calculate_bmr, calculate_tdee, compute_daily_target, validate_biometrics,
};
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{load_profile, upsert_profile};
use crate::errors::{AppError, AppResult};
use crate::models::biometrics::{ActivityLevel, FitnessGoal, Sex, UserBiometrics};
use crate::models::daily_target::DailyTarget;
use crate::models::profile::Profile;

/// Fields of a `profile set` call. `None` keeps the stored value.
#[derive(Debug, Default, Clone)]
pub struct ProfileUpdate {
    pub age: Option<u32>,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub sex: Option<Sex>,
    pub activity: Option<ActivityLevel>,
    pub goal: Option<FitnessGoal>,
}

impl ProfileUpdate {
    /// Merge onto `current`. Without a stored profile, age, weight, height
    /// and sex are required; activity and goal fall back to their defaults.
    pub fn merge(&self, current: Option<&UserBiometrics>) -> AppResult<UserBiometrics> {
        let missing = |field: &str| {
            AppError::InvalidBiometrics(format!("{field} is required for a new profile"))
        };

        let merged = match current {
            Some(c) => UserBiometrics {
                age: self.age.unwrap_or(c.age),
                weight_kg: self.weight_kg.unwrap_or(c.weight_kg),
                height_cm: self.height_cm.unwrap_or(c.height_cm),
                sex: self.sex.unwrap_or(c.sex),
                activity: self.activity.unwrap_or(c.activity),
                goal: self.goal.unwrap_or(c.goal),
            },
            None => UserBiometrics {
                age: self.age.ok_or_else(|| missing("--age"))?,
                weight_kg: self.weight_kg.ok_or_else(|| missing("--weight"))?,
                height_cm: self.height_cm.ok_or_else(|| missing("--height"))?,
                sex: self.sex.ok_or_else(|| missing("--sex"))?,
                activity: self.activity.unwrap_or_default(),
                goal: self.goal.unwrap_or_default(),
            },
        };

        validate_biometrics(&merged)?;
        Ok(merged)
    }
}

/// Computed figures shown next to a profile.
#[derive(Debug, Clone)]
pub struct ProfileSummary {
    pub profile: Profile,
    pub bmr: f64,
    pub tdee: f64,
    pub target: DailyTarget,
}

pub struct ProfileLogic;

impl ProfileLogic {
    /// Create or update the profile of `user_id`.
    ///
    /// The merged biometrics must yield a valid daily target, otherwise
    /// nothing is stored.
    pub fn set(pool: &mut DbPool, user_id: &str, update: &ProfileUpdate) -> AppResult<Profile> {
        pool.with_write_tx(|tx| {
            let current = load_profile(tx, user_id)?;
            let merged = update.merge(current.as_ref().map(|p| &p.biometrics))?;
            let target = compute_daily_target(&merged)?;

            let profile = Profile::new(user_id, merged);
            upsert_profile(tx, &profile)?;

            let op = if current.is_some() { "edit" } else { "add" };
            ttlog(
                tx,
                op,
                &format!("profile:{user_id}"),
                &format!(
                    "Profile saved (target {:.0} kcal, {:.0} min)",
                    target.calorie_target, target.workout_minutes_target
                ),
            )?;

            Ok(profile)
        })
    }

    pub fn require(pool: &DbPool, user_id: &str) -> AppResult<Profile> {
        load_profile(&pool.conn, user_id)?.ok_or_else(|| AppError::ProfileNotFound(user_id.into()))
    }

    pub fn summary(pool: &DbPool, user_id: &str) -> AppResult<ProfileSummary> {
        let profile = Self::require(pool, user_id)?;
        let bmr = calculate_bmr(&profile.biometrics)?;
        let tdee = calculate_tdee(bmr, profile.biometrics.activity);
        let target = compute_daily_target(&profile.biometrics)?;

        Ok(ProfileSummary {
            profile,
            bmr,
            tdee,
            target,
        })
    }
}
