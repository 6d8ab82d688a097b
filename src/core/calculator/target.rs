use crate::errors::{AppError, AppResult};
use crate::models::biometrics::{ActivityLevel, Sex, UserBiometrics};
use crate::models::daily_target::DailyTarget;

/// Mifflin-St Jeor coefficients.
const WEIGHT_COEF: f64 = 10.0;
const HEIGHT_COEF: f64 = 6.25;
const AGE_COEF: f64 = 5.0;
const MALE_CONSTANT: f64 = 5.0;
const FEMALE_CONSTANT: f64 = -161.0;

/// Reject biometrics that cannot describe a real person.
pub fn validate_biometrics(b: &UserBiometrics) -> AppResult<()> {
    if b.age == 0 {
        return Err(AppError::InvalidBiometrics(
            "age must be a positive number of years".into(),
        ));
    }
    if !b.weight_kg.is_finite() || b.weight_kg <= 0.0 {
        return Err(AppError::InvalidBiometrics(format!(
            "weight must be greater than 0 kg (got {})",
            b.weight_kg
        )));
    }
    if !b.height_cm.is_finite() || b.height_cm <= 0.0 {
        return Err(AppError::InvalidBiometrics(format!(
            "height must be greater than 0 cm (got {})",
            b.height_cm
        )));
    }
    Ok(())
}

/// Basal Metabolic Rate (kcal/day), Mifflin-St Jeor.
///
/// male:   10·w + 6.25·h − 5·age + 5
/// female: 10·w + 6.25·h − 5·age − 161
pub fn calculate_bmr(b: &UserBiometrics) -> AppResult<f64> {
    validate_biometrics(b)?;

    let sex_constant = match b.sex {
        Sex::Male => MALE_CONSTANT,
        Sex::Female => FEMALE_CONSTANT,
    };

    Ok(WEIGHT_COEF * b.weight_kg + HEIGHT_COEF * b.height_cm - AGE_COEF * f64::from(b.age)
        + sex_constant)
}

/// Total Daily Energy Expenditure = BMR × activity multiplier.
pub fn calculate_tdee(bmr: f64, activity: ActivityLevel) -> f64 {
    bmr * activity.multiplier()
}

/// Derive the calorie and workout targets for a user.
///
/// Pure and deterministic. The calorie target is rounded to the nearest
/// whole kcal; a non-positive result is reported as invalid biometrics.
pub fn compute_daily_target(b: &UserBiometrics) -> AppResult<DailyTarget> {
    let bmr = calculate_bmr(b)?;
    let tdee = calculate_tdee(bmr, b.activity);
    let calorie_target = (tdee + b.goal.calorie_adjustment()).round();

    if !calorie_target.is_finite() || calorie_target <= 0.0 {
        return Err(AppError::InvalidBiometrics(format!(
            "computed calorie target is not positive ({calorie_target} kcal)"
        )));
    }

    Ok(DailyTarget {
        calorie_target,
        workout_minutes_target: b.goal.workout_minutes(),
    })
}
