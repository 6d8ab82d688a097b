use rfitlogger::core::calculator::target::{calculate_bmr, calculate_tdee, compute_daily_target};
use rfitlogger::errors::AppError;
use rfitlogger::models::biometrics::{ActivityLevel, FitnessGoal, Sex, UserBiometrics};

fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() < tolerance
}

fn reference(sex: Sex, activity: ActivityLevel, goal: FitnessGoal) -> UserBiometrics {
    UserBiometrics {
        age: 25,
        weight_kg: 70.0,
        height_cm: 175.0,
        sex,
        activity,
        goal,
    }
}

#[test]
fn male_moderate_fat_loss_scenario() {
    let b = reference(Sex::Male, ActivityLevel::Moderate, FitnessGoal::FatLoss);

    let bmr = calculate_bmr(&b).unwrap();
    assert_eq!(bmr, 1673.75);

    let tdee = calculate_tdee(bmr, b.activity);
    assert!(approx_eq(tdee, 2594.3125, 1e-9));

    let target = compute_daily_target(&b).unwrap();
    assert_eq!(target.calorie_target, 2094.0);
    assert_eq!(target.workout_minutes_target, 75.0);
}

#[test]
fn female_moderate_maintenance_scenario() {
    let b = reference(Sex::Female, ActivityLevel::Moderate, FitnessGoal::Maintenance);

    let bmr = calculate_bmr(&b).unwrap();
    assert_eq!(bmr, 1507.75);
    assert!(approx_eq(calculate_tdee(bmr, b.activity), 2337.0125, 1e-9));

    let target = compute_daily_target(&b).unwrap();
    assert_eq!(target.calorie_target, 2337.0);
    assert_eq!(target.workout_minutes_target, 45.0);
}

#[test]
fn muscle_gain_adds_surplus_and_sixty_minutes() {
    let b = reference(Sex::Male, ActivityLevel::Light, FitnessGoal::MuscleGain);
    let target = compute_daily_target(&b).unwrap();

    // 1673.75 × 1.375 + 300 = 2601.40625
    assert_eq!(target.calorie_target, 2601.0);
    assert_eq!(target.workout_minutes_target, 60.0);
}

#[test]
fn activity_multipliers_are_documented_values() {
    let expected = [
        (ActivityLevel::Sedentary, 1.2),
        (ActivityLevel::Light, 1.375),
        (ActivityLevel::Moderate, 1.55),
        (ActivityLevel::Active, 1.725),
        (ActivityLevel::VeryActive, 1.9),
    ];

    for (level, factor) in expected {
        assert_eq!(level.multiplier(), factor);
        assert_eq!(calculate_tdee(1673.75, level), 1673.75 * factor);
    }
}

#[test]
fn target_is_deterministic() {
    for activity in ActivityLevel::ALL {
        for goal in FitnessGoal::ALL {
            let b = reference(Sex::Female, activity, goal);
            assert_eq!(
                compute_daily_target(&b).unwrap(),
                compute_daily_target(&b).unwrap()
            );
        }
    }
}

#[test]
fn unknown_activity_and_goal_codes_fall_back_to_defaults() {
    assert_eq!(ActivityLevel::from_code("couch potato"), None);
    assert_eq!(ActivityLevel::default(), ActivityLevel::Moderate);
    assert_eq!(FitnessGoal::from_code("bulk?"), None);
    assert_eq!(FitnessGoal::default(), FitnessGoal::Maintenance);

    assert_eq!(
        ActivityLevel::from_code("Very-Active"),
        Some(ActivityLevel::VeryActive)
    );
    assert_eq!(FitnessGoal::from_code("fat loss"), Some(FitnessGoal::FatLoss));
    assert_eq!(Sex::from_code("female"), Some(Sex::Female));
}

#[test]
fn non_positive_biometrics_are_rejected() {
    let base = reference(Sex::Male, ActivityLevel::Moderate, FitnessGoal::Maintenance);

    let zero_age = UserBiometrics { age: 0, ..base.clone() };
    let zero_weight = UserBiometrics {
        weight_kg: 0.0,
        ..base.clone()
    };
    let negative_height = UserBiometrics {
        height_cm: -170.0,
        ..base.clone()
    };
    let nan_weight = UserBiometrics {
        weight_kg: f64::NAN,
        ..base
    };

    for b in [zero_age, zero_weight, negative_height, nan_weight] {
        assert!(matches!(
            compute_daily_target(&b),
            Err(AppError::InvalidBiometrics(_))
        ));
    }
}

#[test]
fn non_positive_calorie_target_is_an_error_not_a_clamp() {
    // Valid individually, but BMR goes negative: 10 + 6.25 − 5·100 − 161 < 0
    let b = UserBiometrics {
        age: 100,
        weight_kg: 1.0,
        height_cm: 1.0,
        sex: Sex::Female,
        activity: ActivityLevel::Sedentary,
        goal: FitnessGoal::FatLoss,
    };

    assert!(matches!(
        compute_daily_target(&b),
        Err(AppError::InvalidBiometrics(_))
    ));
}
