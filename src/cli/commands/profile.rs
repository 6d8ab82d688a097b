use crate::cli::parser::{Commands, ProfileAction};
use crate::config::Config;
use crate::core::profile::{ProfileLogic, ProfileUpdate};
use crate::db::initialize::open_db;
use crate::errors::{AppError, AppResult};
use crate::models::biometrics::{ActivityLevel, FitnessGoal, Sex};
use crate::ui::messages::{header, success, warning};
use crate::utils::formatting::{kcal, minutes};

/// Parse `--activity`; unknown values fall back to `moderate`.
fn parse_activity(raw: &Option<String>) -> Option<ActivityLevel> {
    raw.as_deref().map(|code| {
        ActivityLevel::from_code(code).unwrap_or_else(|| {
            let fallback = ActivityLevel::default();
            warning(format!(
                "Unknown activity level '{}', using '{}'.",
                code,
                fallback.to_db_str()
            ));
            fallback
        })
    })
}

/// Parse `--goal`; unknown values fall back to `maintenance`.
fn parse_goal(raw: &Option<String>) -> Option<FitnessGoal> {
    raw.as_deref().map(|code| {
        FitnessGoal::from_code(code).unwrap_or_else(|| {
            let fallback = FitnessGoal::default();
            warning(format!(
                "Unknown goal '{}', using '{}'.",
                code,
                fallback.to_db_str()
            ));
            fallback
        })
    })
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Profile { action } = cmd else {
        return Ok(());
    };

    match action {
        ProfileAction::Set {
            age,
            weight,
            height,
            sex,
            activity,
            goal,
        } => {
            let sex = match sex {
                Some(code) => Some(Sex::from_code(code).ok_or_else(|| {
                    AppError::InvalidCode(format!("sex '{}' (use M/male or F/female)", code))
                })?),
                None => None,
            };

            let update = ProfileUpdate {
                age: *age,
                weight_kg: *weight,
                height_cm: *height,
                sex,
                activity: parse_activity(activity),
                goal: parse_goal(goal),
            };

            let mut pool = open_db(&cfg.database)?;
            ProfileLogic::set(&mut pool, &cfg.user, &update)?;
            success(format!("Profile saved for user '{}'.", cfg.user));

            print_profile(&pool, cfg)?;
        }
        ProfileAction::Show => {
            let pool = open_db(&cfg.database)?;
            print_profile(&pool, cfg)?;
        }
    }

    Ok(())
}

fn print_profile(pool: &crate::db::pool::DbPool, cfg: &Config) -> AppResult<()> {
    let s = ProfileLogic::summary(pool, &cfg.user)?;
    let b = &s.profile.biometrics;

    header(format!("Profile: {}", s.profile.user_id));
    println!("Age       : {} years", b.age);
    println!("Weight    : {} kg", b.weight_kg);
    println!("Height    : {} cm", b.height_cm);
    println!("Sex       : {}", b.sex.label());
    println!(
        "Activity  : {} (x{})",
        b.activity.to_db_str(),
        b.activity.multiplier()
    );
    println!("Goal      : {}", b.goal.to_db_str());
    println!();
    println!("BMR       : {:.2} kcal", s.bmr);
    println!("TDEE      : {:.2} kcal", s.tdee);
    println!("Target    : {}", kcal(s.target.calorie_target));
    println!("Workout   : {}", minutes(s.target.workout_minutes_target));

    Ok(())
}
