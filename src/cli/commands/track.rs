use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::track::TrackLogic;
use crate::db::initialize::open_db;
use crate::errors::{AppError, AppResult};
use crate::models::daily_progress::DailyProgress;
use crate::ui::messages::{header, success, warning};
use crate::utils::colors::{RESET, color_for_progress, colorize_optional};
use crate::utils::date;
use crate::utils::formatting::{kcal, minutes, percent, progress_bar};
use chrono::NaiveDate;

fn resolve_date(raw: &Option<String>) -> AppResult<NaiveDate> {
    date::parse_optional_date(raw.as_deref())
        .ok_or_else(|| AppError::InvalidDate(raw.clone().unwrap_or_default()))
}

/// Handle `start`, `eat`, `workout`, `reset` and `status`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let mut pool = open_db(&cfg.database)?;
    let user = cfg.user.as_str();

    match cmd {
        Commands::Start { date } => {
            let d = resolve_date(date)?;
            let (progress, created) = TrackLogic::start_day(&mut pool, user, d)?;
            if created {
                success(format!("Tracking started for {}.", d));
            } else {
                warning(format!("{} is already tracked; targets unchanged.", d));
            }
            print_progress(&progress, cfg);
        }
        Commands::Eat { amount, date } => {
            let d = resolve_date(date)?;
            let progress = TrackLogic::add_calories(&mut pool, user, d, *amount)?;
            success(format!("Logged {} for {}.", kcal(*amount), d));
            print_progress(&progress, cfg);
        }
        Commands::Workout { minutes: mins, date } => {
            let d = resolve_date(date)?;
            let progress = TrackLogic::add_workout(&mut pool, user, d, *mins)?;
            success(format!("Logged {} of workout for {}.", minutes(*mins), d));
            print_progress(&progress, cfg);
        }
        Commands::Reset { date } => {
            let d = resolve_date(date)?;
            let progress = TrackLogic::reset_day(&mut pool, user, d)?;
            success(format!("Counters reset for {}.", d));
            print_progress(&progress, cfg);
        }
        Commands::Status { date } => {
            let d = resolve_date(date)?;
            let progress = TrackLogic::status(&pool, user, d)?;
            print_progress(&progress, cfg);
        }
        _ => {}
    }

    Ok(())
}

fn progress_line(label: &str, done: String, target: String, ratio: f64, remaining: String) -> String {
    format!(
        "{:<9}: {} / {}  {}{} {}{}  remaining {}",
        label,
        done,
        target,
        color_for_progress(ratio),
        progress_bar(ratio, 20),
        percent(ratio),
        RESET,
        remaining
    )
}

fn print_progress(p: &DailyProgress, cfg: &Config) {
    let title = match date::weekday_str(&p.date, &cfg.show_weekday) {
        Some(wd) => format!("{} ({})", p.date, wd),
        None => p.date.to_string(),
    };
    header(title);

    println!(
        "{}",
        progress_line(
            "Calories",
            kcal(p.calories_consumed),
            kcal(p.calories_target),
            p.calories_progress(),
            colorize_optional(&kcal(p.calories_remaining())),
        )
    );
    println!(
        "{}",
        progress_line(
            "Workout",
            minutes(p.workout_minutes_completed),
            minutes(p.workout_minutes_target),
            p.workout_progress(),
            colorize_optional(&minutes(p.workout_minutes_remaining())),
        )
    );
}
