use crate::core::calculator::progress::{create_progress, log_calories, log_workout, reset_progress};
use crate::core::calculator::target::compute_daily_target;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{
    delete_progress, insert_progress, load_profile, load_progress, load_progress_range,
    update_progress_counters,
};
use crate::errors::{AppError, AppResult};
use crate::models::daily_progress::DailyProgress;
use chrono::NaiveDate;
use rusqlite::Connection;

/// Load the day, or create it with targets frozen from the current profile.
///
/// Returns the record and whether it was just created.
fn load_or_create(
    conn: &Connection,
    user_id: &str,
    date: &NaiveDate,
) -> AppResult<(DailyProgress, bool)> {
    if let Some(existing) = load_progress(conn, user_id, date)? {
        return Ok((existing, false));
    }

    let profile =
        load_profile(conn, user_id)?.ok_or_else(|| AppError::ProfileNotFound(user_id.into()))?;
    let target = compute_daily_target(&profile.biometrics)?;

    let progress = create_progress(user_id, *date, &target);
    insert_progress(conn, &progress)?;

    ttlog(
        conn,
        "start",
        &format!("{user_id}@{date}"),
        &format!(
            "Day started (target {:.0} kcal, {:.0} min)",
            progress.calories_target, progress.workout_minutes_target
        ),
    )?;

    Ok((progress, true))
}

/// High-level logic for per-day tracking.
///
/// Every mutation is a read-modify-write inside one IMMEDIATE transaction,
/// so concurrent logs against the same (user, date) are applied one after
/// the other.
pub struct TrackLogic;

impl TrackLogic {
    /// Create the day if needed. The bool is `false` when it already existed.
    pub fn start_day(
        pool: &mut DbPool,
        user_id: &str,
        date: NaiveDate,
    ) -> AppResult<(DailyProgress, bool)> {
        pool.with_write_tx(|tx| load_or_create(tx, user_id, &date))
    }

    pub fn add_calories(
        pool: &mut DbPool,
        user_id: &str,
        date: NaiveDate,
        amount: f64,
    ) -> AppResult<DailyProgress> {
        pool.with_write_tx(|tx| {
            let (current, _) = load_or_create(tx, user_id, &date)?;
            let next = log_calories(&current, amount)?;
            update_progress_counters(tx, &next)?;

            ttlog(
                tx,
                "eat",
                &format!("{user_id}@{date}"),
                &format!(
                    "+{amount} kcal (total {:.0}/{:.0})",
                    next.calories_consumed, next.calories_target
                ),
            )?;
            Ok(next)
        })
    }

    pub fn add_workout(
        pool: &mut DbPool,
        user_id: &str,
        date: NaiveDate,
        minutes: f64,
    ) -> AppResult<DailyProgress> {
        pool.with_write_tx(|tx| {
            let (current, _) = load_or_create(tx, user_id, &date)?;
            let next = log_workout(&current, minutes)?;
            update_progress_counters(tx, &next)?;

            ttlog(
                tx,
                "workout",
                &format!("{user_id}@{date}"),
                &format!(
                    "+{minutes} min (total {:.0}/{:.0})",
                    next.workout_minutes_completed, next.workout_minutes_target
                ),
            )?;
            Ok(next)
        })
    }

    /// Zero the counters of an existing day.
    pub fn reset_day(pool: &mut DbPool, user_id: &str, date: NaiveDate) -> AppResult<DailyProgress> {
        pool.with_write_tx(|tx| {
            let current = load_progress(tx, user_id, &date)?
                .ok_or_else(|| AppError::NoProgressForDate(date.to_string()))?;
            let next = reset_progress(&current);
            update_progress_counters(tx, &next)?;

            ttlog(tx, "reset", &format!("{user_id}@{date}"), "Counters reset")?;
            Ok(next)
        })
    }

    pub fn delete_day(pool: &mut DbPool, user_id: &str, date: NaiveDate) -> AppResult<()> {
        pool.with_write_tx(|tx| {
            if delete_progress(tx, user_id, &date)? == 0 {
                return Err(AppError::NoProgressForDate(date.to_string()));
            }
            ttlog(tx, "del", &format!("{user_id}@{date}"), "Day deleted")?;
            Ok(())
        })
    }

    pub fn status(pool: &DbPool, user_id: &str, date: NaiveDate) -> AppResult<DailyProgress> {
        load_progress(&pool.conn, user_id, &date)?
            .ok_or_else(|| AppError::NoProgressForDate(date.to_string()))
    }

    pub fn days(
        pool: &DbPool,
        user_id: &str,
        bounds: Option<(NaiveDate, NaiveDate)>,
    ) -> AppResult<Vec<DailyProgress>> {
        load_progress_range(&pool.conn, user_id, bounds)
    }
}
