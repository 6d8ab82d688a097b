use crate::errors::{AppError, AppResult};
use crate::models::biometrics::{ActivityLevel, FitnessGoal, Sex, UserBiometrics};
use crate::models::daily_progress::DailyProgress;
use crate::models::profile::Profile;
use chrono::{Local, NaiveDate};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

fn conversion_error(err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(err))
}

// ------------------------------------------------
// profiles
// ------------------------------------------------

pub fn map_profile_row(row: &Row) -> Result<Profile> {
    let sex_str: String = row.get("sex")?;
    let sex = Sex::from_db_str(&sex_str)
        .ok_or_else(|| conversion_error(AppError::InvalidCode(format!("sex '{sex_str}'"))))?;

    let activity_str: String = row.get("activity")?;
    let activity = ActivityLevel::from_db_str(&activity_str).ok_or_else(|| {
        conversion_error(AppError::InvalidCode(format!("activity '{activity_str}'")))
    })?;

    let goal_str: String = row.get("goal")?;
    let goal = FitnessGoal::from_db_str(&goal_str)
        .ok_or_else(|| conversion_error(AppError::InvalidCode(format!("goal '{goal_str}'"))))?;

    Ok(Profile {
        user_id: row.get("user_id")?,
        biometrics: UserBiometrics {
            age: row.get("age")?,
            weight_kg: row.get("weight_kg")?,
            height_cm: row.get("height_cm")?,
            sex,
            activity,
            goal,
        },
        updated_at: row.get("updated_at")?,
    })
}

pub fn load_profile(conn: &Connection, user_id: &str) -> AppResult<Option<Profile>> {
    let profile = conn
        .query_row(
            "SELECT * FROM profiles WHERE user_id = ?1",
            [user_id],
            map_profile_row,
        )
        .optional()?;
    Ok(profile)
}

pub fn upsert_profile(conn: &Connection, p: &Profile) -> AppResult<()> {
    let b = &p.biometrics;
    conn.execute(
        "INSERT INTO profiles (user_id, age, weight_kg, height_cm, sex, activity, goal, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
         ON CONFLICT(user_id) DO UPDATE SET
             age = excluded.age,
             weight_kg = excluded.weight_kg,
             height_cm = excluded.height_cm,
             sex = excluded.sex,
             activity = excluded.activity,
             goal = excluded.goal,
             updated_at = excluded.updated_at",
        params![
            p.user_id,
            b.age,
            b.weight_kg,
            b.height_cm,
            b.sex.to_db_str(),
            b.activity.to_db_str(),
            b.goal.to_db_str(),
            p.updated_at,
        ],
    )?;
    Ok(())
}

// ------------------------------------------------
// daily_progress
// ------------------------------------------------

pub fn map_progress_row(row: &Row) -> Result<DailyProgress> {
    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
        .map_err(|_| conversion_error(AppError::InvalidDate(date_str.clone())))?;

    Ok(DailyProgress {
        user_id: row.get("user_id")?,
        date,
        calories_consumed: row.get("calories_consumed")?,
        workout_minutes_completed: row.get("workout_minutes_completed")?,
        calories_target: row.get("calories_target")?,
        workout_minutes_target: row.get("workout_minutes_target")?,
    })
}

pub fn load_progress(
    conn: &Connection,
    user_id: &str,
    date: &NaiveDate,
) -> AppResult<Option<DailyProgress>> {
    let progress = conn
        .query_row(
            "SELECT * FROM daily_progress WHERE user_id = ?1 AND date = ?2",
            params![user_id, date.format("%Y-%m-%d").to_string()],
            map_progress_row,
        )
        .optional()?;
    Ok(progress)
}

/// All days of `user_id`, optionally limited to an inclusive date range.
pub fn load_progress_range(
    conn: &Connection,
    user_id: &str,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<DailyProgress>> {
    let mut out = Vec::new();

    match bounds {
        None => {
            let mut stmt = conn.prepare(
                "SELECT * FROM daily_progress
                 WHERE user_id = ?1
                 ORDER BY date ASC",
            )?;
            let rows = stmt.query_map([user_id], map_progress_row)?;
            for r in rows {
                out.push(r?);
            }
        }
        Some((start, end)) => {
            let mut stmt = conn.prepare(
                "SELECT * FROM daily_progress
                 WHERE user_id = ?1 AND date BETWEEN ?2 AND ?3
                 ORDER BY date ASC",
            )?;
            let rows = stmt.query_map(
                params![
                    user_id,
                    start.format("%Y-%m-%d").to_string(),
                    end.format("%Y-%m-%d").to_string()
                ],
                map_progress_row,
            )?;
            for r in rows {
                out.push(r?);
            }
        }
    }

    Ok(out)
}

pub fn insert_progress(conn: &Connection, p: &DailyProgress) -> AppResult<()> {
    let now = Local::now().to_rfc3339();
    conn.execute(
        "INSERT INTO daily_progress (user_id, date, calories_consumed, workout_minutes_completed,
                                     calories_target, workout_minutes_target, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?7)",
        params![
            p.user_id,
            p.date_str(),
            p.calories_consumed,
            p.workout_minutes_completed,
            p.calories_target,
            p.workout_minutes_target,
            now,
        ],
    )?;
    Ok(())
}

/// Write back the counters of an existing day. Targets are never updated.
pub fn update_progress_counters(conn: &Connection, p: &DailyProgress) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE daily_progress
         SET calories_consumed = ?1, workout_minutes_completed = ?2, updated_at = ?3
         WHERE user_id = ?4 AND date = ?5",
        params![
            p.calories_consumed,
            p.workout_minutes_completed,
            Local::now().to_rfc3339(),
            p.user_id,
            p.date_str(),
        ],
    )?;

    if changed == 0 {
        return Err(AppError::NoProgressForDate(p.date_str()));
    }
    Ok(())
}

/// Returns the number of deleted rows (0 or 1).
pub fn delete_progress(conn: &Connection, user_id: &str, date: &NaiveDate) -> AppResult<usize> {
    let n = conn.execute(
        "DELETE FROM daily_progress WHERE user_id = ?1 AND date = ?2",
        params![user_id, date.format("%Y-%m-%d").to_string()],
    )?;
    Ok(n)
}
