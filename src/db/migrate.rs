use crate::ui::messages::{success, warning};
use rusqlite::{Connection, Error, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{table}')"))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_migration_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// One profile per user id.
fn create_profiles_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS profiles (
            user_id     TEXT PRIMARY KEY,
            age         INTEGER NOT NULL CHECK(age > 0),
            weight_kg   REAL NOT NULL CHECK(weight_kg > 0),
            height_cm   REAL NOT NULL CHECK(height_cm > 0),
            sex         TEXT NOT NULL CHECK(sex IN ('M','F')),
            activity    TEXT NOT NULL DEFAULT 'moderate'
                        CHECK(activity IN ('sedentary','light','moderate','active','very_active')),
            goal        TEXT NOT NULL DEFAULT 'maintenance'
                        CHECK(goal IN ('fat_loss','muscle_gain','maintenance')),
            updated_at  TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// One progress row per (user_id, date).
fn create_daily_progress_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS daily_progress (
            id                         INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id                    TEXT NOT NULL,
            date                       TEXT NOT NULL,
            calories_consumed          REAL NOT NULL DEFAULT 0 CHECK(calories_consumed >= 0),
            workout_minutes_completed  REAL NOT NULL DEFAULT 0 CHECK(workout_minutes_completed >= 0),
            calories_target            REAL NOT NULL CHECK(calories_target > 0),
            workout_minutes_target     REAL NOT NULL CHECK(workout_minutes_target > 0),
            created_at                 TEXT NOT NULL,
            updated_at                 TEXT NOT NULL DEFAULT '',
            UNIQUE(user_id, date)
        );

        CREATE INDEX IF NOT EXISTS idx_progress_user_date ON daily_progress(user_id, date);
        "#,
    )?;
    Ok(())
}

fn backup_before_migration(db_path: &str, version: &str) -> Result<()> {
    use chrono::Local;
    use std::fs::{self, File};
    use std::io::Write;
    use zip::CompressionMethod;
    use zip::ZipWriter;
    use zip::write::FileOptions;

    let backup_name = format!(
        "{}-backup_db_pre_{}.zip",
        Local::now().format("%Y%m%d_%H%M%S"),
        version
    );

    let parent = std::path::Path::new(db_path)
        .parent()
        .map(|p| p.to_path_buf())
        .unwrap_or_default();
    let backup_path = parent.join(&backup_name);

    let to_sql_err = |stage: &str, e: &dyn std::fmt::Display| {
        Error::ToSqlConversionFailure(Box::new(std::io::Error::other(format!(
            "Backup failed ({stage}): {e}"
        ))))
    };

    let file = File::create(&backup_path).map_err(|e| to_sql_err("create", &e))?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(CompressionMethod::Deflated);

    zip.start_file("database.sqlite", options)
        .map_err(|e| to_sql_err("start_file", &e))?;

    let db_content = fs::read(db_path).map_err(|e| to_sql_err("read", &e))?;
    zip.write_all(&db_content)
        .map_err(|e| to_sql_err("write_all", &e))?;
    zip.finish().map_err(|e| to_sql_err("finish", &e))?;

    success(format!("📦 Backup created: {}", backup_path.display()));
    Ok(())
}

const PROGRESS_UPDATED_AT: &str = "20260301_0002_add_progress_updated_at";

/// Databases created before `updated_at` existed get the column added.
fn migrate_add_updated_at_to_progress(conn: &Connection) -> Result<()> {
    if migration_applied(conn, PROGRESS_UPDATED_AT)? {
        return Ok(());
    }

    if !table_has_column(conn, "daily_progress", "updated_at")? {
        warning("Legacy daily_progress schema detected — creating safety backup...");

        let db_path: String = conn
            .query_row("PRAGMA database_list;", [], |row| row.get::<_, String>(2))
            .unwrap_or_default();

        if db_path.is_empty() {
            warning("Could not determine DB path — backup skipped.");
        } else {
            backup_before_migration(&db_path, PROGRESS_UPDATED_AT)?;
        }

        conn.execute(
            "ALTER TABLE daily_progress ADD COLUMN updated_at TEXT NOT NULL DEFAULT ''",
            [],
        )
        .map_err(|e| {
            Error::SqliteFailure(
                rusqlite::ffi::Error::new(1),
                Some(format!("Failed to add 'updated_at' column: {e}")),
            )
        })?;

        success(format!(
            "Migration applied: {PROGRESS_UPDATED_AT} → added 'updated_at' to daily_progress"
        ));
    }

    mark_migration_applied(
        conn,
        PROGRESS_UPDATED_AT,
        "Added updated_at to daily_progress",
    )?;
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db() and `db --migrate`.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    if !table_exists(conn, "profiles")? {
        create_profiles_table(conn)?;
        success("Created profiles table.");
    }

    if !table_exists(conn, "daily_progress")? {
        create_daily_progress_table(conn)?;
        success("Created daily_progress table.");
    } else {
        conn.execute_batch(
            "CREATE INDEX IF NOT EXISTS idx_progress_user_date ON daily_progress(user_id, date);",
        )?;
    }

    migrate_add_updated_at_to_progress(conn)?;

    Ok(())
}
