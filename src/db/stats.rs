use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use chrono::NaiveDate;
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) ROW COUNTS
    //
    let profiles: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM profiles", [], |row| row.get(0))?;
    let days: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM daily_progress", [], |row| row.get(0))?;

    // several users may track the same calendar day
    let distinct_days: i64 = pool.conn.query_row(
        "SELECT COUNT(DISTINCT date) FROM daily_progress",
        [],
        |row| row.get(0),
    )?;

    println!("{}• Profiles:{} {}{}{}", CYAN, RESET, GREEN, profiles, RESET);
    println!("{}• Tracked days:{} {}{}{}", CYAN, RESET, GREEN, days, RESET);

    //
    // 3) DATE RANGE
    //
    let first_date: Option<String> = pool
        .conn
        .query_row("SELECT MIN(date) FROM daily_progress", [], |row| row.get(0))
        .optional()?
        .flatten();

    let last_date: Option<String> = pool
        .conn
        .query_row("SELECT MAX(date) FROM daily_progress", [], |row| row.get(0))
        .optional()?
        .flatten();

    let fmt_first = first_date
        .clone()
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last_date
        .clone()
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    //
    // 4) COVERAGE
    //
    if let (Some(f), Some(l)) = (first_date, last_date) {
        let d1 = parse_date(&f)?;
        let d2 = parse_date(&l)?;
        let span = (d2 - d1).num_days() + 1;

        let coverage = distinct_days as f64 / span.max(1) as f64 * 100.0;
        println!("{}• Days tracked in range:{} {:.1}%", CYAN, RESET, coverage);
    }

    println!();
    Ok(())
}

fn parse_date(date_str: &str) -> rusqlite::Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })
}
