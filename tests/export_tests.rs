use chrono::NaiveDate;
use predicates::str::contains;
use rfitlogger::errors::AppError;
use rfitlogger::export::range::parse_range;
use std::fs;

mod common;
use common::{init_db_with_profile, rfl, setup_test_db, temp_out};

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn seed_days(db_path: &str) {
    for (day, amount) in [("2026-03-31", "800"), ("2026-04-01", "1200"), ("2026-04-15", "2500")] {
        rfl()
            .args(["--db", db_path, "eat", amount, "--date", day])
            .assert()
            .success();
    }
    rfl()
        .args(["--db", db_path, "workout", "90", "--date", "2026-04-15"])
        .assert()
        .success();
}

#[test]
fn test_export_csv_with_range() {
    let db_path = setup_test_db("export_csv_range");
    init_db_with_profile(&db_path);
    seed_days(&db_path);

    let out = temp_out("export_csv_range", "csv");

    rfl()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out, "--range", "2026-04",
            "--force",
        ])
        .assert()
        .success()
        .stdout(contains("2 day(s) exported as csv"));

    let content = fs::read_to_string(&out).expect("read csv");
    let mut lines = content.lines();

    let header = lines.next().expect("header");
    assert!(header.contains("calories_consumed"));
    assert!(header.starts_with("date,user_id,"));

    let rows: Vec<&str> = lines.collect();
    assert_eq!(rows.len(), 2);
    assert!(rows[0].starts_with("2026-04-01,default,1200"));
    assert!(rows[1].starts_with("2026-04-15,default,2500"));
    assert!(!content.contains("2026-03-31"));
}

#[test]
fn test_export_json_clamps_progress() {
    let db_path = setup_test_db("export_json");
    init_db_with_profile(&db_path);
    seed_days(&db_path);

    let out = temp_out("export_json", "json");

    rfl()
        .args(["--db", &db_path, "export", "--format", "json", "--file", &out, "--force"])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = rows.as_array().expect("array");
    assert_eq!(rows.len(), 3);

    let over = rows
        .iter()
        .find(|r| r["date"] == "2026-04-15")
        .expect("2026-04-15 exported");
    assert_eq!(over["calories_consumed"], 2500.0);
    assert_eq!(over["calories_progress"], 1.0);
    assert_eq!(over["calories_remaining"], 0.0);
    assert_eq!(over["workout_progress"], 1.0);
    assert_eq!(over["workout_minutes_remaining"], 0.0);
}

#[test]
fn test_export_requires_absolute_path() {
    let db_path = setup_test_db("export_relative");
    init_db_with_profile(&db_path);
    seed_days(&db_path);

    rfl()
        .args(["--db", &db_path, "export", "--file", "relative.csv"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_empty_range_writes_nothing() {
    let db_path = setup_test_db("export_empty");
    init_db_with_profile(&db_path);
    seed_days(&db_path);

    let out = temp_out("export_empty", "csv");

    rfl()
        .args(["--db", &db_path, "export", "--file", &out, "--range", "1999"])
        .assert()
        .success()
        .stdout(contains("No tracked days found"));

    assert!(fs::metadata(&out).is_err());
}

#[test]
fn test_export_declined_overwrite_keeps_file() {
    let db_path = setup_test_db("export_declined");
    init_db_with_profile(&db_path);
    seed_days(&db_path);

    let out = temp_out("export_declined", "csv");
    fs::write(&out, "keep me").unwrap();

    rfl()
        .args(["--db", &db_path, "export", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("export cancelled"));

    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");
}

#[test]
fn test_parse_range_forms() {
    assert_eq!(
        parse_range("2026").unwrap(),
        (d("2026-01-01"), d("2026-12-31"))
    );
    assert_eq!(
        parse_range("2024-02").unwrap(),
        (d("2024-02-01"), d("2024-02-29"))
    );
    assert_eq!(
        parse_range("2025-12").unwrap(),
        (d("2025-12-01"), d("2025-12-31"))
    );
    assert_eq!(
        parse_range("2026-04-15").unwrap(),
        (d("2026-04-15"), d("2026-04-15"))
    );
    assert_eq!(
        parse_range("2026-01:2026-03").unwrap(),
        (d("2026-01-01"), d("2026-03-31"))
    );
}

#[test]
fn test_parse_range_rejects_bad_input() {
    for bad in ["", "26", "2026-13", "2026-02-30", "2026:2026-05", "2026-05:2026-01", "abcd"] {
        assert!(
            matches!(parse_range(bad), Err(AppError::InvalidDate(_))),
            "{bad} should be rejected"
        );
    }
}
