use predicates::prelude::*;
use predicates::str::contains;
use std::fs;
use std::path::Path;

mod common;
use common::{init_db_with_profile, rfl, setup_test_db, temp_out};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init_creates_database");

    rfl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(Path::new(&db_path).exists());
}

#[test]
fn test_profile_show_reports_target() {
    let db_path = setup_test_db("profile_show");
    init_db_with_profile(&db_path);

    rfl()
        .args(["--db", &db_path, "profile", "show"])
        .assert()
        .success()
        .stdout(contains("BMR       : 1673.75 kcal"))
        .stdout(contains("Target    : 2094 kcal"))
        .stdout(contains("Workout   : 75 min"));
}

#[test]
fn test_profile_partial_update_keeps_other_fields() {
    let db_path = setup_test_db("profile_partial_update");
    init_db_with_profile(&db_path);

    rfl()
        .args(["--db", &db_path, "profile", "set", "--goal", "maintenance"])
        .assert()
        .success()
        .stdout(contains("Weight    : 70 kg"))
        .stdout(contains("Target    : 2594 kcal"))
        .stdout(contains("Workout   : 45 min"));
}

#[test]
fn test_profile_unknown_activity_falls_back_to_moderate() {
    let db_path = setup_test_db("profile_unknown_activity");
    init_db_with_profile(&db_path);

    rfl()
        .args(["--db", &db_path, "profile", "set", "--activity", "couch"])
        .assert()
        .success()
        .stdout(contains("Unknown activity level 'couch'"))
        .stdout(contains("Activity  : moderate"));
}

#[test]
fn test_profile_rejects_invalid_biometrics() {
    let db_path = setup_test_db("profile_invalid");
    init_db_with_profile(&db_path);

    rfl()
        .args(["--db", &db_path, "profile", "set", "--weight", "-70"])
        .assert()
        .failure()
        .stderr(contains("Invalid biometrics"));

    rfl()
        .args(["--db", &db_path, "profile", "show"])
        .assert()
        .success()
        .stdout(contains("Weight    : 70 kg"));
}

#[test]
fn test_new_profile_requires_sex() {
    let db_path = setup_test_db("profile_requires_sex");

    rfl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rfl()
        .args([
            "--db", &db_path, "profile", "set", "--age", "30", "--weight", "60", "--height",
            "165",
        ])
        .assert()
        .failure()
        .stderr(contains("--sex is required"));
}

#[test]
fn test_target_command() {
    let db_path = setup_test_db("target_command");
    init_db_with_profile(&db_path);

    rfl()
        .args(["--db", &db_path, "target"])
        .assert()
        .success()
        .stdout(contains("Calories : 2094 kcal"))
        .stdout(contains("Workout  : 75 min"));
}

#[test]
fn test_macros_command() {
    let db_path = setup_test_db("macros_command");
    init_db_with_profile(&db_path);

    rfl()
        .args(["--db", &db_path, "macros", "--calories", "2000"])
        .assert()
        .success()
        .stdout(contains("Macros for 2000 kcal"))
        .stdout(contains("Protein"))
        .stdout(contains("140.0"))
        .stdout(contains("Carbs"))
        .stdout(contains("Fiber"));

    rfl()
        .args(["--db", &db_path, "macros", "--calories", "500"])
        .assert()
        .failure()
        .stderr(contains("Invalid macro input"));
}

#[test]
fn test_eat_and_workout_then_status() {
    let db_path = setup_test_db("eat_workout_status");
    init_db_with_profile(&db_path);

    rfl()
        .args(["--db", &db_path, "eat", "500", "--date", "2026-05-02"])
        .assert()
        .success()
        .stdout(contains("Logged 500 kcal"));

    rfl()
        .args(["--db", &db_path, "eat", "250.5", "--date", "2026-05-02"])
        .assert()
        .success();

    rfl()
        .args(["--db", &db_path, "workout", "30", "--date", "2026-05-02"])
        .assert()
        .success()
        .stdout(contains("Logged 30 min"));

    rfl()
        .args(["--db", &db_path, "status", "2026-05-02"])
        .assert()
        .success()
        .stdout(contains("750.5 kcal / 2094 kcal"))
        .stdout(contains("30 min / 75 min"))
        .stdout(contains("remaining"));
}

#[test]
fn test_eat_rejects_non_positive_amount() {
    let db_path = setup_test_db("eat_negative");
    init_db_with_profile(&db_path);

    rfl()
        .args(["--db", &db_path, "eat", "-5", "--date", "2026-05-03"])
        .assert()
        .failure()
        .stderr(contains("Invalid log amount"));

    rfl()
        .args(["--db", &db_path, "workout", "0", "--date", "2026-05-03"])
        .assert()
        .failure()
        .stderr(contains("Invalid log amount"));

    rfl()
        .args(["--db", &db_path, "status", "2026-05-03"])
        .assert()
        .failure()
        .stderr(contains("No progress recorded for 2026-05-03"));
}

#[test]
fn test_eat_without_profile_fails() {
    let db_path = setup_test_db("eat_without_profile");

    rfl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rfl()
        .args(["--db", &db_path, "eat", "100"])
        .assert()
        .failure()
        .stderr(contains("No profile found for user 'default'"));
}

#[test]
fn test_users_are_isolated() {
    let db_path = setup_test_db("users_isolated");
    init_db_with_profile(&db_path);

    rfl()
        .args(["--db", &db_path, "eat", "400", "--date", "2026-05-04"])
        .assert()
        .success();

    rfl()
        .args(["--db", &db_path, "--user", "other", "status", "2026-05-04"])
        .assert()
        .failure()
        .stderr(contains("No progress recorded"));
}

#[test]
fn test_start_is_idempotent() {
    let db_path = setup_test_db("start_idempotent");
    init_db_with_profile(&db_path);

    rfl()
        .args(["--db", &db_path, "start", "2026-05-05"])
        .assert()
        .success()
        .stdout(contains("Tracking started for 2026-05-05"));

    rfl()
        .args(["--db", &db_path, "start", "2026-05-05"])
        .assert()
        .success()
        .stdout(contains("already tracked"));
}

#[test]
fn test_reset_keeps_targets() {
    let db_path = setup_test_db("reset_keeps_targets");
    init_db_with_profile(&db_path);

    rfl()
        .args(["--db", &db_path, "eat", "900", "--date", "2026-05-06"])
        .assert()
        .success();

    rfl()
        .args(["--db", &db_path, "reset", "2026-05-06"])
        .assert()
        .success()
        .stdout(contains("Counters reset for 2026-05-06"))
        .stdout(contains("0 kcal / 2094 kcal"));

    rfl()
        .args(["--db", &db_path, "reset", "2026-05-07"])
        .assert()
        .failure()
        .stderr(contains("No progress recorded for 2026-05-07"));
}

#[test]
fn test_list_period() {
    let db_path = setup_test_db("list_period");
    init_db_with_profile(&db_path);

    for (day, amount) in [("2026-05-01", "1000"), ("2026-05-02", "2000"), ("2026-06-01", "1500")] {
        rfl()
            .args(["--db", &db_path, "eat", amount, "--date", day])
            .assert()
            .success();
    }

    rfl()
        .args(["--db", &db_path, "list", "--period", "2026-05"])
        .assert()
        .success()
        .stdout(contains("2026-05-01"))
        .stdout(contains("2026-05-02"))
        .stdout(contains("Days: 2 | Avg eaten: 1500 kcal"));

    rfl()
        .args(["--db", &db_path, "list", "--period", "1999"])
        .assert()
        .success()
        .stdout(contains("No tracked days"));
}

#[test]
fn test_del_with_yes() {
    let db_path = setup_test_db("del_with_yes");
    init_db_with_profile(&db_path);

    rfl()
        .args(["--db", &db_path, "eat", "300", "--date", "2026-05-08"])
        .assert()
        .success();

    rfl()
        .args(["--db", &db_path, "del", "2026-05-08", "--yes"])
        .assert()
        .success()
        .stdout(contains("Day 2026-05-08 has been deleted"));

    rfl()
        .args(["--db", &db_path, "status", "2026-05-08"])
        .assert()
        .failure();
}

#[test]
fn test_del_cancelled_keeps_day() {
    let db_path = setup_test_db("del_cancelled");
    init_db_with_profile(&db_path);

    rfl()
        .args(["--db", &db_path, "eat", "300", "--date", "2026-05-09"])
        .assert()
        .success();

    rfl()
        .args(["--db", &db_path, "del", "2026-05-09"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled"));

    rfl()
        .args(["--db", &db_path, "status", "2026-05-09"])
        .assert()
        .success();
}

#[test]
fn test_log_print_lists_operations() {
    let db_path = setup_test_db("log_print");
    init_db_with_profile(&db_path);

    rfl()
        .args(["--db", &db_path, "eat", "200", "--date", "2026-05-10"])
        .assert()
        .success();

    rfl()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("start"))
        .stdout(contains("eat"));
}

#[test]
fn test_db_info_and_check() {
    let db_path = setup_test_db("db_info_check");
    init_db_with_profile(&db_path);

    rfl()
        .args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"))
        .stdout(contains("Every tracked day belongs to a profile"));

    rfl()
        .args([
            "--db", &db_path, "--user", "partner", "profile", "set", "--age", "30", "--weight",
            "60", "--height", "165", "--sex", "F",
        ])
        .assert()
        .success();

    for user in ["default", "partner"] {
        rfl()
            .args(["--db", &db_path, "--user", user, "start", "2026-01-02"])
            .assert()
            .success();
    }

    rfl()
        .args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Days tracked in range:"))
        .stdout(contains("100.0%"))
        .stdout(contains("200.0%").not());
}

#[test]
fn test_backup_plain_and_compressed() {
    let db_path = setup_test_db("backup_cmd");
    init_db_with_profile(&db_path);

    let plain = temp_out("backup_plain", "sqlite");
    rfl()
        .args(["--db", &db_path, "backup", "--file", &plain])
        .assert()
        .success()
        .stdout(contains("Backup created"));
    assert!(Path::new(&plain).exists());

    let to_zip = temp_out("backup_zipped", "sqlite");
    let zipped = Path::new(&to_zip).with_extension("zip");
    fs::remove_file(&zipped).ok();

    rfl()
        .args(["--db", &db_path, "backup", "--file", &to_zip, "--compress"])
        .assert()
        .success();
    assert!(zipped.exists());
    assert!(!Path::new(&to_zip).exists());
}

#[test]
fn test_backup_missing_database_fails() {
    let db_path = setup_test_db("backup_missing_db");
    let out = temp_out("backup_missing_db", "sqlite");

    rfl()
        .args(["--db", &db_path, "backup", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("Database not found"));

    assert!(!Path::new(&db_path).exists());
}
