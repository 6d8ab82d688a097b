#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, with HOME pointed at a scratch directory so a real
/// user configuration never leaks into the tests.
pub fn rfl() -> Command {
    let mut home = env::temp_dir();
    home.push("rfitlogger_test_home");
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("rfitlogger");
    cmd.env("HOME", &home);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rfitlogger.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the DB and store the reference profile:
/// male, 25 years, 70 kg, 175 cm, moderate, fat_loss → 2094 kcal / 75 min.
pub fn init_db_with_profile(db_path: &str) {
    rfl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    rfl()
        .args([
            "--db",
            db_path,
            "profile",
            "set",
            "--age",
            "25",
            "--weight",
            "70",
            "--height",
            "175",
            "--sex",
            "M",
            "--activity",
            "moderate",
            "--goal",
            "fat_loss",
        ])
        .assert()
        .success();
}

/// Open the test DB directly through the library.
pub fn open_pool(db_path: &str) -> rfitlogger::db::pool::DbPool {
    rfitlogger::db::initialize::open_db(db_path).expect("open db")
}
