//! Unified application error type.
//! All modules (engine, db, core, cli, export) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Engine validation
    // ---------------------------
    #[error("Invalid biometrics: {0}")]
    InvalidBiometrics(String),

    #[error("Invalid log amount: {0} (must be greater than zero)")]
    InvalidLogAmount(f64),

    #[error("Invalid macro input: {0}")]
    InvalidMacroInput(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid code: {0}")]
    InvalidCode(String),

    // ---------------------------
    // Lookup errors
    // ---------------------------
    #[error("No profile found for user '{0}'. Run `rfitlogger profile set` first")]
    ProfileNotFound(String),

    #[error("No progress recorded for {0}")]
    NoProgressForDate(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
