/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Progress colour:
/// 1.0 → green
/// ≥ 0.5 → yellow
/// below → red
pub fn color_for_progress(ratio: f64) -> &'static str {
    if ratio >= 1.0 {
        GREEN
    } else if ratio >= 0.5 {
        YELLOW
    } else {
        RED
    }
}

/// Grey out zero values, leave the rest untouched.
pub fn colorize_optional(value: &str) -> String {
    let v = value.trim();
    if v.is_empty() || v == "0" || v == "0 kcal" || v == "0 min" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
