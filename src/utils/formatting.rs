//! Formatting utilities used for CLI outputs.

/// `1234.0` → `"1234 kcal"`; fractional amounts keep one decimal.
pub fn kcal(value: f64) -> String {
    format!("{} kcal", trim_number(value))
}

pub fn minutes(value: f64) -> String {
    format!("{} min", trim_number(value))
}

pub fn percent(ratio: f64) -> String {
    format!("{:.0}%", ratio * 100.0)
}

fn trim_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

/// Fixed-width bar for a ratio in [0, 1], e.g. `[#####-----]`.
pub fn progress_bar(ratio: f64, width: usize) -> String {
    let filled = ((ratio.clamp(0.0, 1.0)) * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

pub fn separator(ch: &str, width: usize) -> String {
    let c = ch.chars().next().unwrap_or('-');
    std::iter::repeat_n(c, width).collect()
}
