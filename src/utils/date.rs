use chrono::{Datelike, NaiveDate, Weekday};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// `None` → today, otherwise `YYYY-MM-DD`.
pub fn parse_optional_date(s: Option<&str>) -> Option<NaiveDate> {
    match s {
        None => Some(today()),
        Some(raw) if raw.eq_ignore_ascii_case("today") => Some(today()),
        Some(raw) => parse_date(raw),
    }
}

/// Weekday label according to the `show_weekday` config value
/// (`None` | `Short` | `Long`, case-insensitive).
pub fn weekday_str(date: &NaiveDate, mode: &str) -> Option<String> {
    let wd = date.weekday();
    match mode.to_lowercase().as_str() {
        "short" => Some(short_name(wd).to_string()),
        "long" => Some(long_name(wd).to_string()),
        _ => None,
    }
}

fn short_name(wd: Weekday) -> &'static str {
    match wd {
        Weekday::Mon => "Mo",
        Weekday::Tue => "Tu",
        Weekday::Wed => "We",
        Weekday::Thu => "Th",
        Weekday::Fri => "Fr",
        Weekday::Sat => "Sa",
        Weekday::Sun => "Su",
    }
}

fn long_name(wd: Weekday) -> &'static str {
    match wd {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// First and last day of the current month.
pub fn current_month_bounds() -> (NaiveDate, NaiveDate) {
    let t = today();
    let first = t.with_day(1).unwrap_or(t);
    let (y, m) = if t.month() == 12 {
        (t.year() + 1, 1)
    } else {
        (t.year(), t.month() + 1)
    };
    let last = NaiveDate::from_ymd_opt(y, m, 1)
        .and_then(|d| d.pred_opt())
        .unwrap_or(t);
    (first, last)
}
