use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::track::TrackLogic;
use crate::db::initialize::open_db;
use crate::errors::AppResult;
use crate::export::range::parse_range;
use crate::ui::messages::{header, info};
use crate::utils::date;
use crate::utils::formatting::{percent, separator};
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period, now } = cmd {
        let pool = open_db(&cfg.database)?;

        let bounds = if *now {
            let t = date::today();
            Some((t, t))
        } else {
            resolve_period(period.as_deref())?
        };

        let days = TrackLogic::days(&pool, &cfg.user, bounds)?;

        if days.is_empty() {
            info("No tracked days for the selected period.");
            return Ok(());
        }

        header(format!("Tracked days for '{}'", cfg.user));

        let mut table = Table::new(vec![
            Column::left("Date", 16),
            Column::right("Eaten", 8),
            Column::right("Target", 8),
            Column::right("Cal%", 5),
            Column::right("Workout", 8),
            Column::right("Target", 7),
            Column::right("Wk%", 5),
        ]);

        let mut total_eaten = 0.0;
        let mut total_workout = 0.0;

        for p in &days {
            let label = match date::weekday_str(&p.date, &cfg.show_weekday) {
                Some(wd) => format!("{} {}", p.date, wd),
                None => p.date.to_string(),
            };
            table.add_row(vec![
                label,
                format!("{:.0}", p.calories_consumed),
                format!("{:.0}", p.calories_target),
                percent(p.calories_progress()),
                format!("{:.0}", p.workout_minutes_completed),
                format!("{:.0}", p.workout_minutes_target),
                percent(p.workout_progress()),
            ]);
            total_eaten += p.calories_consumed;
            total_workout += p.workout_minutes_completed;
        }

        print!("{}", table.render());
        println!("{}", separator(&cfg.separator_char, 72));

        let n = days.len() as f64;
        println!(
            "Days: {} | Avg eaten: {:.0} kcal | Avg workout: {:.0} min",
            days.len(),
            total_eaten / n,
            total_workout / n
        );
    }

    Ok(())
}

/// `None` → current month, `all` → everything, otherwise a range expression.
fn resolve_period(period: Option<&str>) -> AppResult<Option<(NaiveDate, NaiveDate)>> {
    match period {
        None => Ok(Some(date::current_month_bounds())),
        Some(p) if p.eq_ignore_ascii_case("all") => Ok(None),
        Some(p) => Ok(Some(parse_range(p)?)),
    }
}
