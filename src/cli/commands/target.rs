use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::macros::compute_macros;
use crate::core::profile::ProfileLogic;
use crate::db::initialize::open_db;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::formatting::{kcal, minutes};
use crate::utils::table::{Column, Table};

/// Handle `target` and `macros`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let pool = open_db(&cfg.database)?;

    match cmd {
        Commands::Target => {
            let s = ProfileLogic::summary(&pool, &cfg.user)?;
            header(format!("Daily target for '{}'", cfg.user));
            println!("Calories : {}", kcal(s.target.calorie_target));
            println!("Workout  : {}", minutes(s.target.workout_minutes_target));
        }
        Commands::Macros { calories } => {
            let s = ProfileLogic::summary(&pool, &cfg.user)?;
            let target = calories.unwrap_or(s.target.calorie_target);
            let m = compute_macros(target, s.profile.biometrics.weight_kg)?;

            header(format!("Macros for {}", kcal(m.calorie_target)));

            let mut table = Table::new(vec![
                Column::left("Nutrient", 10),
                Column::right("Grams", 8),
                Column::right("kcal", 8),
                Column::right("Share", 7),
            ]);
            for (name, g, k, pct) in [
                ("Protein", m.protein_g, m.protein_kcal, m.protein_percent),
                ("Fat", m.fat_g, m.fat_kcal, m.fat_percent),
                ("Carbs", m.carbs_g, m.carbs_kcal, m.carbs_percent),
                ("Fiber", m.fiber_g, m.fiber_kcal, m.fiber_percent),
            ] {
                table.add_row(vec![
                    name.to_string(),
                    format!("{g:.1}"),
                    format!("{k:.0}"),
                    format!("{pct:.1}%"),
                ]);
            }
            print!("{}", table.render());
        }
        _ => {}
    }

    Ok(())
}
