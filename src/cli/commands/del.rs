use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::track::TrackLogic;
use crate::db::initialize::open_db;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{confirm, info, success};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del {
        date: date_str,
        yes,
    } = cmd
    {
        let d = date::parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.into()))?;

        if !*yes
            && !confirm(&format!(
                "Delete the tracked day {} for user '{}'? This action is irreversible.",
                d, cfg.user
            ))?
        {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut pool = open_db(&cfg.database)?;
        TrackLogic::delete_day(&mut pool, &cfg.user, d)?;
        success(format!("Day {} has been deleted.", d));
    }

    Ok(())
}
