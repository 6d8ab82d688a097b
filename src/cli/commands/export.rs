use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::initialize::open_db;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::messages::info;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        let pool = open_db(&cfg.database)?;
        let path = expand_tilde(file);

        let n = ExportLogic::export(
            &pool,
            &cfg.user,
            *format,
            &path.to_string_lossy(),
            range.as_deref(),
            *force,
        )?;

        if n > 0 {
            info(format!("{} day(s) exported as {}.", n, format.as_str()));
        }
    }

    Ok(())
}
