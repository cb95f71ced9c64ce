use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::parse::parse_positive_real;

/// Record one measurement.
///
/// Both numeric arguments are validated before the database is touched,
/// so a rejected input leaves the stored history unchanged.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        name,
        weight,
        height,
    } = cmd
    {
        let weight_kg = parse_positive_real(weight)?;
        let height_m = parse_positive_real(height)?;

        let mut pool = DbPool::new(&cfg.database)?;

        AddLogic::apply(&mut pool, name, weight_kg, height_m)?;
    }

    Ok(())
}
