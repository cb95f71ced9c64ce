use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::history::HistoryLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::History { subject } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        HistoryLogic::show(
            &mut pool,
            subject.as_deref(),
            cfg.chart_width,
            cfg.chart_height,
        )?;
    }
    Ok(())
}
