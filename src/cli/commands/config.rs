use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::count_measurements;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if *print_config {
            let yaml = serde_yaml::to_string(cfg)
                .map_err(|e| AppError::Config(format!("cannot render configuration: {e}")))?;

            println!("📄 Current configuration:\n");
            print!("{yaml}");
        }

        if *check {
            check_config(cfg)?;
        }
    }

    Ok(())
}

/// Report whether the configured paths exist and the database opens.
fn check_config(cfg: &Config) -> AppResult<()> {
    let config_path = Config::config_file();

    if config_path.exists() {
        success(format!("Config file found: {}", config_path.display()));
    } else {
        warning(format!(
            "Config file missing: {} (defaults are in use)",
            config_path.display()
        ));
    }

    let db_path = Path::new(&cfg.database);
    if !db_path.exists() {
        warning(format!(
            "Database not found: {} (run `init` first)",
            db_path.display()
        ));
        return Ok(());
    }

    let pool = DbPool::new(&cfg.database)?;
    let n = count_measurements(&pool.conn)?;

    success(format!("Database opens: {}", db_path.display()));
    info(format!("Stored measurements: {}", n));

    Ok(())
}
