use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database with the measurement and log tables
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;

    println!("⚙️  Initializing rBMIlogger…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", db_path.display());

    let conn = Connection::open(&db_path)?;

    init_db(&conn)?;

    println!("✅ Database initialized at {}", db_path.display());

    if let Err(e) = log::audit(
        &conn,
        "init",
        &db_path.to_string_lossy(),
        "Database initialized",
    ) {
        eprintln!("⚠️ Failed to write internal log: {}", e);
    }

    println!("🎉 rBMIlogger initialization completed!");
    Ok(())
}
