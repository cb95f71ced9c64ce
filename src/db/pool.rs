//! SQLite connection wrapper (lightweight for CLI usage).
//!
//! One `DbPool` is opened per command and dropped when the command returns,
//! so the storage file is never held across user actions.

use rusqlite::{Connection, Result};
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        Ok(Self { conn })
    }
}
