use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{Connection, params};

/// Append one row to the internal `log` table.
/// Commands write entries best-effort; a failed write is reported by the
/// caller and never aborts the user action.
pub fn audit(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
        params![Local::now().to_rfc3339(), operation, target, message],
    )?;

    Ok(())
}
