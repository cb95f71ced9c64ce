use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database.
/// Idempotent: every table is created with IF NOT EXISTS, so this is safe
/// to call on every program start. The schema never migrates.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    ensure_bmi_data_table(conn)?;
    ensure_log_table(conn)?;
    Ok(())
}

/// Ensure that the `bmi_data` table exists.
fn ensure_bmi_data_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS bmi_data (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            subject_name TEXT NOT NULL,
            weight_kg    REAL NOT NULL,
            height_m     REAL NOT NULL,
            bmi          REAL NOT NULL,
            category     TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Ensure that the internal audit `log` table exists.
fn ensure_log_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}
