use crate::errors::{AppError, AppResult};
use crate::models::category::Category;
use crate::models::measurement::Measurement;
use rusqlite::{Connection, Row, params};

/// Insert one measurement and return the id assigned by SQLite.
/// The write is committed immediately; there is no batching.
pub fn insert_measurement(conn: &Connection, m: &Measurement) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO bmi_data (subject_name, weight_kg, height_m, bmi, category)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            m.subject_name,
            m.weight_kg,
            m.height_m,
            m.bmi,
            m.category.to_db_str(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Load every stored measurement in insertion order.
pub fn load_all_measurements(conn: &Connection) -> AppResult<Vec<Measurement>> {
    let mut stmt = conn.prepare(
        "SELECT id, subject_name, weight_kg, height_m, bmi, category
         FROM bmi_data
         ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn map_row(row: &Row) -> rusqlite::Result<Measurement> {
    let category_str: String = row.get("category")?;
    let category = Category::from_db_str(&category_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidCategory(category_str.clone())),
        )
    })?;

    Ok(Measurement {
        id: row.get("id")?,
        subject_name: row.get("subject_name")?,
        weight_kg: row.get("weight_kg")?,
        height_m: row.get("height_m")?,
        bmi: row.get("bmi")?,
        category,
    })
}

/// Count stored measurements (used by tests and `config --check`).
pub fn count_measurements(conn: &Connection) -> AppResult<i64> {
    let n: i64 = conn.query_row("SELECT COUNT(*) FROM bmi_data", [], |row| row.get(0))?;
    Ok(n)
}
