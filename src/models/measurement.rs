use super::category::Category;
use crate::core::bmi;
use serde::Serialize;

/// One stored BMI measurement. Rows are append-only: once inserted they are
/// never updated or deleted, so `bmi` and `category` always match the
/// weight/height they were derived from.
#[derive(Debug, Clone, Serialize)]
pub struct Measurement {
    pub id: i64,              // ⇔ bmi_data.id (INTEGER PRIMARY KEY)
    pub subject_name: String, // ⇔ bmi_data.subject_name (TEXT)
    pub weight_kg: f64,       // ⇔ bmi_data.weight_kg (REAL)
    pub height_m: f64,        // ⇔ bmi_data.height_m (REAL)
    pub bmi: f64,             // ⇔ bmi_data.bmi (REAL, derived at insert)
    pub category: Category,   // ⇔ bmi_data.category (TEXT, derived at insert)
}

impl Measurement {
    /// Build a not-yet-persisted measurement (`id = 0`).
    /// Derives `bmi` and `category` from the inputs; the storage layer
    /// assigns the real id on insert.
    pub fn new(subject_name: &str, weight_kg: f64, height_m: f64) -> Self {
        let value = bmi::compute(weight_kg, height_m);
        Self {
            id: 0,
            subject_name: subject_name.trim().to_string(),
            weight_kg,
            height_m,
            bmi: value,
            category: bmi::classify(value),
        }
    }

    /// BMI formatted for display (two decimal places).
    pub fn bmi_str(&self) -> String {
        format!("{:.2}", self.bmi)
    }
}
