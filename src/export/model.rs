use crate::models::measurement::Measurement;
use serde::Serialize;

/// Flat row shape shared by every export format.
#[derive(Serialize, Clone, Debug)]
pub struct MeasurementExport {
    pub id: i64,
    pub subject_name: String,
    pub weight_kg: f64,
    pub height_m: f64,
    pub bmi: f64,
    pub category: String,
}

impl From<&Measurement> for MeasurementExport {
    fn from(m: &Measurement) -> Self {
        Self {
            id: m.id,
            subject_name: m.subject_name.clone(),
            weight_kg: m.weight_kg,
            height_m: m.height_m,
            bmi: m.bmi,
            category: m.category.label().to_string(),
        }
    }
}

/// Header row for CSV / XLSX / PDF, kept byte-for-byte compatible with the
/// historical export file.
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "ID",
        "User Name",
        "Weight (kg)",
        "Height (m)",
        "BMI",
        "Category",
    ]
}

/// Convert one row into display strings (PDF table cells).
pub(crate) fn measurement_to_row(m: &MeasurementExport) -> Vec<String> {
    vec![
        m.id.to_string(),
        m.subject_name.clone(),
        m.weight_kg.to_string(),
        m.height_m.to_string(),
        format!("{:.2}", m.bmi),
        m.category.clone(),
    ]
}

pub(crate) fn measurements_to_table(rows: &[MeasurementExport]) -> Vec<Vec<String>> {
    rows.iter().map(measurement_to_row).collect()
}
