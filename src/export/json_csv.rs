use crate::errors::{AppError, AppResult};
use crate::export::model::get_headers;
use crate::export::{MeasurementExport, report_export};
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json(rows: &[MeasurementExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(rows)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    report_export("JSON", path);
    Ok(())
}

/// Export CSV with the historical header row.
pub(crate) fn export_csv(rows: &[MeasurementExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    wtr.write_record(get_headers())
        .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;

    for item in rows {
        // Raw stored values, not the 2-decimal display rendering.
        wtr.write_record([
            item.id.to_string(),
            item.subject_name.clone(),
            item.weight_kg.to_string(),
            item.height_m.to_string(),
            item.bmi.to_string(),
            item.category.clone(),
        ])
        .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;

    report_export("CSV", path);
    Ok(())
}
