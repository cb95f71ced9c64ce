use crate::config::Config;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::load_all_measurements;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::model::MeasurementExport;
use crate::ui::messages::info;

use crate::export::json_csv::{export_csv, export_json};
use crate::export::pdf_export::export_pdf;
use crate::export::xlsx::export_xlsx;
use std::path::PathBuf;

/// High-level export flow shared by every format.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the full history.
    ///
    /// Without `--file` the configured default target is used and silently
    /// overwritten, matching how the export file has always behaved.
    /// An explicit `--file` asks before clobbering unless `force` is set.
    pub fn export(
        pool: &mut DbPool,
        cfg: &Config,
        format: ExportFormat,
        file: Option<&str>,
        force: bool,
    ) -> AppResult<()> {
        let (path_buf, explicit) = match file {
            Some(f) => (PathBuf::from(f), true),
            None => (PathBuf::from(&cfg.export_file), false),
        };
        let path = path_buf.as_path();

        if explicit {
            ensure_writable(path, force)?;
        }

        let rows = load_rows(pool)?;

        if rows.is_empty() {
            info("No records to export.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
            ExportFormat::Xlsx => export_xlsx(&rows, path)?,
            ExportFormat::Pdf => export_pdf(&rows, path, "BMI history")?,
        }

        if let Err(e) = audit(
            &pool.conn,
            "export",
            &path.to_string_lossy(),
            &format!("Exported {} records as {}", rows.len(), format),
        ) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }

        Ok(())
    }
}

fn load_rows(pool: &mut DbPool) -> AppResult<Vec<MeasurementExport>> {
    let measurements = load_all_measurements(&pool.conn)?;
    Ok(measurements.iter().map(MeasurementExport::from).collect())
}
