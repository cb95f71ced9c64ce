mod fs_utils;
mod json_csv;
pub mod logic;
mod model;
mod pdf;
mod pdf_export;
mod xlsx;

pub use logic::ExportLogic;
pub use model::MeasurementExport;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::fmt;
use std::path::Path;

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
    Pdf,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Pdf => "pdf",
        })
    }
}

/// Shared completion message for all export formats.
pub(crate) fn report_export(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}
