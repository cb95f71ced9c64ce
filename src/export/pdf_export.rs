use crate::errors::{AppError, AppResult};
use crate::export::model::{get_headers, measurements_to_table};
use crate::export::pdf::PdfDocument;
use crate::export::{MeasurementExport, report_export};
use crate::ui::messages::info;
use std::io;
use std::path::Path;

/// Export PDF: one paginated table under a document title.
pub(crate) fn export_pdf(rows: &[MeasurementExport], path: &Path, title: &str) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let headers = get_headers();
    let table = measurements_to_table(rows);

    let mut pdf = PdfDocument::new();
    pdf.write_table(title, &headers, &table);

    pdf.save(path)
        .map_err(|e| AppError::from(io::Error::other(format!("PDF export error: {e}"))))?;

    report_export("PDF", path);
    Ok(())
}
