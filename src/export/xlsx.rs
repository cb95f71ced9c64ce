use crate::errors::{AppError, AppResult};
use crate::export::model::get_headers;
use crate::export::{MeasurementExport, report_export};
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Export XLSX with styling and auto column widths.
pub(crate) fn export_xlsx(rows: &[MeasurementExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    if rows.is_empty() {
        worksheet
            .write(0, 0, "No data available")
            .map_err(to_export_error)?;
        workbook.save(path_str(path)?).map_err(to_export_error)?;
        report_export("XLSX (empty dataset)", path);
        return Ok(());
    }

    let headers = get_headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_export_error)?;
    }

    worksheet.set_freeze_panes(1, 0).ok();

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    for (row_index, m) in rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band = if row_index % 2 == 0 { band1 } else { band2 };

        let num_fmt = Format::new()
            .set_align(FormatAlign::Right)
            .set_background_color(band)
            .set_pattern(FormatPattern::Solid)
            .set_border(FormatBorder::Thin);

        let text_fmt = Format::new()
            .set_background_color(band)
            .set_pattern(FormatPattern::Solid)
            .set_border(FormatBorder::Thin);

        let category_fmt = Format::new()
            .set_background_color(category_color(&m.category))
            .set_pattern(FormatPattern::Solid)
            .set_border(FormatBorder::Thin);

        worksheet
            .write_with_format(row, 0, m.id, &num_fmt)
            .map_err(to_export_error)?;
        worksheet
            .write_with_format(row, 1, m.subject_name.as_str(), &text_fmt)
            .map_err(to_export_error)?;
        worksheet
            .write_with_format(row, 2, m.weight_kg, &num_fmt)
            .map_err(to_export_error)?;
        worksheet
            .write_with_format(row, 3, m.height_m, &num_fmt)
            .map_err(to_export_error)?;
        worksheet
            .write_with_format(row, 4, m.bmi, &num_fmt)
            .map_err(to_export_error)?;
        worksheet
            .write_with_format(row, 5, m.category.as_str(), &category_fmt)
            .map_err(to_export_error)?;

        let cells = [
            m.id.to_string(),
            m.subject_name.clone(),
            m.weight_kg.to_string(),
            m.height_m.to_string(),
            format!("{:.2}", m.bmi),
            m.category.clone(),
        ];
        for (col, value) in cells.iter().enumerate() {
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_export_error)?;
    }

    workbook.save(path_str(path)?).map_err(to_export_error)?;

    report_export("XLSX", path);
    Ok(())
}

/// Fill color per category band.
fn category_color(label: &str) -> Color {
    match label {
        "Underweight" => Color::RGB(0xFFF2CC),
        "Normal weight" => Color::RGB(0xD9EAD3),
        "Overweight" => Color::RGB(0xFCE5CD),
        _ => Color::RGB(0xF4CCCC),
    }
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}

fn path_str(path: &Path) -> AppResult<&str> {
    path.to_str()
        .ok_or_else(|| AppError::Export("invalid path".to_string()))
}
