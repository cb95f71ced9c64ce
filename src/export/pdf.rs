use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use unicode_width::UnicodeWidthStr;

// A4 portrait, in PostScript points.
const PAGE_WIDTH: f32 = 595.0;
const PAGE_HEIGHT: f32 = 842.0;
const MARGIN: f32 = 48.0;
const ROW_HEIGHT: f32 = 18.0;

const BODY_SIZE: f32 = 9.5;
const HEADER_SIZE: f32 = 10.5;
const TITLE_SIZE: f32 = 13.0;

const HEADER_BAND: (f32, f32, f32) = (0.85, 0.87, 0.90);
const ZEBRA_BAND: (f32, f32, f32) = (0.96, 0.96, 0.96);

/// Paginated A4 table writer built directly on `pdf-writer`.
///
/// Object ids are handed out manually: catalog, pages tree and the shared
/// Helvetica font occupy the first three slots, every page and content
/// stream gets a fresh id after that.
pub struct PdfDocument {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    font_id: Ref,
    next_id: i32,
    page_refs: Vec<Ref>,
    open_content_id: Option<Ref>,
}

impl Default for PdfDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfDocument {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);

        // Single built-in font shared by every page.
        pdf.type1_font(font_id).base_font(Name(b"Helvetica"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            font_id,
            next_id: 4,
            page_refs: Vec::new(),
            open_content_id: None,
        }
    }

    fn next_ref(&mut self) -> Ref {
        let id = Ref::new(self.next_id);
        self.next_id += 1;
        id
    }

    /// Open a new page and return an empty content stream for it.
    fn start_page(&mut self) -> Content {
        let page_id = self.next_ref();
        let content_id = self.next_ref();

        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, PAGE_WIDTH, PAGE_HEIGHT))
            .contents(content_id);
        page.resources().fonts().pair(Name(b"F1"), self.font_id);

        self.open_content_id = Some(content_id);

        Content::new()
    }

    /// Write the finished content stream of the current page.
    fn close_page(&mut self, content: Content) {
        if let Some(id) = self.open_content_id.take() {
            self.pdf.stream(id, &content.finish());
        }
    }

    /// Render a titled table, splitting rows across as many pages as needed.
    /// An empty row set still produces one page with the header band.
    pub fn write_table(&mut self, title: &str, headers: &[&str], rows: &[Vec<String>]) {
        let widths = layout_columns(headers, rows);
        let table_width: f32 = widths.iter().sum();
        let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();

        let mut remaining = rows;
        let mut page_no = 1;

        loop {
            let mut content = self.start_page();
            page_chrome(&mut content, title, page_no);

            let mut y = PAGE_HEIGHT - MARGIN - 28.0;

            fill_band(&mut content, y, table_width, HEADER_BAND);
            draw_row(&mut content, y, &widths, &header_cells, HEADER_SIZE);
            y -= ROW_HEIGHT;

            let capacity = ((y - MARGIN) / ROW_HEIGHT) as usize;
            let take = remaining.len().min(capacity);

            for (i, row) in remaining[..take].iter().enumerate() {
                if i % 2 == 0 {
                    fill_band(&mut content, y, table_width, ZEBRA_BAND);
                }
                draw_row(&mut content, y, &widths, row, BODY_SIZE);
                y -= ROW_HEIGHT;
            }

            self.close_page(content);
            remaining = &remaining[take..];
            page_no += 1;

            if remaining.is_empty() {
                break;
            }
        }
    }

    pub fn save(mut self, path: &Path) -> std::io::Result<()> {
        // Catalog and pages tree are written once, at the very end.
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);

        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.iter().copied());
        drop(pages);

        let bytes = self.pdf.finish();
        File::create(path)?.write_all(&bytes)
    }
}

fn text_at(content: &mut Content, x: f32, y: f32, size: f32, text: &str) {
    content.begin_text();
    content.set_font(Name(b"F1"), size);
    content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
    content.show(Str(text.as_bytes()));
    content.end_text();
}

fn stroke_cell(content: &mut Content, x: f32, y: f32, width: f32) {
    content.save_state();
    content.set_stroke_rgb(0.65, 0.65, 0.65);
    content.rect(x, y, width, ROW_HEIGHT);
    content.stroke();
    content.restore_state();
}

/// Fill a full-width band behind a row (header or zebra stripe).
fn fill_band(content: &mut Content, y: f32, width: f32, (r, g, b): (f32, f32, f32)) {
    content.save_state();
    content.set_fill_rgb(r, g, b);
    content.rect(MARGIN, y, width, ROW_HEIGHT);
    content.fill_nonzero();
    content.restore_state();
}

fn draw_row(content: &mut Content, y: f32, widths: &[f32], cells: &[String], size: f32) {
    let mut x = MARGIN;

    for (cell, width) in cells.iter().zip(widths) {
        text_at(content, x + 4.0, y + 5.0, size, cell);
        stroke_cell(content, x, y, *width);
        x += width;
    }
}

/// Estimate column widths from header and cell display widths, then
/// scale them down uniformly if the table would overflow the page.
fn layout_columns(headers: &[&str], rows: &[Vec<String>]) -> Vec<f32> {
    let mut widths: Vec<f32> = headers
        .iter()
        .map(|h| UnicodeWidthStr::width(*h) as f32 * 6.5)
        .collect();

    for row in rows {
        for (cell, width) in row.iter().zip(widths.iter_mut()) {
            *width = width.max(UnicodeWidthStr::width(cell.as_str()) as f32 * 6.2);
        }
    }

    let usable = PAGE_WIDTH - 2.0 * MARGIN;
    let total: f32 = widths.iter().sum();

    if total > usable {
        let scale = usable / total;
        widths.iter_mut().for_each(|w| *w *= scale);
    }

    widths
}

fn page_chrome(content: &mut Content, title: &str, page_no: usize) {
    text_at(
        content,
        MARGIN,
        PAGE_HEIGHT - MARGIN + 14.0,
        TITLE_SIZE,
        title,
    );

    let label = format!("Page {page_no}");
    text_at(
        content,
        PAGE_WIDTH - MARGIN - 58.0,
        MARGIN - 32.0,
        BODY_SIZE,
        &label,
    );
}
