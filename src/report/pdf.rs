use std::{
    fs::File,
    io::Write,
    iter,
    path::Path,
};

use printpdf::{BuiltinFont, Mm, PdfDocument};

use crate::{
    domain::Movement,
    errors::{FailurePolicy, Result},
    utils::ensure_parent_dir,
};

use super::{layout, Block, ReportDocument, TableBlock};

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 15.0;
const CONTENT_WIDTH_MM: f32 = PAGE_WIDTH_MM - 2.0 * MARGIN_MM;
const CELL_PADDING_MM: f32 = 2.0;

pub const TITLE_SIZE: f32 = 14.0;
pub const BODY_SIZE: f32 = 10.0;
pub const TABLE_SIZE: f32 = 8.0;

const PT_TO_MM: f32 = 0.3528;
const LINE_SPACING: f32 = 1.5;
// Average Helvetica glyph advance, as a fraction of the font size.
const AVG_GLYPH_EM: f32 = 0.55;
const MIN_COLUMN_CHARS: usize = 4;
const ELLIPSIS: &str = "...";

/// A single positioned line of text; coordinates are millimetres from the
/// bottom-left corner of the page.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub size: f32,
    pub x: f32,
    pub y: f32,
    pub bold: bool,
}

pub type PageLayout = Vec<TextRun>;

/// Paginates report documents and writes them as PDF files.
pub struct PdfRenderer;

impl PdfRenderer {
    /// Positions every line of `document` on A4 pages.
    pub fn plan(document: &ReportDocument) -> Vec<PageLayout> {
        let mut planner = Planner::new();
        planner.title(&document.title);
        for block in &document.blocks {
            match block {
                Block::Paragraph(text) => planner.paragraph(text),
                Block::Table(table) => planner.table(table),
            }
        }
        planner.pages
    }

    /// Renders `document` into an in-memory PDF.
    pub fn render(document: &ReportDocument) -> Result<Vec<u8>> {
        let pages = Self::plan(document);
        let (pdf, first_page, first_layer) = PdfDocument::new(
            document.title.as_str(),
            Mm(PAGE_WIDTH_MM),
            Mm(PAGE_HEIGHT_MM),
            "Page 1",
        );
        let regular = pdf.add_builtin_font(BuiltinFont::Helvetica)?;
        let bold = pdf.add_builtin_font(BuiltinFont::HelveticaBold)?;

        for (idx, runs) in pages.iter().enumerate() {
            let layer = if idx == 0 {
                pdf.get_page(first_page).get_layer(first_layer)
            } else {
                let (page, layer) = pdf.add_page(
                    Mm(PAGE_WIDTH_MM),
                    Mm(PAGE_HEIGHT_MM),
                    format!("Page {}", idx + 1),
                );
                pdf.get_page(page).get_layer(layer)
            };
            for run in runs {
                let font = if run.bold { &bold } else { &regular };
                layer.use_text(run.text.as_str(), run.size, Mm(run.x), Mm(run.y), font);
            }
        }

        Ok(pdf.save_to_bytes()?)
    }

    /// Renders `document` and writes it to `path`, creating parent directories.
    pub fn write(document: &ReportDocument, path: &Path) -> Result<()> {
        ensure_parent_dir(path)?;
        let bytes = Self::render(document)?;
        let mut file = File::create(path)?;
        file.write_all(&bytes)?;
        file.flush()?;
        Ok(())
    }
}

/// Generates movement reports, applying a [`FailurePolicy`] to write failures.
#[derive(Debug, Clone, Copy, Default)]
pub struct MovementPdfGenerator {
    policy: FailurePolicy,
}

impl MovementPdfGenerator {
    pub fn new(policy: FailurePolicy) -> Self {
        Self { policy }
    }

    pub fn generate_movement_pdf(&self, destination: &Path, movement: &Movement) -> Result<()> {
        self.write(destination, &layout::movement_detail(movement))
    }

    pub fn generate_movements_pdf(&self, destination: &Path, movements: &[Movement]) -> Result<()> {
        self.write(destination, &layout::movement_list(movements))
    }

    fn write(&self, destination: &Path, document: &ReportDocument) -> Result<()> {
        let outcome = PdfRenderer::write(document, destination);
        if outcome.is_ok() {
            tracing::info!("PDF generated: {}", destination.display());
        }
        self.policy
            .settle("PDF generation", destination, outcome, || ())
    }
}

struct Planner {
    pages: Vec<PageLayout>,
    cursor: f32,
}

impl Planner {
    fn new() -> Self {
        Self {
            pages: vec![Vec::new()],
            cursor: PAGE_HEIGHT_MM - MARGIN_MM,
        }
    }

    fn fits(&self, height: f32) -> bool {
        self.cursor - height >= MARGIN_MM
    }

    fn break_page(&mut self) {
        self.pages.push(Vec::new());
        self.cursor = PAGE_HEIGHT_MM - MARGIN_MM;
    }

    /// Advances one line of `size`, breaking the page if needed, and returns its baseline.
    fn next_line(&mut self, size: f32) -> f32 {
        let height = line_height(size);
        if !self.fits(height) {
            self.break_page();
        }
        self.cursor -= height;
        self.cursor
    }

    fn push(&mut self, text: String, size: f32, x: f32, y: f32, bold: bool) {
        if let Some(page) = self.pages.last_mut() {
            page.push(TextRun {
                text,
                size,
                x,
                y,
                bold,
            });
        }
    }

    fn title(&mut self, title: &str) {
        let y = self.next_line(TITLE_SIZE);
        self.push(title.to_string(), TITLE_SIZE, MARGIN_MM, y, true);
        self.cursor -= line_height(BODY_SIZE) / 2.0;
    }

    fn paragraph(&mut self, text: &str) {
        for line in wrap_text(text, chars_that_fit(CONTENT_WIDTH_MM, BODY_SIZE)) {
            let y = self.next_line(BODY_SIZE);
            self.push(line, BODY_SIZE, MARGIN_MM, y, false);
        }
    }

    fn table(&mut self, table: &TableBlock) {
        let widths = column_widths(table);
        let row_height = line_height(TABLE_SIZE);
        if !self.fits(row_height * 2.0) {
            self.break_page();
        }
        self.row(&table.headers, &widths, true);
        for row in &table.rows {
            if !self.fits(row_height) {
                self.break_page();
                self.row(&table.headers, &widths, true);
            }
            self.row(row, &widths, false);
        }
    }

    fn row(&mut self, cells: &[String], widths: &[f32], bold: bool) {
        let y = self.next_line(TABLE_SIZE);
        let mut x = MARGIN_MM;
        for (idx, width) in widths.iter().enumerate() {
            let cell = cells.get(idx).map(String::as_str).unwrap_or("");
            let capacity = chars_that_fit(width - CELL_PADDING_MM, TABLE_SIZE);
            self.push(truncate_text(cell, capacity), TABLE_SIZE, x, y, bold);
            x += width;
        }
    }
}

fn line_height(size: f32) -> f32 {
    size * PT_TO_MM * LINE_SPACING
}

fn chars_that_fit(width_mm: f32, size: f32) -> usize {
    let glyph = size * PT_TO_MM * AVG_GLYPH_EM;
    ((width_mm / glyph).floor() as usize).max(1)
}

/// Splits the content width across columns in proportion to their widest cell.
fn column_widths(table: &TableBlock) -> Vec<f32> {
    let chars: Vec<usize> = (0..table.column_count())
        .map(|idx| {
            let header = table.headers[idx].chars().count();
            table
                .rows
                .iter()
                .filter_map(|row| row.get(idx))
                .map(|cell| cell.chars().count())
                .chain(iter::once(header))
                .max()
                .unwrap_or(0)
                .max(MIN_COLUMN_CHARS)
        })
        .collect();
    let total: usize = chars.iter().sum();
    chars
        .iter()
        .map(|count| CONTENT_WIDTH_MM * *count as f32 / total as f32)
        .collect()
}

fn truncate_text(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width <= ELLIPSIS.len() {
        return text.chars().take(width).collect();
    }
    let mut truncated: String = text.chars().take(width - ELLIPSIS.len()).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}

/// Greedy word wrap; words longer than a line are split.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            lines.push(word.drain(..width).collect());
        }
        if word.is_empty() {
            continue;
        }
        let needed = current.chars().count() + usize::from(!current.is_empty()) + word.len();
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.extend(word);
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}
