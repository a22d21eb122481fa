//! Movement reports: a format-neutral layout model and the PDF writer that
//! renders it.

pub mod layout;
pub mod pdf;

use std::fmt::Display;

use chrono::NaiveDateTime;

pub use layout::{movement_detail, movement_list, LIST_HEADERS};
pub use pdf::{MovementPdfGenerator, PdfRenderer};

/// Placeholder rendered for any absent value.
pub const NOT_AVAILABLE: &str = "N/A";

/// `dd/MM/yyyy HH:mm:ss`.
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Renders an optional value, mapping `None` to [`NOT_AVAILABLE`].
pub fn render_optional<T: Display + ?Sized>(value: Option<&T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Formats a timestamp with [`TIMESTAMP_FORMAT`], or [`NOT_AVAILABLE`] when absent.
pub fn format_timestamp(value: Option<&NaiveDateTime>) -> String {
    render_optional(value.map(|ts| ts.format(TIMESTAMP_FORMAT)).as_ref())
}

/// A report ready to be written: a title followed by content blocks.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportDocument {
    pub title: String,
    pub blocks: Vec<Block>,
}

impl ReportDocument {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            blocks: Vec::new(),
        }
    }

    pub fn paragraph(mut self, text: impl Into<String>) -> Self {
        self.blocks.push(Block::Paragraph(text.into()));
        self
    }

    pub fn table(mut self, table: TableBlock) -> Self {
        self.blocks.push(Block::Table(table));
        self
    }

    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Paragraph(text) => Some(text.as_str()),
            Block::Table(_) => None,
        })
    }

    pub fn tables(&self) -> impl Iterator<Item = &TableBlock> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Table(table) => Some(table),
            Block::Paragraph(_) => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Paragraph(String),
    Table(TableBlock),
}

/// Header row plus data rows; every row has one cell per header.
#[derive(Debug, Clone, PartialEq)]
pub struct TableBlock {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableBlock {
    pub fn new<S: Into<String>>(headers: impl IntoIterator<Item = S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }
}
