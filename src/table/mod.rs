//! Tabular file I/O.
//!
//! This module provides a thin row-oriented abstraction over the supported
//! spreadsheet formats: delimited text (CSV/TSV via the `csv` crate) and
//! Excel workbooks (read via `calamine`, written via `rust_xlsxwriter`).
//! Readers pull one row at a time; writers stage their output in a temp file
//! and only move it to the destination path on [`TableWriter::finish`], so a
//! failed run never leaves a partial output file behind.

use std::path::Path;

mod error;
mod reader;
mod writer;

pub use error::TableError;
pub use reader::TableReader;
pub use writer::TableWriter;

/// Tabular file format, detected from the path extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    /// Comma-separated values.
    Csv,
    /// Tab-separated values.
    Tsv,
    /// Excel workbook.
    Xlsx,
}

impl TableFormat {
    /// Detect the format of a table file from its extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, TableError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "csv" => Ok(TableFormat::Csv),
            "tsv" | "tab" => Ok(TableFormat::Tsv),
            "xlsx" | "xlsm" => Ok(TableFormat::Xlsx),
            _ => Err(TableError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Field delimiter for delimited-text formats.
    pub(crate) fn delimiter(self) -> u8 {
        match self {
            TableFormat::Tsv => b'\t',
            _ => b',',
        }
    }
}

/// A single output cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Textual cell.
    Text(String),
    /// Numeric cell.
    Number(f64),
}

impl Cell {
    /// Build a textual cell.
    pub fn text<S: Into<String>>(value: S) -> Self {
        Cell::Text(value.into())
    }

    /// Build a numeric cell.
    pub fn number(value: f64) -> Self {
        Cell::Number(value)
    }

    /// Render the cell as a plain string, as written to delimited formats.
    pub(crate) fn to_field(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Number(n) => n.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_detection() {
        assert_eq!(TableFormat::from_path("data.csv").unwrap(), TableFormat::Csv);
        assert_eq!(TableFormat::from_path("data.CSV").unwrap(), TableFormat::Csv);
        assert_eq!(TableFormat::from_path("data.tsv").unwrap(), TableFormat::Tsv);
        assert_eq!(
            TableFormat::from_path("/some/dir/report.xlsx").unwrap(),
            TableFormat::Xlsx
        );
    }

    #[test]
    fn test_unknown_extension_rejected() {
        assert!(matches!(
            TableFormat::from_path("notes.txt"),
            Err(TableError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            TableFormat::from_path("no_extension"),
            Err(TableError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_cell_rendering() {
        assert_eq!(Cell::text("hello").to_field(), "hello");
        assert_eq!(Cell::number(0.25).to_field(), "0.25");
        assert_eq!(Cell::number(-0.5719).to_field(), "-0.5719");
    }
}
