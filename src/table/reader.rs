//! Row-pulling readers for the supported table formats.

use std::fs::File;
use std::path::Path;

use calamine::{open_workbook, Data, Reader, Xlsx};

use super::{TableError, TableFormat};

/// Streaming reader over a tabular file.
///
/// The first row of the file is the header; subsequent rows are pulled one
/// at a time with [`TableReader::next_row`]. Blank cells come back as `None`
/// so callers can distinguish an empty value from empty text.
///
/// The delimited-text backend streams records from disk. The workbook
/// backend iterates the first worksheet of the file; `calamine` materializes
/// the sheet range up front, so only delimited inputs are truly streamed.
pub struct TableReader {
    header: Vec<String>,
    rows: Rows,
}

enum Rows {
    Delimited(csv::StringRecordsIntoIter<File>),
    Sheet(std::vec::IntoIter<Vec<Option<String>>>),
}

impl TableReader {
    /// Open a tabular file, detecting the format from its extension.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, TableError> {
        let path = path.as_ref();
        match TableFormat::from_path(path)? {
            TableFormat::Xlsx => Self::open_workbook(path),
            format => Self::open_delimited(path, format.delimiter()),
        }
    }

    fn open_delimited(path: &Path, delimiter: u8) -> Result<Self, TableError> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .flexible(true)
            .has_headers(true)
            .from_path(path)?;

        let header: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

        Ok(Self {
            header,
            rows: Rows::Delimited(reader.into_records()),
        })
    }

    fn open_workbook(path: &Path) -> Result<Self, TableError> {
        let mut workbook: Xlsx<_> = open_workbook(path)?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| TableError::InvalidStructure("workbook has no worksheets".to_string()))??;

        let mut rows: Vec<Vec<Option<String>>> = range
            .rows()
            .map(|row| row.iter().map(cell_to_text).collect())
            .collect();

        let header = if rows.is_empty() {
            Vec::new()
        } else {
            rows.remove(0)
                .into_iter()
                .map(|cell| cell.unwrap_or_default())
                .collect()
        };

        Ok(Self {
            header,
            rows: Rows::Sheet(rows.into_iter()),
        })
    }

    /// Header labels, in column order.
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Positional index of the column with the given label (exact match).
    pub fn column_index(&self, label: &str) -> Option<usize> {
        self.header.iter().position(|h| h == label)
    }

    /// Pull the next data row, or `None` once the table is exhausted.
    ///
    /// Short rows are returned as-is; callers indexing past the end of a row
    /// should treat the missing cell as blank.
    pub fn next_row(&mut self) -> Result<Option<Vec<Option<String>>>, TableError> {
        match &mut self.rows {
            Rows::Delimited(records) => match records.next() {
                Some(record) => {
                    let record = record?;
                    let cells = record
                        .iter()
                        .map(|field| {
                            if field.is_empty() {
                                None
                            } else {
                                Some(field.to_string())
                            }
                        })
                        .collect();
                    Ok(Some(cells))
                }
                None => Ok(None),
            },
            Rows::Sheet(rows) => Ok(rows.next()),
        }
    }
}

fn cell_to_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::String(s) if s.is_empty() => None,
        Data::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
