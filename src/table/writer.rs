//! Staged writers for the supported table formats.

use std::io::Write;
use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Workbook, Worksheet};
use tempfile::NamedTempFile;

use super::{Cell, TableError, TableFormat};

/// Writer that builds a tabular file and publishes it atomically.
///
/// Rows are staged in a temp file (delimited formats) or an in-memory
/// workbook (xlsx) while the run is in flight. Nothing appears at the
/// destination path until [`TableWriter::finish`] succeeds, at which point
/// the staged output replaces any existing file at that path.
pub struct TableWriter {
    dest: PathBuf,
    backend: Backend,
}

enum Backend {
    Delimited(csv::Writer<NamedTempFile>),
    Workbook {
        workbook: Workbook,
        sheet: Worksheet,
        next_row: u32,
    },
}

impl TableWriter {
    /// Create a writer for the given destination path.
    ///
    /// The format is detected from the extension. `sheet_name` is applied to
    /// the worksheet of workbook outputs and ignored for delimited formats.
    pub fn create<P: AsRef<Path>>(path: P, sheet_name: &str) -> Result<Self, TableError> {
        let path = path.as_ref();
        let backend = match TableFormat::from_path(path)? {
            TableFormat::Xlsx => {
                let mut sheet = Worksheet::new();
                sheet.set_name(sheet_name)?;
                Backend::Workbook {
                    workbook: Workbook::new(),
                    sheet,
                    next_row: 0,
                }
            }
            format => {
                let staging = NamedTempFile::new_in(staging_dir(path))?;
                let writer = csv::WriterBuilder::new()
                    .delimiter(format.delimiter())
                    .from_writer(staging);
                Backend::Delimited(writer)
            }
        };

        Ok(Self {
            dest: path.to_path_buf(),
            backend,
        })
    }

    /// Append one row to the staged output.
    pub fn write_row(&mut self, cells: &[Cell]) -> Result<(), TableError> {
        match &mut self.backend {
            Backend::Delimited(writer) => {
                writer.write_record(cells.iter().map(|cell| cell.to_field()))?;
            }
            Backend::Workbook {
                sheet, next_row, ..
            } => {
                for (column, cell) in cells.iter().enumerate() {
                    let column = column as u16;
                    match cell {
                        Cell::Text(s) => {
                            sheet.write_string(*next_row, column, s.as_str())?;
                        }
                        Cell::Number(n) => {
                            sheet.write_number(*next_row, column, *n)?;
                        }
                    }
                }
                *next_row += 1;
            }
        }
        Ok(())
    }

    /// Publish the staged output to the destination path.
    ///
    /// Returns the output file size in bytes. Replaces any existing file at
    /// the destination.
    pub fn finish(self) -> Result<u64, TableError> {
        let Self { dest, backend } = self;

        match backend {
            Backend::Delimited(mut writer) => {
                writer.flush()?;
                let staging = writer.into_inner().map_err(|e| {
                    TableError::Io(std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))
                })?;
                let size = staging.as_file().metadata()?.len();
                staging.persist(&dest).map_err(|e| TableError::Io(e.error))?;
                Ok(size)
            }
            Backend::Workbook {
                mut workbook,
                sheet,
                ..
            } => {
                workbook.push_worksheet(sheet);
                let buffer = workbook.save_to_buffer()?;

                let mut staging = NamedTempFile::new_in(staging_dir(&dest))?;
                staging.write_all(&buffer)?;
                staging.flush()?;
                staging.persist(&dest).map_err(|e| TableError::Io(e.error))?;
                Ok(buffer.len() as u64)
            }
        }
    }
}

// The temp file must live next to the destination so the final rename never
// crosses a filesystem boundary.
fn staging_dir(dest: &Path) -> &Path {
    match dest.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
