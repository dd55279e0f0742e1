/// Errors that can occur while reading or writing tabular files
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// I/O error during file operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV/TSV parsing or writing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Error reading an Excel workbook
    #[error("Workbook read error: {0}")]
    WorkbookRead(#[from] calamine::XlsxError),

    /// Error writing an Excel workbook
    #[error("Workbook write error: {0}")]
    WorkbookWrite(#[from] rust_xlsxwriter::XlsxError),

    /// File extension does not map to a supported table format
    #[error("Unsupported table format: {0}")]
    UnsupportedFormat(String),

    /// Invalid table file structure
    #[error("Invalid table structure: {0}")]
    InvalidStructure(String),
}
