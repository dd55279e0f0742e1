//! Sentiment scoring pipeline.
//!
//! This module provides the high-level pass that reads a text column out of
//! a tabular file, scores every non-blank value with the VADER analyzer and
//! writes the results to a new table, preserving input order.

use crate::table::TableError;

/// Header labels of the output table, in column order.
pub const OUTPUT_COLUMNS: [&str; 5] = ["Content", "Negative", "Neutral", "Positive", "Compound"];

/// Errors that can occur during a scoring run
#[derive(Debug, thiserror::Error)]
pub enum ScoreError {
    /// Required text column missing from the input header
    #[error("Input table must contain a {0:?} column")]
    MissingColumn(String),

    /// Error reading the input table or writing the output table
    #[error("Table error: {0}")]
    Table(#[from] TableError),

    /// I/O error during file operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration for a scoring run
#[derive(Debug, Clone)]
pub struct ScoreConfig {
    /// Header label of the column holding the text to score.
    /// Matched exactly, case-sensitive.
    pub content_column: String,

    /// Number of text values buffered before scoring and flushing.
    /// A working-set knob only; the output is identical for any value >= 1.
    pub batch_size: usize,

    /// Worksheet name applied to workbook outputs.
    pub sheet_name: String,

    /// Progress log interval (rows read).
    pub progress_interval: usize,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            content_column: "Content".to_string(),
            batch_size: 1000,
            sheet_name: "Sentiment Analysis".to_string(),
            progress_interval: 5000,
        }
    }
}

/// Statistics from a scoring run
#[derive(Debug, Clone, Default)]
pub struct ScoreStats {
    /// Total data rows read from the input table
    pub rows_read: usize,
    /// Rows scored and written to the output table
    pub rows_scored: usize,
    /// Rows skipped because the text cell was blank
    pub rows_skipped: usize,
    /// Size of the input file in bytes
    pub input_file_size: u64,
    /// Size of the output file in bytes
    pub output_file_size: u64,
}

impl std::fmt::Display for ScoreStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} rows read, {} scored, {} skipped, {} bytes written",
            self.rows_read, self.rows_scored, self.rows_skipped, self.output_file_size
        )
    }
}

/// Scorer for the text column of a tabular file
pub struct RecordScorer {
    config: ScoreConfig,
}

impl RecordScorer {
    /// Create a new scorer with default configuration
    pub fn new() -> Self {
        Self {
            config: ScoreConfig::default(),
        }
    }

    /// Create a new scorer with custom configuration
    pub fn with_config(config: ScoreConfig) -> Self {
        Self { config }
    }

    /// Set batch size
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.config.batch_size = batch_size;
        self
    }

    /// Set the label of the text column
    pub fn with_column<S: Into<String>>(mut self, label: S) -> Self {
        self.config.content_column = label.into();
        self
    }

    /// The active configuration
    pub fn config(&self) -> &ScoreConfig {
        &self.config
    }
}

impl Default for RecordScorer {
    fn default() -> Self {
        Self::new()
    }
}

mod sequential;
