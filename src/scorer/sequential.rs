use std::path::Path;

use log::{debug, info};

use super::{RecordScorer, ScoreError, ScoreStats, OUTPUT_COLUMNS};
use crate::analyzer::SentimentAnalyzer;
use crate::table::{Cell, TableReader, TableWriter};

impl RecordScorer {
    /// Score the text column of `input_path` and write the results to
    /// `output_path`.
    ///
    /// The input header must contain the configured content column; if it
    /// does not, the run fails before anything is staged for output. Rows
    /// with a blank content cell are skipped entirely. Output rows appear in
    /// input order regardless of batch size, and the output file only
    /// materializes once the whole run has succeeded.
    pub fn score<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<ScoreStats, ScoreError> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            "Scoring {} into {}",
            input_path.display(),
            output_path.display()
        );

        let input_file_size = std::fs::metadata(input_path)?.len();

        let mut reader = TableReader::open(input_path)?;

        // Resolve the content column once, before any output is staged.
        let column = &self.config.content_column;
        let content_index = reader
            .column_index(column)
            .ok_or_else(|| ScoreError::MissingColumn(column.clone()))?;
        debug!("Resolved column {:?} to index {}", column, content_index);

        let analyzer = SentimentAnalyzer::new();
        let mut writer = TableWriter::create(output_path, &self.config.sheet_name)?;

        let header: Vec<Cell> = OUTPUT_COLUMNS.iter().map(|label| Cell::text(*label)).collect();
        writer.write_row(&header)?;

        let batch_size = self.config.batch_size.max(1);
        let progress_interval = self.config.progress_interval.max(1);
        let mut batch: Vec<String> = Vec::with_capacity(batch_size);
        let mut stats = ScoreStats {
            input_file_size,
            ..Default::default()
        };

        while let Some(row) = reader.next_row()? {
            stats.rows_read += 1;

            // Cells past the end of a short row count as blank.
            match row.get(content_index).cloned().flatten() {
                Some(text) => batch.push(text),
                None => stats.rows_skipped += 1,
            }

            if batch.len() >= batch_size {
                flush_batch(&analyzer, &mut writer, &mut batch, &mut stats)?;
            }

            if stats.rows_read % progress_interval == 0 {
                info!(
                    "Progress: {} rows read, {} scored",
                    stats.rows_read, stats.rows_scored
                );
            }
        }

        // Score whatever is left in the final partial batch.
        if !batch.is_empty() {
            flush_batch(&analyzer, &mut writer, &mut batch, &mut stats)?;
        }

        stats.output_file_size = writer.finish()?;

        info!("Scoring complete:");
        info!("  Rows read: {}", stats.rows_read);
        info!("  Rows scored: {}", stats.rows_scored);
        info!("  Rows skipped (blank): {}", stats.rows_skipped);
        info!("  Input size: {} bytes", stats.input_file_size);
        info!("  Output size: {} bytes", stats.output_file_size);

        Ok(stats)
    }
}

fn flush_batch(
    analyzer: &SentimentAnalyzer,
    writer: &mut TableWriter,
    batch: &mut Vec<String>,
    stats: &mut ScoreStats,
) -> Result<(), ScoreError> {
    for text in batch.drain(..) {
        let scores = analyzer.score(&text);
        writer.write_row(&[
            Cell::Text(text),
            Cell::Number(scores.negative),
            Cell::Number(scores.neutral),
            Cell::Number(scores.positive),
            Cell::Number(scores.compound),
        ])?;
        stats.rows_scored += 1;
    }
    Ok(())
}
