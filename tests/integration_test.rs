//! Integration tests for sentisheet
//!
//! These tests verify the full pipeline from input table to scored output.

use sentisheet::analyzer::SentimentAnalyzer;
use sentisheet::scorer::{RecordScorer, ScoreError, OUTPUT_COLUMNS};
use sentisheet::table::{Cell, TableReader, TableWriter};
use std::fs;
use tempfile::tempdir;

fn read_csv(path: &std::path::Path) -> (Vec<String>, Vec<Vec<String>>) {
    let mut reader = csv::Reader::from_path(path).unwrap();
    let header = reader.headers().unwrap().iter().map(str::to_string).collect();
    let rows = reader
        .records()
        .map(|r| r.unwrap().iter().map(str::to_string).collect())
        .collect();
    (header, rows)
}

/// The three-row scenario: one positive row, one blank row, one negative row
#[test]
fn test_score_csv_end_to_end() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("input.csv");
    let output = dir.path().join("output.csv");
    fs::write(&input, "ID,Content\n1,I love this\n2,\n3,This is terrible\n").unwrap();

    let stats = RecordScorer::new().score(&input, &output).unwrap();

    assert_eq!(stats.rows_read, 3);
    assert_eq!(stats.rows_scored, 2);
    assert_eq!(stats.rows_skipped, 1);

    let (header, rows) = read_csv(&output);
    assert_eq!(header, OUTPUT_COLUMNS);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0][0], "I love this");
    assert_eq!(rows[1][0], "This is terrible");

    // The four score cells must equal the analyzer's output for the same text
    let analyzer = SentimentAnalyzer::new();
    for row in &rows {
        let expected = analyzer.score(&row[0]);
        assert_eq!(row[1].parse::<f64>().unwrap(), expected.negative);
        assert_eq!(row[2].parse::<f64>().unwrap(), expected.neutral);
        assert_eq!(row[3].parse::<f64>().unwrap(), expected.positive);
        assert_eq!(row[4].parse::<f64>().unwrap(), expected.compound);
    }
}

#[test]
fn test_header_only_input() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("empty.csv");
    let output = dir.path().join("empty_out.csv");
    fs::write(&input, "ID,Content\n").unwrap();

    let stats = RecordScorer::new().score(&input, &output).unwrap();

    assert_eq!(stats.rows_read, 0);
    assert_eq!(stats.rows_scored, 0);

    let (header, rows) = read_csv(&output);
    assert_eq!(header, OUTPUT_COLUMNS);
    assert!(rows.is_empty());
}

#[test]
fn test_missing_column_produces_no_output() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("input.csv");
    let output = dir.path().join("output.csv");
    fs::write(&input, "ID,Text\n1,hello there\n").unwrap();

    let result = RecordScorer::new().score(&input, &output);

    assert!(matches!(result, Err(ScoreError::MissingColumn(c)) if c == "Content"));
    assert!(!output.exists());
}

#[test]
fn test_order_preserved_across_batches() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("input.csv");
    let output = dir.path().join("output.csv");

    let mut contents = String::from("Content\n");
    for i in 0..23 {
        contents.push_str(&format!("row number {}\n", i));
    }
    fs::write(&input, &contents).unwrap();

    // Batch size smaller than the row count forces several flushes
    let stats = RecordScorer::new()
        .with_batch_size(5)
        .score(&input, &output)
        .unwrap();
    assert_eq!(stats.rows_scored, 23);

    let (_, rows) = read_csv(&output);
    for (i, row) in rows.iter().enumerate() {
        assert_eq!(row[0], format!("row number {}", i));
    }
}

#[test]
fn test_batch_size_invariance() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("input.csv");

    let mut contents = String::from("ID,Content\n");
    for i in 0..50 {
        if i % 7 == 0 {
            contents.push_str(&format!("{},\n", i));
        } else if i % 2 == 0 {
            contents.push_str(&format!("{},this is wonderful news\n", i));
        } else {
            contents.push_str(&format!("{},a truly awful outcome\n", i));
        }
    }
    fs::write(&input, &contents).unwrap();

    let small = dir.path().join("small_batch.csv");
    let large = dir.path().join("large_batch.csv");

    RecordScorer::new().with_batch_size(1).score(&input, &small).unwrap();
    RecordScorer::new().with_batch_size(10_000).score(&input, &large).unwrap();

    assert_eq!(fs::read(&small).unwrap(), fs::read(&large).unwrap());
}

#[test]
fn test_custom_column_label() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("input.csv");
    let output = dir.path().join("output.csv");
    fs::write(&input, "Body,Author\nnice work,alice\n").unwrap();

    let stats = RecordScorer::new()
        .with_column("Body")
        .score(&input, &output)
        .unwrap();

    assert_eq!(stats.rows_scored, 1);
    let (_, rows) = read_csv(&output);
    assert_eq!(rows[0][0], "nice work");
}

#[test]
fn test_xlsx_input_and_output() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("input.xlsx");
    let output = dir.path().join("output.xlsx");

    // Build an xlsx input with a blank content cell in the middle
    let mut writer = TableWriter::create(&input, "Posts").unwrap();
    writer.write_row(&[Cell::text("ID"), Cell::text("Content")]).unwrap();
    writer.write_row(&[Cell::number(1.0), Cell::text("I love this")]).unwrap();
    writer.write_row(&[Cell::number(2.0), Cell::text("")]).unwrap();
    writer.write_row(&[Cell::number(3.0), Cell::text("This is terrible")]).unwrap();
    writer.finish().unwrap();

    let stats = RecordScorer::new().score(&input, &output).unwrap();
    assert_eq!(stats.rows_read, 3);
    assert_eq!(stats.rows_scored, 2);
    assert_eq!(stats.rows_skipped, 1);

    let mut reader = TableReader::open(&output).unwrap();
    assert_eq!(reader.header().to_vec(), OUTPUT_COLUMNS);

    let analyzer = SentimentAnalyzer::new();
    let first = reader.next_row().unwrap().unwrap();
    assert_eq!(first[0].as_deref(), Some("I love this"));
    let compound: f64 = first[4].as_deref().unwrap().parse().unwrap();
    let expected = analyzer.score("I love this").compound;
    assert!((compound - expected).abs() < 1e-9);

    let second = reader.next_row().unwrap().unwrap();
    assert_eq!(second[0].as_deref(), Some("This is terrible"));

    assert!(reader.next_row().unwrap().is_none());
}

#[test]
fn test_csv_input_to_xlsx_output() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("input.csv");
    let output = dir.path().join("output.xlsx");
    fs::write(&input, "Content\ngood enough\n").unwrap();

    let stats = RecordScorer::new().score(&input, &output).unwrap();
    assert_eq!(stats.rows_scored, 1);

    let mut reader = TableReader::open(&output).unwrap();
    assert_eq!(reader.header().to_vec(), OUTPUT_COLUMNS);
    let row = reader.next_row().unwrap().unwrap();
    assert_eq!(row[0].as_deref(), Some("good enough"));
}

#[test]
fn test_output_overwrites_previous_run() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("input.csv");
    let output = dir.path().join("output.csv");
    fs::write(&input, "Content\nfirst run\n").unwrap();
    RecordScorer::new().score(&input, &output).unwrap();

    fs::write(&input, "Content\nsecond run\n").unwrap();
    RecordScorer::new().score(&input, &output).unwrap();

    let (_, rows) = read_csv(&output);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][0], "second run");
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        /// Batch size is a pure working-set knob: for any input and any
        /// batch size, the output bytes are identical to a batch size of 1.
        #[test]
        fn batch_size_never_changes_output(
            texts in proptest::collection::vec("[ a-zA-Z0-9,.!?']{0,40}", 0..40),
            batch_size in 1usize..500,
        ) {
            let dir = tempdir().unwrap();
            let input = dir.path().join("input.csv");

            let mut writer = TableWriter::create(&input, "Sheet1").unwrap();
            writer.write_row(&[Cell::text("Content")]).unwrap();
            for text in &texts {
                writer.write_row(&[Cell::text(text.as_str())]).unwrap();
            }
            writer.finish().unwrap();

            let baseline = dir.path().join("baseline.csv");
            let candidate = dir.path().join("candidate.csv");

            RecordScorer::new().with_batch_size(1).score(&input, &baseline).unwrap();
            RecordScorer::new()
                .with_batch_size(batch_size)
                .score(&input, &candidate)
                .unwrap();

            prop_assert_eq!(fs::read(&baseline).unwrap(), fs::read(&candidate).unwrap());
        }
    }
}
