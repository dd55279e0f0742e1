//! # sentisheet CLI
//!
//! A command-line tool for batch sentiment scoring of spreadsheet text.
//!
//! ## Supported Formats
//!
//! - **CSV/TSV**: delimited text, streamed row by row
//! - **xlsx**: Excel workbooks (first worksheet)
//!
//! ## Usage
//!
//! ```bash
//! # Score the "Content" column of a spreadsheet
//! sentisheet score posts.xlsx posts_sentiment.xlsx
//!
//! # Score a different column of a CSV, with a larger batch
//! sentisheet score -v comments.csv --column Body --batch-size 5000
//!
//! # Generate a small sample input for testing
//! sentisheet sample demo.csv
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use std::path::{Path, PathBuf};

use sentisheet::config::Config;
use sentisheet::scorer::{RecordScorer, ScoreConfig};
use sentisheet::table::{Cell, TableReader, TableWriter};

/// sentisheet - Batch Sentiment Scoring for Spreadsheet Text
#[derive(Parser)]
#[command(name = "sentisheet")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score the text column of a tabular file and write a new table
    Score {
        /// Input table path (.csv, .tsv or .xlsx)
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output table path (defaults to <stem>_sentiment.<ext>)
        #[arg(value_name = "OUTPUT")]
        output: Option<PathBuf>,

        /// Header label of the column holding the text to score
        #[arg(short = 'l', long)]
        column: Option<String>,

        /// Number of text values to buffer per scoring batch
        #[arg(short = 'b', long)]
        batch_size: Option<usize>,

        /// Optional TOML configuration file
        #[arg(short = 'c', long)]
        config: Option<PathBuf>,
    },

    /// Display information about a tabular file
    Info {
        /// Input table path
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Generate a small sample input table for testing
    Sample {
        /// Output table path
        #[arg(value_name = "OUTPUT", default_value = "sample_content.csv")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Score {
            input,
            output,
            column,
            batch_size,
            config,
        } => run_score(input, output, column, batch_size, config),
        Commands::Info { file } => run_info(file),
        Commands::Sample { output } => run_sample(output),
    }
}

/// Score the text column of a tabular file
fn run_score(
    input: PathBuf,
    output: Option<PathBuf>,
    column: Option<String>,
    batch_size: Option<usize>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    // Validate input file exists
    if !input.exists() {
        anyhow::bail!("Input file does not exist: {}", input.display());
    }

    let file_config = match &config_path {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    let output = output.unwrap_or_else(|| default_output_path(&input));

    // CLI flags take precedence over the config file, which takes
    // precedence over built-in defaults.
    let mut score_config = ScoreConfig::default();
    if let Some(label) = column.or(file_config.scoring.column) {
        score_config.content_column = label;
    }
    if let Some(size) = batch_size.or(file_config.scoring.batch_size) {
        score_config.batch_size = size;
    }
    if let Some(interval) = file_config.scoring.progress_interval {
        score_config.progress_interval = interval;
    }
    if let Some(name) = file_config.scoring.sheet_name {
        score_config.sheet_name = name;
    }

    info!("sentisheet - Sentiment Scoring");
    info!("==============================");
    info!("Input:  {}", input.display());
    info!("Output: {}", output.display());
    info!("Column: {}", score_config.content_column);
    info!("Batch size: {}", score_config.batch_size);

    let scorer = RecordScorer::with_config(score_config);

    info!("Starting scoring run...");
    let stats = scorer.score(&input, &output).context("Scoring failed")?;

    info!("Run complete: {}", stats);

    println!(
        "Sentiment analysis results saved to {}",
        output.display()
    );
    println!(
        "  {} rows scored, {} blank rows skipped",
        stats.rows_scored, stats.rows_skipped
    );

    Ok(())
}

/// Default output path: `<stem>_sentiment.<ext>` next to the input
fn default_output_path(input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    let extension = input
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_else(|| "csv".to_string());
    input.with_file_name(format!("{}_sentiment.{}", stem, extension))
}

/// Display information about a tabular file
fn run_info(file: PathBuf) -> Result<()> {
    if !file.exists() {
        anyhow::bail!("File does not exist: {}", file.display());
    }

    let mut reader = TableReader::open(&file).context("Failed to open table")?;

    println!("Table Information");
    println!("=================");
    println!("File: {}", file.display());
    println!();

    println!("Columns:");
    for (i, label) in reader.header().iter().enumerate() {
        println!("  {:3}. {}", i + 1, label);
    }
    println!();

    let mut data_rows = 0usize;
    let mut blank_cells = 0usize;
    while let Some(row) = reader.next_row().context("Failed to read row")? {
        data_rows += 1;
        blank_cells += row.iter().filter(|cell| cell.is_none()).count();
    }

    println!("Data rows: {}", data_rows);
    println!("Blank cells: {}", blank_cells);

    Ok(())
}

/// Generate a small sample input table for testing
fn run_sample(output: PathBuf) -> Result<()> {
    let sentences = [
        Some("I love this product, it works perfectly"),
        Some("Absolutely terrible experience, would not recommend"),
        Some("The package arrived on Tuesday"),
        None,
        Some("Great service and friendly staff!"),
        Some("Mediocre at best, but the price was fair"),
        Some("This is the worst thing I have ever bought"),
        None,
        Some("Surprisingly good, exceeded my expectations"),
        Some("It does what it says on the box"),
    ];

    let mut writer =
        TableWriter::create(&output, "Content").context("Failed to create sample table")?;

    writer.write_row(&[Cell::text("ID"), Cell::text("Content")])?;
    for (i, sentence) in sentences.iter().enumerate() {
        let row = match sentence {
            Some(text) => vec![Cell::number((i + 1) as f64), Cell::text(*text)],
            // Blank content cell
            None => vec![Cell::number((i + 1) as f64), Cell::text("")],
        };
        writer.write_row(&row)?;
    }
    let size = writer.finish().context("Failed to write sample table")?;

    println!(
        "Wrote sample table to {} ({} bytes, {} rows)",
        output.display(),
        size,
        sentences.len()
    );

    Ok(())
}
