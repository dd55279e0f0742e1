//! TOML configuration file support for power users.
//!
//! Instead of passing many CLI flags, users can specify settings in a config file:
//!
//! ```toml
//! # sentisheet.toml
//! [scoring]
//! column = "Content"
//! batch_size = 2000
//! progress_interval = 10000
//! sheet_name = "Sentiment Analysis"
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Root configuration structure for sentisheet.toml files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Scoring-specific settings.
    #[serde(default)]
    pub scoring: ScoringConfig,
}

/// Configuration for the score command.
#[derive(Debug, Default, Deserialize)]
pub struct ScoringConfig {
    /// Header label of the column holding the text to score.
    pub column: Option<String>,

    /// Number of text values to buffer per scoring batch.
    pub batch_size: Option<usize>,

    /// Progress log interval (rows read).
    pub progress_interval: Option<usize>,

    /// Worksheet name for workbook outputs.
    pub sheet_name: Option<String>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }
}
