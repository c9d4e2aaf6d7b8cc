//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure
//! - [`ExportFormat`] - formats for the optional record export

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

/// Analyze an exported chat log: message totals, activity patterns,
/// word and emoji frequencies.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlens chat.txt
    chatlens chat.txt --user Alice
    chatlens chat.txt --grammar month-first-12h
    chatlens chat.txt --stopwords stopwords.txt --top 30
    chatlens chat.txt --export records.csv
    chatlens chat.txt --export records.json --format json")]
pub struct Args {
    /// Path to the exported chat log
    pub input: String,

    /// Restrict the analysis to one participant
    #[arg(short, long, value_name = "NAME")]
    pub user: Option<String>,

    /// Timestamp grammar of the export
    #[arg(short, long, default_value = "day-first-12h")]
    pub grammar: String,

    /// File with whitespace-separated stopwords to exclude from word counts
    #[arg(long, value_name = "FILE")]
    pub stopwords: Option<String>,

    /// Number of entries in word and emoji rankings
    #[arg(long, default_value_t = 20)]
    pub top: usize,

    /// Print the weekday-by-hour activity heatmap
    #[arg(long)]
    pub heatmap: bool,

    /// Write the parsed records to this file
    #[arg(short, long, value_name = "FILE")]
    pub export: Option<String>,

    /// Format for --export
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: ExportFormat,
}

/// Record export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// CSV with semicolon delimiter
    #[default]
    Csv,

    /// JSON array of full records
    Json,
}

impl ExportFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["csv", "json"]
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Csv => write!(f, "CSV"),
            ExportFormat::Json => write!(f, "JSON"),
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                ExportFormat::all_names().join(", ")
            )),
        }
    }
}
