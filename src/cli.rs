//! CLI argument definitions.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::data::SOURCE_COLUMN;

/// Change Dist - distribution of absolute daily change % in a price history CSV
#[derive(Parser, Debug)]
#[command(name = "change_dist")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the CSV file (must have a header row)
    #[arg(env = "CHANGE_DIST_INPUT")]
    pub input: PathBuf,

    /// Column holding the raw change values, e.g. "-1.23%"
    #[arg(short, long, env = "CHANGE_DIST_COLUMN", default_value = SOURCE_COLUMN)]
    pub column: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Header line followed by one "range: count" line per bucket
    #[default]
    Text,
    /// JSON document with counts and missing rows
    Json,
}
