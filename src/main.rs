//! Change Dist - daily change % distribution for price history CSVs
//!
//! Reads a CSV export (e.g. an index's historical data), cleans the
//! `Change %` column and prints how many days fell into each absolute
//! change range.
//!
//! ```bash
//! change_dist "Nifty Bank Historical Data.csv"
//! change_dist prices.csv --column "Chg %" --format json
//! ```

mod cli;
mod data;
mod report;
mod stats;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::Cli;
use data::{DataLoader, DataProcessor};

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    let mut loader = DataLoader::new();
    loader
        .load_csv(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;
    loader.require_column(&cli.column).with_context(|| {
        let path = loader.get_file_path().unwrap_or(&cli.input);
        format!("cannot analyze {}", path.display())
    })?;

    let row_count = loader.get_row_count();
    let mut df = loader.take_dataframe()?;
    let dist = DataProcessor::run(&mut df, &cli.column)
        .with_context(|| format!("failed to process column '{}'", cli.column))?;

    info!(
        rows = row_count,
        categorized = dist.categorized(),
        missing = dist.missing(),
        "distribution ready"
    );

    let stdout = std::io::stdout();
    report::write_report(&mut stdout.lock(), &dist, &cli.column, cli.format)
}
