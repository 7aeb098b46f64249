//! Report rendering for the change distribution.

use serde::Serialize;
use std::io::Write;

use crate::cli::OutputFormat;
use crate::stats::{Distribution, RangeCount};

pub const REPORT_HEADER: &str = "Change% Distribution:";

#[derive(Serialize)]
struct JsonReport<'a> {
    column: &'a str,
    total_rows: usize,
    missing: usize,
    distribution: Vec<RangeCount>,
}

/// Render the report as plain text.
pub fn render_text(dist: &Distribution) -> String {
    use std::fmt::Write;

    let mut out = String::from(REPORT_HEADER);
    out.push('\n');
    for (range, count) in dist.iter() {
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{range}: {count}");
    }
    out
}

/// Render the report as pretty JSON.
pub fn render_json(dist: &Distribution, column: &str) -> anyhow::Result<String> {
    let report = JsonReport {
        column,
        total_rows: dist.total_rows(),
        missing: dist.missing(),
        distribution: dist.to_rows(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Write the report in `format` to `out`.
pub fn write_report<W: Write>(
    out: &mut W,
    dist: &Distribution,
    column: &str,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => write!(out, "{}", render_text(dist))?,
        OutputFormat::Json => writeln!(out, "{}", render_json(dist, column)?)?,
    }
    out.flush()?;
    Ok(())
}
