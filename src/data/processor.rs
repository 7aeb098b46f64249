//! Data Processor Module
//! Cleans the change % column and assigns change ranges.

use crate::stats::{ChangeRange, Distribution};
use polars::prelude::*;
use thiserror::Error;
use tracing::{debug, warn};

/// Default source column holding text like `"-1.23%"`.
pub const SOURCE_COLUMN: &str = "Change %";
/// Derived absolute change column.
pub const CLEANED_COLUMN: &str = "Change%";
/// Derived range label column.
pub const RANGE_COLUMN: &str = "Change_Range";

#[derive(Error, Debug)]
pub enum ProcessorError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
}

/// Parse one raw change cell into an absolute value.
///
/// Every `%` is removed and surrounding whitespace trimmed before parsing.
/// Anything that is not a number afterwards is missing.
pub fn parse_change(raw: &str) -> Option<f64> {
    let cleaned = raw.replace('%', "");
    let value: f64 = cleaned.trim().parse().ok()?;
    if value.is_nan() {
        return None;
    }
    Some(value.abs())
}

/// Handles data cleaning and bucketing operations.
pub struct DataProcessor;

impl DataProcessor {
    /// Add `Change%` derived from `source_col`. The source column is left as is.
    ///
    /// Returns the number of rows whose value could not be parsed.
    pub fn clean_change_column(
        df: &mut DataFrame,
        source_col: &str,
    ) -> Result<usize, ProcessorError> {
        // Frames built outside the loader may hold numbers; go through text either way.
        let raw = df.column(source_col)?.cast(&DataType::String)?;
        let raw_ca = raw.str()?;

        let cleaned: Vec<Option<f64>> = raw_ca
            .into_iter()
            .map(|v| v.and_then(parse_change))
            .collect();
        let missing = cleaned.iter().filter(|v| v.is_none()).count();

        df.with_column(Column::new(CLEANED_COLUMN.into(), cleaned))?;

        if missing > 0 {
            warn!(column = source_col, missing, "unparseable change values");
        }
        Ok(missing)
    }

    /// Add `Change_Range` from the cleaned column; missing values stay null.
    pub fn categorize(df: &mut DataFrame) -> Result<(), ProcessorError> {
        let cleaned = df.column(CLEANED_COLUMN)?.f64()?;
        let labels: Vec<Option<&str>> = cleaned
            .into_iter()
            .map(|v| v.and_then(ChangeRange::categorize).map(ChangeRange::label))
            .collect();

        df.with_column(Column::new(RANGE_COLUMN.into(), labels))?;
        Ok(())
    }

    /// Count rows per range straight from the cleaned `Change%` column.
    pub fn distribution(df: &DataFrame) -> Result<Distribution, ProcessorError> {
        let cleaned = df.column(CLEANED_COLUMN)?.f64()?;
        let dist = Distribution::from_ranges(
            cleaned
                .into_iter()
                .map(|v| v.and_then(ChangeRange::categorize)),
        );

        debug!(
            categorized = dist.categorized(),
            missing = dist.missing(),
            "computed change distribution"
        );
        Ok(dist)
    }

    /// Clean, bucket and count in one pass over the frame.
    pub fn run(df: &mut DataFrame, source_col: &str) -> Result<Distribution, ProcessorError> {
        Self::clean_change_column(df, source_col)?;
        Self::categorize(df)?;
        Self::distribution(df)
    }
}
