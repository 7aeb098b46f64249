//! CSV Data Loader Module
//! Handles CSV file loading and column lookup using Polars.

use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Zero rows inferred: every column is read as text, so one odd cell deep in
/// the file can never abort the load.
const INFER_SCHEMA_ROWS: usize = 0;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("CSV file not found: {}", path.display())]
    FileNotFound { path: PathBuf },
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("Column '{column}' not found (available: {})", available.join(", "))]
    MissingColumn {
        column: String,
        available: Vec<String>,
    },
    #[error("No data loaded")]
    NoData,
}

/// Handles CSV file loading with Polars.
pub struct DataLoader {
    df: Option<DataFrame>,
    file_path: Option<PathBuf>,
}

impl Default for DataLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DataLoader {
    pub fn new() -> Self {
        Self {
            df: None,
            file_path: None,
        }
    }

    /// Load a CSV file with a header row. All columns come back as strings.
    ///
    /// Parser errors are not ignored: a structurally broken file fails the
    /// whole load instead of silently losing rows or columns.
    pub fn load_csv(&mut self, file_path: impl AsRef<Path>) -> Result<&DataFrame, LoaderError> {
        let path = file_path.as_ref();
        if !path.is_file() {
            return Err(LoaderError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        self.file_path = Some(path.to_path_buf());

        debug!(path = %path.display(), "reading csv");
        let df = LazyCsvReader::new(path)
            .with_has_header(true)
            .with_infer_schema_length(Some(INFER_SCHEMA_ROWS))
            .with_ignore_errors(false)
            .finish()?
            .collect()?;

        info!(
            path = %path.display(),
            rows = df.height(),
            columns = df.width(),
            "loaded csv"
        );

        self.df = Some(df);
        self.df.as_ref().ok_or(LoaderError::NoData)
    }

    /// Ensure the loaded DataFrame has a column named `column`.
    pub fn require_column(&self, column: &str) -> Result<(), LoaderError> {
        let df = self.df.as_ref().ok_or(LoaderError::NoData)?;
        if df.get_column_index(column).is_some() {
            return Ok(());
        }
        Err(LoaderError::MissingColumn {
            column: column.to_string(),
            available: self.get_columns(),
        })
    }

    /// Get list of column names from loaded DataFrame.
    pub fn get_columns(&self) -> Vec<String> {
        self.df
            .as_ref()
            .map(|df| {
                df.get_column_names()
                    .iter()
                    .map(|s| s.to_string())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Get the number of rows in the DataFrame.
    pub fn get_row_count(&self) -> usize {
        self.df.as_ref().map(|df| df.height()).unwrap_or(0)
    }

    /// Take ownership of the loaded DataFrame, leaving the loader empty.
    pub fn take_dataframe(&mut self) -> Result<DataFrame, LoaderError> {
        self.df.take().ok_or(LoaderError::NoData)
    }

    /// Get file path.
    pub fn get_file_path(&self) -> Option<&PathBuf> {
        self.file_path.as_ref()
    }
}
