//! Error types for reference table loading.

use std::path::PathBuf;

use growth_model::SdRowError;
use thiserror::Error;

/// Errors that can occur when loading growth reference tables.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StandardsError {
    /// Reference file could not be read.
    #[error("failed to read reference file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV or a field that does not parse.
    #[error("failed to parse CSV {source_name}: {source}")]
    Csv {
        source_name: String,
        #[source]
        source: csv::Error,
    },

    /// A row whose weights cannot form an SD row.
    #[error("invalid reference row in {source_name} at line {line}: {source}")]
    InvalidRow {
        source_name: String,
        line: u64,
        #[source]
        source: SdRowError,
    },

    /// The same month appears twice in one table.
    #[error("duplicate age {age} months in {source_name}")]
    DuplicateAge { source_name: String, age: u8 },

    /// A table without any data rows.
    #[error("reference table {source_name} has no rows")]
    EmptyTable { source_name: String },
}

impl StandardsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn csv(source_name: &str, source: csv::Error) -> Self {
        Self::Csv {
            source_name: source_name.to_string(),
            source,
        }
    }
}

/// Result type for reference table loading.
pub type Result<T> = std::result::Result<T, StandardsError>;
