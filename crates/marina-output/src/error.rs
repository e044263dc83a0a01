//! Error types for marina-output.

use marina_core::MarinaId;
use thiserror::Error;

/// Errors that can occur when writing position output.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("{0} is not part of the grid")]
    UnknownMarina(MarinaId),
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
