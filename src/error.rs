//! Hard failures of a conversion run
//!
//! Structural problems in the input are not errors; they are reported as
//! [`crate::document::Diagnostic`] values. The variants here stop the run and
//! nothing is written.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Input file not found: {}", path.display())]
    MissingInput { path: PathBuf },

    #[error("Invalid input file {}: {reason}", path.display())]
    InvalidInput { path: PathBuf, reason: String },

    #[error("Cannot read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize document to JSON: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Cannot write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T, E = ConvertError> = std::result::Result<T, E>;
