//! Error types for the ETL pipeline.
//!
//! Defines a crate-wide error type using thiserror for clear propagation.
//! Configuration and connectivity failures are fatal and surface to the
//! caller; data-quality degradations are handled where they occur and never
//! appear here.

use thiserror::Error;

/// Main error type for the ETL pipeline.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid configuration values (rejected before any execution)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Raw-file ingestion errors (missing columns, malformed rows)
    #[error("Ingest error: {0}")]
    Ingest(String),

    /// Database connection or query errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// CSV reading errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// File I/O errors
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Feature-document serialization errors
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Convenience Result type using the pipeline Error.
pub type Result<T> = std::result::Result<T, Error>;
