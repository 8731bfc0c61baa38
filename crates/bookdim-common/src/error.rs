//! Error types for the bookdim pipeline

use thiserror::Error;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, EtlError>;

/// Main error type for the bookdim pipeline
///
/// Every variant is fatal to the run: there is no row-level error isolation,
/// a single malformed record aborts the entire batch.
#[derive(Error, Debug)]
pub enum EtlError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Transient HTTP failure (non-2xx status or transport error).
    /// Retried inside the extract loop; never escapes it directly.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Max retries exceeded after {attempts} attempts. Job failed.")]
    MaxRetriesExceeded { attempts: u32 },

    /// Malformed or missing fields in the API response. Not retried.
    #[error("Structural data error: {0}")]
    Structural(String),

    /// A row lacked an expected surrogate-key mapping. Internal logic error.
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
