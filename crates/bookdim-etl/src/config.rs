//! Pipeline configuration
//!
//! One `EtlConfig` is constructed per run by the entry point and passed into
//! each component. Core logic never reads process state on its own; the
//! date-stamped output keys are fixed here, at construction time.

use std::path::PathBuf;
use std::time::Duration;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use bookdim_common::{EtlError, Result};

/// Default extract endpoint: the Open Library fantasy subject listing
pub const DEFAULT_EXTRACT_URL: &str = "https://openlibrary.org/subjects/fantasy.json?details=false";

/// Main pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EtlConfig {
    /// URL the extract step fetches
    pub extract_url: String,
    /// Retries after the initial attempt; total attempts = max_retries + 1
    pub max_retries: u32,
    /// Per-request HTTP timeout in seconds
    pub request_timeout_secs: u64,
    /// Directory the local sink writes tables into
    pub output_dir: PathBuf,
    /// Target bucket for the object-store sink; None disables it
    pub s3_bucket: Option<String>,
    /// Run date (UTC, YYYY-MM-DD) stamped into output keys
    pub run_date: String,
}

impl EtlConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let config = Self {
            extract_url: std::env::var("BOOKDIM_EXTRACT_URL")
                .unwrap_or_else(|_| DEFAULT_EXTRACT_URL.to_string()),
            max_retries: std::env::var("BOOKDIM_MAX_RETRIES")
                .unwrap_or_else(|_| "2".to_string())
                .parse()
                .unwrap_or(2),
            request_timeout_secs: std::env::var("BOOKDIM_REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .unwrap_or(30),
            output_dir: std::env::var("BOOKDIM_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./data/processed")),
            s3_bucket: std::env::var("BOOKDIM_S3_BUCKET").ok(),
            run_date: Utc::now().format("%Y-%m-%d").to_string(),
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.extract_url.is_empty() {
            return Err(EtlError::Config(
                "BOOKDIM_EXTRACT_URL cannot be empty".to_string(),
            ));
        }
        if self.request_timeout_secs == 0 {
            return Err(EtlError::Config(
                "BOOKDIM_REQUEST_TIMEOUT_SECS must be greater than 0".to_string(),
            ));
        }
        if let Some(bucket) = &self.s3_bucket {
            if bucket.is_empty() {
                return Err(EtlError::Config(
                    "BOOKDIM_S3_BUCKET cannot be empty when set".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Get per-request timeout as Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Date-stamped key of the authors table output
    pub fn authors_key(&self) -> String {
        format!("authors/authors_{}.csv", self.run_date)
    }

    /// Date-stamped key of the books table output
    pub fn books_key(&self) -> String {
        format!("books/books_{}.csv", self.run_date)
    }
}

impl Default for EtlConfig {
    fn default() -> Self {
        Self {
            extract_url: DEFAULT_EXTRACT_URL.to_string(),
            max_retries: 2,
            request_timeout_secs: 30,
            output_dir: PathBuf::from("./data/processed"),
            s3_bucket: None,
            run_date: Utc::now().format("%Y-%m-%d").to_string(),
        }
    }
}
