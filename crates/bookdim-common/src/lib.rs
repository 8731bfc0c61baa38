//! Bookdim Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared error handling and logging for the bookdim workspace.
//!
//! # Overview
//!
//! This crate provides common functionality used across all bookdim workspace
//! members:
//!
//! - **Error Handling**: The pipeline error taxonomy and result type
//! - **Logging**: Tracing configuration and initialization
//!
//! # Example
//!
//! ```no_run
//! use bookdim_common::{EtlError, Result};
//!
//! fn parse_year(raw: &str) -> Result<i64> {
//!     raw.parse()
//!         .map_err(|_| EtlError::Structural(format!("bad year: {raw}")))
//! }
//! ```

pub mod error;
pub mod logging;

// Re-export commonly used types
pub use error::{EtlError, Result};
