//! Bookdim ETL Library
//!
//! Batch pipeline turning the Open Library subject listing into two
//! dimensional tables (authors, books).
//!
//! # Stages
//!
//! - **Extract**: HTTP fetch with bounded retry
//! - **Transform**: flatten works into one row per (work, author) pair
//! - **Cleanse**: author name normalization, duplicate removal, book key
//!   extraction
//! - **Keys**: dense surrogate keys for distinct authors and books
//! - **Tables**: project into the authors/books output shapes and hand
//!   them to a sink
//!
//! # Example
//!
//! ```no_run
//! use bookdim_etl::{config::EtlConfig, pipeline, sink::LocalFileSink};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = EtlConfig::from_env()?;
//!     let sink = LocalFileSink::new(config.output_dir.clone());
//!     let summary = pipeline::run(&config, &sink).await?;
//!     println!("{} rows", summary.rows);
//!     Ok(())
//! }
//! ```

pub mod cleanse;
pub mod config;
pub mod db;
pub mod extract;
pub mod keys;
pub mod model;
pub mod pipeline;
pub mod sink;
pub mod tables;
pub mod transform;

// Re-export commonly used types
pub use config::EtlConfig;
pub use pipeline::{run, PipelineSummary};
