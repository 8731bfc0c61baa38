//! Bookdim ETL - batch pipeline entry point

use std::path::PathBuf;

use anyhow::Result;
use bookdim_common::logging::{init_logging, LogConfig, LogLevel};
use bookdim_etl::config::EtlConfig;
use bookdim_etl::pipeline;
use bookdim_etl::sink::{LocalFileSink, S3Sink};
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "bookdim-etl")]
#[command(author, version, about = "Book/author dimensional table ETL")]
struct Cli {
    /// Extract URL (overrides BOOKDIM_EXTRACT_URL)
    #[arg(long)]
    url: Option<String>,

    /// Retries after the initial attempt (overrides BOOKDIM_MAX_RETRIES)
    #[arg(long)]
    max_retries: Option<u32>,

    /// Output directory for the local sink
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Upload tables to this S3 bucket instead of the local filesystem
    #[arg(long)]
    s3_bucket: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // Environment configures logging; the verbose flag raises the level
    let mut log_config = LogConfig::from_env().unwrap_or_default();
    if cli.verbose {
        log_config.level = LogLevel::Debug;
    }
    init_logging(&log_config)?;

    let mut config = EtlConfig::from_env()?;
    if let Some(url) = cli.url {
        config.extract_url = url;
    }
    if let Some(max_retries) = cli.max_retries {
        config.max_retries = max_retries;
    }
    if let Some(dir) = cli.output_dir {
        config.output_dir = dir;
    }
    if let Some(bucket) = cli.s3_bucket {
        config.s3_bucket = Some(bucket);
    }
    config.validate()?;

    info!(url = %config.extract_url, "Starting pipeline run");

    let summary = match &config.s3_bucket {
        Some(bucket) => {
            let sink = S3Sink::new(bucket.clone()).await;
            pipeline::run(&config, &sink).await?
        },
        None => {
            let sink = LocalFileSink::new(config.output_dir.clone());
            pipeline::run(&config, &sink).await?
        },
    };

    info!(
        rows = summary.rows,
        authors = summary.distinct_authors,
        books = summary.distinct_books,
        "Run finished"
    );
    Ok(())
}
