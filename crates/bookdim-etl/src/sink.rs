//! Output sinks for generated tables
//!
//! The table generators hand serialized bytes to an `ObjectSink`; the
//! pipeline depends only on this interface, never on a concrete storage
//! client.

use std::path::PathBuf;

use async_trait::async_trait;
use aws_sdk_s3::{primitives::ByteStream, Client};
use tracing::{debug, info};

use bookdim_common::{EtlError, Result};

/// Destination for a serialized table
#[async_trait]
pub trait ObjectSink: Send + Sync {
    /// Write `data` under `key`, overwriting any previous object
    async fn put(&self, key: &str, data: Vec<u8>) -> Result<()>;
}

/// Sink writing tables under a local directory
pub struct LocalFileSink {
    dir: PathBuf,
}

impl LocalFileSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl ObjectSink for LocalFileSink {
    async fn put(&self, key: &str, data: Vec<u8>) -> Result<()> {
        let path = self.dir.join(key);

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let bytes = data.len();
        tokio::fs::write(&path, data).await?;

        info!(path = %path.display(), bytes, "Wrote table to local file");
        Ok(())
    }
}

/// Sink uploading tables to an S3 bucket
///
/// Credentials and region come from the ambient AWS configuration
/// (environment, shared config file, or instance profile).
pub struct S3Sink {
    client: Client,
    bucket: String,
}

impl S3Sink {
    /// Create a sink from the ambient AWS configuration
    pub async fn new(bucket: impl Into<String>) -> Self {
        let config = aws_config::load_from_env().await;
        Self::from_client(Client::new(&config), bucket)
    }

    /// Create a sink from an existing client (used by tests against
    /// S3-compatible endpoints)
    pub fn from_client(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }
}

#[async_trait]
impl ObjectSink for S3Sink {
    async fn put(&self, key: &str, data: Vec<u8>) -> Result<()> {
        debug!(
            bytes = data.len(),
            "Uploading to s3://{}/{}", self.bucket, key
        );

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type("text/csv")
            .body(ByteStream::from(data))
            .send()
            .await
            .map_err(|e| {
                EtlError::Storage(format!(
                    "Unable to write {} to bucket {}: {}",
                    key, self.bucket, e
                ))
            })?;

        info!("Successfully uploaded to s3://{}/{}", self.bucket, key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_local_sink_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let sink = LocalFileSink::new(dir.path());

        sink.put("authors/authors_2024-06-01.csv", b"a,b\n1,2\n".to_vec())
            .await
            .unwrap();

        let written = std::fs::read_to_string(
            dir.path().join("authors/authors_2024-06-01.csv"),
        )
        .unwrap();
        assert_eq!(written, "a,b\n1,2\n");
    }

    #[tokio::test]
    async fn test_local_sink_overwrites_existing_object() {
        let dir = tempfile::tempdir().unwrap();
        let sink = LocalFileSink::new(dir.path());

        sink.put("books.csv", b"old".to_vec()).await.unwrap();
        sink.put("books.csv", b"new".to_vec()).await.unwrap();

        let written = std::fs::read_to_string(dir.path().join("books.csv")).unwrap();
        assert_eq!(written, "new");
    }
}
