//! Extract step: HTTP fetch with bounded retry
//!
//! Fetches the subject listing from the configured URL. HTTP-level failures
//! (non-2xx status, transport errors) are retried up to the configured
//! budget; a body that does not parse into the expected document shape is a
//! structural error and aborts immediately.

use std::time::Duration;

use reqwest::Client;
use tracing::{error, info};

use bookdim_common::{EtlError, Result};

use crate::config::EtlConfig;
use crate::model::RawDocument;

/// HTTP extractor for the subject listing endpoint
pub struct Extractor {
    client: Client,
    max_retries: u32,
}

impl Extractor {
    /// Create a new extractor from pipeline configuration
    pub fn new(config: &EtlConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .user_agent("bookdim-etl/0.1")
            .build()?;

        Ok(Self {
            client,
            max_retries: config.max_retries,
        })
    }

    /// Fetch and parse the work listing, retrying transient failures
    ///
    /// Performs up to `max_retries + 1` attempts. The backoff before retry
    /// number `n` (0-based) is `n + 1` seconds, matching the timing the
    /// upstream job has always had.
    pub async fn fetch_document(&self, url: &str) -> Result<RawDocument> {
        let attempts = self.max_retries + 1;

        for attempt in 0..attempts {
            info!(
                attempt = attempt + 1,
                attempts,
                url = %url,
                "Sending request to open library api"
            );

            match self.try_fetch(url).await {
                Ok(response) => {
                    info!("API call was successful.");
                    return parse_document(response).await;
                },
                Err(e) => {
                    error!(error = %e, "Request failed");
                    if attempt < self.max_retries {
                        let backoff = Duration::from_secs(u64::from(attempt) + 1);
                        info!(delay_secs = backoff.as_secs(), "Retrying");
                        tokio::time::sleep(backoff).await;
                    } else {
                        return Err(EtlError::MaxRetriesExceeded { attempts });
                    }
                },
            }
        }

        unreachable!("Retry loop should always return")
    }

    /// Single GET attempt; non-2xx statuses are surfaced as errors
    async fn try_fetch(&self, url: &str) -> std::result::Result<reqwest::Response, reqwest::Error> {
        let response = self.client.get(url).send().await?;
        response.error_for_status()
    }
}

/// Parse a successful response body into the expected document shape
///
/// Parse failures are not retried: a 2xx response with a malformed body
/// means the source changed shape, not that the request flaked.
async fn parse_document(response: reqwest::Response) -> Result<RawDocument> {
    let body = response.text().await?;

    serde_json::from_str(&body)
        .map_err(|e| EtlError::Structural(format!("Malformed work listing payload: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extractor_from_config() {
        let config = EtlConfig::default();
        let extractor = Extractor::new(&config).unwrap();
        assert_eq!(extractor.max_retries, 2);
    }
}
