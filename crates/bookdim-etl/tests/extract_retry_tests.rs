//! Integration tests for the extract retry behavior
//!
//! These tests validate the retry contract against a mock HTTP server:
//! - Attempt budget (max_retries + 1 total attempts)
//! - Immediate return on success
//! - Structural failures are not retried

use bookdim_common::EtlError;
use bookdim_etl::config::EtlConfig;
use bookdim_etl::extract::Extractor;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper to build a minimal valid work listing payload
fn work_listing_response() -> serde_json::Value {
    serde_json::json!({
        "works": [
            {
                "key": "/works/OL1W",
                "title": "Foo",
                "first_publish_year": 1950,
                "authors": [{"name": "Ann B. Lee"}]
            }
        ]
    })
}

fn test_config(url: String, max_retries: u32) -> EtlConfig {
    EtlConfig {
        extract_url: url,
        max_retries,
        ..Default::default()
    }
}

#[tokio::test]
async fn test_fetch_returns_document_on_first_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/subjects/fantasy.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(work_listing_response()))
        .mount(&server)
        .await;

    let url = format!("{}/subjects/fantasy.json", server.uri());
    let config = test_config(url.clone(), 2);
    let extractor = Extractor::new(&config).unwrap();

    let doc = extractor.fetch_document(&url).await.unwrap();

    assert_eq!(doc.works.len(), 1);
    assert_eq!(doc.works[0].title, "Foo");
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_fetch_retries_once_then_succeeds() {
    let server = MockServer::start().await;

    // First request fails, every request after that succeeds
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(work_listing_response()))
        .mount(&server)
        .await;

    let url = format!("{}/subjects/fantasy.json", server.uri());
    let config = test_config(url.clone(), 2);
    let extractor = Extractor::new(&config).unwrap();

    let doc = extractor.fetch_document(&url).await.unwrap();

    assert_eq!(doc.works[0].key, "/works/OL1W");
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_fetch_exhausts_retry_budget() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let url = format!("{}/subjects/fantasy.json", server.uri());
    let config = test_config(url.clone(), 1);
    let extractor = Extractor::new(&config).unwrap();

    let err = extractor.fetch_document(&url).await.unwrap_err();

    assert!(matches!(err, EtlError::MaxRetriesExceeded { attempts: 2 }));
    // max_retries = 1 means exactly two attempts
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_zero_retries_means_single_attempt() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let url = format!("{}/missing.json", server.uri());
    let config = test_config(url.clone(), 0);
    let extractor = Extractor::new(&config).unwrap();

    let err = extractor.fetch_document(&url).await.unwrap_err();

    assert!(matches!(err, EtlError::MaxRetriesExceeded { attempts: 1 }));
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_malformed_body_is_structural_and_not_retried() {
    let server = MockServer::start().await;

    // 200 response whose body lacks the works field
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "name": "fantasy",
            "work_count": 0
        })))
        .mount(&server)
        .await;

    let url = format!("{}/subjects/fantasy.json", server.uri());
    let config = test_config(url.clone(), 3);
    let extractor = Extractor::new(&config).unwrap();

    let err = extractor.fetch_document(&url).await.unwrap_err();

    assert!(matches!(err, EtlError::Structural(_)));
    // Shape errors mean the source changed, retrying would not help
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}
