//! Core types for the book/author pipeline
//!
//! Everything here lives for a single pipeline run. The raw types mirror the
//! Open Library subject payload; the row types are the flattened tabular
//! stages; the record types are the two dimensional-table output shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Top-level API payload
///
/// A payload without a `works` field is a structural error surfaced at
/// deserialization time.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDocument {
    pub works: Vec<RawWork>,
}

/// One entry from the API's work list
#[derive(Debug, Clone, Deserialize)]
pub struct RawWork {
    /// Compound key path, e.g. `/works/OL12345W`
    pub key: String,
    pub title: String,
    /// Missing for works the API has no publication date for
    #[serde(default)]
    pub first_publish_year: Option<i32>,
    pub authors: Vec<AuthorRef>,
}

/// Author reference embedded in a work entry
#[derive(Debug, Clone, Deserialize)]
pub struct AuthorRef {
    pub name: String,
}

/// Flattened record: one per (work, author) pair
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Row {
    pub book_key: String,
    pub title: String,
    pub first_publish_year: Option<i32>,
    pub author_name: String,
}

/// Row with normalized author name fields, duplicate-free within a row set
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CleansedRow {
    pub book_key: String,
    pub title: String,
    pub first_publish_year: Option<i32>,
    /// Author name with periods stripped
    pub author_name: String,
    /// All name tokens before the last, rejoined with single spaces.
    /// Empty for single-token names.
    pub author_firstname: String,
    /// Last name token
    pub author_lastname: String,
}

/// Cleansed row with dense surrogate keys attached
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichedRow {
    pub book_key: String,
    pub title: String,
    pub first_publish_year: Option<i32>,
    pub author_name: String,
    pub author_firstname: String,
    pub author_lastname: String,
    /// 1-based, dense, first-occurrence order of `author_name` within the run
    pub author_id: u32,
    /// 1-based, dense, first-occurrence order of `book_key` within the run
    pub book_id: u32,
}

/// Output shape of the authors dimensional table
///
/// One record per enriched row; the table is a projection, not deduplicated
/// by `author_id`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthorRecord {
    pub author_id: u32,
    pub author_name: String,
    pub author_firstname: String,
    pub author_lastname: String,
    pub created_at: DateTime<Utc>,
}

/// Output shape of the books dimensional table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookRecord {
    pub book_id: u32,
    pub author_id: u32,
    pub book_key: String,
    pub title: String,
    pub first_publish_year: Option<i32>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_document_deserializes_subject_payload() {
        let doc: RawDocument = serde_json::from_value(serde_json::json!({
            "works": [
                {
                    "key": "/works/OL1W",
                    "title": "Foo",
                    "first_publish_year": 1950,
                    "authors": [{"name": "Ann B. Lee"}]
                }
            ]
        }))
        .unwrap();

        assert_eq!(doc.works.len(), 1);
        assert_eq!(doc.works[0].key, "/works/OL1W");
        assert_eq!(doc.works[0].first_publish_year, Some(1950));
        assert_eq!(doc.works[0].authors[0].name, "Ann B. Lee");
    }

    #[test]
    fn test_raw_work_missing_year_defaults_to_none() {
        let work: RawWork = serde_json::from_value(serde_json::json!({
            "key": "/works/OL2W",
            "title": "Bar",
            "authors": []
        }))
        .unwrap();

        assert_eq!(work.first_publish_year, None);
    }

    #[test]
    fn test_raw_document_missing_works_is_an_error() {
        let result: std::result::Result<RawDocument, _> =
            serde_json::from_value(serde_json::json!({"name": "fantasy"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_raw_work_missing_title_is_an_error() {
        let result: std::result::Result<RawWork, _> = serde_json::from_value(serde_json::json!({
            "key": "/works/OL3W",
            "authors": [{"name": "A"}]
        }));
        assert!(result.is_err());
    }
}
