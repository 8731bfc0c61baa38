//! Table generators: project enriched rows into the two output shapes
//!
//! Each generator takes the timestamp to stamp into `created_at`; the
//! pipeline takes it once per run so both tables carry the same value on
//! every record.

use chrono::{DateTime, Utc};
use serde::Serialize;

use bookdim_common::{EtlError, Result};

use crate::model::{AuthorRecord, BookRecord, EnrichedRow};

/// Column order of the authors table
pub const AUTHOR_COLUMNS: [&str; 5] = [
    "author_id",
    "author_name",
    "author_firstname",
    "author_lastname",
    "created_at",
];

/// Column order of the books table
pub const BOOK_COLUMNS: [&str; 6] = [
    "book_id",
    "author_id",
    "book_key",
    "title",
    "first_publish_year",
    "created_at",
];

/// Project the row set into the authors table shape
pub fn generate_authors_table(rows: &[EnrichedRow], created_at: DateTime<Utc>) -> Vec<AuthorRecord> {
    rows.iter()
        .map(|row| AuthorRecord {
            author_id: row.author_id,
            author_name: row.author_name.clone(),
            author_firstname: row.author_firstname.clone(),
            author_lastname: row.author_lastname.clone(),
            created_at,
        })
        .collect()
}

/// Project the row set into the books table shape
pub fn generate_books_table(rows: &[EnrichedRow], created_at: DateTime<Utc>) -> Vec<BookRecord> {
    rows.iter()
        .map(|row| BookRecord {
            book_id: row.book_id,
            author_id: row.author_id,
            book_key: row.book_key.clone(),
            title: row.title.clone(),
            first_publish_year: row.first_publish_year,
            created_at,
        })
        .collect()
}

/// Serialize the authors table as CSV with a header row
pub fn authors_to_csv(records: &[AuthorRecord]) -> Result<Vec<u8>> {
    write_csv(&AUTHOR_COLUMNS, records)
}

/// Serialize the books table as CSV with a header row
pub fn books_to_csv(records: &[BookRecord]) -> Result<Vec<u8>> {
    write_csv(&BOOK_COLUMNS, records)
}

/// Write a header row plus one record per row
///
/// The header is written explicitly so empty tables still carry it.
fn write_csv<T: Serialize>(columns: &[&str], records: &[T]) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(columns)?;
    for record in records {
        writer.serialize(record)?;
    }

    writer
        .into_inner()
        .map_err(|e| EtlError::Storage(format!("CSV buffer flush failed: {}", e)))
}
