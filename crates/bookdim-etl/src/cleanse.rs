//! Cleanse steps: author name normalization and book key extraction
//!
//! Two passes, each a pure function over the full row set. Name cleansing
//! (including duplicate removal) runs fully before key cleansing; duplicates
//! are judged on the post-name-cleanse state, so differing raw keys survive
//! even if they collapse to the same segment later.

use std::collections::HashSet;

use tracing::info;

use crate::model::{CleansedRow, Row};

/// Normalize author names and drop exact-duplicate rows
///
/// Strips periods from the author name, splits it into first/last fields on
/// single spaces, and removes rows that are fully identical after
/// normalization, keeping the first occurrence.
pub fn cleanse_names(rows: Vec<Row>) -> Vec<CleansedRow> {
    let mut seen = HashSet::new();
    let mut out = Vec::with_capacity(rows.len());

    for row in rows {
        let author_name = row.author_name.replace('.', "");
        let (author_firstname, author_lastname) = split_author_name(&author_name);

        let cleansed = CleansedRow {
            book_key: row.book_key,
            title: row.title,
            first_publish_year: row.first_publish_year,
            author_name,
            author_firstname,
            author_lastname,
        };

        if seen.insert(cleansed.clone()) {
            out.push(cleansed);
        }
    }

    info!(rows = out.len(), "Rows remain after removing duplicates");
    out
}

/// Replace each book key with its final path segment
///
/// `/works/OL12345W` becomes `OL12345W`.
pub fn cleanse_book_key(rows: Vec<CleansedRow>) -> Vec<CleansedRow> {
    rows.into_iter()
        .map(|mut row| {
            row.book_key = book_key_segment(&row.book_key);
            row
        })
        .collect()
}

/// Split a cleansed name into (firstname, lastname) on the last single space
///
/// The last token is the lastname; everything before it, rejoined as-is, is
/// the firstname. Single-token names get an empty firstname.
fn split_author_name(name: &str) -> (String, String) {
    match name.rsplit_once(' ') {
        Some((first, last)) => (first.to_string(), last.to_string()),
        None => (String::new(), name.to_string()),
    }
}

fn book_key_segment(key: &str) -> String {
    key.split('/').next_back().unwrap_or(key).to_string()
}
