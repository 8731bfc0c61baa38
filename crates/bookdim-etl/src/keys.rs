//! Surrogate key assignment
//!
//! Dense 1-based integer keys for distinct authors and distinct books, in
//! first-occurrence order scanning the row set top to bottom. Assignments
//! are stable within a run only.

use std::collections::HashMap;

use tracing::info;

use bookdim_common::{EtlError, Result};

use crate::model::{CleansedRow, EnrichedRow};

/// Attach dense author and book surrogate keys to every row
///
/// A row whose author or book has no mapping indicates an internal logic
/// error and is surfaced as an invariant violation.
pub fn assign_surrogate_keys(rows: Vec<CleansedRow>) -> Result<Vec<EnrichedRow>> {
    let mut author_ids: HashMap<String, u32> = HashMap::new();
    let mut book_ids: HashMap<String, u32> = HashMap::new();

    for row in &rows {
        let next = author_ids.len() as u32 + 1;
        author_ids.entry(row.author_name.clone()).or_insert(next);

        let next = book_ids.len() as u32 + 1;
        book_ids.entry(row.book_key.clone()).or_insert(next);
    }

    let mut out = Vec::with_capacity(rows.len());
    for row in rows {
        let author_id = *author_ids.get(&row.author_name).ok_or_else(|| {
            EtlError::InvariantViolation(format!(
                "No author id assigned for '{}'",
                row.author_name
            ))
        })?;
        let book_id = *book_ids.get(&row.book_key).ok_or_else(|| {
            EtlError::InvariantViolation(format!("No book id assigned for '{}'", row.book_key))
        })?;

        out.push(EnrichedRow {
            book_key: row.book_key,
            title: row.title,
            first_publish_year: row.first_publish_year,
            author_name: row.author_name,
            author_firstname: row.author_firstname,
            author_lastname: row.author_lastname,
            author_id,
            book_id,
        });
    }

    info!(
        authors = author_ids.len(),
        books = book_ids.len(),
        "Assigned surrogate keys"
    );

    Ok(out)
}
