//! Database insert boundary
//!
//! The warehouse insert is a stub: the pipeline calls this interface for
//! both tables, but no database client is wired up yet.

use tracing::info;

use bookdim_common::Result;

/// Bulk-insert stub for a dimensional table
///
/// Logs the call and returns. A real implementation would open a
/// connection from injected credentials and execute a bulk
/// `INSERT INTO {table} ({columns}) VALUES ...`.
pub fn insert_records(table: &str, columns: &[&str], row_count: usize) -> Result<()> {
    info!(
        table,
        columns = columns.join(","),
        row_count,
        "Database insert stubbed; skipping"
    );
    Ok(())
}
