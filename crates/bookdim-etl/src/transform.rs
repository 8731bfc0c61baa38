//! Transform step: flatten the work listing into rows
//!
//! One row per (work, author) pair, in source order. A work with no authors
//! contributes no rows.

use tracing::{debug, info};

use crate::model::{RawDocument, Row};

/// Flatten a work listing into one row per (work, author) pair
pub fn transform(doc: RawDocument) -> Vec<Row> {
    let work_count = doc.works.len();
    let mut rows = Vec::new();
    let mut authorless = 0usize;

    for work in doc.works {
        if work.authors.is_empty() {
            authorless += 1;
            continue;
        }

        for author in work.authors {
            rows.push(Row {
                book_key: work.key.clone(),
                title: work.title.clone(),
                first_publish_year: work.first_publish_year,
                author_name: author.name,
            });
        }
    }

    if authorless > 0 {
        debug!(authorless, "Works without authors contributed no rows");
    }

    info!(
        works = work_count,
        rows = rows.len(),
        "Flattened work listing into rows"
    );

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AuthorRef, RawWork};

    fn work(key: &str, title: &str, year: Option<i32>, authors: &[&str]) -> RawWork {
        RawWork {
            key: key.to_string(),
            title: title.to_string(),
            first_publish_year: year,
            authors: authors
                .iter()
                .map(|name| AuthorRef {
                    name: name.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_multi_author_work_explodes_into_one_row_per_author() {
        let doc = RawDocument {
            works: vec![work("/works/OL1W", "Foo", Some(1950), &["A B", "C D"])],
        };

        let rows = transform(doc);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].author_name, "A B");
        assert_eq!(rows[1].author_name, "C D");
        // All non-author fields are shared
        for row in &rows {
            assert_eq!(row.book_key, "/works/OL1W");
            assert_eq!(row.title, "Foo");
            assert_eq!(row.first_publish_year, Some(1950));
        }
    }

    #[test]
    fn test_zero_author_work_contributes_no_rows() {
        let doc = RawDocument {
            works: vec![
                work("/works/OL1W", "Foo", None, &[]),
                work("/works/OL2W", "Bar", Some(1960), &["E F"]),
            ],
        };

        let rows = transform(doc);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].book_key, "/works/OL2W");
    }

    #[test]
    fn test_author_order_is_preserved() {
        let doc = RawDocument {
            works: vec![
                work("/works/OL1W", "Foo", None, &["Z", "A"]),
                work("/works/OL2W", "Bar", None, &["M"]),
            ],
        };

        let rows = transform(doc);
        let names: Vec<&str> = rows.iter().map(|r| r.author_name.as_str()).collect();
        assert_eq!(names, ["Z", "A", "M"]);
    }

    #[test]
    fn test_empty_listing_yields_no_rows() {
        let rows = transform(RawDocument { works: vec![] });
        assert!(rows.is_empty());
    }
}
