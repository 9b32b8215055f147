use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A book known to the catalog. The ISBN is the primary key; two records with
/// the same ISBN never coexist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub available_count: u32,
}

impl BookRecord {
    pub fn new(
        isbn: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
        available_count: u32,
    ) -> Self {
        Self {
            isbn: isbn.into(),
            title: title.into(),
            author: author.into(),
            genre: genre.into(),
            available_count,
        }
    }
}

/// One loan event. Immutable once created; the ledger only ever appends.
///
/// `date` carries no time component and serializes as `YYYY-MM-DD`, which is
/// the wire contract for the persisted ledger file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanRecord {
    pub isbn: String,
    pub borrower: String,
    pub date: NaiveDate,
}

impl LoanRecord {
    pub fn new(isbn: impl Into<String>, borrower: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            isbn: isbn.into(),
            borrower: borrower.into(),
            date,
        }
    }
}
