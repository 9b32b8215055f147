//! JSON wire documents for the two persisted files.
//!
//! The catalog file is a single JSON object keyed by ISBN; each value carries
//! the remaining book fields (the key is not repeated inside the value). The
//! ledger file is a JSON array of loan objects whose `date` field is strictly
//! `YYYY-MM-DD`; any other date format fails to decode.
//!
//! Decoding is schema-checked end to end: a structurally invalid document
//! (bad JSON, missing field, malformed date) yields `BiblioError::Decode` and
//! never a partially-typed value. Both documents are written pretty-printed.

use crate::error::{BiblioError, Result};
use crate::ledger::Ledger;
use crate::model::{BookRecord, LoanRecord};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Serialize, Deserialize)]
struct BookDoc {
    title: String,
    author: String,
    genre: String,
    available_count: u32,
}

#[derive(Debug, Serialize, Deserialize)]
struct LoanDoc {
    isbn: String,
    borrower: String,
    #[serde(with = "date_format")]
    date: NaiveDate,
}

/// Strict `YYYY-MM-DD` (de)serialization for the ledger's `date` field.
///
/// `NaiveDate::parse_from_str` tolerates missing zero padding, so decoding
/// additionally requires the stored text to round-trip to the exact same
/// string.
mod date_format {
    use chrono::NaiveDate;
    use serde::de::{self, Deserialize, Deserializer};
    use serde::Serializer;

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        let date = NaiveDate::parse_from_str(&text, FORMAT).map_err(de::Error::custom)?;
        if date.format(FORMAT).to_string() != text {
            return Err(de::Error::custom(format!(
                "date must be zero-padded YYYY-MM-DD, got {:?}",
                text
            )));
        }
        Ok(date)
    }
}

/// Encode the ISBN-keyed catalog map as a pretty-printed JSON object.
pub fn encode_books(books: &BTreeMap<String, BookRecord>) -> Result<String> {
    let doc: BTreeMap<&str, BookDoc> = books
        .iter()
        .map(|(isbn, book)| {
            (
                isbn.as_str(),
                BookDoc {
                    title: book.title.clone(),
                    author: book.author.clone(),
                    genre: book.genre.clone(),
                    available_count: book.available_count,
                },
            )
        })
        .collect();

    serde_json::to_string_pretty(&doc).map_err(BiblioError::Serialization)
}

/// Decode a catalog document, re-attaching the map key as each record's ISBN.
pub fn decode_books(json: &str) -> Result<BTreeMap<String, BookRecord>> {
    let doc: BTreeMap<String, BookDoc> =
        serde_json::from_str(json).map_err(BiblioError::Decode)?;

    Ok(doc
        .into_iter()
        .map(|(isbn, book)| {
            let record = BookRecord {
                isbn: isbn.clone(),
                title: book.title,
                author: book.author,
                genre: book.genre,
                available_count: book.available_count,
            };
            (isbn, record)
        })
        .collect())
}

/// Encode the ledger as a pretty-printed JSON array, in append order.
pub fn encode_loans(ledger: &Ledger) -> Result<String> {
    let doc: Vec<LoanDoc> = ledger
        .list_all()
        .iter()
        .map(|loan| LoanDoc {
            isbn: loan.isbn.clone(),
            borrower: loan.borrower.clone(),
            date: loan.date,
        })
        .collect();

    serde_json::to_string_pretty(&doc).map_err(BiblioError::Serialization)
}

pub fn decode_loans(json: &str) -> Result<Vec<LoanRecord>> {
    let doc: Vec<LoanDoc> = serde_json::from_str(json).map_err(BiblioError::Decode)?;

    Ok(doc
        .into_iter()
        .map(|loan| LoanRecord {
            isbn: loan.isbn,
            borrower: loan.borrower,
            date: loan.date,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn books_round_trip_field_for_field() {
        let mut books = BTreeMap::new();
        books.insert(
            "978-0".to_string(),
            BookRecord::new("978-0", "Dune", "Herbert", "SciFi", 2),
        );
        books.insert(
            "978-1".to_string(),
            BookRecord::new("978-1", "Foundation", "Asimov", "SciFi", 0),
        );

        let json = encode_books(&books).unwrap();
        let decoded = decode_books(&json).unwrap();
        assert_eq!(decoded, books);
    }

    #[test]
    fn book_document_is_keyed_by_isbn_without_repeating_it() {
        let mut books = BTreeMap::new();
        books.insert(
            "978-0".to_string(),
            BookRecord::new("978-0", "Dune", "Herbert", "SciFi", 2),
        );

        let json = encode_books(&books).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let entry = &value["978-0"];
        assert_eq!(entry["title"], "Dune");
        assert_eq!(entry["available_count"], 2);
        assert!(entry.get("isbn").is_none());
    }

    #[test]
    fn loans_round_trip_with_dates_preserved() {
        let mut ledger = Ledger::new();
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        ledger.append(LoanRecord::new("978-0", "Alice", date));

        let json = encode_loans(&ledger).unwrap();
        assert!(json.contains("\"2024-01-01\""));

        let decoded = decode_loans(&json).unwrap();
        assert_eq!(decoded, ledger.list_all());
    }

    #[test]
    fn invalid_json_is_a_decode_error() {
        let err = decode_books("{not json").unwrap_err();
        assert!(matches!(err, BiblioError::Decode(_)));
    }

    #[test]
    fn missing_field_is_a_decode_error() {
        let json = r#"{"978-0": {"title": "Dune", "author": "Herbert"}}"#;
        let err = decode_books(json).unwrap_err();
        assert!(matches!(err, BiblioError::Decode(_)));
    }

    #[test]
    fn wrong_date_format_is_a_decode_error() {
        let json = r#"[{"isbn": "978-0", "borrower": "Alice", "date": "01/01/2024"}]"#;
        let err = decode_loans(json).unwrap_err();
        assert!(matches!(err, BiblioError::Decode(_)));
    }

    #[test]
    fn unpadded_date_is_a_decode_error() {
        let json = r#"[{"isbn": "978-0", "borrower": "Alice", "date": "2024-1-2"}]"#;
        let err = decode_loans(json).unwrap_err();
        assert!(matches!(err, BiblioError::Decode(_)));
    }
}
