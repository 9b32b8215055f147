//! The in-memory book catalog.
//!
//! The catalog is the sole owner and mutator of [`BookRecord`]s. The ISBN-keyed
//! map enforces uniqueness; `decrement_stock` is the only mutation besides
//! `upsert`, so `available_count` can never go negative.
//!
//! A `BTreeMap` keeps iteration (and therefore the saved document and search
//! tie-breaks) deterministic by ISBN.

use crate::error::{BiblioError, Result};
use crate::model::BookRecord;
use crate::query::{self, SearchField};
use std::collections::BTreeMap;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Catalog {
    books: BTreeMap<String, BookRecord>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a catalog from decoded records (used by the persistence layer).
    pub fn from_records(books: BTreeMap<String, BookRecord>) -> Self {
        Self { books }
    }

    /// The underlying ISBN-keyed map, for encoding.
    pub fn records(&self) -> &BTreeMap<String, BookRecord> {
        &self.books
    }

    /// Insert or replace the record keyed by its ISBN. Last write wins; no
    /// field merging.
    pub fn upsert(&mut self, record: BookRecord) {
        self.books.insert(record.isbn.clone(), record);
    }

    pub fn get(&self, isbn: &str) -> Option<&BookRecord> {
        self.books.get(isbn)
    }

    /// Take one copy off the shelf.
    ///
    /// Fails with `BookNotFound` for an unknown ISBN and `OutOfStock` when no
    /// copies remain; on failure nothing is mutated.
    pub fn decrement_stock(&mut self, isbn: &str) -> Result<()> {
        let book = self
            .books
            .get_mut(isbn)
            .ok_or_else(|| BiblioError::BookNotFound(isbn.to_string()))?;

        if book.available_count == 0 {
            return Err(BiblioError::OutOfStock(isbn.to_string()));
        }

        book.available_count -= 1;
        Ok(())
    }

    /// All records, ordered by title (ordinal comparison).
    pub fn list_all(&self) -> Vec<BookRecord> {
        let mut books: Vec<BookRecord> = self.books.values().cloned().collect();
        books.sort_by(|a, b| a.title.cmp(&b.title));
        books
    }

    /// Case-insensitive substring search on one field; results ordered
    /// ascending by that field. An empty term matches everything.
    pub fn search(&self, field: SearchField, term: &str) -> Vec<BookRecord> {
        query::search(self.books.values().cloned().collect(), field, term)
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
