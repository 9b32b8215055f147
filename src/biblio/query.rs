//! Substring search over catalog fields.
//!
//! Single-field, case-insensitive, linear scan. Catalogs are small (tens to
//! low thousands of records), so no index is kept. Results are sorted
//! ascending on the searched field with a stable sort, so equal keys keep the
//! deterministic ISBN order the catalog iterates in.

use crate::model::BookRecord;

/// The book field a search runs against. Being an enum, an unknown field is
/// unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Title,
    Author,
    Genre,
}

impl SearchField {
    /// The value of this field on a given record.
    pub fn key<'a>(&self, book: &'a BookRecord) -> &'a str {
        match self {
            SearchField::Title => &book.title,
            SearchField::Author => &book.author,
            SearchField::Genre => &book.genre,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SearchField::Title => "title",
            SearchField::Author => "author",
            SearchField::Genre => "genre",
        }
    }
}

/// Filter `books` down to those whose `field` contains `term`
/// (case-insensitively) and sort them ascending on that field.
///
/// An empty term matches every record.
pub fn search(books: Vec<BookRecord>, field: SearchField, term: &str) -> Vec<BookRecord> {
    let term_lower = term.to_lowercase();

    let mut matches: Vec<BookRecord> = books
        .into_iter()
        .filter(|book| field.key(book).to_lowercase().contains(&term_lower))
        .collect();

    matches.sort_by(|a, b| field.key(a).cmp(field.key(b)));
    matches
}
