use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BiblioError, Result};
use crate::model::BookRecord;
use crate::store::DataStore;

/// Add a book to the catalog and persist it. An existing record with the same
/// ISBN is replaced wholesale (last write wins).
pub fn run<S: DataStore>(
    catalog: &mut Catalog,
    store: &mut S,
    isbn: &str,
    title: &str,
    author: &str,
    genre: &str,
    count: u32,
) -> Result<CmdResult> {
    if isbn.trim().is_empty() {
        return Err(BiblioError::Validation("ISBN must not be empty".into()));
    }

    let replaced = catalog.get(isbn).is_some();
    catalog.upsert(BookRecord::new(isbn, title, author, genre, count));

    // A failed write is reported while the in-memory record stands; the next
    // successful save writes it out.
    let mut result = CmdResult::default();
    match store.save_catalog(catalog) {
        Ok(()) => result.add_message(CmdMessage::success("Book added successfully.")),
        Err(e) => result.add_message(CmdMessage::error(format!(
            "Book added, but saving the catalog failed: {}",
            e
        ))),
    }
    if replaced {
        result.add_message(CmdMessage::info(format!(
            "Replaced the existing entry for ISBN {}.",
            isbn
        )));
    }
    Ok(result)
}
