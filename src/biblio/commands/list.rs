use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

/// List every book, ordered by title.
pub fn run(catalog: &Catalog) -> Result<CmdResult> {
    if catalog.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info("No books registered.")));
    }

    Ok(CmdResult::default().with_listed_books(catalog.list_all()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BookRecord;

    #[test]
    fn lists_books_sorted_by_title() {
        let mut catalog = Catalog::new();
        catalog.upsert(BookRecord::new("2", "Zebra", "A", "G", 1));
        catalog.upsert(BookRecord::new("1", "Apple", "B", "G", 1));

        let result = run(&catalog).unwrap();
        let titles: Vec<&str> = result.listed_books.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, ["Apple", "Zebra"]);
    }

    #[test]
    fn empty_catalog_yields_a_message_and_no_rows() {
        let result = run(&Catalog::new()).unwrap();
        assert!(result.listed_books.is_empty());
        assert_eq!(result.messages.len(), 1);
    }
}
