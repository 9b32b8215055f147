use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::query::SearchField;

/// Search one field of the catalog by case-insensitive substring.
pub fn run(catalog: &Catalog, field: SearchField, term: &str) -> Result<CmdResult> {
    let matches = catalog.search(field, term);

    if matches.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info(format!(
            "No books found for that {}.",
            field.label()
        ))));
    }

    let count = matches.len();
    Ok(CmdResult::default()
        .with_listed_books(matches)
        .with_message(CmdMessage::info(format!("{} result(s) found.", count))))
}
