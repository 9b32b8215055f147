use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BiblioError, Result};
use crate::ledger::Ledger;
use crate::model::LoanRecord;
use crate::store::DataStore;
use chrono::NaiveDate;

/// Register a loan: take one copy off the shelf and append a ledger entry,
/// then persist catalog and ledger in that order.
///
/// Validation happens before any mutation, so a rejected loan leaves both
/// collections untouched. A save failure after the mutation comes back as an
/// error-level message while the in-memory state stands; the next successful
/// save reconciles the files.
pub fn run<S: DataStore>(
    catalog: &mut Catalog,
    ledger: &mut Ledger,
    store: &mut S,
    isbn: &str,
    borrower: &str,
    date: NaiveDate,
) -> Result<CmdResult> {
    if isbn.trim().is_empty() {
        return Err(BiblioError::Validation("ISBN must not be empty".into()));
    }
    if borrower.trim().is_empty() {
        return Err(BiblioError::Validation(
            "Borrower name must not be empty".into(),
        ));
    }

    // Fails with BookNotFound or OutOfStock before anything changes.
    catalog.decrement_stock(isbn)?;
    ledger.append(LoanRecord::new(isbn, borrower, date));

    // Two sequential writes, catalog first. A failure here is reported while
    // the in-memory mutation stands.
    let saved = store
        .save_catalog(catalog)
        .and_then(|()| store.save_ledger(ledger));

    let message = match saved {
        Ok(()) => CmdMessage::success("Loan registered successfully."),
        Err(e) => CmdMessage::error(format!("Loan recorded, but saving failed: {}", e)),
    };
    Ok(CmdResult::default().with_message(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BookRecord;
    use crate::store::memory::InMemoryStore;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    fn catalog_with_dune(count: u32) -> Catalog {
        let mut catalog = Catalog::new();
        catalog.upsert(BookRecord::new("978-0", "Dune", "Herbert", "SciFi", count));
        catalog
    }

    #[test]
    fn decrements_stock_and_appends_one_entry() {
        let mut catalog = catalog_with_dune(2);
        let mut ledger = Ledger::new();
        let mut store = InMemoryStore::new();

        run(&mut catalog, &mut ledger, &mut store, "978-0", "Alice", date(1)).unwrap();

        assert_eq!(catalog.get("978-0").unwrap().available_count, 1);
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.list_all()[0].borrower, "Alice");
        assert_eq!(ledger.list_all()[0].date, date(1));

        // Both files were persisted.
        assert_eq!(store.load_catalog().unwrap(), catalog);
        assert_eq!(store.load_ledger().unwrap(), ledger);
    }

    #[test]
    fn missing_book_leaves_everything_unchanged() {
        let mut catalog = Catalog::new();
        let mut ledger = Ledger::new();
        let mut store = InMemoryStore::new();

        let err = run(&mut catalog, &mut ledger, &mut store, "nope", "Alice", date(1)).unwrap_err();
        assert!(matches!(err, BiblioError::BookNotFound(_)));
        assert!(ledger.is_empty());
    }

    #[test]
    fn out_of_stock_leaves_catalog_and_ledger_unchanged() {
        let mut catalog = catalog_with_dune(0);
        let mut ledger = Ledger::new();
        let mut store = InMemoryStore::new();

        let err =
            run(&mut catalog, &mut ledger, &mut store, "978-0", "Carol", date(3)).unwrap_err();
        assert!(matches!(err, BiblioError::OutOfStock(_)));
        assert_eq!(catalog.get("978-0").unwrap().available_count, 0);
        assert!(ledger.is_empty());
    }

    #[test]
    fn empty_borrower_is_rejected_before_mutation() {
        let mut catalog = catalog_with_dune(1);
        let mut ledger = Ledger::new();
        let mut store = InMemoryStore::new();

        let err = run(&mut catalog, &mut ledger, &mut store, "978-0", "", date(1)).unwrap_err();
        assert!(matches!(err, BiblioError::Validation(_)));
        assert_eq!(catalog.get("978-0").unwrap().available_count, 1);
        assert!(ledger.is_empty());
    }

    #[test]
    fn ledger_save_failure_is_reported_and_the_mutation_stands() {
        use crate::commands::MessageLevel;

        struct FlakyLedgerStore {
            inner: InMemoryStore,
        }

        impl DataStore for FlakyLedgerStore {
            fn load_catalog(&self) -> Result<Catalog> {
                self.inner.load_catalog()
            }
            fn save_catalog(&mut self, catalog: &Catalog) -> Result<()> {
                self.inner.save_catalog(catalog)
            }
            fn load_ledger(&self) -> Result<Ledger> {
                self.inner.load_ledger()
            }
            fn save_ledger(&mut self, _: &Ledger) -> Result<()> {
                Err(BiblioError::Io(std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    "read-only filesystem",
                )))
            }
        }

        let mut catalog = catalog_with_dune(2);
        let mut ledger = Ledger::new();
        let mut store = FlakyLedgerStore {
            inner: InMemoryStore::new(),
        };

        let result =
            run(&mut catalog, &mut ledger, &mut store, "978-0", "Alice", date(1)).unwrap();

        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert!(result.messages[0].content.contains("saving failed"));

        // The in-memory mutation stands, and the catalog write went through
        // before the ledger write failed.
        assert_eq!(catalog.get("978-0").unwrap().available_count, 1);
        assert_eq!(ledger.len(), 1);
        assert_eq!(store.inner.load_catalog().unwrap(), catalog);
        assert!(store.inner.load_ledger().unwrap().is_empty());
    }

    #[test]
    fn loans_drain_stock_to_zero_then_fail() {
        let mut catalog = catalog_with_dune(2);
        let mut ledger = Ledger::new();
        let mut store = InMemoryStore::new();

        run(&mut catalog, &mut ledger, &mut store, "978-0", "Alice", date(1)).unwrap();
        run(&mut catalog, &mut ledger, &mut store, "978-0", "Bob", date(2)).unwrap();
        assert_eq!(catalog.get("978-0").unwrap().available_count, 0);

        let err =
            run(&mut catalog, &mut ledger, &mut store, "978-0", "Carol", date(3)).unwrap_err();
        assert!(matches!(err, BiblioError::OutOfStock(_)));
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.list_all()[0].borrower, "Alice");
        assert_eq!(ledger.list_all()[1].borrower, "Bob");
    }
}
