//! # API Facade
//!
//! The single entry point for all library operations, regardless of the UI
//! driving it. The facade owns the in-memory catalog and ledger and the
//! storage backend; commands get handed mutable references to exactly the
//! state they need.
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs`
//! - **I/O operations**: no stdout, stderr, or terminal formatting
//! - **Presentation concerns**: returns data structures, not strings
//!
//! ## Generic Over DataStore
//!
//! `LibraryApi<S: DataStore>` is generic over the storage backend:
//! production uses `FileStore`, tests use `InMemoryStore`.

use crate::catalog::Catalog;
use crate::commands;
use crate::error::Result;
use crate::ledger::Ledger;
use crate::query::SearchField;
use crate::store::DataStore;
use chrono::NaiveDate;

/// The main API facade for library operations.
pub struct LibraryApi<S: DataStore> {
    store: S,
    catalog: Catalog,
    ledger: Ledger,
}

impl<S: DataStore> LibraryApi<S> {
    /// Open the library on top of a store, loading both collections.
    ///
    /// A collection whose backing data cannot be read or decoded starts empty;
    /// the failure comes back as a warning message instead of aborting the
    /// session.
    pub fn open(store: S) -> (Self, Vec<CmdMessage>) {
        let mut messages = Vec::new();

        let catalog = match store.load_catalog() {
            Ok(catalog) => catalog,
            Err(e) => {
                messages.push(CmdMessage::warning(format!(
                    "Could not load the catalog, starting empty: {}",
                    e
                )));
                Catalog::new()
            }
        };

        let ledger = match store.load_ledger() {
            Ok(ledger) => ledger,
            Err(e) => {
                messages.push(CmdMessage::warning(format!(
                    "Could not load the loan ledger, starting empty: {}",
                    e
                )));
                Ledger::new()
            }
        };

        (
            Self {
                store,
                catalog,
                ledger,
            },
            messages,
        )
    }

    pub fn add_book(
        &mut self,
        isbn: &str,
        title: &str,
        author: &str,
        genre: &str,
        count: u32,
    ) -> Result<CmdResult> {
        commands::add::run(
            &mut self.catalog,
            &mut self.store,
            isbn,
            title,
            author,
            genre,
            count,
        )
    }

    pub fn register_loan(
        &mut self,
        isbn: &str,
        borrower: &str,
        date: NaiveDate,
    ) -> Result<CmdResult> {
        commands::loan::run(
            &mut self.catalog,
            &mut self.ledger,
            &mut self.store,
            isbn,
            borrower,
            date,
        )
    }

    pub fn list_books(&self) -> Result<CmdResult> {
        commands::list::run(&self.catalog)
    }

    pub fn search_books(&self, field: SearchField, term: &str) -> Result<CmdResult> {
        commands::search::run(&self.catalog, field, term)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Consume the facade and hand back the storage backend.
    pub fn into_store(self) -> S {
        self.store
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
