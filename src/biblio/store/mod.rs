//! # Storage Layer
//!
//! This module defines the storage abstraction for biblio. The [`DataStore`]
//! trait lets the application work with different persistence backends.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Allow **future backends** without changing core logic
//! - Keep business logic **decoupled** from persistence details
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - Catalog in `Data/books.json` (JSON object keyed by ISBN)
//!   - Ledger in `Data/loans.json` (JSON array, append order)
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!
//! ## Persistence Contract
//!
//! Each file is fully overwritten on every save; there are no partial or
//! append-in-place writes. An absent file loads as an empty collection. Loads
//! return `Decode`/`Io` errors for the caller to absorb; they never panic.
//!
//! Loan registration saves the catalog and then the ledger as two sequential
//! writes. If the second write fails the two files are inconsistent until the
//! next successful save; within a single interactive session this window is
//! accepted.

use crate::catalog::Catalog;
use crate::error::Result;
use crate::ledger::Ledger;

pub mod fs;
pub mod memory;

/// Abstract interface for catalog and ledger persistence.
pub trait DataStore {
    /// Load the full catalog; absent backing data yields an empty catalog.
    fn load_catalog(&self) -> Result<Catalog>;

    /// Overwrite the persisted catalog with the given one.
    fn save_catalog(&mut self, catalog: &Catalog) -> Result<()>;

    /// Load the full ledger; absent backing data yields an empty ledger.
    fn load_ledger(&self) -> Result<Ledger>;

    /// Overwrite the persisted ledger with the given one.
    fn save_ledger(&mut self, ledger: &Ledger) -> Result<()>;
}
