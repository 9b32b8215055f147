//! # Biblio Architecture
//!
//! Biblio is a **UI-agnostic library-management library**. The interactive menu is
//! just one client; everything from the façade inward is plain Rust types in, plain
//! Rust types out.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Menu Layer (main.rs, args.rs, prompt.rs)                   │
//! │  - Prompts for input, renders rows, colors messages         │
//! │  - The ONLY place that knows about stdin/stdout             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns the in-memory catalog and ledger                    │
//! │  - Absorbs load failures into warnings + empty collections  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic: add, loan, list, search                  │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait                                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular arguments, returns
//! `Result<CmdResult>`, never writes to stdout/stderr and never calls
//! `std::process::exit`. A failed operation is a message back to the menu,
//! not the end of the session.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each menu action
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`BookRecord`, `LoanRecord`)
//! - [`catalog`]: The ISBN-keyed book catalog and its invariants
//! - [`ledger`]: The append-only loan ledger
//! - [`codec`]: JSON wire documents for the two persisted files
//! - [`query`]: Case-insensitive substring search over catalog fields
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod codec;
pub mod commands;
pub mod error;
pub mod ledger;
pub mod model;
pub mod query;
pub mod store;
