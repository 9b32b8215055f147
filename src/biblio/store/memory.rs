use super::DataStore;
use crate::catalog::Catalog;
use crate::error::Result;
use crate::ledger::Ledger;

/// In-memory storage for testing and development.
/// Does NOT persist data beyond the process.
#[derive(Default)]
pub struct InMemoryStore {
    catalog: Catalog,
    ledger: Ledger,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn load_catalog(&self) -> Result<Catalog> {
        Ok(self.catalog.clone())
    }

    fn save_catalog(&mut self, catalog: &Catalog) -> Result<()> {
        self.catalog = catalog.clone();
        Ok(())
    }

    fn load_ledger(&self) -> Result<Ledger> {
        Ok(self.ledger.clone())
    }

    fn save_ledger(&mut self, ledger: &Ledger) -> Result<()> {
        self.ledger = ledger.clone();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::BookRecord;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_book(mut self, isbn: &str, title: &str, count: u32) -> Self {
            let mut catalog = self.store.load_catalog().unwrap();
            catalog.upsert(BookRecord::new(isbn, title, "Test Author", "Test Genre", count));
            self.store.save_catalog(&catalog).unwrap();
            self
        }

        pub fn with_books(mut self, count: usize) -> Self {
            let mut catalog = self.store.load_catalog().unwrap();
            for i in 0..count {
                let isbn = format!("isbn-{}", i + 1);
                let title = format!("Test Book {}", i + 1);
                catalog.upsert(BookRecord::new(isbn, title, "Test Author", "Test Genre", 1));
            }
            self.store.save_catalog(&catalog).unwrap();
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;

    #[test]
    fn fixture_builds_a_persisted_catalog() {
        let fixture = StoreFixture::new().with_book("978-0", "Dune", 2).with_books(3);

        let catalog = fixture.store.load_catalog().unwrap();
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.get("978-0").unwrap().available_count, 2);
        assert_eq!(catalog.get("isbn-2").unwrap().title, "Test Book 2");
    }

    #[test]
    fn saves_replace_prior_state() {
        let mut store = InMemoryStore::new();
        let mut catalog = store.load_catalog().unwrap();
        catalog.upsert(crate::model::BookRecord::new("1", "A", "B", "C", 1));
        store.save_catalog(&catalog).unwrap();

        store.save_catalog(&Catalog::new()).unwrap();
        assert!(store.load_catalog().unwrap().is_empty());
    }
}
