use super::DataStore;
use crate::catalog::Catalog;
use crate::codec;
use crate::error::{BiblioError, Result};
use crate::ledger::Ledger;
use std::fs;
use std::path::{Path, PathBuf};

const BOOKS_FILE: &str = "books.json";
const LOANS_FILE: &str = "loans.json";

/// File-backed store keeping both documents under one data directory
/// (`Data/` by default, beside the working directory).
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn books_path(&self) -> PathBuf {
        self.data_dir.join(BOOKS_FILE)
    }

    pub fn loans_path(&self) -> PathBuf {
        self.data_dir.join(LOANS_FILE)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.data_dir.exists() {
            fs::create_dir_all(&self.data_dir).map_err(BiblioError::Io)?;
        }
        Ok(())
    }

    fn read_if_present(path: &Path) -> Result<Option<String>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(BiblioError::Io)?;
        Ok(Some(content))
    }
}

impl DataStore for FileStore {
    fn load_catalog(&self) -> Result<Catalog> {
        match Self::read_if_present(&self.books_path())? {
            Some(content) => Ok(Catalog::from_records(codec::decode_books(&content)?)),
            None => Ok(Catalog::new()),
        }
    }

    fn save_catalog(&mut self, catalog: &Catalog) -> Result<()> {
        self.ensure_dir()?;
        let content = codec::encode_books(catalog.records())?;
        fs::write(self.books_path(), content).map_err(BiblioError::Io)?;
        Ok(())
    }

    fn load_ledger(&self) -> Result<Ledger> {
        match Self::read_if_present(&self.loans_path())? {
            Some(content) => Ok(Ledger::from_records(codec::decode_loans(&content)?)),
            None => Ok(Ledger::new()),
        }
    }

    fn save_ledger(&mut self, ledger: &Ledger) -> Result<()> {
        self.ensure_dir()?;
        let content = codec::encode_loans(ledger)?;
        fs::write(self.loans_path(), content).map_err(BiblioError::Io)?;
        Ok(())
    }
}
