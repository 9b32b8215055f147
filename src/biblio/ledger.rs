//! The append-only loan ledger.
//!
//! Insertion order is the only ordering guarantee. No update or delete
//! operation exists; `list_all` is exposed for rendering and tests.

use crate::model::LoanRecord;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Ledger {
    loans: Vec<LoanRecord>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(loans: Vec<LoanRecord>) -> Self {
        Self { loans }
    }

    pub fn append(&mut self, record: LoanRecord) {
        self.loans.push(record);
    }

    pub fn list_all(&self) -> &[LoanRecord] {
        &self.loans
    }

    pub fn len(&self) -> usize {
        self.loans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loans.is_empty()
    }
}
