use crate::domain::{
    CategorySet, Cents, Ledger, Transaction, TransactionKind, validate_amount, validate_date,
};
use crate::storage::FlatFileStore;

use super::AppError;

/// Application service providing high-level operations over the ledger.
/// This is the primary interface for any client (CLI, exporter, tests):
/// raw user input crosses this boundary and is validated here, so a
/// Transaction never exists until its fields have passed validation.
pub struct TrackerService {
    ledger: Ledger,
    store: FlatFileStore,
    categories: CategorySet,
}

impl TrackerService {
    /// Open the tracker over the store's file. A missing file means a first
    /// run and yields an empty ledger.
    pub fn load(store: FlatFileStore, categories: CategorySet) -> Self {
        let ledger = Ledger::from_transactions(store.read());
        Self {
            ledger,
            store,
            categories,
        }
    }

    pub fn categories(&self, kind: TransactionKind) -> &[String] {
        self.categories.names(kind)
    }

    /// Record a transaction from raw user input. `category_index` is the
    /// 1-based menu choice; an out-of-range index abandons the add.
    pub fn add_transaction(
        &mut self,
        kind: TransactionKind,
        amount: &str,
        category_index: usize,
        date: &str,
    ) -> Result<Transaction, AppError> {
        let amount = validate_amount(amount)?;
        let date = validate_date(date)?;
        let category = self.categories.resolve(kind, category_index).ok_or(
            AppError::CategoryOutOfRange {
                kind,
                index: category_index,
                available: self.categories.names(kind).len(),
            },
        )?;

        let transaction = Transaction::new(kind, amount, category, date);
        self.ledger.add(transaction.clone());
        Ok(transaction)
    }

    pub fn transactions(&self) -> &[Transaction] {
        self.ledger.transactions()
    }

    pub fn total_income(&self) -> Cents {
        self.ledger.total_income()
    }

    pub fn total_expense(&self) -> Cents {
        self.ledger.total_expense()
    }

    pub fn savings(&self) -> Cents {
        self.ledger.savings()
    }

    /// Persist the ledger to its file (date-sorted, grouped, with closing
    /// balances). In-memory state is unchanged either way.
    pub fn save(&self) -> Result<(), AppError> {
        self.store.write(self.ledger.transactions())?;
        Ok(())
    }
}
