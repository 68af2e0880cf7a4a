use super::{Cents, Transaction, TransactionKind};

/// In-memory ordered collection of transactions for the current session.
/// Insertion order is preserved; the flat-file store re-sorts by date only
/// when persisting. Aggregates are pure computed views, no cached state.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_transactions(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    pub fn add(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    fn total_for(&self, kind: TransactionKind) -> Cents {
        self.transactions
            .iter()
            .filter(|t| t.kind == kind)
            .map(|t| t.amount)
            .sum()
    }

    pub fn total_income(&self) -> Cents {
        self.total_for(TransactionKind::Income)
    }

    pub fn total_expense(&self) -> Cents {
        self.total_for(TransactionKind::Expense)
    }

    /// Net savings: income minus expense. May be negative.
    pub fn savings(&self) -> Cents {
        self.total_income() - self.total_expense()
    }
}
