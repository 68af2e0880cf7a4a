use serde::{Deserialize, Serialize};

use super::Cents;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    /// Money entering the ledger (salary, freelance work, ...)
    Income,
    /// Money leaving the ledger (food, rent, ...)
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "Income",
            TransactionKind::Expense => "Expense",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Income" => Some(TransactionKind::Income),
            "Expense" => Some(TransactionKind::Expense),
            _ => None,
        }
    }

    /// Sign applied to the amount when accumulating a balance.
    pub fn signum(&self) -> Cents {
        match self {
            TransactionKind::Income => 1,
            TransactionKind::Expense => -1,
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single ledger entry. Transactions are immutable once constructed;
/// corrections are made by rewriting the ledger, never by mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub kind: TransactionKind,
    /// Amount in cents, always non-negative; direction comes from `kind`
    pub amount: Cents,
    /// Category name, drawn from the configured set for the kind
    pub category: String,
    /// Calendar date in dd-MM-yyyy form, validated at the input boundary
    pub date: String,
}

impl Transaction {
    pub fn new(
        kind: TransactionKind,
        amount: Cents,
        category: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        assert!(amount >= 0, "transaction amount must be non-negative");
        Self {
            kind,
            amount,
            category: category.into(),
            date: date.into(),
        }
    }

    /// Contribution of this transaction to a running balance.
    pub fn signed_amount(&self) -> Cents {
        self.kind.signum() * self.amount
    }
}
