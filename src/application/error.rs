use thiserror::Error;

use crate::domain::{AmountError, DateError, TransactionKind};

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    InvalidAmount(#[from] AmountError),

    #[error(transparent)]
    InvalidDate(#[from] DateError),

    #[error("Invalid {kind} category choice: {index} (valid: 1-{available})")]
    CategoryOutOfRange {
        kind: TransactionKind,
        index: usize,
        available: usize,
    },

    #[error("Failed to save ledger: {0}")]
    Storage(#[from] std::io::Error),
}
