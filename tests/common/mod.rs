// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use std::path::PathBuf;

use anyhow::Result;
use fintrack::application::TrackerService;
use fintrack::domain::{CategorySet, Transaction, TransactionKind};
use fintrack::storage::FlatFileStore;
use tempfile::TempDir;

/// Helper to create a store over a file inside a temporary directory
pub fn test_store() -> Result<(FlatFileStore, PathBuf, TempDir)> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("transactions.txt");
    let store = FlatFileStore::new(&path);
    Ok((store, path, temp_dir))
}

/// Helper to create a service with the default categories over a temp file
pub fn test_service() -> Result<(TrackerService, PathBuf, TempDir)> {
    let (store, path, temp_dir) = test_store()?;
    let service = TrackerService::load(store, CategorySet::default());
    Ok((service, path, temp_dir))
}

pub fn income(amount: i64, category: &str, date: &str) -> Transaction {
    Transaction::new(TransactionKind::Income, amount, category, date)
}

pub fn expense(amount: i64, category: &str, date: &str) -> Transaction {
    Transaction::new(TransactionKind::Expense, amount, category, date)
}
