use std::cmp::Ordering;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::domain::{
    Transaction, TransactionKind, format_cents, parse_cents, parse_ledger_date,
};

pub const DEFAULT_LEDGER_FILE: &str = "transactions.txt";
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

const DATE_PREFIX: &str = "Date: ";
const FIELD_DELIMITER: &str = " | ";
const TABLE_HEADER: &str = "Serial No | Category | Type | Amount";
const TABLE_SEPARATOR: &str = "--------------------------------------";

/// Text-file persistence for a ledger. Transactions are written grouped by
/// date, each block followed by a closing balance that runs across the whole
/// file. The reader accepts exactly what the writer produces, plus
/// hand-edited files with damaged rows (dropped, never fatal).
pub struct FlatFileStore {
    path: PathBuf,
    currency_symbol: String,
}

impl FlatFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }

    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the full ledger to the file, replacing any previous contents.
    /// Any I/O failure aborts the write; partial output is not rolled back.
    pub fn write(&self, transactions: &[Transaction]) -> io::Result<()> {
        let sorted = sort_for_storage(transactions);
        let buckets = group_by_date(&sorted);

        let file = fs::File::create(&self.path)?;
        let mut writer = BufWriter::new(file);

        // Closing balance accumulates over the whole file, never reset.
        let mut balance = 0;
        for (date, entries) in buckets {
            writeln!(writer, "{DATE_PREFIX}{date}")?;
            writeln!(writer, "{TABLE_HEADER}")?;
            writeln!(writer, "{TABLE_SEPARATOR}")?;

            for (serial, transaction) in entries.iter().enumerate() {
                writeln!(
                    writer,
                    "{} | {} | {} | {}{}",
                    serial + 1,
                    transaction.category,
                    transaction.kind,
                    self.currency_symbol,
                    format_cents(transaction.amount),
                )?;
                balance += transaction.signed_amount();
            }

            writeln!(writer)?;
            writeln!(
                writer,
                "Closing Balance: {}{}",
                self.currency_symbol,
                format_cents(balance),
            )?;
            writeln!(writer)?;
        }

        writer.flush()
    }

    /// Load all transactions from the file. A missing or unreadable file is
    /// first-run territory and yields an empty collection, not an error.
    pub fn read(&self) -> Vec<Transaction> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => parse_ledger(&contents, &self.currency_symbol),
            Err(_) => Vec::new(),
        }
    }
}

/// Sort a copy of the transactions ascending by date. The sort is stable:
/// same-date entries keep their original relative order, and a pair where
/// either date fails to parse compares equal rather than aborting the save.
fn sort_for_storage(transactions: &[Transaction]) -> Vec<Transaction> {
    let mut sorted = transactions.to_vec();
    sorted.sort_by(
        |a, b| match (parse_ledger_date(&a.date), parse_ledger_date(&b.date)) {
            (Some(a), Some(b)) => a.cmp(&b),
            _ => Ordering::Equal,
        },
    );
    sorted
}

/// Bucket sorted transactions by exact date string, preserving first-seen
/// bucket order. Duplicate date strings separated by an unparsable date
/// still merge into their first bucket.
fn group_by_date(sorted: &[Transaction]) -> Vec<(&str, Vec<&Transaction>)> {
    let mut buckets: Vec<(&str, Vec<&Transaction>)> = Vec::new();
    for transaction in sorted {
        match buckets.iter_mut().find(|(date, _)| *date == transaction.date) {
            Some((_, entries)) => entries.push(transaction),
            None => buckets.push((transaction.date.as_str(), vec![transaction])),
        }
    }
    buckets
}

fn parse_ledger(contents: &str, currency_symbol: &str) -> Vec<Transaction> {
    let mut transactions = Vec::new();
    let mut lines = contents.lines();

    while let Some(line) = lines.next() {
        let Some(date) = line.strip_prefix(DATE_PREFIX) else {
            continue;
        };

        // Table header and separator: written but never validated.
        let _ = lines.next();
        let _ = lines.next();

        for row in lines.by_ref() {
            if row.is_empty() {
                break;
            }
            if let Some(transaction) = parse_row(row, date, currency_symbol) {
                transactions.push(transaction);
            }
        }

        // The closing-balance line is never reached here: the blank line
        // above it ends the row loop, and even with that blank line missing
        // it fails the four-field split in parse_row. Existing files depend
        // on this implicit skip, so it stays implicit.
    }

    transactions
}

/// Parse one stored row of the form `n | category | kind | <symbol>amount`.
/// Rows with the wrong field count or an unparsable amount are dropped
/// silently; lossy, but a damaged line must never fail the whole load.
fn parse_row(row: &str, date: &str, currency_symbol: &str) -> Option<Transaction> {
    let fields: Vec<&str> = row.split(FIELD_DELIMITER).collect();
    if fields.len() != 4 {
        return None;
    }

    let category = fields[1];
    // Historical files only ever contained the two kinds, written by us, so
    // anything that is not "Income" loads as an expense.
    let kind = TransactionKind::from_str(fields[2]).unwrap_or(TransactionKind::Expense);

    let amount_text = fields[3]
        .strip_prefix(currency_symbol)
        .unwrap_or(fields[3]);
    let amount = parse_cents(amount_text).ok().filter(|cents| *cents >= 0)?;

    Some(Transaction::new(kind, amount, category, date))
}
