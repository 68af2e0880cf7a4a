use std::io::Write;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::TrackerService;
use crate::domain::{Transaction, format_cents};

/// Ledger snapshot for full JSON export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub version: String,
    pub exported_at: DateTime<Utc>,
    pub transactions: Vec<Transaction>,
}

/// Exporter for converting ledger data to interchange formats
pub struct Exporter<'a> {
    service: &'a TrackerService,
}

impl<'a> Exporter<'a> {
    pub fn new(service: &'a TrackerService) -> Self {
        Self { service }
    }

    /// Export transactions to CSV format
    pub fn export_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["date", "type", "category", "amount"])?;

        let mut count = 0;
        for transaction in self.service.transactions() {
            csv_writer.write_record([
                transaction.date.as_str(),
                transaction.kind.as_str(),
                transaction.category.as_str(),
                &format_cents(transaction.amount),
            ])?;
            count += 1;
        }

        csv_writer.flush()?;
        Ok(count)
    }

    /// Export the full ledger as a JSON snapshot
    pub fn export_json<W: Write>(&self, mut writer: W) -> Result<LedgerSnapshot> {
        let snapshot = LedgerSnapshot {
            version: env!("CARGO_PKG_VERSION").to_string(),
            exported_at: Utc::now(),
            transactions: self.service.transactions().to_vec(),
        };

        let json = serde_json::to_string_pretty(&snapshot)?;
        writer.write_all(json.as_bytes())?;
        writer.flush()?;

        Ok(snapshot)
    }
}
