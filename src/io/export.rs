use anyhow::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::domain::{today, Account, Amount, Transaction};

/// Machine-readable statement for JSON export.
/// Transactions are listed newest first, like the printed statement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatementSnapshot {
    pub version: String,
    pub generated_on: NaiveDate,
    pub balance: Amount,
    pub transaction_count: usize,
    pub transactions: Vec<Transaction>,
}

/// Exporter for writing an account statement in various formats
pub struct Exporter<'a> {
    account: &'a Account,
}

impl<'a> Exporter<'a> {
    pub fn new(account: &'a Account) -> Self {
        Self { account }
    }

    /// Export the statement in its printed text form
    pub fn export_statement_text<W: Write>(&self, mut writer: W) -> Result<usize> {
        let statement = self.account.statement();
        write!(writer, "{}", statement)?;
        writer.flush()?;
        Ok(statement.len())
    }

    /// Export the statement to CSV format
    pub fn export_statement_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["date", "amount", "balance"])?;

        let mut count = 0;
        for tx in self.account.statement().entries() {
            csv_writer.write_record(&[
                tx.date.to_string(),
                tx.amount.to_string(),
                tx.balance.to_string(),
            ])?;
            count += 1;
        }

        csv_writer.flush()?;
        Ok(count)
    }

    /// Export the statement as a JSON snapshot
    pub fn export_statement_json<W: Write>(&self, mut writer: W) -> Result<StatementSnapshot> {
        let snapshot = StatementSnapshot {
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated_on: today(),
            balance: self.account.balance(),
            transaction_count: self.account.transaction_count(),
            transactions: self.account.statement().entries().copied().collect(),
        };

        let json = serde_json::to_string_pretty(&snapshot)?;
        writer.write_all(json.as_bytes())?;
        writer.flush()?;

        Ok(snapshot)
    }
}
