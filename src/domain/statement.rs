use std::fmt;
use std::iter::Rev;
use std::slice::Iter;

use super::Transaction;

pub const STATEMENT_HEADER: &str = "Date       || Amount || Balance";

/// Read-only view over an account history, rendered newest first.
#[derive(Debug, Clone, Copy)]
pub struct Statement<'a> {
    transactions: &'a [Transaction],
}

impl<'a> Statement<'a> {
    /// `transactions` must be in recording order (oldest first).
    pub fn new(transactions: &'a [Transaction]) -> Self {
        Self { transactions }
    }

    /// Statement entries, most recently recorded first.
    pub fn entries(&self) -> Rev<Iter<'a, Transaction>> {
        self.transactions.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

impl fmt::Display for Statement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", STATEMENT_HEADER)?;
        for tx in self.entries() {
            writeln!(
                f,
                "{} || {} || {}",
                tx.formatted_date(),
                tx.amount,
                tx.balance
            )?;
        }
        Ok(())
    }
}
