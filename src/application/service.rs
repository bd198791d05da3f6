use chrono::NaiveDate;
use tracing::{debug, info};

use crate::domain::{Account, Amount, Transaction, TransactionKind};

use super::AppError;

/// A deposit or withdrawal requested by a caller.
/// `date: None` means "today", resolved when the operation is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    pub kind: TransactionKind,
    pub amount: Amount,
    pub date: Option<NaiveDate>,
}

impl Operation {
    pub fn deposit(amount: Amount) -> Self {
        Self {
            kind: TransactionKind::Deposit,
            amount,
            date: None,
        }
    }

    pub fn withdrawal(amount: Amount) -> Self {
        Self {
            kind: TransactionKind::Withdrawal,
            amount,
            date: None,
        }
    }

    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }
}

/// An operation the ledger refused, with its position in the replayed sequence.
#[derive(Debug, Clone)]
pub struct Rejection {
    pub index: usize,
    pub operation: Operation,
    pub error: AppError,
}

/// Outcome of replaying a sequence of operations
#[derive(Debug, Clone, Default)]
pub struct ReplayReport {
    pub applied: usize,
    pub rejected: Vec<Rejection>,
}

impl ReplayReport {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Application service wrapping one account.
/// This is the interface used by the CLI and by the importer.
#[derive(Debug, Clone, Default)]
pub struct LedgerService {
    account: Account,
}

impl LedgerService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_account(account: Account) -> Self {
        Self { account }
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn into_account(self) -> Account {
        self.account
    }

    /// Apply a single operation. Undated operations use the date-less
    /// ledger calls, so they are booked today.
    pub fn apply(&mut self, operation: &Operation) -> Result<Transaction, AppError> {
        let Operation { kind, amount, date } = *operation;
        let result = match (kind, date) {
            (TransactionKind::Deposit, None) => self.account.deposit(amount),
            (TransactionKind::Deposit, Some(_)) => self.account.deposit_on(amount, date),
            (TransactionKind::Withdrawal, None) => self.account.withdraw(amount),
            (TransactionKind::Withdrawal, Some(_)) => self.account.withdraw_on(amount, date),
        };

        match result {
            Ok(transaction) => {
                debug!(
                    kind = %kind,
                    amount = transaction.amount,
                    date = %transaction.date,
                    balance = transaction.balance,
                    "transaction recorded"
                );
                Ok(transaction)
            }
            Err(err) => {
                // Callers report rejections themselves
                debug!(kind = %kind, amount, error = %err, "operation rejected");
                Err(err.into())
            }
        }
    }

    /// Apply operations in order. Rejected operations are collected and,
    /// unless `stop_on_error` is set, the remaining ones still run.
    pub fn replay<'a, I>(&mut self, operations: I, stop_on_error: bool) -> ReplayReport
    where
        I: IntoIterator<Item = &'a Operation>,
    {
        let mut report = ReplayReport::default();

        for (index, operation) in operations.into_iter().enumerate() {
            match self.apply(operation) {
                Ok(_) => report.applied += 1,
                Err(error) => {
                    report.rejected.push(Rejection {
                        index,
                        operation: *operation,
                        error,
                    });
                    if stop_on_error {
                        break;
                    }
                }
            }
        }

        info!(
            applied = report.applied,
            rejected = report.rejected.len(),
            balance = self.account.balance(),
            "replay finished"
        );
        report
    }
}
