use chrono::NaiveDate;
use thiserror::Error;

use super::{Amount, TransactionKind};

/// Why the ledger rejected a deposit or withdrawal.
/// A rejected operation never changes the ledger.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidOperation {
    #[error("{} amount must be positive. Provided: {amount}", .kind.label())]
    NonPositiveAmount {
        kind: TransactionKind,
        amount: Amount,
    },

    #[error("Transaction date cannot be null")]
    MissingDate,

    #[error("Transaction date cannot be in the future: {date}")]
    FutureDate { date: NaiveDate, today: NaiveDate },

    #[error("Insufficient funds. Current balance: {balance}, Withdrawal amount: {requested}")]
    InsufficientFunds { balance: Amount, requested: Amount },

    #[error("{} of {amount} would overflow the balance ({balance})", .kind.label())]
    BalanceOverflow {
        kind: TransactionKind,
        balance: Amount,
        amount: Amount,
    },
}
