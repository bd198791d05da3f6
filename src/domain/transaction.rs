use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Amount;

/// Date format used on statements (day/month/year).
pub const STATEMENT_DATE_FORMAT: &str = "%d/%m/%Y";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money paid into the account
    Deposit,
    /// Money taken out of the account
    Withdrawal,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "deposit",
            TransactionKind::Withdrawal => "withdrawal",
        }
    }

    /// Accepts the operation names used in operation files and on the
    /// command line. `withdraw` is accepted as an alias of `withdrawal`.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "deposit" => Some(TransactionKind::Deposit),
            "withdraw" | "withdrawal" => Some(TransactionKind::Withdrawal),
            _ => None,
        }
    }

    /// Capitalized label used in error messages, e.g. "Deposit amount must be positive".
    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "Deposit",
            TransactionKind::Withdrawal => "Withdrawal",
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A transaction is one recorded deposit or withdrawal.
/// Transactions are immutable once recorded: the ledger only hands out copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Calendar date the caller booked the transaction on
    pub date: NaiveDate,
    /// Signed amount: positive for deposits, negative for withdrawals
    pub amount: Amount,
    /// Account balance immediately after this transaction
    pub balance: Amount,
}

impl Transaction {
    pub fn new(date: NaiveDate, amount: Amount, balance: Amount) -> Self {
        Self {
            date,
            amount,
            balance,
        }
    }

    pub fn kind(&self) -> TransactionKind {
        if self.amount < 0 {
            TransactionKind::Withdrawal
        } else {
            TransactionKind::Deposit
        }
    }

    pub fn formatted_date(&self) -> String {
        self.date.format(STATEMENT_DATE_FORMAT).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_kind_follows_amount_sign() {
        assert_eq!(
            Transaction::new(date(2012, 1, 10), 1000, 1000).kind(),
            TransactionKind::Deposit
        );
        assert_eq!(
            Transaction::new(date(2012, 1, 14), -500, 2500).kind(),
            TransactionKind::Withdrawal
        );
    }

    #[test]
    fn test_formatted_date_is_day_month_year() {
        let tx = Transaction::new(date(2012, 1, 4), 100, 100);
        assert_eq!(tx.formatted_date(), "04/01/2012");
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!(
            TransactionKind::from_str("Deposit"),
            Some(TransactionKind::Deposit)
        );
        assert_eq!(
            TransactionKind::from_str("withdraw"),
            Some(TransactionKind::Withdrawal)
        );
        assert_eq!(
            TransactionKind::from_str(" WITHDRAWAL "),
            Some(TransactionKind::Withdrawal)
        );
        assert_eq!(TransactionKind::from_str("transfer"), None);
    }
}
