use chrono::{Local, NaiveDate};
use std::io::{self, Write};

use super::{Amount, InvalidOperation, Statement, Transaction, TransactionKind};

/// Today's calendar date in the local timezone.
/// Transaction dates are compared against this, never against a time of day.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// A single bank account: its balance plus the append-only history of
/// transactions that produced it.
///
/// The balance always equals the `balance` of the last recorded transaction,
/// or 0 for a new account. Every mutating operation either records exactly
/// one transaction or leaves the account untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Account {
    balance: Amount,
    transactions: Vec<Transaction>,
}

impl Account {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deposit `amount` dated today.
    pub fn deposit(&mut self, amount: Amount) -> Result<Transaction, InvalidOperation> {
        let today = today();
        self.record(TransactionKind::Deposit, amount, Some(today), today)
    }

    /// Deposit `amount` on `date`. A `None` date is rejected, as is any date
    /// after today.
    pub fn deposit_on(
        &mut self,
        amount: Amount,
        date: Option<NaiveDate>,
    ) -> Result<Transaction, InvalidOperation> {
        self.record(TransactionKind::Deposit, amount, date, today())
    }

    /// Withdraw `amount` dated today.
    pub fn withdraw(&mut self, amount: Amount) -> Result<Transaction, InvalidOperation> {
        let today = today();
        self.record(TransactionKind::Withdrawal, amount, Some(today), today)
    }

    /// Withdraw `amount` on `date`. Same validation as [`Account::deposit_on`],
    /// then the amount must not exceed the current balance.
    pub fn withdraw_on(
        &mut self,
        amount: Amount,
        date: Option<NaiveDate>,
    ) -> Result<Transaction, InvalidOperation> {
        self.record(TransactionKind::Withdrawal, amount, date, today())
    }

    pub fn balance(&self) -> Amount {
        self.balance
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    /// Recorded transactions, oldest first.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn last_transaction(&self) -> Option<&Transaction> {
        self.transactions.last()
    }

    pub fn statement(&self) -> Statement<'_> {
        Statement::new(&self.transactions)
    }

    /// Write the statement to `writer`.
    pub fn write_statement<W: Write>(&self, mut writer: W) -> io::Result<()> {
        write!(writer, "{}", self.statement())?;
        writer.flush()
    }

    /// Write the statement to stdout. A closed stdout is reported as an
    /// error instead of panicking.
    pub fn print_statement(&self) -> io::Result<()> {
        self.write_statement(io::stdout().lock())
    }

    fn record(
        &mut self,
        kind: TransactionKind,
        amount: Amount,
        date: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Result<Transaction, InvalidOperation> {
        if amount <= 0 {
            return Err(InvalidOperation::NonPositiveAmount { kind, amount });
        }
        let date = validate_date(date, today)?;

        let (signed_amount, new_balance) = match kind {
            TransactionKind::Deposit => (amount, self.balance.checked_add(amount)),
            TransactionKind::Withdrawal => {
                if amount > self.balance {
                    return Err(InvalidOperation::InsufficientFunds {
                        balance: self.balance,
                        requested: amount,
                    });
                }
                (-amount, self.balance.checked_sub(amount))
            }
        };
        let new_balance = new_balance.ok_or(InvalidOperation::BalanceOverflow {
            kind,
            balance: self.balance,
            amount,
        })?;

        let transaction = Transaction::new(date, signed_amount, new_balance);
        self.balance = new_balance;
        self.transactions.push(transaction);
        Ok(transaction)
    }
}

fn validate_date(date: Option<NaiveDate>, today: NaiveDate) -> Result<NaiveDate, InvalidOperation> {
    let date = date.ok_or(InvalidOperation::MissingDate)?;
    if date > today {
        return Err(InvalidOperation::FutureDate { date, today });
    }
    Ok(date)
}
