// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use bankbook::domain::{today, Account};
use chrono::NaiveDate;

/// Helper to parse a date string into a NaiveDate
pub fn parse_date(date_str: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
}

pub fn tomorrow() -> NaiveDate {
    today().succ_opt().unwrap()
}

/// Test fixture: the sample statement scenario
/// (deposit 1000 on 10/01/2012, deposit 2000 on 13/01/2012, withdraw 500 on 14/01/2012)
pub fn sample_account() -> Result<Account> {
    let mut account = Account::new();
    account.deposit_on(1000, Some(parse_date("2012-01-10")))?;
    account.deposit_on(2000, Some(parse_date("2012-01-13")))?;
    account.withdraw_on(500, Some(parse_date("2012-01-14")))?;
    Ok(account)
}

/// Account funded with a single deposit dated today
pub fn funded_account(amount: i64) -> Result<Account> {
    let mut account = Account::new();
    account.deposit(amount)?;
    Ok(account)
}
