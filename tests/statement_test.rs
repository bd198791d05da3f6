mod common;

use anyhow::Result;
use bankbook::domain::{Account, STATEMENT_HEADER};
use common::sample_account;
use std::io::{self, Write};

#[test]
fn test_sample_statement_text() -> Result<()> {
    let account = sample_account()?;

    let expected = "\
Date       || Amount || Balance
14/01/2012 || -500 || 2500
13/01/2012 || 2000 || 3000
10/01/2012 || 1000 || 1000
";
    assert_eq!(account.statement().to_string(), expected);
    Ok(())
}

#[test]
fn test_empty_account_statement() {
    let account = Account::new();
    let text = account.statement().to_string();

    assert_eq!(text.lines().collect::<Vec<_>>(), vec![STATEMENT_HEADER]);
}

#[test]
fn test_rendering_does_not_mutate() -> Result<()> {
    let account = sample_account()?;
    let before = account.clone();

    let _ = account.statement().to_string();
    account.print_statement()?;

    assert_eq!(account, before);
    Ok(())
}

#[test]
fn test_failed_operations_do_not_appear_on_statement() -> Result<()> {
    let mut account = sample_account()?;
    let before = account.statement().to_string();

    assert!(account.deposit(-100).is_err());
    assert!(account.withdraw(10000).is_err());

    assert_eq!(account.statement().to_string(), before);
    Ok(())
}

/// Writer standing in for a closed pipe
struct ClosedPipe;

impl Write for ClosedPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_write_statement_to_buffer() -> Result<()> {
    let account = sample_account()?;
    let mut buffer = Vec::new();

    account.write_statement(&mut buffer)?;

    assert_eq!(String::from_utf8(buffer)?, account.statement().to_string());
    Ok(())
}

#[test]
fn test_closed_output_is_an_error() -> Result<()> {
    let account = sample_account()?;

    let err = account.write_statement(ClosedPipe).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    Ok(())
}
