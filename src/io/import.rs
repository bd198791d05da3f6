use anyhow::Result;
use chrono::NaiveDate;
use serde::Deserialize;
use std::io::Read;
use tracing::info;

use crate::application::{AppError, LedgerService, Operation};
use crate::domain::{parse_amount, TransactionKind};

/// Result of an import operation
#[derive(Debug, Clone, Default)]
pub struct ImportResult {
    pub imported: usize,
    pub skipped: usize,
    pub errors: Vec<ImportError>,
}

/// Error that occurred during import
#[derive(Debug, Clone)]
pub struct ImportError {
    pub line: usize,
    pub field: Option<String>,
    pub error: String,
}

/// Options for import operations
#[derive(Debug, Clone, Default)]
pub struct ImportOptions {
    /// Apply to a scratch copy of the account; the real one is left untouched
    pub dry_run: bool,
    /// Skip every row after the first failing one
    pub stop_on_error: bool,
}

/// One row of an operations file: `type,amount,date`.
#[derive(Debug, Deserialize)]
struct OperationRecord {
    #[serde(rename = "type", alias = "kind")]
    kind: String,
    amount: String,
    #[serde(default)]
    date: Option<String>,
}

/// Importer for replaying operation files into an account
pub struct Importer<'a> {
    service: &'a mut LedgerService,
}

impl<'a> Importer<'a> {
    pub fn new(service: &'a mut LedgerService) -> Self {
        Self { service }
    }

    /// Import operations from CSV with a `type,amount,date` header.
    /// A blank or missing date books the operation today.
    ///
    /// Rows are parsed first, then replayed through the service in file
    /// order. With `stop_on_error`, only the first failing row (parse error
    /// or rejection) is reported and every row after it is skipped.
    pub fn import_operations_csv<R: Read>(
        &mut self,
        reader: R,
        options: ImportOptions,
    ) -> Result<ImportResult> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let mut rows = 0;
        let mut lines = Vec::new();
        let mut operations = Vec::new();
        let mut errors = Vec::new();

        for (line_num, record) in csv_reader.deserialize::<OperationRecord>().enumerate() {
            let line = line_num + 2; // +2 for header and 0-indexing
            rows += 1;

            if options.stop_on_error && !errors.is_empty() {
                continue;
            }

            let parsed = record
                .map_err(|e| ImportError {
                    line,
                    field: None,
                    error: format!("CSV parse error: {}", e),
                })
                .and_then(|record| parse_record(&record, line));

            match parsed {
                Ok(operation) => {
                    lines.push(line);
                    operations.push(operation);
                }
                Err(error) => errors.push(error),
            }
        }

        let mut scratch;
        let target: &mut LedgerService = if options.dry_run {
            scratch = LedgerService::with_account(self.service.account().clone());
            &mut scratch
        } else {
            &mut *self.service
        };

        let report = target.replay(&operations, options.stop_on_error);
        errors.extend(report.rejected.into_iter().map(|rejection| ImportError {
            line: lines[rejection.index],
            field: None,
            error: rejection.error.to_string(),
        }));
        errors.sort_by_key(|e| e.line);
        if options.stop_on_error {
            // A rejection can come before a later parse error; keep the first
            errors.truncate(1);
        }

        let result = ImportResult {
            imported: report.applied,
            skipped: rows - report.applied - errors.len(),
            errors,
        };

        info!(
            imported = result.imported,
            errors = result.errors.len(),
            skipped = result.skipped,
            dry_run = options.dry_run,
            "import finished"
        );
        Ok(result)
    }
}

fn parse_record(record: &OperationRecord, line: usize) -> Result<Operation, ImportError> {
    let field_error = |field: &str, error: AppError| ImportError {
        line,
        field: Some(field.to_string()),
        error: error.to_string(),
    };

    let kind = TransactionKind::from_str(&record.kind)
        .ok_or_else(|| field_error("type", AppError::UnknownOperation(record.kind.clone())))?;
    let amount = parse_amount(&record.amount)
        .map_err(|e| field_error("amount", AppError::InvalidAmount(e.to_string())))?;
    let date = parse_date(record.date.as_deref().unwrap_or(""))
        .map_err(|e| field_error("date", e))?;

    Ok(Operation { kind, amount, date })
}

/// Parse an operation date: `YYYY-MM-DD` or statement style `DD/MM/YYYY`.
/// A blank value means "no date given".
pub fn parse_date(input: &str) -> Result<Option<NaiveDate>, AppError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(input, "%d/%m/%Y"))
        .map(Some)
        .map_err(|_| {
            AppError::InvalidDate(format!(
                "'{}' (expected YYYY-MM-DD or DD/MM/YYYY)",
                input
            ))
        })
}
