use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{stdin, stdout, Read, Write};

use crate::application::{LedgerService, Operation};
use crate::domain::today;
use crate::io::{Exporter, ImportOptions, Importer};

mod logger;

pub use logger::init_cli_logger;

/// Bankbook - single account ledger
#[derive(Parser)]
#[command(name = "bankbook")]
#[command(about = "A single-account bank ledger: deposits, withdrawals and statements")]
#[command(version)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the sample scenario and show how invalid operations are rejected
    Demo,

    /// Replay operations from CSV (type,amount,date) and print the statement
    Replay {
        /// Input file (stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,

        /// Statement format: text, csv, json
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Validate the operations without producing a statement
        #[arg(long)]
        dry_run: bool,

        /// Stop at the first rejected operation
        #[arg(long)]
        stop_on_error: bool,
    },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        init_cli_logger(self.verbose);

        match self.command {
            Commands::Demo => run_demo_command(),
            Commands::Replay {
                input,
                format,
                output,
                dry_run,
                stop_on_error,
            } => run_replay_command(
                input.as_deref(),
                &format,
                output.as_deref(),
                dry_run,
                stop_on_error,
            ),
        }
    }
}

fn run_demo_command() -> Result<()> {
    let date = |y, m, d| {
        NaiveDate::from_ymd_opt(y, m, d).ok_or_else(|| anyhow::anyhow!("Invalid date"))
    };
    let scenario = [
        Operation::deposit(1000).on(date(2012, 1, 10)?),
        Operation::deposit(2000).on(date(2012, 1, 13)?),
        Operation::withdrawal(500).on(date(2012, 1, 14)?),
    ];

    // Write through a locked handle so a closed pipe is an error, not a panic
    let mut out = stdout().lock();
    let mut service = LedgerService::new();
    writeln!(out, "Executing sample scenario...\n")?;
    for operation in &scenario {
        let tx = service.apply(operation)?;
        writeln!(
            out,
            "  {} {} on {}",
            operation.kind.label(),
            operation.amount,
            tx.formatted_date()
        )?;
    }

    writeln!(out, "\nCurrent balance: {}", service.account().balance())?;
    writeln!(out, "\n--- Bank Statement ---")?;
    service.account().write_statement(&mut out)?;

    writeln!(out, "\n=== Rejected operations ===")?;
    let tomorrow = today()
        .succ_opt()
        .ok_or_else(|| anyhow::anyhow!("Invalid date"))?;
    let invalid = [
        ("Depositing a negative amount", Operation::deposit(-100)),
        ("Withdrawing more than the balance", Operation::withdrawal(10000)),
        (
            "Depositing with a future date",
            Operation::deposit(100).on(tomorrow),
        ),
    ];
    for (label, operation) in &invalid {
        match service.apply(operation) {
            Ok(_) => writeln!(out, "  {}: unexpectedly accepted", label)?,
            Err(e) => writeln!(out, "  {}: {}", label, e)?,
        }
    }

    writeln!(
        out,
        "\nBalance unchanged: {} ({} transactions)",
        service.account().balance(),
        service.account().transaction_count()
    )?;
    out.flush()?;
    Ok(())
}

fn run_replay_command(
    input: Option<&str>,
    format: &str,
    output: Option<&str>,
    dry_run: bool,
    stop_on_error: bool,
) -> Result<()> {
    if !matches!(format, "text" | "csv" | "json") {
        anyhow::bail!("Invalid format '{}'. Valid formats: text, csv, json", format);
    }

    let reader: Box<dyn Read> = match input {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("Failed to open input file: {}", path))?;
            Box::new(file)
        }
        None => Box::new(stdin()),
    };

    let mut service = LedgerService::new();
    let result = Importer::new(&mut service).import_operations_csv(
        reader,
        ImportOptions {
            dry_run,
            stop_on_error,
        },
    )?;

    for error in &result.errors {
        match &error.field {
            Some(field) => eprintln!("  line {} ({}): {}", error.line, field, error.error),
            None => eprintln!("  line {}: {}", error.line, error.error),
        }
    }
    eprintln!(
        "Applied {} operations ({} rejected, {} skipped)",
        result.imported,
        result.errors.len(),
        result.skipped
    );

    if dry_run {
        eprintln!("Dry run: no statement written");
        return Ok(());
    }
    if stop_on_error && !result.errors.is_empty() {
        anyhow::bail!("Replay stopped at the first rejected operation");
    }

    let writer: Box<dyn Write> = match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path))?;
            Box::new(file)
        }
        None => Box::new(stdout()),
    };

    let exporter = Exporter::new(service.account());
    match format {
        "csv" => {
            exporter.export_statement_csv(writer)?;
        }
        "json" => {
            exporter.export_statement_json(writer)?;
        }
        _ => {
            exporter.export_statement_text(writer)?;
        }
    }

    if let Some(path) = output {
        eprintln!("Statement written to {}", path);
    }
    Ok(())
}
