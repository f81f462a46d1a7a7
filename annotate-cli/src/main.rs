//! # Annotate CLI
//!
//! Runs `converter(value)`, which calls `checker(value)`. A zero value fails
//! in `checker`, gets wrapped again in `converter`, and the final error's
//! trace is printed most recent call site first.
//!
//! Usage:
//!   annotate
//!   annotate --value 21
//!   annotate --json --log-level trace

mod demo;
mod logging;

use annotate_error::root_cause;
use clap::{Parser, ValueEnum};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "annotate")]
#[command(author, version, about = "Annotate - follow an error through its call sites")]
struct Cli {
    /// Value handed to the converter; zero fails
    #[arg(short, long, default_value = "0")]
    value: i64,

    /// Print the annotated error as JSON instead of its trace
    #[arg(long)]
    json: bool,

    /// Log level (overrides ANNOTATE_LOG)
    #[arg(long, value_enum)]
    log_level: Option<LogLevel>,
}

/// Verbosity accepted by `--log-level`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    logging::init_logging(cli.log_level)?;

    let err = match demo::converter(cli.value) {
        Ok(converted) => {
            println!("{}", converted);
            return Ok(ExitCode::SUCCESS);
        }
        Err(err) => err,
    };

    tracing::info!(code = %err.code(), "converter failed");

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&err)?);
    } else {
        println!("{}", err.print_trace());
    }

    eprintln!("Error: {}", err);
    eprintln!("Caused by: {}", root_cause(&err));
    Ok(ExitCode::FAILURE)
}
