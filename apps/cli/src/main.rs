//! # Zeikomi CLI
//!
//! Prints the tax-inclusive total of each basket, one per line.
//!
//! ## Usage
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  $ zeikomi BTDD500 DTDD400:BTDD199                                      │
//! │  550                                                                    │
//! │  647                                                                    │
//! │                                                                         │
//! │  $ printf 'BTDD500\nXTDD1\n' | zeikomi                                  │
//! │  550                                                                    │
//! │  error: unknown product code in 'XTDD1'                                 │
//! │                                                                         │
//! │  Exit status is 1 when any basket was rejected.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod error;
mod runner;

use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{CliConfig, InputFormat};
use crate::runner::Runner;

#[derive(Debug, Parser)]
#[command(name = "zeikomi", version, about = "Tax-inclusive basket totals")]
struct Cli {
    /// Baskets to evaluate; read from stdin, one per line, when omitted
    baskets: Vec<String>,

    /// Input line format
    #[arg(long, value_enum)]
    format: Option<InputFormat>,

    /// Print the full pipeline breakdown as JSON
    #[arg(long, overrides_with = "no_breakdown")]
    breakdown: bool,

    /// Print bare totals even when configuration enables the breakdown
    #[arg(long, overrides_with = "breakdown")]
    no_breakdown: bool,

    /// Config file (defaults to ./zeikomi.toml when present)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

impl Cli {
    /// The breakdown setting given on the command line, if any. The last of
    /// `--breakdown` / `--no-breakdown` wins.
    fn breakdown_override(&self) -> Option<bool> {
        match (self.breakdown, self.no_breakdown) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = CliConfig::load(cli.config.as_deref())
        .context("Failed to load configuration")?
        .with_overrides(cli.format, cli.breakdown_override());

    init_tracing(&config.log_filter);
    info!(
        format = ?config.input_format,
        breakdown = config.breakdown,
        "Configuration loaded"
    );

    let runner = Runner::new(config.input_format, config.breakdown);
    let mut stdout = io::stdout().lock();

    let summary = if cli.baskets.is_empty() {
        runner.run(io::stdin().lock().lines(), &mut stdout)
    } else {
        runner.run(cli.baskets.into_iter().map(Ok), &mut stdout)
    }
    .context("Failed to process input")?;

    info!(
        processed = summary.processed,
        failed = summary.failed,
        "Run complete"
    );

    Ok(if summary.failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Logs go to stderr; `RUST_LOG` takes precedence over the configured filter.
fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();
}
