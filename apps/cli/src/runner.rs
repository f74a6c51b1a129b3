//! # Runner
//!
//! One basket per line in, one line out. A rejected basket prints an
//! `error:` line in its place so output stays aligned with input.

use std::io::{self, Write};

use tracing::{debug, warn};
use zeikomi_core::{derive_breakdown, derive_total_price, OrderInput};
use zeikomi_input::parse_basket;

use crate::config::InputFormat;
use crate::error::BasketError;

/// Counts reported once the input is exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub processed: usize,
    pub failed: usize,
}

/// Evaluates basket lines in a fixed input format.
#[derive(Debug, Clone, Copy)]
pub struct Runner {
    format: InputFormat,
    breakdown: bool,
}

impl Runner {
    pub fn new(format: InputFormat, breakdown: bool) -> Self {
        Self { format, breakdown }
    }

    /// Evaluates one basket and renders its output line.
    pub fn evaluate(&self, line: &str) -> Result<String, BasketError> {
        let inputs: Vec<OrderInput> = match self.format {
            InputFormat::Code => parse_basket(line)?,
            InputFormat::Json => serde_json::from_str(line)?,
        };

        if self.breakdown {
            let breakdown = derive_breakdown(&inputs)?;
            Ok(serde_json::to_string(&breakdown)?)
        } else {
            Ok(derive_total_price(&inputs)?.amount().to_string())
        }
    }

    /// Evaluates every non-blank line, writing one output line per basket.
    ///
    /// Only I/O failures abort the run; rejected baskets are counted.
    pub fn run<I, W>(&self, lines: I, out: &mut W) -> io::Result<RunSummary>
    where
        I: IntoIterator<Item = io::Result<String>>,
        W: Write,
    {
        let mut summary = RunSummary::default();

        for line in lines {
            let line = line?;
            let basket = line.trim();
            if basket.is_empty() {
                continue;
            }

            summary.processed += 1;
            match self.evaluate(basket) {
                Ok(output) => {
                    debug!(basket, output = %output, "Basket evaluated");
                    writeln!(out, "{output}")?;
                }
                Err(e) => {
                    summary.failed += 1;
                    warn!(basket, error = %e, "Basket rejected");
                    writeln!(out, "error: {e}")?;
                }
            }
        }

        Ok(summary)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
