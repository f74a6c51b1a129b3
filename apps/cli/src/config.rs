//! CLI configuration module.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags
//! 2. Environment variables (`ZEIKOMI_*`)
//! 3. Config file (`zeikomi.toml`, or the path given with `--config`)
//! 4. Defaults (this file)

use std::path::Path;

use clap::ValueEnum;
use config::{Config, Environment, File};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

/// Config file read from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "zeikomi.toml";

/// Log filter used when neither `RUST_LOG` nor configuration sets one.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// How each input line describes a basket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    /// Compact order codes, e.g. `DTDD400:BTDD199`
    #[default]
    Code,
    /// A JSON array of order records
    Json,
}

/// CLI configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CliConfig {
    /// tracing-subscriber filter directive
    pub log_filter: String,

    /// Input line format
    pub input_format: InputFormat,

    /// Print a JSON pipeline breakdown instead of the bare total
    pub breakdown: bool,
}

impl CliConfig {
    /// Loads defaults, then the config file, then `ZEIKOMI_*` variables.
    ///
    /// The default config file is optional; an explicit `path` must exist.
    /// The log filter is parsed here so a bad directive stops the run before
    /// any basket is read.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let config: CliConfig = Config::builder()
            .set_default("log_filter", DEFAULT_LOG_FILTER)?
            .set_default("input_format", "code")?
            .set_default("breakdown", false)?
            .add_source(file)
            .add_source(Environment::with_prefix("ZEIKOMI"))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Checks values the deserializer cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        EnvFilter::try_new(&self.log_filter).map_err(|source| ConfigError::InvalidLogFilter {
            filter: self.log_filter.clone(),
            source,
        })?;
        Ok(())
    }

    /// Applies command-line overrides. `None` keeps the configured value.
    pub fn with_overrides(mut self, format: Option<InputFormat>, breakdown: Option<bool>) -> Self {
        if let Some(format) = format {
            self.input_format = format;
        }
        if let Some(breakdown) = breakdown {
            self.breakdown = breakdown;
        }
        self
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(#[from] config::ConfigError),

    #[error("Invalid log filter '{filter}': {source}")]
    InvalidLogFilter {
        filter: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },
}
