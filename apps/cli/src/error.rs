//! Error types for the CLI.

use zeikomi_core::CoreError;
use zeikomi_input::ParseError;

/// Why a single basket line was rejected.
#[derive(Debug, thiserror::Error)]
pub enum BasketError {
    #[error("{0}")]
    Parse(#[from] ParseError),

    #[error("{0}")]
    Core(#[from] CoreError),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
