//! # Parse Errors
//!
//! One variant per field of the item code, each carrying the offending item
//! so the runner can echo it back.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("order is empty")]
    EmptyInput,

    #[error("unknown product code in '{item}'")]
    UnknownProductCode { item: String },

    #[error("unknown service code in '{item}'")]
    UnknownServiceCode { item: String },

    #[error("unknown delivery method code in '{item}'")]
    UnknownDeliveryMethodCode { item: String },

    #[error("unknown delivery destination code in '{item}'")]
    UnknownDestinationCode { item: String },

    #[error("invalid price in '{item}'")]
    InvalidPrice { item: String },
}

pub type ParseResult<T> = Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(ParseError::EmptyInput.to_string(), "order is empty");
        let err = ParseError::InvalidPrice {
            item: "BTDD5x0".to_string(),
        };
        assert_eq!(err.to_string(), "invalid price in 'BTDD5x0'");
    }
}
